//! Optional user configuration (`config.toml`).
//!
//! Looked up in the platform config dir, e.g. `~/.config/csvsheet/config.toml`
//! on Linux. A missing file is not an error; anything wrong with an existing
//! file is reported as a warning and the defaults are used.
//!
//! ```toml
//! delimiter = ";"          # omit to detect per file
//! record_separator = "\n"
//! max_table_width = 130
//! ```

use csvsheet_core::SessionOptions;
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

const MAX_CONFIG_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    delimiter: Option<char>,
    record_separator: Option<char>,
    max_table_width: Option<usize>,
}

/// Load session options from the user config file, if there is one.
pub fn load_options() -> (SessionOptions, Vec<String>) {
    load_options_from(user_config_path().as_deref())
}

/// Load session options from `path`. Returns the options and any warnings.
pub fn load_options_from(path: Option<&Path>) -> (SessionOptions, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();
    let Some(path) = path.filter(|p| p.exists()) else {
        return (SessionOptions::default(), warnings);
    };

    let file = match std::fs::metadata(path) {
        Ok(meta) if meta.len() > MAX_CONFIG_FILE_BYTES => {
            warnings.push(format!(
                "Refusing to read {}: file too large ({} bytes, max {})",
                path.display(),
                meta.len(),
                MAX_CONFIG_FILE_BYTES
            ));
            None
        }
        Ok(_) => match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<ConfigFile>(&content) {
                Ok(parsed) => Some(parsed),
                Err(err) => {
                    warnings.push(format!("Failed to parse {}: {}", path.display(), err));
                    None
                }
            },
            Err(err) => {
                warnings.push(format!("Failed to read {}: {}", path.display(), err));
                None
            }
        },
        Err(err) => {
            warnings.push(format!(
                "Failed to read metadata for {}: {}",
                path.display(),
                err
            ));
            None
        }
    };

    let options = build_options(file.unwrap_or_default(), &mut warnings);
    (options, warnings)
}

fn build_options(file: ConfigFile, warnings: &mut Vec<String>) -> SessionOptions {
    let mut options = SessionOptions::default();

    if let Some(sep) = file.record_separator {
        if sep == '"' || sep == '\r' {
            warnings.push(format!("Ignoring record_separator {:?}", sep));
        } else {
            options.record_separator = sep;
        }
    }

    if let Some(delimiter) = file.delimiter {
        if delimiter == '"' || delimiter == '\r' || delimiter == options.record_separator {
            warnings.push(format!(
                "Ignoring delimiter {:?}; detecting it per file instead",
                delimiter
            ));
        } else {
            options.delimiter = Some(delimiter);
        }
    }

    if let Some(width) = file.max_table_width {
        options.max_table_width = width;
    }

    options
}

fn user_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "csvsheet")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}
