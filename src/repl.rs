//! Interactive prompt loop.
//!
//! The outer loop asks for a CSV path, the inner loop for formulas. `exit`
//! ends the program from either loop and `back` returns from the inner loop
//! to the outer one. Both keywords are case-insensitive. End of input is
//! treated like `exit`.

use csvsheet_core::Session;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub const PATH_QUESTION: &str = "Enter CSV file path: ";
pub const FORMULA_QUESTION: &str = "Enter Spreadsheet Formula (or 'back' to load a new CSV): ";

/// Writes a question and reads one trimmed line of answer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompt { input, output }
    }

    /// Returns `None` at end of input.
    pub fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}

enum Flow {
    Back,
    Exit,
}

/// Run the prompt loops until the user exits. Errors are reported on `err`
/// and never end the loop; only I/O failures on the prompt itself do.
pub fn run<R, W, E>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
    err: &mut E,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        let Some(input) = prompt.ask(PATH_QUESTION)? else {
            return Ok(());
        };

        if input.eq_ignore_ascii_case("exit") {
            writeln!(prompt.output(), "Exiting program.")?;
            return Ok(());
        }

        if let Err(e) = session.load_file(Path::new(&input)) {
            writeln!(err, "{}", e)?;
            continue;
        }
        if let Err(e) = session.render(prompt.output()) {
            writeln!(err, "Error: {}", e)?;
        }
        writeln!(prompt.output())?;

        match formula_loop(session, prompt, err)? {
            Flow::Back => continue,
            Flow::Exit => return Ok(()),
        }
    }
}

fn formula_loop<R, W, E>(
    session: &mut Session,
    prompt: &mut Prompt<R, W>,
    err: &mut E,
) -> io::Result<Flow>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    loop {
        let Some(input) = prompt.ask(FORMULA_QUESTION)? else {
            return Ok(Flow::Exit);
        };

        if input.eq_ignore_ascii_case("back") {
            return Ok(Flow::Back);
        }
        if input.eq_ignore_ascii_case("exit") {
            writeln!(prompt.output(), "Exiting program.")?;
            return Ok(Flow::Exit);
        }

        match session.evaluate(&input) {
            Ok(result) => writeln!(prompt.output(), "Result: {}", result)?,
            Err(e) => writeln!(err, "Error: {}", e)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct Cleanup(std::path::PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn write_csv(tag: &str, content: &str) -> (String, Cleanup) {
        let path = std::env::temp_dir().join(format!(
            "csvsheet_repl_{}_{}_{:?}.csv",
            tag,
            std::process::id(),
            std::thread::current().id(),
        ));
        std::fs::write(&path, content).unwrap();
        (path.display().to_string(), Cleanup(path))
    }

    fn run_script(script: &str) -> (String, String) {
        let mut session = Session::new();
        let mut prompt = Prompt::new(Cursor::new(script.to_string()), Vec::new());
        let mut err = Vec::new();
        run(&mut session, &mut prompt, &mut err).unwrap();
        (
            String::from_utf8(prompt.output).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_exit_at_path_prompt() {
        let (out, err) = run_script("EXIT\n");
        assert_eq!(out, format!("{}Exiting program.\n", PATH_QUESTION));
        assert!(err.is_empty());
    }

    #[test]
    fn test_end_of_input_stops_quietly() {
        let (out, _) = run_script("");
        assert_eq!(out, PATH_QUESTION);
    }

    #[test]
    fn test_load_evaluate_back_exit() {
        let (path, _cleanup) = write_csv("flow", "n\n10\n20\n30\n");
        let script = format!("{}\n=SUM(A2:A4)\n=avg(a2:a4)\nback\nexit\n", path);
        let (out, err) = run_script(&script);

        assert!(err.is_empty(), "{}", err);
        assert!(out.contains("| n  |"));
        assert!(out.contains("Result: 60\n"));
        assert!(out.contains("Result: 20\n"));
        assert_eq!(out.matches(PATH_QUESTION).count(), 2);
        assert!(out.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_errors_do_not_end_the_loops() {
        let (path, _cleanup) = write_csv("errors", "1,2\n");
        let script = format!("notes.txt\n{}\n=FOO(A1:A2)\n=MIN(A1:B1)\nexit\n", path);
        let (out, err) = run_script(&script);

        assert!(err.contains("Not a '.csv' file: notes.txt"));
        assert!(err.contains("Error: Unsupported Formula! 'FOO'"));
        assert!(out.contains("Result: 1\n"));
    }

    #[test]
    fn test_not_applicable_result() {
        let (path, _cleanup) = write_csv("na", "1\n");
        let script = format!("{}\n=SUM(A1:A2)\nexit\n", path);
        let (out, _) = run_script(&script);
        assert!(out.contains("Result: Not Applicable\n"));
    }
}
