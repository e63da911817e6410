//! csvsheet - load a CSV file, print it as a table and evaluate range formulas.

mod config;
mod logging;
mod repl;

use anyhow::Context;
use csvsheet_core::Session;
use std::io;

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let (options, warnings) = config::load_options();
    for warning in warnings {
        tracing::warn!("{}", warning);
    }

    let mut session = Session::with_options(options);
    let stdin = io::stdin();
    let mut prompt = repl::Prompt::new(stdin.lock(), io::stdout().lock());
    repl::run(&mut session, &mut prompt, &mut io::stderr()).context("terminal I/O failed")?;

    Ok(())
}
