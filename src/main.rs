use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

mod cli;
mod error;
mod questionnaire;
mod scanner;

use error::InputError;

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

fn main() {
    ctrlc::set_handler(|| {
        eprintln!("\nInterrupted.");
        process::exit(130);
    })
    .expect("Error setting Ctrl-C handler");

    let cli = cli::Cli::parse();

    if cli.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(io::stderr)
            .init();
    }

    if let Err(err) = run(&cli) {
        tracing::error!(exit_code = err.exit_code(), "{err}");
        eprintln!("\nerror: {err}");
        process::exit(err.exit_code());
    }
}

fn run(cli: &cli::Cli) -> Result<(), InputError> {
    match &cli.answers {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            questionnaire::run_with_reader(reader, io::stdout().lock())?;
        }
        None => {
            questionnaire::interactive()?;
        }
    }
    Ok(())
}
