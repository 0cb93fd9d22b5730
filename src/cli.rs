use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = crate::APP_NAME)]
#[command(version = crate::APP_VERSION)]
#[command(about = crate::APP_DESCRIPTION, long_about = None)]
pub struct Cli {
    /// Optional file holding the answers.
    /// If not provided, answers are read from standard input.
    pub answers: Option<PathBuf>,

    /// Write debug traces to stderr.
    #[arg(long)]
    pub log: bool,
}
