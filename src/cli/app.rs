//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use super::commands;
use correos::output::OutputMode;

/// correos - Split a list of email addresses into valid and invalid files
#[derive(Parser, Debug)]
#[command(
    name = "correos",
    version,
    about = "Split a list of email addresses into valid and invalid files",
    long_about = "Reads a text file with one candidate email address per line.\n\n\
                  Blank lines are ignored. Valid addresses are written to \
                  correos_validos.txt and the rest to correos_invalidos.txt, \
                  both in the current directory."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output the summary in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Text file with one email address per line
    #[arg(value_name = "ARCHIVO")]
    pub input: PathBuf,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::partition(&cli.input, output_mode)
}
