//! report-miner CLI
//!
//! Extracts the clinical body of medical reports and prepares labelled
//! datasets from them.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        init_tracing()?;
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} report-miner CLI", "reports".green().bold());
            println!();
            println!("Run {} for available commands.", "reports --help".cyan());
            Ok(())
        }
    }
}

/// Diagnostics go to stderr so stdout stays scriptable.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| CliError::user(format!("Failed to set tracing subscriber: {}", e)))
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Extract {
            input,
            output,
            source,
        } => {
            let config = commands::resolve_config(&source)?;
            commands::run_extract(&input, &output, &config)
        }
        Commands::Dataset {
            input,
            labels,
            output,
        } => commands::run_dataset(&input, &labels, &output),
        Commands::Preprocess {
            input,
            output,
            source,
        } => {
            let config = commands::resolve_config(&source)?;
            commands::run_preprocess(&input, &output, &config)
        }
        Commands::Check { config } => commands::run_check(&config),
        Commands::Profiles { json } => commands::run_profiles(json),
    }
}
