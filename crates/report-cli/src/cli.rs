//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// report-miner - Extract and prepare medical report text
#[derive(Parser, Debug)]
#[command(name = "reports")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (honours RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where the extraction settings come from.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// Config file (TOML, JSON or YAML)
    #[arg(short, long, env = "REPORTS_CONFIG", conflicts_with = "profile")]
    pub config: Option<PathBuf>,

    /// Built-in profile name (see `reports profiles`)
    #[arg(short, long)]
    pub profile: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Extract the clinical body of every report in a folder
    ///
    /// Each `<name>.txt` report is written to `<output>/<name>.txt` as a
    /// single space-joined line. Without --config or --profile the
    /// `ultrasound` profile is used.
    ///
    /// Examples:
    ///   reports extract -i data/txt -o data/processed
    ///   reports extract -i data/surgical -o out --profile surgical
    ///   reports extract -i data/txt -o out --config extraction.toml
    Extract {
        /// Folder of report text files
        #[arg(short, long)]
        input: PathBuf,

        /// Destination folder, created if missing
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        source: ConfigSource,
    },

    /// Build a JSON-lines dataset from extracted bodies and a label map
    Dataset {
        /// Folder of extracted body files
        #[arg(short, long)]
        input: PathBuf,

        /// Label map: a `.jsonl` file with one `{"id": label}` object per
        /// line, or an `id = label` table in TOML, JSON or YAML
        #[arg(short, long)]
        labels: PathBuf,

        /// Destination `.jsonl` file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Apply the preprocessing section of a config to a dataset
    Preprocess {
        /// Source `.jsonl` dataset
        #[arg(short, long)]
        input: PathBuf,

        /// Destination `.jsonl` dataset
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        source: ConfigSource,
    },

    /// Validate a config file
    Check {
        /// Config file to validate
        #[arg(short, long)]
        config: PathBuf,
    },

    /// List the built-in profiles
    Profiles {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
