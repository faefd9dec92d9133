//! Error types for report-config

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] report_fs::Error),

    #[error("Invalid extraction settings: {0}")]
    Text(#[from] report_text::Error),

    #[error("Unknown config schema '{found}', expected '{expected}'")]
    UnknownSchema { found: String, expected: String },

    #[error("Unknown profile '{name}'. Available: {available}")]
    UnknownProfile { name: String, available: String },
}
