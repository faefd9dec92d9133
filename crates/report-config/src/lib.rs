//! Extraction and preprocessing configuration for report-miner.
//!
//! Configuration files (TOML, JSON or YAML) describe how to cut the clinical
//! body out of one family of reports. They are validated and compiled into
//! [`report_text::BodyExtractor`] / [`report_text::TextPreprocessor`] at load
//! time, so a bad marker list or regex fails before any document is read.

pub mod config;
pub mod error;
pub mod profiles;

pub use config::{
    CONFIG_SCHEMA, ExtractionConfig, MarkerSpec, PatternSpec, PreprocessConfig, ReportConfig,
    load_config,
};
pub use error::{Error, Result};
pub use profiles::ProfileRegistry;
