//! Filesystem plumbing for report-miner
//!
//! Report discovery, line reading, atomic writes, format-agnostic config
//! loading and JSON-lines dataset records.

pub mod config;
pub mod corpus;
pub mod error;
pub mod io;
pub mod jsonl;

pub use config::ConfigStore;
pub use corpus::{ReportDocument, discover_reports};
pub use error::{Error, Result};
pub use jsonl::{DatasetRecord, read_jsonl, to_jsonl, write_jsonl};
