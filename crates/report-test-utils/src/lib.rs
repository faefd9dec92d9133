//! Shared test utilities for the report-miner workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixture`] - the sample ultrasound report and its expected extractions
//! - [`corpus`] - [`TestCorpus`] builder for on-disk report folders

pub mod corpus;
pub mod fixture;

pub use corpus::TestCorpus;
