//! Configuration types and loading
//!
//! A config file looks like:
//!
//! ```toml
//! schema = "report-miner/1"
//!
//! [extraction]
//! body_begin_marker = "RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION"
//! body_end_markers = ["Case dictated by", "Electronically signed by", "Dossier/MRN:"]
//! body_between_start_markers = ["Hôpital de Montréal pour Enfants / Montreal Children's Hospital"]
//! body_between_end_markers = ["Rapport/Report"]
//! patterns_to_remove = ["User:", { regex = "Page \\d of \\d", case_insensitive = true }]
//! excluded_files = ["132 U.txt"]
//!
//! [preprocessing]
//! patterns_to_remove = ["FINDINGS[:]?", "(IMPRESSION|[Ii]mpression)s?:?"]
//! lowercase = true
//! split_measure_text = true
//! ```

use std::path::Path;

use report_fs::ConfigStore;
use report_text::{BodyExtractor, MarkerPairs, MarkerSet, Pattern, TextPreprocessor};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Value of the top-level `schema` key every config must carry.
pub const CONFIG_SCHEMA: &str = "report-miner/1";

/// One marker or a list of alternative markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerSpec {
    One(String),
    Any(Vec<String>),
}

impl MarkerSpec {
    /// Normalize into a [`MarkerSet`]. An empty list or a blank marker is
    /// rejected.
    pub fn to_marker_set(&self) -> Result<MarkerSet> {
        let markers = match self {
            Self::One(marker) => MarkerSet::new([marker.as_str()])?,
            Self::Any(markers) => MarkerSet::new(markers.iter().cloned())?,
        };
        Ok(markers)
    }
}

impl From<&str> for MarkerSpec {
    fn from(marker: &str) -> Self {
        Self::One(marker.to_string())
    }
}

impl From<Vec<&str>> for MarkerSpec {
    fn from(markers: Vec<&str>) -> Self {
        Self::Any(markers.into_iter().map(String::from).collect())
    }
}

/// A line-removal pattern: a plain string is a literal substring, a table
/// with a `regex` key is a regular expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
    Literal(String),
    Regex {
        regex: String,
        #[serde(default)]
        case_insensitive: bool,
    },
}

impl PatternSpec {
    pub fn to_pattern(&self) -> Result<Pattern> {
        match self {
            Self::Literal(text) => Ok(Pattern::literal(text.as_str())),
            Self::Regex {
                regex,
                case_insensitive: true,
            } => Ok(Pattern::regex(&format!("(?i){}", regex))?),
            Self::Regex { regex, .. } => Ok(Pattern::regex(regex)?),
        }
    }
}

fn default_true() -> bool {
    true
}

/// How to extract the body of one family of reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionConfig {
    /// First line of the body (kept).
    #[serde(alias = "body_begin_marker")]
    pub body_begin_markers: MarkerSpec,
    /// Line right after the body (dropped).
    pub body_end_markers: MarkerSpec,
    /// Starts of interior blocks to cut, paired by position with
    /// `body_between_end_markers`.
    #[serde(default)]
    pub body_between_start_markers: Vec<MarkerSpec>,
    #[serde(default)]
    pub body_between_end_markers: Vec<MarkerSpec>,
    #[serde(default)]
    pub patterns_to_remove: Vec<PatternSpec>,
    /// Report file names to leave out of the corpus.
    #[serde(default)]
    pub excluded_files: Vec<String>,
    /// Case sensitivity of literal `patterns_to_remove`.
    #[serde(default = "default_true")]
    pub case_insensitive: bool,
}

impl ExtractionConfig {
    /// Build the extractor.
    ///
    /// # Errors
    /// Fails on an empty marker list, on start/end lists of different
    /// lengths and on malformed regexes.
    pub fn compile(&self) -> Result<BodyExtractor> {
        let begin = self.body_begin_markers.to_marker_set()?;
        let end = self.body_end_markers.to_marker_set()?;

        let starts = self
            .body_between_start_markers
            .iter()
            .map(MarkerSpec::to_marker_set)
            .collect::<Result<Vec<_>>>()?;
        let ends = self
            .body_between_end_markers
            .iter()
            .map(MarkerSpec::to_marker_set)
            .collect::<Result<Vec<_>>>()?;
        let interior = MarkerPairs::new(starts, ends)?;

        let patterns = self
            .patterns_to_remove
            .iter()
            .map(PatternSpec::to_pattern)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            pairs = interior.len(),
            patterns = patterns.len(),
            "compiled extraction config"
        );

        Ok(BodyExtractor::new(begin, end)
            .with_interior(interior)
            .with_patterns(patterns)
            .with_case_insensitive(self.case_insensitive))
    }
}

/// Record-level text cleanup before tokenization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreprocessConfig {
    /// Regexes deleted from the body text.
    #[serde(default)]
    pub patterns_to_remove: Vec<String>,
    #[serde(default)]
    pub lowercase: bool,
    #[serde(default)]
    pub split_measure_text: bool,
}

impl PreprocessConfig {
    pub fn compile(&self) -> Result<TextPreprocessor> {
        Ok(TextPreprocessor::new()
            .with_patterns(&self.patterns_to_remove)?
            .with_lowercase(self.lowercase)
            .with_split_measures(self.split_measure_text))
    }
}

/// Root of a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    pub schema: String,
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub preprocessing: Option<PreprocessConfig>,
}

impl ReportConfig {
    pub fn new(extraction: ExtractionConfig) -> Self {
        Self {
            schema: CONFIG_SCHEMA.to_string(),
            extraction,
            preprocessing: None,
        }
    }

    /// Check the schema key and compile every section once.
    pub fn validate(&self) -> Result<()> {
        if self.schema != CONFIG_SCHEMA {
            return Err(Error::UnknownSchema {
                found: self.schema.clone(),
                expected: CONFIG_SCHEMA.to_string(),
            });
        }
        self.extraction.compile()?;
        if let Some(preprocessing) = &self.preprocessing {
            preprocessing.compile()?;
        }
        Ok(())
    }
}

/// Load and validate a config file.
///
/// Configuration errors surface here rather than mid-corpus.
pub fn load_config(path: &Path) -> Result<ReportConfig> {
    let config: ReportConfig = ConfigStore::new().load(path)?;
    config.validate()?;
    debug!(path = %path.display(), "loaded report config");
    Ok(config)
}
