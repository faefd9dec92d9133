//! Dataset-level text preprocessing.
//!
//! Applied to the persisted body text of a record before it is handed to an
//! external tokenizer: section headers are deleted, the text is optionally
//! lowercased and glued-together measurements are split into words.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static TRIPLE_DIMENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.\d)x(\d+\.\d)x(\d+\.\d)").expect("Invalid triple dimension regex")
});

static DOUBLE_DIMENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+\.\d)x(\d+\.\d)").expect("Invalid double dimension regex")
});

static DECIMAL_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d)([cm]m)").expect("Invalid decimal unit regex"));

static WHOLE_UNIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)([cm]m)").expect("Invalid whole unit regex"));

/// Splits measurements into separate words.
///
/// `11.2x12.3x13.4cm` becomes `11.2 x 12.3 x 13.4 cm`, `11.2mm` becomes
/// `11.2 mm` and `12cm` becomes `12 cm`.
pub fn split_measure_text(text: &str) -> String {
    let text = TRIPLE_DIMENSION.replace_all(text, "${1} x ${2} x ${3}");
    let text = DOUBLE_DIMENSION.replace_all(&text, "${1} x ${2}");
    let text = DECIMAL_UNIT.replace_all(&text, "${1} ${2}");
    WHOLE_UNIT.replace_all(&text, "${1} ${2}").into_owned()
}

/// Deletes every match of every pattern, then trims the result.
///
/// With no patterns the text is only trimmed.
pub fn remove_patterns_from_text(text: &str, patterns: &[Regex]) -> String {
    let mut text = text.to_string();
    for pattern in patterns {
        text = pattern.replace_all(&text, "").into_owned();
    }
    text.trim().to_string()
}

/// Record text preprocessing: header removal, lowercasing, measurement
/// splitting.
#[derive(Debug, Clone, Default)]
pub struct TextPreprocessor {
    patterns_to_remove: Vec<Regex>,
    lowercase: bool,
    split_measures: bool,
}

impl TextPreprocessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `patterns` as regexes to delete from the text.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPattern`] for the first malformed pattern.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.patterns_to_remove = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_split_measures(mut self, split_measures: bool) -> Self {
        self.split_measures = split_measures;
        self
    }

    /// Remove patterns, then lowercase, then split measurements.
    pub fn apply(&self, text: &str) -> String {
        let mut text = remove_patterns_from_text(text, &self.patterns_to_remove);
        if self.lowercase {
            text = text.to_lowercase();
        }
        if self.split_measures {
            text = split_measure_text(&text);
        }
        text
    }
}
