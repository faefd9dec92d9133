//! Marker matching.
//!
//! A marker is a literal substring whose presence in a line signals a
//! structural boundary of a report (start of the clinical body, start of a
//! letterhead block, ...). A [`MarkerSet`] groups alternative spellings of the
//! same boundary; a line matches the set when it contains any of them.

use std::fmt;

use crate::error::{Error, Result};

/// Returns `true` if any of `markers` occurs as a substring of `text`.
///
/// When `case_insensitive` is set both the markers and the text are
/// lowercased before comparison. An empty `markers` slice never matches.
///
/// # Example
/// ```
/// use report_text::marker_is_in_text;
///
/// assert!(marker_is_in_text(&["ABC"], "xx abc yy", true));
/// assert!(!marker_is_in_text(&["ABC"], "xx abc yy", false));
/// ```
pub fn marker_is_in_text<M: AsRef<str>>(markers: &[M], text: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        let text = text.to_lowercase();
        markers
            .iter()
            .any(|m| text.contains(&m.as_ref().to_lowercase()))
    } else {
        markers.iter().any(|m| text.contains(m.as_ref()))
    }
}

/// A non-empty set of alternative markers for one boundary.
///
/// Order among alternatives does not matter for matching; it is kept so the
/// set displays the way it was configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<String>,
    /// Lowercased copies, so case-insensitive matching lowercases only the line.
    lowered: Vec<String>,
}

impl MarkerSet {
    /// Build a marker set from one or more alternatives.
    ///
    /// # Errors
    /// - [`Error::EmptyMarkerSet`] when `markers` yields nothing
    /// - [`Error::BlankMarker`] when an alternative is empty or whitespace
    pub fn new<I, S>(markers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers: Vec<String> = markers.into_iter().map(Into::into).collect();
        if markers.is_empty() {
            return Err(Error::EmptyMarkerSet);
        }
        if let Some(position) = markers.iter().position(|m| m.trim().is_empty()) {
            return Err(Error::BlankMarker { position });
        }
        let lowered = markers.iter().map(|m| m.to_lowercase()).collect();
        Ok(Self { markers, lowered })
    }

    /// Build a marker set holding a single marker.
    ///
    /// Unchecked; use [`MarkerSet::new`] for markers read from configuration.
    pub fn single(marker: impl Into<String>) -> Self {
        let marker = marker.into();
        let lowered = vec![marker.to_lowercase()];
        Self {
            markers: vec![marker],
            lowered,
        }
    }

    /// The configured alternatives, in configuration order.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Case-insensitive match of `line` against the set.
    pub fn matches(&self, line: &str) -> bool {
        self.matches_with(line, true)
    }

    /// Match `line` against the set, optionally ignoring case.
    pub fn matches_with(&self, line: &str, case_insensitive: bool) -> bool {
        if case_insensitive {
            let line = line.to_lowercase();
            self.lowered.iter().any(|m| line.contains(m.as_str()))
        } else {
            marker_is_in_text(&self.markers, line, false)
        }
    }
}

impl From<&str> for MarkerSet {
    fn from(marker: &str) -> Self {
        Self::single(marker)
    }
}

impl From<String> for MarkerSet {
    fn from(marker: String) -> Self {
        Self::single(marker)
    }
}

impl fmt::Display for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.markers.join(" | "))
    }
}
