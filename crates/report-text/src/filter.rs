//! Pattern-based line filtering.
//!
//! Removes page counters, signatures, anonymisation placeholders and similar
//! lines that survive windowing. A line is removed when any pattern hits it.

use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};

/// A line pattern: either a literal substring or a compiled regex.
///
/// Literal patterns honour the filter's case-insensitivity flag. Regex
/// patterns carry their own flags (use `(?i)` for case-insensitive regexes).
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(String),
    Regex(Regex),
}

impl Pattern {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compile `source` as a regex pattern.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPattern`] if `source` is not a valid regex.
    pub fn regex(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Self::Regex)
            .map_err(|source_err| Error::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    /// Whether this pattern hits `line`.
    ///
    /// Regexes are searched anywhere in the line, not anchored.
    pub fn is_match(&self, line: &str, case_insensitive: bool) -> bool {
        match self {
            Self::Literal(text) if case_insensitive => {
                line.to_lowercase().contains(&text.to_lowercase())
            }
            Self::Literal(text) => line.contains(text.as_str()),
            Self::Regex(regex) => regex.is_match(line),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "\"{}\"", text),
            Self::Regex(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// Keeps each line once, and only if no pattern matches it.
///
/// # Example
/// ```
/// use report_text::{Pattern, remove_lines_containing_pattern};
///
/// let patterns = [Pattern::regex(r"Page \d of \d").unwrap(), Pattern::literal("xxx")];
/// let lines = ["Page 1 of 2", "Findings", "Signed by XXX"];
/// assert_eq!(remove_lines_containing_pattern(&patterns, &lines, true), vec!["Findings"]);
/// ```
pub fn remove_lines_containing_pattern<'a>(
    patterns: &[Pattern],
    lines: &[&'a str],
    case_insensitive: bool,
) -> Vec<&'a str> {
    lines
        .iter()
        .copied()
        .filter(|line| {
            !patterns
                .iter()
                .any(|pattern| pattern.is_match(line, case_insensitive))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_respects_case_flag() {
        let pattern = Pattern::literal("Hôpital");
        assert!(pattern.is_match("HÔPITAL DE MONTRÉAL", true));
        assert!(!pattern.is_match("HÔPITAL DE MONTRÉAL", false));
    }

    #[test]
    fn test_regex_keeps_its_own_flags() {
        let sensitive = Pattern::regex(r"Page \d of \d").unwrap();
        let insensitive = Pattern::regex(r"(?i)Page \d of \d").unwrap();
        // The case flag only applies to literals.
        assert!(!sensitive.is_match("PAGE 1 OF 2", true));
        assert!(insensitive.is_match("PAGE 1 OF 2", false));
    }

    #[test]
    fn test_invalid_regex_is_reported() {
        let result = Pattern::regex("(unclosed");
        assert!(matches!(result, Err(Error::InvalidPattern { ref pattern, .. }) if pattern == "(unclosed"));
    }

    #[test]
    fn test_line_kept_once_when_no_pattern_matches() {
        let patterns = [Pattern::literal("a"), Pattern::literal("b"), Pattern::literal("c")];
        let lines = ["xyz", "a", "zzz"];
        assert_eq!(
            remove_lines_containing_pattern(&patterns, &lines, true),
            vec!["xyz", "zzz"]
        );
    }

    #[test]
    fn test_no_patterns_keeps_everything() {
        let lines = ["a", "b"];
        assert_eq!(remove_lines_containing_pattern(&[], &lines, true), vec!["a", "b"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Pattern::literal("User:").to_string(), "\"User:\"");
        assert_eq!(Pattern::regex(r"\d+").unwrap().to_string(), r"/\d+/");
    }
}
