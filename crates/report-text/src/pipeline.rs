//! The full body-extraction pipeline for one document.

use tracing::debug;

use crate::excise::MarkerPairs;
use crate::filter::{Pattern, remove_lines_containing_pattern};
use crate::marker::MarkerSet;
use crate::normalize::{remove_whitespace_lines, strip_text_lines};
use crate::window::{Window, extract_window};

/// Extracts the clinical body of a report.
///
/// The passes run in this order:
/// 1. windowing between `begin` and `end`,
/// 2. removal of the `interior` boilerplate blocks,
/// 3. removal of lines hit by any of `patterns` (skipped when empty),
/// 4. removal of blank lines,
/// 5. trimming of every remaining line.
///
/// The extractor only holds immutable configuration and can be shared across
/// threads to process documents in parallel.
#[derive(Debug, Clone)]
pub struct BodyExtractor {
    begin: MarkerSet,
    end: MarkerSet,
    interior: MarkerPairs,
    patterns: Vec<Pattern>,
    case_insensitive: bool,
}

/// The extracted body of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub lines: Vec<&'a str>,
    pub start_found: bool,
    pub end_found: bool,
}

impl Extraction<'_> {
    /// The body as persisted in the dataset: lines joined by single spaces.
    pub fn joined(&self) -> String {
        self.lines.join(" ")
    }
}

impl BodyExtractor {
    pub fn new(begin: MarkerSet, end: MarkerSet) -> Self {
        Self {
            begin,
            end,
            interior: MarkerPairs::default(),
            patterns: Vec::new(),
            case_insensitive: true,
        }
    }

    /// Blocks to cut out of the windowed body.
    pub fn with_interior(mut self, interior: MarkerPairs) -> Self {
        self.interior = interior;
        self
    }

    /// Patterns whose matching lines are dropped.
    pub fn with_patterns(mut self, patterns: Vec<Pattern>) -> Self {
        self.patterns = patterns;
        self
    }

    /// Case sensitivity for literal patterns. Markers always match
    /// case-insensitively.
    pub fn with_case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    pub fn begin(&self) -> &MarkerSet {
        &self.begin
    }

    pub fn end(&self) -> &MarkerSet {
        &self.end
    }

    pub fn interior(&self) -> &MarkerPairs {
        &self.interior
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Run every pass over `lines` and keep the boundary diagnostics.
    pub fn run<'a>(&self, lines: &[&'a str]) -> Extraction<'a> {
        let Window {
            lines: windowed,
            start_found,
            end_found,
        } = extract_window(&self.begin, &self.end, lines);

        let mut body = self.interior.excise(&windowed);
        if !self.patterns.is_empty() {
            body = remove_lines_containing_pattern(&self.patterns, &body, self.case_insensitive);
        }
        let body = strip_text_lines(&remove_whitespace_lines(&body));

        debug!(
            input = lines.len(),
            windowed = windowed.len(),
            kept = body.len(),
            "extracted report body"
        );

        Extraction {
            lines: body,
            start_found,
            end_found,
        }
    }

    /// The retained body lines.
    pub fn extract<'a>(&self, lines: &[&'a str]) -> Vec<&'a str> {
        self.run(lines).lines
    }

    /// The retained body of an owned document, space-joined.
    pub fn extract_body<S: AsRef<str>>(&self, lines: &[S]) -> String {
        let lines: Vec<&str> = lines.iter().map(|line| line.as_ref()).collect();
        self.run(&lines).joined()
    }
}
