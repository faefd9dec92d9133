//! Body windowing.
//!
//! Isolates a report's clinical body: the lines from the first start-marker
//! line (inclusive) up to the first following end-marker line (exclusive).
//!
//! ```text
//! Centre Universitaire de Santé McGill          dropped
//! RENSEIGNEMENT CLINIQUE / CLINICAL INFORMATION: kept (start marker)
//! ...                                            kept
//! Electronically signed by: XXX                  dropped, scanning stops
//! Radiologiste/Reporting MD:                     dropped
//! ```
//!
//! Both boundaries fail open: a missing start marker windows from the first
//! line, a missing end marker windows to the last one.

use tracing::debug;

use crate::marker::MarkerSet;

/// The result of windowing a document, with diagnostics about which
/// boundaries were actually found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window<'a> {
    /// The retained lines, in document order.
    pub lines: Vec<&'a str>,
    /// Whether a start-marker line was found.
    pub start_found: bool,
    /// Whether an end-marker line stopped the scan.
    pub end_found: bool,
}

impl Window<'_> {
    /// `true` when both boundaries were located in the document.
    pub fn is_complete(&self) -> bool {
        self.start_found && self.end_found
    }
}

/// Keeps the lines between a start marker and an end marker.
///
/// See [`extract_window`] for the boundary rules.
///
/// # Example
/// ```
/// use report_text::{MarkerSet, extract_text_between_markers};
///
/// let lines = ["header", "BODY:", "text", "Signed by", "footer"];
/// let body = extract_text_between_markers(
///     &MarkerSet::single("body"),
///     &MarkerSet::single("signed"),
///     &lines,
/// );
/// assert_eq!(body, vec!["BODY:", "text"]);
/// ```
pub fn extract_text_between_markers<'a>(
    start: &MarkerSet,
    end: &MarkerSet,
    lines: &[&'a str],
) -> Vec<&'a str> {
    extract_window(start, end, lines).lines
}

/// Windows `lines` and reports which boundaries were found.
///
/// - The first line matching `start` opens the window and is kept.
/// - If no line matches `start`, the window opens at the first line.
/// - Lines are kept until one matches `end`; that line is dropped and the
///   scan stops.
/// - If no line matches `end`, the window runs to the end of the document.
pub fn extract_window<'a>(
    start: &MarkerSet,
    end: &MarkerSet,
    lines: &[&'a str],
) -> Window<'a> {
    let start_index = lines.iter().position(|line| start.matches(line));
    if start_index.is_none() {
        debug!(marker = %start, "start marker not found, windowing from the first line");
    }

    let mut window = Window {
        lines: Vec::new(),
        start_found: start_index.is_some(),
        end_found: false,
    };

    for &line in &lines[start_index.unwrap_or(0)..] {
        if end.matches(line) {
            window.end_found = true;
            break;
        }
        window.lines.push(line);
    }

    if !window.end_found {
        debug!(marker = %end, "end marker not found, windowing to the last line");
    }

    window
}
