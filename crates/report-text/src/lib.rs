//! Marker-based body extraction for medical report text.
//!
//! Reports extracted from PDFs or OCR arrive as an ordered list of lines with
//! institutional headers, footers and letterhead mixed into the clinical text.
//! This crate isolates the clinical body with a handful of line passes:
//!
//! - [`window`]: keep the lines between a start marker and an end marker,
//! - [`excise`]: cut out interior blocks delimited by ordered marker pairs,
//! - [`filter`]: drop lines matching literal or regex patterns,
//! - [`normalize`]: drop blank lines and trim the rest.
//!
//! [`BodyExtractor`] chains them for one document. Every pass borrows its
//! input and returns a new `Vec<&str>`; nothing is mutated in place.
//!
//! Missing markers never produce errors: windowing falls back to the first or
//! last line of the document. Only configuration mistakes (an empty marker
//! set, unequal pair lists, malformed regexes) are reported through [`Error`].
//!
//! [`preprocess`] holds the record-level text cleanup applied to persisted
//! bodies before tokenization.

pub mod error;
pub mod excise;
pub mod filter;
pub mod marker;
pub mod normalize;
pub mod pipeline;
pub mod preprocess;
pub mod window;

pub use error::{Error, Result};
pub use excise::{MarkerPairs, delete_text_between_markers};
pub use filter::{Pattern, remove_lines_containing_pattern};
pub use marker::{MarkerSet, marker_is_in_text};
pub use normalize::{remove_whitespace_lines, strip_text_lines};
pub use pipeline::{BodyExtractor, Extraction};
pub use preprocess::{TextPreprocessor, remove_patterns_from_text, split_measure_text};
pub use window::{Window, extract_text_between_markers, extract_window};
