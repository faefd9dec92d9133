//! Error types for report-text

pub type Result<T> = std::result::Result<T, Error>;

/// Configuration errors raised while building extraction inputs.
///
/// A document in which a marker is never found is not an error; the
/// extraction passes fail open instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Marker set must contain at least one marker")]
    EmptyMarkerSet,

    #[error("Marker alternative {position} is blank and would match every line")]
    BlankMarker { position: usize },

    #[error("Expected the same number of start and end markers, got {starts} start and {ends} end")]
    MismatchedMarkerPairs { starts: usize, ends: usize },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
