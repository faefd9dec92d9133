//! Interior boilerplate removal.
//!
//! Reports repeat institutional letterhead, page headers and similar blocks
//! inside the body. Their positions vary per document, so they are described
//! as ordered start/end marker pairs. Pairs are consumed strictly in order:
//! the first pair is looked for first, and once its end marker is seen the
//! scan moves on to the next pair. When every pair has been consumed the rest
//! of the document is kept untouched.

use crate::error::{Error, Result};
use crate::marker::MarkerSet;

/// Ordered start/end marker pairs delimiting blocks to remove.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerPairs {
    pairs: Vec<(MarkerSet, MarkerSet)>,
}

/// Scan state threaded through [`MarkerPairs::excise`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ExciseState {
    /// Index of the pair currently being looked for.
    cursor: usize,
    /// Inside a block opened by the current pair's start marker.
    skipping: bool,
}

impl MarkerPairs {
    /// Pair up `starts[i]` with `ends[i]`.
    ///
    /// # Errors
    /// Returns [`Error::MismatchedMarkerPairs`] if the lists differ in length.
    pub fn new(starts: Vec<MarkerSet>, ends: Vec<MarkerSet>) -> Result<Self> {
        if starts.len() != ends.len() {
            return Err(Error::MismatchedMarkerPairs {
                starts: starts.len(),
                ends: ends.len(),
            });
        }
        Ok(Self {
            pairs: starts.into_iter().zip(ends).collect(),
        })
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over the `(start, end)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = &(MarkerSet, MarkerSet)> {
        self.pairs.iter()
    }

    /// Removes every block delimited by a pair, start and end lines included.
    ///
    /// Per line, while a pair remains: a start match begins skipping, otherwise
    /// an end match stops skipping and advances to the next pair, otherwise the
    /// line is kept unless skipping. A repeated start marker keeps skipping. If
    /// the current pair's end marker never appears, everything after its start
    /// marker is dropped.
    pub fn excise<'a>(&self, lines: &[&'a str]) -> Vec<&'a str> {
        let mut kept: Vec<&'a str> = Vec::with_capacity(lines.len());
        let mut state = ExciseState::default();

        for (index, &line) in lines.iter().enumerate() {
            let Some((start, end)) = self.pairs.get(state.cursor) else {
                kept.extend_from_slice(&lines[index..]);
                break;
            };

            if start.matches(line) {
                state.skipping = true;
            } else if end.matches(line) {
                state.skipping = false;
                state.cursor += 1;
            } else if !state.skipping {
                kept.push(line);
            }
        }

        kept
    }
}

/// Removes the blocks delimited by `starts[i]` / `ends[i]` from `lines`.
///
/// # Errors
/// Returns [`Error::MismatchedMarkerPairs`] when the two lists differ in
/// length; nothing is scanned in that case.
pub fn delete_text_between_markers<'a>(
    starts: &[MarkerSet],
    ends: &[MarkerSet],
    lines: &[&'a str],
) -> Result<Vec<&'a str>> {
    let pairs = MarkerPairs::new(starts.to_vec(), ends.to_vec())?;
    Ok(pairs.excise(lines))
}
