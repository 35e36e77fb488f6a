//! Protected-span scanning.
//!
//! Finds regions of the document (math, images, links, tables, code-fence
//! headers, ...) that must survive recursive splitting as a single,
//! uninterrupted piece. Overlapping matches are resolved by keeping the
//! earliest-starting, and among ties the longest, match and discarding any
//! later match that starts before the kept match ends.

use regex::Regex;

use crate::error::{Error, Result};
use crate::length::LengthFn;

/// A protected span found in the source text, with its byte range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedSpan {
    /// Byte offset where the span starts in the original text.
    pub start: usize,
    /// Byte offset where the span ends (exclusive) in the original text.
    pub end: usize,
}

/// Compile the configured protected-span patterns.
///
/// # Errors
///
/// Returns [`Error::InvalidRegex`] for the first pattern that fails to
/// compile.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| Error::InvalidRegex {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

/// Scan `text` with `patterns` (in priority order) and resolve overlaps.
///
/// Matches are sorted by ascending start, then descending length, then
/// folded left to right: a match is kept only if it starts at or after the
/// furthest end seen so far. A kept match whose length (under `len_fn`)
/// meets or exceeds `chunk_size` is dropped with a warning, since it could
/// never satisfy the size bound.
#[must_use]
pub fn find_protected_spans(
    text: &str,
    patterns: &[Regex],
    chunk_size: usize,
    len_fn: &LengthFn,
) -> Vec<ProtectedSpan> {
    let mut matches: Vec<(usize, usize)> = patterns
        .iter()
        .flat_map(|pattern| pattern.find_iter(text).map(|m| (m.start(), m.end())))
        .collect();

    // Ascending start, descending length (longer match wins among same-start ties).
    matches.sort_by(|a, b| a.0.cmp(&b.0).then((b.1 - b.0).cmp(&(a.1 - a.0))));

    let mut spans = Vec::new();
    let mut furthest_end: Option<usize> = None;

    for (start, end) in matches {
        let keep = match furthest_end {
            Some(furthest) => start >= furthest,
            None => true,
        };
        if keep {
            if len_fn(&text[start..end]) < chunk_size {
                spans.push(ProtectedSpan { start, end });
            } else {
                tracing::warn!(start, end, "protected span ignored: exceeds chunk_size");
            }
        }
        furthest_end = Some(furthest_end.map_or(end, |furthest| furthest.max(end)));
    }

    spans
}
