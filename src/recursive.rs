//! Recursive size-bounded splitting.
//!
//! Tries each separator in the configured hierarchy, coarsest first, and
//! only recurses into a piece when it still exceeds `chunk_size` under the
//! configured length function. Falls through to per-character splitting
//! when no separator in the hierarchy helps.
//!
//! The returned pieces retain their separators (see [`crate::separators`])
//! and always re-concatenate to the input text exactly.

use crate::length::LengthFn;
use crate::separators::{split_by_char, split_keep_separator};

/// Recursively split `text` so that every returned piece measures at most
/// `chunk_size` under `len_fn`, trying `separators` coarsest-first before
/// falling back to per-character splitting.
///
/// If `text` already fits, returns a single piece equal to `text`. The
/// returned pieces concatenate back to `text` exactly; callers needing
/// byte offsets should track a running cursor over the pieces.
#[must_use]
pub fn split(
    text: &str,
    chunk_size: usize,
    separators: &[String],
    len_fn: &LengthFn,
) -> Vec<String> {
    if len_fn(text) <= chunk_size {
        return vec![text.to_string()];
    }

    let mut pieces: Vec<&str> = Vec::new();
    for sep in separators {
        let candidate = split_keep_separator(text, sep);
        if candidate.len() > 1 {
            pieces = candidate;
            break;
        }
    }
    if pieces.len() <= 1 {
        pieces = split_by_char(text);
    }

    let mut result = Vec::with_capacity(pieces.len());
    for piece in pieces {
        if len_fn(piece) <= chunk_size {
            result.push(piece.to_string());
        } else {
            result.extend(split(piece, chunk_size, separators, len_fn));
        }
    }
    result
}
