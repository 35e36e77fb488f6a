//! The pluggable length function used to measure "size" for both `chunk_size`
//! and `chunk_overlap`.

use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// A function from a string slice to a non-negative size measure.
///
/// Must be monotone: appending characters to a string must never decrease
/// the result. `chunk_size` and `chunk_overlap` are both measured in units
/// of this function, not bytes — a tokenizer-backed length function is a
/// common choice when chunks feed a model with a fixed context window.
pub type LengthFn = Arc<dyn Fn(&str) -> usize + Send + Sync>;

/// The default length function: counts Unicode grapheme clusters.
///
/// Grapheme clusters are a closer match to the intuitive notion of
/// "character" than raw `char`s (which split combining marks and some
/// emoji sequences into several units). Callers who need raw `char` counts,
/// or true model-token counts, should supply their own [`LengthFn`].
#[must_use]
pub fn grapheme_len() -> LengthFn {
    Arc::new(|s: &str| s.graphemes(true).count())
}
