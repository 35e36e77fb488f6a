//! Separator-aware text splitting primitives.
//!
//! Ported from the original `split_text_keep_separator` / `split_by_sep` /
//! `split_by_char` helpers: splitting on a separator without discarding it
//! (the separator is reattached to the piece that precedes it), falling
//! back to per-character splitting when no separator is given.

/// Split `text` on `separator`, keeping the separator attached to the end
/// of the piece that precedes it.
///
/// An empty `separator` splits on character boundaries instead (delegates
/// to [`split_by_char`]). Consecutive separator occurrences produce empty
/// pieces, matching how `str::split` behaves — callers that don't want
/// empty pieces should filter them out.
#[must_use]
pub fn split_keep_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return split_by_char(text);
    }

    let mut pieces = Vec::new();
    let mut rest = text;

    while let Some(idx) = rest.find(separator) {
        let split_at = idx + separator.len();
        pieces.push(&rest[..split_at]);
        rest = &rest[split_at..];
    }

    if !rest.is_empty() || pieces.is_empty() {
        pieces.push(rest);
    }

    pieces
}

/// Split `text` into its individual Unicode scalar values as string slices.
///
/// This is the base case of the recursive splitter: when no separator in
/// the hierarchy appears in a span, per-character splitting always makes
/// forward progress (as long as the span is non-empty).
#[must_use]
pub fn split_by_char(text: &str) -> Vec<&str> {
    let mut pieces = Vec::with_capacity(text.len());
    let mut idx = 0;
    for ch in text.chars() {
        let len = ch.len_utf8();
        pieces.push(&text[idx..idx + len]);
        idx += len;
    }
    pieces
}
