//! Restoration: reconstructing a document's non-overlapping coverage from
//! its chunks, for round-trip validation.
//!
//! Because adjacent chunks share content at their boundaries, simply
//! concatenating chunk text would duplicate the overlapping regions.
//! Restoration instead sorts chunks by their original byte span and, for
//! each one, keeps only the suffix that extends past the furthest point
//! already covered — the inverse of the overlap the merge engine
//! introduced.

use crate::chunk::Chunk;

/// Reconstruct the original document's content from `chunks`, undoing
/// chunk overlap.
///
/// Chunks are sorted by `(end, start)` ascending and, for each, only the
/// suffix past `end - last_end` bytes (from the end of its span) is kept,
/// so overlapping regions are not duplicated. Any synthetic heading prefix
/// on a chunk's `text` (see [`Chunk`]) is excluded, since it isn't part of
/// `input[start..end]`.
///
/// This is a best-effort reconstruction for validation purposes: it
/// assumes each chunk's real content (after stripping a possible heading
/// prefix) has length `end - start` and uses the trailing `end - start`
/// bytes of `text` as that content.
#[must_use]
pub fn restore(chunks: &[Chunk]) -> String {
    if chunks.is_empty() {
        return String::new();
    }

    let mut ordered: Vec<&Chunk> = chunks.iter().collect();
    ordered.sort_by_key(|c| (c.end, c.start));

    let mut out = String::new();
    let mut last_end = 0usize;

    for chunk in ordered {
        let span_len = chunk.end.saturating_sub(chunk.start);
        let real_content = tail_bytes(&chunk.text, span_len);

        let take_from = chunk.end.saturating_sub(last_end).min(real_content.len());
        if take_from == 0 {
            continue;
        }
        let mut keep_start = real_content.len() - take_from;
        while keep_start < real_content.len() && !real_content.is_char_boundary(keep_start) {
            keep_start += 1;
        }
        out.push_str(&real_content[keep_start..]);
        last_end = last_end.max(chunk.end);
    }

    out
}

/// The trailing `len` bytes of `s`, clamped to a char boundary.
fn tail_bytes(s: &str, len: usize) -> &str {
    if len >= s.len() {
        return s;
    }
    let mut start = s.len() - len;
    while start < s.len() && !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}
