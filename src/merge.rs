//! Merging splits into size-bounded, overlap-preserving chunks.
//!
//! Greedily accumulates splits into a chunk until adding the next one would
//! exceed `chunk_size`, closes the chunk, then starts the next one by
//! popping splits off the front of the previous chunk until the carried-over
//! length is small enough — this is what produces the overlap between
//! adjacent chunks. A Markdown heading tracker runs alongside; when a new
//! chunk starts without the heading that scopes it, that heading is
//! injected as a zero-width prefix entry.

use crate::chunk::Chunk;
use crate::header::HeaderTracker;
use crate::length::LengthFn;

struct Entry {
    start: usize,
    end: usize,
    text: String,
    is_header: bool,
}

/// Merge `splits` into [`Chunk`]s of at most `chunk_size` (under `len_fn`),
/// with roughly `chunk_overlap` of shared content between adjacent chunks.
///
/// `splits` must be contiguous: each one picks up exactly where the
/// previous one ended in the original text.
#[must_use]
pub fn merge(
    splits: &[String],
    chunk_size: usize,
    chunk_overlap: usize,
    len_fn: &LengthFn,
) -> Vec<Chunk> {
    if splits.is_empty() {
        return Vec::new();
    }

    let mut chunks: Vec<Chunk> = Vec::new();
    let mut cur_chunk: Vec<Entry> = Vec::new();
    let mut cur_len = 0usize;
    let mut cur_headers = String::new();

    let mut cursor = 0usize;
    let mut tracker = HeaderTracker::new();

    for split in splits {
        let cur_start = cursor;
        let cur_end = cur_start + split.len();
        let split_len = len_fn(split);

        if split_len > chunk_size {
            tracing::error!(split_len, chunk_size, "split exceeds chunk_size");
        }

        tracker.update(split);
        cur_headers = tracker.headers();
        let mut cur_headers_len = len_fn(&cur_headers);

        if cur_headers_len > chunk_size {
            tracing::error!(cur_headers_len, chunk_size, "heading outline exceeds chunk_size");
            cur_headers.clear();
            cur_headers_len = 0;
        }

        if cur_len + split_len + cur_headers_len > chunk_size {
            if !cur_chunk.is_empty() {
                chunks.push(close_chunk(&cur_chunk, chunks.len()));
            }

            while !cur_chunk.is_empty()
                && (cur_len > chunk_overlap || cur_len + split_len + cur_headers_len > chunk_size)
            {
                let first = cur_chunk.remove(0);
                cur_len -= len_fn(&first.text);

                // The popped element's heading, if any, no longer scopes
                // anything left in the window; drop it too.
                if !first.is_header && matches!(cur_chunk.first(), Some(e) if e.is_header) {
                    let header = cur_chunk.remove(0);
                    cur_len -= len_fn(&header.text);
                }
            }

            if !cur_headers.is_empty()
                && split_len + cur_headers_len < chunk_size
                && !split.contains(cur_headers.as_str())
            {
                let next_start = cur_chunk.first().map_or(cur_start, |e| e.start);
                cur_chunk.insert(
                    0,
                    Entry {
                        start: next_start,
                        end: next_start,
                        text: cur_headers.clone(),
                        is_header: true,
                    },
                );
                cur_len += cur_headers_len;
            }
        }

        cur_chunk.push(Entry {
            start: cur_start,
            end: cur_end,
            text: split.clone(),
            is_header: false,
        });
        cur_len += split_len;
        cursor = cur_end;
    }

    if !cur_headers.is_empty() && cur_len < chunk_size {
        let next_start = cur_chunk.first().map_or(cursor, |e| e.start);
        cur_chunk.insert(
            0,
            Entry {
                start: next_start,
                end: next_start,
                text: cur_headers,
                is_header: true,
            },
        );
    }
    chunks.push(close_chunk(&cur_chunk, chunks.len()));

    chunks
}

fn close_chunk(cur_chunk: &[Entry], index: usize) -> Chunk {
    let start = cur_chunk.first().map_or(0, |e| e.start);
    let end = cur_chunk.last().map_or(0, |e| e.end);
    let text: String = cur_chunk.iter().map(|e| e.text.as_str()).collect();
    Chunk::new(text, start, end, index)
}
