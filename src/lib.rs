//! # folio
//!
//! Size-bounded, overlap-preserving text chunking for document-reader
//! ingestion pipelines.
//!
//! ## The Problem
//!
//! Language models have context windows. Documents don't fit. You need to
//! split them into pieces ("chunks") small enough to embed and retrieve,
//! but large enough to preserve meaning — and without cutting a table row,
//! a math formula, or a Markdown link in half.
//!
//! This sounds trivial — just split every N characters, right? But
//! consider:
//!
//! - A sentence split mid-word is garbage.
//! - A paragraph split mid-argument loses coherence.
//! - A table row split mid-cell is unreadable.
//! - Overlap is needed for context continuity, but how much?
//! - A chunk that loses its section heading loses its context entirely.
//!
//! ## The Algorithm
//!
//! [`TextSplitter::split_text`] runs four stages:
//!
//! 1. **Recursive split** — try each separator in the configured
//!    hierarchy, coarsest first (`"\n"`, then `"。"`, then `" "` by
//!    default), falling back to per-character splitting, until every
//!    piece fits within `chunk_size`.
//! 2. **Protected-span scan** — independently find spans (math, images,
//!    links, table rows, fenced code headers) that must never be split
//!    apart, resolving overlaps by keeping the earliest-starting, longest
//!    match.
//! 3. **Splice** — re-cut the split pieces so every protected span
//!    survives as one contiguous piece, without changing the
//!    reconstructed text.
//! 4. **Merge** — greedily accumulate pieces into chunks up to
//!    `chunk_size`, trimming the front of each new chunk to carry
//!    `chunk_overlap` worth of content forward, and prefixing chunks with
//!    the Markdown heading that scopes them when that heading would
//!    otherwise be lost.
//!
//! ## Quick Start
//!
//! ```rust
//! use folio::{Chunker, SplitterConfig, TextSplitter};
//!
//! let config = SplitterConfig::builder()
//!     .chunk_size(256)
//!     .chunk_overlap(32)
//!     .build()
//!     .unwrap();
//!
//! let splitter = TextSplitter::with_config(config).unwrap();
//! let chunks = splitter.chunk("# Title\n\nSome long document content here...");
//!
//! for chunk in &chunks {
//!     println!("{chunk}");
//! }
//! ```
//!
//! ## Degraded Inputs
//!
//! Splitting never fails on a non-empty string: an oversized protected
//! span, an oversized heading outline, or a split the length function
//! still considers too big are all logged (via `tracing`) and handled
//! gracefully rather than returned as an error. Construction-time
//! misconfiguration — an invalid `chunk_size`, `chunk_overlap >=
//! chunk_size`, or an unparsable regex — does return a typed [`Error`].
//!
//! ## Restoration
//!
//! Because adjacent chunks overlap, concatenating their text naively
//! duplicates content. [`restore`] reconstructs the original
//! non-overlapping coverage from a chunk sequence, for round-trip
//! validation.

mod chunk;
mod config;
mod error;
mod header;
mod length;
mod merge;
mod protected;
mod recursive;
mod restore;
mod separators;
mod splice;
mod splitter;

pub use chunk::Chunk;
pub use config::{SplitterConfig, SplitterConfigBuilder};
pub use error::{Error, Result};
pub use header::HeaderTracker;
pub use length::{grapheme_len, LengthFn};
pub use protected::ProtectedSpan;
pub use restore::restore;
pub use splitter::{Chunker, TextSplitter};
