//! The top-level text splitter, tying the pipeline stages together.

use crate::chunk::Chunk;
use crate::config::SplitterConfig;
use crate::error::Result;
use crate::merge::merge;
use crate::protected::{compile_patterns, find_protected_spans};
use crate::recursive::split as recursive_split;
use crate::splice::splice;
use regex::Regex;

/// A text chunking strategy producing byte-offset [`Chunk`]s.
///
/// All splitters implement this trait, enabling polymorphic usage:
///
/// ```rust
/// use folio::{Chunker, TextSplitter};
///
/// fn chunk_document(chunker: &dyn Chunker, text: &str) -> Vec<folio::Chunk> {
///     chunker.chunk(text)
/// }
///
/// let splitter = TextSplitter::new().unwrap();
/// let chunks = chunk_document(&splitter, "Hello world. This is a test.");
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into chunks.
    ///
    /// Each chunk is a [`Chunk`] containing the text and its byte offsets
    /// in the original document.
    fn chunk(&self, text: &str) -> Vec<Chunk>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        (text_len / 500).max(1)
    }
}

/// Recursive, overlap-preserving, protected-span-aware text splitter.
///
/// The splitting pipeline, in order:
///
/// 1. Recursively split the document on the configured separator hierarchy
///    so every piece fits within `chunk_size` ([`crate::recursive`]).
/// 2. Independently scan the document for protected spans — regions like
///    math, links, or table rows that must never be cut apart
///    ([`crate::protected`]).
/// 3. Splice the two together so protected spans survive as single pieces
///    ([`crate::splice`]).
/// 4. Merge pieces into chunks with overlap and Markdown heading context
///    ([`crate::merge`]).
///
/// ```rust
/// use folio::TextSplitter;
///
/// let splitter = TextSplitter::new().unwrap();
/// let chunks = splitter.split_text("Some text to split into chunks.");
/// assert!(!chunks.is_empty());
/// ```
#[derive(Clone)]
pub struct TextSplitter {
    config: SplitterConfig,
    protected_patterns: Vec<Regex>,
}

impl TextSplitter {
    /// Build a splitter with the default [`SplitterConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the default protected-span patterns fail to
    /// compile, which should not happen with the built-in defaults.
    pub fn new() -> Result<Self> {
        Self::with_config(SplitterConfig::default())
    }

    /// Build a splitter from an explicit, already-validated config.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidRegex`] if any of
    /// `config.protected_regex()` fails to compile.
    pub fn with_config(config: SplitterConfig) -> Result<Self> {
        let protected_patterns = compile_patterns(config.protected_regex())?;
        Ok(Self {
            config,
            protected_patterns,
        })
    }

    /// The splitter's configuration.
    #[must_use]
    pub const fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Split `text` into byte-offset chunks.
    ///
    /// Returns an empty vector for an empty document.
    #[must_use]
    pub fn split_text(&self, text: &str) -> Vec<Chunk> {
        if text.is_empty() {
            return Vec::new();
        }

        let len_fn = self.config.len_function();
        let chunk_size = self.config.chunk_size();

        let splits = recursive_split(text, chunk_size, self.config.separators(), len_fn);
        let protected = find_protected_spans(text, &self.protected_patterns, chunk_size, len_fn);
        let spliced = splice(&splits, &protected);

        debug_assert_eq!(
            spliced.concat(),
            text,
            "splicing must never change the reconstructed text"
        );

        merge(&spliced, chunk_size, self.config.chunk_overlap(), len_fn)
    }
}

impl Chunker for TextSplitter {
    fn chunk(&self, text: &str) -> Vec<Chunk> {
        self.split_text(text)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        let step = self
            .config
            .chunk_size()
            .saturating_sub(self.config.chunk_overlap())
            .max(1);
        (text_len / step).max(1)
    }
}
