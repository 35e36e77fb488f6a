//! Splitter configuration.
//!
//! ## The Problem
//!
//! The chunking algorithm has several knobs (chunk size, overlap, separator
//! hierarchy, protected-span patterns, the length function) and two of them
//! interact in a way that can only be checked once both are known: overlap
//! must be strictly smaller than the chunk size, or the merge engine would
//! never make forward progress. A plain struct literal can't enforce that;
//! a fallible builder can.
//!
//! ```rust
//! use folio::SplitterConfig;
//!
//! let config = SplitterConfig::builder()
//!     .chunk_size(256)
//!     .chunk_overlap(32)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.chunk_size(), 256);
//! assert_eq!(config.chunk_overlap(), 32);
//! ```

use crate::error::{Error, Result};
use crate::length::{grapheme_len, LengthFn};

/// Default chunk size, in length-function units: 512.
pub const DEFAULT_CHUNK_SIZE: usize = 512;
/// Default overlap, in length-function units: 100.
pub const DEFAULT_CHUNK_OVERLAP: usize = 100;

/// Default separator hierarchy, coarsest first.
#[must_use]
pub fn default_separators() -> Vec<String> {
    vec!["\n".to_string(), "。".to_string(), " ".to_string()]
}

/// Default protected-span regex patterns, in priority order.
#[must_use]
pub fn default_protected_regex() -> Vec<String> {
    vec![
        // LaTeX display math
        r"(?s)\$\$.*?\$\$".to_string(),
        // Markdown image
        r"!\[.*?\]\(.*?\)".to_string(),
        // Markdown link
        r"\[.*?\]\(.*?\)".to_string(),
        // Markdown table header (header row + alignment row)
        r"(?:\|[^|\n]*)+\|\r?\n\s*(?:\|\s*:?-{3,}:?\s*)+\|\r?\n".to_string(),
        // Markdown table body row
        r"(?:\|[^|\n]*)+\|\r?\n".to_string(),
        // Fenced code block header line with language id
        r"```\w+\r?\n[^\r\n]*".to_string(),
    ]
}

/// Validated, immutable configuration for a [`crate::TextSplitter`].
///
/// Construct via [`SplitterConfig::builder`]; there is no public way to
/// build an invalid one.
#[derive(Clone)]
pub struct SplitterConfig {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
    protected_regex: Vec<String>,
    len_function: LengthFn,
}

impl SplitterConfig {
    /// Start building a config with the default chunk size, overlap,
    /// separator hierarchy, and protected-span patterns.
    #[must_use]
    pub fn builder() -> SplitterConfigBuilder {
        SplitterConfigBuilder::default()
    }

    /// Upper bound on `len_function(chunk.text)`.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Target overlap, in length-function units, between adjacent chunks.
    #[must_use]
    pub const fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// The separator hierarchy, coarsest first.
    #[must_use]
    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    /// The protected-span regex patterns, in priority order.
    #[must_use]
    pub fn protected_regex(&self) -> &[String] {
        &self.protected_regex
    }

    /// The length function used to measure chunk size and overlap.
    #[must_use]
    pub fn len_function(&self) -> &LengthFn {
        &self.len_function
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self::builder()
            .build()
            .expect("default configuration is always valid")
    }
}

impl std::fmt::Debug for SplitterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitterConfig")
            .field("chunk_size", &self.chunk_size)
            .field("chunk_overlap", &self.chunk_overlap)
            .field("separators", &self.separators)
            .field("protected_regex", &self.protected_regex)
            .finish_non_exhaustive()
    }
}

/// Fallible builder for [`SplitterConfig`].
pub struct SplitterConfigBuilder {
    chunk_size: usize,
    chunk_overlap: usize,
    separators: Vec<String>,
    protected_regex: Vec<String>,
    len_function: LengthFn,
}

impl Default for SplitterConfigBuilder {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separators: default_separators(),
            protected_regex: default_protected_regex(),
            len_function: grapheme_len(),
        }
    }
}

impl SplitterConfigBuilder {
    /// Set the chunk size ceiling.
    #[must_use]
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Set the target overlap between adjacent chunks.
    #[must_use]
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.chunk_overlap = overlap;
        self
    }

    /// Replace the separator hierarchy. An empty list is legal and falls
    /// straight through to per-character splitting.
    #[must_use]
    pub fn separators(mut self, separators: Vec<String>) -> Self {
        self.separators = separators;
        self
    }

    /// Replace the protected-span regex patterns.
    #[must_use]
    pub fn protected_regex(mut self, patterns: Vec<String>) -> Self {
        self.protected_regex = patterns;
        self
    }

    /// Replace the length function.
    #[must_use]
    pub fn len_function(mut self, len_function: LengthFn) -> Self {
        self.len_function = len_function;
        self
    }

    /// Validate and build the config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `chunk_size == 0`, or
    /// [`Error::OverlapExceedsSize`] if `chunk_overlap >= chunk_size`.
    pub fn build(self) -> Result<SplitterConfig> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize(self.chunk_size));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(Error::OverlapExceedsSize {
                size: self.chunk_size,
                overlap: self.chunk_overlap,
            });
        }

        Ok(SplitterConfig {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            separators: self.separators,
            protected_regex: self.protected_regex,
            len_function: self.len_function,
        })
    }
}
