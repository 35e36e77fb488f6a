//! Error types for folio.

/// Errors that can occur when building a [`crate::SplitterConfig`] or a
/// [`crate::TextSplitter`].
///
/// Normal splitting never returns an error — degraded inputs (an oversized
/// protected span, an oversized heading, a split the length function still
/// considers too big) are logged and handled gracefully instead. See the
/// crate-level docs for the full policy.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap is not strictly smaller than the chunk size.
    #[error("chunk_overlap ({overlap}) must be less than chunk_size ({size})")]
    OverlapExceedsSize {
        /// The configured chunk size.
        size: usize,
        /// The overlap that was not smaller than it.
        overlap: usize,
    },

    /// A `protected_regex` entry failed to compile.
    #[error("invalid protected-span regex {pattern:?}: {source}")]
    InvalidRegex {
        /// The offending pattern.
        pattern: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;
