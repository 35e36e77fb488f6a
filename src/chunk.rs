//! The Chunk type: a piece of text with position metadata.

/// An emitted piece of a document, with its byte span in the original text.
///
/// `start` and `end` are byte offsets into the original document, not
/// character indices — this matches Rust's string-slicing semantics.
///
/// ```rust
/// use folio::Chunk;
///
/// let text = "Hello, world!";
/// let chunk = Chunk::new("world", 7, 12, 0);
///
/// assert_eq!(&text[chunk.start..chunk.end], "world");
/// ```
///
/// ## Overlap and synthetic prefixes
///
/// When chunks overlap, adjacent chunks share some text — the shared region
/// came from a previous chunk and was copied forward, not re-extracted from
/// the document. A chunk's `text` may also begin with a synthetic heading
/// prefix injected by the merge engine; that prefix is not present in
/// `input[start..end]`, only in `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text, including any injected heading prefix.
    pub text: String,
    /// Byte offset where this chunk's first real content starts in the original document.
    pub start: usize,
    /// Byte offset where this chunk's last real content ends (exclusive) in the original document.
    pub end: usize,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Chunk {
    /// Create a new chunk.
    #[must_use]
    pub fn new(text: impl Into<String>, start: usize, end: usize, index: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            index,
        }
    }

    /// The length of this chunk's text in bytes (including any heading prefix).
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk's text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span this chunk covers in the original document.
    #[must_use]
    pub fn span(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{ index: {}, span: {}..{}, len: {} }}",
            self.index,
            self.start,
            self.end,
            self.len()
        )
    }
}
