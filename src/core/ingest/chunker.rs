//! Overlapping word-window chunking.
//!
//! Text is split on runs of Unicode whitespace and regrouped into
//! windows of at most `chunk_size` words. Consecutive windows share
//! `overlap` words, so the window start advances by
//! `chunk_size - overlap` (the stride) each step.
//!
//! # Example
//!
//! ```
//! use studypack::core::ingest::TextChunker;
//!
//! let chunker = TextChunker::new(3, 1).unwrap();
//! let chunks = chunker.chunk("a b c d e");
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].content, "a b c");
//! assert_eq!(chunks[1].content, "c d e");
//! ```

use crate::core::error::{Result, StudyError};
use crate::core::types::Chunk;

/// Words per chunk used by the upload flow
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Words shared between consecutive chunks in the upload flow
pub const DEFAULT_OVERLAP: usize = 50;

/// Word-window chunker with a validated configuration.
///
/// A `TextChunker` can only be built with `chunk_size > 0` and
/// `overlap < chunk_size`, so `chunk` always terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunker {
    /// Number of words per chunk
    chunk_size: usize,

    /// Number of words repeated between consecutive chunks
    overlap: usize,
}

impl TextChunker {
    /// Create a new chunker.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::InvalidChunkConfig` if `chunk_size` is 0
    /// or if `overlap >= chunk_size` (the stride would be zero).
    ///
    /// # Example
    ///
    /// ```
    /// use studypack::core::ingest::TextChunker;
    ///
    /// let chunker = TextChunker::new(500, 50).unwrap();
    /// assert_eq!(chunker.stride(), 450);
    ///
    /// assert!(TextChunker::new(5, 5).is_err());
    /// ```
    pub fn new(chunk_size: usize, overlap: usize) -> Result<Self> {
        validate(chunk_size, overlap)?;
        Ok(Self {
            chunk_size,
            overlap,
        })
    }

    /// Get the chunk size in words.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Get the overlap in words.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Words advanced between the starts of consecutive chunks.
    pub fn stride(&self) -> usize {
        self.chunk_size - self.overlap
    }

    /// Split `text` into overlapping word-windows.
    ///
    /// Empty or whitespace-only text yields no chunks. The last chunk
    /// may hold fewer than `chunk_size` words. Once a window reaches
    /// the final word no further windows are produced.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        let words: Vec<&str> = text.split_whitespace().collect();

        if words.is_empty() {
            return Vec::new();
        }

        let stride = self.stride();
        let mut chunks = Vec::with_capacity(words.len().div_ceil(stride));
        let mut start = 0;

        while start < words.len() {
            let end = (start + self.chunk_size).min(words.len());

            chunks.push(Chunk {
                content: words[start..end].join(" "),
                chunk_index: chunks.len(),
            });

            if end == words.len() {
                break;
            }
            start += stride;
        }

        chunks
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}

/// Chunk `text` with the given configuration.
///
/// Validates the configuration on every call and fails before
/// producing any output.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Result<Vec<Chunk>> {
    Ok(TextChunker::new(chunk_size, overlap)?.chunk(text))
}

/// Count words using the same whitespace rule as the chunker.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn validate(chunk_size: usize, overlap: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(StudyError::InvalidChunkConfig {
            chunk_size,
            overlap,
            reason: "chunk_size must be > 0",
        });
    }
    if overlap >= chunk_size {
        return Err(StudyError::InvalidChunkConfig {
            chunk_size,
            overlap,
            reason: "overlap must be < chunk_size",
        });
    }
    Ok(())
}
