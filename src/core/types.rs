//! Core data types for studypack.
//!
//! Chunks, documents and the statistics produced by ingestion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One contiguous word-window of a document's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Words joined by single spaces
    pub content: String,

    /// Zero-based position within the document's chunk sequence
    #[serde(rename = "chunkIndex")]
    pub chunk_index: usize,
}

impl Chunk {
    /// Number of words in this chunk
    pub fn word_count(&self) -> usize {
        self.content.split(' ').filter(|w| !w.is_empty()).count()
    }
}

/// Chunking parameters recorded alongside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingParams {
    pub chunk_size: usize,
    pub overlap: usize,
}

/// Processing status of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Ready,
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Ready => write!(f, "ready"),
        }
    }
}

/// A stored document and its embedded chunk sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub extracted_text: String,
    pub chunks: Vec<Chunk>,
    pub num_pages: usize,
    pub chunking: ChunkingParams,
    pub upload_date: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Document {
    /// Build the list-view summary of this document
    pub fn summary(&self) -> DocumentSummary {
        DocumentSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            file_name: self.file_name.clone(),
            upload_date: self.upload_date,
            last_accessed: self.last_accessed,
            status: self.status,
            chunk_count: self.chunks.len(),
            word_count: crate::core::ingest::count_words(&self.extracted_text),
        }
    }
}

/// Document list entry (no text, no chunks)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub upload_date: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    pub status: DocumentStatus,
    pub chunk_count: usize,
    pub word_count: usize,
}

/// Text returned by an extractor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub num_pages: usize,
}

/// Statistics from an ingest operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestStats {
    /// Identifier assigned to the new document
    pub document_id: String,

    /// Pages reported by the extractor
    pub pages: usize,

    /// Characters of extracted text
    pub characters: usize,

    /// Words after whitespace normalization
    pub words: usize,

    /// Total chunks created
    pub chunks_created: usize,

    /// Ingest duration in milliseconds
    pub duration_ms: u64,
}
