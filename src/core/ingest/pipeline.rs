//! Ingest pipeline orchestration.
//!
//! Coordinates the ingest workflow for a single document:
//! 1. Validate title and source
//! 2. Extract text
//! 3. Chunk text
//! 4. Build the `Document` record (storage is the caller's job)

use std::path::Path;
use std::time::Instant;

use chrono::Utc;
use uuid::Uuid;

use crate::core::error::{Result, StudyError};
use crate::core::ingest::chunker::{count_words, TextChunker};
use crate::core::ingest::extractor::{check_file_size, extractor_for};
use crate::core::types::{ChunkingParams, Document, DocumentStatus, ExtractedText, IngestStats};

/// Orchestrates extraction and chunking for one document at a time
#[derive(Debug, Clone)]
pub struct IngestPipeline {
    chunker: TextChunker,
    max_file_size_mb: usize,
}

impl IngestPipeline {
    /// Create a new ingest pipeline
    ///
    /// # Arguments
    ///
    /// * `chunk_size` - Words per chunk
    /// * `overlap` - Words shared between consecutive chunks
    /// * `max_file_size_mb` - Largest source file accepted
    ///
    /// # Errors
    ///
    /// Fails with `InvalidChunkConfig` before anything is read if the
    /// chunk configuration is unusable.
    pub fn new(chunk_size: usize, overlap: usize, max_file_size_mb: usize) -> Result<Self> {
        let chunker = TextChunker::new(chunk_size, overlap)?;
        Ok(Self {
            chunker,
            max_file_size_mb,
        })
    }

    /// The chunker this pipeline applies
    pub fn chunker(&self) -> &TextChunker {
        &self.chunker
    }

    /// Extract, chunk and build a document from a file on disk
    pub fn ingest_file(&self, path: &Path, title: &str) -> Result<(Document, IngestStats)> {
        let start = Instant::now();
        let title = validate_title(title)?;

        if !path.is_file() {
            return Err(StudyError::InvalidPath(format!(
                "{} does not exist or is not a file",
                path.display()
            )));
        }

        let extractor = extractor_for(path)?;
        check_file_size(path, self.max_file_size_mb)?;

        tracing::info!("Extracting text from {:?}", path);
        let extracted = extractor.extract(path)?;
        tracing::info!(
            "Extracted {} characters from {} pages",
            extracted.text.chars().count(),
            extracted.num_pages
        );

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(self.build(title, file_name, extracted, start))
    }

    /// Chunk and build a document from text already in memory
    pub fn ingest_text(
        &self,
        text: &str,
        title: &str,
        file_name: &str,
    ) -> Result<(Document, IngestStats)> {
        let start = Instant::now();
        let title = validate_title(title)?;

        let extracted = ExtractedText {
            text: text.to_string(),
            num_pages: 1,
        };
        Ok(self.build(title, file_name.to_string(), extracted, start))
    }

    fn build(
        &self,
        title: String,
        file_name: String,
        extracted: ExtractedText,
        start: Instant,
    ) -> (Document, IngestStats) {
        let chunks = self.chunker.chunk(&extracted.text);
        tracing::info!("Created {} chunks", chunks.len());

        if chunks.is_empty() {
            tracing::warn!("No text found in {}; document has no chunks", file_name);
        }

        let now = Utc::now();
        let document = Document {
            id: Uuid::new_v4().to_string(),
            title,
            file_name,
            chunks,
            num_pages: extracted.num_pages,
            chunking: ChunkingParams {
                chunk_size: self.chunker.chunk_size(),
                overlap: self.chunker.overlap(),
            },
            upload_date: now,
            last_accessed: now,
            status: DocumentStatus::Ready,
            extracted_text: extracted.text,
        };

        let stats = IngestStats {
            document_id: document.id.clone(),
            pages: document.num_pages,
            characters: document.extracted_text.chars().count(),
            words: count_words(&document.extracted_text),
            chunks_created: document.chunks.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        (document, stats)
    }
}

fn validate_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(StudyError::InvalidDocument(
            "Please provide a document title".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
