//! Unified service container for studypack
//!
//! Provides shared access to configuration and document storage.

use crate::core::config::Config;
use crate::core::error::{Result, StudyError};
use crate::core::ingest::IngestPipeline;
use crate::core::storage::DocumentStore;
use crate::core::types::{Document, IngestStats};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Document storage
    pub store: Arc<DocumentStore>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let store = Arc::new(DocumentStore::new(config.storage.data_dir.clone()));

        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Create an IngestPipeline, falling back to configured chunking
    ///
    /// Pipelines are created per-request since chunking may be
    /// overridden per ingest.
    pub fn create_pipeline(
        &self,
        chunk_size: Option<usize>,
        overlap: Option<usize>,
    ) -> Result<IngestPipeline> {
        IngestPipeline::new(
            chunk_size.unwrap_or(self.config.chunking.chunk_size),
            overlap.unwrap_or(self.config.chunking.overlap),
            self.config.limits.max_file_size_mb,
        )
    }

    /// Ingest a file and persist the resulting document.
    ///
    /// Extraction and chunking run on the blocking pool. With
    /// `remove_source` set, the source file is deleted afterwards
    /// whether or not ingest succeeded.
    pub async fn ingest(
        &self,
        pipeline: IngestPipeline,
        path: PathBuf,
        title: String,
        remove_source: bool,
    ) -> Result<(Document, IngestStats)> {
        let store = Arc::clone(&self.store);
        let source = path.clone();

        let outcome = tokio::task::spawn_blocking(move || {
            let (document, stats) = pipeline.ingest_file(&source, &title)?;
            store.create_document(&document)?;
            Ok::<_, StudyError>((document, stats))
        })
        .await
        .map_err(|e| StudyError::StorageError(format!("Ingest task failed: {e}")))?;

        if remove_source {
            self.discard_source(&path);
        }

        outcome
    }

    /// Delete an uploaded source file. A file that is already gone is
    /// not an error; other failures are logged and ignored.
    pub fn discard_source(&self, path: &Path) {
        match std::fs::remove_file(path) {
            Ok(()) => tracing::info!("Removed source file {:?}", path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove source file {:?}: {}", path, e),
        }
    }
}
