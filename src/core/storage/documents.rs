//! File-backed document storage.
//!
//! Each document is one pretty-printed JSON record. Chunks are
//! embedded in the record and written once, on creation.

use crate::core::error::{Result, StudyError};
use crate::core::types::{Document, DocumentSummary};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum length of a document identifier
const MAX_ID_LEN: usize = 64;

/// Document storage manager
pub struct DocumentStore {
    /// Root directory holding `documents/`
    storage_root: PathBuf,
}

impl DocumentStore {
    /// Create a new document store
    pub fn new(storage_root: PathBuf) -> Self {
        Self { storage_root }
    }

    /// Root directory of this store
    pub fn root(&self) -> &Path {
        &self.storage_root
    }

    /// Directory holding document records
    fn documents_dir(&self) -> PathBuf {
        self.storage_root.join("documents")
    }

    /// Get record path for a document
    fn document_path(&self, id: &str) -> PathBuf {
        self.documents_dir().join(format!("{id}.json"))
    }

    /// Check if a document exists
    pub fn document_exists(&self, id: &str) -> bool {
        validate_id(id).is_ok() && self.document_path(id).exists()
    }

    /// Persist a new document
    pub fn create_document(&self, document: &Document) -> Result<()> {
        validate_id(&document.id)?;
        let path = self.document_path(&document.id);

        if path.exists() {
            return Err(StudyError::DocumentAlreadyExists(document.id.clone()));
        }

        fs::create_dir_all(self.documents_dir())?;
        self.write_document(&path, document)?;

        tracing::debug!(
            "Stored document {} ({} chunks)",
            document.id,
            document.chunks.len()
        );
        Ok(())
    }

    /// Load a document and record the access time
    pub fn get_document(&self, id: &str) -> Result<Document> {
        let mut document = self.peek_document(id)?;
        document.last_accessed = Utc::now();
        self.write_document(&self.document_path(id), &document)?;
        Ok(document)
    }

    /// Load a document without touching `last_accessed`
    pub fn peek_document(&self, id: &str) -> Result<Document> {
        validate_id(id)?;
        let path = self.document_path(id);

        if !path.exists() {
            return Err(StudyError::DocumentNotFound(id.to_string()));
        }

        let contents = fs::read_to_string(&path)?;
        let document: Document = serde_json::from_str(&contents)?;
        Ok(document)
    }

    /// List all documents, most recently uploaded first
    pub fn list_documents(&self) -> Result<Vec<DocumentSummary>> {
        let documents_dir = self.documents_dir();

        if !documents_dir.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();

        for entry in fs::read_dir(documents_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            match fs::read_to_string(&path)
                .map_err(StudyError::from)
                .and_then(|c| serde_json::from_str::<Document>(&c).map_err(StudyError::from))
            {
                Ok(document) => summaries.push(document.summary()),
                Err(e) => {
                    tracing::warn!("Skipping unreadable document record {:?}: {}", path, e);
                }
            }
        }

        summaries.sort_by(|a, b| b.upload_date.cmp(&a.upload_date));
        Ok(summaries)
    }

    /// Delete a document and its chunks
    pub fn delete_document(&self, id: &str) -> Result<()> {
        validate_id(id)?;
        let path = self.document_path(id);

        if !path.exists() {
            return Err(StudyError::DocumentNotFound(id.to_string()));
        }

        fs::remove_file(path)?;
        tracing::debug!("Deleted document {}", id);
        Ok(())
    }

    fn write_document(&self, path: &Path, document: &Document) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path).map_err(|e| {
            StudyError::StorageError(format!("Failed to write document {}: {e}", document.id))
        })?;
        Ok(())
    }
}

/// Ids become file names, so only a safe character set is accepted
fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(StudyError::InvalidDocument(
            "Document ID cannot be empty".to_string(),
        ));
    }
    if id.len() > MAX_ID_LEN {
        return Err(StudyError::InvalidDocument(format!(
            "Document ID '{id}' is too long ({} chars, max {MAX_ID_LEN})",
            id.len()
        )));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StudyError::InvalidDocument(format!(
            "Document ID '{id}' contains invalid characters"
        )));
    }
    Ok(())
}
