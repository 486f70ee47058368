//! Text extraction from source files.
//!
//! PDFs are parsed with `lopdf` page by page; plain text files are
//! read as UTF-8. Extraction fidelity (layout, reading order,
//! ligatures) is whatever the PDF parser produces.

use std::fs;
use std::io::Read;
use std::path::Path;

use lopdf::Document as PdfDocument;

use crate::core::error::{Result, StudyError};
use crate::core::types::ExtractedText;

/// A source of document text
pub trait TextExtractor: Send + Sync {
    /// Extract the full text of the file at `path`
    fn extract(&self, path: &Path) -> Result<ExtractedText>;
}

/// PDF extractor backed by lopdf
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Extract text from PDF bytes already in memory.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<ExtractedText> {
        let doc = PdfDocument::load_mem(bytes)
            .map_err(|e| StudyError::ExtractionFailed(format!("Failed to load PDF: {e}")))?;

        let pages = doc.get_pages();
        let num_pages = pages.len();
        let mut text = String::new();

        for page_num in pages.keys() {
            match doc.extract_text(&[*page_num]) {
                Ok(page_text) => {
                    text.push_str(&page_text);
                    text.push('\n');
                }
                Err(e) => {
                    tracing::warn!("Failed to extract text from page {}: {}", page_num, e);
                }
            }
        }

        Ok(ExtractedText { text, num_pages })
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedText> {
        let bytes = fs::read(path)
            .map_err(|e| StudyError::ExtractionFailed(format!("Failed to read {path:?}: {e}")))?;
        self.extract_bytes(&bytes)
    }
}

/// Plain UTF-8 text extractor (.txt, .md)
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedText> {
        let text = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                StudyError::ExtractionFailed(format!("Not valid UTF-8 text: {path:?}"))
            } else {
                StudyError::ExtractionFailed(format!("Failed to read {path:?}: {e}"))
            }
        })?;

        Ok(ExtractedText { text, num_pages: 1 })
    }
}

/// Pick an extractor by file extension (case-insensitive).
pub fn extractor_for(path: &Path) -> Result<Box<dyn TextExtractor>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("pdf") => Ok(Box::new(PdfExtractor)),
        Some("txt") | Some("md") | Some("markdown") => Ok(Box::new(PlainTextExtractor)),
        Some(other) => Err(StudyError::UnsupportedFile(format!(
            "'.{other}' files are not supported (expected .pdf, .txt or .md): {}",
            path.display()
        ))),
        None => Err(StudyError::UnsupportedFile(format!(
            "File has no extension: {}",
            path.display()
        ))),
    }
}

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Size limit in bytes, saturating for absurdly large settings.
pub fn limit_bytes(max_file_size_mb: usize) -> u64 {
    (max_file_size_mb as u64).saturating_mul(BYTES_PER_MB)
}

fn too_large(name: String, size: u64, max_file_size_mb: usize) -> StudyError {
    StudyError::FileTooLarge {
        path: name,
        size_mb: size.div_ceil(BYTES_PER_MB),
        limit_mb: max_file_size_mb,
    }
}

/// Reject files above `max_file_size_mb`.
pub fn check_file_size(path: &Path, max_file_size_mb: usize) -> Result<()> {
    let metadata = fs::metadata(path)?;

    if metadata.len() > limit_bytes(max_file_size_mb) {
        return Err(too_large(
            path.display().to_string(),
            metadata.len(),
            max_file_size_mb,
        ));
    }
    Ok(())
}

/// Read UTF-8 text from a stream, stopping one byte past the size limit.
///
/// `name` labels the source in errors (e.g. `<stdin>`).
pub fn read_text_limited<R: Read>(
    reader: R,
    name: &str,
    max_file_size_mb: usize,
) -> Result<String> {
    let limit = limit_bytes(max_file_size_mb);
    let mut bytes = Vec::new();
    reader.take(limit.saturating_add(1)).read_to_end(&mut bytes)?;

    if bytes.len() as u64 > limit {
        return Err(too_large(name.to_string(), bytes.len() as u64, max_file_size_mb));
    }

    String::from_utf8(bytes)
        .map_err(|_| StudyError::ExtractionFailed(format!("Not valid UTF-8 text: {name}")))
}
