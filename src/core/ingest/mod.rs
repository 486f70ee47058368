//! Document ingestion module.
//!
//! Turns source files into chunked documents. Key features:
//!
//! - Word-window chunking with configurable size and overlap
//! - PDF and plain-text extraction
//! - Ingest pipeline orchestration
//!
//! # Termination
//!
//! Chunk configurations are validated before any text is touched:
//! `chunk_size` must be positive and `overlap` strictly smaller, so
//! every step advances by at least one word.

pub mod chunker;
pub mod extractor;
pub mod pipeline;

pub use chunker::{chunk_text, count_words, TextChunker, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
pub use extractor::{extractor_for, PdfExtractor, PlainTextExtractor, TextExtractor};
pub use pipeline::IngestPipeline;
