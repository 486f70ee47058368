//! studypack - document ingestion for a study assistant
//!
//! Extracts text from uploaded PDFs and notes, splits it into
//! overlapping word-windows, and stores each document with its
//! ordered chunk sequence for downstream summary, flashcard and
//! quiz generation.
//!
//! # Architecture
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types, xdg, logging
//!   - ingest (extraction, chunking, pipeline)
//!   - storage (document records)
//!   - services (unified service container)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use studypack::chunk_text;
//!
//! let chunks = chunk_text("a b c d e", 2, 0).unwrap();
//! let contents: Vec<_> = chunks.iter().map(|c| c.content.as_str()).collect();
//! assert_eq!(contents, ["a b", "c d", "e"]);
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, StudyError};
pub use crate::core::ingest::{chunk_text, IngestPipeline, TextChunker};
pub use crate::core::services::Services;
pub use crate::core::storage::DocumentStore;
pub use crate::core::types::*;
