//! Storage layer for ingested documents.
//!
//! # Storage Structure
//!
//! ```text
//! {storage_root}/documents/
//! ├── {document-id-1}.json   # Document record with embedded chunks
//! └── {document-id-2}.json
//! ```

mod documents;

pub use documents::DocumentStore;
