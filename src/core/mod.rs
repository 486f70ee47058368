//! Core domain logic (adapter-agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Chunks, documents, ingest statistics
//! - **xdg**: XDG directory handling
//! - **logging**: Tracing subscriber setup
//! - **ingest**: Text extraction, chunking, ingest pipeline
//! - **storage**: Document records on disk
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, StudyError};
pub use services::Services;
