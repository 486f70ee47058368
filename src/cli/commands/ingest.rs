//! Ingest command - extract, chunk and store a document

use crate::cli::output::{colors, format_duration};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the ingest command
#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Path to the document (.pdf, .txt, .md)
    pub path: PathBuf,

    /// Document title
    #[arg(long, short = 't')]
    pub title: String,

    /// Words per chunk (defaults to config)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Words shared between consecutive chunks (defaults to config)
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Delete the source file once it has been processed
    #[arg(long)]
    pub remove_source: bool,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Ingest result response
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub status: String,
    pub pages: usize,
    pub words: usize,
    pub chunks_created: usize,
    pub duration_secs: f64,
}

/// Execute the ingest command
pub async fn execute(
    args: IngestArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = match services.create_pipeline(args.chunk_size, args.overlap) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            if args.remove_source {
                services.discard_source(&args.path);
            }
            return Err(e.into());
        }
    };

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Ingesting {} as '{}'...",
            colors::file_path(&args.path.display().to_string()),
            colors::label(args.title.trim())
        );
    }

    let (document, stats) = services
        .ingest(pipeline, args.path, args.title, args.remove_source)
        .await?;

    let response = IngestResponse {
        id: document.id,
        title: document.title,
        file_name: document.file_name,
        status: document.status.to_string(),
        pages: stats.pages,
        words: stats.words,
        chunks_created: stats.chunks_created,
        duration_secs: stats.duration_ms as f64 / 1000.0,
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} '{}' ({} pages, {} words, {} chunks) in {}",
                colors::success("Ingested"),
                colors::label(&response.title),
                colors::number(&response.pages.to_string()),
                colors::number(&response.words.to_string()),
                colors::number(&response.chunks_created.to_string()),
                colors::number(&format_duration(response.duration_secs))
            );
            println!("Document ID: {}", colors::document_id(&response.id));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
