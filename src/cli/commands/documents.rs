//! Document commands - list, get, delete stored documents
//!
//! - `list-documents`
//! - `get-document`
//! - `delete-document`

use crate::cli::output::{colors, format_relative_time, truncate_words};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::Chunk;
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use std::sync::Arc;

/// Arguments for list-documents
#[derive(Args, Debug)]
pub struct ListArgs {}

/// Arguments for get-document
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Document ID
    pub id: String,

    /// Include the full extracted text
    #[arg(long)]
    pub text: bool,

    /// Include every chunk
    #[arg(long)]
    pub chunks: bool,
}

/// Arguments for delete-document
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Document ID
    pub id: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'f')]
    pub force: bool,
}

/// Document list item
#[derive(Debug, Serialize)]
pub struct DocumentListItem {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub words: usize,
    pub chunks: usize,
    pub uploaded_at: String,
}

/// Document list response
#[derive(Debug, Serialize)]
pub struct DocumentListResponse {
    pub count: usize,
    pub documents: Vec<DocumentListItem>,
}

/// Detailed document view
#[derive(Debug, Serialize)]
pub struct DocumentInfoResponse {
    pub id: String,
    pub title: String,
    pub file_name: String,
    pub status: String,
    pub pages: usize,
    pub words: usize,
    pub chunk_count: usize,
    pub chunk_size: usize,
    pub overlap: usize,
    pub uploaded_at: String,
    pub last_accessed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<Chunk>>,
}

/// Execute list-documents command
pub async fn execute_list(
    _args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let documents = services.store.list_documents()?;

    let response = DocumentListResponse {
        count: documents.len(),
        documents: documents
            .iter()
            .map(|d| DocumentListItem {
                id: d.id.clone(),
                title: d.title.clone(),
                file_name: d.file_name.clone(),
                words: d.word_count,
                chunks: d.chunk_count,
                uploaded_at: d.upload_date.to_rfc3339(),
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if response.documents.is_empty() {
                println!(
                    "No documents found. Run '{}' to add one.",
                    colors::label("studypack ingest <file> --title <title>")
                );
            } else {
                println!(
                    "{} ({}):",
                    colors::label("Documents"),
                    colors::number(&response.count.to_string())
                );
                for (item, summary) in response.documents.iter().zip(&documents) {
                    println!(
                        "  {}  {:<30} {:>8} words  {:>5} chunks  {}",
                        colors::document_id(&item.id),
                        truncate_words(&item.title, 30),
                        colors::number(&item.words.to_string()),
                        colors::number(&item.chunks.to_string()),
                        colors::dim(&format_relative_time(&summary.upload_date))
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Execute get-document command
pub async fn execute_get(
    args: GetArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = services.store.get_document(&args.id).map_err(|e| {
        if e.is_not_found() {
            format!(
                "Document '{}' not found. Run 'studypack list-documents' to see available documents.",
                args.id
            )
        } else {
            e.to_string()
        }
    })?;

    let summary = document.summary();
    let response = DocumentInfoResponse {
        id: document.id,
        title: document.title,
        file_name: document.file_name,
        status: document.status.to_string(),
        pages: document.num_pages,
        words: summary.word_count,
        chunk_count: document.chunks.len(),
        chunk_size: document.chunking.chunk_size,
        overlap: document.chunking.overlap,
        uploaded_at: document.upload_date.to_rfc3339(),
        last_accessed: document.last_accessed.to_rfc3339(),
        extracted_text: args.text.then_some(document.extracted_text),
        chunks: args.chunks.then_some(document.chunks),
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{}: {}",
                colors::label("Document"),
                colors::document_id(&response.id)
            );
            println!("  {}: {}", colors::label("Title"), response.title);
            println!(
                "  {}: {}",
                colors::label("File"),
                colors::file_path(&response.file_name)
            );
            println!("  {}: {}", colors::label("Status"), response.status);
            println!(
                "  {}: {}",
                colors::label("Pages"),
                colors::number(&response.pages.to_string())
            );
            println!(
                "  {}: {}",
                colors::label("Words"),
                colors::number(&response.words.to_string())
            );
            println!(
                "  {}: {} (size {}, overlap {})",
                colors::label("Chunks"),
                colors::number(&response.chunk_count.to_string()),
                response.chunk_size,
                response.overlap
            );
            println!(
                "  {}: {}",
                colors::label("Uploaded"),
                colors::dim(&response.uploaded_at)
            );

            if let Some(text) = &response.extracted_text {
                println!();
                println!("{}", colors::label("Text:"));
                println!("{text}");
            }
            if let Some(chunks) = &response.chunks {
                for chunk in chunks {
                    println!();
                    println!(
                        "{} {}",
                        colors::rank(&format!("[{}]", chunk.chunk_index)),
                        colors::dim(&format!("{} words", chunk.word_count()))
                    );
                    println!("{}", chunk.content);
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Execute delete-document command
pub async fn execute_delete(
    args: DeleteArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if !services.store.document_exists(&args.id) {
        return Err(format!(
            "Document '{}' not found. Run 'studypack list-documents' to see available documents.",
            args.id
        )
        .into());
    }

    // Confirmation prompt unless --force
    if !args.force {
        print!(
            "Delete document '{}'? [y/N] ",
            colors::document_id(&args.id)
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", colors::dim("Cancelled."));
            return Ok(());
        }
    }

    services.store.delete_document(&args.id)?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} document '{}'",
                colors::success("Deleted"),
                colors::document_id(&args.id)
            );
        }
        OutputFormat::Json => {
            let response = serde_json::json!({
                "deleted": true,
                "id": args.id
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
