//! Chunk command - split text into word-windows without storing it

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::ingest::extractor::{check_file_size, extractor_for, read_text_limited};
use crate::core::ingest::count_words;
use crate::core::services::Services;
use crate::core::types::Chunk;
use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the chunk command
#[derive(Args, Debug)]
pub struct ChunkArgs {
    /// File to chunk (.pdf, .txt, .md), or '-' for stdin
    pub input: PathBuf,

    /// Words per chunk (defaults to config)
    #[arg(long)]
    pub chunk_size: Option<usize>,

    /// Words shared between consecutive chunks (defaults to config)
    #[arg(long)]
    pub overlap: Option<usize>,

    /// Only print counts, not chunk contents
    #[arg(long, short = 's')]
    pub summary: bool,
}

/// Chunking result response
#[derive(Debug, Serialize)]
pub struct ChunkResponse {
    pub chunk_size: usize,
    pub overlap: usize,
    pub words: usize,
    pub chunk_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<Chunk>>,
}

/// Execute the chunk command
pub async fn execute(
    args: ChunkArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    // Fail on bad config before reading any input
    let pipeline = services.create_pipeline(args.chunk_size, args.overlap)?;
    let chunker = pipeline.chunker();

    let text = read_input(&args.input, services.config.limits.max_file_size_mb)?;
    let chunks = chunker.chunk(&text);

    let response = ChunkResponse {
        chunk_size: chunker.chunk_size(),
        overlap: chunker.overlap(),
        words: count_words(&text),
        chunk_count: chunks.len(),
        chunks: if args.summary { None } else { Some(chunks) },
    };

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} words into {} chunks (size {}, overlap {})",
                colors::success("Split"),
                colors::number(&response.words.to_string()),
                colors::number(&response.chunk_count.to_string()),
                response.chunk_size,
                response.overlap
            );
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

fn read_input(input: &Path, max_file_size_mb: usize) -> Result<String, Box<dyn std::error::Error>> {
    if input.as_os_str() == "-" {
        return Ok(read_text_limited(
            std::io::stdin().lock(),
            "<stdin>",
            max_file_size_mb,
        )?);
    }

    if !input.is_file() {
        return Err(format!(
            "Input '{}' does not exist or is not a file.",
            input.display()
        )
        .into());
    }

    let extractor = extractor_for(input)?;
    check_file_size(input, max_file_size_mb)?;
    Ok(extractor.extract(input)?.text)
}
