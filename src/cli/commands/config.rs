//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// File the configuration was read from; `None` when running on defaults
    pub config_file: Option<String>,
    pub data_dir: String,
    pub chunking: ChunkingInfo,
    pub max_file_size_mb: usize,
    pub log_level: String,
    pub log_json: bool,
}

impl ConfigResponse {
    pub fn from_config(config: &Config) -> Self {
        Self {
            config_file: config
                .source_file
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned()),
            data_dir: config.storage.data_dir.to_string_lossy().into_owned(),
            chunking: ChunkingInfo {
                chunk_size: config.chunking.chunk_size,
                overlap: config.chunking.overlap,
                stride: config.chunking.chunk_size.saturating_sub(config.chunking.overlap),
            },
            max_file_size_mb: config.limits.max_file_size_mb,
            log_level: config.logging.level.clone(),
            log_json: config.logging.json,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChunkingInfo {
    pub chunk_size: usize,
    pub overlap: usize,
    pub stride: usize,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse::from_config(&services.config);

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!(
                "  config_file: {}",
                response.config_file.as_deref().unwrap_or("(none, using defaults)")
            );
            println!("  data_dir: {}", response.data_dir);
            println!("  chunking:");
            println!("    chunk_size: {} words", response.chunking.chunk_size);
            println!("    overlap: {} words", response.chunking.overlap);
            println!("    stride: {} words", response.chunking.stride);
            println!("  limits:");
            println!("    max_file_size_mb: {}", response.max_file_size_mb);
            println!("  logging:");
            println!("    level: {}", response.log_level);
            println!("    json: {}", response.log_json);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
