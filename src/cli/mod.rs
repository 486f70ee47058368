//! CLI adapter for studypack
//!
//! Provides the command-line surface over `core/`: chunking text,
//! ingesting documents, and managing stored documents.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// studypack - study document ingestion
///
/// Extract text from PDFs and notes, split it into overlapping
/// word-windows, and keep the result for study tooling.
#[derive(Parser, Debug)]
#[command(name = "studypack")]
#[command(version)]
#[command(about = "Study document ingestion and chunking", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a file (or stdin) into word chunks without storing it
    Chunk(commands::ChunkArgs),

    /// Extract, chunk and store a document
    Ingest(commands::IngestArgs),

    /// List stored documents, newest first
    #[command(name = "list-documents")]
    ListDocuments(commands::documents::ListArgs),

    /// Show a stored document
    #[command(name = "get-document")]
    GetDocument(commands::documents::GetArgs),

    /// Delete a stored document and its chunks
    #[command(name = "delete-document")]
    DeleteDocument(commands::documents::DeleteArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  studypack completions bash > ~/.local/share/bash-completion/completions/studypack
    ///   zsh:   studypack completions zsh > ~/.zfunc/_studypack
    ///   fish:  studypack completions fish > ~/.config/fish/completions/studypack.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::logging;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Completions need neither config nor storage
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;

    let config = Config::load()?;
    logging::init(&config.logging);
    xdg.log_paths();
    config.log_config();

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Chunk(args) => commands::chunk::execute(args, &services, cli.format).await,
        Commands::Ingest(args) => commands::ingest::execute(args, &services, cli.format).await,
        Commands::ListDocuments(args) => {
            commands::documents::execute_list(args, &services, cli.format).await
        }
        Commands::GetDocument(args) => {
            commands::documents::execute_get(args, &services, cli.format).await
        }
        Commands::DeleteDocument(args) => {
            commands::documents::execute_delete(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
