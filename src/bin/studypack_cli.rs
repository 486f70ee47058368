//! studypack CLI - ingest and chunk study documents
//!
//! # Examples
//!
//! ```bash
//! # Chunk a file without storing it
//! studypack chunk lecture.pdf --chunk-size 200 --overlap 20
//!
//! # Ingest a PDF
//! studypack ingest lecture.pdf --title "Lecture 3: Enzymes"
//!
//! # List documents
//! studypack list-documents
//!
//! # Show configuration
//! studypack show-config
//! ```

use clap::Parser;
use studypack::cli::{output, run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
