//! Tests for the chunk CLI command

use crate::common::{create_test_services, lecture_text, TestFiles};
use studypack::cli::commands::chunk::{execute, ChunkArgs};
use studypack::cli::OutputFormat;

#[tokio::test]
async fn test_chunk_text_file_human() {
    let (services, _storage) = create_test_services();
    let files = TestFiles::new();
    let path = files.text("notes.txt", &lecture_text(60));

    let args = ChunkArgs {
        input: path,
        chunk_size: Some(20),
        overlap: Some(5),
        summary: false,
    };

    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Chunk should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_chunk_pdf_json_summary() {
    let (services, _storage) = create_test_services();
    let files = TestFiles::new();
    let path = files.pdf("slides.pdf", &["Photosynthesis happens in chloroplasts"]);

    let args = ChunkArgs {
        input: path,
        chunk_size: None,
        overlap: None,
        summary: true,
    };

    let result = execute(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Chunk PDF should succeed: {:?}", result.err());
}

#[tokio::test]
async fn test_chunk_does_not_store() {
    let (services, _storage) = create_test_services();
    let files = TestFiles::new();
    let path = files.text("notes.txt", "nothing is persisted here");

    let args = ChunkArgs {
        input: path,
        chunk_size: Some(2),
        overlap: Some(0),
        summary: false,
    };

    execute(args, &services, OutputFormat::Json).await.unwrap();
    assert!(services.store.list_documents().unwrap().is_empty());
}

#[tokio::test]
async fn test_chunk_rejects_equal_overlap() {
    let (services, _storage) = create_test_services();
    let files = TestFiles::new();
    let path = files.text("notes.txt", "a b c d e");

    let args = ChunkArgs {
        input: path,
        chunk_size: Some(5),
        overlap: Some(5),
        summary: false,
    };

    let err = execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("overlap must be < chunk_size"));
}

#[tokio::test]
async fn test_chunk_missing_input() {
    let (services, _storage) = create_test_services();

    let args = ChunkArgs {
        input: "/nonexistent/notes.txt".into(),
        chunk_size: None,
        overlap: None,
        summary: false,
    };

    let err = execute(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("does not exist"));
}
