//! Tests for document CLI commands (list, get, delete)

use crate::common::create_test_services;
use std::sync::Arc;
use studypack::cli::commands::documents::{
    execute_delete, execute_get, execute_list, DeleteArgs, GetArgs, ListArgs,
};
use studypack::cli::OutputFormat;
use studypack::Services;

fn store_document(services: &Arc<Services>, title: &str, text: &str) -> String {
    let pipeline = services.create_pipeline(Some(3), Some(1)).unwrap();
    let (doc, _) = pipeline.ingest_text(text, title, "notes.txt").unwrap();
    services.store.create_document(&doc).unwrap();
    doc.id
}

// =============================================================================
// list-documents tests
// =============================================================================

#[tokio::test]
async fn test_list_documents_empty() {
    let (services, _storage) = create_test_services();

    let result = execute_list(ListArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "List empty store should succeed");
}

#[tokio::test]
async fn test_list_documents_multiple_json() {
    let (services, _storage) = create_test_services();
    store_document(&services, "Algebra", "x plus y equals z");
    store_document(&services, "Geometry", "angles of a triangle sum to 180 degrees");

    let result = execute_list(ListArgs {}, &services, OutputFormat::Json).await;
    assert!(result.is_ok());

    let result = execute_list(ListArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

// =============================================================================
// get-document tests
// =============================================================================

#[tokio::test]
async fn test_get_document_with_chunks() {
    let (services, _storage) = create_test_services();
    let id = store_document(&services, "Algebra", "x plus y equals z");
    let before = services.store.peek_document(&id).unwrap().last_accessed;

    let args = GetArgs {
        id: id.clone(),
        text: true,
        chunks: true,
    };
    let result = execute_get(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Get should succeed: {:?}", result.err());

    let after = services.store.peek_document(&id).unwrap().last_accessed;
    assert!(after >= before);
}

#[tokio::test]
async fn test_get_document_not_found() {
    let (services, _storage) = create_test_services();

    let args = GetArgs {
        id: "missing-doc".to_string(),
        text: false,
        chunks: false,
    };
    let err = execute_get(args, &services, OutputFormat::Json)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("list-documents"));
}

// =============================================================================
// delete-document tests
// =============================================================================

#[tokio::test]
async fn test_delete_document_force() {
    let (services, _storage) = create_test_services();
    let id = store_document(&services, "Scratch", "to be removed");

    let args = DeleteArgs {
        id: id.clone(),
        force: true,
    };
    execute_delete(args, &services, OutputFormat::Json)
        .await
        .unwrap();

    assert!(!services.store.document_exists(&id));
}

#[tokio::test]
async fn test_delete_document_not_found() {
    let (services, _storage) = create_test_services();

    let args = DeleteArgs {
        id: "missing-doc".to_string(),
        force: true,
    };
    let err = execute_delete(args, &services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}
