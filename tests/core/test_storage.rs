// Document persistence and lifecycle

use studypack::core::ingest::IngestPipeline;
use studypack::core::storage::DocumentStore;
use tempfile::TempDir;

#[test]
fn test_chunks_persist_as_embedded_records() {
    let temp = TempDir::new().unwrap();
    let store = DocumentStore::new(temp.path().to_path_buf());
    let pipeline = IngestPipeline::new(2, 0, 10).unwrap();
    let (doc, _) = pipeline.ingest_text("a b c d e", "Letters", "letters.txt").unwrap();
    store.create_document(&doc).unwrap();

    let raw = std::fs::read_to_string(
        temp.path()
            .join("documents")
            .join(format!("{}.json", doc.id)),
    )
    .unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let chunks = json["chunks"].as_array().unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0]["content"], "a b");
    assert_eq!(chunks[2]["content"], "e");
    assert_eq!(chunks[2]["chunkIndex"], 2);
    assert_eq!(json["status"], "ready");
}

#[test]
fn test_get_leaves_chunks_untouched() {
    let temp = TempDir::new().unwrap();
    let store = DocumentStore::new(temp.path().to_path_buf());
    let pipeline = IngestPipeline::new(3, 1, 10).unwrap();
    let (doc, _) = pipeline
        .ingest_text("one two three four five six", "Numbers", "n.txt")
        .unwrap();
    store.create_document(&doc).unwrap();

    for _ in 0..3 {
        let fetched = store.get_document(&doc.id).unwrap();
        assert_eq!(fetched.chunks, doc.chunks);
        assert_eq!(fetched.upload_date, doc.upload_date);
    }
}

#[test]
fn test_delete_removes_only_target() {
    let temp = TempDir::new().unwrap();
    let store = DocumentStore::new(temp.path().to_path_buf());
    let pipeline = IngestPipeline::new(500, 50, 10).unwrap();

    let (keep, _) = pipeline.ingest_text("keep me", "Keep", "k.txt").unwrap();
    let (drop, _) = pipeline.ingest_text("drop me", "Drop", "d.txt").unwrap();
    store.create_document(&keep).unwrap();
    store.create_document(&drop).unwrap();

    store.delete_document(&drop.id).unwrap();

    let remaining = store.list_documents().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);
    assert!(store.delete_document(&drop.id).unwrap_err().is_not_found());
}
