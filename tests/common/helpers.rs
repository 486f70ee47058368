// Test helper functions

use std::sync::Arc;
use studypack::core::config::Config;
use studypack::core::services::Services;
use studypack::Chunk;
use tempfile::TempDir;

/// Create test services with temporary storage
///
/// Returns the TempDir so it stays alive for the test's duration.
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> (Arc<Services>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::default();
    config.storage.data_dir = temp_dir.path().to_path_buf();

    (Arc::new(Services::new(config)), temp_dir)
}

/// Assert the ordering and overlap properties of a chunk sequence
#[allow(dead_code)] // Used in integration tests
pub fn assert_chunk_invariants(chunks: &[Chunk], chunk_size: usize, overlap: usize) {
    for (i, chunk) in chunks.iter().enumerate() {
        assert_eq!(chunk.chunk_index, i, "chunk indices must be 0..n");
        let words = chunk.word_count();
        assert!(
            (1..=chunk_size).contains(&words),
            "chunk {i} has {words} words (limit {chunk_size})"
        );
    }

    for pair in chunks.windows(2) {
        let left: Vec<&str> = pair[0].content.split(' ').collect();
        let right: Vec<&str> = pair[1].content.split(' ').collect();
        assert_eq!(left.len(), chunk_size, "only the last chunk may be short");
        assert_eq!(
            &left[left.len() - overlap..],
            &right[..overlap],
            "chunks {} and {} must share {overlap} words",
            pair[0].chunk_index,
            pair[1].chunk_index
        );
    }
}
