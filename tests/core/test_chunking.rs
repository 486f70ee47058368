// Chunking properties on lecture-sized text

use crate::common::{assert_chunk_invariants, lecture_text};
use studypack::core::ingest::{chunk_text, count_words, TextChunker};
use studypack::StudyError;

#[test]
fn test_documented_scenarios() {
    let text = "a b c d e";

    let chunks = chunk_text(text, 2, 0).unwrap();
    let contents: Vec<_> = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["a b", "c d", "e"]);

    let chunks = chunk_text(text, 3, 1).unwrap();
    let contents: Vec<_> = chunks.iter().map(|c| c.content.as_str()).collect();
    assert_eq!(contents, ["a b c", "c d e"]);

    assert!(chunk_text("", 3, 1).unwrap().is_empty());

    let chunks = chunk_text("word", 500, 50).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].content, "word");

    assert!(matches!(
        chunk_text(text, 5, 5),
        Err(StudyError::InvalidChunkConfig { .. })
    ));
}

#[test]
fn test_default_config_on_long_document() {
    let text = lecture_text(5_000);
    let chunker = TextChunker::default();
    let chunks = chunker.chunk(&text);

    // Starts at 0, 450, ..., 4500; the window at 4500 reaches the end
    assert_eq!(chunks.len(), 11);
    assert_chunk_invariants(&chunks, 500, 50);
    assert!(chunks[0].content.starts_with("enzyme0 substrate1"));
    assert!(chunks.last().unwrap().content.ends_with("rate4999"));
}

#[test]
fn test_invariants_across_configurations() {
    let text = lecture_text(1_337);
    let configs = [(1, 0), (2, 1), (10, 0), (10, 9), (64, 16), (500, 50), (2_000, 100)];

    for (size, overlap) in configs {
        let chunks = chunk_text(&text, size, overlap).unwrap();
        assert!(!chunks.is_empty(), "size={size} overlap={overlap}");
        assert_chunk_invariants(&chunks, size, overlap);
    }
}

#[test]
fn test_paragraph_breaks_are_normalized() {
    let text = lecture_text(120);
    assert!(text.contains("\n\n"));

    let chunks = chunk_text(&text, 120, 0).unwrap();
    assert_eq!(chunks.len(), 1);
    assert!(!chunks[0].content.contains('\n'));
    assert_eq!(chunks[0].word_count(), count_words(&text));
}

#[test]
fn test_zero_overlap_reconstructs_normalized_text() {
    let text = lecture_text(2_345);
    let chunks = chunk_text(&text, 333, 0).unwrap();

    let rebuilt = chunks
        .iter()
        .map(|c| c.content.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    assert_eq!(rebuilt, normalized);
}

#[test]
fn test_repeated_calls_identical() {
    let text = lecture_text(3_000);
    let chunker = TextChunker::new(256, 32).unwrap();
    assert_eq!(chunker.chunk(&text), chunker.chunk(&text));
}
