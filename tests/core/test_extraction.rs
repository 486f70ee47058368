// Text extraction from PDF and plain-text sources

use crate::common::{sample_pdf, TestFiles};
use studypack::core::ingest::{extractor_for, PdfExtractor, TextExtractor};
use studypack::StudyError;

#[test]
fn test_pdf_page_count_and_text() {
    let files = TestFiles::new();
    let path = files.pdf(
        "enzymes.pdf",
        &["Enzymes lower activation energy", "Substrates bind the active site"],
    );

    let extracted = extractor_for(&path).unwrap().extract(&path).unwrap();

    assert_eq!(extracted.num_pages, 2);
    assert!(extracted.text.contains("Enzymes"));
    assert!(extracted.text.contains("Substrates"));
    let first = extracted.text.find("Enzymes").unwrap();
    let second = extracted.text.find("Substrates").unwrap();
    assert!(first < second, "pages must be extracted in order");
}

#[test]
fn test_pdf_from_memory() {
    let bytes = sample_pdf(&["Mitosis"]);
    let extracted = PdfExtractor.extract_bytes(&bytes).unwrap();
    assert_eq!(extracted.num_pages, 1);
    assert!(extracted.text.contains("Mitosis"));
}

#[test]
fn test_truncated_pdf_fails() {
    let bytes = sample_pdf(&["Meiosis"]);
    let err = PdfExtractor.extract_bytes(&bytes[..20]).unwrap_err();
    assert!(matches!(err, StudyError::ExtractionFailed(_)));
}

#[test]
fn test_markdown_passthrough() {
    let files = TestFiles::new();
    let path = files.text("notes.md", "# Cells\n\n- nucleus\n- ribosome\n");

    let extracted = extractor_for(&path).unwrap().extract(&path).unwrap();
    assert_eq!(extracted.num_pages, 1);
    assert_eq!(extracted.text, "# Cells\n\n- nucleus\n- ribosome\n");
}
