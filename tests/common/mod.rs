// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{lecture_text, sample_pdf, TestFiles};
#[allow(unused_imports)]
pub use helpers::{assert_chunk_invariants, create_test_services};
