//! Shared test fixtures and data generators
//!
//! Common helpers used by the integration tests so that every scenario
//! builds its inputs the same way.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;

/// Test data generation patterns
#[derive(Debug, Clone, Copy)]
pub enum TestDataPattern {
    /// All zeros
    Zeros,
    /// Deterministic pseudo-random bytes, generally not valid UTF-8
    Binary,
    /// Plain ASCII text
    Ascii,
    /// Text containing multi-byte UTF-8 characters
    MultiByte,
}

/// Generate test data of the given byte size with the specified pattern.
///
/// The `Ascii` and `MultiByte` patterns produce valid UTF-8; `MultiByte`
/// output may come in slightly under `size` so that no character is split.
pub fn generate_test_data(size: usize, pattern: TestDataPattern) -> Vec<u8> {
    match pattern {
        TestDataPattern::Zeros => vec![0u8; size],
        TestDataPattern::Binary => {
            use std::collections::hash_map::DefaultHasher;
            use std::hash::{Hash, Hasher};

            // Deterministic "random" data for reproducible tests
            let mut data = Vec::with_capacity(size);
            let mut hasher = DefaultHasher::new();
            for i in 0..size {
                i.hash(&mut hasher);
                data.push((hasher.finish() % 256) as u8);
            }
            data
        }
        TestDataPattern::Ascii => (0..size)
            .map(|i| b"abcdefghijklmnopqrstuvwxyz0123456789 "[i % 37])
            .collect(),
        TestDataPattern::MultiByte => {
            let mut text = String::with_capacity(size);
            for ch in "héllo wörld 中文 ".chars().cycle() {
                if text.len() + ch.len_utf8() > size {
                    break;
                }
                text.push(ch);
            }
            text.into_bytes()
        }
    }
}

/// Create a test file at `path` with `size` bytes of the given pattern
pub fn create_test_file(path: &Path, size: usize, pattern: TestDataPattern) -> io::Result<()> {
    fs::write(path, generate_test_data(size, pattern))
}

/// Create a test file at `path` with exact content
pub fn create_test_file_with_content(path: &Path, content: &[u8]) -> io::Result<()> {
    fs::write(path, content)
}

static INIT_LOGGING: Once = Once::new();

/// Initialize tracing output for tests, honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs the
/// subscriber.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
