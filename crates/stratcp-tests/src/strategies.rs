//! Monomorphized strategy table for parameterized tests
//!
//! The copy operations are generic over `AsRef<Path>`; the wrappers here
//! pin them to `&Path` so test matrices can treat every strategy as a
//! plain function pointer.

use std::path::Path;
use stratcp_types::Result;

/// A copy strategy as a plain function pointer
pub type CopyFn = fn(&Path, &Path) -> Result<u64>;

/// Byte-at-a-time strategy
pub fn byte(source: &Path, destination: &Path) -> Result<u64> {
    stratcp_io::copy_by_byte(source, destination)
}

/// Fixed-block strategy
pub fn block(source: &Path, destination: &Path) -> Result<u64> {
    stratcp_io::copy_by_block(source, destination)
}

/// Buffered-decorator strategy
pub fn buffered(source: &Path, destination: &Path) -> Result<u64> {
    stratcp_io::copy_buffered(source, destination)
}

/// In-memory character-at-a-time strategy
pub fn in_memory_byte(source: &Path, destination: &Path) -> Result<u64> {
    stratcp_io::copy_in_memory_by_byte(source, destination)
}

/// In-memory chunked-character strategy
pub fn in_memory_block(source: &Path, destination: &Path) -> Result<u64> {
    stratcp_io::copy_in_memory_by_block(source, destination)
}

/// Line-oriented strategy
pub fn line(source: &Path, destination: &Path) -> Result<u64> {
    stratcp_io::copy_by_line(source, destination)
}

/// Every strategy paired with a stable name for assertion messages
pub const ALL: [(&str, CopyFn); 6] = [
    ("byte", byte),
    ("block", block),
    ("buffered", buffered),
    ("in_memory_byte", in_memory_byte),
    ("in_memory_block", in_memory_block),
    ("line", line),
];
