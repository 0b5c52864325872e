//! Fixed-size block copy strategy

use crate::validate::validate_args;
use crate::BLOCK_SIZE;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use stratcp_types::{Error, Result};
use tracing::debug;

/// Copy the source file to the destination through a fixed 1024-byte buffer.
///
/// Each iteration reads up to [`BLOCK_SIZE`] bytes and writes exactly the
/// number of bytes actually read, so a final partial chunk is never padded.
/// Terminates on a zero-length read. Binary-safe. An empty source performs
/// zero writes and returns 0.
///
/// Returns the number of bytes written.
pub fn copy_by_block<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    validate_args(source, destination)?;

    let mut reader = File::open(source).map_err(|e| {
        Error::io(format!("Failed to open file '{}': {}", source.display(), e))
    })?;
    let mut writer = File::create(destination).map_err(|e| {
        Error::io(format!(
            "Failed to create file '{}': {}",
            destination.display(),
            e
        ))
    })?;

    let mut buffer = [0u8; BLOCK_SIZE];
    let mut bytes_copied = 0u64;

    loop {
        let chunk_size = reader.read(&mut buffer).map_err(|e| {
            Error::io(format!("Failed to read from file '{}': {}", source.display(), e))
        })?;
        if chunk_size == 0 {
            break; // EOF
        }

        writer.write_all(&buffer[..chunk_size]).map_err(|e| {
            Error::io(format!(
                "Failed to write to file '{}': {}",
                destination.display(),
                e
            ))
        })?;
        bytes_copied += chunk_size as u64;
    }

    debug!(
        "Block copy completed: {} -> {} ({} bytes)",
        source.display(),
        destination.display(),
        bytes_copied
    );
    Ok(bytes_copied)
}
