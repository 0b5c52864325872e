//! Byte-at-a-time copy strategy

use crate::validate::validate_args;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use stratcp_types::{Error, Result};
use tracing::debug;

/// Copy the source file to the destination one byte at a time.
///
/// The slowest strategy by a wide margin: every byte costs one read and
/// one write call against the unbuffered file handles. Binary-safe. The
/// destination is created if absent and truncated if present.
///
/// Returns the number of bytes written. Both handles are released on
/// every exit path, including when an I/O error propagates mid-loop.
pub fn copy_by_byte<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<u64> {
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

    let mut byte = [0u8; 1];
    let mut bytes_copied = 0u64;

    loop {
        let read = reader.read(&mut byte).map_err(|e| {
            Error::io(format!("Failed to read from file '{}': {}", source.display(), e))
        })?;
        if read == 0 {
            break; // EOF
        }

        writer.write_all(&byte).map_err(|e| {
            Error::io(format!(
                "Failed to write to file '{}': {}",
                destination.display(),
                e
            ))
        })?;
        bytes_copied += 1;
    }

    debug!(
        "Byte copy completed: {} -> {} ({} bytes)",
        source.display(),
        destination.display(),
        bytes_copied
    );
    Ok(bytes_copied)
}
