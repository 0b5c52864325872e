//! Buffered copy strategy using decorating reader/writer layers

use crate::validate::validate_args;
use crate::BLOCK_SIZE;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use stratcp_types::{Error, Result};
use tracing::debug;

/// Copy the source file to the destination through 1024-byte buffering
/// decorators on both handles.
///
/// End-to-end byte content is identical to [`copy_by_block`]; only the
/// I/O layering differs. The loop continues while the most recent read
/// filled the entire buffer, so end-of-stream is detected at whole-buffer
/// granularity: the first short read (zero included) is written out and
/// the loop stops. The writer is flushed before returning so that a
/// deferred write failure surfaces as an error instead of being lost in
/// the drop.
///
/// Returns the number of bytes written.
///
/// [`copy_by_block`]: crate::copy_by_block
pub fn copy_buffered<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    validate_args(source, destination)?;

    let source_file = File::open(source).map_err(|e| {
        Error::io(format!("Failed to open file '{}': {}", source.display(), e))
    })?;
    let destination_file = File::create(destination).map_err(|e| {
        Error::io(format!(
            "Failed to create file '{}': {}",
            destination.display(),
            e
        ))
    })?;

    let mut reader = BufReader::with_capacity(BLOCK_SIZE, source_file);
    let mut writer = BufWriter::with_capacity(BLOCK_SIZE, destination_file);

    let mut buffer = [0u8; BLOCK_SIZE];
    let mut bytes_copied = 0u64;

    loop {
        let chunk_size = reader.read(&mut buffer).map_err(|e| {
            Error::io(format!("Failed to read from file '{}': {}", source.display(), e))
        })?;

        writer.write_all(&buffer[..chunk_size]).map_err(|e| {
            Error::io(format!(
                "Failed to write to file '{}': {}",
                destination.display(),
                e
            ))
        })?;
        bytes_copied += chunk_size as u64;

        if chunk_size < BLOCK_SIZE {
            break; // short read signals end-of-stream
        }
    }

    writer.flush().map_err(|e| {
        Error::io(format!(
            "Failed to flush file '{}': {}",
            destination.display(),
            e
        ))
    })?;

    debug!(
        "Buffered copy completed: {} -> {} ({} bytes)",
        source.display(),
        destination.display(),
        bytes_copied
    );
    Ok(bytes_copied)
}
