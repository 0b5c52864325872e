//! In-memory copy strategies with a staging-buffer round trip
//!
//! Both strategies here decode the source as UTF-8 text, push the encoded
//! bytes through an in-memory staging buffer, pull them back out, decode
//! again, and only then write to the destination. The round trip performs
//! no transformation; it demonstrates buffer transfer semantics and is
//! kept deliberately. The returned counts are character counts, which for
//! multi-byte content are smaller than the byte counts reported by the
//! binary-safe strategies.

use crate::text::read_source_text;
use crate::validate::validate_args;
use crate::BLOCK_SIZE;
use bytes::{BufMut, BytesMut};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use stratcp_types::{Error, Result};
use tracing::debug;

/// Copy the source file to the destination through a full in-memory
/// materialization, writing one character at a time.
///
/// The whole source is read into a single string, encoded to bytes,
/// staged through an in-memory buffer, decoded back, and written out
/// character by character. The destination is created if absent and
/// truncated if present.
///
/// Returns the number of characters written, not bytes. For ASCII-only
/// content the two coincide.
pub fn copy_in_memory_by_byte<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    validate_args(source, destination)?;

    let text = read_source_text(source)?;

    // Encode to bytes, stage through the in-memory buffer, extract again.
    let encoded = text.into_bytes();
    let staged = stage_through_buffer(&encoded);

    let decoded = String::from_utf8(staged).map_err(|e| Error::encoding(e.to_string()))?;

    let mut writer = create_destination_writer(destination)?;
    let mut chars_written = 0u64;
    let mut utf8_buf = [0u8; 4];

    for ch in decoded.chars() {
        write_char(&mut writer, ch, &mut utf8_buf, destination)?;
        chars_written += 1;
    }

    flush_destination(&mut writer, destination)?;

    debug!(
        "In-memory byte copy completed: {} -> {} ({} chars)",
        source.display(),
        destination.display(),
        chars_written
    );
    Ok(chars_written)
}

/// Copy the source file to the destination in 1024-character chunks.
///
/// The character buffer persists across iterations. Each iteration fills
/// up to [`BLOCK_SIZE`] characters, encodes the entire buffer (a stale
/// tail from a previous longer chunk included), round-trips the bytes
/// through the staging buffer, decodes them back, and writes only the
/// first `chunk_size` decoded characters. Writing the valid prefix and
/// never the stale tail is what keeps a final partial chunk intact.
/// Terminates when a fill yields zero characters.
///
/// Returns the number of characters written.
pub fn copy_in_memory_by_block<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<u64> {
    let source = source.as_ref();
    let destination = destination.as_ref();
    validate_args(source, destination)?;

    let text = read_source_text(source)?;
    let mut writer = create_destination_writer(destination)?;

    let mut buffer = vec!['\0'; BLOCK_SIZE];
    let mut chars = text.chars();
    let mut chars_copied = 0u64;
    let mut utf8_buf = [0u8; 4];

    loop {
        let mut chunk_size = 0;
        for slot in &mut buffer {
            match chars.next() {
                Some(ch) => {
                    *slot = ch;
                    chunk_size += 1;
                }
                None => break,
            }
        }
        if chunk_size == 0 {
            break;
        }

        // Round-trip the whole buffer, stale tail and all.
        let encoded: String = buffer.iter().collect();
        let staged = stage_through_buffer(encoded.as_bytes());
        let decoded = std::str::from_utf8(&staged)?;

        // Only the valid chunk prefix reaches the destination.
        for ch in decoded.chars().take(chunk_size) {
            write_char(&mut writer, ch, &mut utf8_buf, destination)?;
        }
        chars_copied += chunk_size as u64;
    }

    flush_destination(&mut writer, destination)?;

    debug!(
        "In-memory block copy completed: {} -> {} ({} chars)",
        source.display(),
        destination.display(),
        chars_copied
    );
    Ok(chars_copied)
}

/// Push bytes into the staging buffer and immediately extract them again.
fn stage_through_buffer(data: &[u8]) -> Vec<u8> {
    let mut staging = BytesMut::with_capacity(data.len());
    staging.put_slice(data);
    staging.freeze().to_vec()
}

fn create_destination_writer(destination: &Path) -> Result<BufWriter<File>> {
    let file = File::create(destination).map_err(|e| {
        Error::io(format!(
            "Failed to create file '{}': {}",
            destination.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

fn write_char(
    writer: &mut BufWriter<File>,
    ch: char,
    utf8_buf: &mut [u8; 4],
    destination: &Path,
) -> Result<()> {
    writer
        .write_all(ch.encode_utf8(utf8_buf).as_bytes())
        .map_err(|e| {
            Error::io(format!(
                "Failed to write to file '{}': {}",
                destination.display(),
                e
            ))
        })
}

fn flush_destination(writer: &mut BufWriter<File>, destination: &Path) -> Result<()> {
    writer.flush().map_err(|e| {
        Error::io(format!(
            "Failed to flush file '{}': {}",
            destination.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stratcp_types::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_by_byte_ascii() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.txt");
        let dest = temp_dir.path().join("dest.txt");
        fs::write(&source, "plain ascii content").unwrap();

        let count = copy_in_memory_by_byte(&source, &dest).unwrap();

        // For ASCII the character count equals the byte count
        assert_eq!(count, 19);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "plain ascii content");
    }

    #[test]
    fn test_in_memory_by_byte_multibyte() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.txt");
        let dest = temp_dir.path().join("dest.txt");
        let content = "héllo wörld"; // 11 chars, 13 bytes
        fs::write(&source, content).unwrap();

        let count = copy_in_memory_by_byte(&source, &dest).unwrap();

        assert_eq!(count, 11);
        assert!(count < content.len() as u64);
        assert_eq!(fs::read_to_string(&dest).unwrap(), content);
    }

    #[test]
    fn test_in_memory_by_byte_strips_bom() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.txt");
        let dest = temp_dir.path().join("dest.txt");
        fs::write(&source, "\u{feff}abc").unwrap();

        let count = copy_in_memory_by_byte(&source, &dest).unwrap();

        // The mark is consumed on read: neither counted nor written
        assert_eq!(count, 3);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "abc");
    }

    #[test]
    fn test_in_memory_by_block_strips_bom() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.txt");
        let dest = temp_dir.path().join("dest.txt");
        fs::write(&source, "\u{feff}abc").unwrap();

        let count = copy_in_memory_by_block(&source, &dest).unwrap();

        assert_eq!(count, 3);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "abc");
    }

    #[test]
    fn test_in_memory_by_byte_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.bin");
        let dest = temp_dir.path().join("dest.txt");
        fs::write(&source, [0x61u8, 0xff, 0x62]).unwrap();

        let error = copy_in_memory_by_byte(&source, &dest).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Encoding);
    }

    #[test]
    fn test_in_memory_by_block_multiple_chunks() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.txt");
        let dest = temp_dir.path().join("dest.txt");
        // Two full chunks plus a short final one
        let content = "x".repeat(BLOCK_SIZE * 2 + 100);
        fs::write(&source, &content).unwrap();

        let count = copy_in_memory_by_block(&source, &dest).unwrap();

        assert_eq!(count, (BLOCK_SIZE * 2 + 100) as u64);
        assert_eq!(fs::read_to_string(&dest).unwrap(), content);
    }

    #[test]
    fn test_in_memory_by_block_stale_tail_not_written() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.txt");
        let dest = temp_dir.path().join("dest.txt");
        // A full first chunk leaves the buffer entirely populated; the short
        // second chunk must not drag the leftover tail into the destination.
        let content = format!("{}{}", "a".repeat(BLOCK_SIZE), "tail");
        fs::write(&source, &content).unwrap();

        let count = copy_in_memory_by_block(&source, &dest).unwrap();

        assert_eq!(count, (BLOCK_SIZE + 4) as u64);
        assert_eq!(fs::read_to_string(&dest).unwrap(), content);
    }

    #[test]
    fn test_in_memory_by_block_multibyte_at_chunk_boundary() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.txt");
        let dest = temp_dir.path().join("dest.txt");
        // Multi-byte characters straddling the 1024-character boundary
        let content = "é".repeat(BLOCK_SIZE + 7);
        fs::write(&source, &content).unwrap();

        let count = copy_in_memory_by_block(&source, &dest).unwrap();

        assert_eq!(count, (BLOCK_SIZE + 7) as u64);
        assert_eq!(fs::read_to_string(&dest).unwrap(), content);
    }

    #[test]
    fn test_in_memory_by_block_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("empty.txt");
        let dest = temp_dir.path().join("dest.txt");
        fs::write(&source, "").unwrap();

        assert_eq!(copy_in_memory_by_block(&source, &dest).unwrap(), 0);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "");
    }

    #[test]
    fn test_overwrites_existing_destination() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("source.txt");
        let dest = temp_dir.path().join("dest.txt");
        fs::write(&source, "new").unwrap();
        fs::write(&dest, "previous destination content").unwrap();

        copy_in_memory_by_byte(&source, &dest).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }
}
