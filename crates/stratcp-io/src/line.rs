//! Line-oriented copy strategy with terminator normalization

use crate::text::{map_read_error, strip_bom};
use crate::validate::validate_args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use stratcp_types::{Error, Result};
use tracing::debug;

/// Copy the source file to the destination line by line, normalizing the
/// line terminator to `\n`.
///
/// Lines are read terminator-stripped; `\r`, `\n`, and `\r\n` all count
/// as terminators, so classic-Mac, Unix, and Windows sources produce
/// the same destination. The terminator is written only between lines: a
/// source whose final line has no trailing terminator does not gain one,
/// and a trailing terminator in the source is dropped. A leading UTF-8
/// byte order mark is stripped; none is written. An empty source yields
/// a count of 0 and an empty destination.
///
/// Returns the number of lines written, counting a final unterminated
/// line.
pub fn copy_by_line<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<u64> {
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

    let mut reader = BufReader::new(source_file);
    let mut writer = BufWriter::new(destination_file);

    let mut lines_copied = 0u64;

    // `None` is the end-of-stream sentinel; an empty string is a real line.
    let mut current = read_line(&mut reader).map_err(|e| map_read_error(source, e))?;

    if let Some(first) = current.as_mut() {
        let bom_len = first.len() - strip_bom(first).len();
        if bom_len > 0 {
            first.drain(..bom_len);
        }
    }

    while let Some(line) = current {
        writer.write_all(line.as_bytes()).map_err(|e| {
            Error::io(format!(
                "Failed to write to file '{}': {}",
                destination.display(),
                e
            ))
        })?;
        lines_copied += 1;

        current = read_line(&mut reader).map_err(|e| map_read_error(source, e))?;

        // Terminator only between lines, never after the last one
        if current.is_some() {
            writer.write_all(b"\n").map_err(|e| {
                Error::io(format!(
                    "Failed to write to file '{}': {}",
                    destination.display(),
                    e
                ))
            })?;
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
        "Line copy completed: {} -> {} ({} lines)",
        source.display(),
        destination.display(),
        lines_copied
    );
    Ok(lines_copied)
}

/// Read one terminator-stripped line, treating `\r`, `\n`, and `\r\n` as
/// a single terminator each.
///
/// [`BufRead::lines`] only splits on `\n` and `\r\n`, so a bare `\r`
/// needs to be handled by hand. Returns `Ok(None)` at end-of-stream;
/// invalid UTF-8 surfaces as an `InvalidData` error.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    let mut terminated = false;

    loop {
        let (terminator, used) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break; // EOF
            }
            match buf.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(pos) => {
                    bytes.extend_from_slice(&buf[..pos]);
                    (Some(buf[pos]), pos + 1)
                }
                None => {
                    bytes.extend_from_slice(buf);
                    (None, buf.len())
                }
            }
        };
        reader.consume(used);

        match terminator {
            Some(b'\r') => {
                // `\r\n` counts as one terminator, even split across fills
                if reader.fill_buf()?.first() == Some(&b'\n') {
                    reader.consume(1);
                }
                terminated = true;
                break;
            }
            Some(_) => {
                terminated = true;
                break;
            }
            None => {}
        }
    }

    if bytes.is_empty() && !terminated {
        return Ok(None);
    }

    let line =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Some(line))
}
