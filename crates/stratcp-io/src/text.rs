//! Text decoding helpers shared by the memory and line strategies

use std::fs;
use std::io;
use std::path::Path;
use stratcp_types::{Error, Result};

/// Read the entire source file as UTF-8 text, stripping a leading byte
/// order mark.
///
/// Invalid UTF-8 maps to [`Error::Encoding`] so that callers can tell a
/// decoding failure apart from a plain I/O failure.
pub(crate) fn read_source_text(path: &Path) -> Result<String> {
    let mut text = fs::read_to_string(path).map_err(|e| map_read_error(path, e))?;
    let bom_len = text.len() - strip_bom(&text).len();
    if bom_len > 0 {
        text.drain(..bom_len);
    }
    Ok(text)
}

/// Map an I/O error raised while reading text from `path`.
pub(crate) fn map_read_error(path: &Path, error: io::Error) -> Error {
    if error.kind() == io::ErrorKind::InvalidData {
        Error::encoding(format!(
            "File '{}' is not valid UTF-8: {}",
            path.display(),
            error
        ))
    } else {
        Error::io(format!(
            "Failed to read from file '{}': {}",
            path.display(),
            error
        ))
    }
}

/// Strip a leading UTF-8 byte order mark, if present.
pub(crate) fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use stratcp_types::ErrorKind;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_source_text() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("héllo".as_bytes()).unwrap();

        assert_eq!(read_source_text(file.path()).unwrap(), "héllo");
    }

    #[test]
    fn test_invalid_utf8_maps_to_encoding_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x61, 0xff, 0xfe, 0x62]).unwrap();

        let error = read_source_text(file.path()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Encoding);
        assert!(error.to_string().contains("not valid UTF-8"));
    }

    #[test]
    fn test_read_source_text_strips_bom() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all("\u{feff}content".as_bytes()).unwrap();

        assert_eq!(read_source_text(file.path()).unwrap(), "content");
    }

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}hello"), "hello");
        assert_eq!(strip_bom("hello"), "hello");
        assert_eq!(strip_bom(""), "");
    }
}
