//! Shared input validation for all copy strategies

use std::path::Path;
use stratcp_types::{Error, Result};
use tracing::debug;

/// Validate the path pair shared by every copy strategy.
///
/// Rejects empty path arguments and a source that does not resolve to an
/// existing file. The destination is deliberately not pre-validated:
/// creation and write failures surface from the copier's own I/O calls,
/// so a destination on a read-only mount fails at write time, not here.
///
/// Every strategy calls this before opening any handle, which guarantees
/// that invalid input never creates a destination file.
pub fn validate_args(source: &Path, destination: &Path) -> Result<()> {
    if source.as_os_str().is_empty() {
        return Err(Error::missing_argument("source"));
    }

    if destination.as_os_str().is_empty() {
        return Err(Error::missing_argument("destination"));
    }

    if !source.is_file() {
        return Err(Error::source_not_found(source, "source"));
    }

    debug!("Validated copy arguments: {} -> {}", source.display(), destination.display());
    Ok(())
}
