//! Result type alias for stratcp operations

use crate::Error;

/// Result type alias for stratcp operations
pub type Result<T> = std::result::Result<T, Error>;
