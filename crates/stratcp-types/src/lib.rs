//! Error taxonomy and shared result type for stratcp
//!
//! This crate provides the foundational error handling used throughout the
//! stratcp workspace:
//!
//! - **Error handling**: structured error types separating invalid input
//!   from runtime I/O failures
//! - **Result alias**: the `Result<T>` shorthand used by every strategy
//!
//! # Examples
//!
//! ```rust
//! use stratcp_types::{Error, Result};
//!
//! fn example_operation() -> Result<u64> {
//!     Err(Error::missing_argument("source"))
//! }
//!
//! assert!(example_operation().unwrap_err().is_invalid_input());
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod result;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
pub use result::Result;
