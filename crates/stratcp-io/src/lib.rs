//! Interchangeable file-copy strategies for stratcp
//!
//! This crate provides six independent ways to copy the contents of one
//! file to another, sharing a single validation contract:
//!
//! - **Byte copy**: one byte per read/write call, unbuffered
//! - **In-memory byte copy**: full text materialization with a staging
//!   buffer round trip, character-at-a-time writes
//! - **Block copy**: fixed 1024-byte chunks directly on the file handles
//! - **In-memory block copy**: 1024-character chunks with a per-chunk
//!   staging round trip
//! - **Buffered copy**: 1024-byte chunks through buffering decorators
//! - **Line copy**: line-at-a-time text copy, terminator normalized to `\n`
//!
//! Every strategy is a free-standing synchronous function over a source
//! and destination path. The source must name an existing file; the
//! destination is created if absent and fully overwritten if present.
//! Handles are released on every exit path. Byte-oriented strategies are
//! binary-safe and return byte counts; the in-memory strategies decode
//! UTF-8 and return character counts; the line strategy returns a line
//! count.
//!
//! # Examples
//!
//! ```rust
//! use stratcp_io::{copy_by_block, copy_by_line};
//!
//! # fn example() -> stratcp_types::Result<()> {
//! let bytes = copy_by_block("notes.txt", "notes.bak")?;
//! let lines = copy_by_line("notes.txt", "notes.unix.txt")?;
//! println!("copied {} bytes, {} lines", bytes, lines);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod block;
pub mod buffered;
pub mod byte;
pub mod line;
pub mod memory;
pub mod validate;

mod text;


pub use block::copy_by_block;
pub use buffered::copy_buffered;
pub use byte::copy_by_byte;
pub use line::copy_by_line;
pub use memory::{copy_in_memory_by_block, copy_in_memory_by_byte};
pub use validate::validate_args;

/// Fixed chunk size shared by the block, buffered, and in-memory block
/// strategies: 1024 bytes for the binary strategies, 1024 characters for
/// the text strategy.
pub const BLOCK_SIZE: usize = 1024;
