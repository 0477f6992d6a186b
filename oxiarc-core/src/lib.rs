//! # OxiArc Core
//!
//! Core components shared by the OxiArc crates.
//!
//! - [`error`]: Error types
//! - [`crc`]: CRC-32 checksum for container integrity
//! - [`transfer`]: Sequential block copy between byte sources and sinks
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Unified API                                         │
//! │     oxihuff CLI                                         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Huffman coding, padded bit buffers, containers      │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     Errors, CRC-32, block transfer                      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxiarc_core::crc::Crc32;
//!
//! let crc = Crc32::compute(b"Hello, World!");
//! assert_eq!(crc, 0xEC4AC3D0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod crc;
pub mod error;
pub mod transfer;

// Re-exports for convenience
pub use crc::Crc32;
pub use error::{OxiArcError, Result};
pub use transfer::{
    DEFAULT_BLOCK_SIZE, FileSink, FileSource, MemorySink, MemorySource, Sink, Source,
    TransferProgress, transfer, transfer_uri,
};
