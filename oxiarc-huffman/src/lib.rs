//! # OxiARC-Huffman: Pure Rust Huffman Coding
//!
//! This crate builds a Huffman prefix code from the symbol frequencies of an
//! input and uses it to turn the input into a compact, byte-aligned bit
//! buffer, reversibly.
//!
//! ## Pipeline
//!
//! ```text
//! text -> FrequencyTable -> build_tree -> CodeTable -> encode -> pack
//!                                                                  |
//! text <------------------ CodeTable::decode <-------- unpack <----+
//! ```
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Generic symbols**: `char`, `u8`, or any `Clone + Ord + Hash` value
//! - **Reproducible trees**: Equal frequencies merge first-in-first-out
//! - **Padded buffers**: One header byte records the trailing padding
//! - **Containers**: Optional self-contained format carrying the code table
//!   and a CRC-32
//!
//! ## Buffer Format
//!
//! Byte 0 holds the number of zero bits (1-8 when written, 0-8 accepted)
//! appended after the payload. The remaining bytes hold the payload bits,
//! MSB-first. A payload that is already byte-aligned still gets a full
//! padding byte.
//!
//! ## Example
//!
//! ```rust
//! use oxiarc_huffman::{compress, decompress};
//!
//! let out = compress("aaabbc").unwrap();
//! assert_eq!(out.table.get(&'a').unwrap().to_string(), "0");
//!
//! let text = decompress(&out.buffer, &out.table).unwrap();
//! assert_eq!(text, "aaabbc");
//! ```
//!
//! ## Self-contained Artifacts
//!
//! ```rust
//! use oxiarc_huffman::{compress_container, decompress_container};
//!
//! let bytes = compress_container("hello, huffman").unwrap();
//! assert_eq!(decompress_container(&bytes).unwrap(), "hello, huffman");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstring;
mod code;
mod code_table;
mod codec;
mod config;
mod container;
mod error;
mod frequency;
mod packer;
mod queue;
mod symbol;
mod tree;

pub use bitstring::BitString;
pub use code::{Code, MAX_CODE_LEN};
pub use code_table::CodeTable;
pub use codec::{Compressed, CompressionStats, HuffmanCodec};
pub use config::HuffmanConfig;
pub use container::{
    Container, ContainerInfo, MAGIC, VERSION, detect_symbol_kind, is_container,
};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use packer::{MAX_PADDING, PaddedBitBuffer, pack, padding_for, unpack};
pub use queue::MinQueue;
pub use symbol::{Symbol, SymbolCodec};
pub use tree::{HuffmanNode, build_tree};

/// Compress text with the reference configuration.
///
/// Trailing whitespace is trimmed before encoding. Fails with
/// [`HuffmanError::EmptyInput`] if nothing remains.
///
/// # Example
///
/// ```rust
/// use oxiarc_huffman::{HuffmanError, compress};
///
/// assert!(matches!(compress("   \n"), Err(HuffmanError::EmptyInput)));
/// ```
pub fn compress(text: &str) -> Result<Compressed<char>> {
    HuffmanCodec::new(HuffmanConfig::REFERENCE).compress(text)
}

/// Decompress a buffer produced by [`compress`] with its code table.
pub fn decompress(buffer: &PaddedBitBuffer, table: &CodeTable<char>) -> Result<String> {
    HuffmanCodec::default().decompress_str(buffer, table)
}

/// Compress text into a self-contained container with the given
/// configuration.
pub fn compress_container_with(text: &str, config: HuffmanConfig) -> Result<Vec<u8>> {
    let codec = HuffmanCodec::new(config);
    let symbols: Vec<char> = config.prepare(text).chars().collect();
    let compressed = codec.compress_symbols(&symbols)?;
    Ok(Container::seal(compressed, &symbols).to_bytes())
}

/// Compress text into a self-contained container (reference configuration).
pub fn compress_container(text: &str) -> Result<Vec<u8>> {
    compress_container_with(text, HuffmanConfig::REFERENCE)
}

/// Decode a text container and verify its checksum.
pub fn decompress_container(data: &[u8]) -> Result<String> {
    let container = Container::<char>::from_bytes(data)?;
    Ok(container.open()?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let out = compress("aaabbc").unwrap();
        assert_eq!(decompress(&out.buffer, &out.table).unwrap(), "aaabbc");
    }

    #[test]
    fn test_roundtrip_trims() {
        let out = compress("trailing   \n").unwrap();
        assert_eq!(decompress(&out.buffer, &out.table).unwrap(), "trailing");
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(compress(""), Err(HuffmanError::EmptyInput)));
        assert!(matches!(compress_container(""), Err(HuffmanError::EmptyInput)));
    }

    #[test]
    fn test_container_roundtrip() {
        let bytes = compress_container("the rain in spain").unwrap();
        assert_eq!(decompress_container(&bytes).unwrap(), "the rain in spain");
    }

    #[test]
    fn test_container_exact() {
        let bytes = compress_container_with("keep\n", HuffmanConfig::EXACT).unwrap();
        assert_eq!(decompress_container(&bytes).unwrap(), "keep\n");
    }

    #[test]
    fn test_unicode() {
        let text = "日本語のテキスト、ハフマン符号化";
        let out = compress(text).unwrap();
        assert_eq!(decompress(&out.buffer, &out.table).unwrap(), text);
    }
}
