//! Huffman-specific error types.

use oxiarc_core::OxiArcError;
use thiserror::Error;

/// Huffman compression/decompression errors.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// Nothing to encode (empty input, or empty after trimming).
    #[error("Empty input: nothing to encode")]
    EmptyInput,

    /// Padded payload is not a whole number of bytes.
    #[error("Misaligned bitstream: {bits} bits is not a multiple of 8")]
    MisalignedBitstream {
        /// Payload length including padding, in bits.
        bits: u64,
    },

    /// Bits left over after decoding: the table does not match the payload.
    #[error("Code table mismatch: {leftover_bits} trailing bits match no code")]
    CodeTableMismatch {
        /// Number of unmatched bits at the end of the stream.
        leftover_bits: usize,
    },

    /// Buffer too short to hold the padding header.
    #[error("Missing padding header: buffer is empty")]
    MissingHeader,

    /// Padding header outside the range 0-8.
    #[error("Invalid padding header: {padding} (must be 0-8)")]
    InvalidPadding {
        /// Header value found.
        padding: u8,
    },

    /// Padding header claims more bits than the payload holds.
    #[error("Padding of {padding} bits exceeds payload of {payload_bits} bits")]
    PaddingExceedsPayload {
        /// Header value found.
        padding: u8,
        /// Payload size in bits.
        payload_bits: u64,
    },

    /// Input symbol has no code in the table.
    #[error("Symbol {symbol} has no code in the table")]
    UnknownSymbol {
        /// Debug rendering of the symbol.
        symbol: String,
    },

    /// Combined symbol frequencies do not fit in a `u64`.
    #[error("Frequency overflow: {left} + {right} exceeds u64")]
    FrequencyOverflow {
        /// Frequency of the first merged node.
        left: u64,
        /// Frequency of the second merged node.
        right: u64,
    },

    /// Code table is not a valid prefix code.
    #[error("Invalid code table: {reason}")]
    InvalidCodeTable {
        /// Description of the violation.
        reason: String,
    },

    /// Container or I/O error from the core layer.
    #[error(transparent)]
    Core(#[from] OxiArcError),
}

impl HuffmanError {
    /// Create an unknown symbol error.
    pub fn unknown_symbol(symbol: &impl std::fmt::Debug) -> Self {
        Self::UnknownSymbol {
            symbol: format!("{symbol:?}"),
        }
    }

    /// Create an invalid code table error.
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        Self::InvalidCodeTable {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for HuffmanError {
    fn from(err: std::io::Error) -> Self {
        Self::Core(OxiArcError::Io(err))
    }
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffmanError>;
