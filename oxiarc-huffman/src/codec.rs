//! Huffman codec: frequency counting through packing, and back.

use crate::code_table::CodeTable;
use crate::config::HuffmanConfig;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::packer::{PaddedBitBuffer, pack, unpack};
use crate::symbol::Symbol;
use crate::tree::build_tree;

/// Size figures for one compression run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionStats {
    /// Symbols encoded (after any trimming).
    pub input_symbols: u64,
    /// Distinct symbols, i.e. code table entries.
    pub distinct_symbols: usize,
    /// Encoded payload length in bits, padding excluded.
    pub payload_bits: u64,
    /// Padding bits recorded in the header.
    pub padding_bits: u8,
    /// Packed buffer size in bytes, header included.
    pub packed_bytes: usize,
}

impl CompressionStats {
    /// Average code length in bits per symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.payload_bits as f64 / self.input_symbols as f64
        }
    }

    /// Packed size relative to `original_bytes` (lower is better).
    pub fn compression_ratio(&self, original_bytes: u64) -> f64 {
        if original_bytes == 0 {
            0.0
        } else {
            self.packed_bytes as f64 / original_bytes as f64
        }
    }
}

/// Output of a compression run.
#[derive(Debug, Clone)]
pub struct Compressed<S: Symbol> {
    /// Packed payload with padding header.
    pub buffer: PaddedBitBuffer,
    /// Code table required to decode `buffer`.
    pub table: CodeTable<S>,
    /// Size figures.
    pub stats: CompressionStats,
}

/// Huffman compressor/decompressor.
///
/// Every call builds its own frequency table, tree and code table; a codec
/// holds only configuration and can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct HuffmanCodec {
    config: HuffmanConfig,
}

impl HuffmanCodec {
    /// Create a codec with the given configuration.
    pub fn new(config: HuffmanConfig) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// Compress text.
    ///
    /// Trailing whitespace is trimmed first when
    /// [`HuffmanConfig::trim_trailing_whitespace`] is set. Fails with
    /// [`HuffmanError::EmptyInput`] if nothing is left to encode.
    pub fn compress(&self, text: &str) -> Result<Compressed<char>> {
        let symbols: Vec<char> = self.config.prepare(text).chars().collect();
        self.compress_symbols(&symbols)
    }

    /// Compress an arbitrary symbol sequence. No trimming is applied.
    pub fn compress_symbols<S: Symbol>(&self, symbols: &[S]) -> Result<Compressed<S>> {
        if symbols.is_empty() {
            return Err(HuffmanError::EmptyInput);
        }

        let freqs = FrequencyTable::count(symbols.iter().cloned());
        let root = build_tree(&freqs)?;
        let table = CodeTable::derive(&root)?;
        let buffer = Self::encode_with(symbols, &table)?;

        let stats = CompressionStats {
            input_symbols: symbols.len() as u64,
            distinct_symbols: table.len(),
            payload_bits: buffer.payload_bits(),
            padding_bits: buffer.padding_bits(),
            packed_bytes: buffer.len(),
        };

        Ok(Compressed {
            buffer,
            table,
            stats,
        })
    }

    /// Encode `symbols` with an existing table and pack the result.
    pub fn encode_with<S: Symbol>(symbols: &[S], table: &CodeTable<S>) -> Result<PaddedBitBuffer> {
        let bits = table.encode(symbols)?;
        pack(&bits)
    }

    /// Decode a packed buffer with the table it was encoded with.
    ///
    /// Fails with [`HuffmanError::CodeTableMismatch`] if the payload ends in
    /// bits that complete no code.
    pub fn decompress<S: Symbol>(
        &self,
        buffer: &PaddedBitBuffer,
        table: &CodeTable<S>,
    ) -> Result<Vec<S>> {
        table.decode(&unpack(buffer))
    }

    /// Decode a packed buffer back to text.
    pub fn decompress_str(&self, buffer: &PaddedBitBuffer, table: &CodeTable<char>) -> Result<String> {
        Ok(self.decompress(buffer, table)?.into_iter().collect())
    }
}
