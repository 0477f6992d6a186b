//! Compress command implementation.

use crate::utils::{compressed_path, format_size};
use oxiarc_huffman::{
    CompressionStats, Container, HuffmanCodec, HuffmanConfig, HuffmanError, SymbolCodec,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for the compress command.
pub struct CompressOptions {
    pub output: Option<PathBuf>,
    pub exact: bool,
    pub raw: bool,
    pub bytes: bool,
    pub verbose: bool,
}

/// Encoded artifact plus the figures reported in verbose mode.
struct Encoded {
    bytes: Vec<u8>,
    stats: CompressionStats,
    max_code_len: u8,
}

fn encode<S: SymbolCodec>(
    codec: &HuffmanCodec,
    symbols: &[S],
    raw: bool,
) -> Result<Encoded, HuffmanError> {
    let compressed = codec.compress_symbols(symbols)?;
    let stats = compressed.stats;
    let max_code_len = compressed.table.max_code_len();

    let bytes = if raw {
        compressed.buffer.into_vec()
    } else {
        Container::seal(compressed, symbols).to_bytes()
    };
    Ok(Encoded {
        bytes,
        stats,
        max_code_len,
    })
}

pub fn cmd_compress(
    input: &Path,
    options: &CompressOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = if options.exact {
        HuffmanConfig::EXACT
    } else {
        HuffmanConfig::REFERENCE
    };
    let codec = HuffmanCodec::new(config);

    // Byte mode encodes the file as is; trimming applies to text only.
    let (original, encoded) = if options.bytes {
        let data = fs::read(input)?;
        (data.len() as u64, encode(&codec, &data, options.raw)?)
    } else {
        let text = fs::read_to_string(input)?;
        let symbols: Vec<char> = config.prepare(&text).chars().collect();
        (text.len() as u64, encode(&codec, &symbols, options.raw)?)
    };
    let Encoded {
        bytes,
        stats,
        max_code_len,
    } = encoded;

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| compressed_path(input));
    fs::write(&output, &bytes)?;

    if options.verbose {
        println!("Input: {} ({})", input.display(), format_size(original));
        println!("  Symbols: {}", stats.input_symbols);
        println!("  Distinct symbols: {}", stats.distinct_symbols);
        println!("  Longest code: {} bits", max_code_len);
        println!("  Payload: {} bits", stats.payload_bits);
        println!("  Padding: {} bits", stats.padding_bits);
        println!("  Bits per symbol: {:.3}", stats.bits_per_symbol());
        println!(
            "  Output size: {} ({}, {} symbols)",
            format_size(bytes.len() as u64),
            if options.raw { "raw buffer" } else { "container" },
            if options.bytes { "byte" } else { "text" }
        );
        if original > 0 {
            println!(
                "  Compression ratio: {:.1}%",
                (1.0 - bytes.len() as f64 / original as f64) * 100.0
            );
        }
        if options.raw {
            println!("  Note: raw buffers carry no code table and cannot be decompressed alone");
        }
    }

    println!("Compressed: {}", output.display());
    Ok(())
}
