//! Info command implementation.

use crate::utils::format_size;
use oxiarc_huffman::{
    Container, ContainerInfo, PaddedBitBuffer, SymbolCodec, detect_symbol_kind, is_container,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON output for artifact information.
#[derive(Debug, Serialize)]
struct ArtifactJson {
    file: String,
    format: &'static str,
    size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbol_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    symbols: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    crc32: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    table_bytes: Option<usize>,
    padding_bits: u8,
    payload_bits: u64,
}

fn kind_name(kind: u8) -> &'static str {
    if kind == char::KIND {
        "text"
    } else if kind == u8::KIND {
        "bytes"
    } else {
        "unknown"
    }
}

fn container_info(data: &[u8]) -> Result<ContainerInfo, Box<dyn std::error::Error>> {
    let info = if detect_symbol_kind(data)? == char::KIND {
        Container::<char>::from_bytes(data)?.info()
    } else {
        Container::<u8>::from_bytes(data)?.info()
    };
    Ok(info)
}

fn describe(path: &Path, data: Vec<u8>) -> Result<ArtifactJson, Box<dyn std::error::Error>> {
    let file = path.display().to_string();
    let size = data.len() as u64;

    if is_container(&data) {
        let info = container_info(&data)?;
        return Ok(ArtifactJson {
            file,
            format: "container",
            size,
            version: Some(info.version),
            symbol_kind: Some(kind_name(info.symbol_kind)),
            entries: Some(info.entry_count),
            symbols: Some(info.symbol_count),
            crc32: Some(format!("{:08x}", info.crc32)),
            table_bytes: Some(info.table_bytes),
            padding_bits: info.padding_bits,
            payload_bits: info.payload_bits,
        });
    }

    let buffer = PaddedBitBuffer::from_bytes(data)?;
    Ok(ArtifactJson {
        file,
        format: "raw buffer",
        size,
        version: None,
        symbol_kind: None,
        entries: None,
        symbols: None,
        crc32: None,
        table_bytes: None,
        padding_bits: buffer.padding_bits(),
        payload_bits: buffer.payload_bits(),
    })
}

pub fn cmd_info(artifact: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(artifact)?;
    let report = describe(artifact, data)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Artifact Information");
    println!("====================");
    println!("File: {}", report.file);
    println!("Format: {}", report.format);
    println!("Size: {} ({} bytes)", format_size(report.size), report.size);

    if let Some(version) = report.version {
        println!();
        println!("Container:");
        println!("  Version: {}", version);
        if let Some(kind) = report.symbol_kind {
            println!("  Symbol kind: {}", kind);
        }
        if let Some(entries) = report.entries {
            println!("  Code table entries: {}", entries);
        }
        if let Some(bytes) = report.table_bytes {
            println!("  Code table size: {} bytes", bytes);
        }
        if let Some(symbols) = report.symbols {
            println!("  Symbols: {}", symbols);
        }
        if let Some(crc) = &report.crc32 {
            println!("  CRC-32: {}", crc);
        }
    }

    println!();
    println!("Payload:");
    println!("  Bits: {}", report.payload_bits);
    println!("  Padding: {} bits", report.padding_bits);
    if let Some(symbols) = report.symbols.filter(|&n| n > 0) {
        println!(
            "  Bits per symbol: {:.3}",
            report.payload_bits as f64 / symbols as f64
        );
    }

    Ok(())
}
