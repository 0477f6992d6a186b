//! Codes command implementation.

use crate::utils::display_symbol;
use oxiarc_huffman::{CodeTable, FrequencyTable, HuffmanConfig, HuffmanError, build_tree};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// JSON serializable code table entry.
#[derive(Debug, Serialize)]
struct CodeJson {
    symbol: String,
    count: u64,
    code: String,
    length: u8,
}

/// JSON output for a code table.
#[derive(Debug, Serialize)]
struct CodeTableJson {
    input: String,
    symbols: u64,
    distinct: usize,
    payload_bits: u64,
    codes: Vec<CodeJson>,
}

pub fn cmd_codes(input: &Path, exact: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(input)?;
    let config = if exact {
        HuffmanConfig::EXACT
    } else {
        HuffmanConfig::REFERENCE
    };

    let freqs = FrequencyTable::count(config.prepare(&text).chars());
    if freqs.is_empty() {
        return Err(HuffmanError::EmptyInput.into());
    }
    let root = build_tree(&freqs)?;
    let table = CodeTable::derive(&root)?;

    let mut codes = Vec::with_capacity(table.len());
    let mut payload_bits = 0u64;
    for (symbol, count) in freqs.iter() {
        let Some(code) = table.get(symbol) else {
            continue;
        };
        payload_bits += count * code.len() as u64;
        codes.push(CodeJson {
            symbol: display_symbol(*symbol),
            count,
            code: code.to_string(),
            length: code.len(),
        });
    }
    // Most frequent first, then by code
    codes.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.code.cmp(&b.code)));

    if json {
        let output = CodeTableJson {
            input: input.display().to_string(),
            symbols: freqs.total(),
            distinct: freqs.len(),
            payload_bits,
            codes,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Code table: {}", input.display());
    println!(
        "Symbols: {}  Distinct: {}  Depth: {}",
        freqs.total(),
        freqs.len(),
        root.depth()
    );
    println!();
    println!("{:>8}  {:>10}  {:>6}  Code", "Symbol", "Count", "Length");
    println!("{}", "-".repeat(40));
    for entry in &codes {
        println!(
            "{:>8}  {:>10}  {:>6}  {}",
            entry.symbol, entry.count, entry.length, entry.code
        );
    }
    println!("{}", "-".repeat(40));
    println!(
        "Payload: {} bits ({:.3} bits/symbol)",
        payload_bits,
        payload_bits as f64 / freqs.total() as f64
    );

    Ok(())
}
