//! Decompress command implementation.

use crate::utils::{decompressed_path, format_size};
use oxiarc_core::OxiArcError;
use oxiarc_huffman::{Container, MAGIC, SymbolCodec, detect_symbol_kind, is_container};
use std::fs;
use std::path::{Path, PathBuf};

pub fn cmd_decompress(
    input: &Path,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;

    if !is_container(&data) {
        return Err(format!(
            "{} is not a container ({}); raw buffers need their code table to decode",
            input.display(),
            OxiArcError::invalid_magic(MAGIC.to_vec(), data[..data.len().min(MAGIC.len())].to_vec())
        )
        .into());
    }

    let content = match detect_symbol_kind(&data)? {
        kind if kind == char::KIND => {
            let container = Container::<char>::from_bytes(&data)?;
            let text: String = container.open()?.into_iter().collect();
            text.into_bytes()
        }
        _ => Container::<u8>::from_bytes(&data)?.open()?,
    };

    let output = output.unwrap_or_else(|| decompressed_path(input));
    fs::write(&output, &content)?;

    if verbose {
        println!("Input: {} ({})", input.display(), format_size(data.len() as u64));
        println!("  Restored: {}", format_size(content.len() as u64));
    }

    println!("Decompressed: {}", output.display());
    Ok(())
}
