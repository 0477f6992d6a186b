//! Self-contained Huffman artifact.
//!
//! A bare [`PaddedBitBuffer`] cannot be decoded without the code table that
//! produced it. The container stores the table, the symbol count and a
//! CRC-32 of the original content in front of the buffer.
//!
//! # Layout
//!
//! ```text
//! Offset  Size  Field
//! 0       4     Magic "OXHF"
//! 4       1     Format version (1)
//! 5       1     Symbol kind (1 = char, 2 = byte)
//! 6       4     Entry count N (LE)
//! 10      ...   N entries: symbol, code length (u8), code bits MSB-first
//!               in ceil(length / 8) bytes
//! ...     8     Symbol count (LE)
//! ...     4     CRC-32 of the content (LE)
//! ...     ...   Padded bit buffer to end of data
//! ```

use crate::bitstring::BitString;
use crate::code::{Code, MAX_CODE_LEN};
use crate::code_table::CodeTable;
use crate::codec::Compressed;
use crate::error::Result;
use crate::packer::{PaddedBitBuffer, unpack};
use crate::symbol::SymbolCodec;
use oxiarc_core::{Crc32, OxiArcError};
use std::io::{Read, Write};

/// Container magic bytes.
pub const MAGIC: [u8; 4] = *b"OXHF";

/// Current container format version.
pub const VERSION: u8 = 1;

/// Header fields of a container, independent of symbol type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerInfo {
    /// Format version.
    pub version: u8,
    /// Symbol kind tag.
    pub symbol_kind: u8,
    /// Code table entries.
    pub entry_count: u32,
    /// Encoded symbol count.
    pub symbol_count: u64,
    /// CRC-32 of the original content.
    pub crc32: u32,
    /// Bytes taken by the header and code table.
    pub table_bytes: usize,
    /// Padding header of the embedded buffer.
    pub padding_bits: u8,
    /// Meaningful payload bits of the embedded buffer.
    pub payload_bits: u64,
    /// Total container size.
    pub total_bytes: usize,
}

/// A code table packaged together with the buffer it decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<S: SymbolCodec> {
    /// Code table used for the payload.
    pub table: CodeTable<S>,
    /// Number of encoded symbols.
    pub symbol_count: u64,
    /// CRC-32 of the original content.
    pub crc32: u32,
    /// Packed payload.
    pub buffer: PaddedBitBuffer,
}

impl<S: SymbolCodec> Container<S> {
    /// Package a compression result with the symbols it was produced from.
    pub fn seal(compressed: Compressed<S>, symbols: &[S]) -> Self {
        Self {
            table: compressed.table,
            symbol_count: symbols.len() as u64,
            crc32: content_crc(symbols),
            buffer: compressed.buffer,
        }
    }

    /// Serialize to bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(32 + self.table.len() * 6 + self.buffer.len());
        out.extend_from_slice(&MAGIC);
        out.push(VERSION);
        out.push(S::KIND);
        out.extend_from_slice(&(self.table.len() as u32).to_le_bytes());

        for (symbol, code) in self.table.iter() {
            symbol.write_symbol(&mut out);
            out.push(code.len());
            let mut bits = BitString::with_capacity(u64::from(code.len()));
            bits.push_code(code);
            out.extend_from_slice(bits.as_bytes());
        }

        out.extend_from_slice(&self.symbol_count.to_le_bytes());
        out.extend_from_slice(&self.crc32.to_le_bytes());
        out.extend_from_slice(self.buffer.as_bytes());
        out
    }

    /// Parse a container.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        let (symbol_kind, entry_count) = read_preamble(&mut cursor)?;
        if symbol_kind != S::KIND {
            return Err(OxiArcError::invalid_header(format!(
                "symbol kind {symbol_kind} does not match expected kind {}",
                S::KIND
            ))
            .into());
        }

        let mut entries = Vec::with_capacity((entry_count as usize).min(data.len()));
        for _ in 0..entry_count {
            let offset = cursor.pos;
            let (symbol, used) = S::read_symbol(cursor.rest())
                .ok_or_else(|| OxiArcError::corrupted(offset as u64, "invalid symbol"))?;
            cursor.pos += used;

            let len = cursor.read_u8()?;
            if len == 0 || len > MAX_CODE_LEN {
                return Err(OxiArcError::corrupted(
                    cursor.pos as u64 - 1,
                    format!("code length {len} out of range"),
                )
                .into());
            }
            let packed = cursor.take(usize::from(len).div_ceil(8))?;
            let bits = BitString::from_bytes(packed.to_vec(), u64::from(len));
            let code = bits
                .iter()
                .try_fold(Code::EMPTY, |code, bit| code.push(bit))
                .ok_or_else(|| OxiArcError::corrupted(offset as u64, "code too long"))?;

            entries.push((symbol, code));
        }

        let table = CodeTable::from_entries(entries)?;
        let symbol_count = cursor.read_u64()?;
        let crc32 = cursor.read_u32()?;
        let buffer = PaddedBitBuffer::from_bytes(cursor.rest().to_vec())?;

        Ok(Self {
            table,
            symbol_count,
            crc32,
            buffer,
        })
    }

    /// Read a container from `reader`.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Write the container to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Decode the payload and verify symbol count and CRC-32.
    pub fn open(&self) -> Result<Vec<S>> {
        let symbols = self.table.decode(&unpack(&self.buffer))?;

        if symbols.len() as u64 != self.symbol_count {
            return Err(OxiArcError::corrupted(
                0,
                format!(
                    "decoded {} symbols, header records {}",
                    symbols.len(),
                    self.symbol_count
                ),
            )
            .into());
        }

        let computed = content_crc(&symbols);
        if computed != self.crc32 {
            return Err(OxiArcError::crc_mismatch(self.crc32, computed).into());
        }

        Ok(symbols)
    }

    /// Header summary of this container.
    pub fn info(&self) -> ContainerInfo {
        let total_bytes = self.to_bytes().len();
        ContainerInfo {
            version: VERSION,
            symbol_kind: S::KIND,
            entry_count: self.table.len() as u32,
            symbol_count: self.symbol_count,
            crc32: self.crc32,
            table_bytes: total_bytes - self.buffer.len(),
            padding_bits: self.buffer.padding_bits(),
            payload_bits: self.buffer.payload_bits(),
            total_bytes,
        }
    }
}

/// Read the symbol kind of a serialized container without parsing the table.
pub fn detect_symbol_kind(data: &[u8]) -> Result<u8> {
    let mut cursor = Cursor::new(data);
    let (kind, _) = read_preamble(&mut cursor)?;
    Ok(kind)
}

/// Whether `data` starts with the container magic.
pub fn is_container(data: &[u8]) -> bool {
    data.starts_with(&MAGIC)
}

fn content_crc<S: SymbolCodec>(symbols: &[S]) -> u32 {
    let mut content = Vec::with_capacity(symbols.len());
    S::write_content(symbols, &mut content);
    Crc32::compute(&content)
}

fn read_preamble(cursor: &mut Cursor<'_>) -> Result<(u8, u32)> {
    let magic = cursor.take(MAGIC.len())?;
    if magic != MAGIC {
        return Err(OxiArcError::invalid_magic(MAGIC.to_vec(), magic.to_vec()).into());
    }

    let version = cursor.read_u8()?;
    if version != VERSION {
        return Err(OxiArcError::unsupported_version(version).into());
    }

    let kind = cursor.read_u8()?;
    let entry_count = cursor.read_u32()?;
    Ok((kind, entry_count))
}

/// Bounds-checked reader over a byte slice.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.data.len() - self.pos;
        if n > available {
            return Err(OxiArcError::unexpected_eof(n - available).into());
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(self.take(4)?);
        Ok(u32::from_le_bytes(buf))
    }

    fn read_u64(&mut self) -> Result<u64> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(buf))
    }
}
