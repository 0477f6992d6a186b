//! Byte packing with an explicit padding header.
//!
//! A packed buffer is one header byte followed by the payload:
//!
//! ```text
//! +--------+--------------------------------------------+
//! | P (u8) | payload bits, MSB-first, then P zero bits   |
//! +--------+--------------------------------------------+
//! ```
//!
//! `P = 8 - (L mod 8)` for a payload of `L` bits. When `L` is already a
//! multiple of 8 this appends a whole zero byte (`P = 8`); existing
//! artifacts rely on that, so it is kept. Readers accept any `P` in 0-8.

use crate::bitstring::BitString;
use crate::error::{HuffmanError, Result};
use std::io::{Read, Write};

/// Largest valid padding header value.
pub const MAX_PADDING: u8 = 8;

/// Padding bits appended after a payload of `bit_len` bits.
#[inline]
pub fn padding_for(bit_len: u64) -> u8 {
    8 - (bit_len % 8) as u8
}

/// A padding header followed by byte-aligned payload bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBitBuffer {
    bytes: Vec<u8>,
}

impl PaddedBitBuffer {
    /// Validate and wrap raw artifact bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let &padding = bytes.first().ok_or(HuffmanError::MissingHeader)?;
        if padding > MAX_PADDING {
            return Err(HuffmanError::InvalidPadding { padding });
        }

        let payload_bits = (bytes.len() as u64 - 1) * 8;
        if u64::from(padding) > payload_bits {
            return Err(HuffmanError::PaddingExceedsPayload {
                padding,
                payload_bits,
            });
        }

        Ok(Self { bytes })
    }

    /// Read a whole artifact from `reader`.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Self::from_bytes(bytes)
    }

    /// Write the artifact to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&self.bytes)?;
        Ok(())
    }

    /// Padding header value.
    pub fn padding_bits(&self) -> u8 {
        self.bytes[0]
    }

    /// Packed payload, padding included.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..]
    }

    /// Number of meaningful payload bits.
    pub fn payload_bits(&self) -> u64 {
        self.payload().len() as u64 * 8 - u64::from(self.padding_bits())
    }

    /// Total size in bytes, header included.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: a buffer holds at least its header.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Raw artifact bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the raw artifact bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }
}

/// Pack a bit string behind a padding header.
///
/// # Example
///
/// ```rust
/// use oxiarc_huffman::{BitString, pack};
///
/// let bits: BitString = "1011001110".chars().map(|c| c == '1').collect();
/// let buffer = pack(&bits).unwrap();
///
/// assert_eq!(buffer.padding_bits(), 6);
/// assert_eq!(buffer.as_bytes(), &[6, 0b1011_0011, 0b1000_0000]);
/// ```
pub fn pack(bits: &BitString) -> Result<PaddedBitBuffer> {
    let padding = padding_for(bits.len());
    let total_bits = bits.len() + u64::from(padding);
    if total_bits % 8 != 0 {
        return Err(HuffmanError::MisalignedBitstream { bits: total_bits });
    }

    let mut bytes = Vec::with_capacity(1 + (total_bits / 8) as usize);
    bytes.push(padding);
    bytes.extend_from_slice(bits.as_bytes());
    // BitString storage is zero-filled to the byte boundary already; a full
    // padding byte still has to be added.
    if padding == MAX_PADDING {
        bytes.push(0);
    }

    if (bytes.len() - 1) as u64 * 8 != total_bits {
        return Err(HuffmanError::MisalignedBitstream { bits: total_bits });
    }

    Ok(PaddedBitBuffer { bytes })
}

/// Recover the payload bits of a packed buffer.
pub fn unpack(buffer: &PaddedBitBuffer) -> BitString {
    BitString::from_bytes(buffer.payload().to_vec(), buffer.payload_bits())
}
