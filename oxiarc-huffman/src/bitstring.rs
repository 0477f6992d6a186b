//! Packed bit sequences.
//!
//! `BitString` stores bits MSB-first in a byte vector, the same order in
//! which they appear in a packed buffer. Any unused low bits of the last
//! byte are kept zero, so the storage is already zero-padded.

use crate::code::Code;
use std::fmt;

/// A growable, MSB-first packed sequence of bits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitString {
    bytes: Vec<u8>,
    len: u64,
}

impl BitString {
    /// Create an empty bit string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bit string with room for `bits` bits.
    pub fn with_capacity(bits: u64) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8) as usize),
            len: 0,
        }
    }

    /// Wrap packed bytes, keeping the first `len` bits.
    ///
    /// Bits of `bytes` beyond `len` are cleared. `len` is clamped to the
    /// number of bits available.
    pub fn from_bytes(mut bytes: Vec<u8>, len: u64) -> Self {
        let len = len.min(bytes.len() as u64 * 8);
        bytes.truncate(len.div_ceil(8) as usize);

        let tail = (len % 8) as u32;
        if tail != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xFFu8 << (8 - tail);
            }
        }

        Self { bytes, len }
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Whether there are no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append one bit.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        let offset = (self.len % 8) as u32;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            if let Some(last) = self.bytes.last_mut() {
                *last |= 0x80 >> offset;
            }
        }
        self.len += 1;
    }

    /// Append every bit of `code`, first bit first.
    pub fn push_code(&mut self, code: &Code) {
        for bit in code.iter() {
            self.push(bit);
        }
    }

    /// Bit at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: u64) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        let byte = self.bytes[(index / 8) as usize];
        Some(byte & (0x80 >> (index % 8)) != 0)
    }

    /// Iterate bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.bytes[(i / 8) as usize] & (0x80 >> (i % 8)) != 0)
    }

    /// Packed bytes; trailing bits of the last byte are zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Take the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl FromIterator<bool> for BitString {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitString::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_msb_first() {
        let bits: BitString = [true, false, true, true].into_iter().collect();
        assert_eq!(bits.len(), 4);
        assert_eq!(bits.as_bytes(), &[0b1011_0000]);
        assert_eq!(bits.to_string(), "1011");
    }

    #[test]
    fn test_push_across_bytes() {
        let mut bits = BitString::new();
        let code: Code = "1111111101".parse().unwrap();
        bits.push_code(&code);
        assert_eq!(bits.len(), 10);
        assert_eq!(bits.as_bytes(), &[0xFF, 0b0100_0000]);
        assert_eq!(bits.get(8), Some(false));
        assert_eq!(bits.get(9), Some(true));
        assert_eq!(bits.get(10), None);
    }

    #[test]
    fn test_from_bytes_masks_tail() {
        let bits = BitString::from_bytes(vec![0xFF, 0xFF, 0xFF], 12);
        assert_eq!(bits.len(), 12);
        assert_eq!(bits.as_bytes(), &[0xFF, 0xF0]);
    }

    #[test]
    fn test_from_bytes_clamps_length() {
        let bits = BitString::from_bytes(vec![0xAA], 20);
        assert_eq!(bits.len(), 8);
        assert_eq!(bits.to_string(), "10101010");
    }

    #[test]
    fn test_empty() {
        let bits = BitString::new();
        assert!(bits.is_empty());
        assert!(bits.as_bytes().is_empty());
        assert_eq!(bits.iter().count(), 0);
    }
}
