//! Symbol alphabets.
//!
//! Any cloneable, totally ordered, hashable value can be Huffman coded.
//! Ordering makes frequency tables iterate deterministically, which in turn
//! makes tree construction reproducible.

use std::fmt::Debug;
use std::hash::Hash;

/// A codable symbol.
pub trait Symbol: Clone + Ord + Hash + Debug {}

impl<T: Clone + Ord + Hash + Debug> Symbol for T {}

/// A symbol with a fixed binary representation for containers.
pub trait SymbolCodec: Symbol {
    /// Symbol kind tag stored in the container header.
    const KIND: u8;

    /// Append the table representation of this symbol.
    fn write_symbol(&self, out: &mut Vec<u8>);

    /// Parse one symbol from the front of `data`.
    ///
    /// Returns the symbol and the number of bytes consumed, or `None` if
    /// `data` is too short or does not hold a valid symbol.
    fn read_symbol(data: &[u8]) -> Option<(Self, usize)>;

    /// Append the content representation of a symbol sequence, used for
    /// checksumming (UTF-8 for text, raw bytes for binary).
    fn write_content(symbols: &[Self], out: &mut Vec<u8>);
}

impl SymbolCodec for char {
    const KIND: u8 = 1;

    fn write_symbol(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(*self as u32).to_le_bytes());
    }

    fn read_symbol(data: &[u8]) -> Option<(Self, usize)> {
        let bytes: [u8; 4] = data.get(..4)?.try_into().ok()?;
        char::from_u32(u32::from_le_bytes(bytes)).map(|c| (c, 4))
    }

    fn write_content(symbols: &[Self], out: &mut Vec<u8>) {
        let mut buf = [0u8; 4];
        for c in symbols {
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }
}

impl SymbolCodec for u8 {
    const KIND: u8 = 2;

    fn write_symbol(&self, out: &mut Vec<u8>) {
        out.push(*self);
    }

    fn read_symbol(data: &[u8]) -> Option<(Self, usize)> {
        data.first().map(|&b| (b, 1))
    }

    fn write_content(symbols: &[Self], out: &mut Vec<u8>) {
        out.extend_from_slice(symbols);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_symbol_roundtrip() {
        let mut out = Vec::new();
        'é'.write_symbol(&mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(char::read_symbol(&out), Some(('é', 4)));
    }

    #[test]
    fn test_char_rejects_surrogate() {
        let out = 0xD800u32.to_le_bytes();
        assert_eq!(char::read_symbol(&out), None);
        assert_eq!(char::read_symbol(&out[..3]), None);
    }

    #[test]
    fn test_char_content_is_utf8() {
        let mut out = Vec::new();
        char::write_content(&['h', 'é'], &mut out);
        assert_eq!(out, "hé".as_bytes());
    }

    #[test]
    fn test_byte_symbol() {
        let mut out = Vec::new();
        0xABu8.write_symbol(&mut out);
        assert_eq!(out, vec![0xAB]);
        assert_eq!(u8::read_symbol(&out), Some((0xAB, 1)));
        assert_eq!(u8::read_symbol(&[]), None);
    }
}
