//! Variable-length prefix codes.

use crate::error::{HuffmanError, Result};
use std::fmt;
use std::str::FromStr;

/// Maximum code length in bits.
///
/// Frequencies are `u64`, which bounds Huffman tree depth well below this.
pub const MAX_CODE_LEN: u8 = 128;

/// A bit string of up to [`MAX_CODE_LEN`] bits.
///
/// Bits are right-aligned in `bits`: the first (leftmost) bit of the code is
/// bit `len - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Code {
    bits: u128,
    len: u8,
}

impl Code {
    /// The zero-length code.
    pub const EMPTY: Self = Self { bits: 0, len: 0 };

    /// Create a code from right-aligned bits.
    ///
    /// Returns `None` if `len` exceeds [`MAX_CODE_LEN`] or `bits` has set
    /// bits above `len`.
    pub fn new(bits: u128, len: u8) -> Option<Self> {
        if len > MAX_CODE_LEN {
            return None;
        }
        if len < MAX_CODE_LEN && bits >> len != 0 {
            return None;
        }
        Some(Self { bits, len })
    }

    /// Right-aligned code bits.
    #[inline]
    pub fn bits(&self) -> u128 {
        self.bits
    }

    /// Length in bits.
    #[inline]
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Whether the code has no bits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// This code extended by one bit, or `None` at [`MAX_CODE_LEN`].
    #[inline]
    pub fn push(&self, bit: bool) -> Option<Self> {
        if self.len >= MAX_CODE_LEN {
            return None;
        }
        Some(Self {
            bits: (self.bits << 1) | bit as u128,
            len: self.len + 1,
        })
    }

    /// Bit `index`, counting from the first emitted bit.
    #[inline]
    pub fn bit(&self, index: u8) -> bool {
        debug_assert!(index < self.len);
        (self.bits >> (self.len - 1 - index)) & 1 == 1
    }

    /// Whether `self` is a prefix of `other` (a code is a prefix of itself).
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len
            && other
                .bits
                .checked_shr(u32::from(other.len - self.len))
                .unwrap_or(0)
                == self.bits
    }

    /// Iterate bits in emission order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.bit(i))
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = HuffmanError;

    fn from_str(s: &str) -> Result<Self> {
        s.chars().try_fold(Code::EMPTY, |code, c| {
            let bit = match c {
                '0' => false,
                '1' => true,
                other => {
                    return Err(HuffmanError::invalid_table(format!(
                        "invalid bit character {other:?}"
                    )));
                }
            };
            code.push(bit)
                .ok_or_else(|| HuffmanError::invalid_table("code longer than 128 bits"))
        })
    }
}
