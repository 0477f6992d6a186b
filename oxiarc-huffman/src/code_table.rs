//! Code tables: symbol to code and back.
//!
//! A [`CodeTable`] is derived from a Huffman tree by walking every
//! root-to-leaf path, appending `0` for each left branch and `1` for each
//! right branch. Because codes only come from leaves of a strict binary tree
//! the result is prefix-free, which makes greedy bit-by-bit decoding
//! unambiguous.
//!
//! A tree consisting of a single leaf would give its symbol the empty code;
//! that symbol is assigned the 1-bit code `0` instead.

use crate::bitstring::BitString;
use crate::code::Code;
use crate::error::{HuffmanError, Result};
use crate::symbol::Symbol;
use crate::tree::HuffmanNode;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Bidirectional mapping between symbols and prefix codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    forward: BTreeMap<S, Code>,
    reverse: HashMap<Code, S>,
    max_len: u8,
}

impl<S: Symbol> CodeTable<S> {
    /// Derive the code table of a Huffman tree.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oxiarc_huffman::{CodeTable, FrequencyTable, build_tree};
    ///
    /// let root = build_tree(&FrequencyTable::count("aaabbc".chars())).unwrap();
    /// let table = CodeTable::derive(&root).unwrap();
    ///
    /// assert_eq!(table.get(&'a').unwrap().to_string(), "0");
    /// assert_eq!(table.get(&'c').unwrap().to_string(), "10");
    /// assert_eq!(table.get(&'b').unwrap().to_string(), "11");
    /// ```
    pub fn derive(root: &HuffmanNode<S>) -> Result<Self> {
        let mut table = Self::empty();

        if let HuffmanNode::Leaf { symbol, .. } = root {
            let code = Code::EMPTY.push(false).unwrap_or_default();
            table.insert(symbol.clone(), code);
            return Ok(table);
        }

        let mut stack = vec![(root, Code::EMPTY)];
        while let Some((node, code)) = stack.pop() {
            match node {
                HuffmanNode::Leaf { symbol, .. } => table.insert(symbol.clone(), code),
                HuffmanNode::Internal { left, right, .. } => {
                    let (Some(left_code), Some(right_code)) = (code.push(false), code.push(true))
                    else {
                        return Err(HuffmanError::invalid_table("tree deeper than 128 levels"));
                    };
                    stack.push((right, right_code));
                    stack.push((left, left_code));
                }
            }
        }

        Ok(table)
    }

    /// Build a table from explicit `(symbol, code)` pairs.
    ///
    /// Rejects empty codes, repeated symbols, repeated codes, and any code
    /// that is a prefix of another.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Code)>,
    {
        let mut table = Self::empty();

        for (symbol, code) in entries {
            if code.is_empty() {
                return Err(HuffmanError::invalid_table(format!(
                    "symbol {symbol:?} has an empty code"
                )));
            }
            if table.forward.contains_key(&symbol) {
                return Err(HuffmanError::invalid_table(format!(
                    "symbol {symbol:?} appears twice"
                )));
            }
            if table.reverse.contains_key(&code) {
                return Err(HuffmanError::invalid_table(format!(
                    "code {code} is assigned twice"
                )));
            }
            table.insert(symbol, code);
        }

        if let Some((a, b)) = find_prefix_pair(table.forward.values()) {
            return Err(HuffmanError::invalid_table(format!(
                "code {a} is a prefix of {b}"
            )));
        }

        Ok(table)
    }

    fn empty() -> Self {
        Self {
            forward: BTreeMap::new(),
            reverse: HashMap::new(),
            max_len: 0,
        }
    }

    fn insert(&mut self, symbol: S, code: Code) {
        self.max_len = self.max_len.max(code.len());
        self.reverse.insert(code, symbol.clone());
        self.forward.insert(symbol, code);
    }

    /// Code assigned to `symbol`.
    pub fn get(&self, symbol: &S) -> Option<&Code> {
        self.forward.get(symbol)
    }

    /// Symbol whose code is exactly `code`.
    pub fn symbol_for(&self, code: &Code) -> Option<&S> {
        self.reverse.get(code)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Length of the longest code.
    pub fn max_code_len(&self) -> u8 {
        self.max_len
    }

    /// Iterate `(symbol, code)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &Code)> {
        self.forward.iter()
    }

    /// Whether no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        find_prefix_pair(self.forward.values()).is_none()
    }

    /// Concatenate the codes of `symbols`.
    pub fn encode(&self, symbols: &[S]) -> Result<BitString> {
        let mut bits = BitString::new();
        for symbol in symbols {
            let code = self
                .forward
                .get(symbol)
                .ok_or_else(|| HuffmanError::unknown_symbol(symbol))?;
            bits.push_code(code);
        }
        Ok(bits)
    }

    /// Decode a bit string greedily.
    ///
    /// Bits accumulate into a candidate code; whenever the candidate equals a
    /// known code its symbol is emitted and the candidate restarts. Bits that
    /// never complete a code yield [`HuffmanError::CodeTableMismatch`].
    pub fn decode(&self, bits: &BitString) -> Result<Vec<S>> {
        let mut output = Vec::new();
        let mut candidate = Code::EMPTY;
        let mut candidate_start = 0u64;

        for (index, bit) in bits.iter().enumerate() {
            if candidate.len() >= self.max_len {
                return Err(HuffmanError::CodeTableMismatch {
                    leftover_bits: (bits.len() - candidate_start) as usize,
                });
            }
            // Bounded by max_len above, so push cannot overflow.
            candidate = candidate.push(bit).unwrap_or_default();

            if let Some(symbol) = self.reverse.get(&candidate) {
                output.push(symbol.clone());
                candidate = Code::EMPTY;
                candidate_start = index as u64 + 1;
            }
        }

        if !candidate.is_empty() {
            return Err(HuffmanError::CodeTableMismatch {
                leftover_bits: candidate.len() as usize,
            });
        }

        Ok(output)
    }
}

/// Lexicographic order on bit strings.
fn lexicographic(a: &Code, b: &Code) -> Ordering {
    let left_align = |c: &Code| c.bits().checked_shl(128 - u32::from(c.len())).unwrap_or(0);
    left_align(a)
        .cmp(&left_align(b))
        .then(a.len().cmp(&b.len()))
}

/// Find a pair where the first code is a prefix of the second.
///
/// In lexicographic order a code that prefixes any other code also prefixes
/// its immediate successor, so checking neighbours is sufficient.
fn find_prefix_pair<'a>(codes: impl Iterator<Item = &'a Code>) -> Option<(Code, Code)> {
    let mut sorted: Vec<Code> = codes.copied().collect();
    sorted.sort_by(lexicographic);
    sorted
        .windows(2)
        .find(|pair| pair[0].is_prefix_of(&pair[1]))
        .map(|pair| (pair[0], pair[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tree::build_tree;

    fn table_for(text: &str) -> CodeTable<char> {
        let root = build_tree(&FrequencyTable::count(text.chars())).unwrap();
        CodeTable::derive(&root).unwrap()
    }

    fn code(s: &str) -> Code {
        s.parse().unwrap()
    }

    #[test]
    fn test_derive_aaabbc() {
        let table = table_for("aaabbc");
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(&'a'), Some(&code("0")));
        assert_eq!(table.get(&'c'), Some(&code("10")));
        assert_eq!(table.get(&'b'), Some(&code("11")));
        assert_eq!(table.symbol_for(&code("10")), Some(&'c'));
        assert_eq!(table.max_code_len(), 2);
    }

    #[test]
    fn test_derive_single_symbol() {
        let table = table_for("xxxx");
        assert_eq!(table.get(&'x'), Some(&code("0")));
        assert_eq!(table.max_code_len(), 1);
    }

    #[test]
    fn test_prefix_free_and_shortest_for_most_frequent() {
        let text = "it was the best of times, it was the worst of times";
        let table = table_for(text);
        assert!(table.is_prefix_free());

        let freqs = FrequencyTable::count(text.chars());
        let (most, _) = freqs.iter().max_by_key(|&(_, c)| c).unwrap();
        let shortest = table.iter().map(|(_, c)| c.len()).min().unwrap();
        assert_eq!(table.get(most).unwrap().len(), shortest);
    }

    #[test]
    fn test_encode_decode() {
        let table = table_for("aaabbc");
        let symbols: Vec<char> = "abcabc".chars().collect();
        let bits = table.encode(&symbols).unwrap();
        assert_eq!(bits.to_string(), "0111001110");
        assert_eq!(table.decode(&bits).unwrap(), symbols);
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let table = table_for("aaabbc");
        let err = table.encode(&['a', 'z']).unwrap_err();
        assert!(matches!(err, HuffmanError::UnknownSymbol { .. }));
    }

    #[test]
    fn test_decode_leftover_bits() {
        let table = table_for("aaabbc");
        // "0" -> a, then a dangling "1"
        let bits: BitString = [false, true].into_iter().collect();
        let err = table.decode(&bits).unwrap_err();
        assert!(matches!(err, HuffmanError::CodeTableMismatch { leftover_bits: 1 }));
    }

    #[test]
    fn test_decode_with_foreign_table() {
        let original = table_for("aaabbc");
        let other = CodeTable::from_entries([('q', code("00")), ('r', code("01"))]).unwrap();
        let bits = original.encode(&['b', 'c', 'b']).unwrap();
        assert_eq!(bits.to_string(), "111011");
        assert!(matches!(
            other.decode(&bits),
            Err(HuffmanError::CodeTableMismatch { .. })
        ));
    }

    #[test]
    fn test_from_entries_validation() {
        assert!(CodeTable::from_entries([('a', code("0")), ('b', code("10"))]).is_ok());

        let err = CodeTable::from_entries([('a', code("0")), ('b', code("01"))]).unwrap_err();
        assert!(err.to_string().contains("prefix"));

        assert!(CodeTable::from_entries([('a', code("0")), ('a', code("1"))]).is_err());
        assert!(CodeTable::from_entries([('a', code("1")), ('b', code("1"))]).is_err());
        assert!(CodeTable::from_entries([('a', Code::EMPTY)]).is_err());
    }

    #[test]
    fn test_derived_table_reloads() {
        let table = table_for("mississippi river");
        let reloaded =
            CodeTable::from_entries(table.iter().map(|(s, c)| (*s, *c))).unwrap();
        assert_eq!(reloaded, table);
    }
}
