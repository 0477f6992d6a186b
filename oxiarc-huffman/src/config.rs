//! Huffman codec configuration.

/// Huffman codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Strip trailing whitespace from text before encoding.
    ///
    /// The reference artifact format is produced from trimmed text, so a
    /// round trip returns the input without its trailing whitespace.
    pub trim_trailing_whitespace: bool,
}

impl HuffmanConfig {
    /// Reference behaviour: trailing whitespace is trimmed before encoding.
    pub const REFERENCE: Self = Self {
        trim_trailing_whitespace: true,
    };

    /// Byte-exact behaviour: text is encoded as given.
    pub const EXACT: Self = Self {
        trim_trailing_whitespace: false,
    };

    /// Apply the configured text preprocessing.
    ///
    /// Trimming strips Unicode whitespace plus the information separators
    /// U+001C to U+001F, matching the reference artifacts.
    pub fn prepare<'a>(&self, text: &'a str) -> &'a str {
        if self.trim_trailing_whitespace {
            text.trim_end_matches(is_trailing_space)
        } else {
            text
        }
    }
}

fn is_trailing_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}
