//! Huffman codec integration tests.

use oxiarc_huffman::{
    BitString, CodeTable, Container, FrequencyTable, HuffmanCodec, HuffmanConfig, HuffmanError,
    PaddedBitBuffer, build_tree, compress, compress_container, decompress, decompress_container,
    pack, unpack,
};

/// Reproducible pseudo-random text over a small alphabet.
fn lcg_text(len: usize, alphabet: &[char], mut seed: u64) -> String {
    let mut text = String::with_capacity(len);
    for _ in 0..len {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        // Squaring the draw skews the distribution so code lengths differ.
        let r = ((seed >> 33) % 1000) as usize;
        let idx = r * r * alphabet.len() / 1_000_000;
        text.push(alphabet[idx]);
    }
    text
}

#[test]
fn test_scenario_aaabbc() {
    let freqs = FrequencyTable::count("aaabbc".chars());
    assert_eq!(freqs.get(&'a'), 3);
    assert_eq!(freqs.get(&'b'), 2);
    assert_eq!(freqs.get(&'c'), 1);

    let out = compress("aaabbc").expect("compression failed");
    let a = out.table.get(&'a').unwrap().len();
    let b = out.table.get(&'b').unwrap().len();
    let c = out.table.get(&'c').unwrap().len();
    assert!(a < b && a < c, "'a' must get the shortest code");

    let text = decompress(&out.buffer, &out.table).expect("decompression failed");
    assert_eq!(text, "aaabbc");
}

#[test]
fn test_scenario_empty_input() {
    assert!(matches!(compress(""), Err(HuffmanError::EmptyInput)));
    assert!(matches!(compress("\n\n  \t"), Err(HuffmanError::EmptyInput)));
}

#[test]
fn test_scenario_ten_bit_payload() {
    let bits: BitString = "0110100111".chars().map(|c| c == '1').collect();
    let buffer = pack(&bits).expect("pack failed");

    assert_eq!(buffer.padding_bits(), 6);
    assert_eq!(buffer.payload().len(), 2);
    assert_eq!(buffer.len(), 3);
    assert_eq!(unpack(&buffer), bits);
}

#[test]
fn test_roundtrip_many_texts() {
    let texts = [
        "a",
        "ab",
        "hello world",
        "The quick brown fox jumps over the lazy dog.",
        "  leading whitespace is kept",
        "tabs\tand\nnewlines\r\ninside",
        "ünïcödé ✓ - mixed scripts: Ελληνικά, русский, 中文",
    ];

    for text in texts {
        let out = compress(text).expect("compression failed");
        let decoded = decompress(&out.buffer, &out.table).expect("decompression failed");
        assert_eq!(decoded, text.trim_end(), "round trip failed for {text:?}");
    }
}

#[test]
fn test_roundtrip_generated() {
    let alphabet: Vec<char> = "etaoin shrdlu".chars().collect();
    for (len, seed) in [(1usize, 1u64), (7, 2), (64, 3), (1000, 4), (20_000, 5)] {
        let text = lcg_text(len, &alphabet, seed);
        let codec = HuffmanCodec::new(HuffmanConfig::EXACT);
        let out = codec.compress(&text).expect("compression failed");
        let decoded = codec
            .decompress_str(&out.buffer, &out.table)
            .expect("decompression failed");
        assert_eq!(decoded, text);
    }
}

#[test]
fn test_padding_bound() {
    for len in 1..=40 {
        let text: String = "abcde".chars().cycle().take(len).collect();
        let out = compress(&text).unwrap();
        let p = out.buffer.padding_bits() as u64;
        assert!((1..=8).contains(&p));
        assert_eq!((out.stats.payload_bits + p) % 8, 0);
        assert_eq!(out.buffer.len() as u64, 1 + (out.stats.payload_bits + p) / 8);
    }
}

#[test]
fn test_prefix_free_tables() {
    let alphabet: Vec<char> = ('a'..='z').chain('0'..='9').collect();
    for seed in 1..=10 {
        let text = lcg_text(500, &alphabet, seed);
        let out = compress(&text).unwrap();
        let codes: Vec<_> = out.table.iter().map(|(_, c)| *c).collect();

        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!a.is_prefix_of(b), "{a} is a prefix of {b}");
                }
            }
        }
        assert!(out.table.is_prefix_free());
    }
}

#[test]
fn test_tree_shape_invariant() {
    let text = lcg_text(2000, &['x', 'y', 'z', 'w', ' ', '.'], 42);
    let freqs = FrequencyTable::count(text.chars());
    let root = build_tree(&freqs).unwrap();

    assert_eq!(root.leaf_count(), freqs.len());
    assert_eq!(root.internal_count(), freqs.len() - 1);
    assert_eq!(root.frequency(), freqs.total());
}

#[test]
fn test_single_symbol_alphabet() {
    for len in [1, 7, 8, 9, 100] {
        let text = "q".repeat(len);
        let out = compress(&text).expect("single-symbol compression failed");
        assert_eq!(out.stats.payload_bits, len as u64);
        assert_eq!(decompress(&out.buffer, &out.table).unwrap(), text);
    }
}

#[test]
fn test_reproducible_output() {
    let text = "she sells sea shells by the sea shore";
    let first = compress(text).unwrap();
    let second = compress(text).unwrap();
    assert_eq!(first.buffer, second.buffer);
    assert_eq!(first.table, second.table);
}

#[test]
fn test_mismatched_table_detected() {
    let out = compress("aaabbc").unwrap();
    let foreign = CodeTable::from_entries([
        ('x', "000".parse().unwrap()),
        ('y', "001".parse().unwrap()),
        ('z', "01".parse().unwrap()),
        ('w', "1".parse().unwrap()),
    ])
    .unwrap();

    // "000111110" decodes as x w w w w w, leaving a dangling "0"
    let err = decompress(&out.buffer, &foreign).unwrap_err();
    assert!(matches!(err, HuffmanError::CodeTableMismatch { .. }));
}

#[test]
fn test_raw_buffer_persistence() {
    let out = compress("persist me to disk").unwrap();
    let bytes = out.buffer.as_bytes().to_vec();

    let restored = PaddedBitBuffer::from_bytes(bytes).unwrap();
    assert_eq!(decompress(&restored, &out.table).unwrap(), "persist me to disk");
}

#[test]
fn test_container_self_contained() {
    let text = lcg_text(5000, &['a', 'b', 'c', 'd', 'e', 'f', ' '], 7);
    let bytes = compress_container(&text).unwrap();
    assert_eq!(decompress_container(&bytes).unwrap(), text.trim_end());

    let parsed = Container::<char>::from_bytes(&bytes).unwrap();
    let info = parsed.info();
    assert_eq!(info.total_bytes, bytes.len());
    assert_eq!(info.symbol_count, text.trim_end().chars().count() as u64);
}

#[test]
fn test_container_corruption() {
    let mut bytes = compress_container("integrity matters here").unwrap();
    let last = bytes.len() - 1;
    bytes[last - 1] ^= 0b0101_0000;

    assert!(decompress_container(&bytes).is_err());
}

#[test]
fn test_compresses_skewed_text() {
    let text = format!("{}{}", "e".repeat(900), "xyz".repeat(33));
    let out = compress(&text).unwrap();
    assert!(out.buffer.len() < text.len() / 4);
    assert_eq!(decompress(&out.buffer, &out.table).unwrap(), text);
}

#[test]
fn test_trailing_separators_trimmed() {
    let out = compress("abc\u{1f}\u{1c}").unwrap();
    assert_eq!(out.stats.input_symbols, 3);
    assert_eq!(decompress(&out.buffer, &out.table).unwrap(), "abc");

    let inner = compress("a\u{1f}b").unwrap();
    assert_eq!(decompress(&inner.buffer, &inner.table).unwrap(), "a\u{1f}b");
}

#[test]
fn test_overflowing_counts_rejected() {
    let freqs = FrequencyTable::from_counts([('x', u64::MAX - 1), ('y', 1), ('z', 1)]);
    assert!(matches!(
        build_tree(&freqs),
        Err(HuffmanError::FrequencyOverflow { .. })
    ));
}
