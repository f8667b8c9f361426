// ANSEL (ANSI Z39.47) codec. GEDCOM's default 8-bit encoding maps the low
// half to ASCII and a fixed set of high bytes to Latin extended letters,
// combining diacritics, and a few symbols. In ANSEL the combining bytes
// (0xE0..=0xFE) precede their base letter; in Unicode the combining mark
// follows it. This module only maps bytes to code points one-to-one;
// reordering is a concern for higher layers.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// The canonical (code point, ANSEL byte) pairs for the high half.
const PAIRS: &[(char, u8)] = &[
    ('\u{0141}', 0xA1),
    ('\u{00D8}', 0xA2),
    ('\u{0110}', 0xA3),
    ('\u{00DE}', 0xA4),
    ('\u{00C6}', 0xA5),
    ('\u{0152}', 0xA6),
    ('\u{02B9}', 0xA7),
    ('\u{00B7}', 0xA8),
    ('\u{266D}', 0xA9),
    ('\u{00AE}', 0xAA),
    ('\u{00B1}', 0xAB),
    ('\u{01A0}', 0xAC),
    ('\u{01AF}', 0xAD),
    ('\u{02BC}', 0xAE),
    ('\u{02BB}', 0xB0),
    ('\u{0142}', 0xB1),
    ('\u{00F8}', 0xB2),
    ('\u{0111}', 0xB3),
    ('\u{00FE}', 0xB4),
    ('\u{00E6}', 0xB5),
    ('\u{0153}', 0xB6),
    ('\u{02BA}', 0xB7),
    ('\u{0131}', 0xB8),
    ('\u{00A3}', 0xB9),
    ('\u{00F0}', 0xBA),
    ('\u{01A1}', 0xBC),
    ('\u{01B0}', 0xBD),
    ('\u{00B0}', 0xC0),
    ('\u{2113}', 0xC1),
    ('\u{2117}', 0xC2),
    ('\u{00A9}', 0xC3),
    ('\u{266F}', 0xC4),
    ('\u{00BF}', 0xC5),
    ('\u{00A1}', 0xC6),
    ('\u{00DF}', 0xCF),
    // Combining diacritics.
    ('\u{0309}', 0xE0),
    ('\u{0300}', 0xE1),
    ('\u{0301}', 0xE2),
    ('\u{0302}', 0xE3),
    ('\u{0303}', 0xE4),
    ('\u{0304}', 0xE5),
    ('\u{0306}', 0xE6),
    ('\u{0307}', 0xE7),
    ('\u{0308}', 0xE8),
    ('\u{030C}', 0xE9),
    ('\u{030A}', 0xEA),
    ('\u{FE20}', 0xEB),
    ('\u{FE21}', 0xEC),
    ('\u{0315}', 0xED),
    ('\u{030B}', 0xEE),
    ('\u{0310}', 0xEF),
    ('\u{0327}', 0xF0),
    ('\u{0328}', 0xF1),
    ('\u{0323}', 0xF2),
    ('\u{0324}', 0xF3),
    ('\u{0325}', 0xF4),
    ('\u{0333}', 0xF5),
    ('\u{0332}', 0xF6),
    ('\u{0326}', 0xF7),
    ('\u{031C}', 0xF8),
    ('\u{032E}', 0xF9),
    ('\u{FE22}', 0xFA),
    ('\u{FE23}', 0xFB),
    ('\u{0313}', 0xFE),
];

/// Decode placeholder for high bytes with no ANSEL assignment.
const REPLACEMENT: char = '?';

static BYTE_TO_CHAR: Lazy<[char; 256]> = Lazy::new(|| {
    let mut table = [REPLACEMENT; 256];
    for (b, slot) in table.iter_mut().enumerate().take(0x80) {
        *slot = b as u8 as char;
    }
    for &(c, b) in PAIRS {
        table[b as usize] = c;
    }
    table
});

static CHAR_TO_BYTE: Lazy<HashMap<char, u8>> = Lazy::new(|| {
    let mut table = HashMap::with_capacity(PAIRS.len());
    for &(c, b) in PAIRS {
        table.insert(c, b);
    }
    table
});

/// Decode a single ANSEL byte. Total: bytes below 0x80 are identity, mapped
/// high bytes yield their code point, everything else yields `?` so no input
/// byte is ever silently dropped.
pub fn decode(b: u8) -> char {
    BYTE_TO_CHAR[b as usize]
}

/// Encode a single character to an ANSEL byte. Code points in the table map
/// to their assigned byte; anything else passes its low byte through
/// unchanged, best-effort, leaving detection to later layers.
pub fn encode(c: char) -> u8 {
    match CHAR_TO_BYTE.get(&c) {
        Some(&b) => b,
        None => c as u32 as u8,
    }
}

/// Decode a whole ANSEL byte slice into a string.
pub fn decode_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| decode(b)).collect()
}

/// Encode a string to ANSEL bytes, best-effort.
pub fn encode_str(s: &str) -> Vec<u8> {
    s.chars().map(encode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_range_is_identity() {
        for b in 0u8..0x80 {
            assert_eq!(decode(b), b as char);
            assert_eq!(encode(b as char), b);
        }
    }

    #[test]
    fn test_round_trip_all_canonical_pairs() {
        for &(c, b) in PAIRS {
            assert_eq!(decode(encode(c)), c, "code point {c:?}");
            assert_eq!(encode(decode(b)), b, "byte {b:#04x}");
        }
    }

    #[test]
    fn test_unmapped_high_byte_decodes_to_question_mark() {
        // 0xBE and 0xFF have no ANSEL assignment.
        assert_eq!(decode(0xBE), '?');
        assert_eq!(decode(0xFF), '?');
    }

    #[test]
    fn test_unmapped_char_encodes_low_byte() {
        // U+4E2D is not in the table; its low byte passes through.
        assert_eq!(encode('\u{4E2D}'), 0x2D);
    }

    #[test]
    fn test_decode_bytes_polish_name() {
        // 0xB1 is LATIN SMALL LETTER L WITH STROKE.
        assert_eq!(decode_bytes(&[0xB1, b'o', b'd', b'z']), "\u{0142}odz");
    }

    #[test]
    fn test_encode_str() {
        assert_eq!(encode_str("\u{00DF}x"), vec![0xCF, b'x']);
    }

    #[test]
    fn test_combining_marks_map_into_combining_block() {
        // ANSEL 0xE1 is COMBINING GRAVE ACCENT.
        assert_eq!(decode(0xE1), '\u{0300}');
        assert_eq!(encode('\u{0300}'), 0xE1);
    }
}
