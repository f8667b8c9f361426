// Byte-stream decoding and line framing. GEDCOM files arrive in ANSEL,
// ASCII, UTF-8, or UTF-16; the encoding is announced by a BOM or by the
// header's CHAR tag, which we sniff from the raw bytes before committing to
// a decoder.

use tracing::debug;

use crate::ansel;
use crate::diagnostics::DiagnosticCollection;
use crate::error::ParseError;

/// Per the standard a GEDCOM line is at most 255 bytes; longer lines are
/// accepted with a warning.
const MAX_LINE_BYTES: usize = 255;

/// Character encodings a GEDCOM transmission may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Ansel,
    Ascii,
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Ansel => "ANSEL",
            Encoding::Ascii => "ASCII",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
        }
    }
}

/// One decoded, non-empty text line with its 1-based position in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub text: String,
}

/// Detect the encoding of a raw GEDCOM byte stream.
///
/// Detection order: BOM, then UTF-16 null-byte patterns, then a scan of the
/// ASCII-decoded head for the header's `CHAR` line. With no hint at all the
/// historical GEDCOM default of ANSEL applies (harmless for plain ASCII,
/// which ANSEL contains).
pub fn detect(bytes: &[u8]) -> Encoding {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        return Encoding::Utf8;
    }
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Encoding::Utf16Le;
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Encoding::Utf16Be;
    }
    if bytes.len() >= 2 {
        if bytes[0] == 0x00 && bytes[1] != 0x00 {
            return Encoding::Utf16Be;
        }
        if bytes[0] != 0x00 && bytes[1] == 0x00 {
            return Encoding::Utf16Le;
        }
    }
    match sniff_char_tag(bytes) {
        Some(charset) => match charset.as_str() {
            "ANSEL" => Encoding::Ansel,
            "ASCII" => Encoding::Ascii,
            "UTF-8" => Encoding::Utf8,
            // UNICODE without a BOM or null pattern: the bytes cannot really
            // be UTF-16, so read them as UTF-8.
            "UNICODE" => Encoding::Utf8,
            _ => Encoding::Ansel,
        },
        None => Encoding::Ansel,
    }
}

/// Scan the head of the file, decoded as ASCII, for a `CHAR` line and return
/// its upcased value.
fn sniff_char_tag(bytes: &[u8]) -> Option<String> {
    // The CHAR line sits in the header; 2KB is far more than enough.
    let head: String = bytes
        .iter()
        .take(2048)
        .map(|&b| if b < 0x80 { b as char } else { '?' })
        .collect();
    for raw in head.lines() {
        let line = raw.trim();
        let mut parts = line.splitn(3, ' ');
        let level = parts.next()?;
        if level != "1" {
            continue;
        }
        if parts.next() == Some("CHAR") {
            return parts.next().map(|v| v.trim().to_uppercase());
        }
    }
    None
}

fn strip_bom(bytes: &[u8], encoding: Encoding) -> &[u8] {
    match encoding {
        Encoding::Utf8 if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) => &bytes[3..],
        Encoding::Utf16Le if bytes.starts_with(&[0xFF, 0xFE]) => &bytes[2..],
        Encoding::Utf16Be if bytes.starts_with(&[0xFE, 0xFF]) => &bytes[2..],
        _ => bytes,
    }
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> String {
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|pair| {
            let (a, b) = (pair[0], *pair.get(1).unwrap_or(&0));
            if big_endian {
                u16::from_be_bytes([a, b])
            } else {
                u16::from_le_bytes([a, b])
            }
        })
        .collect();
    // Invalid sequences and lone surrogates become U+FFFD.
    String::from_utf16_lossy(&units)
}

fn decode_all(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Ansel => ansel::decode_bytes(bytes),
        Encoding::Ascii => bytes
            .iter()
            .map(|&b| if b < 0x80 { b as char } else { '?' })
            .collect(),
        Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        Encoding::Utf16Le => decode_utf16(bytes, false),
        Encoding::Utf16Be => decode_utf16(bytes, true),
    }
}

/// Decode a raw byte stream into numbered, non-empty text lines.
///
/// Detects the encoding, strips the BOM, then frames lines.
pub fn read_lines(
    bytes: &[u8],
    diagnostics: &mut DiagnosticCollection,
) -> Result<Vec<SourceLine>, ParseError> {
    let encoding = detect(bytes);
    debug!(encoding = encoding.name(), bytes = bytes.len(), "decoding GEDCOM input");
    let text = decode_all(strip_bom(bytes, encoding), encoding);
    frame_lines(&text, diagnostics)
}

/// Split already-decoded text into numbered, non-empty lines, normalizing
/// CR / LF / CRLF. Blank lines are skipped but still counted, so reported
/// line numbers match the input. Over-long lines are loaded with a warning.
pub fn frame_lines(
    text: &str,
    diagnostics: &mut DiagnosticCollection,
) -> Result<Vec<SourceLine>, ParseError> {
    let mut lines = Vec::new();
    for (idx, raw) in text.split('\n').enumerate() {
        let number = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        // A '\r' that was not part of a CRLF also terminates a line.
        for piece in line.split('\r') {
            if piece.trim().is_empty() {
                continue;
            }
            if piece.len() > MAX_LINE_BYTES {
                diagnostics.add_warning(
                    number,
                    format!(
                        "line is {} bytes long, exceeding the 255-byte GEDCOM limit; loaded anyway",
                        piece.len()
                    ),
                );
            }
            lines.push(SourceLine {
                number,
                text: piece.to_string(),
            });
        }
    }

    if lines.is_empty() {
        return Err(ParseError::EmptyFile);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(bytes: &[u8]) -> Vec<SourceLine> {
        let mut diagnostics = DiagnosticCollection::new();
        read_lines(bytes, &mut diagnostics).unwrap()
    }

    #[test]
    fn test_detect_utf8_bom() {
        assert_eq!(detect(b"\xEF\xBB\xBF0 HEAD"), Encoding::Utf8);
    }

    #[test]
    fn test_detect_utf16_boms() {
        assert_eq!(detect(b"\xFF\xFE0\x00"), Encoding::Utf16Le);
        assert_eq!(detect(b"\xFE\xFF\x000"), Encoding::Utf16Be);
    }

    #[test]
    fn test_detect_utf16_without_bom() {
        assert_eq!(detect(b"0\x00 \x00H\x00"), Encoding::Utf16Le);
        assert_eq!(detect(b"\x000\x00 \x00H"), Encoding::Utf16Be);
    }

    #[test]
    fn test_detect_char_tag() {
        assert_eq!(detect(b"0 HEAD\n1 CHAR UTF-8\n"), Encoding::Utf8);
        assert_eq!(detect(b"0 HEAD\n1 CHAR ASCII\n"), Encoding::Ascii);
        assert_eq!(detect(b"0 HEAD\n1 CHAR ANSEL\n"), Encoding::Ansel);
    }

    #[test]
    fn test_detect_defaults_to_ansel() {
        assert_eq!(detect(b"0 HEAD\n0 TRLR\n"), Encoding::Ansel);
    }

    #[test]
    fn test_bom_is_stripped() {
        let lines = lines_of(b"\xEF\xBB\xBF0 HEAD\n0 TRLR\n");
        assert_eq!(lines[0].text, "0 HEAD");
    }

    #[test]
    fn test_crlf_and_cr_normalization() {
        let lines = lines_of(b"0 HEAD\r\n1 CHAR ASCII\r0 TRLR\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text, "1 CHAR ASCII");
        assert_eq!(lines[2].text, "0 TRLR");
    }

    #[test]
    fn test_blank_lines_skipped_but_counted() {
        let lines = lines_of(b"0 HEAD\n\n0 TRLR\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].number, 3);
    }

    #[test]
    fn test_utf16le_round_trip() {
        let text = "0 HEAD\n1 CHAR UNICODE\n0 TRLR\n";
        let mut bytes = vec![0xFF, 0xFE];
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let lines = lines_of(&bytes);
        assert_eq!(lines[0].text, "0 HEAD");
        assert_eq!(lines[2].text, "0 TRLR");
    }

    #[test]
    fn test_ansel_high_bytes_decoded() {
        // NOTE value starts with l-stroke (ANSEL 0xB1).
        let lines = lines_of(b"0 NOTE \xB1odz\n");
        assert_eq!(lines[0].text, "0 NOTE \u{0142}odz");
    }

    #[test]
    fn test_empty_input_is_structural_error() {
        let mut diagnostics = DiagnosticCollection::new();
        assert_eq!(
            read_lines(b"", &mut diagnostics),
            Err(ParseError::EmptyFile)
        );
        assert_eq!(
            read_lines(b"\n\n", &mut diagnostics),
            Err(ParseError::EmptyFile)
        );
    }

    #[test]
    fn test_overlong_line_warns_but_loads() {
        let mut input = b"0 NOTE ".to_vec();
        input.extend(std::iter::repeat(b'x').take(300));
        input.push(b'\n');
        let mut diagnostics = DiagnosticCollection::new();
        let lines = read_lines(&input, &mut diagnostics).unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(diagnostics.warning_messages().len(), 1);
        assert!(diagnostics.warning_messages()[0].contains("255-byte"));
    }
}
