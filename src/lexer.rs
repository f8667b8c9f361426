// Line lexer: splits one decoded text line into level, optional xref id,
// tag, and optional value. Grammar:
//
//   line  = level SP [xref SP] tag [SP value]
//   level = DIGIT+
//   xref  = "@" (ALNUM | "_")+ "@"
//   tag   = (UPPER | DIGIT | "_") x 1..31

use once_cell::sync::Lazy;
use regex::Regex;

use crate::encoding::SourceLine;
use crate::error::ParseError;

static LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+)\s+(?:(@[A-Za-z0-9_]+@)\s+)?([A-Za-z0-9_]{1,31})(?: (.*))?$")
        .expect("invalid GEDCOM line regex")
});

static LEVEL_PREFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\s").expect("invalid level prefix regex"));

/// One lexed GEDCOM line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomLine {
    pub level: i64,
    pub xref_id: Option<String>,
    /// Uppercased on ingestion; GEDCOM tags compare case-insensitively.
    pub tag: String,
    pub value: Option<String>,
    /// 1-based source line number.
    pub line: usize,
}

/// Lex a single source line. Structural failures (no level prefix, nothing
/// recognizable as a tag) are fatal and carry the line number.
pub fn lex_line(source: &SourceLine) -> Result<GedcomLine, ParseError> {
    if !LEVEL_PREFIX_REGEX.is_match(&source.text) {
        return Err(ParseError::MissingLevel {
            line: source.number,
            text: source.text.clone(),
        });
    }
    let caps = LINE_REGEX
        .captures(&source.text)
        .ok_or_else(|| ParseError::MalformedLine {
            line: source.number,
            text: source.text.clone(),
        })?;

    // The level matched \d+ so this only fails on absurd overflow.
    let level: i64 = caps[1].parse().map_err(|_| ParseError::MalformedLine {
        line: source.number,
        text: source.text.clone(),
    })?;

    Ok(GedcomLine {
        level,
        xref_id: caps.get(2).map(|m| m.as_str().to_string()),
        tag: caps[3].to_uppercase(),
        value: caps.get(4).map(|m| m.as_str().to_string()),
        line: source.number,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(text: &str) -> Result<GedcomLine, ParseError> {
        lex_line(&SourceLine {
            number: 7,
            text: text.to_string(),
        })
    }

    #[test]
    fn test_plain_line() {
        let l = lex("1 NAME John /Smith/").unwrap();
        assert_eq!(l.level, 1);
        assert_eq!(l.xref_id, None);
        assert_eq!(l.tag, "NAME");
        assert_eq!(l.value.as_deref(), Some("John /Smith/"));
        assert_eq!(l.line, 7);
    }

    #[test]
    fn test_record_line_with_xref() {
        let l = lex("0 @I1@ INDI").unwrap();
        assert_eq!(l.level, 0);
        assert_eq!(l.xref_id.as_deref(), Some("@I1@"));
        assert_eq!(l.tag, "INDI");
        assert_eq!(l.value, None);
    }

    #[test]
    fn test_pointer_value() {
        let l = lex("1 HUSB @I1@").unwrap();
        assert_eq!(l.xref_id, None);
        assert_eq!(l.value.as_deref(), Some("@I1@"));
    }

    #[test]
    fn test_tag_uppercased() {
        let l = lex("1 name John").unwrap();
        assert_eq!(l.tag, "NAME");
    }

    #[test]
    fn test_empty_value_after_tag() {
        // "1 CONT " carries an empty (not missing) value.
        let l = lex("1 CONT ").unwrap();
        assert_eq!(l.value.as_deref(), Some(""));
        let l = lex("1 CONT").unwrap();
        assert_eq!(l.value, None);
    }

    #[test]
    fn test_value_preserves_internal_spacing() {
        let l = lex("2 DATE  1 JAN 1900").unwrap();
        assert_eq!(l.value.as_deref(), Some(" 1 JAN 1900"));
    }

    #[test]
    fn test_missing_level_is_fatal() {
        assert!(matches!(
            lex("NAME with no level"),
            Err(ParseError::MissingLevel { line: 7, .. })
        ));
    }

    #[test]
    fn test_line_with_level_but_no_tag_is_fatal() {
        assert!(matches!(
            lex("1 "),
            Err(ParseError::MissingLevel { .. }) | Err(ParseError::MalformedLine { .. })
        ));
    }

    #[test]
    fn test_leading_whitespace_tolerated() {
        let l = lex("  2 GIVN John").unwrap();
        assert_eq!(l.level, 2);
        assert_eq!(l.tag, "GIVN");
    }

    #[test]
    fn test_user_tag() {
        let l = lex("1 _UID 12345").unwrap();
        assert_eq!(l.tag, "_UID");
    }
}
