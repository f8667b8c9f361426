// Byte-level loads: encoding detection picks the right decoder and the
// decoded text flows through the whole pipeline.

use gedkit::GedcomParser;

#[test]
fn test_load_ansel_bytes() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"0 HEAD\r\n1 CHAR ANSEL\r\n1 GEDC\r\n2 VERS 5.5\r\n");
    // 0xB1 is LATIN SMALL LETTER L WITH STROKE in ANSEL.
    bytes.extend_from_slice(b"0 @I1@ INDI\r\n1 NAME \xB1ukasz /Nowak/\r\n0 TRLR\r\n");

    let mut parser = GedcomParser::new();
    parser.load_bytes(&bytes).unwrap();

    let name = &parser.gedcom.individuals["@I1@"].names[0];
    assert_eq!(name.basic.as_deref(), Some("\u{0142}ukasz /Nowak/"));
    assert!(parser.warnings().is_empty(), "warnings: {:?}", parser.warnings());
}

#[test]
fn test_load_utf8_with_bom() {
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(
        "0 HEAD\n1 CHAR UTF-8\n1 GEDC\n2 VERS 5.5.1\n0 @I1@ INDI\n1 NAME Zoë /Müller/\n0 TRLR\n"
            .as_bytes(),
    );

    let mut parser = GedcomParser::new();
    parser.load_bytes(&bytes).unwrap();

    let name = &parser.gedcom.individuals["@I1@"].names[0];
    assert_eq!(name.basic.as_deref(), Some("Zoë /Müller/"));
}

#[test]
fn test_load_utf16le_with_bom() {
    let text = "0 HEAD\n1 CHAR UNICODE\n1 GEDC\n2 VERS 5.5.1\n0 @I1@ INDI\n1 NAME Ана /Ким/\n0 TRLR\n";
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }

    let mut parser = GedcomParser::new();
    parser.load_bytes(&bytes).unwrap();

    let name = &parser.gedcom.individuals["@I1@"].names[0];
    assert_eq!(name.basic.as_deref(), Some("Ана /Ким/"));
}

#[test]
fn test_overlong_line_warns_but_loads() {
    let mut content = String::from("0 HEAD\n1 GEDC\n2 VERS 5.5.1\n0 @N1@ NOTE ");
    content.push_str(&"x".repeat(300));
    content.push_str("\n0 TRLR\n");

    let mut parser = GedcomParser::new();
    parser.load_bytes(content.as_bytes()).unwrap();

    assert_eq!(parser.gedcom.notes["@N1@"].lines[0].len(), 300);
    assert!(parser
        .warnings()
        .iter()
        .any(|w| w.contains("255-byte")), "warnings: {:?}", parser.warnings());
}
