// Post-load validation: a cleanly parsed document validates silently, and
// hand-broken documents surface each inconsistency.

use gedkit::model::XrefRecord;
use gedkit::{parse_str, validate};

#[test]
fn test_parsed_document_validates_cleanly() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5.1\n\
         1 SUBM @U1@\n\
         0 @U1@ SUBM\n\
         1 NAME Someone\n\
         0 @I1@ INDI\n\
         1 NAME A /B/\n\
         1 FAMS @F1@\n\
         0 @F1@ FAM\n\
         1 HUSB @I1@\n\
         0 TRLR\n",
    )
    .unwrap();

    let findings = validate(&parser.gedcom);
    assert!(findings.is_empty(), "findings: {findings:?}");
}

#[test]
fn test_forward_reference_placeholders_still_validate() {
    // Dangling references are the parser's business; the validator only
    // cares that every handle resolves to some map entry, and get-or-create
    // guarantees that.
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5.1\n\
         0 @F1@ FAM\n\
         1 HUSB @I9@\n\
         0 TRLR\n",
    )
    .unwrap();

    let findings = validate(&parser.gedcom);
    assert!(findings.is_empty(), "findings: {findings:?}");
}

#[test]
fn test_key_xref_mismatch_found() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5.1\n\
         0 @I1@ INDI\n\
         0 TRLR\n",
    )
    .unwrap();
    let mut gedcom = parser.gedcom;
    gedcom.individuals.get_mut("@I1@").unwrap().xref = "@I2@".to_string();

    let findings = validate(&gedcom);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].message.contains("@I2@"));
}

#[test]
fn test_removed_record_breaks_family_handles() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5.1\n\
         0 @I1@ INDI\n\
         0 @F1@ FAM\n\
         1 HUSB @I1@\n\
         1 CHIL @I1@\n\
         0 TRLR\n",
    )
    .unwrap();
    let mut gedcom = parser.gedcom;
    gedcom.individuals.remove("@I1@");

    let findings = validate(&gedcom);
    assert!(findings.iter().any(|f| f.message.contains("husband @I1@")));
    assert!(findings.iter().any(|f| f.message.contains("child @I1@")));
}

#[test]
fn test_header_submission_mismatch_found() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5.1\n\
         1 SUBN @SUBN1@\n\
         0 @SUBN1@ SUBN\n\
         0 TRLR\n",
    )
    .unwrap();
    let mut gedcom = parser.gedcom;
    gedcom.submission.as_mut().unwrap().xref = "@OTHER@".to_string();

    let findings = validate(&gedcom);
    assert!(findings
        .iter()
        .any(|f| f.message.contains("does not match")));
}

#[test]
fn test_malformed_key_found() {
    let mut gedcom = gedkit::model::Gedcom::default();
    gedcom.individuals.insert(
        "not-an-xref".to_string(),
        gedkit::model::Individual::with_xref("not-an-xref"),
    );

    let findings = validate(&gedcom);
    assert!(findings
        .iter()
        .any(|f| f.message.contains("not a well-formed xref")));
}
