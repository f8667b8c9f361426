// Version-conformance behavior: 5.5.1 constructs in a declared 5.5 file
// warn (but load), 5.5 constructs in a 5.5.1 file warn (but load), and a
// clean 5.5 file stays silent.

use gedkit::parse_str;

#[test]
fn test_email_in_55_file_warns_but_loads() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5\n\
         2 FORM LINEAGE-LINKED\n\
         0 @I1@ INDI\n\
         1 EMAIL x@y\n\
         0 TRLR\n",
    )
    .unwrap();

    let individual = &parser.gedcom.individuals["@I1@"];
    assert_eq!(individual.emails.len(), 1);
    assert_eq!(individual.emails[0].as_str(), "x@y");

    let warnings = parser.warnings();
    assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    assert!(warnings[0].contains("Line 6"));
    assert!(warnings[0].contains("5.5.1 feature"));
}

#[test]
fn test_clean_55_file_has_no_warnings() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5\n\
         2 FORM LINEAGE-LINKED\n\
         1 CHAR ANSEL\n\
         0 @I1@ INDI\n\
         1 NAME Old /Style/\n\
         1 BIRT\n\
         2 DATE 1 JAN 1880\n\
         1 RESN locked\n\
         0 TRLR\n",
    )
    .unwrap();

    assert!(parser.warnings().is_empty(), "warnings: {:?}", parser.warnings());
    assert!(parser.errors().is_empty(), "errors: {:?}", parser.errors());
}

#[test]
fn test_no_explicit_version_assumes_551() {
    // EMAIL is fine because 5.5.1 is the default assumption.
    let parser = parse_str(
        "0 HEAD\n\
         1 CHAR UTF-8\n\
         0 @I1@ INDI\n\
         1 EMAIL x@y\n\
         0 TRLR\n",
    )
    .unwrap();

    assert!(parser.warnings().is_empty(), "warnings: {:?}", parser.warnings());
}

#[test]
fn test_fact_attribute_warns_in_55() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5\n\
         0 @I1@ INDI\n\
         1 FACT collects stamps\n\
         0 TRLR\n",
    )
    .unwrap();

    let individual = &parser.gedcom.individuals["@I1@"];
    assert_eq!(individual.attributes.len(), 1);
    assert!(parser
        .warnings()
        .iter()
        .any(|w| w.contains("FACT")), "warnings: {:?}", parser.warnings());
}

#[test]
fn test_famc_status_warns_in_55() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5\n\
         0 @I1@ INDI\n\
         1 FAMC @F1@\n\
         2 STAT challenged\n\
         0 @F1@ FAM\n\
         1 CHIL @I1@\n\
         0 TRLR\n",
    )
    .unwrap();

    let link = &parser.gedcom.individuals["@I1@"].families_where_child[0];
    assert_eq!(link.status.as_ref().unwrap().as_str(), "challenged");
    assert!(parser
        .warnings()
        .iter()
        .any(|w| w.contains("child-to-family link")));
}

#[test]
fn test_place_map_coordinates_warn_in_55() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5\n\
         0 @I1@ INDI\n\
         1 BIRT\n\
         2 PLAC Springfield\n\
         3 MAP\n\
         4 LAT N44.1\n\
         4 LONG W93.5\n\
         0 TRLR\n",
    )
    .unwrap();

    let place = parser.gedcom.individuals["@I1@"].events[0]
        .detail
        .place
        .clone()
        .unwrap();
    assert_eq!(place.latitude.as_ref().unwrap().as_str(), "N44.1");
    assert_eq!(place.longitude.as_ref().unwrap().as_str(), "W93.5");
    assert!(parser
        .warnings()
        .iter()
        .any(|w| w.contains("map coordinate")));
}

#[test]
fn test_restriction_notice_on_family_warns_in_55() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5\n\
         0 @F1@ FAM\n\
         1 RESN confidential\n\
         0 TRLR\n",
    )
    .unwrap();

    let family = &parser.gedcom.families["@F1@"];
    assert_eq!(family.restriction_notice.as_ref().unwrap().as_str(), "confidential");
    assert!(parser
        .warnings()
        .iter()
        .any(|w| w.contains("restriction notice")));
}

#[test]
fn test_multiline_copyright_warns_in_55() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5\n\
         1 COPR (c) 1900\n\
         2 CONT all rights reserved\n\
         0 TRLR\n",
    )
    .unwrap();

    let header = parser.gedcom.header.as_ref().unwrap();
    assert_eq!(header.copyright_data, vec!["(c) 1900", "all rights reserved"]);
    assert!(parser
        .warnings()
        .iter()
        .any(|w| w.contains("copyright")));
}

#[test]
fn test_invalid_vers_value_is_error() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 6.0\n\
         0 TRLR\n",
    )
    .unwrap();

    assert!(parser
        .errors()
        .iter()
        .any(|e| e.contains("6.0")), "errors: {:?}", parser.errors());
    // With the version unparseable, the 5.5.1 default applies.
    let header = parser.gedcom.header.as_ref().unwrap();
    assert!(header
        .gedcom_version
        .as_ref()
        .unwrap()
        .version_number
        .is_none());
}

#[test]
fn test_phonetic_and_romanized_name_variations() {
    let parser = parse_str(
        "0 HEAD\n\
         1 GEDC\n\
         2 VERS 5.5.1\n\
         0 @I1@ INDI\n\
         1 NAME Taro /Yamada/\n\
         2 FONE Yamada Taro\n\
         3 TYPE kana\n\
         2 ROMN Yamada Taro\n\
         3 TYPE romaji\n\
         0 TRLR\n",
    )
    .unwrap();

    let name = &parser.gedcom.individuals["@I1@"].names[0];
    assert_eq!(name.phonetic.len(), 1);
    assert_eq!(name.phonetic[0].variation.as_deref(), Some("Yamada Taro"));
    assert_eq!(name.phonetic[0].variation_type.as_ref().unwrap().as_str(), "kana");
    assert_eq!(name.romanized.len(), 1);
    assert_eq!(name.romanized[0].variation_type.as_ref().unwrap().as_str(), "romaji");
    assert!(parser.warnings().is_empty(), "warnings: {:?}", parser.warnings());
}
