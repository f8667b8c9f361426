// The transmission HEADER and its nested structures. The declared GEDCOM
// version here drives every 5.5-vs-5.5.1 conformance warning the parser
// emits.

use serde::{Deserialize, Serialize};

use super::structures::{Address, CustomTag, StringWithTags};

/// HEADER record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub source_system: Option<SourceSystem>,
    pub destination_system: Option<StringWithTags>,
    pub date: Option<StringWithTags>,
    pub time: Option<StringWithTags>,
    pub character_set: Option<CharacterSet>,
    /// Xref of the submitter record.
    pub submitter: Option<String>,
    /// Xref of the submission record; mirrors `Gedcom::submission`.
    pub submission: Option<String>,
    pub file_name: Option<StringWithTags>,
    pub gedcom_version: Option<GedcomVersion>,
    pub copyright_data: Vec<String>,
    pub language: Option<StringWithTags>,
    pub place_hierarchy: Option<StringWithTags>,
    pub notes: Vec<String>,
    pub custom_tags: Vec<CustomTag>,
}

/// The SOUR system block of the header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSystem {
    pub system_id: Option<String>,
    pub version_num: Option<StringWithTags>,
    pub product_name: Option<StringWithTags>,
    pub corporation: Option<Corporation>,
    pub source_data: Option<HeaderSourceData>,
    pub custom_tags: Vec<CustomTag>,
}

/// The CORP block under the header's source system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corporation {
    pub business_name: Option<String>,
    pub address: Option<Address>,
    pub phone_numbers: Vec<StringWithTags>,
    pub www_urls: Vec<StringWithTags>,
    pub fax_numbers: Vec<StringWithTags>,
    pub emails: Vec<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// The DATA block under the header's source system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderSourceData {
    pub name: Option<String>,
    pub publish_date: Option<StringWithTags>,
    pub copyright: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// The CHAR block: character set name plus optional version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterSet {
    pub character_set_name: Option<StringWithTags>,
    pub version_num: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// The GEDC block: version number and form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GedcomVersion {
    pub version_number: Option<SupportedVersion>,
    pub gedcom_form: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// The two GEDCOM versions this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupportedVersion {
    V5_5,
    V5_5_1,
}

impl SupportedVersion {
    /// Parse a VERS value; anything but "5.5" and "5.5.1" is unsupported.
    pub fn from_value(value: &str) -> Result<Self, String> {
        match value.trim() {
            "5.5" => Ok(Self::V5_5),
            "5.5.1" => Ok(Self::V5_5_1),
            other => Err(format!("Unsupported GEDCOM version: {other}")),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V5_5 => "5.5",
            Self::V5_5_1 => "5.5.1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_versions_parse() {
        assert_eq!(SupportedVersion::from_value("5.5"), Ok(SupportedVersion::V5_5));
        assert_eq!(
            SupportedVersion::from_value("5.5.1"),
            Ok(SupportedVersion::V5_5_1)
        );
    }

    #[test]
    fn test_unsupported_version_is_rejected() {
        let err = SupportedVersion::from_value("5.6").unwrap_err();
        assert!(err.contains("5.6"));
    }
}
