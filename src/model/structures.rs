// Shared structures: custom-tag carriers, addresses, places, notes, change
// dates, and the small record types (submitter, submission, trailer).

use serde::{Deserialize, Serialize};

/// An owned copy of a user-defined (underscore-prefixed) subtree. The line
/// tree itself is discarded after parsing, so unrecognized tags are deep
/// copied into the element they were found under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTag {
    pub tag: String,
    pub xref_id: Option<String>,
    pub value: Option<String>,
    /// 1-based source line number.
    pub line: usize,
    pub children: Vec<CustomTag>,
}

/// A scalar GEDCOM value plus any user-defined tags found beneath its line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringWithTags {
    pub value: Option<String>,
    pub custom_tags: Vec<CustomTag>,
}

impl StringWithTags {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            custom_tags: Vec::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }
}

/// A note on some element: either a pointer to a note record owned by the
/// document, or an inline note owned right here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NoteRef {
    Xref(String),
    Inline(Note),
}

/// A NOTE record (or inline note structure).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Set for top-level note records, absent for inline notes.
    pub xref: Option<String>,
    pub lines: Vec<String>,
    pub citations: Vec<super::citation::Citation>,
    pub user_references: Vec<UserReference>,
    pub rec_id_number: Option<StringWithTags>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Vec<CustomTag>,
}

/// ADDRESS_STRUCTURE: free-form lines plus the structured breakdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub lines: Vec<String>,
    pub addr1: Option<StringWithTags>,
    pub addr2: Option<StringWithTags>,
    pub city: Option<StringWithTags>,
    pub state_province: Option<StringWithTags>,
    pub postal_code: Option<StringWithTags>,
    pub country: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// A phonetic or romanized variation of a place name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameVariation {
    pub variation: Option<String>,
    pub variation_type: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// PLACE_STRUCTURE. The name may span lines via CONC/CONT; the 5.5.1
/// additions (variations, map coordinates) warn when they appear in a file
/// declared as 5.5.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub format: Option<StringWithTags>,
    pub citations: Vec<super::citation::Citation>,
    pub notes: Vec<NoteRef>,
    pub phonetic: Vec<NameVariation>,
    pub romanized: Vec<NameVariation>,
    pub latitude: Option<StringWithTags>,
    pub longitude: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// CHANGE_DATE structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangeDate {
    pub date: Option<StringWithTags>,
    pub time: Option<StringWithTags>,
    pub notes: Vec<NoteRef>,
    pub custom_tags: Vec<CustomTag>,
}

/// A REFN user reference with its optional TYPE qualifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReference {
    pub reference_num: Option<String>,
    pub reference_type: Option<String>,
    pub custom_tags: Vec<CustomTag>,
}

/// SUBMITTER_RECORD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Submitter {
    pub xref: String,
    pub name: Option<StringWithTags>,
    pub address: Option<Address>,
    pub phone_numbers: Vec<StringWithTags>,
    pub www_urls: Vec<StringWithTags>,
    pub fax_numbers: Vec<StringWithTags>,
    pub emails: Vec<StringWithTags>,
    pub language_pref: Vec<StringWithTags>,
    pub multimedia: Vec<super::multimedia::MultimediaRef>,
    pub notes: Vec<NoteRef>,
    pub rec_id_number: Option<StringWithTags>,
    pub reg_file_number: Option<StringWithTags>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Vec<CustomTag>,
}

/// SUBMISSION_RECORD. At most one per transmission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub xref: String,
    /// Xref of the submitter record.
    pub submitter: Option<String>,
    pub name_of_family_file: Option<StringWithTags>,
    pub temple_code: Option<StringWithTags>,
    pub ancestors_count: Option<StringWithTags>,
    pub descendants_count: Option<StringWithTags>,
    pub ordinance_process_flag: Option<StringWithTags>,
    pub rec_id_number: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// End-of-transmission marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer;
