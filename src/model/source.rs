// SOURCE_RECORD, REPOSITORY_RECORD, and the citation structures that link
// the two.

use serde::{Deserialize, Serialize};

use super::multimedia::MultimediaRef;
use super::structures::{Address, ChangeDate, CustomTag, NoteRef, StringWithTags, UserReference};

/// SOURCE_RECORD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub xref: String,
    pub data: Option<SourceData>,
    pub title: Vec<String>,
    pub publication_facts: Vec<String>,
    pub source_text: Vec<String>,
    pub source_filed_by: Option<StringWithTags>,
    pub originators_authors: Vec<String>,
    pub repository_citation: Option<RepositoryCitation>,
    pub notes: Vec<NoteRef>,
    pub multimedia: Vec<MultimediaRef>,
    pub user_references: Vec<UserReference>,
    pub rec_id_number: Option<StringWithTags>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Vec<CustomTag>,
}

/// The DATA block of a source record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceData {
    pub events_recorded: Vec<EventRecorded>,
    pub resp_agency: Option<StringWithTags>,
    pub notes: Vec<NoteRef>,
    pub custom_tags: Vec<CustomTag>,
}

/// One EVEN entry in a source's DATA block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecorded {
    pub event_type: Option<String>,
    pub date_period: Option<StringWithTags>,
    pub jurisdiction: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// The REPO citation inside a source record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryCitation {
    /// Xref of the repository record.
    pub repository_xref: Option<String>,
    pub notes: Vec<NoteRef>,
    pub call_numbers: Vec<SourceCallNumber>,
    pub custom_tags: Vec<CustomTag>,
}

/// A CALN call number with its optional media qualifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCallNumber {
    pub call_number: Option<StringWithTags>,
    pub media_type: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}

/// REPOSITORY_RECORD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub xref: String,
    pub name: Option<StringWithTags>,
    pub address: Option<Address>,
    pub phone_numbers: Vec<StringWithTags>,
    pub www_urls: Vec<StringWithTags>,
    pub fax_numbers: Vec<StringWithTags>,
    pub emails: Vec<StringWithTags>,
    pub notes: Vec<NoteRef>,
    pub user_references: Vec<UserReference>,
    pub rec_id_number: Option<StringWithTags>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Vec<CustomTag>,
}
