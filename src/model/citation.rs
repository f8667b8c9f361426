// Source citations. A SOUR child whose value is a pointer cites a source
// record; anything else is an embedded description. The two shapes share
// almost nothing, so they are separate variants rather than one struct of
// mostly-empty fields.

use serde::{Deserialize, Serialize};

use super::structures::{CustomTag, NoteRef, StringWithTags};

/// SOURCE_CITATION, discriminated at parse time by the SOUR value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Citation {
    WithSource(CitationWithSource),
    WithoutSource(CitationWithoutSource),
}

impl Citation {
    pub fn notes(&self) -> &[NoteRef] {
        match self {
            Citation::WithSource(c) => &c.notes,
            Citation::WithoutSource(c) => &c.notes,
        }
    }

    pub fn custom_tags(&self) -> &[CustomTag] {
        match self {
            Citation::WithSource(c) => &c.custom_tags,
            Citation::WithoutSource(c) => &c.custom_tags,
        }
    }
}

/// A citation pointing at a SOURCE_RECORD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationWithSource {
    /// Xref of the cited source record.
    pub source: String,
    pub where_in_source: Option<StringWithTags>,
    pub event_cited: Option<StringWithTags>,
    pub role_in_event: Option<StringWithTags>,
    pub data: Vec<CitationData>,
    pub certainty: Option<StringWithTags>,
    pub notes: Vec<NoteRef>,
    pub custom_tags: Vec<CustomTag>,
}

/// A citation with the source material embedded in the transmission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationWithoutSource {
    pub description: Vec<String>,
    /// Each TEXT block is its own paragraph list.
    pub text_from_source: Vec<Vec<String>>,
    pub notes: Vec<NoteRef>,
    pub custom_tags: Vec<CustomTag>,
}

/// The DATA structure inside a citation-with-source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationData {
    pub entry_date: Option<StringWithTags>,
    pub source_text: Vec<Vec<String>>,
    pub custom_tags: Vec<CustomTag>,
}
