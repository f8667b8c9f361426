// Multimedia records. GEDCOM 5.5 and 5.5.1 define incompatible OBJE
// sub-grammars: 5.5 embeds a single file (FORM/TITL/BLOB, with chained OBJE
// continuation), 5.5.1 holds a list of FILE references each carrying its own
// FORM. The parser auto-detects which grammar a record uses; this type can
// represent either.

use serde::{Deserialize, Serialize};

use super::citation::Citation;
use super::structures::{ChangeDate, CustomTag, NoteRef, StringWithTags, UserReference};

/// A multimedia link on some element: a pointer to an OBJE record, or an
/// embedded multimedia structure owned in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MultimediaRef {
    Xref(String),
    Embedded(Multimedia),
}

/// MULTIMEDIA_RECORD, either 5.5-style (embedded) or 5.5.1-style (file
/// references).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Multimedia {
    /// Set for top-level records, absent for embedded links.
    pub xref: Option<String>,
    /// 5.5.1-style file references. Also used for the single file of a
    /// 5.5-style link.
    pub file_references: Vec<FileReference>,
    /// 5.5-style single embedded format.
    pub embedded_media_format: Option<StringWithTags>,
    /// 5.5-style title.
    pub embedded_title: Option<StringWithTags>,
    /// 5.5-style encoded media lines.
    pub blob: Vec<String>,
    /// 5.5-style continuation chain to the next object.
    pub continued_object: Option<Box<MultimediaRef>>,
    pub notes: Vec<NoteRef>,
    pub citations: Vec<Citation>,
    pub user_references: Vec<UserReference>,
    pub rec_id_number: Option<StringWithTags>,
    pub change_date: Option<ChangeDate>,
    pub custom_tags: Vec<CustomTag>,
}

/// One FILE reference of a multimedia record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub reference_to_file: Option<StringWithTags>,
    pub format: Option<StringWithTags>,
    pub media_type: Option<StringWithTags>,
    pub title: Option<StringWithTags>,
    pub custom_tags: Vec<CustomTag>,
}
