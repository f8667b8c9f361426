// The FAM_RECORD. Spouses and children are xref handles into the document's
// individual map, never owned copies, so the family graph stays acyclic at
// the ownership level.

use serde::{Deserialize, Serialize};

use super::citation::Citation;
use super::event::{FamilyEvent, LdsSpouseSealing};
use super::multimedia::MultimediaRef;
use super::structures::{ChangeDate, CustomTag, NoteRef, StringWithTags, UserReference};

/// FAM_RECORD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub xref: String,
    /// Xref of the husband individual.
    pub husband: Option<String>,
    /// Xref of the wife individual.
    pub wife: Option<String>,
    /// Xrefs of the children, in file order.
    pub children: Vec<String>,
    pub num_children: Option<StringWithTags>,
    pub events: Vec<FamilyEvent>,
    pub lds_spouse_sealings: Vec<LdsSpouseSealing>,
    pub citations: Vec<Citation>,
    pub multimedia: Vec<MultimediaRef>,
    pub notes: Vec<NoteRef>,
    pub restriction_notice: Option<StringWithTags>,
    pub automated_record_id: Option<StringWithTags>,
    pub rec_file_number: Option<StringWithTags>,
    pub change_date: Option<ChangeDate>,
    /// Submitter xrefs.
    pub submitters: Vec<String>,
    pub user_references: Vec<UserReference>,
    pub custom_tags: Vec<CustomTag>,
}
