// The document root. Every top-level record lives in one of these maps,
// keyed by its xref; everything else holds xref handles into them. Records
// come into existence either at their declaration or at first reference
// (get-or-create), so forward references just work.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::family::Family;
use super::header::Header;
use super::individual::Individual;
use super::multimedia::Multimedia;
use super::source::{Repository, Source};
use super::structures::{Note, Submission, Submitter, Trailer};

/// A record that can be created as a bare placeholder carrying only its
/// xref, to be filled in when (or if) its declaration is reached.
pub trait XrefRecord {
    fn with_xref(xref: &str) -> Self;
}

impl XrefRecord for Individual {
    fn with_xref(xref: &str) -> Self {
        Self {
            xref: xref.to_string(),
            ..Default::default()
        }
    }
}

impl XrefRecord for Family {
    fn with_xref(xref: &str) -> Self {
        Self {
            xref: xref.to_string(),
            ..Default::default()
        }
    }
}

impl XrefRecord for Source {
    fn with_xref(xref: &str) -> Self {
        Self {
            xref: xref.to_string(),
            ..Default::default()
        }
    }
}

impl XrefRecord for Repository {
    fn with_xref(xref: &str) -> Self {
        Self {
            xref: xref.to_string(),
            ..Default::default()
        }
    }
}

impl XrefRecord for Submitter {
    fn with_xref(xref: &str) -> Self {
        Self {
            xref: xref.to_string(),
            ..Default::default()
        }
    }
}

impl XrefRecord for Note {
    fn with_xref(xref: &str) -> Self {
        Self {
            xref: Some(xref.to_string()),
            ..Default::default()
        }
    }
}

impl XrefRecord for Multimedia {
    fn with_xref(xref: &str) -> Self {
        Self {
            xref: Some(xref.to_string()),
            ..Default::default()
        }
    }
}

/// Look a record up by xref, inserting a placeholder if it does not exist
/// yet. The single generic gateway for all cross-reference resolution.
pub fn get_or_create<'a, T: XrefRecord>(
    map: &'a mut HashMap<String, T>,
    xref: &str,
) -> &'a mut T {
    map.entry(xref.to_string())
        .or_insert_with(|| T::with_xref(xref))
}

/// The parsed GEDCOM transmission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gedcom {
    pub header: Option<Header>,
    pub submission: Option<Submission>,
    pub trailer: Option<Trailer>,
    pub individuals: HashMap<String, Individual>,
    pub families: HashMap<String, Family>,
    pub sources: HashMap<String, Source>,
    pub repositories: HashMap<String, Repository>,
    pub notes: HashMap<String, Note>,
    pub multimedia: HashMap<String, Multimedia>,
    pub submitters: HashMap<String, Submitter>,
}

impl Gedcom {
    pub fn individual_mut(&mut self, xref: &str) -> &mut Individual {
        get_or_create(&mut self.individuals, xref)
    }

    pub fn family_mut(&mut self, xref: &str) -> &mut Family {
        get_or_create(&mut self.families, xref)
    }

    pub fn source_mut(&mut self, xref: &str) -> &mut Source {
        get_or_create(&mut self.sources, xref)
    }

    pub fn repository_mut(&mut self, xref: &str) -> &mut Repository {
        get_or_create(&mut self.repositories, xref)
    }

    pub fn note_mut(&mut self, xref: &str) -> &mut Note {
        get_or_create(&mut self.notes, xref)
    }

    pub fn multimedia_mut(&mut self, xref: &str) -> &mut Multimedia {
        get_or_create(&mut self.multimedia, xref)
    }

    pub fn submitter_mut(&mut self, xref: &str) -> &mut Submitter {
        get_or_create(&mut self.submitters, xref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_inserts_placeholder() {
        let mut gedcom = Gedcom::default();
        let i = gedcom.individual_mut("@I1@");
        assert_eq!(i.xref, "@I1@");
        assert!(i.names.is_empty());
        assert_eq!(gedcom.individuals.len(), 1);
    }

    #[test]
    fn test_get_or_create_returns_existing() {
        let mut gedcom = Gedcom::default();
        gedcom.individual_mut("@I1@").sex = Some(crate::model::StringWithTags::new("M"));
        let again = gedcom.individual_mut("@I1@");
        assert_eq!(again.sex.as_ref().unwrap().as_str(), "M");
        assert_eq!(gedcom.individuals.len(), 1);
    }

    #[test]
    fn test_note_placeholder_has_xref_set() {
        let mut gedcom = Gedcom::default();
        let n = gedcom.note_mut("@N1@");
        assert_eq!(n.xref.as_deref(), Some("@N1@"));
    }
}
