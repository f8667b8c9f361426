// The INDIVIDUAL_RECORD and its satellite structures: personal names with
// phonetic/romanized variations, family links in both directions, and
// associations to other individuals.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::citation::Citation;
use super::event::{IndividualAttribute, IndividualEvent, LdsIndividualOrdinance};
use super::multimedia::MultimediaRef;
use super::structures::{Address, ChangeDate, CustomTag, NoteRef, StringWithTags, UserReference};

/// INDIVIDUAL_RECORD.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub xref: String,
    pub names: Vec<PersonalName>,
    pub sex: Option<StringWithTags>,
    pub address: Option<Address>,
    pub phone_numbers: Vec<StringWithTags>,
    pub www_urls: Vec<StringWithTags>,
    pub fax_numbers: Vec<StringWithTags>,
    pub emails: Vec<StringWithTags>,
    pub events: Vec<IndividualEvent>,
    pub attributes: Vec<IndividualAttribute>,
    pub lds_individual_ordinances: Vec<LdsIndividualOrdinance>,
    pub notes: Vec<NoteRef>,
    pub change_date: Option<ChangeDate>,
    pub rec_id_number: Option<StringWithTags>,
    pub permanent_rec_file_number: Option<StringWithTags>,
    pub ancestral_file_number: Option<StringWithTags>,
    pub multimedia: Vec<MultimediaRef>,
    pub restriction_notice: Option<StringWithTags>,
    pub citations: Vec<Citation>,
    pub aliases: Vec<StringWithTags>,
    pub families_where_spouse: Vec<FamilySpouse>,
    pub families_where_child: Vec<FamilyChild>,
    pub associations: Vec<Association>,
    /// Submitter xrefs interested in ancestors of this individual.
    pub ancestor_interest: Vec<String>,
    /// Submitter xrefs interested in descendants of this individual.
    pub descendant_interest: Vec<String>,
    pub user_references: Vec<UserReference>,
    /// Submitter xrefs.
    pub submitters: Vec<String>,
    pub custom_tags: Vec<CustomTag>,
}

/// PERSONAL_NAME_STRUCTURE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalName {
    /// The whole name as written, surname between slashes.
    pub basic: Option<String>,
    pub prefix: Option<StringWithTags>,
    pub given_name: Option<StringWithTags>,
    pub nickname: Option<StringWithTags>,
    pub surname_prefix: Option<StringWithTags>,
    pub surname: Option<StringWithTags>,
    pub suffix: Option<StringWithTags>,
    pub phonetic: Vec<PersonalNameVariation>,
    pub romanized: Vec<PersonalNameVariation>,
    pub notes: Vec<NoteRef>,
    pub citations: Vec<Citation>,
    pub custom_tags: Vec<CustomTag>,
}

/// A FONE or ROMN variation of a personal name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalNameVariation {
    pub variation: Option<String>,
    pub variation_type: Option<StringWithTags>,
    pub prefix: Option<StringWithTags>,
    pub given_name: Option<StringWithTags>,
    pub nickname: Option<StringWithTags>,
    pub surname_prefix: Option<StringWithTags>,
    pub surname: Option<StringWithTags>,
    pub suffix: Option<StringWithTags>,
    pub notes: Vec<NoteRef>,
    pub citations: Vec<Citation>,
    pub custom_tags: Vec<CustomTag>,
}

/// FAMC link: the family in which this individual is a child.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyChild {
    /// Xref of the family record.
    pub family: String,
    pub pedigree: Option<StringWithTags>,
    pub adopted_by: Option<AdoptedByWhichParent>,
    /// 5.5.1-only child linkage status.
    pub status: Option<StringWithTags>,
    pub notes: Vec<NoteRef>,
    pub custom_tags: Vec<CustomTag>,
}

/// FAMS link: a family in which this individual is a spouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilySpouse {
    /// Xref of the family record.
    pub family: String,
    pub notes: Vec<NoteRef>,
    pub custom_tags: Vec<CustomTag>,
}

/// Which parent adopted, on an ADOP event's FAMC link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdoptedByWhichParent {
    Husband,
    Wife,
    Both,
}

impl AdoptedByWhichParent {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "HUSB" => Some(Self::Husband),
            "WIFE" => Some(Self::Wife),
            "BOTH" => Some(Self::Both),
            _ => None,
        }
    }
}

/// ASSOCIATION_STRUCTURE: a pointer to another record with a relationship
/// qualifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Association {
    /// Xref of the associated record.
    pub associated_entity_xref: Option<String>,
    pub associated_entity_type: Option<StringWithTags>,
    pub relationship: Option<StringWithTags>,
    pub notes: Vec<NoteRef>,
    pub citations: Vec<Citation>,
    pub custom_tags: Vec<CustomTag>,
}

impl Individual {
    /// The "surname, given" key this individual sorts under. Falls back to
    /// splitting the basic name at its first slash, then to "-unknown-".
    pub fn last_name_first_name_key(&self) -> String {
        let Some(name) = self.names.first() else {
            return "-unknown-".to_string();
        };
        match (&name.surname, &name.given_name) {
            (None, None) => match name.basic.as_deref() {
                Some(basic) if basic.contains('/') => {
                    let slash = basic.find('/').unwrap();
                    let surname = basic[slash..].trim_matches('/').trim();
                    let given = basic[..slash].trim();
                    format!("{surname}, {given}")
                }
                _ => "-unknown-".to_string(),
            },
            (surname, given) => format!(
                "{}, {}",
                surname.as_ref().map(StringWithTags::as_str).unwrap_or(""),
                given.as_ref().map(StringWithTags::as_str).unwrap_or("")
            ),
        }
    }
}

/// Order two individuals by surname then given name. Comparison is plain
/// code-point ordering, deliberately locale-insensitive.
pub fn by_last_name_first_name(a: &Individual, b: &Individual) -> Ordering {
    a.last_name_first_name_key()
        .cmp(&b.last_name_first_name_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_basic(basic: &str) -> Individual {
        Individual {
            names: vec![PersonalName {
                basic: Some(basic.to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn with_parts(surname: &str, given: &str) -> Individual {
        Individual {
            names: vec![PersonalName {
                surname: Some(StringWithTags::new(surname)),
                given_name: Some(StringWithTags::new(given)),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_key_from_structured_parts() {
        assert_eq!(with_parts("Smith", "John").last_name_first_name_key(), "Smith, John");
    }

    #[test]
    fn test_key_from_basic_name() {
        assert_eq!(
            with_basic("John /Smith/").last_name_first_name_key(),
            "Smith, John"
        );
    }

    #[test]
    fn test_key_unknown_without_names() {
        assert_eq!(Individual::default().last_name_first_name_key(), "-unknown-");
        assert_eq!(with_basic("no slashes").last_name_first_name_key(), "-unknown-");
    }

    #[test]
    fn test_sort_by_surname_then_given() {
        let mut people = vec![
            with_parts("Smith", "John"),
            with_parts("Adams", "Zoe"),
            with_parts("Smith", "Alice"),
        ];
        people.sort_by(by_last_name_first_name);
        let keys: Vec<_> = people
            .iter()
            .map(Individual::last_name_first_name_key)
            .collect();
        assert_eq!(keys, vec!["Adams, Zoe", "Smith, Alice", "Smith, John"]);
    }
}
