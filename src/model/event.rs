// Events, attributes, and LDS ordinances. The GEDCOM grammar encodes the
// kind of event in the tag itself (BIRT, MARR, OCCU, ...), so each family of
// tags is an enum with a membership test that gates dispatch in the parser.

use serde::{Deserialize, Serialize};

use super::citation::Citation;
use super::individual::FamilyChild;
use super::multimedia::MultimediaRef;
use super::structures::{Address, CustomTag, NoteRef, Place, StringWithTags};

/// INDIVIDUAL_EVENT_STRUCTURE tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndividualEventType {
    Birth,
    Christening,
    Death,
    Burial,
    Cremation,
    Adoption,
    Baptism,
    BarMitzvah,
    BasMitzvah,
    Blessing,
    AdultChristening,
    Confirmation,
    FirstCommunion,
    Ordination,
    Naturalization,
    Emigration,
    Immigration,
    Census,
    Probate,
    Will,
    Graduation,
    Retirement,
    Event,
}

impl IndividualEventType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "BIRT" => Self::Birth,
            "CHR" => Self::Christening,
            "DEAT" => Self::Death,
            "BURI" => Self::Burial,
            "CREM" => Self::Cremation,
            "ADOP" => Self::Adoption,
            "BAPM" => Self::Baptism,
            "BARM" => Self::BarMitzvah,
            "BASM" => Self::BasMitzvah,
            "BLES" => Self::Blessing,
            "CHRA" => Self::AdultChristening,
            "CONF" => Self::Confirmation,
            "FCOM" => Self::FirstCommunion,
            "ORDN" => Self::Ordination,
            "NATU" => Self::Naturalization,
            "EMIG" => Self::Emigration,
            "IMMI" => Self::Immigration,
            "CENS" => Self::Census,
            "PROB" => Self::Probate,
            "WILL" => Self::Will,
            "GRAD" => Self::Graduation,
            "RETI" => Self::Retirement,
            "EVEN" => Self::Event,
            _ => return None,
        })
    }

    pub fn is_tag(tag: &str) -> bool {
        Self::from_tag(tag).is_some()
    }

    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Birth => "birth",
            Self::Christening => "christening",
            Self::Death => "death",
            Self::Burial => "burial",
            Self::Cremation => "cremation",
            Self::Adoption => "adoption",
            Self::Baptism => "baptism",
            Self::BarMitzvah => "bar mitzvah",
            Self::BasMitzvah => "bas mitzvah",
            Self::Blessing => "blessing",
            Self::AdultChristening => "adult christening",
            Self::Confirmation => "confirmation",
            Self::FirstCommunion => "first communion",
            Self::Ordination => "ordination",
            Self::Naturalization => "naturalization",
            Self::Emigration => "emigration",
            Self::Immigration => "immigration",
            Self::Census => "census",
            Self::Probate => "probate",
            Self::Will => "will",
            Self::Graduation => "graduation",
            Self::Retirement => "retirement",
            Self::Event => "event",
        }
    }
}

/// INDIVIDUAL_ATTRIBUTE_STRUCTURE tags. FACT is 5.5.1-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndividualAttributeType {
    Caste,
    PhysicalDescription,
    Education,
    NationalIdNumber,
    NationalOrTribalOrigin,
    CountOfChildren,
    CountOfMarriages,
    Occupation,
    Possessions,
    ReligiousAffiliation,
    Residence,
    SocialSecurityNumber,
    NobilityTypeTitle,
    Fact,
}

impl IndividualAttributeType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "CAST" => Self::Caste,
            "DSCR" => Self::PhysicalDescription,
            "EDUC" => Self::Education,
            "IDNO" => Self::NationalIdNumber,
            "NATI" => Self::NationalOrTribalOrigin,
            "NCHI" => Self::CountOfChildren,
            "NMR" => Self::CountOfMarriages,
            "OCCU" => Self::Occupation,
            "PROP" => Self::Possessions,
            "RELI" => Self::ReligiousAffiliation,
            "RESI" => Self::Residence,
            "SSN" => Self::SocialSecurityNumber,
            "TITL" => Self::NobilityTypeTitle,
            "FACT" => Self::Fact,
            _ => return None,
        })
    }

    pub fn is_tag(tag: &str) -> bool {
        Self::from_tag(tag).is_some()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Caste => "caste",
            Self::PhysicalDescription => "physical description",
            Self::Education => "education",
            Self::NationalIdNumber => "national id number",
            Self::NationalOrTribalOrigin => "national or tribal origin",
            Self::CountOfChildren => "count of children",
            Self::CountOfMarriages => "count of marriages",
            Self::Occupation => "occupation",
            Self::Possessions => "possessions",
            Self::ReligiousAffiliation => "religious affiliation",
            Self::Residence => "residence",
            Self::SocialSecurityNumber => "social security number",
            Self::NobilityTypeTitle => "nobility type title",
            Self::Fact => "fact",
        }
    }
}

/// FAMILY_EVENT_STRUCTURE tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FamilyEventType {
    Annulment,
    Census,
    Divorce,
    DivorceFiled,
    Engagement,
    MarriageBanner,
    MarriageContract,
    MarriageLicense,
    Marriage,
    MarriageSettlement,
    Residence,
    Event,
}

impl FamilyEventType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "ANUL" => Self::Annulment,
            "CENS" => Self::Census,
            "DIV" => Self::Divorce,
            "DIVF" => Self::DivorceFiled,
            "ENGA" => Self::Engagement,
            "MARB" => Self::MarriageBanner,
            "MARC" => Self::MarriageContract,
            "MARL" => Self::MarriageLicense,
            "MARR" => Self::Marriage,
            "MARS" => Self::MarriageSettlement,
            "RESI" => Self::Residence,
            "EVEN" => Self::Event,
            _ => return None,
        })
    }

    pub fn is_tag(tag: &str) -> bool {
        Self::from_tag(tag).is_some()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Annulment => "annulment",
            Self::Census => "census",
            Self::Divorce => "divorce",
            Self::DivorceFiled => "divorce filed",
            Self::Engagement => "engagement",
            Self::MarriageBanner => "marriage banner",
            Self::MarriageContract => "marriage contract",
            Self::MarriageLicense => "marriage license",
            Self::Marriage => "marriage",
            Self::MarriageSettlement => "marriage settlement",
            Self::Residence => "residence",
            Self::Event => "event",
        }
    }
}

/// LDS_INDIVIDUAL_ORDINANCE tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LdsIndividualOrdinanceType {
    Baptism,
    Confirmation,
    Endowment,
    ChildSealing,
}

impl LdsIndividualOrdinanceType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "BAPL" => Self::Baptism,
            "CONL" => Self::Confirmation,
            "ENDL" => Self::Endowment,
            "SLGC" => Self::ChildSealing,
            _ => return None,
        })
    }

    pub fn is_tag(tag: &str) -> bool {
        Self::from_tag(tag).is_some()
    }
}

/// Detail shared by every event and attribute: dates, places, agencies,
/// contact lists, media, notes, and citations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    pub sub_type: Option<StringWithTags>,
    pub date: Option<StringWithTags>,
    pub place: Option<Place>,
    pub address: Option<Address>,
    pub age: Option<StringWithTags>,
    pub cause: Option<StringWithTags>,
    pub resp_agency: Option<StringWithTags>,
    pub religious_affiliation: Option<StringWithTags>,
    pub restriction_notice: Option<StringWithTags>,
    pub phone_numbers: Vec<StringWithTags>,
    pub www_urls: Vec<StringWithTags>,
    pub fax_numbers: Vec<StringWithTags>,
    pub emails: Vec<StringWithTags>,
    pub multimedia: Vec<MultimediaRef>,
    pub notes: Vec<NoteRef>,
    pub citations: Vec<Citation>,
    pub custom_tags: Vec<CustomTag>,
}

/// An event on an individual.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualEvent {
    pub event_type: Option<IndividualEventType>,
    /// The "Y"/null payload on the event line itself.
    pub y_null: Option<String>,
    pub description: Option<StringWithTags>,
    /// For birth/christening/adoption: the family link the event refers to.
    pub family: Option<FamilyChild>,
    pub detail: EventDetail,
}

/// An attribute of an individual (occupation, residence, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndividualAttribute {
    pub attribute_type: Option<IndividualAttributeType>,
    pub description: Option<StringWithTags>,
    pub detail: EventDetail,
}

/// An event on a family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilyEvent {
    pub event_type: Option<FamilyEventType>,
    pub y_null: Option<String>,
    pub husband_age: Option<StringWithTags>,
    pub wife_age: Option<StringWithTags>,
    pub detail: EventDetail,
}

/// LDS_INDIVIDUAL_ORDINANCE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LdsIndividualOrdinance {
    pub ordinance_type: Option<LdsIndividualOrdinanceType>,
    pub y_null: Option<String>,
    pub date: Option<StringWithTags>,
    pub temple: Option<StringWithTags>,
    pub place: Option<StringWithTags>,
    pub status: Option<StringWithTags>,
    pub family_where_child: Option<FamilyChild>,
    pub citations: Vec<Citation>,
    pub notes: Vec<NoteRef>,
    pub custom_tags: Vec<CustomTag>,
}

/// LDS_SPOUSE_SEALING on a family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LdsSpouseSealing {
    pub date: Option<StringWithTags>,
    pub temple: Option<StringWithTags>,
    pub place: Option<StringWithTags>,
    pub status: Option<StringWithTags>,
    pub citations: Vec<Citation>,
    pub notes: Vec<NoteRef>,
    pub custom_tags: Vec<CustomTag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_event_tag_set() {
        assert!(IndividualEventType::is_tag("BIRT"));
        assert!(IndividualEventType::is_tag("IMMI"));
        assert!(!IndividualEventType::is_tag("MARR"));
        assert!(!IndividualEventType::is_tag("OCCU"));
    }

    #[test]
    fn test_attribute_tag_set() {
        assert!(IndividualAttributeType::is_tag("OCCU"));
        assert!(IndividualAttributeType::is_tag("FACT"));
        assert!(!IndividualAttributeType::is_tag("BIRT"));
    }

    #[test]
    fn test_family_event_tag_set() {
        assert!(FamilyEventType::is_tag("MARR"));
        assert!(FamilyEventType::is_tag("ANUL"));
        assert!(!FamilyEventType::is_tag("BAPM"));
    }

    #[test]
    fn test_census_is_both_individual_and_family() {
        assert!(IndividualEventType::is_tag("CENS"));
        assert!(FamilyEventType::is_tag("CENS"));
    }

    #[test]
    fn test_lds_ordinance_tags() {
        assert!(LdsIndividualOrdinanceType::is_tag("BAPL"));
        assert!(LdsIndividualOrdinanceType::is_tag("SLGC"));
        assert!(!LdsIndividualOrdinanceType::is_tag("SLGS"));
    }
}
