// Typed GEDCOM document model. The document owns every record; everything
// else refers to records through xref handles into the document's maps.

pub mod citation;
pub mod document;
pub mod event;
pub mod family;
pub mod header;
pub mod individual;
pub mod multimedia;
pub mod source;
pub mod structures;

pub use citation::{Citation, CitationData, CitationWithSource, CitationWithoutSource};
pub use document::{get_or_create, Gedcom, XrefRecord};
pub use event::{
    EventDetail, FamilyEvent, FamilyEventType, IndividualAttribute, IndividualAttributeType,
    IndividualEvent, IndividualEventType, LdsIndividualOrdinance, LdsIndividualOrdinanceType,
    LdsSpouseSealing,
};
pub use family::Family;
pub use header::{
    CharacterSet, Corporation, GedcomVersion, Header, HeaderSourceData, SourceSystem,
    SupportedVersion,
};
pub use individual::{
    by_last_name_first_name, AdoptedByWhichParent, Association, FamilyChild, FamilySpouse,
    Individual, PersonalName, PersonalNameVariation,
};
pub use multimedia::{FileReference, Multimedia, MultimediaRef};
pub use source::{
    EventRecorded, Repository, RepositoryCitation, Source, SourceCallNumber, SourceData,
};
pub use structures::{
    Address, ChangeDate, CustomTag, NameVariation, Note, NoteRef, Place, StringWithTags,
    Submission, Submitter, Trailer, UserReference,
};
