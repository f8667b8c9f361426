// SOURCE_RECORD and REPOSITORY_RECORD loading, including the repository
// citation that links the two.

use crate::model::{
    EventRecorded, Repository, RepositoryCitation, Source, SourceCallNumber, SourceData,
};
use crate::tree::{LineTree, NodeId};

use super::GedcomParser;

impl GedcomParser {
    pub(crate) fn load_source(&mut self, t: &LineTree, node: NodeId) {
        let Some(xref) = self.record_xref(t, node) else {
            return;
        };
        let mut source = Source {
            xref: xref.clone(),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "DATA" => source.data = Some(self.load_source_data(t, ch)),
                "TITL" => {
                    let mut custom = std::mem::take(&mut source.custom_tags);
                    self.load_multiline_text(t, ch, &mut source.title, &mut custom);
                    source.custom_tags = custom;
                }
                "PUBL" => {
                    let mut custom = std::mem::take(&mut source.custom_tags);
                    self.load_multiline_text(t, ch, &mut source.publication_facts, &mut custom);
                    source.custom_tags = custom;
                }
                "TEXT" => {
                    let mut custom = std::mem::take(&mut source.custom_tags);
                    self.load_multiline_text(t, ch, &mut source.source_text, &mut custom);
                    source.custom_tags = custom;
                }
                "ABBR" => source.source_filed_by = Some(self.scalar(t, ch)),
                "AUTH" => {
                    let mut custom = std::mem::take(&mut source.custom_tags);
                    self.load_multiline_text(t, ch, &mut source.originators_authors, &mut custom);
                    source.custom_tags = custom;
                }
                "REPO" => source.repository_citation = Some(self.load_repository_citation(t, ch)),
                "NOTE" => self.load_note(t, ch, &mut source.notes),
                "OBJE" => self.load_multimedia_link(t, ch, &mut source.multimedia),
                "REFN" => {
                    let reference = self.load_user_reference(t, ch);
                    source.user_references.push(reference);
                }
                "RIN" => source.rec_id_number = Some(self.scalar(t, ch)),
                "CHAN" => source.change_date = Some(self.load_change_date(t, ch)),
                _ => self.unknown_tag(t, ch, &mut source.custom_tags),
            }
        }
        self.gedcom.sources.insert(xref, source);
    }

    fn load_source_data(&mut self, t: &LineTree, node: NodeId) -> SourceData {
        let mut data = SourceData::default();
        for &ch in t.children(node) {
            match t.tag(ch) {
                "EVEN" => {
                    let event = self.load_event_recorded(t, ch);
                    data.events_recorded.push(event);
                }
                "NOTE" => self.load_note(t, ch, &mut data.notes),
                "AGNC" => data.resp_agency = Some(self.scalar(t, ch)),
                _ => self.unknown_tag(t, ch, &mut data.custom_tags),
            }
        }
        data
    }

    fn load_event_recorded(&mut self, t: &LineTree, node: NodeId) -> EventRecorded {
        let mut event = EventRecorded {
            event_type: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "DATE" => event.date_period = Some(self.scalar(t, ch)),
                "PLAC" => event.jurisdiction = Some(self.scalar(t, ch)),
                _ => self.unknown_tag(t, ch, &mut event.custom_tags),
            }
        }
        event
    }

    fn load_repository_citation(&mut self, t: &LineTree, node: NodeId) -> RepositoryCitation {
        let mut citation = RepositoryCitation {
            repository_xref: t.value(node).map(str::to_string),
            ..Default::default()
        };
        if let Some(xref) = &citation.repository_xref {
            self.gedcom.repository_mut(xref);
        }
        for &ch in t.children(node) {
            match t.tag(ch) {
                "NOTE" => self.load_note(t, ch, &mut citation.notes),
                "CALN" => {
                    let mut call_number = SourceCallNumber {
                        call_number: Some(crate::model::StringWithTags {
                            value: t.value(ch).map(str::to_string),
                            custom_tags: Vec::new(),
                        }),
                        ..Default::default()
                    };
                    for &gch in t.children(ch) {
                        match t.tag(gch) {
                            "MEDI" => call_number.media_type = Some(self.scalar(t, gch)),
                            _ => self.unknown_tag(t, gch, &mut call_number.custom_tags),
                        }
                    }
                    citation.call_numbers.push(call_number);
                }
                _ => self.unknown_tag(t, ch, &mut citation.custom_tags),
            }
        }
        citation
    }

    pub(crate) fn load_repository(&mut self, t: &LineTree, node: NodeId) {
        let Some(xref) = self.record_xref(t, node) else {
            return;
        };
        let mut repository = Repository {
            xref: xref.clone(),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "NAME" => repository.name = Some(self.scalar(t, ch)),
                "ADDR" => repository.address = Some(self.load_address(t, ch)),
                "PHON" => {
                    let phone = self.scalar(t, ch);
                    repository.phone_numbers.push(phone);
                }
                "WWW" => {
                    let url = self.scalar(t, ch);
                    repository.www_urls.push(url);
                    self.warn_g55(
                        t.line(ch),
                        format!("a WWW URL was specified on repository {xref}"),
                    );
                }
                "FAX" => {
                    let fax = self.scalar(t, ch);
                    repository.fax_numbers.push(fax);
                    self.warn_g55(
                        t.line(ch),
                        format!("a fax number was specified on repository {xref}"),
                    );
                }
                "EMAIL" => {
                    let email = self.scalar(t, ch);
                    repository.emails.push(email);
                    self.warn_g55(
                        t.line(ch),
                        format!("an email was specified on repository {xref}"),
                    );
                }
                "NOTE" => self.load_note(t, ch, &mut repository.notes),
                "REFN" => {
                    let reference = self.load_user_reference(t, ch);
                    repository.user_references.push(reference);
                }
                "RIN" => repository.rec_id_number = Some(self.scalar(t, ch)),
                "CHAN" => repository.change_date = Some(self.load_change_date(t, ch)),
                _ => self.unknown_tag(t, ch, &mut repository.custom_tags),
            }
        }
        self.gedcom.repositories.insert(xref, repository);
    }
}
