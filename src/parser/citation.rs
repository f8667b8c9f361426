// Source citations. The SOUR value decides the shape: a pointer cites a
// source record, anything else embeds its description inline.

use crate::model::{
    Citation, CitationData, CitationWithSource, CitationWithoutSource,
};
use crate::tree::{LineTree, NodeId};

use super::{is_pointer, GedcomParser};

impl GedcomParser {
    /// Load one SOUR child into a citation list, discriminating the variant
    /// by the pointer pattern.
    pub(crate) fn load_citation(&mut self, t: &LineTree, node: NodeId, list: &mut Vec<Citation>) {
        let citation = if is_pointer(t.value(node)) {
            Citation::WithSource(self.load_citation_with_source(t, node))
        } else {
            Citation::WithoutSource(self.load_citation_without_source(t, node))
        };
        list.push(citation);
    }

    fn load_citation_with_source(&mut self, t: &LineTree, node: NodeId) -> CitationWithSource {
        let xref = t.value(node).unwrap().to_string();
        self.gedcom.source_mut(&xref);
        let mut citation = CitationWithSource {
            source: xref,
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "PAGE" => citation.where_in_source = Some(self.scalar(t, ch)),
                "EVEN" => {
                    citation.event_cited = Some(crate::model::StringWithTags {
                        value: t.value(ch).map(str::to_string),
                        custom_tags: Vec::new(),
                    });
                    for &gch in t.children(ch) {
                        match t.tag(gch) {
                            "ROLE" => citation.role_in_event = Some(self.scalar(t, gch)),
                            _ => self.unknown_tag(t, gch, &mut citation.custom_tags),
                        }
                    }
                }
                "DATA" => {
                    let data = self.load_citation_data(t, ch);
                    citation.data.push(data);
                }
                "QUAY" => citation.certainty = Some(self.scalar(t, ch)),
                "NOTE" => self.load_note(t, ch, &mut citation.notes),
                _ => self.unknown_tag(t, ch, &mut citation.custom_tags),
            }
        }
        citation
    }

    fn load_citation_without_source(
        &mut self,
        t: &LineTree,
        node: NodeId,
    ) -> CitationWithoutSource {
        let mut citation = CitationWithoutSource::default();
        citation
            .description
            .push(t.value(node).unwrap_or_default().to_string());
        for &ch in t.children(node) {
            match t.tag(ch) {
                "CONT" => citation
                    .description
                    .push(t.value(ch).unwrap_or_default().to_string()),
                "CONC" => {
                    let value = t.value(ch).unwrap_or_default();
                    match citation.description.last_mut() {
                        Some(last) => last.push_str(value),
                        None => citation.description.push(value.to_string()),
                    }
                }
                "TEXT" => {
                    let mut paragraph = Vec::new();
                    let mut custom = std::mem::take(&mut citation.custom_tags);
                    self.load_multiline_text(t, ch, &mut paragraph, &mut custom);
                    citation.custom_tags = custom;
                    citation.text_from_source.push(paragraph);
                }
                "NOTE" => self.load_note(t, ch, &mut citation.notes),
                _ => self.unknown_tag(t, ch, &mut citation.custom_tags),
            }
        }
        citation
    }

    fn load_citation_data(&mut self, t: &LineTree, node: NodeId) -> CitationData {
        let mut data = CitationData::default();
        for &ch in t.children(node) {
            match t.tag(ch) {
                "DATE" => data.entry_date = Some(self.scalar(t, ch)),
                "TEXT" => {
                    let mut paragraph = Vec::new();
                    let mut custom = std::mem::take(&mut data.custom_tags);
                    self.load_multiline_text(t, ch, &mut paragraph, &mut custom);
                    data.custom_tags = custom;
                    data.source_text.push(paragraph);
                }
                _ => self.unknown_tag(t, ch, &mut data.custom_tags),
            }
        }
        data
    }
}
