// Loaders for the shared structures: addresses, places, notes, change
// dates, user references, submitters, and the submission record.

use crate::model::{
    Address, ChangeDate, NameVariation, Note, NoteRef, Place, Submission, UserReference,
};
use crate::tree::{LineTree, NodeId};

use super::{is_pointer, GedcomParser};

impl GedcomParser {
    /// ADDRESS_STRUCTURE: the value plus CONT/CONC children form the free
    /// lines, the structured tags fill the breakdown.
    pub(crate) fn load_address(&mut self, t: &LineTree, node: NodeId) -> Address {
        let mut address = Address::default();
        if let Some(value) = t.value(node) {
            address.lines.push(value.to_string());
        }
        for &ch in t.children(node) {
            match t.tag(ch) {
                "ADR1" => address.addr1 = Some(self.scalar(t, ch)),
                "ADR2" => address.addr2 = Some(self.scalar(t, ch)),
                "CITY" => address.city = Some(self.scalar(t, ch)),
                "STAE" => address.state_province = Some(self.scalar(t, ch)),
                "POST" => address.postal_code = Some(self.scalar(t, ch)),
                "CTRY" => address.country = Some(self.scalar(t, ch)),
                "CONC" => {
                    let value = t.value(ch).unwrap_or_default();
                    match address.lines.last_mut() {
                        Some(last) => last.push_str(value),
                        None => address.lines.push(value.to_string()),
                    }
                }
                "CONT" => address
                    .lines
                    .push(t.value(ch).unwrap_or_default().to_string()),
                _ => self.unknown_tag(t, ch, &mut address.custom_tags),
            }
        }
        address
    }

    /// CHANGE_DATE: a DATE with an optional TIME child, plus notes.
    pub(crate) fn load_change_date(&mut self, t: &LineTree, node: NodeId) -> ChangeDate {
        let mut change = ChangeDate::default();
        for &ch in t.children(node) {
            match t.tag(ch) {
                "DATE" => {
                    change.date = Some(crate::model::StringWithTags {
                        value: t.value(ch).map(str::to_string),
                        custom_tags: Vec::new(),
                    });
                    if let Some(&first) = t.children(ch).first() {
                        change.time = Some(self.scalar(t, first));
                    }
                }
                "NOTE" => self.load_note(t, ch, &mut change.notes),
                _ => self.unknown_tag(t, ch, &mut change.custom_tags),
            }
        }
        change
    }

    /// NOTE structure. A pointer value links a note record; a node with its
    /// own xref id declares one (loaded into the document's map, not the
    /// local list); anything else is an inline note owned by the caller.
    pub(crate) fn load_note(&mut self, t: &LineTree, node: NodeId, notes: &mut Vec<NoteRef>) {
        if is_pointer(t.value(node)) {
            let xref = t.value(node).unwrap().to_string();
            self.gedcom.note_mut(&xref);
            notes.push(NoteRef::Xref(xref));
            return;
        }
        let declared_xref = t.node(node).xref_id.clone();
        let mut note = Note {
            xref: declared_xref.clone(),
            ..Default::default()
        };
        note.lines.push(t.value(node).unwrap_or_default().to_string());
        for &ch in t.children(node) {
            match t.tag(ch) {
                "CONC" => {
                    let value = t.value(ch).unwrap_or_default();
                    match note.lines.last_mut() {
                        // A CONC onto an empty first line replaces it.
                        Some(last) => last.push_str(value),
                        None => note.lines.push(value.to_string()),
                    }
                }
                "CONT" => note.lines.push(t.value(ch).unwrap_or_default().to_string()),
                "SOUR" => self.load_citation(t, ch, &mut note.citations),
                "REFN" => {
                    let reference = self.load_user_reference(t, ch);
                    note.user_references.push(reference);
                }
                "RIN" => note.rec_id_number = Some(self.scalar(t, ch)),
                "CHAN" => note.change_date = Some(self.load_change_date(t, ch)),
                _ => self.unknown_tag(t, ch, &mut note.custom_tags),
            }
        }
        match declared_xref {
            Some(xref) => {
                self.declare(&xref);
                self.gedcom.notes.insert(xref, note);
            }
            None => notes.push(NoteRef::Inline(note)),
        }
    }

    /// A NOTE at the root level must carry an xref id.
    pub(crate) fn load_root_note(&mut self, t: &LineTree, node: NodeId) {
        let mut dangling = Vec::new();
        self.load_note(t, node, &mut dangling);
        if !dangling.is_empty() {
            self.diagnostics.add_error(
                t.line(node),
                "NOTE records at the root level must have an xref id",
            );
        }
    }

    /// REFN with its optional TYPE child.
    pub(crate) fn load_user_reference(&mut self, t: &LineTree, node: NodeId) -> UserReference {
        let mut reference = UserReference {
            reference_num: t.value(node).map(str::to_string),
            ..Default::default()
        };
        if let Some(&first) = t.children(node).first() {
            reference.reference_type = t.value(first).map(str::to_string);
        }
        reference
    }

    /// PLACE_STRUCTURE. The 5.5.1 additions (ROMN/FONE variations and MAP
    /// coordinates) warn when the file declares 5.5.
    pub(crate) fn load_place(&mut self, t: &LineTree, node: NodeId) -> Place {
        let mut place = Place {
            name: t.value(node).unwrap_or_default().to_string(),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "FORM" => place.format = Some(self.scalar(t, ch)),
                "SOUR" => self.load_citation(t, ch, &mut place.citations),
                "NOTE" => self.load_note(t, ch, &mut place.notes),
                "CONC" => place.name.push_str(t.value(ch).unwrap_or_default()),
                "CONT" => {
                    place.name.push('\n');
                    place.name.push_str(t.value(ch).unwrap_or_default());
                }
                "ROMN" => {
                    self.warn_g55(t.line(ch), "a romanized variation was specified on a place");
                    let variation = self.load_place_variation(t, ch);
                    place.romanized.push(variation);
                }
                "FONE" => {
                    self.warn_g55(t.line(ch), "a phonetic variation was specified on a place");
                    let variation = self.load_place_variation(t, ch);
                    place.phonetic.push(variation);
                }
                "MAP" => {
                    self.warn_g55(t.line(ch), "a map coordinate was specified on a place");
                    for &gch in t.children(ch) {
                        match t.tag(gch) {
                            "LAT" => place.latitude = Some(self.scalar(t, gch)),
                            "LONG" => place.longitude = Some(self.scalar(t, gch)),
                            _ => self.unknown_tag(t, gch, &mut place.custom_tags),
                        }
                    }
                }
                _ => self.unknown_tag(t, ch, &mut place.custom_tags),
            }
        }
        place
    }

    fn load_place_variation(&mut self, t: &LineTree, node: NodeId) -> NameVariation {
        let mut variation = NameVariation {
            variation: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "TYPE" => variation.variation_type = Some(self.scalar(t, ch)),
                _ => self.unknown_tag(t, ch, &mut variation.custom_tags),
            }
        }
        variation
    }

    /// SUBMITTER_RECORD at the root level.
    pub(crate) fn load_submitter(&mut self, t: &LineTree, node: NodeId) {
        let Some(xref) = self.record_xref(t, node) else {
            return;
        };
        let mut submitter = crate::model::Submitter {
            xref: xref.clone(),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "NAME" => submitter.name = Some(self.scalar(t, ch)),
                "ADDR" => submitter.address = Some(self.load_address(t, ch)),
                "PHON" => {
                    let phone = self.scalar(t, ch);
                    submitter.phone_numbers.push(phone);
                }
                "WWW" => {
                    let url = self.scalar(t, ch);
                    submitter.www_urls.push(url);
                    self.warn_g55(t.line(ch), "a WWW URL was specified on the submitter");
                }
                "FAX" => {
                    let fax = self.scalar(t, ch);
                    submitter.fax_numbers.push(fax);
                    self.warn_g55(t.line(ch), "a fax number was specified on the submitter");
                }
                "EMAIL" => {
                    let email = self.scalar(t, ch);
                    submitter.emails.push(email);
                    self.warn_g55(t.line(ch), "an email was specified on the submitter");
                }
                "LANG" => {
                    let language = self.scalar(t, ch);
                    submitter.language_pref.push(language);
                }
                "OBJE" => self.load_multimedia_link(t, ch, &mut submitter.multimedia),
                "NOTE" => self.load_note(t, ch, &mut submitter.notes),
                "RIN" => submitter.rec_id_number = Some(self.scalar(t, ch)),
                "RFN" => submitter.reg_file_number = Some(self.scalar(t, ch)),
                "CHAN" => submitter.change_date = Some(self.load_change_date(t, ch)),
                _ => self.unknown_tag(t, ch, &mut submitter.custom_tags),
            }
        }
        self.gedcom.submitters.insert(xref, submitter);
    }

    /// SUBMISSION_RECORD. There is at most one; the header's SUBN pointer
    /// mirrors it.
    pub(crate) fn load_submission(&mut self, t: &LineTree, node: NodeId) {
        let xref = t.node(node).xref_id.clone().unwrap_or_default();
        if !xref.is_empty() {
            self.declare(&xref);
        }
        let mut submission = Submission {
            xref: xref.clone(),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "SUBM" => {
                    if let Some(value) = t.value(ch) {
                        self.gedcom.submitter_mut(value);
                        submission.submitter = Some(value.to_string());
                    }
                }
                "FAMF" => submission.name_of_family_file = Some(self.scalar(t, ch)),
                "TEMP" => submission.temple_code = Some(self.scalar(t, ch)),
                "ANCE" => submission.ancestors_count = Some(self.scalar(t, ch)),
                "DESC" => submission.descendants_count = Some(self.scalar(t, ch)),
                "ORDI" => submission.ordinance_process_flag = Some(self.scalar(t, ch)),
                "RIN" => submission.rec_id_number = Some(self.scalar(t, ch)),
                _ => self.unknown_tag(t, ch, &mut submission.custom_tags),
            }
        }
        // The header carries a cross-reference to the root-level submission;
        // now that the record exists, mirror it there.
        if let Some(header) = self.gedcom.header.as_mut() {
            if header.submission.is_none() {
                header.submission = Some(xref.clone());
            }
        }
        self.gedcom.submission = Some(submission);
    }
}
