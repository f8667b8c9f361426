// FAM_RECORD loading. Spouses and children resolve through get-or-create so
// a family can reference individuals declared later in the file.

use crate::model::{Family, FamilyEvent, FamilyEventType, LdsSpouseSealing};
use crate::tree::{LineTree, NodeId};

use super::GedcomParser;

impl GedcomParser {
    pub(crate) fn load_family(&mut self, t: &LineTree, node: NodeId) {
        let Some(xref) = self.record_xref(t, node) else {
            return;
        };
        let mut family = Family {
            xref: xref.clone(),
            ..Default::default()
        };
        for &ch in t.children(node) {
            let tag = t.tag(ch);
            match tag {
                "HUSB" => {
                    if let Some(value) = t.value(ch) {
                        self.gedcom.individual_mut(value);
                        family.husband = Some(value.to_string());
                    }
                }
                "WIFE" => {
                    if let Some(value) = t.value(ch) {
                        self.gedcom.individual_mut(value);
                        family.wife = Some(value.to_string());
                    }
                }
                "CHIL" => {
                    if let Some(value) = t.value(ch) {
                        self.gedcom.individual_mut(value);
                        family.children.push(value.to_string());
                    }
                }
                "NCHI" => family.num_children = Some(self.scalar(t, ch)),
                "SOUR" => self.load_citation(t, ch, &mut family.citations),
                "OBJE" => self.load_multimedia_link(t, ch, &mut family.multimedia),
                "RIN" => family.automated_record_id = Some(self.scalar(t, ch)),
                "CHAN" => family.change_date = Some(self.load_change_date(t, ch)),
                "NOTE" => self.load_note(t, ch, &mut family.notes),
                "RESN" => {
                    family.restriction_notice = Some(self.scalar(t, ch));
                    self.warn_g55(
                        t.line(ch),
                        "a restriction notice was specified for a family",
                    );
                }
                "RFN" => family.rec_file_number = Some(self.scalar(t, ch)),
                "SLGS" => {
                    let sealing = self.load_lds_spouse_sealing(t, ch);
                    family.lds_spouse_sealings.push(sealing);
                }
                "SUBM" => {
                    if let Some(value) = t.value(ch) {
                        self.gedcom.submitter_mut(value);
                        family.submitters.push(value.to_string());
                    }
                }
                "REFN" => {
                    let reference = self.load_user_reference(t, ch);
                    family.user_references.push(reference);
                }
                _ if FamilyEventType::is_tag(tag) => {
                    let event = self.load_family_event(t, ch);
                    family.events.push(event);
                }
                _ => self.unknown_tag(t, ch, &mut family.custom_tags),
            }
        }
        self.gedcom.families.insert(xref, family);
    }

    fn load_family_event(&mut self, t: &LineTree, node: NodeId) -> FamilyEvent {
        let event_type = FamilyEventType::from_tag(t.tag(node));
        let context = format!(
            "{} family event",
            event_type.map(|e| e.label()).unwrap_or("a")
        );
        let mut event = FamilyEvent {
            event_type,
            y_null: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            if self.load_event_detail_child(t, ch, &mut event.detail, &context) {
                continue;
            }
            match t.tag(ch) {
                // HUSB and WIFE under a family event carry the spouses' ages
                // at the time of the event in an AGE child.
                "HUSB" => event.husband_age = self.load_spouse_age(t, ch),
                "WIFE" => event.wife_age = self.load_spouse_age(t, ch),
                _ => self.unknown_tag(t, ch, &mut event.detail.custom_tags),
            }
        }
        event
    }

    fn load_spouse_age(
        &mut self,
        t: &LineTree,
        node: NodeId,
    ) -> Option<crate::model::StringWithTags> {
        let mut age = None;
        for &ch in t.children(node) {
            match t.tag(ch) {
                "AGE" => age = Some(self.scalar(t, ch)),
                _ => self.unknown_tag_error(t, ch),
            }
        }
        age
    }

    fn load_lds_spouse_sealing(&mut self, t: &LineTree, node: NodeId) -> LdsSpouseSealing {
        let mut sealing = LdsSpouseSealing::default();
        for &ch in t.children(node) {
            match t.tag(ch) {
                "DATE" => sealing.date = Some(self.scalar(t, ch)),
                "PLAC" => sealing.place = Some(self.scalar(t, ch)),
                "STAT" => sealing.status = Some(self.scalar(t, ch)),
                "TEMP" => sealing.temple = Some(self.scalar(t, ch)),
                "SOUR" => self.load_citation(t, ch, &mut sealing.citations),
                "NOTE" => self.load_note(t, ch, &mut sealing.notes),
                _ => self.unknown_tag(t, ch, &mut sealing.custom_tags),
            }
        }
        sealing
    }
}
