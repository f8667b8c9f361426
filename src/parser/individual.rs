// INDIVIDUAL_RECORD loading: names and their variations, family links in
// both directions, associations, events, attributes, and LDS ordinances.
// Event and attribute kinds are encoded in the tag, so dispatch is gated on
// the tag-set membership tests.

use crate::model::{
    AdoptedByWhichParent, Association, EventDetail, FamilyChild, FamilySpouse, Individual,
    IndividualAttribute, IndividualAttributeType, IndividualEvent, IndividualEventType,
    LdsIndividualOrdinance, LdsIndividualOrdinanceType, PersonalName, PersonalNameVariation,
};
use crate::tree::{LineTree, NodeId};

use super::GedcomParser;

impl GedcomParser {
    pub(crate) fn load_individual(&mut self, t: &LineTree, node: NodeId) {
        let Some(xref) = self.record_xref(t, node) else {
            return;
        };
        let mut individual = Individual {
            xref: xref.clone(),
            ..Default::default()
        };
        for &ch in t.children(node) {
            let tag = t.tag(ch);
            match tag {
                "NAME" => {
                    let name = self.load_personal_name(t, ch);
                    individual.names.push(name);
                }
                "SEX" => individual.sex = Some(self.scalar(t, ch)),
                "ADDR" => individual.address = Some(self.load_address(t, ch)),
                "PHON" => {
                    let phone = self.scalar(t, ch);
                    individual.phone_numbers.push(phone);
                }
                "WWW" => {
                    let url = self.scalar(t, ch);
                    individual.www_urls.push(url);
                    self.warn_g55(
                        t.line(ch),
                        format!("a WWW URL was specified for individual {xref}"),
                    );
                }
                "FAX" => {
                    let fax = self.scalar(t, ch);
                    individual.fax_numbers.push(fax);
                    self.warn_g55(
                        t.line(ch),
                        format!("a fax number was specified for individual {xref}"),
                    );
                }
                "EMAIL" => {
                    let email = self.scalar(t, ch);
                    individual.emails.push(email);
                    self.warn_g55(
                        t.line(ch),
                        format!("an email was specified for individual {xref}"),
                    );
                }
                "NOTE" => self.load_note(t, ch, &mut individual.notes),
                "CHAN" => individual.change_date = Some(self.load_change_date(t, ch)),
                "RIN" => individual.rec_id_number = Some(self.scalar(t, ch)),
                "RFN" => individual.permanent_rec_file_number = Some(self.scalar(t, ch)),
                "AFN" => individual.ancestral_file_number = Some(self.scalar(t, ch)),
                "OBJE" => self.load_multimedia_link(t, ch, &mut individual.multimedia),
                "RESN" => individual.restriction_notice = Some(self.scalar(t, ch)),
                "SOUR" => self.load_citation(t, ch, &mut individual.citations),
                "ALIA" => {
                    let alias = self.scalar(t, ch);
                    individual.aliases.push(alias);
                }
                "FAMS" => {
                    let link = self.load_family_where_spouse(t, ch);
                    individual.families_where_spouse.push(link);
                }
                "FAMC" => {
                    let link = self.load_family_where_child(t, ch);
                    individual.families_where_child.push(link);
                }
                "ASSO" => {
                    let association = self.load_association(t, ch);
                    individual.associations.push(association);
                }
                "ANCI" => {
                    if let Some(value) = t.value(ch) {
                        self.gedcom.submitter_mut(value);
                        individual.ancestor_interest.push(value.to_string());
                    }
                }
                "DESI" => {
                    if let Some(value) = t.value(ch) {
                        self.gedcom.submitter_mut(value);
                        individual.descendant_interest.push(value.to_string());
                    }
                }
                "REFN" => {
                    let reference = self.load_user_reference(t, ch);
                    individual.user_references.push(reference);
                }
                "SUBM" => {
                    if let Some(value) = t.value(ch) {
                        self.gedcom.submitter_mut(value);
                        individual.submitters.push(value.to_string());
                    }
                }
                _ if IndividualEventType::is_tag(tag) => {
                    let event = self.load_individual_event(t, ch);
                    individual.events.push(event);
                }
                _ if IndividualAttributeType::is_tag(tag) => {
                    let attribute = self.load_individual_attribute(t, ch);
                    individual.attributes.push(attribute);
                }
                _ if LdsIndividualOrdinanceType::is_tag(tag) => {
                    let ordinance = self.load_lds_individual_ordinance(t, ch);
                    individual.lds_individual_ordinances.push(ordinance);
                }
                _ => self.unknown_tag(t, ch, &mut individual.custom_tags),
            }
        }
        self.gedcom.individuals.insert(xref, individual);
    }

    fn load_personal_name(&mut self, t: &LineTree, node: NodeId) -> PersonalName {
        let mut name = PersonalName {
            basic: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "NPFX" => name.prefix = Some(self.scalar(t, ch)),
                "GIVN" => name.given_name = Some(self.scalar(t, ch)),
                "NICK" => name.nickname = Some(self.scalar(t, ch)),
                "SPFX" => name.surname_prefix = Some(self.scalar(t, ch)),
                "SURN" => name.surname = Some(self.scalar(t, ch)),
                "NSFX" => name.suffix = Some(self.scalar(t, ch)),
                "SOUR" => self.load_citation(t, ch, &mut name.citations),
                "NOTE" => self.load_note(t, ch, &mut name.notes),
                "ROMN" => {
                    let variation = self.load_personal_name_variation(t, ch);
                    name.romanized.push(variation);
                }
                "FONE" => {
                    let variation = self.load_personal_name_variation(t, ch);
                    name.phonetic.push(variation);
                }
                _ => self.unknown_tag(t, ch, &mut name.custom_tags),
            }
        }
        name
    }

    fn load_personal_name_variation(
        &mut self,
        t: &LineTree,
        node: NodeId,
    ) -> PersonalNameVariation {
        let mut variation = PersonalNameVariation {
            variation: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "NPFX" => variation.prefix = Some(self.scalar(t, ch)),
                "GIVN" => variation.given_name = Some(self.scalar(t, ch)),
                "NICK" => variation.nickname = Some(self.scalar(t, ch)),
                "SPFX" => variation.surname_prefix = Some(self.scalar(t, ch)),
                "SURN" => variation.surname = Some(self.scalar(t, ch)),
                "NSFX" => variation.suffix = Some(self.scalar(t, ch)),
                "TYPE" => variation.variation_type = Some(self.scalar(t, ch)),
                "SOUR" => self.load_citation(t, ch, &mut variation.citations),
                "NOTE" => self.load_note(t, ch, &mut variation.notes),
                _ => self.unknown_tag(t, ch, &mut variation.custom_tags),
            }
        }
        variation
    }

    /// FAMC link: the family this individual is a child of.
    pub(crate) fn load_family_where_child(&mut self, t: &LineTree, node: NodeId) -> FamilyChild {
        let family_xref = t.value(node).unwrap_or_default().to_string();
        if !family_xref.is_empty() {
            self.gedcom.family_mut(&family_xref);
        }
        let mut link = FamilyChild {
            family: family_xref,
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "NOTE" => self.load_note(t, ch, &mut link.notes),
                "PEDI" => link.pedigree = Some(self.scalar(t, ch)),
                "ADOP" => {
                    let value = t.value(ch).unwrap_or_default();
                    match AdoptedByWhichParent::from_value(value) {
                        Some(parent) => link.adopted_by = Some(parent),
                        None => self.diagnostics.add_error(
                            t.line(ch),
                            format!("unparseable ADOP value on child-to-family link: {value:?}"),
                        ),
                    }
                }
                "STAT" => {
                    link.status = Some(self.scalar(t, ch));
                    self.warn_g55(
                        t.line(ch),
                        "a status was specified for a child-to-family link",
                    );
                }
                _ => self.unknown_tag(t, ch, &mut link.custom_tags),
            }
        }
        link
    }

    /// FAMS link: a family this individual is a spouse in.
    fn load_family_where_spouse(&mut self, t: &LineTree, node: NodeId) -> FamilySpouse {
        let family_xref = t.value(node).unwrap_or_default().to_string();
        if !family_xref.is_empty() {
            self.gedcom.family_mut(&family_xref);
        }
        let mut link = FamilySpouse {
            family: family_xref,
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "NOTE" => self.load_note(t, ch, &mut link.notes),
                _ => self.unknown_tag(t, ch, &mut link.custom_tags),
            }
        }
        link
    }

    /// ASSO: a pointer-valued association with RELA/TYPE qualifiers.
    fn load_association(&mut self, t: &LineTree, node: NodeId) -> Association {
        let mut association = Association {
            associated_entity_xref: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "RELA" => association.relationship = Some(self.scalar(t, ch)),
                "TYPE" => association.associated_entity_type = Some(self.scalar(t, ch)),
                "NOTE" => self.load_note(t, ch, &mut association.notes),
                "SOUR" => self.load_citation(t, ch, &mut association.citations),
                _ => self.unknown_tag(t, ch, &mut association.custom_tags),
            }
        }
        association
    }

    /// The child tags every event and attribute shares. Returns false when
    /// the tag is not part of the common detail and the caller should try
    /// its own arms.
    pub(crate) fn load_event_detail_child(
        &mut self,
        t: &LineTree,
        ch: NodeId,
        detail: &mut EventDetail,
        context: &str,
    ) -> bool {
        match t.tag(ch) {
            "TYPE" => detail.sub_type = Some(self.scalar(t, ch)),
            "DATE" => detail.date = Some(self.scalar(t, ch)),
            "PLAC" => detail.place = Some(self.load_place(t, ch)),
            "OBJE" => self.load_multimedia_link(t, ch, &mut detail.multimedia),
            "NOTE" => self.load_note(t, ch, &mut detail.notes),
            "SOUR" => self.load_citation(t, ch, &mut detail.citations),
            "AGE" => detail.age = Some(self.scalar(t, ch)),
            "CAUS" => detail.cause = Some(self.scalar(t, ch)),
            "ADDR" => detail.address = Some(self.load_address(t, ch)),
            "AGNC" => detail.resp_agency = Some(self.scalar(t, ch)),
            "RESN" => {
                detail.restriction_notice = Some(self.scalar(t, ch));
                self.warn_g55(
                    t.line(ch),
                    format!("a restriction notice was specified for {context}"),
                );
            }
            "RELI" => {
                detail.religious_affiliation = Some(self.scalar(t, ch));
                self.warn_g55(
                    t.line(ch),
                    format!("a religious affiliation was specified for {context}"),
                );
            }
            "PHON" => {
                let phone = self.scalar(t, ch);
                detail.phone_numbers.push(phone);
            }
            "WWW" => {
                let url = self.scalar(t, ch);
                detail.www_urls.push(url);
                self.warn_g55(t.line(ch), format!("a WWW URL was specified on {context}"));
            }
            "FAX" => {
                let fax = self.scalar(t, ch);
                detail.fax_numbers.push(fax);
                self.warn_g55(t.line(ch), format!("a fax number was specified on {context}"));
            }
            "EMAIL" => {
                let email = self.scalar(t, ch);
                detail.emails.push(email);
                self.warn_g55(t.line(ch), format!("an email was specified on {context}"));
            }
            _ => return false,
        }
        true
    }

    fn load_individual_event(&mut self, t: &LineTree, node: NodeId) -> IndividualEvent {
        let event_type = IndividualEventType::from_tag(t.tag(node));
        let context = format!(
            "{} individual event",
            event_type.map(|e| e.label()).unwrap_or("an")
        );
        let mut event = IndividualEvent {
            event_type,
            y_null: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            if self.load_event_detail_child(t, ch, &mut event.detail, &context) {
                continue;
            }
            match t.tag(ch) {
                "CONC" => {
                    let value = t.value(ch).unwrap_or_default();
                    match &mut event.description {
                        Some(description) => {
                            let mut text = description.value.take().unwrap_or_default();
                            text.push_str(value);
                            description.value = Some(text);
                        }
                        None => event.description = Some(self.scalar(t, ch)),
                    }
                }
                "CONT" => {
                    let value = t.value(ch).unwrap_or_default();
                    match &mut event.description {
                        Some(description) => {
                            let mut text = description.value.take().unwrap_or_default();
                            text.push('\n');
                            text.push_str(value);
                            description.value = Some(text);
                        }
                        None => {
                            event.description =
                                Some(crate::model::StringWithTags::new(value.to_string()));
                        }
                    }
                }
                "FAMC" => {
                    let link = self.load_family_where_child(t, ch);
                    event.family = Some(link);
                }
                _ => self.unknown_tag(t, ch, &mut event.detail.custom_tags),
            }
        }
        event
    }

    fn load_individual_attribute(&mut self, t: &LineTree, node: NodeId) -> IndividualAttribute {
        let attribute_type = IndividualAttributeType::from_tag(t.tag(node));
        if attribute_type == Some(IndividualAttributeType::Fact) {
            self.warn_g55(t.line(node), "a FACT attribute was specified");
        }
        let context = format!(
            "{} attribute",
            attribute_type.map(|a| a.label()).unwrap_or("an")
        );
        let mut attribute = IndividualAttribute {
            attribute_type,
            description: t
                .value(node)
                .map(|v| crate::model::StringWithTags::new(v.to_string())),
            ..Default::default()
        };
        for &ch in t.children(node) {
            if self.load_event_detail_child(t, ch, &mut attribute.detail, &context) {
                continue;
            }
            match t.tag(ch) {
                "CONC" => {
                    let value = t.value(ch).unwrap_or_default();
                    match &mut attribute.description {
                        Some(description) => {
                            let mut text = description.value.take().unwrap_or_default();
                            text.push_str(value);
                            description.value = Some(text);
                        }
                        None => attribute.description = Some(self.scalar(t, ch)),
                    }
                }
                _ => self.unknown_tag(t, ch, &mut attribute.detail.custom_tags),
            }
        }
        attribute
    }

    fn load_lds_individual_ordinance(
        &mut self,
        t: &LineTree,
        node: NodeId,
    ) -> LdsIndividualOrdinance {
        let mut ordinance = LdsIndividualOrdinance {
            ordinance_type: LdsIndividualOrdinanceType::from_tag(t.tag(node)),
            y_null: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "DATE" => ordinance.date = Some(self.scalar(t, ch)),
                "PLAC" => ordinance.place = Some(self.scalar(t, ch)),
                "STAT" => ordinance.status = Some(self.scalar(t, ch)),
                "TEMP" => ordinance.temple = Some(self.scalar(t, ch)),
                "SOUR" => self.load_citation(t, ch, &mut ordinance.citations),
                "NOTE" => self.load_note(t, ch, &mut ordinance.notes),
                "FAMC" => {
                    let link = self.load_family_where_child(t, ch);
                    ordinance.family_where_child = Some(link);
                }
                _ => self.unknown_tag(t, ch, &mut ordinance.custom_tags),
            }
        }
        ordinance
    }
}
