// HEADER loading: the source system block, character set, and the GEDC
// version that every later conformance warning keys off.

use crate::model::{
    CharacterSet, Corporation, GedcomVersion, Header, HeaderSourceData, SourceSystem,
    SupportedVersion,
};
use crate::tree::{LineTree, NodeId};

use super::GedcomParser;

impl GedcomParser {
    pub(crate) fn load_header(&mut self, t: &LineTree, node: NodeId) {
        let mut header = Header::default();
        // The version gate needs to see the header while its own children are
        // still being loaded (a COPR can follow the GEDC block), so install
        // it first and fill it in place.
        self.gedcom.header = Some(header.clone());
        for &ch in t.children(node) {
            match t.tag(ch) {
                "SOUR" => header.source_system = Some(self.load_source_system(t, ch)),
                "DEST" => header.destination_system = Some(self.scalar(t, ch)),
                "DATE" => {
                    header.date = Some(crate::model::StringWithTags {
                        value: t.value(ch).map(str::to_string),
                        custom_tags: Vec::new(),
                    });
                    // One optional TIME subitem is the only possibility here.
                    if let Some(&first) = t.children(ch).first() {
                        header.time = Some(self.scalar(t, first));
                    }
                }
                "CHAR" => {
                    let mut character_set = CharacterSet {
                        character_set_name: Some(crate::model::StringWithTags {
                            value: t.value(ch).map(str::to_string),
                            custom_tags: Vec::new(),
                        }),
                        ..Default::default()
                    };
                    // One optional VERS subitem is the only possibility here.
                    if let Some(&first) = t.children(ch).first() {
                        character_set.version_num = Some(self.scalar(t, first));
                    }
                    header.character_set = Some(character_set);
                }
                "SUBM" => {
                    if let Some(value) = t.value(ch) {
                        self.gedcom.submitter_mut(value);
                        header.submitter = Some(value.to_string());
                    }
                }
                "SUBN" => {
                    // The root-level SUBN record is the real submission; the
                    // header only cross-references it.
                    if header.submission.is_none() {
                        header.submission = t
                            .value(ch)
                            .map(str::to_string)
                            .or_else(|| self.gedcom.submission.as_ref().map(|s| s.xref.clone()));
                    }
                }
                "FILE" => header.file_name = Some(self.scalar(t, ch)),
                "GEDC" => {
                    let version = self.load_gedcom_version(t, ch);
                    header.gedcom_version = Some(version);
                    // Make the declared version visible to g55() immediately.
                    self.gedcom.header = Some(header.clone());
                }
                "COPR" => {
                    let mut custom = std::mem::take(&mut header.custom_tags);
                    self.load_multiline_text(t, ch, &mut header.copyright_data, &mut custom);
                    header.custom_tags = custom;
                    if self.g55() && header.copyright_data.len() > 1 {
                        self.diagnostics.add_warning(
                            t.line(ch),
                            "GEDCOM version is 5.5 but multiple lines of copyright data were \
                             specified, which is only allowed in GEDCOM 5.5.1; data loaded but \
                             cannot be re-written unless the version changes",
                        );
                    }
                }
                "LANG" => header.language = Some(self.scalar(t, ch)),
                "PLAC" => {
                    // The header PLAC carries the hierarchy in its FORM child.
                    for &gch in t.children(ch) {
                        match t.tag(gch) {
                            "FORM" => header.place_hierarchy = Some(self.scalar(t, gch)),
                            _ => self.unknown_tag(t, gch, &mut header.custom_tags),
                        }
                    }
                }
                "NOTE" => {
                    let mut custom = std::mem::take(&mut header.custom_tags);
                    self.load_multiline_text(t, ch, &mut header.notes, &mut custom);
                    header.custom_tags = custom;
                }
                _ => self.unknown_tag(t, ch, &mut header.custom_tags),
            }
        }
        self.gedcom.header = Some(header);
    }

    fn load_gedcom_version(&mut self, t: &LineTree, node: NodeId) -> GedcomVersion {
        let mut version = GedcomVersion::default();
        for &ch in t.children(node) {
            match t.tag(ch) {
                "VERS" => {
                    let value = t.value(ch).unwrap_or_default();
                    match SupportedVersion::from_value(value) {
                        Ok(v) => version.version_number = Some(v),
                        Err(message) => self.diagnostics.add_error(t.line(ch), message),
                    }
                }
                "FORM" => version.gedcom_form = Some(self.scalar(t, ch)),
                _ => self.unknown_tag(t, ch, &mut version.custom_tags),
            }
        }
        version
    }

    fn load_source_system(&mut self, t: &LineTree, node: NodeId) -> SourceSystem {
        let mut system = SourceSystem {
            system_id: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "VERS" => system.version_num = Some(self.scalar(t, ch)),
                "NAME" => system.product_name = Some(self.scalar(t, ch)),
                "CORP" => system.corporation = Some(self.load_corporation(t, ch)),
                "DATA" => system.source_data = Some(self.load_header_source_data(t, ch)),
                _ => self.unknown_tag(t, ch, &mut system.custom_tags),
            }
        }
        system
    }

    fn load_corporation(&mut self, t: &LineTree, node: NodeId) -> Corporation {
        let mut corporation = Corporation {
            business_name: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "ADDR" => corporation.address = Some(self.load_address(t, ch)),
                "PHON" => {
                    let phone = self.scalar(t, ch);
                    corporation.phone_numbers.push(phone);
                }
                "WWW" => {
                    let url = self.scalar(t, ch);
                    corporation.www_urls.push(url);
                    self.warn_g55(
                        t.line(ch),
                        "a WWW URL was specified for the corporation in the source system",
                    );
                }
                "FAX" => {
                    let fax = self.scalar(t, ch);
                    corporation.fax_numbers.push(fax);
                    self.warn_g55(
                        t.line(ch),
                        "a fax number was specified for the corporation in the source system",
                    );
                }
                "EMAIL" => {
                    let email = self.scalar(t, ch);
                    corporation.emails.push(email);
                    self.warn_g55(
                        t.line(ch),
                        "an email was specified for the corporation in the source system",
                    );
                }
                _ => self.unknown_tag(t, ch, &mut corporation.custom_tags),
            }
        }
        corporation
    }

    fn load_header_source_data(&mut self, t: &LineTree, node: NodeId) -> HeaderSourceData {
        let mut data = HeaderSourceData {
            name: t.value(node).map(str::to_string),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "DATE" => data.publish_date = Some(self.scalar(t, ch)),
                "COPR" => data.copyright = Some(self.scalar(t, ch)),
                _ => self.unknown_tag(t, ch, &mut data.custom_tags),
            }
        }
        data
    }
}
