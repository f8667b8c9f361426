// Multimedia loading. GEDCOM 5.5 and 5.5.1 define incompatible OBJE
// sub-grammars, and files routinely mix them with the declared version, so
// the style is detected from the FILE and FORM child counts: per element,
// Unknown -> Style55 | Style551 -> Loaded | Rejected. Rejections produce an
// error; style/version contradictions produce a warning but load anyway.

use crate::model::{FileReference, Multimedia, MultimediaRef};
use crate::tree::{LineTree, NodeId};

use super::{is_pointer, GedcomParser};

impl GedcomParser {
    /// MULTIMEDIA_LINK on some element: a pointer to an OBJE record, or an
    /// embedded multimedia structure.
    pub(crate) fn load_multimedia_link(
        &mut self,
        t: &LineTree,
        node: NodeId,
        list: &mut Vec<MultimediaRef>,
    ) {
        if is_pointer(t.value(node)) {
            let xref = t.value(node).unwrap().to_string();
            self.gedcom.multimedia_mut(&xref);
            list.push(MultimediaRef::Xref(xref));
            return;
        }
        let mut media = Multimedia::default();
        if self.load_file_references(t, node, &mut media) {
            list.push(MultimediaRef::Embedded(media));
        }
    }

    /// Detect the style of an embedded OBJE link and load it. Returns false
    /// when the link is structurally hopeless and must be abandoned.
    fn load_file_references(
        &mut self,
        t: &LineTree,
        node: NodeId,
        media: &mut Multimedia,
    ) -> bool {
        // 5.5.1 allows several FILEs per object, 5.5 exactly one; 5.5 pairs
        // one FORM with the FILE as siblings, 5.5.1 nests FORM under FILE.
        let file_count = t
            .children(node)
            .iter()
            .filter(|&&ch| t.tag(ch) == "FILE")
            .count();
        let form_count = t
            .children(node)
            .iter()
            .filter(|&&ch| t.tag(ch) == "FORM")
            .count();

        if file_count > 1 {
            self.warn_g55(
                t.line(node),
                "multiple files are referenced in a multimedia link, which 5.5 does not allow",
            );
        }
        if form_count == 0 {
            self.warn_g55(
                t.line(node),
                "there is no FORM tag in the multimedia link, a scenario which 5.5 does not allow",
            );
        }
        if form_count > 1 {
            self.diagnostics.add_error(
                t.line(node),
                "multiple FORM tags were found for a multimedia file reference; this is not \
                 compliant with any GEDCOM standard and the link was not loaded",
            );
            return false;
        }

        if file_count > 1 || form_count < file_count {
            self.load_link_551(t, node, media);
        } else {
            self.load_link_55(t, node, media);
        }
        true
    }

    /// A 5.5-style link: FORM, TITL, and FILE as siblings describing one
    /// file.
    fn load_link_55(&mut self, t: &LineTree, node: NodeId, media: &mut Multimedia) {
        let mut file = FileReference::default();
        for &ch in t.children(node) {
            match t.tag(ch) {
                "FORM" => file.format = Some(self.scalar(t, ch)),
                "TITL" => media.embedded_title = Some(self.scalar(t, ch)),
                "FILE" => file.reference_to_file = Some(self.scalar(t, ch)),
                "NOTE" => self.load_note(t, ch, &mut media.notes),
                _ => self.unknown_tag(t, ch, &mut media.custom_tags),
            }
        }
        media.file_references.push(file);
    }

    /// A 5.5.1-style link: one or more FILEs, each carrying its own FORM.
    fn load_link_551(&mut self, t: &LineTree, node: NodeId, media: &mut Multimedia) {
        for &ch in t.children(node) {
            match t.tag(ch) {
                "FILE" => {
                    let file = self.load_file_reference_551(t, ch);
                    media.file_references.push(file);
                }
                "TITL" => {
                    // A sibling TITL titles every file of the link.
                    let title = self.scalar(t, ch);
                    for file in &mut media.file_references {
                        file.title = Some(title.clone());
                    }
                }
                "NOTE" => {
                    self.load_note(t, ch, &mut media.notes);
                    self.warn_g551(t.line(ch), "a NOTE was found on a multimedia link");
                }
                _ => self.unknown_tag(t, ch, &mut media.custom_tags),
            }
        }
    }

    /// One 5.5.1 FILE node: the required FORM child names the format, its
    /// optional MEDI/TYPE grandchild the media type.
    fn load_file_reference_551(&mut self, t: &LineTree, node: NodeId) -> FileReference {
        let mut file = FileReference {
            reference_to_file: Some(crate::model::StringWithTags {
                value: t.value(node).map(str::to_string),
                custom_tags: Vec::new(),
            }),
            ..Default::default()
        };
        for &ch in t.children(node) {
            match t.tag(ch) {
                "FORM" => {
                    file.format = Some(crate::model::StringWithTags {
                        value: t.value(ch).map(str::to_string),
                        custom_tags: Vec::new(),
                    });
                    for &gch in t.children(ch) {
                        match t.tag(gch) {
                            "MEDI" | "TYPE" => file.media_type = Some(self.scalar(t, gch)),
                            _ => self.unknown_tag(t, gch, &mut file.custom_tags),
                        }
                    }
                }
                "TITL" => file.title = Some(self.scalar(t, ch)),
                _ => self.unknown_tag(t, ch, &mut file.custom_tags),
            }
        }
        if file.format.is_none() {
            self.diagnostics.add_error(
                t.line(node),
                "FORM tag not found under FILE reference; GEDCOM 5.5.1 requires exactly one",
            );
        }
        file
    }

    /// A top-level OBJE record. FILE children mean 5.5.1 style, their
    /// absence means the 5.5 embedded-blob style; either contradicting the
    /// declared version warns but loads.
    pub(crate) fn load_multimedia_record(&mut self, t: &LineTree, node: NodeId) {
        let Some(xref) = self.record_xref(t, node) else {
            return;
        };
        let has_files = t.children(node).iter().any(|&ch| t.tag(ch) == "FILE");
        let mut media = Multimedia {
            xref: Some(xref.clone()),
            ..Default::default()
        };
        if has_files {
            self.warn_g55(
                t.line(node),
                "a 5.5.1-style multimedia record was found",
            );
            self.load_record_551(t, node, &mut media);
        } else {
            self.warn_g551(t.line(node), "a 5.5-style multimedia record was found");
            self.load_record_55(t, node, &mut media);
        }
        self.gedcom.multimedia.insert(xref, media);
    }

    /// 5.5-style MULTIMEDIA_RECORD: embedded FORM/TITL/BLOB with an optional
    /// chained continuation object.
    fn load_record_55(&mut self, t: &LineTree, node: NodeId, media: &mut Multimedia) {
        for &ch in t.children(node) {
            match t.tag(ch) {
                "FORM" => media.embedded_media_format = Some(self.scalar(t, ch)),
                "TITL" => media.embedded_title = Some(self.scalar(t, ch)),
                "NOTE" => self.load_note(t, ch, &mut media.notes),
                "SOUR" => self.load_citation(t, ch, &mut media.citations),
                "BLOB" => {
                    let mut custom = std::mem::take(&mut media.custom_tags);
                    self.load_multiline_text(t, ch, &mut media.blob, &mut custom);
                    media.custom_tags = custom;
                    self.warn_g551(t.line(ch), "a BLOB tag was found");
                }
                "OBJE" => {
                    let mut continued = Vec::new();
                    self.load_multimedia_link(t, ch, &mut continued);
                    if let Some(next) = continued.into_iter().next() {
                        media.continued_object = Some(Box::new(next));
                    }
                    self.warn_g551(t.line(ch), "a chained OBJE tag was found");
                }
                "REFN" => {
                    let reference = self.load_user_reference(t, ch);
                    media.user_references.push(reference);
                }
                "RIN" => media.rec_id_number = Some(self.scalar(t, ch)),
                "CHAN" => media.change_date = Some(self.load_change_date(t, ch)),
                _ => self.unknown_tag(t, ch, &mut media.custom_tags),
            }
        }
    }

    /// 5.5.1-style MULTIMEDIA_RECORD: a list of FILE references.
    fn load_record_551(&mut self, t: &LineTree, node: NodeId, media: &mut Multimedia) {
        for &ch in t.children(node) {
            match t.tag(ch) {
                "FILE" => {
                    let file = self.load_file_reference_551(t, ch);
                    media.file_references.push(file);
                }
                "NOTE" => self.load_note(t, ch, &mut media.notes),
                "SOUR" => self.load_citation(t, ch, &mut media.citations),
                "REFN" => {
                    let reference = self.load_user_reference(t, ch);
                    media.user_references.push(reference);
                }
                "RIN" => media.rec_id_number = Some(self.scalar(t, ch)),
                "CHAN" => media.change_date = Some(self.load_change_date(t, ch)),
                _ => self.unknown_tag(t, ch, &mut media.custom_tags),
            }
        }
    }
}
