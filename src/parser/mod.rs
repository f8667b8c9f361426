// The semantic parser: a tag-dispatched descent over the line tree that
// populates the typed document. The dispatch is context-sensitive (the same
// tag means different things at different depths), cross-references resolve
// lazily through get-or-create placeholders, and the whole pass is forgiving:
// only structural problems abort, everything else lands in the diagnostics.

mod citation;
mod family;
mod header;
mod individual;
mod multimedia;
mod source;
mod structures;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::diagnostics::DiagnosticCollection;
use crate::encoding;
use crate::error::ParseError;
use crate::lexer;
use crate::model::{CustomTag, Gedcom, StringWithTags, Trailer};
use crate::tree::{self, LineTree, NodeId};

static POINTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[A-Za-z0-9_]+@$").expect("invalid xref pointer regex"));

/// Does a value reference another record, i.e. is it of the form `@xref@`?
pub(crate) fn is_pointer(value: Option<&str>) -> bool {
    value.is_some_and(|v| POINTER_REGEX.is_match(v))
}

/// Parser for GEDCOM 5.5 / 5.5.1 transmissions.
///
/// Load a file (or bytes, or a string) and then inspect [`GedcomParser::gedcom`]
/// for the data and [`GedcomParser::errors`] / [`GedcomParser::warnings`] for
/// everything that was off about it. Most commonly the warnings report 5.5.1
/// constructs in a file that declares itself as 5.5; such data is loaded
/// anyway.
#[derive(Debug, Default)]
pub struct GedcomParser {
    /// The parsed document.
    pub gedcom: Gedcom,
    /// Everything non-fatal that went wrong, in discovery order.
    pub diagnostics: DiagnosticCollection,
    /// Xrefs that appeared as top-level record declarations.
    declared: HashSet<String>,
}

/// Parse a GEDCOM file from disk.
pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<GedcomParser> {
    let mut parser = GedcomParser::new();
    parser.load(path)?;
    Ok(parser)
}

/// Parse GEDCOM content from an already-decoded string.
pub fn parse_str(content: &str) -> Result<GedcomParser, ParseError> {
    let mut parser = GedcomParser::new();
    parser.load_str(content)?;
    Ok(parser)
}

impl GedcomParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a GEDCOM file by path.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .with_context(|| format!("failed to read GEDCOM file: {}", path.display()))?;
        self.load_bytes(&bytes)
            .with_context(|| format!("failed to parse GEDCOM file: {}", path.display()))?;
        Ok(())
    }

    /// Load a GEDCOM transmission from raw bytes, detecting the encoding.
    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        let lines = encoding::read_lines(bytes, &mut self.diagnostics)?;
        self.load_lines(lines)
    }

    /// Load a GEDCOM transmission from already-decoded text.
    pub fn load_str(&mut self, content: &str) -> Result<(), ParseError> {
        let lines = encoding::frame_lines(content, &mut self.diagnostics)?;
        self.load_lines(lines)
    }

    fn load_lines(&mut self, lines: Vec<encoding::SourceLine>) -> Result<(), ParseError> {
        let lexed = lines
            .iter()
            .map(lexer::lex_line)
            .collect::<Result<Vec<_>, _>>()?;
        let tree = tree::build(lexed)?;
        self.load_root_items(&tree);
        self.check_missing_header();
        self.check_dangling_references();
        debug!(
            individuals = self.gedcom.individuals.len(),
            families = self.gedcom.families.len(),
            errors = self.diagnostics.errors().count(),
            warnings = self.diagnostics.warnings().count(),
            "GEDCOM load complete"
        );
        Ok(())
    }

    /// Rendered error messages, in discovery order.
    pub fn errors(&self) -> Vec<String> {
        self.diagnostics.error_messages()
    }

    /// Rendered warning messages, in discovery order.
    pub fn warnings(&self) -> Vec<String> {
        self.diagnostics.warning_messages()
    }

    /// Dispatch over the level-0 records.
    fn load_root_items(&mut self, t: &LineTree) {
        for &ch in t.children(LineTree::ROOT) {
            match t.tag(ch) {
                "HEAD" => self.load_header(t, ch),
                "SUBM" => self.load_submitter(t, ch),
                "SUBN" => self.load_submission(t, ch),
                "INDI" => self.load_individual(t, ch),
                "FAM" => self.load_family(t, ch),
                "SOUR" => self.load_source(t, ch),
                "REPO" => self.load_repository(t, ch),
                "NOTE" => self.load_root_note(t, ch),
                "OBJE" => self.load_multimedia_record(t, ch),
                "TRLR" => self.gedcom.trailer = Some(Trailer),
                // Top-level records need an xref, so even user-defined tags
                // have nowhere to hang; everything unexpected is an error.
                _ => self.unknown_tag_error(t, ch),
            }
        }
    }

    fn check_missing_header(&mut self) {
        if self.gedcom.header.is_none() {
            self.diagnostics
                .add_error(None, "transmission has no HEAD record");
        }
    }

    /// Every placeholder created by a forward reference must be filled by a
    /// matching declaration; report the ones that were not. The placeholders
    /// stay in the document so handles keep resolving.
    fn check_dangling_references(&mut self) {
        let mut dangling: Vec<String> = Vec::new();
        let declared = &self.declared;
        let mut sweep = |keys: Vec<&String>, kind: &str| {
            let mut missing: Vec<String> = keys
                .into_iter()
                .filter(|k| !declared.contains(*k))
                .map(|k| format!("{kind} {k} was referenced but never declared"))
                .collect();
            missing.sort();
            dangling.extend(missing);
        };
        sweep(self.gedcom.individuals.keys().collect(), "individual");
        sweep(self.gedcom.families.keys().collect(), "family");
        sweep(self.gedcom.sources.keys().collect(), "source");
        sweep(self.gedcom.repositories.keys().collect(), "repository");
        sweep(self.gedcom.notes.keys().collect(), "note");
        sweep(self.gedcom.multimedia.keys().collect(), "multimedia");
        sweep(self.gedcom.submitters.keys().collect(), "submitter");
        for message in dangling {
            self.diagnostics.add_error(None, message);
        }
    }

    /// True iff the transmission explicitly declares itself as GEDCOM 5.5.
    /// With no header or no explicit version, 5.5.1 is assumed.
    pub(crate) fn g55(&self) -> bool {
        self.gedcom
            .header
            .as_ref()
            .and_then(|h| h.gedcom_version.as_ref())
            .and_then(|v| v.version_number)
            == Some(crate::model::SupportedVersion::V5_5)
    }

    /// Warn about a 5.5.1-only construct if the file declares 5.5.
    pub(crate) fn warn_g55(&mut self, line: usize, what: impl AsRef<str>) {
        if self.g55() {
            self.diagnostics.add_warning(
                line,
                format!(
                    "GEDCOM version is 5.5 but {}, which is a GEDCOM 5.5.1 feature; \
                     data loaded but cannot be re-written unless the version changes",
                    what.as_ref()
                ),
            );
        }
    }

    /// Warn about a 5.5-only construct if the file is (or defaults to) 5.5.1.
    pub(crate) fn warn_g551(&mut self, line: usize, what: impl AsRef<str>) {
        if !self.g55() {
            self.diagnostics.add_warning(
                line,
                format!(
                    "GEDCOM version is 5.5.1 but {}, which is no longer supported; \
                     data loaded but cannot be written back until the version is changed to 5.5",
                    what.as_ref()
                ),
            );
        }
    }

    /// Record that an xref was declared as a top-level record.
    pub(crate) fn declare(&mut self, xref: &str) {
        self.declared.insert(xref.to_string());
    }

    /// The xref of a top-level record node, or a diagnostic if it is absent.
    pub(crate) fn record_xref(&mut self, t: &LineTree, node: NodeId) -> Option<String> {
        match &t.node(node).xref_id {
            Some(xref) => {
                self.declare(xref);
                Some(xref.clone())
            }
            None => {
                self.diagnostics.add_error(
                    t.line(node),
                    format!("{} record has no xref id; record skipped", t.tag(node)),
                );
                None
            }
        }
    }

    /// Deep-copy a subtree into an owned custom tag.
    fn copy_subtree(&self, t: &LineTree, node: NodeId) -> CustomTag {
        let n = t.node(node);
        CustomTag {
            tag: n.tag.clone(),
            xref_id: n.xref_id.clone(),
            value: n.value.clone(),
            line: n.line,
            children: t
                .children(node)
                .iter()
                .map(|&ch| self.copy_subtree(t, ch))
                .collect(),
        }
    }

    /// Default handler for an unexpected tag. Underscore-prefixed tags are
    /// user-defined and attach to the enclosing element's custom tags;
    /// anything else is an error.
    pub(crate) fn unknown_tag(&mut self, t: &LineTree, node: NodeId, custom: &mut Vec<CustomTag>) {
        if t.tag(node).starts_with('_') {
            custom.push(self.copy_subtree(t, node));
            return;
        }
        self.unknown_tag_error(t, node);
    }

    /// Record an unknown-tag error carrying the chain of enclosing tags.
    pub(crate) fn unknown_tag_error(&mut self, t: &LineTree, node: NodeId) {
        let mut message = format!("Cannot handle tag {}", t.tag(node));
        for ancestor in t.ancestors(node) {
            message.push_str(", child of ");
            message.push_str(&ancestor.tag);
            if let Some(id) = &ancestor.xref_id {
                message.push(' ');
                message.push_str(id);
            }
            message.push_str(&format!(" on line {}", ancestor.line));
        }
        self.diagnostics.add_error(t.line(node), message);
    }

    /// Read a scalar value, attaching user-defined child tags and reporting
    /// anything else beneath it.
    pub(crate) fn scalar(&mut self, t: &LineTree, node: NodeId) -> StringWithTags {
        let mut custom = Vec::new();
        for &ch in t.children(node) {
            self.unknown_tag(t, ch, &mut custom);
        }
        StringWithTags {
            value: t.value(node).map(str::to_string),
            custom_tags: custom,
        }
    }

    /// Load a multi-line text block: the node's own value is the first line,
    /// CONT starts a new line, CONC extends the last one without separator.
    pub(crate) fn load_multiline_text(
        &mut self,
        t: &LineTree,
        node: NodeId,
        lines: &mut Vec<String>,
        custom: &mut Vec<CustomTag>,
    ) {
        if let Some(value) = t.value(node) {
            lines.push(value.to_string());
        }
        for &ch in t.children(node) {
            match t.tag(ch) {
                "CONT" => lines.push(t.value(ch).unwrap_or_default().to_string()),
                "CONC" => {
                    // Nothing to concatenate is simply ignored.
                    if let Some(value) = t.value(ch) {
                        match lines.last_mut() {
                            Some(last) => last.push_str(value),
                            None => lines.push(value.to_string()),
                        }
                    }
                }
                _ => self.unknown_tag(t, ch, custom),
            }
        }
    }
}
