// Post-load document validation. The parser already reports what it sees
// while walking the file; this pass checks the assembled document as a
// whole: map keys agree with record xrefs, handles resolve, and the
// header/submission cross-link is consistent. It never bails; callers get
// every finding at once.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::diagnostics::{Diagnostic, Severity};
use crate::model::{Citation, Gedcom};

static XREF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[A-Za-z0-9_]+@$").expect("invalid xref regex"));

/// Validate a loaded document, returning all findings without bailing.
pub fn validate(gedcom: &Gedcom) -> Vec<Diagnostic> {
    let mut findings = Vec::new();
    check_map_keys(gedcom, &mut findings);
    check_individuals(gedcom, &mut findings);
    check_families(gedcom, &mut findings);
    check_sources(gedcom, &mut findings);
    check_header(gedcom, &mut findings);
    findings
}

fn error(findings: &mut Vec<Diagnostic>, message: String) {
    findings.push(Diagnostic {
        message,
        line: None,
        severity: Severity::Error,
    });
}

fn sorted_keys<T>(map: &std::collections::HashMap<String, T>) -> Vec<&String> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    keys
}

/// Every map key must be a well-formed xref and equal the stored record's
/// own xref field.
fn check_map_keys(gedcom: &Gedcom, findings: &mut Vec<Diagnostic>) {
    let mut check = |kind: &str, key: &String, record_xref: Option<&str>| {
        if !XREF_REGEX.is_match(key) {
            error(findings, format!("{kind} key {key:?} is not a well-formed xref"));
        }
        match record_xref {
            Some(xref) if xref == key.as_str() => {}
            other => error(
                findings,
                format!(
                    "{kind} stored under key {key} carries xref {:?}",
                    other.unwrap_or("<none>")
                ),
            ),
        }
    };
    for key in sorted_keys(&gedcom.individuals) {
        check("individual", key, Some(gedcom.individuals[key].xref.as_str()));
    }
    for key in sorted_keys(&gedcom.families) {
        check("family", key, Some(gedcom.families[key].xref.as_str()));
    }
    for key in sorted_keys(&gedcom.sources) {
        check("source", key, Some(gedcom.sources[key].xref.as_str()));
    }
    for key in sorted_keys(&gedcom.repositories) {
        check("repository", key, Some(gedcom.repositories[key].xref.as_str()));
    }
    for key in sorted_keys(&gedcom.submitters) {
        check("submitter", key, Some(gedcom.submitters[key].xref.as_str()));
    }
    for key in sorted_keys(&gedcom.notes) {
        check("note", key, gedcom.notes[key].xref.as_deref());
    }
    for key in sorted_keys(&gedcom.multimedia) {
        check("multimedia", key, gedcom.multimedia[key].xref.as_deref());
    }
}

fn check_citations(
    owner: &str,
    citations: &[Citation],
    gedcom: &Gedcom,
    findings: &mut Vec<Diagnostic>,
) {
    for citation in citations {
        if let Citation::WithSource(with_source) = citation {
            if !gedcom.sources.contains_key(&with_source.source) {
                error(
                    findings,
                    format!(
                        "citation on {owner} references source {} which is not in the document",
                        with_source.source
                    ),
                );
            }
        }
    }
}

fn check_individuals(gedcom: &Gedcom, findings: &mut Vec<Diagnostic>) {
    for key in sorted_keys(&gedcom.individuals) {
        let individual = &gedcom.individuals[key];
        for link in &individual.families_where_spouse {
            if !gedcom.families.contains_key(&link.family) {
                error(
                    findings,
                    format!("individual {key} is a spouse in unresolved family {}", link.family),
                );
            }
        }
        for link in &individual.families_where_child {
            if !gedcom.families.contains_key(&link.family) {
                error(
                    findings,
                    format!("individual {key} is a child in unresolved family {}", link.family),
                );
            }
        }
        for submitter in individual
            .ancestor_interest
            .iter()
            .chain(&individual.descendant_interest)
            .chain(&individual.submitters)
        {
            if !gedcom.submitters.contains_key(submitter) {
                error(
                    findings,
                    format!("individual {key} references unresolved submitter {submitter}"),
                );
            }
        }
        for association in &individual.associations {
            if let Some(xref) = &association.associated_entity_xref {
                if !XREF_REGEX.is_match(xref) {
                    error(
                        findings,
                        format!("association on individual {key} has malformed xref {xref:?}"),
                    );
                }
            }
        }
        check_citations(&format!("individual {key}"), &individual.citations, gedcom, findings);
    }
}

fn check_families(gedcom: &Gedcom, findings: &mut Vec<Diagnostic>) {
    for key in sorted_keys(&gedcom.families) {
        let family = &gedcom.families[key];
        for (role, xref) in [("husband", &family.husband), ("wife", &family.wife)] {
            if let Some(xref) = xref {
                if !gedcom.individuals.contains_key(xref) {
                    error(
                        findings,
                        format!("family {key} names {role} {xref} who is not in the document"),
                    );
                }
            }
        }
        for child in &family.children {
            if !gedcom.individuals.contains_key(child) {
                error(
                    findings,
                    format!("family {key} names child {child} who is not in the document"),
                );
            }
        }
        for submitter in &family.submitters {
            if !gedcom.submitters.contains_key(submitter) {
                error(
                    findings,
                    format!("family {key} references unresolved submitter {submitter}"),
                );
            }
        }
        check_citations(&format!("family {key}"), &family.citations, gedcom, findings);
    }
}

fn check_sources(gedcom: &Gedcom, findings: &mut Vec<Diagnostic>) {
    for key in sorted_keys(&gedcom.sources) {
        let source = &gedcom.sources[key];
        if let Some(citation) = &source.repository_citation {
            if let Some(repository) = &citation.repository_xref {
                if !gedcom.repositories.contains_key(repository) {
                    error(
                        findings,
                        format!("source {key} cites unresolved repository {repository}"),
                    );
                }
            }
        }
    }
}

fn check_header(gedcom: &Gedcom, findings: &mut Vec<Diagnostic>) {
    let Some(header) = &gedcom.header else {
        return;
    };
    if let Some(submitter) = &header.submitter {
        if !gedcom.submitters.contains_key(submitter) {
            error(
                findings,
                format!("header references unresolved submitter {submitter}"),
            );
        }
    }
    if let Some(submission) = &header.submission {
        match &gedcom.submission {
            Some(record) if &record.xref == submission => {}
            Some(record) => error(
                findings,
                format!(
                    "header submission {} does not match the submission record {}",
                    submission, record.xref
                ),
            ),
            None => error(
                findings,
                format!("header references submission {submission} but the document has none"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Family, Individual, XrefRecord};

    #[test]
    fn test_clean_document_validates() {
        let mut gedcom = Gedcom::default();
        gedcom
            .individuals
            .insert("@I1@".into(), Individual::with_xref("@I1@"));
        assert!(validate(&gedcom).is_empty());
    }

    #[test]
    fn test_key_xref_mismatch_reported() {
        let mut gedcom = Gedcom::default();
        gedcom
            .individuals
            .insert("@I1@".into(), Individual::with_xref("@I2@"));
        let findings = validate(&gedcom);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].message.contains("@I1@"));
        assert!(findings[0].message.contains("@I2@"));
    }

    #[test]
    fn test_unresolved_spouse_reported() {
        let mut gedcom = Gedcom::default();
        let mut family = Family::with_xref("@F1@");
        family.husband = Some("@I9@".into());
        gedcom.families.insert("@F1@".into(), family);
        let findings = validate(&gedcom);
        assert!(findings
            .iter()
            .any(|f| f.message.contains("husband @I9@")));
    }
}
