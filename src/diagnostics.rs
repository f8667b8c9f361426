// Non-fatal parse diagnostics. The parser is forgiving: semantic problems and
// version-conformance deviations are recorded here in discovery order while
// the load keeps going.

use std::fmt;

use serde::Serialize;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Data that could not be losslessly represented (unknown tags, dangling
    /// references, inconsistent structures).
    Error,
    /// Data that was loaded but does not conform to the declared GEDCOM
    /// version.
    Warning,
}

/// A single problem found while parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub message: String,
    /// 1-based source line, when one can be attributed.
    pub line: Option<usize>,
    pub severity: Severity,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "Line {line}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// All diagnostics for one load, in the order they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiagnosticCollection {
    items: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, line: impl Into<Option<usize>>, message: impl Into<String>) {
        self.items.push(Diagnostic {
            message: message.into(),
            line: line.into(),
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, line: impl Into<Option<usize>>, message: impl Into<String>) {
        self.items.push(Diagnostic {
            message: message.into(),
            line: line.into(),
            severity: Severity::Warning,
        });
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Rendered error messages, in discovery order.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors().map(ToString::to_string).collect()
    }

    /// Rendered warning messages, in discovery order.
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings().map(ToString::to_string).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serialization() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
    }

    #[test]
    fn test_display_with_line() {
        let d = Diagnostic {
            message: "Cannot handle tag XYZZY".to_string(),
            line: Some(42),
            severity: Severity::Error,
        };
        assert_eq!(d.to_string(), "Line 42: Cannot handle tag XYZZY");
    }

    #[test]
    fn test_display_without_line() {
        let d = Diagnostic {
            message: "no header".to_string(),
            line: None,
            severity: Severity::Error,
        };
        assert_eq!(d.to_string(), "no header");
    }

    #[test]
    fn test_collection_preserves_discovery_order() {
        let mut c = DiagnosticCollection::new();
        c.add_warning(1, "first");
        c.add_error(2, "second");
        c.add_warning(3, "third");
        assert_eq!(c.len(), 3);
        assert_eq!(c.error_messages(), vec!["Line 2: second"]);
        assert_eq!(c.warning_messages(), vec!["Line 1: first", "Line 3: third"]);
    }

    #[test]
    fn test_has_errors() {
        let mut c = DiagnosticCollection::new();
        assert!(!c.has_errors());
        c.add_warning(None, "only a warning");
        assert!(!c.has_errors());
        c.add_error(None, "now an error");
        assert!(c.has_errors());
    }
}
