// Structural (fatal) parse failures. Anything that makes the line stream
// unusable as a GEDCOM transmission aborts the load; everything softer goes
// through the diagnostics collection instead.

use std::fmt;

/// A structural failure that terminates the load. No partial document is
/// returned when one of these is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no lines at all.
    EmptyFile,
    /// A line did not start with a level number.
    MissingLevel { line: usize, text: String },
    /// A line could not be split into level / xref / tag / value.
    MalformedLine { line: usize, text: String },
    /// The first record line was not at level 0.
    FirstLineNotLevelZero { line: usize, level: i64 },
    /// A line's level was more than one deeper than its parent's.
    LevelSkipped { line: usize, level: i64, max: i64 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFile => f.write_str("GEDCOM input is empty"),
            Self::MissingLevel { line, text } => {
                write!(f, "line {line} does not begin with a level number: {text:?}")
            }
            Self::MalformedLine { line, text } => {
                write!(f, "line {line} is not a valid GEDCOM line: {text:?}")
            }
            Self::FirstLineNotLevelZero { line, level } => write!(
                f,
                "line {line}: first record is at level {level}, expected level 0"
            ),
            Self::LevelSkipped { line, level, max } => write!(
                f,
                "line {line}: level {level} skips a generation (deepest open level is {max})"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_line_number() {
        let e = ParseError::LevelSkipped {
            line: 12,
            level: 3,
            max: 1,
        };
        let msg = e.to_string();
        assert!(msg.contains("line 12"));
        assert!(msg.contains("level 3"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_err(_e: &dyn std::error::Error) {}
        takes_err(&ParseError::EmptyFile);
    }
}
