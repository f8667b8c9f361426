//! Forgiving parser and in-memory model for GEDCOM 5.5 / 5.5.1 genealogy
//! files.
//!
//! A GEDCOM file is a line-oriented, hierarchical record format: every line
//! carries a level number, an optional cross-reference id, a tag, and an
//! optional value. This crate decodes the byte stream (ANSEL, ASCII, UTF-8,
//! or UTF-16), assembles the lines into a tree, and walks that tree into a
//! typed [`model::Gedcom`] document of individuals, families, sources,
//! repositories, notes, multimedia, and submitters, all cross-referenced by
//! id.
//!
//! ```no_run
//! let parser = gedkit::parse_file("family.ged")?;
//! for (xref, individual) in &parser.gedcom.individuals {
//!     println!("{xref}: {}", individual.last_name_first_name_key());
//! }
//! for warning in parser.warnings() {
//!     eprintln!("{warning}");
//! }
//! # anyhow::Ok(())
//! ```
//!
//! The parser is deliberately forgiving: only structural problems (a line
//! without a level, a skipped level) abort the load. Unknown tags, dangling
//! cross-references, and 5.5-vs-5.5.1 conformance deviations are collected
//! in [`GedcomParser::errors`] and [`GedcomParser::warnings`] while as much
//! data as possible is loaded.

pub mod ansel;
pub mod diagnostics;
pub mod encoding;
pub mod error;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod tree;
pub mod validator;

pub use error::ParseError;
pub use parser::{parse_file, parse_str, GedcomParser};
pub use validator::validate;
