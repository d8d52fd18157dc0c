//! # bcml
//!
//! Weakly-typed value containers with set algebra, plus the line-oriented
//! BCML key-value text format.
//!
//! ## What is in here?
//!
//! Two halves that share one type taxonomy:
//!
//! - **Containers**: [`Tuple`], an ordered heterogeneous sequence of
//!   [`Value`]s with set algebra and a type-segmented sort, and
//!   [`Table`], a row aggregate of tuples
//! - **Codec**: [`Line`], a key/value pair with a recursive parser and
//!   canonical text rendering, and [`Document`], an ordered sequence of
//!   lines with whole-resource (de)serialization
//!
//! The scalar inference the parser applies to text and the [`Kind`] tags
//! the containers reason about are the same taxonomy seen from two
//! directions.
//!
//! ## Quick Start
//!
//! ### Containers
//!
//! ```rust
//! use bcml::{tuple, Value};
//!
//! let mut t = tuple![3, 1, "b", false, 2];
//! t.sort();
//! assert_eq!(t, tuple![false, 1, 2, 3, "b"]);
//!
//! let sub = tuple![1, 2];
//! assert!(sub.is_subset_of(&Value::from(t)).unwrap());
//! ```
//!
//! ### Parsing BCML text
//!
//! ```rust
//! use bcml::{from_str, Value};
//!
//! let doc = from_str("# inventory\nwidgets: 40\nprices: [9.5, 1.25]").unwrap();
//! assert_eq!(doc.line_count(), 2);
//! assert_eq!(doc.get_line(0).unwrap().value(), Some(&Value::Int(40)));
//! ```
//!
//! ### Round-tripping a document
//!
//! ```rust
//! use bcml::{from_str, Document, Line};
//!
//! let mut doc = Document::new();
//! doc.append(Line::new("age", 30)).unwrap();
//! doc.append(Line::new("name", "bob")).unwrap();
//!
//! let text = doc.to_string();
//! let back = from_str(&text).unwrap();
//! assert_eq!(back, doc);
//! ```
//!
//! ## Error handling
//!
//! Positional mistakes, non-tuple operands, malformed lines, and key-kind
//! conflicts all surface synchronously as [`Error`]. The file boundary
//! offers both styles: strict [`Document::serialize_file`] /
//! [`Document::deserialize_file`] returning [`Result`], and
//! fire-and-forget [`Document::save_logged`] / [`Document::load_logged`]
//! that log failures and keep going.
//!
//! ## Format
//!
//! See the [`format`] module for the BCML grammar, the scalar inference
//! table, and the format's documented limitations.

pub mod document;
pub mod error;
pub mod format;
pub mod header;
pub mod line;
pub mod macros;
pub(crate) mod scan;
pub mod table;
pub mod tuple;
pub mod value;

pub use document::Document;
pub use error::{Error, Result};
pub use header::Header;
pub use line::Line;
pub use table::Table;
pub use tuple::Tuple;
pub use value::{Kind, Value};

use std::io;

/// Parses one logical line of BCML text.
///
/// # Examples
///
/// ```rust
/// use bcml::{parse_line, Value};
///
/// let line = parse_line("age: 30").unwrap();
/// assert_eq!(line.value(), Some(&Value::Int(30)));
/// ```
///
/// # Errors
///
/// Returns an error if the line has no `:` separator or its key segment
/// tokenizes to nothing.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_line(text: &str) -> Result<Line> {
    Line::parse(text)
}

/// Parses a whole BCML document from a string.
///
/// Comments and blank lines are dropped and brace blocks are collapsed
/// before line-by-line parsing. A blank input yields an empty document.
///
/// # Examples
///
/// ```rust
/// use bcml::from_str;
///
/// let doc = from_str("a: 1\nb: 2").unwrap();
/// assert_eq!(doc.line_count(), 2);
/// ```
///
/// # Errors
///
/// Returns an error on the first malformed line or key-kind conflict.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(text: &str) -> Result<Document> {
    let mut document = Document::new();
    if !text.trim().is_empty() {
        document.ingest(text)?;
    }
    Ok(document)
}

/// Parses a whole BCML document from an I/O stream.
///
/// # Examples
///
/// ```rust
/// use bcml::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"a: 1\n")).unwrap();
/// assert_eq!(doc.line_count(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the text does not parse.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(reader: R) -> Result<Document> {
    let mut document = Document::new();
    document.deserialize(reader)?;
    Ok(document)
}

/// Writes a document's canonical text to a writer.
///
/// # Errors
///
/// Returns an error if writing or flushing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(writer: W, document: &Document) -> Result<()> {
    document.serialize(writer)
}
