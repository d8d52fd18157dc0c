//! Ordered line sequences with whole-resource (de)serialization.
//!
//! A [`Document`] holds [`Line`]s in order and is monomorphic in key
//! kind: the first appended line fixes the kind every later key must
//! have. Serialization writes each line's canonical text; deserialization
//! trims, drops comments and blanks, collapses brace blocks onto logical
//! lines, and parses line by line.
//!
//! Two boundaries are offered for I/O failures:
//!
//! - the strict `serialize`/`deserialize` calls surface a [`Result`]
//! - the `save_logged`/`load_logged` adapters log at warn level and
//!   return nothing, for batch callers that want fire-and-forget
//!
//! ## Examples
//!
//! ```rust
//! use bcml::{Document, Value};
//!
//! let mut doc = Document::new();
//! doc.deserialize(&b"# people\nage: 30\nname: \"bob\"\n"[..]).unwrap();
//! assert_eq!(doc.line_count(), 2);
//! assert_eq!(doc.get_line(0).unwrap().value(), Some(&Value::Int(30)));
//! ```

use crate::value::{Kind, Value};
use crate::{scan, Error, Line, Result};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{info, warn};

/// An ordered sequence of lines sharing one key kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Creates an empty document. The key kind is fixed by the first
    /// appended line.
    #[must_use]
    pub fn new() -> Self {
        Document { lines: Vec::new() }
    }

    /// Returns the number of lines.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the document holds no lines.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the established key kind, or `None` while the document is
    /// empty.
    #[must_use]
    pub fn key_kind(&self) -> Option<Kind> {
        self.lines.first().map(Line::key_kind)
    }

    /// Returns the line at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= line_count`.
    pub fn get_line(&self, index: usize) -> Result<&Line> {
        self.lines
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.lines.len()))
    }

    /// Appends a line at the end of the document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyKind`] if the line's key kind differs from
    /// the kind established by the first line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{Document, Line};
    ///
    /// let mut doc = Document::new();
    /// doc.append(Line::new("age", 30)).unwrap();
    /// assert!(doc.append(Line::new(7, 30)).is_err());
    /// ```
    pub fn append(&mut self, line: Line) -> Result<()> {
        if let Some(expected) = self.key_kind() {
            let found = line.key_kind();
            if found != expected {
                return Err(Error::key_kind(expected, found));
            }
        }
        self.lines.push(line);
        Ok(())
    }

    /// Removes every line. The next appended line establishes a fresh
    /// key kind.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Writes each line's canonical text, one per line, then flushes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing or flushing fails.
    pub fn serialize<W: Write>(&self, mut writer: W) -> Result<()> {
        for line in &self.lines {
            writeln!(writer, "{}", line).map_err(|e| Error::io(&e))?;
        }
        writer.flush().map_err(|e| Error::io(&e))?;
        info!(lines = self.line_count(), "document serialized");
        Ok(())
    }

    /// Reads the whole source and replaces this document's contents.
    ///
    /// Physical lines are trimmed; blank lines and lines starting with
    /// `#` are dropped; brace blocks collapse onto logical lines; the
    /// existing contents are cleared and each logical line is parsed and
    /// appended. An empty source is only warned about and leaves the
    /// document unchanged. A parse or key-kind failure aborts mid-way,
    /// leaving the lines appended so far in place for inspection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] on read failure, or any [`Line::parse`] /
    /// [`Document::append`] error.
    pub fn deserialize<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut text = String::new();
        reader.read_to_string(&mut text).map_err(|e| Error::io(&e))?;
        if text.trim().is_empty() {
            warn!("source is empty, leaving document unchanged");
            return Ok(());
        }
        self.ingest(&text)?;
        info!(lines = self.line_count(), "document deserialized");
        Ok(())
    }

    /// Comment/blank filtering, flattening, and line-by-line parsing,
    /// shared by [`deserialize`](Document::deserialize) and
    /// [`crate::from_str`].
    pub(crate) fn ingest(&mut self, text: &str) -> Result<()> {
        let survivors: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        let flattened = scan::flatten_blocks(&survivors.join("\n"));
        self.lines.clear();
        for logical in flattened.lines().filter(|line| !line.trim().is_empty()) {
            let line = Line::parse(logical)?;
            self.append(line)?;
        }
        Ok(())
    }

    /// Serializes to a file created (or truncated) at `path`. The file
    /// handle is released on every exit path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be created or written.
    pub fn serialize_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref()).map_err(|e| Error::io(&e))?;
        self.serialize(BufWriter::new(file))
    }

    /// Deserializes from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read, or
    /// any parse error.
    pub fn deserialize_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::open(path.as_ref()).map_err(|e| Error::io(&e))?;
        self.deserialize(BufReader::new(file))
    }

    /// Fire-and-forget serialize: failures are logged at warn level and
    /// swallowed. Callers that need to distinguish success from failure
    /// use [`serialize_file`](Document::serialize_file) instead.
    pub fn save_logged(&self, path: impl AsRef<Path>) {
        if let Err(error) = self.serialize_file(path.as_ref()) {
            warn!(%error, path = %path.as_ref().display(), "serialize failed");
        }
    }

    /// Fire-and-forget deserialize: failures are logged at warn level
    /// and swallowed, leaving whatever state the parse reached. Callers
    /// that need the error use
    /// [`deserialize_file`](Document::deserialize_file) instead.
    pub fn load_logged(&mut self, path: impl AsRef<Path>) {
        if let Err(error) = self.deserialize_file(path.as_ref()) {
            warn!(%error, path = %path.as_ref().display(), "deserialize failed");
        }
    }

    /// Projects the document onto an ordered map of rendered key text to
    /// value. Lines without a value are skipped; a repeated key keeps
    /// the last occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{from_str, Value};
    ///
    /// let doc = from_str("age: 30\nname: \"bob\"").unwrap();
    /// let map = doc.to_map();
    /// assert_eq!(map.get("age"), Some(&Value::Int(30)));
    /// ```
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, Value> {
        let mut map = IndexMap::new();
        for line in &self.lines {
            if let Some(value) = line.value() {
                map.insert(line.key().to_string(), value.clone());
            }
        }
        map
    }

    /// Returns an iterator over the lines in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.lines.len()))?;
        for line in &self.lines {
            seq.serialize_element(line)?;
        }
        seq.end()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
