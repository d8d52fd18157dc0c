//! Key/value lines, the unit of the BCML format.
//!
//! A [`Line`] pairs a key with a value; the value may be a scalar, an
//! array, or another line, nested to arbitrary depth. Lines are
//! immutable once built, and a key is always present — only the value
//! side may be empty (`key:` in text).
//!
//! ## Examples
//!
//! ```rust
//! use bcml::{parse_line, Value};
//!
//! let line = parse_line("age: 30").unwrap();
//! assert_eq!(line.key(), &Value::from("age"));
//! assert_eq!(line.value(), Some(&Value::Int(30)));
//! assert_eq!(line.to_string(), "\"age\": 30");
//! ```

use crate::value::{Kind, Value};
use crate::{scan, Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// An immutable key/value pair.
///
/// Keys are values too: `age: 30` has a string key, `x: 1` has a char
/// key, `7: hi` an integer key. The key's [`Kind`] is what a
/// [`Document`](crate::Document) enforces across its lines.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    key: Value,
    value: Option<Value>,
}

impl Line {
    /// Creates a line from a key and a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{Line, Value};
    ///
    /// let line = Line::new("age", 30);
    /// assert_eq!(line.key(), &Value::from("age"));
    /// ```
    pub fn new(key: impl Into<Value>, value: impl Into<Value>) -> Self {
        Line {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a line with no value (`key:` in text).
    pub fn bare(key: impl Into<Value>) -> Self {
        Line {
            key: key.into(),
            value: None,
        }
    }

    /// Returns the key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &Value {
        &self.key
    }

    /// Returns the value, if any.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Returns the kind of the key.
    #[inline]
    #[must_use]
    pub fn key_kind(&self) -> Kind {
        self.key.kind()
    }

    /// Descends `depth` levels of nested-line values, stopping early at
    /// the deepest line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{parse_line, Value};
    ///
    /// let line = parse_line("a: { b: 1 }").unwrap();
    /// assert_eq!(line.sub_line(1).value(), Some(&Value::Int(1)));
    /// assert_eq!(line.sub_line(9).value(), Some(&Value::Int(1)));
    /// ```
    #[must_use]
    pub fn sub_line(&self, depth: usize) -> &Line {
        if depth == 0 {
            return self;
        }
        match &self.value {
            Some(Value::Line(nested)) => nested.sub_line(depth - 1),
            _ => self,
        }
    }

    /// Parses one logical line of text.
    ///
    /// All whitespace, braces, and quotes are stripped globally first,
    /// then the text splits at the first `:`. A remainder that still
    /// holds a `:` reparses recursively into a nested line; a
    /// `[...]`-delimited remainder becomes an array; anything else goes
    /// through scalar inference, with an empty remainder yielding a line
    /// without a value.
    ///
    /// # Errors
    ///
    /// [`Error::MissingSeparator`] when no `:` is present and
    /// [`Error::InvalidKey`] when the key segment tokenizes to nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{Line, Value};
    ///
    /// let line = Line::parse("tags: [1, 2, 3]").unwrap();
    /// let expected = Value::Array(vec![1.into(), 2.into(), 3.into()]);
    /// assert_eq!(line.value(), Some(&expected));
    /// ```
    pub fn parse(text: &str) -> Result<Line> {
        let stripped = scan::strip_noise(text);
        let Some((key_part, rest)) = stripped.split_once(':') else {
            return Err(Error::MissingSeparator(text.trim().to_string()));
        };
        let key =
            scan::infer_scalar(key_part).ok_or_else(|| Error::InvalidKey(text.trim().to_string()))?;
        if rest.contains(':') {
            let nested = Line::parse(rest)?;
            return Ok(Line {
                key,
                value: Some(Value::from(nested)),
            });
        }
        if rest.starts_with('[') && rest.ends_with(']') {
            return Ok(Line {
                key,
                value: Some(Value::Array(scan::split_array(rest))),
            });
        }
        Ok(Line {
            key,
            value: scan::infer_scalar(rest),
        })
    }
}

impl fmt::Display for Line {
    /// Canonical text: string keys and string values are quoted, arrays
    /// render bracketed, a nested line opens a brace block with one tab
    /// of indent per level, and a missing value leaves nothing after the
    /// colon.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Value::Str(s) => write!(f, "\"{}\"", s)?,
            key => write!(f, "{}", key)?,
        }
        match &self.value {
            None => f.write_str(":"),
            Some(Value::Str(s)) => write!(f, ": \"{}\"", s),
            Some(Value::Line(nested)) => {
                let inner = nested.to_string().replace('\n', "\n\t");
                write!(f, ": {{\n\t{}\n}}", inner)
            }
            Some(value) => write!(f, ": {}", value),
        }
    }
}

impl Hash for Line {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.value.hash(state);
    }
}

impl Serialize for Line {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(1))?;
        match &self.value {
            Some(value) => map.serialize_entry(&self.key.to_string(), value)?,
            None => map.serialize_entry(&self.key.to_string(), &())?,
        }
        map.end()
    }
}
