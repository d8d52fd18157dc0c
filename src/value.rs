//! Dynamic value representation for BCML data.
//!
//! This module provides the [`Value`] enum which represents any value a
//! [`Tuple`](crate::Tuple), [`Table`](crate::Table) cell, or
//! [`Line`](crate::Line) can hold, plus the [`Kind`] discriminant used to
//! query and group values by type.
//!
//! ## Core Types
//!
//! - [`Value`]: a closed union over booleans, four integer widths, two
//!   float widths, arbitrary-precision integers and decimals, characters,
//!   strings, arrays, nested tuples, and nested lines
//! - [`Kind`]: the discriminant tag of a [`Value`], compared by value
//!
//! Absence is never a stored value: optional slots are `Option<Value>`,
//! and container mutators drop `None` instead of storing it.
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use bcml::Value;
//!
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! assert_eq!(number, Value::Int(42));
//! ```
//!
//! ### Type Checking
//!
//! ```rust
//! use bcml::{Kind, Value};
//!
//! let value = Value::from(42);
//! assert_eq!(value.kind(), Kind::Int);
//! assert!(value.is_numeric());
//! assert!(!value.is_string());
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use bcml::Value;
//!
//! let value = Value::from(42i64);
//! let num = i64::try_from(&value).unwrap();
//! assert_eq!(num, 42);
//! ```

use crate::{Line, Tuple};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dynamically-typed value.
///
/// Two values of different kinds are never equal; in particular a string
/// never equals a number with the same digits. Kinds that the
/// scalar-inference tokenizer cannot produce (`Byte`, `Short`, `Long`,
/// `Float`, `BigInt`, `BigDecimal`) are still first-class citizens of the
/// container API and the type-segmented sort.
///
/// # Examples
///
/// ```rust
/// use bcml::Value;
///
/// let a = Value::from(2);
/// let b = Value::from("2");
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    BigInt(BigInt),
    BigDecimal(BigDecimal),
    Char(char),
    Str(String),
    Array(Vec<Value>),
    Tuple(Tuple),
    Line(Box<Line>),
}

/// The discriminant tag of a [`Value`], compared by value.
///
/// Replaces runtime type tokens everywhere the containers reason about
/// types: [`Tuple::contains_kind`](crate::Tuple::contains_kind),
/// [`Tuple::values_of_kind`](crate::Tuple::values_of_kind), sort
/// bucketing, and document key-kind enforcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    BigInt,
    BigDecimal,
    Char,
    Str,
    Array,
    Tuple,
    Line,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::Byte => "byte",
            Kind::Short => "short",
            Kind::Int => "int",
            Kind::Long => "long",
            Kind::Float => "float",
            Kind::Double => "double",
            Kind::BigInt => "bigint",
            Kind::BigDecimal => "bigdecimal",
            Kind::Char => "char",
            Kind::Str => "string",
            Kind::Array => "array",
            Kind::Tuple => "tuple",
            Kind::Line => "line",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Returns the discriminant tag of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{Kind, Value};
    ///
    /// assert_eq!(Value::from(3.5).kind(), Kind::Double);
    /// assert_eq!(Value::from('x').kind(), Kind::Char);
    /// ```
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Byte(_) => Kind::Byte,
            Value::Short(_) => Kind::Short,
            Value::Int(_) => Kind::Int,
            Value::Long(_) => Kind::Long,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::BigInt(_) => Kind::BigInt,
            Value::BigDecimal(_) => Kind::BigDecimal,
            Value::Char(_) => Kind::Char,
            Value::Str(_) => Kind::Str,
            Value::Array(_) => Kind::Array,
            Value::Tuple(_) => Kind::Tuple,
            Value::Line(_) => Kind::Line,
        }
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is any integer or float kind,
    /// including the arbitrary-precision kinds.
    #[inline]
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Value::Byte(_)
                | Value::Short(_)
                | Value::Int(_)
                | Value::Long(_)
                | Value::Float(_)
                | Value::Double(_)
                | Value::BigInt(_)
                | Value::BigDecimal(_)
        )
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a nested tuple.
    #[inline]
    #[must_use]
    pub const fn is_tuple(&self) -> bool {
        matches!(self, Value::Tuple(_))
    }

    /// Returns `true` if the value is a nested line.
    #[inline]
    #[must_use]
    pub const fn is_line(&self) -> bool {
        matches!(self, Value::Line(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::Value;
    ///
    /// assert_eq!(Value::Bool(true).as_bool(), Some(true));
    /// assert_eq!(Value::from(42).as_bool(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a character, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// If the value is any fixed-width integer kind, returns it widened
    /// to `i64`. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::Value;
    ///
    /// assert_eq!(Value::Byte(7).as_i64(), Some(7));
    /// assert_eq!(Value::from(42).as_i64(), Some(42));
    /// assert_eq!(Value::from(3.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Byte(n) => Some(i64::from(*n)),
            Value::Short(n) => Some(i64::from(*n)),
            Value::Int(n) => Some(i64::from(*n)),
            Value::Long(n) => Some(*n),
            _ => None,
        }
    }

    /// If the value is any fixed-width numeric kind, returns it as `f64`.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(f64::from(*n)),
            Value::Double(n) => Some(*n),
            _ => self.as_i64().map(|n| n as f64),
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a nested tuple, returns a reference to it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Value::Tuple(t) => Some(t),
            _ => None,
        }
    }

    /// If the value is a nested line, returns a reference to it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Value::Line(l) => Some(l),
            _ => None,
        }
    }

    /// If the value is an arbitrary-precision integer, returns a
    /// reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigint(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(n) => Some(n),
            _ => None,
        }
    }

    /// If the value is an arbitrary-precision decimal, returns a
    /// reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bigdecimal(&self) -> Option<&BigDecimal> {
        match self {
            Value::BigDecimal(n) => Some(n),
            _ => None,
        }
    }
}

/// Renders a float the way the canonical text form requires: a whole
/// number keeps one decimal digit (`30.0`), so a re-parse infers a float
/// again instead of an integer.
macro_rules! fmt_float {
    ($f:expr, $value:expr) => {{
        let value = $value;
        if value.is_nan() {
            $f.write_str("NaN")
        } else if value.is_infinite() {
            $f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value.fract() == 0.0 {
            write!($f, "{:.1}", value)
        } else {
            write!($f, "{}", value)
        }
    }};
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Byte(n) => write!(f, "{}", n),
            Value::Short(n) => write!(f, "{}", n),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Float(n) => fmt_float!(f, *n),
            Value::Double(n) => fmt_float!(f, *n),
            Value::BigInt(n) => write!(f, "{}", n),
            Value::BigDecimal(n) => write!(f, "{}", n),
            Value::Char(c) => write!(f, "{}", c),
            Value::Str(s) => write!(f, "{}", s),
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            Value::Tuple(t) => write!(f, "{}", t),
            Value::Line(l) => write!(f, "{}", l),
        }
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Bool(b) => b.hash(state),
            Value::Byte(n) => n.hash(state),
            Value::Short(n) => n.hash(state),
            Value::Int(n) => n.hash(state),
            Value::Long(n) => n.hash(state),
            Value::Float(n) => n.to_bits().hash(state),
            Value::Double(n) => n.to_bits().hash(state),
            Value::BigInt(n) => n.hash(state),
            Value::BigDecimal(n) => n.to_string().hash(state),
            Value::Char(c) => c.hash(state),
            Value::Str(s) => s.hash(state),
            Value::Array(arr) => arr.hash(state),
            Value::Tuple(t) => t.hash(state),
            Value::Line(l) => l.hash(state),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Byte(n) => serializer.serialize_i8(*n),
            Value::Short(n) => serializer.serialize_i16(*n),
            Value::Int(n) => serializer.serialize_i32(*n),
            Value::Long(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f32(*n),
            Value::Double(n) => serializer.serialize_f64(*n),
            Value::BigInt(n) => serializer.serialize_str(&n.to_string()),
            Value::BigDecimal(n) => serializer.serialize_str(&n.to_string()),
            Value::Char(c) => serializer.serialize_char(*c),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Tuple(t) => t.serialize(serializer),
            Value::Line(l) => l.serialize(serializer),
        }
    }
}

// TryFrom implementations for extracting primitives out of a Value
impl TryFrom<&Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: &Value) -> crate::Result<Self> {
        value.as_i64().ok_or_else(|| {
            crate::Error::message(format!("expected integer, found {}", value.kind()))
        })
    }
}

impl TryFrom<&Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: &Value) -> crate::Result<Self> {
        value.as_f64().ok_or_else(|| {
            crate::Error::message(format!("expected number, found {}", value.kind()))
        })
    }
}

impl TryFrom<&Value> for bool {
    type Error = crate::Error;

    fn try_from(value: &Value) -> crate::Result<Self> {
        value.as_bool().ok_or_else(|| {
            crate::Error::message(format!("expected bool, found {}", value.kind()))
        })
    }
}

impl TryFrom<&Value> for char {
    type Error = crate::Error;

    fn try_from(value: &Value) -> crate::Result<Self> {
        value.as_char().ok_or_else(|| {
            crate::Error::message(format!("expected char, found {}", value.kind()))
        })
    }
}

impl TryFrom<&Value> for String {
    type Error = crate::Error;

    fn try_from(value: &Value) -> crate::Result<Self> {
        value.as_str().map(str::to_string).ok_or_else(|| {
            crate::Error::message(format!("expected string, found {}", value.kind()))
        })
    }
}

// From implementations for creating a Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Byte(value)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Short(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Long(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Double(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<BigDecimal> for Value {
    fn from(value: BigDecimal) -> Self {
        Value::BigDecimal(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Tuple> for Value {
    fn from(value: Tuple) -> Self {
        Value::Tuple(value)
    }
}

impl From<Line> for Value {
    fn from(value: Line) -> Self {
        Value::Line(Box::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(Value::from(true).kind(), Kind::Bool);
        assert_eq!(Value::from(1i8).kind(), Kind::Byte);
        assert_eq!(Value::from(1i16).kind(), Kind::Short);
        assert_eq!(Value::from(1i32).kind(), Kind::Int);
        assert_eq!(Value::from(1i64).kind(), Kind::Long);
        assert_eq!(Value::from(1.0f32).kind(), Kind::Float);
        assert_eq!(Value::from(1.0f64).kind(), Kind::Double);
        assert_eq!(Value::from('a').kind(), Kind::Char);
        assert_eq!(Value::from("abc").kind(), Kind::Str);
    }

    #[test]
    fn test_cross_kind_inequality() {
        assert_ne!(Value::from(2), Value::from("2"));
        assert_ne!(Value::from(2), Value::from(2i64));
        assert_ne!(Value::from(2.0f32), Value::from(2.0f64));
        assert_ne!(Value::from('2'), Value::from("2"));
    }

    #[test]
    fn test_display_floats() {
        assert_eq!(Value::from(30.0).to_string(), "30.0");
        assert_eq!(Value::from(3.14).to_string(), "3.14");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_display_array() {
        let arr = Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)]);
        assert_eq!(arr.to_string(), "[1, 2, 3]");
        assert_eq!(Value::Array(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_as_i64_widening() {
        assert_eq!(Value::Byte(-3).as_i64(), Some(-3));
        assert_eq!(Value::Short(300).as_i64(), Some(300));
        assert_eq!(Value::Long(1 << 40).as_i64(), Some(1 << 40));
        assert_eq!(Value::Double(1.0).as_i64(), None);
    }

    #[test]
    fn test_tryfrom() {
        assert_eq!(i64::try_from(&Value::from(42)).unwrap(), 42);
        assert_eq!(f64::try_from(&Value::from(2)).unwrap(), 2.0);
        assert!(bool::try_from(&Value::from(1)).is_err());
        assert_eq!(String::try_from(&Value::from("hi")).unwrap(), "hi");
    }
}
