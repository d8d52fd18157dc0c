//! Ordered, heterogeneous, none-free value sequences.
//!
//! A [`Tuple`] is a resizable sequence of [`Value`]s addressed by index.
//! Duplicates are allowed and order is meaningful for the structural
//! operations (join, split, slice, sort, reverse) but not for the
//! set-membership operations (subset, superset, disjoint).
//!
//! Absent values are dropped, never stored: the `*_opt` mutators accept
//! `Option<Value>` and silently do nothing on `None`, so a tuple at rest
//! never holds a hole.
//!
//! ## Examples
//!
//! ```rust
//! use bcml::{tuple, Value};
//!
//! let mut t = tuple![1, 2, "three"];
//! t.push(4.0);
//! assert_eq!(t.len(), 4);
//! assert!(t.contains(&Value::from("three")));
//! assert_eq!(t.to_string(), "[1, 2, three, 4.0]");
//! ```

use crate::value::{Kind, Value};
use crate::{Error, Result};
use rand::Rng;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// The fixed bucket precedence of the type-segmented sort. Values whose
/// kind is not listed (nested lines) sink to a final residue bucket.
const SORT_ORDER: [Kind; 13] = [
    Kind::Bool,
    Kind::Byte,
    Kind::Short,
    Kind::Int,
    Kind::Long,
    Kind::Float,
    Kind::Double,
    Kind::BigInt,
    Kind::BigDecimal,
    Kind::Char,
    Kind::Str,
    Kind::Tuple,
    Kind::Array,
];

/// An ordered, weakly-typed sequence of values.
///
/// # Examples
///
/// ```rust
/// use bcml::Tuple;
///
/// let mut t = Tuple::new();
/// t.push(1);
/// t.push("two");
/// t.push(3.5);
/// assert_eq!(t.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tuple {
    values: Vec<Value>,
}

impl Tuple {
    /// Creates an empty tuple.
    #[must_use]
    pub fn new() -> Self {
        Tuple { values: Vec::new() }
    }

    /// Returns the number of values in the tuple.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the tuple holds no values.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replaces the whole contents of the tuple.
    pub fn set_values(&mut self, values: Vec<Value>) {
        self.values = values;
    }

    /// Removes every value, leaving the tuple empty.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.values
            .get(index)
            .ok_or_else(|| Error::out_of_range(index, self.values.len()))
    }

    /// Appends a value at the end of the tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::Tuple;
    ///
    /// let mut t = Tuple::new();
    /// t.push(1);
    /// t.push("x");
    /// assert_eq!(t.len(), 2);
    /// ```
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Appends an optional value; `None` is silently dropped.
    pub fn push_opt(&mut self, value: Option<Value>) {
        if let Some(value) = value {
            self.values.push(value);
        }
    }

    /// Inserts a value at `index`, shifting the tail right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index > len` (inserting at
    /// `len` appends).
    pub fn insert(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        if index > self.values.len() {
            return Err(Error::out_of_range(index, self.values.len()));
        }
        self.values.insert(index, value.into());
        Ok(())
    }

    /// Inserts an optional value. A `None` is dropped before the bounds
    /// check, so it never errors.
    pub fn insert_opt(&mut self, index: usize, value: Option<Value>) -> Result<()> {
        match value {
            Some(value) => self.insert(index, value),
            None => Ok(()),
        }
    }

    /// Overwrites the value at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len`.
    pub fn replace(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        if index >= self.values.len() {
            return Err(Error::out_of_range(index, self.values.len()));
        }
        self.values[index] = value.into();
        Ok(())
    }

    /// Overwrites with an optional value. A `None` is dropped before the
    /// bounds check, so it never errors.
    pub fn replace_opt(&mut self, index: usize, value: Option<Value>) -> Result<()> {
        match value {
            Some(value) => self.replace(index, value),
            None => Ok(()),
        }
    }

    /// Removes the value at `index`, shifting the tail left. Removing
    /// from an empty tuple is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the tuple is non-empty and
    /// `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<()> {
        if self.values.is_empty() {
            return Ok(());
        }
        if index >= self.values.len() {
            return Err(Error::out_of_range(index, self.values.len()));
        }
        self.values.remove(index);
        Ok(())
    }

    /// Removes the last value. A no-op on an empty tuple.
    pub fn pop(&mut self) {
        self.values.pop();
    }

    /// Swaps the values at the two indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either index is `>= len`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.values.len();
        if a >= len {
            return Err(Error::out_of_range(a, len));
        }
        if b >= len {
            return Err(Error::out_of_range(b, len));
        }
        self.values.swap(a, b);
        Ok(())
    }

    /// Returns the index of the first value equal to `value`, or `None`.
    ///
    /// Matching is plain value equality: kinds never coerce, so a string
    /// probe only matches string elements with the same content and a
    /// nested-tuple probe matches by deep equality.
    #[must_use]
    pub fn index_of(&self, value: &Value) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Returns `true` if the tuple contains a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{tuple, Value};
    ///
    /// let t = tuple![0, 1, "2"];
    /// assert!(t.contains(&Value::from("2")));
    /// assert!(!t.contains(&Value::from(2)));
    /// ```
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns `true` if any value has exactly the given kind.
    #[must_use]
    pub fn contains_kind(&self, kind: Kind) -> bool {
        self.values.iter().any(|v| v.kind() == kind)
    }

    /// Returns a new tuple holding clones of the values with exactly the
    /// given kind, in order.
    #[must_use]
    pub fn values_of_kind(&self, kind: Kind) -> Tuple {
        self.values
            .iter()
            .filter(|v| v.kind() == kind)
            .cloned()
            .collect()
    }

    /// Sorts the tuple by type segment, then within each segment.
    ///
    /// Values are grouped into buckets in a fixed precedence order:
    /// bool, byte, short, int, long, float, double, bigint, bigdecimal,
    /// char, string, tuple, array, and finally everything else. Numeric,
    /// char, and string buckets are ordered ascending; the bool bucket
    /// puts `true` before `false`; tuple, array, and residue buckets keep
    /// insertion order. The result is the concatenation of the buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::tuple;
    ///
    /// let mut t = tuple![3, 1, "b", false, 2, "a"];
    /// t.sort();
    /// assert_eq!(t, tuple![false, 1, 2, 3, "a", "b"]);
    /// ```
    pub fn sort(&mut self) {
        if self.values.is_empty() {
            return;
        }
        let values = std::mem::take(&mut self.values);
        let mut buckets: Vec<Vec<Value>> = (0..SORT_ORDER.len()).map(|_| Vec::new()).collect();
        let mut residue = Vec::new();
        for value in values {
            match SORT_ORDER.iter().position(|k| *k == value.kind()) {
                Some(slot) => buckets[slot].push(value),
                None => residue.push(value),
            }
        }
        for bucket in &mut buckets {
            bucket.sort_by(compare_within_kind);
        }
        let mut sorted: Vec<Value> = buckets.into_iter().flatten().collect();
        sorted.append(&mut residue);
        self.values = sorted;
    }

    /// Reverses the tuple in place. A no-op on length <= 1.
    pub fn reverse(&mut self) {
        if self.values.len() <= 1 {
            return;
        }
        self.values.reverse();
    }

    /// Keeps only the half-open sub-range `[start, end)`, clamping `end`
    /// to the length and `start` to `end`.
    pub fn slice(&mut self, start: usize, end: usize) {
        let end = end.min(self.values.len());
        let start = start.min(end);
        self.values = self.values[start..end].to_vec();
    }

    /// Splits the tuple at `index` (clamped to `[0, len]`): the tail
    /// moves into `out`, overwriting its previous contents, and the head
    /// stays. Concatenating `self` and `out` reproduces the original.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{tuple, Tuple};
    ///
    /// let mut t = tuple![1, 2, 3, 4];
    /// let mut tail = Tuple::new();
    /// t.split(1, &mut tail);
    /// assert_eq!(t, tuple![1]);
    /// assert_eq!(tail, tuple![2, 3, 4]);
    /// ```
    pub fn split(&mut self, index: usize, out: &mut Tuple) {
        let index = index.min(self.values.len());
        out.values = self.values.split_off(index);
    }

    /// Appends the elements of every tuple-kind value in `others`, in
    /// argument order. Values of any other kind are skipped.
    pub fn join(&mut self, others: &[Value]) {
        for other in others {
            if let Value::Tuple(t) = other {
                self.values.extend(t.values.iter().cloned());
            }
        }
    }

    /// Appends `amount` clones of `value`.
    pub fn fill(&mut self, value: impl Into<Value>, amount: usize) {
        if amount == 0 {
            return;
        }
        let value = value.into();
        for _ in 0..amount {
            self.values.push(value.clone());
        }
    }

    /// Overwrites the first `min(amount, len)` slots with independent
    /// uniform random integers in `0..=99`. Nothing is appended.
    pub fn fill_random(&mut self, amount: usize) {
        self.fill_random_range(0, 99, amount);
    }

    /// Overwrites the first `min(amount, len)` slots with independent
    /// uniform random integers in `min..=max` (bounds swapped when
    /// reversed). Nothing is appended.
    pub fn fill_random_range(&mut self, min: i32, max: i32, amount: usize) {
        let amount = amount.min(self.values.len());
        if amount == 0 {
            return;
        }
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let mut rng = rand::thread_rng();
        for slot in self.values.iter_mut().take(amount) {
            *slot = Value::Int(rng.gen_range(min..=max));
        }
    }

    /// Returns `true` if every element of this tuple is contained in the
    /// operand. Containment, not multiset count, governs the result:
    /// duplicates are not double-checked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATuple`] if the operand is not a tuple value.
    pub fn is_subset_of(&self, other: &Value) -> Result<bool> {
        let other = expect_tuple(other)?;
        if self.len() > other.len() {
            return Ok(false);
        }
        Ok(self.values.iter().all(|v| other.contains(v)))
    }

    /// Returns `true` if the operand is a subset of this tuple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATuple`] if the operand is not a tuple value.
    pub fn is_superset_of(&self, other: &Value) -> Result<bool> {
        let other = expect_tuple(other)?;
        if self.len() < other.len() {
            return Ok(false);
        }
        Ok(other.values.iter().all(|v| self.contains(v)))
    }

    /// Strict-subset test: walks this tuple counting a running streak of
    /// elements found in the operand, resetting the streak on a miss,
    /// and succeeds when the final streak equals this tuple's length.
    ///
    /// Elements are matched by containment, not position, so a reordered
    /// subset still passes; only a miss after the last run of hits fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATuple`] if the operand is not a tuple value.
    pub fn is_strict_subset_of(&self, other: &Value) -> Result<bool> {
        let other = expect_tuple(other)?;
        if self.len() > other.len() {
            return Ok(false);
        }
        let mut streak = 0usize;
        for value in &self.values {
            if other.contains(value) {
                streak += 1;
            } else {
                streak = 0;
            }
        }
        Ok(streak == self.len())
    }

    /// Strict-superset test: the streak counter of
    /// [`is_strict_subset_of`](Tuple::is_strict_subset_of) run over the
    /// operand's elements against this tuple.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATuple`] if the operand is not a tuple value.
    pub fn is_strict_superset_of(&self, other: &Value) -> Result<bool> {
        let other = expect_tuple(other)?;
        if self.len() < other.len() {
            return Ok(false);
        }
        let mut streak = 0usize;
        for value in &other.values {
            if self.contains(value) {
                streak += 1;
            } else {
                streak = 0;
            }
        }
        Ok(streak == other.len())
    }

    /// Returns `true` if no element of the operand is contained in this
    /// tuple. An operand equal to this tuple is never disjoint, even
    /// when both are empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATuple`] if the operand is not a tuple value.
    pub fn is_disjoint(&self, other: &Value) -> Result<bool> {
        let other = expect_tuple(other)?;
        if other == self {
            return Ok(false);
        }
        Ok(!other.values.iter().any(|v| self.contains(v)))
    }

    /// Returns a new tuple holding, in order, this tuple's elements not
    /// contained in the operand followed by the operand's elements not
    /// contained in this tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{tuple, Value};
    ///
    /// let a = tuple![0, 1, 4, 5];
    /// let b = tuple![0, 1, 9];
    /// let diff = a.symmetric_difference(&Value::from(b)).unwrap();
    /// assert_eq!(diff, tuple![4, 5, 9]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATuple`] if the operand is not a tuple value.
    pub fn symmetric_difference(&self, other: &Value) -> Result<Tuple> {
        let other = expect_tuple(other)?;
        let mut result = Tuple::new();
        for value in &self.values {
            if !other.contains(value) {
                result.push(value.clone());
            }
        }
        for value in &other.values {
            if !self.contains(value) {
                result.push(value.clone());
            }
        }
        Ok(result)
    }

    /// Returns a new tuple holding this tuple's elements not contained
    /// in the operand, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotATuple`] if the operand is not a tuple value.
    pub fn subtract(&self, other: &Value) -> Result<Tuple> {
        let other = expect_tuple(other)?;
        Ok(self
            .values
            .iter()
            .filter(|v| !other.contains(v))
            .cloned()
            .collect())
    }

    /// Returns a new tuple holding the values satisfying the predicate,
    /// preserving order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::tuple;
    ///
    /// let t = tuple![1, "skip", 2, 3];
    /// let numbers = t.filter(|v| v.is_numeric());
    /// assert_eq!(numbers, tuple![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(&Value) -> bool) -> Tuple {
        self.values
            .iter()
            .filter(|v| predicate(v))
            .cloned()
            .collect()
    }

    /// Returns an iterator over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }
}

/// Tuple operands of the set algebra arrive as dynamic values; anything
/// that is not a tuple is rejected, never coerced.
fn expect_tuple(value: &Value) -> Result<&Tuple> {
    value.as_tuple().ok_or(Error::NotATuple)
}

/// Ordering within one sort bucket. Bools put `true` first; numeric,
/// char, and string kinds order ascending; everything else is left in
/// insertion order (the sort is stable).
fn compare_within_kind(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => y.cmp(x),
        (Value::Byte(x), Value::Byte(y)) => x.cmp(y),
        (Value::Short(x), Value::Short(y)) => x.cmp(y),
        (Value::Int(x), Value::Int(y)) => x.cmp(y),
        (Value::Long(x), Value::Long(y)) => x.cmp(y),
        (Value::Float(x), Value::Float(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::Double(x), Value::Double(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::BigInt(x), Value::BigInt(y)) => x.cmp(y),
        (Value::BigDecimal(x), Value::BigDecimal(y)) => x.cmp(y),
        (Value::Char(x), Value::Char(y)) => x.cmp(y),
        (Value::Str(x), Value::Str(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.values.is_empty() {
            return f.write_str("[]");
        }
        write!(
            f,
            "[{}]",
            self.values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl Hash for Tuple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.len().hash(state);
        for value in &self.values {
            value.hash(state);
        }
    }
}

impl Serialize for Tuple {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.values.len()))?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Tuple {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Tuple {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
