//! Row-oriented aggregates of tuples.
//!
//! A [`Table`] is an ordered sequence of [`Tuple`] rows. Rows may have
//! unequal lengths; nothing forces a rectangular shape. Pushing a bare
//! scalar wraps it into a fresh single-element row, pushing a tuple
//! appends it as a row unchanged.
//!
//! ## Examples
//!
//! ```rust
//! use bcml::{tuple, Table, Value};
//!
//! let mut table = Table::new();
//! table.push(tuple![1, 2]);
//! table.push("lone");
//! assert_eq!(table.len(), 2);
//! assert!(table.contains(&Value::from("lone")));
//! ```

use crate::value::Value;
use crate::{Error, Result, Tuple};
use std::fmt;

/// An ordered sequence of tuple rows, possibly jagged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    rows: Vec<Tuple>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Table { rows: Vec::new() }
    }

    /// Returns the number of rows.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table holds no rows.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Removes every row.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Appends a row. A tuple value becomes the row itself; any other
    /// value is wrapped into a new single-element row.
    pub fn push(&mut self, value: impl Into<Value>) {
        match value.into() {
            Value::Tuple(row) => self.rows.push(row),
            scalar => {
                let mut row = Tuple::new();
                row.push(scalar);
                self.rows.push(row);
            }
        }
    }

    /// Returns the row at `row`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `row >= len`.
    pub fn row(&self, row: usize) -> Result<&Tuple> {
        self.rows
            .get(row)
            .ok_or_else(|| Error::out_of_range(row, self.rows.len()))
    }

    /// Returns the value at `(row, col)`, bounds-checked against the
    /// addressed row's own length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either coordinate is invalid.
    pub fn get(&self, row: usize, col: usize) -> Result<&Value> {
        self.row(row)?.get(col)
    }

    /// Inserts a value at `(row, col)` within the addressed row,
    /// shifting that row's tail right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `row` is invalid or `col` is not
    /// strictly inside the row.
    pub fn insert(&mut self, row: usize, col: usize, value: impl Into<Value>) -> Result<()> {
        let len = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or_else(|| Error::out_of_range(row, len))?;
        if col >= target.len() {
            return Err(Error::out_of_range(col, target.len()));
        }
        target.insert(col, value)
    }

    /// Overwrites the value at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either coordinate is invalid.
    pub fn replace(&mut self, row: usize, col: usize, value: impl Into<Value>) -> Result<()> {
        let len = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or_else(|| Error::out_of_range(row, len))?;
        target.replace(col, value)
    }

    /// Removes the value at `(row, col)` from the addressed row. The row
    /// itself stays, even when it becomes empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either coordinate is invalid.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<()> {
        let len = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or_else(|| Error::out_of_range(row, len))?;
        if col >= target.len() {
            return Err(Error::out_of_range(col, target.len()));
        }
        target.remove(col)
    }

    /// Swaps two whole rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either index is `>= len`.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.rows.len();
        if a >= len {
            return Err(Error::out_of_range(a, len));
        }
        if b >= len {
            return Err(Error::out_of_range(b, len));
        }
        self.rows.swap(a, b);
        Ok(())
    }

    /// Removes the last row. A no-op on an empty table.
    pub fn pop(&mut self) {
        self.rows.pop();
    }

    /// Returns the first `(row, col)` coordinate where `value` is found.
    /// A miss returns `(0, 0)` — there is no sentinel, so callers must
    /// confirm membership with [`contains`](Table::contains) first.
    #[must_use]
    pub fn index_of(&self, value: &Value) -> (usize, usize) {
        for (i, row) in self.rows.iter().enumerate() {
            if let Some(j) = row.index_of(value) {
                return (i, j);
            }
        }
        (0, 0)
    }

    /// Returns `true` if the table contains `value`. A tuple probe
    /// matches a whole row by equality; any other probe matches
    /// cell-wise across all rows.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        if let Value::Tuple(probe) = value {
            return self.rows.iter().any(|row| row == probe);
        }
        self.rows.iter().any(|row| row.contains(value))
    }

    /// Keeps only the rows in the half-open range `[start, end)`,
    /// clamping `end` to the length and `start` to `end`.
    pub fn slice(&mut self, start: usize, end: usize) {
        let end = end.min(self.rows.len());
        let start = start.min(end);
        self.rows = self.rows[start..end].to_vec();
    }

    /// Appends the rows of every given table, in argument order.
    pub fn join(&mut self, others: &[Table]) {
        for other in others {
            self.rows.extend(other.rows.iter().cloned());
        }
    }

    /// Returns `true` if this table is a subset of the operand: the
    /// number of the operand's rows that appear (by row equality) in
    /// this table must equal this table's row count, after a fast
    /// length test.
    #[must_use]
    pub fn is_subset_of(&self, other: &Table) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let count = other
            .rows
            .iter()
            .filter(|row| self.rows.iter().any(|mine| mine == *row))
            .count();
        count == self.len()
    }

    /// Returns `true` if the operand is a subset of this table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{tuple, Table};
    ///
    /// let mut a = Table::new();
    /// a.push(tuple![1, 2]);
    /// let mut b = Table::new();
    /// b.push(tuple![1, 2]);
    /// b.push(tuple![3, 4]);
    /// assert!(b.is_superset_of(&a));
    /// assert_eq!(a.is_subset_of(&b), b.is_superset_of(&a));
    /// ```
    #[must_use]
    pub fn is_superset_of(&self, other: &Table) -> bool {
        other.is_subset_of(self)
    }

    /// Returns a new table holding this table's rows that are not rows
    /// of the operand, in order.
    #[must_use]
    pub fn subtract(&self, other: &Table) -> Table {
        let mut result = Table::new();
        for row in &self.rows {
            if !other.contains(&Value::Tuple(row.clone())) {
                result.rows.push(row.clone());
            }
        }
        result
    }

    /// Returns `true` if no cell of the operand is contained, cell-wise,
    /// in this table.
    #[must_use]
    pub fn is_disjoint(&self, other: &Table) -> bool {
        for row in &other.rows {
            for value in row.iter() {
                if self.contains(value) {
                    return false;
                }
            }
        }
        true
    }

    /// Gathers the cells satisfying the predicate from every row, in row
    /// order, into one flattened tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bcml::{tuple, Table};
    ///
    /// let mut table = Table::new();
    /// table.push(tuple![1, "a"]);
    /// table.push(tuple![2, "b"]);
    /// let numbers = table.filter(|v| v.is_numeric());
    /// assert_eq!(numbers, tuple![1, 2]);
    /// ```
    #[must_use]
    pub fn filter(&self, predicate: impl Fn(&Value) -> bool) -> Tuple {
        let mut result = Tuple::new();
        for row in &self.rows {
            let matched = row.filter(&predicate);
            if !matched.is_empty() {
                result.join(&[Value::Tuple(matched)]);
            }
        }
        result
    }

    /// Returns an iterator over the rows in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Tuple> {
        self.rows.iter()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl FromIterator<Tuple> for Table {
    fn from_iter<T: IntoIterator<Item = Tuple>>(iter: T) -> Self {
        Table {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Tuple;
    type IntoIter = std::slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
