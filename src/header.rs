//! Column-title holder for tabular data.

use crate::{Tuple, Value};

/// An ordered set of column titles backed by a [`Tuple`].
///
/// Empty titles are skipped on construction and duplicate titles are
/// skipped on push, so every column name appears once, in first-seen
/// order.
///
/// # Examples
///
/// ```rust
/// use bcml::Header;
///
/// let mut header = Header::new(&["id", "", "name"]);
/// assert_eq!(header.len(), 2);
/// header.push(&["name", "price"]);
/// assert_eq!(header.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Header {
    columns: Tuple,
}

impl Header {
    /// Creates a header from the given titles, skipping empty ones.
    #[must_use]
    pub fn new(titles: &[&str]) -> Self {
        let mut header = Header {
            columns: Tuple::new(),
        };
        for title in titles {
            if title.is_empty() {
                continue;
            }
            header.columns.push(*title);
        }
        header
    }

    /// Returns the number of columns.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the header holds no columns.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Appends titles, skipping any already present.
    pub fn push(&mut self, titles: &[&str]) {
        for title in titles {
            if self.columns.contains(&Value::from(*title)) {
                continue;
            }
            self.columns.push(*title);
        }
    }

    /// Returns the titles as a tuple, in column order.
    #[must_use]
    pub fn columns(&self) -> &Tuple {
        &self.columns
    }
}
