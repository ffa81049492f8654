//! Example tables for data-driven scenarios.
//!
//! A table has named columns and one row per scenario instance. Step titles
//! refer to columns through `<Header>` placeholders which each row substitutes
//! with its own values.

use std::sync::Arc;

use crate::error::{ExampleError, Result};

/// Returns whether an example header refers to a parameter or argument name.
///
/// Matching is case-insensitive and ignores everything but letters and digits,
/// so the header `Start Amount` matches both `start_amount` and `startAmount`.
#[must_use]
pub fn header_matches(header: &str, name: &str) -> bool {
    let sanitised_name = sanitise(name);
    !sanitised_name.is_empty() && sanitise(header) == sanitised_name
}

fn sanitise(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A table of example values bound to a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleTable {
    headers: Arc<[String]>,
    rows: Vec<ExampleRow>,
}

impl ExampleTable {
    /// Create an empty table with the given column headers.
    ///
    /// # Errors
    ///
    /// Returns `ExampleError::NoHeaders` when `headers` is empty and
    /// `ExampleError::DuplicateHeader` when two headers match each other.
    pub fn new<I, S>(headers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collected: Vec<String> = headers.into_iter().map(Into::into).collect();
        if collected.is_empty() {
            return Err(ExampleError::NoHeaders.into());
        }
        for (index, header) in collected.iter().enumerate() {
            if collected.iter().take(index).any(|other| header_matches(other, header)) {
                return Err(ExampleError::DuplicateHeader {
                    header: header.clone(),
                }
                .into());
            }
        }
        Ok(Self {
            headers: collected.into(),
            rows: Vec::new(),
        })
    }

    /// Append a row of values, one per header.
    ///
    /// # Errors
    ///
    /// Returns `ExampleError::RowWidthMismatch` when the number of values
    /// differs from the number of headers.
    pub fn with_row<I, S>(mut self, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let collected: Vec<String> = values.into_iter().map(Into::into).collect();
        let index = self.rows.len();
        if collected.len() != self.headers.len() {
            return Err(ExampleError::RowWidthMismatch {
                row: index,
                expected: self.headers.len(),
                actual: collected.len(),
            }
            .into());
        }
        self.rows.push(ExampleRow {
            headers: Arc::clone(&self.headers),
            values: collected,
            index,
        });
        Ok(self)
    }

    /// Column headers in declaration order.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows in declaration order.
    #[must_use]
    pub fn rows(&self) -> &[ExampleRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The header matching `name`, if any.
    #[must_use]
    pub fn matching_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header_matches(header, name))
            .map(String::as_str)
    }
}

/// One row of an [`ExampleTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleRow {
    headers: Arc<[String]>,
    values: Vec<String>,
    index: usize,
}

impl ExampleRow {
    /// Zero-based position of the row in its table.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Values in header order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Value of the column whose header matches `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .zip(&self.values)
            .find(|(header, _)| header_matches(header, name))
            .map(|(_, value)| value.as_str())
    }

    /// `(header, value)` pairs in header order.
    pub fn cells(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    /// Replace every `<Header>` placeholder in `title` with this row's value.
    ///
    /// The title is scanned once, so substituted values are never scanned
    /// again. Placeholders naming unknown headers are left untouched.
    #[must_use]
    pub fn substitute(&self, title: &str) -> String {
        let mut output = String::with_capacity(title.len());
        let mut rest = title;
        while let Some((literal, tail)) = rest.split_once('<') {
            output.push_str(literal);
            let (piece, after) = tail
                .split_once('>')
                .and_then(|(name, after)| self.value_of(name).map(|value| (value, after)))
                .unwrap_or(("<", tail));
            output.push_str(piece);
            rest = after;
        }
        output.push_str(rest);
        output
    }

    fn value_of(&self, header: &str) -> Option<&str> {
        self.cells()
            .find(|(name, _)| *name == header)
            .map(|(_, value)| value)
    }
}
