// src/process/table.rs
use serde::Serialize;
use tracing::trace;

use super::line::split_line;

/// A parsed CSV source: the header row plus every well-formed data row.
///
/// Every row has exactly `headers.len()` values; rows with another arity are
/// dropped during parsing, never padded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    /// Trimmed column names from the first line.
    pub headers: Vec<String>,
    /// Trimmed values, in source row order.
    pub rows: Vec<Vec<String>>,
}

/// Borrowed view over one row of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    headers: &'a [String],
    values: &'a [String],
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn get(&self, idx: usize) -> Option<Record<'_>> {
        self.rows.get(idx).map(|values| Record {
            headers: &self.headers,
            values,
        })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |values| Record {
            headers: &self.headers,
            values,
        })
    }
}

impl<'a> Record<'a> {
    /// Raw value of `key`, present whenever the column exists (possibly empty).
    /// A header that repeats a name resolves to its last occurrence.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        let idx = self.headers.iter().rposition(|h| h == key)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Value of `key` only when it is non-empty.
    pub fn field(&self, key: &str) -> Option<&'a str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Value of `key`, or `default` when the column is missing or empty.
    pub fn field_or(&self, key: &str, default: &'a str) -> &'a str {
        self.field(key).unwrap_or(default)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.headers.iter().map(String::as_str)
    }
}

/// Parse a whole CSV text into a [`Table`].
///
/// Total: any input yields a table. Blank input yields no header at all;
/// a header-only input yields the header and zero rows.
pub fn parse_table(text: &str) -> Table {
    let text = text.trim();
    if text.is_empty() {
        return Table::default();
    }

    let mut lines = text.lines();
    let headers: Vec<String> = match lines.next() {
        Some(first) => split_line(first)
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect(),
        None => return Table::default(),
    };

    let mut rows = Vec::new();
    for (idx, line) in lines.enumerate() {
        let values = split_line(line);
        if values.len() != headers.len() {
            trace!(
                line = idx + 2,
                expected = headers.len(),
                found = values.len(),
                "dropping malformed row"
            );
            continue;
        }
        rows.push(values.into_iter().map(|v| v.trim().to_string()).collect());
    }

    Table { headers, rows }
}
