// src/extract/mod.rs
use anyhow::Result;
use std::{fmt, path::Path};

pub mod tabula;
pub mod text_table;

pub use tabula::TabulaExtractor;
pub use text_table::TextTableExtractor;

/// A single cell as handed back by an extraction backend.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Missing,
}

impl Cell {
    /// Build a text cell, treating blank text as missing.
    pub fn text(s: impl Into<String>) -> Self {
        let s = s.into();
        if s.trim().is_empty() {
            Cell::Missing
        } else {
            Cell::Text(s)
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Number(n) => write!(f, "{}", n),
            Cell::Missing => Ok(()),
        }
    }
}

static MISSING: Cell = Cell::Missing;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column headers exactly as the extractor saw them.
    pub headers: Vec<String>,
    /// Data rows, positionally aligned with `headers`. Short rows read as missing.
    pub rows: Vec<Vec<Cell>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self { headers, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row`, `col`, or `Missing` when the row is ragged.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&MISSING)
    }
}

/// Turns a PDF on disk into the tables found on its pages.
///
/// Backends are opaque: page splitting and header detection are their own
/// business, and callers must tolerate repeated header rows in the output.
pub trait TableExtractor {
    fn extract(&self, pdf: &Path) -> Result<Vec<RawTable>>;

    /// Short name for log lines.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_becomes_missing() {
        assert_eq!(Cell::text("   "), Cell::Missing);
        assert_eq!(Cell::text(" x "), Cell::Text(" x ".to_string()));
    }

    #[test]
    fn ragged_rows_read_as_missing() {
        let t = RawTable::new(
            vec!["a".into(), "b".into()],
            vec![vec![Cell::text("1")]],
        );
        assert_eq!(t.cell(0, 0), &Cell::Text("1".into()));
        assert!(t.cell(0, 1).is_missing());
        assert!(t.cell(5, 0).is_missing());
    }

    #[test]
    fn numbers_display_without_trailing_zero() {
        assert_eq!(Cell::Number(1000.0).to_string(), "1000");
        assert_eq!(Cell::Number(146881.95).to_string(), "146881.95");
    }
}
