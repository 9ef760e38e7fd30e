// src/extract/text_table.rs
use super::{Cell, RawTable, TableExtractor};
use anyhow::{anyhow, Result};
use std::path::Path;
use tracing::{debug, info};

/// Pure-Rust backend: pull the text layer out of the PDF and rebuild the
/// tables from column alignment.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextTableExtractor;

impl TableExtractor for TextTableExtractor {
    #[tracing::instrument(level = "info", skip(self, pdf), fields(path = %pdf.display()))]
    fn extract(&self, pdf: &Path) -> Result<Vec<RawTable>> {
        let text = pdf_extract::extract_text(pdf)
            .map_err(|e| anyhow!("extracting text from {}: {:?}", pdf.display(), e))?;
        debug!(chars = text.len(), "extracted text layer");

        let tables = parse_text_tables(&text);
        info!(tables = tables.len(), "rebuilt tables from text");
        Ok(tables)
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// A line naming the sale date and county columns opens a new table.
fn is_header_line(line: &str) -> bool {
    let l = line.to_lowercase();
    l.contains("sale") && l.contains("date") && l.contains("county")
}

/// Split a line into `(char offset, text)` fields. Runs of two or more
/// blanks separate fields; single blanks stay inside a field.
fn split_fields(line: &str) -> Vec<(usize, String)> {
    let expanded = line.replace('\t', "    ");
    let mut out = Vec::new();
    let mut current: Option<(usize, String)> = None;
    let mut gap = 0usize;

    for (i, c) in expanded.chars().enumerate() {
        if c.is_whitespace() {
            gap += 1;
            continue;
        }
        if gap >= 2 {
            out.extend(current.take());
        } else if let Some((_, buf)) = current.as_mut() {
            if gap == 1 {
                buf.push(' ');
            }
        }
        current
            .get_or_insert_with(|| (i, String::new()))
            .1
            .push(c);
        gap = 0;
    }
    out.extend(current);
    out
}

/// Index of the column whose start offset is closest to `offset`.
fn nearest_column(starts: &[usize], offset: usize) -> usize {
    starts
        .iter()
        .enumerate()
        .min_by_key(|&(_, &s)| s.abs_diff(offset))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn append(cell: &mut Cell, extra: &str) {
    *cell = match std::mem::replace(cell, Cell::Missing) {
        Cell::Text(s) => Cell::Text(format!("{} {}", s, extra)),
        Cell::Number(n) => Cell::Text(format!("{} {}", n, extra)),
        Cell::Missing => Cell::text(extra),
    };
}

struct Builder {
    starts: Vec<usize>,
    table: RawTable,
}

impl Builder {
    fn new(header: Vec<(usize, String)>) -> Self {
        let (starts, headers) = header.into_iter().unzip();
        Self {
            starts,
            table: RawTable::new(headers, Vec::new()),
        }
    }

    fn push_line(&mut self, fields: Vec<(usize, String)>) {
        let width = self.starts.len();
        let mut row = vec![Cell::Missing; width];
        for (offset, text) in fields {
            append(&mut row[nearest_column(&self.starts, offset)], &text);
        }

        // Nothing under the first column: a wrapped continuation of the row above.
        if row[0].is_missing() {
            if let Some(prev) = self.table.rows.last_mut() {
                for (i, cell) in row.into_iter().enumerate() {
                    if let Cell::Text(s) = cell {
                        append(&mut prev[i], &s);
                    }
                }
                return;
            }
        }
        self.table.rows.push(row);
    }
}

/// Rebuild tables from the text layer of a PDF.
///
/// Text before the first header line (letterhead) is ignored. Form feeds
/// are treated as line breaks; every repeated header line starts a new
/// table, so a multi-page listing comes back as one table per page.
pub fn parse_text_tables(text: &str) -> Vec<RawTable> {
    let mut tables = Vec::new();
    let mut builder: Option<Builder> = None;

    for line in text.split(['\n', '\x0c']) {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(line);
        if is_header_line(line) {
            if let Some(done) = builder.take() {
                tables.push(done.table);
            }
            builder = Some(Builder::new(fields));
            continue;
        }
        if let Some(b) = builder.as_mut() {
            b.push_line(fields);
        }
    }
    tables.extend(builder.map(|b| b.table));
    tables.retain(|t| !t.is_empty());
    tables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fields_on_wide_gaps() {
        let fields = split_fields("03/14/2024 10:00 AM   St Louis County    123 Main St");
        assert_eq!(
            fields,
            vec![
                (0, "03/14/2024 10:00 AM".to_string()),
                (22, "St Louis County".to_string()),
                (41, "123 Main St".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_text_tables_pages_and_letterhead() {
        let text = "\
Millsap & Singer, LLC
Sale Date        County             Property Address
03/14/2024 10:00 AM   St Louis County    123 Main St, Springfield, MO 63101
\x0cSale Date        County             Property Address
03/15/2024 1:00 PM    Jackson County     9 Elm St
";
        let tables = parse_text_tables(text);
        assert_eq!(tables.len(), 2);
        assert_eq!(
            tables[0].headers,
            vec!["Sale Date", "County", "Property Address"]
        );
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(tables[0].cell(0, 1), &Cell::Text("St Louis County".into()));
        assert_eq!(
            tables[1].cell(0, 2),
            &Cell::Text("9 Elm St".into())
        );
    }

    #[test]
    fn test_wrapped_line_joins_previous_row() {
        let text = "\
Sale Date        County             Property Address
03/14/2024 10:00 AM   St Louis County    123 Main St,
                                         Springfield, MO 63101
";
        let tables = parse_text_tables(text);
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].rows.len(), 1);
        assert_eq!(
            tables[0].cell(0, 2),
            &Cell::Text("123 Main St, Springfield, MO 63101".into())
        );
    }

    #[test]
    fn test_no_header_no_tables() {
        assert!(parse_text_tables("just a footer\npage 1 of 3\n").is_empty());
    }
}
