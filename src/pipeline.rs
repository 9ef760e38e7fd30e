// src/pipeline.rs
use crate::{
    config::Config,
    emit,
    extract::{Cell, RawTable, TableExtractor},
    fetch::{self, Source},
    normalize::{
        allowed_display_name, clean_cell, datetime::contains_date, split_address, split_datetime,
        standardize, text::contains_ci, parse_bid, ColumnName, Table,
    },
    record::{OutputRecord, SOURCE, STATE},
};
use anyhow::{Context, Result};
use std::{collections::BTreeMap, fmt, path::PathBuf};
use tracing::{debug, info};

/// Letterhead and header fragments that leak into the county column.
const NOISE_MARKERS: &[&str] = &["Millsap & Singer", "Sale Date"];

/// Why a row did not make it into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rejection {
    /// No county, file/case number or address: header or footer debris.
    Empty,
    /// County cell carries letterhead or header text.
    Noise,
    /// County is not one we publish.
    OutsideAllowList,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rejection::Empty => "empty",
            Rejection::Noise => "noise",
            Rejection::OutsideAllowList => "outside_allow_list",
        })
    }
}

fn is_blank_row(row: &[Cell]) -> bool {
    row.iter().all(|c| clean_cell(c).is_empty())
}

/// Extractors often re-emit the header as the first data row. A header
/// echo names at least two known columns and carries no dates.
fn is_repeated_header(row: &[Cell]) -> bool {
    let cells: Vec<String> = row.iter().map(clean_cell).collect();
    let known = cells
        .iter()
        .filter(|c| !c.is_empty())
        .filter(|c| !matches!(ColumnName::from_header(c), ColumnName::Other(_)))
        .count();
    known >= 2 && !cells.iter().any(|c| contains_date(c))
}

fn vendor_for(table: &Table, row: &[Cell]) -> String {
    let combined = clean_cell(table.get(row, &ColumnName::AuctionVendor));
    if !combined.is_empty() {
        return combined;
    }
    let auction = clean_cell(table.get(row, &ColumnName::Auction));
    let vendor = clean_cell(table.get(row, &ColumnName::Vendor));
    format!("{} {}", auction, vendor).trim().to_string()
}

/// Build the output record for one standardized row, or say why not.
pub fn normalize_row(table: &Table, row: &[Cell]) -> Result<OutputRecord, Rejection> {
    let field = |name: ColumnName| clean_cell(table.get(row, &name));

    let county_raw = field(ColumnName::County);
    let case_no = field(ColumnName::CaseNumber);
    let ms_file = field(ColumnName::MsFile);
    let address_raw = field(ColumnName::PropertyAddress);

    if [&county_raw, &case_no, &ms_file, &address_raw]
        .iter()
        .all(|s| s.is_empty())
    {
        return Err(Rejection::Empty);
    }
    if NOISE_MARKERS.iter().any(|m| contains_ci(&county_raw, m)) {
        return Err(Rejection::Noise);
    }
    let county = allowed_display_name(&county_raw).ok_or(Rejection::OutsideAllowList)?;

    let (sale_date, sale_time) = split_datetime(table.get(row, &ColumnName::SaleDatetime));
    let (continued, _) = split_datetime(table.get(row, &ColumnName::ContinuedDatetime));
    let address = split_address(&address_raw);
    let file_no = if ms_file.is_empty() {
        case_no.clone()
    } else {
        ms_file
    };

    Ok(OutputRecord {
        sale_date,
        sale_time,
        continued_date: Some(continued).filter(|d| !d.is_empty()),
        file_no,
        case_no,
        county: county.to_string(),
        prop_address: address.street,
        prop_city: address.city,
        prop_zip: address.zip,
        opening_bid: parse_bid(table.get(row, &ColumnName::Bid)),
        vendor: vendor_for(table, row),
        state: STATE.to_string(),
        source: SOURCE.to_string(),
    })
}

/// Normalize, filter and flatten every extracted table, keeping input order.
pub fn normalize_tables(tables: Vec<RawTable>) -> Vec<OutputRecord> {
    let mut records = Vec::new();
    let mut rejected: BTreeMap<Rejection, usize> = BTreeMap::new();

    for (idx, mut raw) in tables.into_iter().enumerate() {
        raw.rows.retain(|r| !is_blank_row(r));
        let table = standardize(raw);
        let skip = usize::from(table.rows.first().is_some_and(|r| is_repeated_header(r)));
        debug!(table = idx, columns = ?table.columns, rows = table.rows.len(), skip, "table");

        for (row_idx, row) in table.rows.iter().enumerate().skip(skip) {
            match normalize_row(&table, row) {
                Ok(rec) => records.push(rec),
                Err(why) => {
                    debug!(table = idx, row = row_idx, reason = %why, "dropped row");
                    *rejected.entry(why).or_default() += 1;
                }
            }
        }
    }

    info!(kept = records.len(), ?rejected, "normalized");
    records
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: usize,
    pub out_path: PathBuf,
}

/// One full pass: fetch, extract, normalize, write.
pub fn run(config: &Config, extractor: &dyn TableExtractor) -> Result<RunSummary> {
    let source = Source::parse(&config.source)?;
    let scratch = tempfile::tempdir().context("creating scratch directory")?;
    let pdf = fetch::fetch_pdf(&source, scratch.path())?;

    info!(extractor = extractor.name(), pdf = %pdf.display(), "extracting tables");
    let tables = extractor
        .extract(&pdf)
        .with_context(|| format!("extracting tables from {}", pdf.display()))?;
    let tables: Vec<RawTable> = tables.into_iter().filter(|t| !t.is_empty()).collect();

    let records = normalize_tables(tables);
    emit::write_records(&config.out, &records)
        .with_context(|| format!("writing {}", config.out.display()))?;

    Ok(RunSummary {
        records: records.len(),
        out_path: config.out.clone(),
    })
}
