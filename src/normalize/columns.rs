// src/normalize/columns.rs
use super::text::clean_text;
use crate::extract::{Cell, RawTable};
use std::fmt;

/// Canonical column names. Anything unmatched keeps its cleaned header.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnName {
    SaleDatetime,
    ContinuedDatetime,
    CaseNumber,
    County,
    PropertyAddress,
    MsFile,
    Bid,
    AuctionVendor,
    Auction,
    Vendor,
    Other(String),
}

type Rule = (fn(&str) -> bool, ColumnName);

/// Ordered; first match wins. `bid` must stay ahead of the auction/vendor
/// rules since some layouts head that column "Bid / Auction Vendor".
const RULES: &[Rule] = &[
    (|h| h.contains("sale") && h.contains("date"), ColumnName::SaleDatetime),
    (|h| h.contains("continued"), ColumnName::ContinuedDatetime),
    (
        |h| h.starts_with("case") || h.contains("case #") || h.contains("case#"),
        ColumnName::CaseNumber,
    ),
    (|h| h.contains("county"), ColumnName::County),
    (|h| h.contains("property address"), ColumnName::PropertyAddress),
    (|h| h.contains("ms file"), ColumnName::MsFile),
    (|h| h.contains("bid"), ColumnName::Bid),
    (|h| h.contains("auction") && h.contains("vendor"), ColumnName::AuctionVendor),
    (|h| h == "auction", ColumnName::Auction),
    (|h| h == "vendor", ColumnName::Vendor),
];

impl ColumnName {
    pub fn from_header(raw: &str) -> Self {
        let cleaned = clean_text(raw).to_lowercase();
        RULES
            .iter()
            .find(|(matches, _)| matches(&cleaned))
            .map(|(_, name)| name.clone())
            .unwrap_or(ColumnName::Other(cleaned))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ColumnName::SaleDatetime => "sale_datetime",
            ColumnName::ContinuedDatetime => "continued_datetime",
            ColumnName::CaseNumber => "case_number",
            ColumnName::County => "county",
            ColumnName::PropertyAddress => "property_address",
            ColumnName::MsFile => "ms_file",
            ColumnName::Bid => "bid",
            ColumnName::AuctionVendor => "auction_vendor",
            ColumnName::Auction => "auction",
            ColumnName::Vendor => "vendor",
            ColumnName::Other(s) => s,
        }
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw table with standardized headers.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<ColumnName>,
    pub rows: Vec<Vec<Cell>>,
}

static MISSING: Cell = Cell::Missing;

impl Table {
    /// Value of `name` in `row`. With duplicate columns the first
    /// non-missing cell wins.
    pub fn get<'a>(&'a self, row: &'a [Cell], name: &ColumnName) -> &'a Cell {
        self.columns
            .iter()
            .zip(row)
            .filter(|(c, _)| *c == name)
            .map(|(_, cell)| cell)
            .find(|cell| !cell.is_missing())
            .unwrap_or(&MISSING)
    }
}

/// Standardize the headers of `raw`; rows pass through untouched.
pub fn standardize(raw: RawTable) -> Table {
    Table {
        columns: raw.headers.iter().map(|h| ColumnName::from_header(h)).collect(),
        rows: raw.rows,
    }
}
