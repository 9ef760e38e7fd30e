// src/record.rs
use serde::{Deserialize, Serialize};

pub const STATE: &str = "MO";
pub const SOURCE: &str = "Millsap & Singer";

/// One emitted sale listing. Absent data is the empty string; only
/// `continued_date` may be left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    #[serde(rename = "SaleDate")]
    pub sale_date: String,
    #[serde(rename = "SaleTime")]
    pub sale_time: String,
    #[serde(
        rename = "ContinuedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub continued_date: Option<String>,
    #[serde(rename = "FileNo")]
    pub file_no: String,
    #[serde(rename = "CaseNo")]
    pub case_no: String,
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "PropAddress")]
    pub prop_address: String,
    #[serde(rename = "PropCity")]
    pub prop_city: String,
    #[serde(rename = "PropZip")]
    pub prop_zip: String,
    #[serde(rename = "OpeningBid")]
    pub opening_bid: String,
    #[serde(rename = "Vendor")]
    pub vendor: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Source")]
    pub source: String,
}
