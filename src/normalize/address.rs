// src/normalize/address.rs
use super::text::clean_text;
use once_cell::sync::Lazy;
use regex::Regex;

static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{5})(?:-\d{4})?\s*$").unwrap());
static STATE_ZIP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",\s*[A-Za-z]{2}\s+\d{5}(?:-\d{4})?\s*$").unwrap());
static BARE_ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r",?\s*\d{5}(?:-\d{4})?\s*$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip: String,
}

/// Split `"123 Main St, Springfield, MO 63101"` into street, city and ZIP.
/// ZIP+4 extensions are dropped.
pub fn split_address(raw: &str) -> Address {
    let full = clean_text(raw);
    let zip = ZIP_RE
        .captures(&full)
        .map(|c| c[1].to_string())
        .unwrap_or_default();

    let mut rest = STATE_ZIP_RE.replace(&full, "").into_owned();
    if !zip.is_empty() && rest == full {
        rest = BARE_ZIP_RE.replace(&full, "").into_owned();
    }

    let mut parts: Vec<&str> = rest
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    let (street, city) = match parts.len() {
        0 => (full.clone(), String::new()),
        1 => (parts[0].to_string(), String::new()),
        _ => {
            let city = parts.pop().unwrap_or_default().to_string();
            (parts.join(", "), city)
        }
    };

    Address { street, city, zip }
}
