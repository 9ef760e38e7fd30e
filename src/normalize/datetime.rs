// src/normalize/datetime.rs
use crate::extract::Cell;
use once_cell::sync::Lazy;
use regex::Regex;

static DATETIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d{1,2}/\d{1,2}/\d{4})\s+(\d{1,2}:\d{2}\s?(?:AM|PM)?)").unwrap()
});
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}/\d{1,2}/\d{4}").unwrap());

/// Split a combined `MM/DD/YYYY HH:MM[ AM|PM]` cell into `(date, time)`.
///
/// A bare date yields an empty time; anything else yields two empty strings.
pub fn split_datetime(cell: &Cell) -> (String, String) {
    let Cell::Text(raw) = cell else {
        return (String::new(), String::new());
    };

    if let Some(caps) = DATETIME_RE.captures(raw) {
        let time = caps[2].trim().to_uppercase().replace("  ", " ");
        return (caps[1].to_string(), time);
    }
    match DATE_RE.find(raw) {
        Some(m) => (m.as_str().to_string(), String::new()),
        None => (String::new(), String::new()),
    }
}

/// True when `s` contains an `MM/DD/YYYY` date anywhere.
pub fn contains_date(s: &str) -> bool {
    DATE_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> (String, String) {
        split_datetime(&Cell::Text(s.to_string()))
    }

    #[test]
    fn test_full_datetime() {
        assert_eq!(split("3/14/2024 10:00 AM"), ("3/14/2024".into(), "10:00 AM".into()));
        assert_eq!(split("03/14/2024  9:30pm"), ("03/14/2024".into(), "9:30PM".into()));
        assert_eq!(split("12/01/2025 13:00"), ("12/01/2025".into(), "13:00".into()));
    }

    #[test]
    fn test_bare_date() {
        assert_eq!(split("Cont. to 4/2/2024"), ("4/2/2024".into(), String::new()));
    }

    #[test]
    fn test_unparseable_and_missing() {
        assert_eq!(split("TBD"), (String::new(), String::new()));
        assert_eq!(split_datetime(&Cell::Missing), (String::new(), String::new()));
        assert_eq!(split_datetime(&Cell::Number(45000.0)), (String::new(), String::new()));
    }

    #[test]
    fn test_contains_date() {
        assert!(contains_date("Cont. to 4/2/2024"));
        assert!(!contains_date("Sale Date/Time"));
    }
}
