// src/normalize/text.rs
use crate::extract::Cell;
use once_cell::sync::Lazy;
use regex::Regex;

static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// NBSP and CR/LF become spaces, whitespace runs collapse, ends are trimmed.
pub fn clean_text(raw: &str) -> String {
    let replaced = raw.replace(['\u{a0}', '\r', '\n'], " ");
    WS_RE.replace_all(replaced.trim(), " ").into_owned()
}

/// Clean a cell's text. Missing cells clean to the empty string.
pub fn clean_cell(cell: &Cell) -> String {
    match cell {
        Cell::Missing => String::new(),
        other => clean_text(&other.to_string()),
    }
}

/// Case-insensitive substring test on already-cleaned text.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  St\u{a0}Louis\r\n  County  "), "St Louis County");
        assert_eq!(clean_text("\t\n"), "");
    }

    #[test]
    fn test_clean_text_idempotent() {
        for s in ["", "a", "123 Main St, Springfield, MO 63101", "Jackson County (Kansas City)"] {
            assert_eq!(clean_text(s), s);
            let once = clean_text(&format!("  {}\u{a0}\n", s));
            assert_eq!(clean_text(&once), once);
        }
    }

    #[test]
    fn test_clean_cell() {
        assert_eq!(clean_cell(&Cell::Missing), "");
        assert_eq!(clean_cell(&Cell::Number(25.0)), "25");
        assert_eq!(clean_cell(&Cell::Text(" a  b ".into())), "a b");
    }
}
