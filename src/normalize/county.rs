// src/normalize/county.rs
use super::text::clean_text;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Counties whose sales we keep, as (canonical, display) pairs.
pub const ALLOW_LIST: &[(&str, &str)] = &[
    ("st. louis county", "St. Louis County"),
    ("st. louis city", "St. Louis City"),
    ("st. charles county", "St. Charles County"),
    ("jefferson county", "Jefferson County"),
    ("franklin county", "Franklin County"),
    ("lincoln county", "Lincoln County"),
    ("warren county", "Warren County"),
    ("jackson county", "Jackson County"),
    ("jackson county (kansas city)", "Jackson County (Kansas City)"),
    ("jackson county (independence)", "Jackson County (Independence)"),
    ("clay county", "Clay County"),
    ("platte county", "Platte County"),
    ("cass county", "Cass County"),
];

/// Ordered abbreviation expansions applied to lowercased text.
static ABBREVIATIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"\b(?:st\.?|saint)\s*louis\b").unwrap(), "st. louis"),
        (Regex::new(r"\b(?:st\.?|saint)\s*charles\b").unwrap(), "st. charles"),
        (Regex::new(r"^city of st\. louis$").unwrap(), "st. louis city"),
    ]
});

static OPEN_PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(\s*").unwrap());
static CLOSE_PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\)").unwrap());

const JACKSON: &str = "jackson county";

/// Jackson County sells at three courthouses; the qualifier decides which.
const JACKSON_RULES: &[(&[&str], &str)] = &[
    (&["(kansas city)"], "jackson county (kansas city)"),
    (&["(independence)", "(independent)"], "jackson county (independence)"),
];

fn fold_diacritics(s: &str) -> String {
    s.nfkd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Canonical lowercase form of a raw county cell, or `None` when empty.
///
/// Only St. Louis/St. Charles abbreviations and the Jackson County
/// qualifiers are rewritten; every other county passes through cleaned.
pub fn canonicalize(raw: &str) -> Option<String> {
    let mut s = fold_diacritics(&clean_text(raw)).to_lowercase();
    if s.is_empty() {
        return None;
    }

    for (re, replacement) in ABBREVIATIONS.iter() {
        s = re.replace_all(&s, *replacement).into_owned();
    }

    s = OPEN_PAREN_RE.replace_all(&s, " (").into_owned();
    s = CLOSE_PAREN_RE.replace_all(&s, ")").trim().to_string();

    if s.starts_with(JACKSON) {
        let form = JACKSON_RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|n| s.contains(n)))
            .map(|(_, form)| *form)
            .unwrap_or(JACKSON);
        return Some(form.to_string());
    }
    Some(s)
}

/// Display form of an allow-listed canonical county.
pub fn display_name(canonical: &str) -> Option<&'static str> {
    ALLOW_LIST
        .iter()
        .find(|(c, _)| *c == canonical)
        .map(|(_, pretty)| *pretty)
}

/// Canonicalize and look up in one step; `None` means the row is dropped.
pub fn allowed_display_name(raw: &str) -> Option<&'static str> {
    canonicalize(raw).as_deref().and_then(display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_st_louis_abbreviations() {
        for raw in ["St Louis County", "ST. LOUIS COUNTY", "st.louis  county", "Saint Louis County"] {
            assert_eq!(canonicalize(raw).as_deref(), Some("st. louis county"), "{:?}", raw);
        }
        assert_eq!(canonicalize("St Charles County").as_deref(), Some("st. charles county"));
        assert_eq!(canonicalize("City of St Louis").as_deref(), Some("st. louis city"));
    }

    #[test]
    fn test_jackson_variants() {
        let cases = [
            ("Jackson County", "jackson county"),
            ("JACKSON COUNTY", "jackson county"),
            ("Jackson County (Kansas City)", "jackson county (kansas city)"),
            ("Jackson County( Kansas City )", "jackson county (kansas city)"),
            ("Jackson County\n(Kansas City)", "jackson county (kansas city)"),
            ("Jackson County (Independence)", "jackson county (independence)"),
            ("Jackson County (Independent)", "jackson county (independence)"),
            ("Jackson County - Courthouse", "jackson county"),
        ];
        for (raw, want) in cases {
            assert_eq!(canonicalize(raw).as_deref(), Some(want), "{:?}", raw);
        }
    }

    #[test]
    fn test_other_counties_pass_through() {
        assert_eq!(canonicalize("  Smith   County ").as_deref(), Some("smith county"));
        assert_eq!(canonicalize("Sainte Geneviève County").as_deref(), Some("sainte genevieve county"));
        assert_eq!(canonicalize("   "), None);
    }

    #[test]
    fn test_allow_list_lookup() {
        assert_eq!(allowed_display_name("St Louis County"), Some("St. Louis County"));
        assert_eq!(
            allowed_display_name("jackson county (kansas city)"),
            Some("Jackson County (Kansas City)")
        );
        assert_eq!(allowed_display_name("Smith County"), None);
        assert_eq!(allowed_display_name(""), None);
    }

    #[test]
    fn test_allow_list_is_canonical() {
        for (canonical, pretty) in ALLOW_LIST {
            assert_eq!(canonicalize(canonical).as_deref(), Some(*canonical));
            assert_eq!(canonicalize(pretty).as_deref(), Some(*canonical));
        }
    }
}
