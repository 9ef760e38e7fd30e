// src/normalize/currency.rs
use super::text::clean_cell;
use crate::extract::Cell;

/// Strip `$`, thousands separators and whitespace from a bid, keeping the
/// digits and decimal point as a string. No digits means no bid.
pub fn parse_bid(cell: &Cell) -> String {
    let cleaned = clean_cell(cell);
    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return String::new();
    }
    cleaned
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(s: &str) -> String {
        parse_bid(&Cell::Text(s.to_string()))
    }

    #[test]
    fn test_currency() {
        assert_eq!(bid("$146,881.95"), "146881.95");
        assert_eq!(bid(" $ 1, 250 "), "1250");
        assert_eq!(parse_bid(&Cell::Number(98000.5)), "98000.5");
    }

    #[test]
    fn test_no_digits_is_empty() {
        for s in ["", "$", "N/A", "TBD", "$ ,. "] {
            assert_eq!(bid(s), "", "input {:?}", s);
        }
        assert_eq!(parse_bid(&Cell::Missing), "");
    }
}
