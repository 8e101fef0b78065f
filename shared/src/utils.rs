// Locale-neutral helpers shared across crates: digit grouping, decimal
// rendering and the small parse helpers the catalog loader relies on.
use anyhow::{anyhow, Result};
use chrono::NaiveDate;

/// Inserts `separator` every three digits from the right of an unsigned
/// digit string.
pub fn group_digits(digits: &str, separator: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }
    result
}

/// Rounds half away from zero and groups the integer part.
/// Returns the sign separately so callers can place currency symbols
/// between the sign and the digits.
pub fn format_whole(value: f64, separator: char) -> (bool, String) {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    (negative, group_digits(&digits, separator))
}

/// Formats a number with a fixed number of decimals.
pub fn format_decimal(value: f64, decimals: usize, decimal_separator: char, group_separator: char) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };
    let mut result = String::new();
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.push('-');
    }
    result.push_str(&group_digits(integer_part, group_separator));
    if let Some(f) = fraction {
        result.push(decimal_separator);
        result.push_str(f);
    }
    result
}

pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| anyhow!("Failed to parse date '{}': {}", s, e))
}

/// Splits a `|`-separated list, dropping empty entries.
pub fn split_list(s: &str) -> Vec<String> {
    s.split('|')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// First letter of each word, upper-cased ("Petr Novák" -> "PN").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits("84000", ','), "84,000");
        assert_eq!(group_digits("1234567", ' '), "1 234 567");
        assert_eq!(group_digits("999", ','), "999");
        assert_eq!(group_digits("0", ','), "0");
    }

    #[test]
    fn test_format_whole_rounds_half_away_from_zero() {
        assert_eq!(format_whole(1234.5, ','), (false, "1,235".to_string()));
        assert_eq!(format_whole(-1234.5, ','), (true, "1,235".to_string()));
        assert_eq!(format_whole(-0.2, ','), (false, "0".to_string()));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(1234.567, 2, '.', ','), "1,234.57");
        assert_eq!(format_decimal(3.84, 2, ',', ' '), "3,84");
        assert_eq!(format_decimal(-1234.0, 0, '.', ','), "-1,234");
        assert_eq!(format_decimal(-0.001, 1, '.', ','), "0.0");
    }

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2024-01-15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 1, 15));
        assert!(parse_iso_date("15/01/2024").is_err());
    }

    #[test]
    fn test_split_list_and_initials() {
        assert_eq!(split_list("SEO Setup| Hosting Q1 ||"), vec!["SEO Setup", "Hosting Q1"]);
        assert!(split_list("").is_empty());
        assert_eq!(initials("Petr Novák"), "PN");
        assert_eq!(initials("Ondřej Blažek"), "OB");
    }
}
