//! Best-effort parsing of human-readable magnitude values

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unit suffix multipliers for magnitude strings
static MULTIPLIERS: Lazy<HashMap<char, f64>> =
    Lazy::new(|| HashMap::from([('k', 1_000.0), ('M', 1_000_000.0)]));

/// A magnitude as it appears in the data files: either a bare count or a
/// human-readable string such as "180M" or "Not disclosed".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Magnitude {
    Count(u64),
    Text(String),
}

impl Magnitude {
    /// Numeric value of the magnitude, 0.0 when it cannot be determined
    pub fn value(&self) -> f64 {
        match self {
            Self::Count(n) => *n as f64,
            Self::Text(s) => parse_magnitude(s),
        }
    }
}

/// Convert a "180M" like magnitude string to a number for summing.
///
/// Empty strings and strings that do not start with a digit (e.g.
/// "Not disclosed") evaluate to 0, as does an unrecognized unit suffix.
pub fn parse_magnitude(raw: &str) -> f64 {
    let raw = raw.trim();

    let Some(first) = raw.chars().next() else {
        return 0.0;
    };
    if !first.is_ascii_digit() {
        return 0.0;
    }

    let last = raw.chars().last().unwrap_or('0');
    if last.is_ascii_digit() {
        // Bare number, no unit suffix
        return raw.parse::<f64>().unwrap_or(0.0);
    }

    let number = &raw[..raw.len() - last.len_utf8()];
    match (number.parse::<f64>(), MULTIPLIERS.get(&last)) {
        (Ok(n), Some(multiplier)) => n * multiplier,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_magnitude(""), 0.0);
        assert_eq!(parse_magnitude("   "), 0.0);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert_eq!(parse_magnitude("Not disclosed"), 0.0);
        assert_eq!(parse_magnitude("unknown"), 0.0);
    }

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(parse_magnitude("180M"), 180_000_000.0);
        assert_eq!(parse_magnitude("50k"), 50_000.0);
        assert_eq!(parse_magnitude("1.5M"), 1_500_000.0);
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(parse_magnitude("1234"), 1234.0);
    }

    #[test]
    fn test_unknown_suffix_is_zero() {
        assert_eq!(parse_magnitude("12Q"), 0.0);
        assert_eq!(parse_magnitude("7%"), 0.0);
    }

    #[test]
    fn test_count_passthrough() {
        assert_eq!(Magnitude::Count(850_000).value(), 850_000.0);
    }

    #[test]
    fn test_text_value() {
        assert_eq!(Magnitude::Text("500M".to_string()).value(), 500_000_000.0);
        assert_eq!(Magnitude::Text("Not disclosed".to_string()).value(), 0.0);
    }

    #[test]
    fn test_yaml_deserializes_both_forms() {
        let count: Magnitude = serde_yaml::from_str("850000").unwrap();
        assert_eq!(count, Magnitude::Count(850_000));

        let text: Magnitude = serde_yaml::from_str("\"180M\"").unwrap();
        assert_eq!(text, Magnitude::Text("180M".to_string()));
    }
}
