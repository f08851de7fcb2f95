//! Price normalization.
//!
//! Catalog pages render prices with currency signs, whitespace and grouping
//! separators. Normalization keeps only the decimal digits and parses them as
//! one integer in the smallest currency unit, so "1 234 ₽" becomes 1234 and
//! "12.50" becomes 1250. Separator positions are not interpreted.

use thiserror::Error;

/// Raised when a price string has no parsable digits.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("price text {0:?} contains no parsable digits")]
pub struct PriceFormatError(pub String);

/// Strips every non-digit character and parses the rest as a base-10 integer.
pub fn normalize_price(raw: &str) -> Result<i64, PriceFormatError> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse::<i64>()
        .map_err(|_| PriceFormatError(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_currency_and_spacing() {
        assert_eq!(normalize_price("1 234 ₽"), Ok(1234));
        assert_eq!(normalize_price("449 руб."), Ok(449));
    }

    #[test]
    fn concatenates_digits_across_separators() {
        assert_eq!(normalize_price("12.50"), Ok(1250));
        assert_eq!(normalize_price("1,234.56"), Ok(123456));
    }

    #[test]
    fn empty_string_is_an_error() {
        assert_eq!(
            normalize_price(""),
            Err(PriceFormatError(String::new()))
        );
    }

    #[test]
    fn digitless_string_is_an_error() {
        assert_eq!(
            normalize_price("abc"),
            Err(PriceFormatError("abc".to_string()))
        );
    }
}
