//! Utility functions and helpers for currency amounts

use once_cell::sync::OnceCell;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Format a non-negative integer with thousands separators
pub fn format_number<T: ToString>(n: T) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let mut count = 0;
    for c in s.chars().rev() {
        if count == 3 {
            result.push(',');
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    result.chars().rev().collect()
}

/// Format an amount for display, e.g. `-1234.5` -> `"-1,234.50"`
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    format!("{}{}.{}", sign, format_number(int_part), frac_part)
}

/// Parse a currency-formatted string into a decimal amount.
///
/// Every character outside `[0-9.-]` is stripped first (so `"$1,234.56"`
/// becomes `"1234.56"`), then the longest leading number is taken, the same
/// way a lenient float parser would read it: `"12.5.3"` reads as `12.5`.
/// Returns `None` when no digits can be read, and also when the number lies
/// outside the range of [`Decimal`] (past `Decimal::MAX`); callers treat such
/// amounts as unreadable.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    static NON_NUMERIC: OnceCell<Regex> = OnceCell::new();
    static LEADING_NUMBER: OnceCell<Regex> = OnceCell::new();
    let non_numeric = NON_NUMERIC.get_or_init(|| Regex::new(r"[^0-9.-]+").unwrap());
    let leading = LEADING_NUMBER.get_or_init(|| Regex::new(r"^-?(\d+\.?\d*|\.\d+)").unwrap());

    let stripped = non_numeric.replace_all(raw, "");
    let number = leading.find(&stripped)?.as_str();

    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let digits = digits.trim_end_matches('.');
    let normalized = if digits.starts_with('.') {
        format!("{}0{}", sign, digits)
    } else {
        format!("{}{}", sign, digits)
    };

    Decimal::from_str(&normalized).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec("1234.56")), "1,234.56");
        assert_eq!(format_amount(dec("-1200")), "-1,200.00");
        assert_eq!(format_amount(dec("0.5")), "0.50");
        assert_eq!(format_amount(dec("3000")), "3,000.00");
    }

    #[test]
    fn test_parse_amount_strips_formatting() {
        assert_eq!(parse_amount("1,234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("$1,200.00"), Some(dec("1200.00")));
        assert_eq!(parse_amount("-1200.00"), Some(dec("-1200.00")));
        assert_eq!(parse_amount("2000"), Some(dec("2000")));
    }

    #[test]
    fn test_parse_amount_leading_number() {
        assert_eq!(parse_amount("12.5.3"), Some(dec("12.5")));
        assert_eq!(parse_amount("12."), Some(dec("12")));
        assert_eq!(parse_amount(".5"), Some(dec("0.5")));
        assert_eq!(parse_amount("-.5"), Some(dec("-0.5")));
        assert_eq!(parse_amount("10-5"), Some(dec("10")));
    }

    #[test]
    fn test_parse_amount_without_digits() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("N/A"), None);
        assert_eq!(parse_amount("-"), None);
        assert_eq!(parse_amount("--5"), None);
    }

    #[test]
    fn test_parse_amount_out_of_range() {
        assert_eq!(parse_amount("79228162514264337593543950335"), Some(Decimal::MAX));
        assert_eq!(parse_amount("$100,000,000,000,000,000,000,000,000,000"), None);
    }
}
