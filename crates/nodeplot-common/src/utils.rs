//! Decimal text helpers shared by the loaders.

/// Rewrites a decimal-comma token (`"1,5"`) into the `.` form Rust parses.
///
/// Every comma is replaced, so the operation is idempotent.
pub fn normalize_decimal(token: &str) -> String {
    token.replace(',', ".")
}

/// Parses a decimal-comma token into a finite `f64`.
///
/// Returns `None` for anything that does not convert, and for `inf`/`NaN`
/// spellings which `f64::from_str` would otherwise accept.
pub fn parse_decimal(token: &str) -> Option<f64> {
    normalize_decimal(token.trim())
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_decimal() {
        assert_eq!(normalize_decimal("1,5"), "1.5");
        assert_eq!(normalize_decimal("-0,25"), "-0.25");
        assert_eq!(normalize_decimal("3"), "3");
        assert_eq!(normalize_decimal("1.5"), "1.5");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("1,5"), Some(1.5));
        assert_eq!(parse_decimal("-9,58496101"), Some(-9.584_961_01));
        assert_eq!(parse_decimal("2"), Some(2.0));
        assert_eq!(parse_decimal(" 0,0 "), Some(0.0));
        assert_eq!(parse_decimal("1,2,3"), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }
}
