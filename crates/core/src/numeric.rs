//! Parsing for the legacy numeric-valued text columns.
//!
//! Warehouse dimensions and capacities are stored as text and parsed at
//! use time. Parsing failures surface as validation errors naming the
//! offending field rather than panicking on bad rows.

/// Parse a numeric-valued text column.
///
/// Accepts surrounding whitespace. Rejects non-finite values so a stored
/// `"NaN"` can never pass a boundary or capacity check.
pub fn parse_numeric(field: &str, raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("{field} is not numeric: {raw:?}"))?;
    if !value.is_finite() {
        return Err(format!("{field} is not finite: {raw:?}"));
    }
    Ok(value)
}

/// Parse a numeric-valued text column that must be strictly positive
/// (lengths, widths, capacity budgets).
pub fn parse_positive(field: &str, raw: &str) -> Result<f64, String> {
    let value = parse_numeric(field, raw)?;
    if value <= 0.0 {
        return Err(format!("{field} must be positive, got {value}"));
    }
    Ok(value)
}

/// Parse a numeric-valued text column that must be zero or greater
/// (origins, remaining capacity).
pub fn parse_non_negative(field: &str, raw: &str) -> Result<f64, String> {
    let value = parse_numeric(field, raw)?;
    if value < 0.0 {
        return Err(format!("{field} must not be negative, got {value}"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_and_padded_numbers() {
        assert_eq!(parse_numeric("x", "100").unwrap(), 100.0);
        assert_eq!(parse_numeric("x", " 42.5 ").unwrap(), 42.5);
    }

    #[test]
    fn test_rejects_garbage() {
        let err = parse_numeric("capacity", "10 pallets").unwrap_err();
        assert!(err.contains("capacity"));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(parse_numeric("x", "NaN").is_err());
        assert!(parse_numeric("x", "inf").is_err());
    }

    #[test]
    fn test_positive_rejects_zero() {
        assert!(parse_positive("y", "0").is_err());
        assert!(parse_positive("y", "-3").is_err());
        assert_eq!(parse_positive("y", "3").unwrap(), 3.0);
    }

    #[test]
    fn test_non_negative_allows_zero() {
        assert_eq!(parse_non_negative("x", "0").unwrap(), 0.0);
        assert!(parse_non_negative("x", "-0.1").is_err());
    }
}
