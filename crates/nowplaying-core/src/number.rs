//! Whole-string numeric coercion shared by the decoder and the projection layer.

/// Parses `s` as a number if the entire trimmed text is a float literal.
///
/// Empty or whitespace-only input is never a number, partial parses such as
/// `"12px"` are rejected, and a NaN result counts as "not a number". The
/// accepted grammar is that of [`str::parse::<f64>`], so every spelling of
/// infinity (`"inf"`, `"INF"`, `"infinity"`, `"-Infinity"`, in any letter
/// case) becomes an infinite number. `serde_json` writes non-finite numbers
/// as `null`, so such a value, even a title that reads `inf`, appears as
/// `null` in the JSON payload.
///
/// # Examples
///
/// ```rust
/// use nowplaying_core::try_coerce_number;
///
/// assert_eq!(try_coerce_number(" 042 "), Some(42.0));
/// assert_eq!(try_coerce_number("1e3"), Some(1000.0));
/// assert_eq!(try_coerce_number("12px"), None);
/// assert_eq!(try_coerce_number("   "), None);
/// ```
pub fn try_coerce_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_fraction_forms() {
        assert_eq!(try_coerce_number("0"), Some(0.0));
        assert_eq!(try_coerce_number("-7"), Some(-7.0));
        assert_eq!(try_coerce_number("+3.25"), Some(3.25));
        assert_eq!(try_coerce_number(".5"), Some(0.5));
        assert_eq!(try_coerce_number("5."), Some(5.0));
    }

    #[test]
    fn test_leading_zeros_are_decimal() {
        assert_eq!(try_coerce_number("042"), Some(42.0));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(try_coerce_number("\t 8.5\n"), Some(8.5));
    }

    #[test]
    fn test_empty_and_blank_are_not_numbers() {
        assert_eq!(try_coerce_number(""), None);
        assert_eq!(try_coerce_number("  "), None);
    }

    #[test]
    fn test_partial_numbers_are_rejected() {
        assert_eq!(try_coerce_number("12px"), None);
        assert_eq!(try_coerce_number("1 2"), None);
        assert_eq!(try_coerce_number("0x1F"), None);
    }

    #[test]
    fn test_nan_is_rejected() {
        assert_eq!(try_coerce_number("NaN"), None);
        assert_eq!(try_coerce_number("nan"), None);
    }

    #[test]
    fn test_infinity_is_accepted() {
        assert_eq!(try_coerce_number("inf"), Some(f64::INFINITY));
        assert_eq!(try_coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_infinity_spelling_is_case_insensitive() {
        for spelling in ["INF", "Inf", "infinity", "INFINITY", " iNfInItY "] {
            assert_eq!(try_coerce_number(spelling), Some(f64::INFINITY), "{spelling}");
        }
    }
}
