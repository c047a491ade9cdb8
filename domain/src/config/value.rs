//! Validation primitives
//!
//! Pure conversions from a raw config value into a bounded typed value.
//! Each primitive takes the key (used in error messages), the raw string
//! and its bounds. Out-of-bounds input always fails; nothing is clamped.

use super::error::{ConfigError, Result};
use crate::util::truncate_chars;
use std::num::IntErrorKind;

/// Canonical spelling of a true boolean
pub const VALUE_TRUE: &str = "true";
/// Canonical spelling of a false boolean
pub const VALUE_FALSE: &str = "false";

/// Parse a base-10 integer within `[min, max]`.
pub fn parse_int(key: &str, value: &str, min: i64, max: i64) -> Result<i64> {
    let parsed = match value.parse::<i64>() {
        Ok(n) => n,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ConfigError::out_of_range(key, value, min, max)
                }
                _ => ConfigError::malformed(key, value, "expected an integer"),
            });
        }
    };

    if parsed < min || parsed > max {
        return Err(ConfigError::out_of_range(key, value, min, max));
    }
    Ok(parsed)
}

/// Parse a floating point number within `[min, max]` (inclusive).
pub fn parse_float(key: &str, value: &str, min: f64, max: f64) -> Result<f64> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_| ConfigError::malformed(key, value, "expected a number"))?;

    if parsed.is_nan() {
        return Err(ConfigError::malformed(key, value, "expected a number"));
    }
    if parsed < min || parsed > max {
        return Err(ConfigError::out_of_range(key, value, min, max));
    }
    Ok(parsed)
}

/// Parse one of the two canonical boolean tokens.
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        VALUE_TRUE => Ok(true),
        VALUE_FALSE => Ok(false),
        _ => Err(ConfigError::malformed(
            key,
            value,
            format!("expected \"{VALUE_TRUE}\" or \"{VALUE_FALSE}\""),
        )),
    }
}

/// Canonical token for a boolean value
pub fn format_bool(value: bool) -> &'static str {
    if value { VALUE_TRUE } else { VALUE_FALSE }
}

/// Copy at most `capacity - 1` characters of `value`.
///
/// Truncation is silent: an over-long value is not an error.
pub fn parse_fixed_string(value: &str, capacity: usize) -> String {
    truncate_chars(value, capacity.saturating_sub(1)).to_string()
}

/// Find `value` in an ordered list of captions and return its index.
///
/// The first exact match wins.
pub fn parse_caption(key: &str, value: &str, captions: &[&str]) -> Result<usize> {
    captions
        .iter()
        .position(|caption| *caption == value)
        .ok_or_else(|| {
            ConfigError::malformed(
                key,
                value,
                format!("expected one of: {}", captions.join(", ")),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Integers ====================

    #[test]
    fn test_int_accepts_every_value_in_range() {
        for n in 1..=100 {
            assert_eq!(parse_int("MaxFPS", &n.to_string(), 1, 100).unwrap(), n);
        }
    }

    #[test]
    fn test_int_rejects_values_outside_range() {
        for n in [-1, 0, 101, 5000] {
            let err = parse_int("MaxFPS", &n.to_string(), 1, 100).unwrap_err();
            assert!(matches!(err, ConfigError::OutOfRange { .. }), "{n}");
        }
    }

    #[test]
    fn test_int_rejects_non_numeric() {
        for raw in ["", "abc", "12abc", "1.5", "0x10", " 7"] {
            let err = parse_int("Port", raw, 1, 65535).unwrap_err();
            assert!(matches!(err, ConfigError::Malformed { .. }), "{raw:?}");
        }
    }

    #[test]
    fn test_int_overflow_is_out_of_range() {
        let err = parse_int("Port", "99999999999999999999999", 1, 65535).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    // ==================== Floats ====================

    #[test]
    fn test_float_bounds_are_inclusive() {
        assert_eq!(parse_float("ScaleFactor", "1.0", 1.0, 10.0).unwrap(), 1.0);
        assert_eq!(parse_float("ScaleFactor", "10", 1.0, 10.0).unwrap(), 10.0);
        assert_eq!(parse_float("ScaleFactor", "2.5", 1.0, 10.0).unwrap(), 2.5);
    }

    #[test]
    fn test_float_out_of_range() {
        let err = parse_float("ScaleFactor", "0.99", 1.0, 10.0).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
        let err = parse_float("ScaleFactor", "inf", 1.0, 10.0).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { .. }));
    }

    #[test]
    fn test_float_rejects_non_numeric() {
        for raw in ["", "fast", "1,5", "NaN"] {
            let err = parse_float("ScaleFactor", raw, 1.0, 10.0).unwrap_err();
            assert!(matches!(err, ConfigError::Malformed { .. }), "{raw:?}");
        }
    }

    // ==================== Booleans ====================

    #[test]
    fn test_bool_canonical_tokens() {
        assert!(parse_bool("Enabled", "true").unwrap());
        assert!(!parse_bool("Enabled", "false").unwrap());
        assert_eq!(format_bool(parse_bool("Enabled", "true").unwrap()), "true");
        assert_eq!(format_bool(parse_bool("Enabled", "false").unwrap()), "false");
    }

    #[test]
    fn test_bool_rejects_other_tokens() {
        for raw in ["True", "yes", "1", "on", ""] {
            let err = parse_bool("Enabled", raw).unwrap_err();
            assert!(matches!(err, ConfigError::Malformed { .. }), "{raw:?}");
        }
    }

    // ==================== Strings ====================

    #[test]
    fn test_fixed_string_truncates_silently() {
        let long = "a".repeat(300);
        let stored = parse_fixed_string(&long, 256);
        assert_eq!(stored.chars().count(), 255);
    }

    #[test]
    fn test_fixed_string_keeps_short_values() {
        assert_eq!(parse_fixed_string("10.0.0.5", 256), "10.0.0.5");
        assert_eq!(parse_fixed_string("abcd", 5), "abcd");
        assert_eq!(parse_fixed_string("abcde", 5), "abcd");
    }

    // ==================== Captions ====================

    #[test]
    fn test_caption_index() {
        let captions = ["Portrait", "Landscape"];
        assert_eq!(parse_caption("Orientation", "Portrait", &captions).unwrap(), 0);
        assert_eq!(parse_caption("Orientation", "Landscape", &captions).unwrap(), 1);
    }

    #[test]
    fn test_caption_unknown_names_value() {
        let captions = ["Portrait", "Landscape"];
        let err = parse_caption("Orientation", "landscape", &captions).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
        assert!(err.to_string().contains("landscape"));
    }
}
