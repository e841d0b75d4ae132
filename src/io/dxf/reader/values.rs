//! Typed decoding of group code values
//!
//! Value lines are parsed after trimming surrounding whitespace, since writers
//! right-align integers (`"     1"`). Failures keep the code token and the raw
//! value so the caller can report exactly what was rejected.

use crate::error::{DxfError, Result, ValueKind};
use crate::types::Handle;

/// Decode an integer value
pub fn parse_int(code: &str, value: &str) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| invalid(code, value, ValueKind::Integer))
}

/// Decode a real value. Non-finite results (`"inf"`, `"NaN"`) are rejected.
pub fn parse_real(code: &str, value: &str) -> Result<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(invalid(code, value, ValueKind::Real)),
    }
}

/// Decode a hexadecimal handle value
pub fn parse_handle(code: &str, value: &str) -> Result<Handle> {
    Handle::from_hex(value).ok_or_else(|| invalid(code, value, ValueKind::Handle))
}

fn invalid(code: &str, value: &str, expected: ValueKind) -> DxfError {
    DxfError::InvalidValue {
        code: code.to_string(),
        value: value.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_trims_padding() {
        assert_eq!(parse_int(" 90", "     3").unwrap(), 3);
        assert_eq!(parse_int(" 70", "1\r").unwrap(), 1);
        assert_eq!(parse_int(" 70", "-2").unwrap(), -2);
    }

    #[test]
    fn test_parse_int_rejects_reals() {
        let err = parse_int(" 90", "3.5").unwrap_err();
        match err {
            DxfError::InvalidValue { code, value, expected } => {
                assert_eq!(code, " 90");
                assert_eq!(value, "3.5");
                assert_eq!(expected, ValueKind::Integer);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_real() {
        assert_eq!(parse_real(" 10", "1.25").unwrap(), 1.25);
        assert_eq!(parse_real(" 10", " -0.5 ").unwrap(), -0.5);
        assert_eq!(parse_real(" 42", "1e-3").unwrap(), 0.001);
        assert!(parse_real(" 10", "").is_err());
        assert!(parse_real(" 10", "abc").is_err());
        assert!(parse_real(" 10", "NaN").is_err());
        assert!(parse_real(" 10", "inf").is_err());
    }

    #[test]
    fn test_parse_handle() {
        assert_eq!(parse_handle("  5", "1F").unwrap(), Handle::new(0x1F));
        assert!(matches!(
            parse_handle("  5", "G1"),
            Err(DxfError::InvalidValue { expected: ValueKind::Handle, .. })
        ));
    }
}
