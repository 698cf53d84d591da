//! Lenient parsing of numeric request fields.
//!
//! Browsers and scripts send ids both as JSON numbers and as strings (path
//! segments copied into bodies). Both forms are accepted as long as they
//! denote a finite value of the right shape; anything else is a
//! `Validation` error naming the field.

use serde_json::Value;

use crate::error::CoreError;

/// Parse a strictly positive integer from a JSON number or decimal string.
///
/// Integral floats such as `45000.0` are accepted; fractions, zero,
/// negatives, booleans, and non-numeric strings are not.
pub fn positive_int(value: Option<&Value>, field: &str) -> Result<i64, CoreError> {
    let invalid = || CoreError::Validation(format!("{field} must be a positive integer"));

    let parsed = match value {
        None | Some(Value::Null) => {
            return Err(CoreError::Validation(format!("{field} is required")));
        }
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => i,
            None => {
                let f = n.as_f64().ok_or_else(invalid)?;
                if !f.is_finite() || f.fract() != 0.0 || f > i64::MAX as f64 {
                    return Err(invalid());
                }
                f as i64
            }
        },
        Some(Value::String(s)) => s.trim().parse::<i64>().map_err(|_| invalid())?,
        Some(_) => return Err(invalid()),
    };

    if parsed <= 0 {
        return Err(invalid());
    }
    Ok(parsed)
}

/// Parse a finite floating-point number from a JSON number or decimal string.
pub fn finite_number(value: Option<&Value>, field: &str) -> Result<f64, CoreError> {
    let invalid = || CoreError::Validation(format!("{field} must be a finite number"));

    let parsed = match value {
        None | Some(Value::Null) => {
            return Err(CoreError::Validation(format!("{field} is required")));
        }
        Some(Value::Number(n)) => n.as_f64().ok_or_else(invalid)?,
        Some(Value::String(s)) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        Some(_) => return Err(invalid()),
    };

    if !parsed.is_finite() {
        return Err(invalid());
    }
    Ok(parsed)
}
