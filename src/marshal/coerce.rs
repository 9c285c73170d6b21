//! Scalar coercion rules
//!
//! Raw form input is always text; each leaf's declared type decides how
//! the text becomes a typed value. Failures return the message that the
//! orchestrator records in the error tree, with the offending input
//! embedded so callers can show the user what was rejected.
//!
//! Integer tokens tolerate surrounding ASCII whitespace. Floats parse as
//! genuine floating point; the historical behaviour of treating float
//! fields as integers was a defect and is not kept.

use crate::schema::ScalarType;

use super::store::Value;

/// Coerce `raw` to the declared scalar type, or return the message to
/// record against the field.
pub(crate) fn coerce(ty: ScalarType, raw: &str) -> Result<Value, String> {
    match ty {
        ScalarType::String => Ok(Value::Str(raw.to_owned())),
        ScalarType::Int => raw
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| format!("'{raw}' is not a whole number")),
        ScalarType::Float => raw
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| format!("'{raw}' is not a number")),
        ScalarType::Bool => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "on" | "yes" => Ok(Value::Bool(true)),
            "false" | "0" | "off" | "no" => Ok(Value::Bool(false)),
            _ => Err(format!("'{raw}' is not a boolean")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_identity() {
        assert_eq!(
            coerce(ScalarType::String, "  keep spaces "),
            Ok(Value::Str("  keep spaces ".into()))
        );
        assert_eq!(coerce(ScalarType::String, ""), Ok(Value::Str("".into())));
    }

    #[test]
    fn test_int_accepts_whole_number_tokens() {
        assert_eq!(coerce(ScalarType::Int, "42"), Ok(Value::Int(42)));
        assert_eq!(coerce(ScalarType::Int, " -7 "), Ok(Value::Int(-7)));
        assert_eq!(coerce(ScalarType::Int, "+3"), Ok(Value::Int(3)));
    }

    #[test]
    fn test_int_rejects_non_integers() {
        assert!(coerce(ScalarType::Int, "ten").is_err());
        assert!(coerce(ScalarType::Int, "4.5").is_err());
        assert!(coerce(ScalarType::Int, "").is_err());
    }

    #[test]
    fn test_float_parses_decimals() {
        assert_eq!(coerce(ScalarType::Float, "4.5"), Ok(Value::Float(4.5)));
        assert_eq!(coerce(ScalarType::Float, "10"), Ok(Value::Float(10.0)));
        assert_eq!(coerce(ScalarType::Float, "-0.25"), Ok(Value::Float(-0.25)));
        assert!(coerce(ScalarType::Float, "half").is_err());
    }

    #[test]
    fn test_bool_form_vocabulary() {
        for token in ["true", "1", "on", "YES"] {
            assert_eq!(coerce(ScalarType::Bool, token), Ok(Value::Bool(true)));
        }
        for token in ["false", "0", "off", "No"] {
            assert_eq!(coerce(ScalarType::Bool, token), Ok(Value::Bool(false)));
        }
        assert!(coerce(ScalarType::Bool, "maybe").is_err());
    }

    #[test]
    fn test_failure_message_names_the_input() {
        let err = coerce(ScalarType::Int, "ten").unwrap_err();
        assert!(err.contains("ten"));
    }
}
