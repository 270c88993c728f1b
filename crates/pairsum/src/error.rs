//! Error types for argument validation

use thiserror::Error;

use crate::value::Value;

/// Errors raised while validating dynamic arguments.
///
/// The typed scan never fails; every variant here is produced before the
/// scan starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairSumError {
    /// Type mismatch error
    #[error("Type error: expected {expected}, got {got}")]
    TypeError {
        /// Expected type
        expected: String,
        /// Actual type received
        got: String,
    },

    /// Wrong number of arguments
    #[error("Arity error: expected {expected} arguments, got {got}")]
    ArityError {
        /// Expected argument count
        expected: usize,
        /// Actual argument count
        got: usize,
    },

    /// Value error
    #[error("Value error: {0}")]
    ValueError(String),
}

/// Result type alias for pairsum operations
pub type Result<T> = std::result::Result<T, PairSumError>;

/// Get a human-readable type name for a value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Unit => "()",
        Value::Bool(_) => "bool",
        Value::Char(_) => "char",
        Value::I8(_) => "i8",
        Value::I16(_) => "i16",
        Value::I32(_) => "i32",
        Value::I64(_) => "i64",
        Value::I128(_) => "i128",
        Value::Isize(_) => "isize",
        Value::U8(_) => "u8",
        Value::U16(_) => "u16",
        Value::U32(_) => "u32",
        Value::U64(_) => "u64",
        Value::U128(_) => "u128",
        Value::Usize(_) => "usize",
        Value::F32(_) => "f32",
        Value::F64(_) => "f64",
        Value::String(_) => "String",
        Value::Vec(_) => "Vec",
        Value::Tuple(_) => "tuple",
        Value::Array(_) => "array",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_error_display() {
        let err = PairSumError::TypeError {
            expected: "integer".to_string(),
            got: "f64".to_string(),
        };
        assert_eq!(err.to_string(), "Type error: expected integer, got f64");
    }

    #[test]
    fn test_arity_error_display() {
        let err = PairSumError::ArityError {
            expected: 2,
            got: 3,
        };
        assert_eq!(err.to_string(), "Arity error: expected 2 arguments, got 3");
    }

    #[test]
    fn test_type_name_integers() {
        assert_eq!(type_name(&Value::I64(0)), "i64");
        assert_eq!(type_name(&Value::U128(0)), "u128");
    }
}
