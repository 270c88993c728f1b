//! Validating entry points for dynamically-typed arguments.
//!
//! Every argument is checked before the scan starts. Integers of any width
//! are widened to `i128` so mixed-width sequences compare by numeric value.

use std::fmt;

use tracing::debug;

use crate::error::type_name;
use crate::{find_pair, Pair, PairSumError, Result, Value};

/// Number of arguments [`find_pair_args`] accepts
pub const ARITY: usize = 2;

/// Validate `sequence` and `target`, then run [`find_pair`].
///
/// # Errors
///
/// Returns `TypeError` if `sequence` is not a vec, array or tuple, if any
/// element is not an integer, or if `target` is not an integer.
/// Returns `ValueError` if an integer does not fit in `i128`.
pub fn find_pair_value(sequence: &Value, target: &Value) -> Result<Option<Pair>> {
    if !sequence.is_sequence() {
        debug!(got = type_name(sequence), "sequence argument rejected");
        return Err(PairSumError::TypeError {
            expected: "sequence of integers".to_string(),
            got: type_name(sequence).to_string(),
        });
    }

    let numbers = sequence
        .as_slice()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, item)| widen(item, Argument::Element(index)))
        .collect::<Result<Vec<i128>>>()?;

    let target = widen(target, Argument::Target)?;

    Ok(find_pair(&numbers, target))
}

/// Call [`find_pair_value`] with a positional argument list.
///
/// Returns `[i, j]` as a vec of `usize`, or an empty vec when no pair exists.
///
/// # Errors
///
/// Returns `ArityError` unless exactly two arguments are given, plus every
/// error [`find_pair_value`] can return.
pub fn find_pair_args(args: &[Value]) -> Result<Value> {
    let [sequence, target] = args else {
        debug!(got = args.len(), "wrong number of arguments");
        return Err(PairSumError::ArityError {
            expected: ARITY,
            got: args.len(),
        });
    };

    let indices = match find_pair_value(sequence, target)? {
        Some(pair) => vec![Value::Usize(pair.first), Value::Usize(pair.second)],
        None => Vec::new(),
    };
    Ok(Value::vec(indices))
}

/// Which argument is being widened; only rendered on failure.
#[derive(Debug, Clone, Copy)]
enum Argument {
    Element(usize),
    Target,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Element(index) => write!(f, "element {}", index),
            Argument::Target => write!(f, "target"),
        }
    }
}

fn widen(value: &Value, what: Argument) -> Result<i128> {
    if let Some(n) = value.as_i128() {
        return Ok(n);
    }

    debug!(%what, got = type_name(value), "argument rejected");
    if value.is_integer() {
        Err(PairSumError::ValueError(format!(
            "{} {} does not fit in i128",
            what, value
        )))
    } else {
        Err(PairSumError::TypeError {
            expected: format!("integer for {}", what),
            got: type_name(value).to_string(),
        })
    }
}
