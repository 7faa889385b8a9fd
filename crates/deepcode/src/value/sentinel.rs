//! The empty-sequence sentinel.
//!
//! Operators whose result type is a scalar report "the sequence was empty"
//! by returning [`SENTINEL`] instead. Wherever a sequence is expected, a
//! scalar equal to the sentinel reads back as the empty sequence. This is
//! the only place that knows the number.
//!
//! A genuine input value of 256 is indistinguishable from the sentinel.
//! Other interpreters of the same DSL rely on this exact convention, so it
//! is kept rather than widened.

use super::Value;
use crate::error::{type_name, EvalError};

/// The scalar that stands for "empty sequence".
pub const SENTINEL: i64 = 256;

/// The scalar an operator returns in place of an empty sequence.
pub fn empty_scalar() -> Value {
    Value::Scalar(SENTINEL)
}

/// Check whether a value is the sentinel scalar.
pub fn is_sentinel(value: &Value) -> bool {
    matches!(value, Value::Scalar(n) if *n == SENTINEL)
}

/// Narrow a value to the sequence an operator expects.
///
/// - `Sequence(xs)` yields `xs` (including the bare empty sequence)
/// - `Scalar(256)` yields the empty sequence
/// - any other scalar is an invariant violation
///
/// ```
/// use deepcode::value::{as_sequence, Value};
///
/// assert_eq!(as_sequence(&Value::sequence(vec![1, 2])).unwrap(), &[1, 2]);
/// assert!(as_sequence(&Value::Scalar(256)).unwrap().is_empty());
/// assert!(as_sequence(&Value::Scalar(3)).is_err());
/// ```
pub fn as_sequence(value: &Value) -> Result<&[i64], EvalError> {
    match value {
        Value::Sequence(xs) => Ok(xs.as_slice()),
        Value::Scalar(n) if *n == SENTINEL => Ok(&[]),
        Value::Scalar(n) => Err(EvalError::invariant(format!(
            "expected [int] or the empty sentinel, got {} {}",
            type_name(value),
            n
        ))),
    }
}
