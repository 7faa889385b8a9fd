//! Unary operators that reduce a sequence to a scalar
//!
//! Where a reduction has no meaningful result for an empty sequence
//! (`HEAD`, `LAST`, `MINIMUM`, `MAXIMUM`) the empty-sequence sentinel is
//! returned instead. `SUM` and `COUNT` have a natural answer of zero.

use super::{OpName, Predicate, UnaryOperator};
use crate::error::Result;
use crate::value::{as_sequence, empty_scalar, Value};

/// Map a possibly-missing scalar result onto the sentinel convention.
fn scalar_or_empty(result: Option<i64>) -> Value {
    result.map(Value::Scalar).unwrap_or_else(empty_scalar)
}

/// `HEAD`: the first element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Head;

impl UnaryOperator for Head {
    fn name(&self) -> OpName {
        OpName::Head
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        Ok(scalar_or_empty(xs.first().copied()))
    }
}

/// `LAST`: the final element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Last;

impl UnaryOperator for Last {
    fn name(&self) -> OpName {
        OpName::Last
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        Ok(scalar_or_empty(xs.last().copied()))
    }
}

/// `MINIMUM`: the smallest element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimum;

impl UnaryOperator for Minimum {
    fn name(&self) -> OpName {
        OpName::Minimum
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        Ok(scalar_or_empty(xs.iter().copied().min()))
    }
}

/// `MAXIMUM`: the largest element.
///
/// ```
/// use deepcode::ops::{reduce::Maximum, UnaryOperator};
/// use deepcode::Value;
///
/// let max = Maximum.apply(&Value::sequence(vec![3, 1, 4, 1, 5])).unwrap();
/// assert_eq!(max, Value::Scalar(5));
///
/// // The empty sentinel passes through unchanged
/// assert_eq!(Maximum.apply(&Value::Scalar(256)).unwrap(), Value::Scalar(256));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Maximum;

impl UnaryOperator for Maximum {
    fn name(&self) -> OpName {
        OpName::Maximum
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        Ok(scalar_or_empty(xs.iter().copied().max()))
    }
}

/// `SUM`: the wrapping sum of all elements, zero when empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl UnaryOperator for Sum {
    fn name(&self) -> OpName {
        OpName::Sum
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        Ok(Value::Scalar(xs.iter().fold(0i64, |acc, &x| acc.wrapping_add(x))))
    }
}

/// `COUNT[p]`: how many elements satisfy `p`.
#[derive(Debug, Clone, Copy)]
pub struct CountBy(pub Predicate);

impl UnaryOperator for CountBy {
    fn name(&self) -> OpName {
        OpName::Count(self.0)
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        let count = xs.iter().filter(|&&x| self.0.test(x)).count();
        Ok(Value::Scalar(count as i64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EvalError;

    fn seq(xs: &[i64]) -> Value {
        Value::from(xs)
    }

    #[test]
    fn test_maximum() {
        assert_eq!(
            Maximum.apply(&seq(&[3, 1, 4, 1, 5])).unwrap(),
            Value::Scalar(5)
        );
        assert_eq!(
            Maximum.apply(&seq(&[-2, -9, -1])).unwrap(),
            Value::Scalar(-1)
        );
        assert_eq!(Maximum.apply(&seq(&[7])).unwrap(), Value::Scalar(7));
    }

    #[test]
    fn test_maximum_of_empty_is_sentinel() {
        assert_eq!(Maximum.apply(&empty_scalar()).unwrap(), empty_scalar());
        assert_eq!(Maximum.apply(&seq(&[])).unwrap(), empty_scalar());
    }

    #[test]
    fn test_maximum_rejects_plain_scalar() {
        let result = Maximum.apply(&Value::Scalar(42));
        assert!(matches!(result, Err(EvalError::InvariantViolation { .. })));
    }

    #[test]
    fn test_minimum() {
        assert_eq!(
            Minimum.apply(&seq(&[3, 1, 4, 1, 5])).unwrap(),
            Value::Scalar(1)
        );
        assert_eq!(Minimum.apply(&empty_scalar()).unwrap(), empty_scalar());
    }

    #[test]
    fn test_head_and_last() {
        assert_eq!(Head.apply(&seq(&[9, 8, 7])).unwrap(), Value::Scalar(9));
        assert_eq!(Last.apply(&seq(&[9, 8, 7])).unwrap(), Value::Scalar(7));
        assert_eq!(Head.apply(&seq(&[])).unwrap(), empty_scalar());
        assert_eq!(Last.apply(&empty_scalar()).unwrap(), empty_scalar());
    }

    #[test]
    fn test_sum() {
        assert_eq!(Sum.apply(&seq(&[1, 2, 3])).unwrap(), Value::Scalar(6));
        assert_eq!(Sum.apply(&empty_scalar()).unwrap(), Value::Scalar(0));
    }

    #[test]
    fn test_count() {
        let xs = seq(&[-3, -2, 0, 1, 4]);
        assert_eq!(
            CountBy(Predicate::Positive).apply(&xs).unwrap(),
            Value::Scalar(2)
        );
        assert_eq!(
            CountBy(Predicate::Odd).apply(&xs).unwrap(),
            Value::Scalar(2)
        );
        assert_eq!(
            CountBy(Predicate::Even).apply(&empty_scalar()).unwrap(),
            Value::Scalar(0)
        );
    }
}
