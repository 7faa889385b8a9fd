//! Binary operators
//!
//! `TAKE`, `DROP` and `ACCESS` take an integer then a sequence. The integer
//! is used as is; only the sequence argument goes through sentinel
//! narrowing. `ZIPWITH[g]` takes two sequences.

use super::{BinFn, BinaryOperator, OpName};
use crate::error::{type_name, EvalError, Result};
use crate::value::{as_sequence, empty_scalar, Value};

/// Extract the integer argument of a binary operator.
fn as_int(value: &Value) -> Result<i64> {
    value.as_scalar().ok_or_else(|| {
        EvalError::invariant(format!("expected int, got {}", type_name(value)))
    })
}

/// Clamp a count to `0..=len`.
fn clamp_count(n: i64, len: usize) -> usize {
    usize::try_from(n).map_or(0, |n| n.min(len))
}

/// `TAKE n xs`: the first `n` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct Take;

impl BinaryOperator for Take {
    fn name(&self) -> OpName {
        OpName::Take
    }

    fn apply(&self, lhs: &Value, rhs: &Value) -> Result<Value> {
        let n = as_int(lhs)?;
        let xs = as_sequence(rhs)?;
        Ok(Value::from(&xs[..clamp_count(n, xs.len())]))
    }
}

/// `DROP n xs`: everything after the first `n` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct DropFirst;

impl BinaryOperator for DropFirst {
    fn name(&self) -> OpName {
        OpName::Drop
    }

    fn apply(&self, lhs: &Value, rhs: &Value) -> Result<Value> {
        let n = as_int(lhs)?;
        let xs = as_sequence(rhs)?;
        Ok(Value::from(&xs[clamp_count(n, xs.len())..]))
    }
}

/// `ACCESS n xs`: the zero-based `n`th element, or the sentinel when out of
/// range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Access;

impl BinaryOperator for Access {
    fn name(&self) -> OpName {
        OpName::Access
    }

    fn apply(&self, lhs: &Value, rhs: &Value) -> Result<Value> {
        let n = as_int(lhs)?;
        let xs = as_sequence(rhs)?;
        let element = usize::try_from(n).ok().and_then(|i| xs.get(i)).copied();
        Ok(element.map(Value::Scalar).unwrap_or_else(empty_scalar))
    }
}

/// `ZIPWITH[g] xs ys`: pairwise combination, truncated to the shorter input.
#[derive(Debug, Clone, Copy)]
pub struct ZipWith(pub BinFn);

impl BinaryOperator for ZipWith {
    fn name(&self) -> OpName {
        OpName::ZipWith(self.0)
    }

    fn apply(&self, lhs: &Value, rhs: &Value) -> Result<Value> {
        let xs = as_sequence(lhs)?;
        let ys = as_sequence(rhs)?;
        Ok(xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| self.0.apply(x, y))
            .collect())
    }
}
