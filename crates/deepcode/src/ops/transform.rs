//! Unary operators that map a sequence to a sequence

use super::{BinFn, IntFn, OpName, Predicate, UnaryOperator};
use crate::error::Result;
use crate::value::{as_sequence, Value};

/// `REVERSE`
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse;

impl UnaryOperator for Reverse {
    fn name(&self) -> OpName {
        OpName::Reverse
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        Ok(xs.iter().rev().copied().collect())
    }
}

/// `SORT`: ascending order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sort;

impl UnaryOperator for Sort {
    fn name(&self) -> OpName {
        OpName::Sort
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let mut xs = as_sequence(arg)?.to_vec();
        xs.sort_unstable();
        Ok(Value::sequence(xs))
    }
}

/// `MAP[f]`
#[derive(Debug, Clone, Copy)]
pub struct MapWith(pub IntFn);

impl UnaryOperator for MapWith {
    fn name(&self) -> OpName {
        OpName::Map(self.0)
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        Ok(xs.iter().map(|&x| self.0.apply(x)).collect())
    }
}

/// `FILTER[p]`: keep elements satisfying `p`, preserving order.
#[derive(Debug, Clone, Copy)]
pub struct FilterBy(pub Predicate);

impl UnaryOperator for FilterBy {
    fn name(&self) -> OpName {
        OpName::Filter(self.0)
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        Ok(xs.iter().copied().filter(|&x| self.0.test(x)).collect())
    }
}

/// `SCANL1[g]`: running left fold seeded with the first element.
///
/// `SCANL1[+]([1, 2, 3]) == [1, 3, 6]`
#[derive(Debug, Clone, Copy)]
pub struct Scanl1(pub BinFn);

impl UnaryOperator for Scanl1 {
    fn name(&self) -> OpName {
        OpName::Scanl1(self.0)
    }

    fn apply(&self, arg: &Value) -> Result<Value> {
        let xs = as_sequence(arg)?;
        let mut out = Vec::with_capacity(xs.len());
        let mut acc: Option<i64> = None;
        for &x in xs {
            let next = match acc {
                Some(prev) => self.0.apply(prev, x),
                None => x,
            };
            out.push(next);
            acc = Some(next);
        }
        Ok(Value::sequence(out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::empty_scalar;

    fn seq(xs: &[i64]) -> Value {
        Value::from(xs)
    }

    #[test]
    fn test_reverse() {
        assert_eq!(Reverse.apply(&seq(&[1, 2, 3])).unwrap(), seq(&[3, 2, 1]));
        assert_eq!(Reverse.apply(&empty_scalar()).unwrap(), seq(&[]));
    }

    #[test]
    fn test_sort() {
        assert_eq!(
            Sort.apply(&seq(&[3, -1, 2, -1])).unwrap(),
            seq(&[-1, -1, 2, 3])
        );
    }

    #[test]
    fn test_map() {
        assert_eq!(
            MapWith(IntFn::Double).apply(&seq(&[1, -2])).unwrap(),
            seq(&[2, -4])
        );
        assert_eq!(
            MapWith(IntFn::Square).apply(&empty_scalar()).unwrap(),
            seq(&[])
        );
    }

    #[test]
    fn test_filter() {
        assert_eq!(
            FilterBy(Predicate::Negative)
                .apply(&seq(&[-3, 4, -1, 0]))
                .unwrap(),
            seq(&[-3, -1])
        );
    }

    #[test]
    fn test_scanl1() {
        assert_eq!(
            Scanl1(BinFn::Add).apply(&seq(&[1, 2, 3])).unwrap(),
            seq(&[1, 3, 6])
        );
        assert_eq!(
            Scanl1(BinFn::Max).apply(&seq(&[2, 1, 5, 3])).unwrap(),
            seq(&[2, 2, 5, 5])
        );
        assert_eq!(Scanl1(BinFn::Sub).apply(&seq(&[])).unwrap(), seq(&[]));
    }

    #[test]
    fn test_plain_scalar_rejected() {
        assert!(Reverse.apply(&Value::Scalar(3)).is_err());
        assert!(MapWith(IntFn::Inc).apply(&Value::Scalar(0)).is_err());
    }
}
