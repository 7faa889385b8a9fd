//! Operators of the list DSL
//!
//! Every primitive is a pure, total function over [`Value`]s. Unary and
//! binary primitives implement [`UnaryOperator`] and [`BinaryOperator`];
//! [`Operator`] erases the difference so the [`Library`] and the evaluator
//! can dispatch on arity alone.

pub mod binary;
pub mod lambda;
pub mod library;
pub mod reduce;
pub mod transform;

pub use lambda::{BinFn, IntFn, Predicate};
pub use library::{lookup_operator, Library};

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{EvalError, Result};
use crate::value::Value;

// ═══════════════════════════════════════════════════════════════════════
// Operator Identifiers
// ═══════════════════════════════════════════════════════════════════════

/// Identifier of a DSL primitive.
///
/// Used both as the library key and, through `Display`, as the printed
/// name. Higher-order primitives carry their lambda.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpName {
    /// `HEAD`
    Head,
    /// `LAST`
    Last,
    /// `MINIMUM`
    Minimum,
    /// `MAXIMUM`
    Maximum,
    /// `SUM`
    Sum,
    /// `REVERSE`
    Reverse,
    /// `SORT`
    Sort,
    /// `TAKE`
    Take,
    /// `DROP`
    Drop,
    /// `ACCESS`
    Access,
    /// `MAP[f]`
    Map(IntFn),
    /// `FILTER[p]`
    Filter(Predicate),
    /// `COUNT[p]`
    Count(Predicate),
    /// `SCANL1[g]`
    Scanl1(BinFn),
    /// `ZIPWITH[g]`
    ZipWith(BinFn),
}

impl OpName {
    /// The bare primitive name, without any lambda.
    pub fn base_name(&self) -> &'static str {
        match self {
            OpName::Head => "HEAD",
            OpName::Last => "LAST",
            OpName::Minimum => "MINIMUM",
            OpName::Maximum => "MAXIMUM",
            OpName::Sum => "SUM",
            OpName::Reverse => "REVERSE",
            OpName::Sort => "SORT",
            OpName::Take => "TAKE",
            OpName::Drop => "DROP",
            OpName::Access => "ACCESS",
            OpName::Map(_) => "MAP",
            OpName::Filter(_) => "FILTER",
            OpName::Count(_) => "COUNT",
            OpName::Scanl1(_) => "SCANL1",
            OpName::ZipWith(_) => "ZIPWITH",
        }
    }
}

impl fmt::Display for OpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpName::Map(g) => write!(f, "MAP[{}]", g),
            OpName::Filter(p) => write!(f, "FILTER[{}]", p),
            OpName::Count(p) => write!(f, "COUNT[{}]", p),
            OpName::Scanl1(g) => write!(f, "SCANL1[{}]", g),
            OpName::ZipWith(g) => write!(f, "ZIPWITH[{}]", g),
            plain => f.write_str(plain.base_name()),
        }
    }
}

impl FromStr for OpName {
    type Err = EvalError;

    /// Parse exactly what `Display` prints.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let unknown = || EvalError::UnknownOperator {
            name: s.to_string(),
        };

        let (base, lambda) = match s.find('[') {
            Some(open) => {
                let rest = s[open + 1..].strip_suffix(']').ok_or_else(unknown)?;
                (&s[..open], Some(rest))
            }
            None => (s, None),
        };

        let name = match (base, lambda) {
            ("HEAD", None) => OpName::Head,
            ("LAST", None) => OpName::Last,
            ("MINIMUM", None) => OpName::Minimum,
            ("MAXIMUM", None) => OpName::Maximum,
            ("SUM", None) => OpName::Sum,
            ("REVERSE", None) => OpName::Reverse,
            ("SORT", None) => OpName::Sort,
            ("TAKE", None) => OpName::Take,
            ("DROP", None) => OpName::Drop,
            ("ACCESS", None) => OpName::Access,
            ("MAP", Some(sym)) => OpName::Map(IntFn::from_symbol(sym).ok_or_else(unknown)?),
            ("FILTER", Some(sym)) => {
                OpName::Filter(Predicate::from_symbol(sym).ok_or_else(unknown)?)
            }
            ("COUNT", Some(sym)) => {
                OpName::Count(Predicate::from_symbol(sym).ok_or_else(unknown)?)
            }
            ("SCANL1", Some(sym)) => OpName::Scanl1(BinFn::from_symbol(sym).ok_or_else(unknown)?),
            ("ZIPWITH", Some(sym)) => {
                OpName::ZipWith(BinFn::from_symbol(sym).ok_or_else(unknown)?)
            }
            _ => return Err(unknown()),
        };
        Ok(name)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Operator Traits
// ═══════════════════════════════════════════════════════════════════════

/// A one-argument primitive.
pub trait UnaryOperator: Send + Sync {
    /// The identifier this operator is registered under.
    fn name(&self) -> OpName;

    /// Apply the operator.
    fn apply(&self, arg: &Value) -> Result<Value>;
}

/// A two-argument primitive.
pub trait BinaryOperator: Send + Sync {
    /// The identifier this operator is registered under.
    fn name(&self) -> OpName;

    /// Apply the operator to its arguments in declared order.
    fn apply(&self, lhs: &Value, rhs: &Value) -> Result<Value>;
}

/// A library entry of either arity.
#[derive(Clone)]
pub enum Operator {
    /// One argument
    Unary(Arc<dyn UnaryOperator>),
    /// Two arguments
    Binary(Arc<dyn BinaryOperator>),
}

impl Operator {
    /// Wrap a unary primitive.
    pub fn unary(op: impl UnaryOperator + 'static) -> Self {
        Operator::Unary(Arc::new(op))
    }

    /// Wrap a binary primitive.
    pub fn binary(op: impl BinaryOperator + 'static) -> Self {
        Operator::Binary(Arc::new(op))
    }

    /// The identifier this operator is registered under.
    pub fn name(&self) -> OpName {
        match self {
            Operator::Unary(op) => op.name(),
            Operator::Binary(op) => op.name(),
        }
    }

    /// Number of arguments the operator takes.
    pub fn arity(&self) -> usize {
        match self {
            Operator::Unary(_) => 1,
            Operator::Binary(_) => 2,
        }
    }

    /// Apply the operator to already-evaluated arguments.
    ///
    /// Any invariant violation is tagged with this operator's name.
    pub fn apply(&self, args: &[Value]) -> Result<Value> {
        let result = match (self, args) {
            (Operator::Unary(op), [arg]) => op.apply(arg),
            (Operator::Binary(op), [lhs, rhs]) => op.apply(lhs, rhs),
            _ => Err(EvalError::invariant(format!(
                "expected {} argument(s), got {}",
                self.arity(),
                args.len()
            ))),
        };
        result.map_err(|e| e.in_operator(self.name()))
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator({}/{})", self.name(), self.arity())
    }
}
