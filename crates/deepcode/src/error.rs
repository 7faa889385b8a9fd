//! Error types for deepcode evaluation

use thiserror::Error;

use crate::ops::OpName;
use crate::value::Value;

/// Errors raised while evaluating a program.
///
/// Evaluation is total over well-typed programs, so these are the only two
/// ways it can fail. An invariant violation means "reject this candidate";
/// an unknown operator means the library itself is misconfigured.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A narrowing or shape assumption failed at the boundary between the
    /// type checker and the evaluator.
    #[error("invariant violation{}: {message}", fmt_operator(.operator))]
    InvariantViolation {
        /// Operator that was being applied, if any
        operator: Option<OpName>,
        /// What went wrong
        message: String,
    },

    /// A program referenced an operator the library does not provide.
    #[error("unknown operator: {name}")]
    UnknownOperator {
        /// The name as written
        name: String,
    },
}

impl EvalError {
    /// Build an invariant violation not tied to a specific operator.
    pub fn invariant(message: impl Into<String>) -> Self {
        EvalError::InvariantViolation {
            operator: None,
            message: message.into(),
        }
    }

    /// Attach the operator being applied, unless one is already recorded.
    pub fn in_operator(self, op: OpName) -> Self {
        match self {
            EvalError::InvariantViolation {
                operator: None,
                message,
            } => EvalError::InvariantViolation {
                operator: Some(op),
                message,
            },
            other => other,
        }
    }

    /// Check whether this is an invariant violation.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, EvalError::InvariantViolation { .. })
    }
}

fn fmt_operator(operator: &Option<OpName>) -> String {
    match operator {
        Some(op) => format!(" in {}", op),
        None => String::new(),
    }
}

/// Errors raised while building or parsing a program.
///
/// These are construction-time defects and never reach the evaluator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgramError {
    /// Program text could not be parsed
    #[error("parse error at byte {position}: {message}")]
    Parse {
        /// Byte offset into the source
        position: usize,
        /// What the parser expected
        message: String,
    },

    /// An operator was applied to the wrong number of arguments
    #[error("{op} takes {expected} argument(s), got {got}")]
    Arity {
        /// The misapplied operator
        op: OpName,
        /// Arity declared by the library
        expected: usize,
        /// Number of arguments supplied
        got: usize,
    },

    /// A node referenced an input the program does not declare
    #[error("undeclared input: {name}")]
    UndeclaredInput {
        /// The input name
        name: String,
    },

    /// The program tree is deeper than the configured bound
    #[error("program depth {depth} exceeds limit {max}")]
    TooDeep {
        /// Actual depth
        depth: usize,
        /// Configured maximum
        max: usize,
    },

    /// The program names an operator the library does not provide
    #[error("unknown operator: {name}")]
    UnknownOperator {
        /// The name as written
        name: String,
    },
}

/// Result type alias for evaluation.
pub type Result<T> = std::result::Result<T, EvalError>;

/// Get a human-readable name for a value's shape.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Scalar(_) => "int",
        Value::Sequence(_) => "[int]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invariant_display_without_operator() {
        let err = EvalError::invariant("bad shape");
        assert_eq!(err.to_string(), "invariant violation: bad shape");
    }

    #[test]
    fn test_invariant_display_with_operator() {
        let err = EvalError::invariant("bad shape").in_operator(OpName::Maximum);
        assert_eq!(err.to_string(), "invariant violation in MAXIMUM: bad shape");
    }

    #[test]
    fn test_in_operator_keeps_innermost() {
        let err = EvalError::invariant("x")
            .in_operator(OpName::Head)
            .in_operator(OpName::Maximum);
        assert!(matches!(
            err,
            EvalError::InvariantViolation {
                operator: Some(OpName::Head),
                ..
            }
        ));
    }

    #[test]
    fn test_type_name() {
        assert_eq!(type_name(&Value::Scalar(1)), "int");
        assert_eq!(type_name(&Value::sequence(vec![1])), "[int]");
    }
}
