//! # deepcode
//!
//! Value model, operator library and evaluator for a DeepCoder-style list
//! DSL, as used inside a program-synthesis search loop.
//!
//! A search loop builds candidate [`Program`]s, runs them on example inputs
//! with an [`Evaluator`], and keeps the ones whose outputs match. Evaluation
//! is deterministic and total over well-typed programs: the only failures
//! are [`EvalError::InvariantViolation`] (a shape assumption broke, so the
//! candidate is rejected) and [`EvalError::UnknownOperator`].
//!
//! ## Architecture
//!
//! - **Value**: `Scalar(i64)` or `Sequence([i64])`, nothing else
//! - **Sentinel**: `Scalar(256)` stands for "empty sequence"
//! - **Operators**: pure unary and binary primitives (`MAXIMUM`, `MAP[*2]`, ...)
//! - **Library**: process-wide, read-only registry of every primitive
//! - **Evaluator**: post-order fold of a program tree
//!
//! ```
//! use deepcode::{parse_program, EvalContext, Evaluator, Value};
//!
//! let ctx = EvalContext::default();
//! let program = parse_program(&["xs"], "MAXIMUM(MAP[*2](xs))", &ctx).unwrap();
//! let value = Evaluator::new(ctx).run(&program, &[Value::sequence(vec![3, 1, 4])]).unwrap();
//! assert_eq!(value, Value::Scalar(8));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod ops;
pub mod program;
pub mod value;

// Re-export main types
pub use context::EvalContext;
pub use error::{EvalError, ProgramError, Result};
pub use eval::{evaluate, Bindings, Evaluator, Example};
pub use frontend::{parse_program, parse_program_with};
pub use ops::{lookup_operator, BinFn, IntFn, Library, OpName, Operator, Predicate};
pub use program::{Node, Program};
pub use value::{as_sequence, Value, SENTINEL};

/// deepcode version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
