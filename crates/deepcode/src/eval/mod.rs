//! Program evaluation
//!
//! The evaluator folds a program tree bottom-up. It walks the tree with an
//! explicit work stack rather than host recursion: each node is first
//! `Pending`, becomes `Evaluating` once its operator is resolved and its
//! children are scheduled, and is `Done` when its value sits on the value
//! stack. A node is applied only after every child is `Done`, and children
//! are applied in declared argument order.

pub mod bindings;
pub mod example;

pub use bindings::Bindings;
pub use example::Example;

use crate::error::{EvalError, Result};
use crate::ops::{Library, Operator};
use crate::program::{Node, Program};
use crate::value::Value;
use crate::EvalContext;

/// Work item on the evaluation stack.
enum Step<'p, 'l> {
    /// Not visited yet
    Pending(&'p Node),

    /// Operator resolved, children scheduled above this step
    Evaluating {
        op: &'l Operator,
        /// Value stack height before the first child
        base: usize,
    },
}

/// Evaluates programs against an operator library.
#[derive(Debug, Clone)]
pub struct Evaluator<'l> {
    library: &'l Library,
    ctx: EvalContext,
}

impl Evaluator<'static> {
    /// Create an evaluator over the global library.
    pub fn new(ctx: EvalContext) -> Self {
        Self {
            library: Library::global(),
            ctx,
        }
    }
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Self::new(EvalContext::default())
    }
}

impl<'l> Evaluator<'l> {
    /// Create an evaluator over a specific library.
    pub fn with_library(library: &'l Library, ctx: EvalContext) -> Self {
        Self { library, ctx }
    }

    /// The evaluation context.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Evaluate a program under the given input bindings.
    ///
    /// Any invariant violation aborts the whole evaluation; no partial value
    /// is ever returned.
    pub fn evaluate(&self, program: &Program, bindings: &Bindings) -> Result<Value> {
        let mut work = vec![Step::Pending(program.root())];
        let mut values: Vec<Value> = Vec::new();

        while let Some(step) = work.pop() {
            match step {
                Step::Pending(Node::Input(name)) => {
                    values.push(bindings.require(name)?.clone());
                }
                Step::Pending(Node::Apply { op, args }) => {
                    let op = self.library.lookup(op)?;
                    work.push(Step::Evaluating {
                        op,
                        base: values.len(),
                    });
                    work.extend(args.iter().rev().map(Step::Pending));
                }
                Step::Evaluating { op, base } => {
                    let args = values.split_off(base);
                    let value = op.apply(&args)?;
                    if self.ctx.trace {
                        tracing::trace!(op = %op.name(), ?args, result = ?value, "applied");
                    }
                    values.push(value);
                }
            }
        }

        match (values.pop(), values.is_empty()) {
            (Some(value), true) => Ok(value),
            _ => Err(EvalError::invariant("evaluation left an unbalanced value stack")),
        }
    }

    /// Evaluate a program on positional inputs.
    pub fn run(&self, program: &Program, inputs: &[Value]) -> Result<Value> {
        let bindings = Bindings::positional(program, inputs)?;
        self.evaluate(program, &bindings)
    }

    /// Check a candidate program against every example.
    ///
    /// Returns `Ok(false)` on the first mismatch. A program that breaks an
    /// invariant on some example is a mismatch too. An operator missing
    /// from the library is a configuration defect and is returned as an
    /// error instead.
    pub fn satisfies(&self, program: &Program, examples: &[Example]) -> Result<bool> {
        for (i, example) in examples.iter().enumerate() {
            match self.run(program, &example.inputs) {
                Ok(value) if value == example.output => {}
                Ok(value) => {
                    tracing::debug!(
                        %program,
                        example = i,
                        expected = %example.output,
                        got = %value,
                        "candidate rejected: output mismatch"
                    );
                    return Ok(false);
                }
                Err(err @ EvalError::InvariantViolation { .. }) => {
                    tracing::debug!(%program, example = i, error = %err, "candidate rejected");
                    return Ok(false);
                }
                Err(err @ EvalError::UnknownOperator { .. }) => {
                    tracing::error!(%program, error = %err, "operator library is incomplete");
                    return Err(err);
                }
            }
        }
        Ok(true)
    }
}

/// Evaluate a program with the global library and default settings.
pub fn evaluate(program: &Program, bindings: &Bindings) -> Result<Value> {
    Evaluator::default().evaluate(program, bindings)
}
