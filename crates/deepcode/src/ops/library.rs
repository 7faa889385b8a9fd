//! The operator library: every primitive the DSL grammar can name.
//!
//! The library is built once and never mutated afterwards, so the global
//! instance is shared freely across threads.

use std::sync::OnceLock;

use indexmap::IndexMap;

use super::binary::{Access, DropFirst, Take, ZipWith};
use super::reduce::{CountBy, Head, Last, Maximum, Minimum, Sum};
use super::transform::{FilterBy, MapWith, Reverse, Scanl1, Sort};
use super::{BinFn, IntFn, OpName, Operator, Predicate};
use crate::error::{EvalError, Result};

/// Process-wide library with the full DSL roster registered.
static GLOBAL_LIBRARY: OnceLock<Library> = OnceLock::new();

/// Registry from operator identifier to operator.
#[derive(Debug, Clone, Default)]
pub struct Library {
    /// Entries in registration order
    operators: IndexMap<OpName, Operator>,
}

impl Library {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library with every DSL primitive registered.
    pub fn standard() -> Self {
        let mut library = Self::new();

        // First-order, sequence -> scalar
        library.register(Operator::unary(Head));
        library.register(Operator::unary(Last));
        library.register(Operator::unary(Minimum));
        library.register(Operator::unary(Maximum));
        library.register(Operator::unary(Sum));

        // First-order, sequence -> sequence
        library.register(Operator::unary(Reverse));
        library.register(Operator::unary(Sort));

        // int, sequence
        library.register(Operator::binary(Take));
        library.register(Operator::binary(DropFirst));
        library.register(Operator::binary(Access));

        // Higher-order, one entry per lambda
        for f in IntFn::ALL {
            library.register(Operator::unary(MapWith(f)));
        }
        for p in Predicate::ALL {
            library.register(Operator::unary(FilterBy(p)));
        }
        for p in Predicate::ALL {
            library.register(Operator::unary(CountBy(p)));
        }
        for g in BinFn::ALL {
            library.register(Operator::unary(Scanl1(g)));
        }
        for g in BinFn::ALL {
            library.register(Operator::binary(ZipWith(g)));
        }

        tracing::debug!(operators = library.len(), "built operator library");
        library
    }

    /// Get the global library, building it on first use.
    pub fn global() -> &'static Library {
        GLOBAL_LIBRARY.get_or_init(Library::standard)
    }

    /// Register an operator under its own name, replacing any previous entry.
    pub fn register(&mut self, op: Operator) {
        self.operators.insert(op.name(), op);
    }

    /// Look up an operator by identifier.
    pub fn lookup(&self, name: &OpName) -> Result<&Operator> {
        self.operators
            .get(name)
            .ok_or_else(|| EvalError::UnknownOperator {
                name: name.to_string(),
            })
    }

    /// Look up an operator by its printed name, e.g. `"MAXIMUM"` or `"MAP[*2]"`.
    pub fn lookup_name(&self, name: &str) -> Result<&Operator> {
        let id: OpName = name.parse()?;
        self.lookup(&id)
    }

    /// Check whether an identifier is registered.
    pub fn contains(&self, name: &OpName) -> bool {
        self.operators.contains_key(name)
    }

    /// Iterate over all operators in registration order.
    pub fn operators(&self) -> impl Iterator<Item = &Operator> + '_ {
        self.operators.values()
    }

    /// Iterate over all registered identifiers in registration order.
    pub fn names(&self) -> impl Iterator<Item = OpName> + '_ {
        self.operators.keys().copied()
    }

    /// Number of registered operators.
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    /// Check if the library is empty.
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

/// Look up an operator in the global library by its printed name.
pub fn lookup_operator(name: &str) -> Result<&'static Operator> {
    Library::global().lookup_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_standard_roster_size() {
        // 5 reductions, 2 transforms, 3 int/list binaries,
        // 10 maps, 4 filters, 4 counts, 5 scans, 5 zips
        assert_eq!(Library::standard().len(), 38);
    }

    #[test]
    fn test_every_name_round_trips() {
        let library = Library::standard();
        for name in library.names() {
            let op = library.lookup_name(&name.to_string()).unwrap();
            assert_eq!(op.name(), name);
        }
    }

    #[test]
    fn test_empty_library_reports_unknown() {
        let library = Library::new();
        assert!(library.is_empty());
        assert!(matches!(
            library.lookup(&OpName::Maximum),
            Err(EvalError::UnknownOperator { .. })
        ));
    }

    #[test]
    fn test_global_lookup() {
        let op = lookup_operator("MAXIMUM").unwrap();
        assert_eq!(op.arity(), 1);
        assert_eq!(
            op.apply(&[Value::sequence(vec![2, 9, 4])]).unwrap(),
            Value::Scalar(9)
        );
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(Library::global(), Library::global()));
    }
}
