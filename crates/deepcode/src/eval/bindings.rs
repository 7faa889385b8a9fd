//! Input bindings for a single evaluation

use indexmap::IndexMap;

use crate::error::{EvalError, Result};
use crate::program::Program;
use crate::value::Value;

/// Mapping from input names to the values a program runs on.
///
/// Each evaluation owns its bindings; values are immutable so sharing a
/// `Bindings` across evaluations of different programs is also fine.
///
/// # Example
///
/// ```
/// use deepcode::{Bindings, Value};
///
/// let mut bindings = Bindings::new();
/// bindings.define("n", Value::Scalar(2));
/// bindings.define("xs", Value::sequence(vec![1, 2, 3]));
///
/// assert_eq!(bindings.get("n"), Some(&Value::Scalar(2)));
/// assert_eq!(bindings.get("ys"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: IndexMap<String, Value>,
}

impl Bindings {
    /// Create empty bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a program's declared inputs to values in positional order.
    pub fn positional(program: &Program, values: &[Value]) -> Result<Self> {
        let names = program.inputs();
        if names.len() != values.len() {
            return Err(EvalError::invariant(format!(
                "program takes {} input(s), got {}",
                names.len(),
                values.len()
            )));
        }
        Ok(names.iter().cloned().zip(values.iter().cloned()).collect())
    }

    /// Bind a name, replacing any earlier binding of the same name.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Look up a bound value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Look up a bound value, treating absence as a broken contract.
    pub fn require(&self, name: &str) -> Result<&Value> {
        self.get(name)
            .ok_or_else(|| EvalError::invariant(format!("input '{}' is not bound", name)))
    }

    /// Check if a name is bound.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(String, Value)> for Bindings {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
