//! Input/output examples a candidate program is checked against

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One input/output pair.
///
/// Deserializes from the DeepCoder JSON shape:
///
/// ```
/// use deepcode::{Example, Value};
///
/// let example: Example = serde_json::from_str(r#"{"input": [[3, 1, 4], 2], "output": [3, 1]}"#).unwrap();
/// assert_eq!(example.inputs, vec![Value::sequence(vec![3, 1, 4]), Value::Scalar(2)]);
/// assert_eq!(example.output, Value::sequence(vec![3, 1]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Positional program inputs
    #[serde(rename = "input")]
    pub inputs: Vec<Value>,

    /// Expected program output
    pub output: Value,
}

impl Example {
    /// Create an example.
    pub fn new(inputs: Vec<Value>, output: Value) -> Self {
        Self { inputs, output }
    }
}
