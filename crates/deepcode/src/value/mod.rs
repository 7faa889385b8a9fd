//! Value representation for runtime values

mod display;
mod impls;
mod sentinel;

pub use sentinel::{as_sequence, empty_scalar, is_sentinel, SENTINEL};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Runtime value representation for the list DSL.
///
/// The DSL has exactly two shapes. There is no optional or function variant:
/// "no result" is carried by the sentinel scalar (see [`SENTINEL`]) and
/// lambdas live inside operator identifiers.
///
/// Serializes untagged, so `5` is a scalar and `[1, 2]` a sequence, matching
/// the JSON shape of DeepCoder example files.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A single integer
    Scalar(i64),

    /// An ordered list of integers (immutable, shared on clone)
    Sequence(Arc<Vec<i64>>),
}
