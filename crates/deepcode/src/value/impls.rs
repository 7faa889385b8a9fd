//! Value constructors, predicates, extractors and From traits

use std::sync::Arc;

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a scalar value
    pub fn scalar(n: i64) -> Self {
        Value::Scalar(n)
    }

    /// Create a sequence value
    pub fn sequence(items: Vec<i64>) -> Self {
        Value::Sequence(Arc::new(items))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is a scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Check if value is a sequence
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract the integer of a scalar
    pub fn as_scalar(&self) -> Option<i64> {
        match self {
            Value::Scalar(n) => Some(*n),
            Value::Sequence(_) => None,
        }
    }

    /// Extract the elements of a sequence, without sentinel narrowing
    pub fn as_slice(&self) -> Option<&[i64]> {
        match self {
            Value::Sequence(xs) => Some(xs.as_slice()),
            Value::Scalar(_) => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Scalar(n)
    }
}

impl From<Vec<i64>> for Value {
    fn from(items: Vec<i64>) -> Self {
        Value::Sequence(Arc::new(items))
    }
}

impl From<&[i64]> for Value {
    fn from(items: &[i64]) -> Self {
        Value::Sequence(Arc::new(items.to_vec()))
    }
}

impl FromIterator<i64> for Value {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        Value::Sequence(Arc::new(iter.into_iter().collect()))
    }
}
