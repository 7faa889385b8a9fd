//! Evaluation context configuration

/// Configuration for building and evaluating programs.
///
/// Evaluation of a single program has no cancellation: the tree is finite
/// and every operator terminates. Work is bounded instead by rejecting
/// over-deep programs when they are constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalContext {
    /// Maximum program tree depth accepted at construction
    pub max_depth: usize,

    /// Whether to trace every node application (for debugging)
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: 64,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom depth limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Enable or disable per-node tracing.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}
