//! Program trees
//!
//! A [`Program`] is validated once when built: every operator exists in the
//! library with the right arity, every input reference is declared, and
//! the tree is no deeper than [`EvalContext::max_depth`]. After that it is
//! immutable.

use std::fmt;

use crate::error::ProgramError;
use crate::ops::{Library, OpName};
use crate::EvalContext;

/// A node of a program tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// Reference to a program input
    Input(String),

    /// Application of an operator to child nodes, in argument order
    Apply {
        /// The operator
        op: OpName,
        /// Arguments
        args: Vec<Node>,
    },
}

impl Node {
    /// Create an input reference.
    pub fn input(name: impl Into<String>) -> Self {
        Node::Input(name.into())
    }

    /// Create an operator application.
    pub fn apply(op: OpName, args: Vec<Node>) -> Self {
        Node::Apply { op, args }
    }

    /// Shorthand for a one-argument application.
    pub fn unary(op: OpName, arg: Node) -> Self {
        Node::Apply {
            op,
            args: vec![arg],
        }
    }

    /// Shorthand for a two-argument application.
    pub fn binary(op: OpName, lhs: Node, rhs: Node) -> Self {
        Node::Apply {
            op,
            args: vec![lhs, rhs],
        }
    }

    /// Children of this node in argument order.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Input(_) => &[],
            Node::Apply { args, .. } => args,
        }
    }

    /// Depth of the tree rooted here. A lone input has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children().iter().map(|c| (c, depth + 1)));
        }
        max
    }

    /// Number of nodes in the tree rooted here.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children());
        }
        count
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Input(name) => f.write_str(name),
            Node::Apply { op, args } => {
                write!(f, "{}(", op)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A validated program: declared inputs plus a root node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Program {
    inputs: Vec<String>,
    root: Node,
}

impl Program {
    /// Build a program against the global library.
    pub fn new(
        inputs: Vec<String>,
        root: Node,
        ctx: &EvalContext,
    ) -> Result<Self, ProgramError> {
        Self::with_library(inputs, root, Library::global(), ctx)
    }

    /// Build a program against a specific library.
    pub fn with_library(
        inputs: Vec<String>,
        root: Node,
        library: &Library,
        ctx: &EvalContext,
    ) -> Result<Self, ProgramError> {
        let depth = root.depth();
        if depth > ctx.max_depth {
            return Err(ProgramError::TooDeep {
                depth,
                max: ctx.max_depth,
            });
        }

        let mut stack = vec![&root];
        while let Some(node) = stack.pop() {
            match node {
                Node::Input(name) => {
                    if !inputs.iter().any(|i| i == name) {
                        return Err(ProgramError::UndeclaredInput { name: name.clone() });
                    }
                }
                Node::Apply { op, args } => {
                    let operator =
                        library
                            .lookup(op)
                            .map_err(|_| ProgramError::UnknownOperator {
                                name: op.to_string(),
                            })?;
                    if operator.arity() != args.len() {
                        return Err(ProgramError::Arity {
                            op: *op,
                            expected: operator.arity(),
                            got: args.len(),
                        });
                    }
                    stack.extend(args);
                }
            }
        }

        Ok(Self { inputs, root })
    }

    /// Declared input names, in positional order.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::IntFn;

    fn inputs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_display() {
        let root = Node::unary(
            OpName::Maximum,
            Node::unary(OpName::Map(IntFn::Double), Node::input("x")),
        );
        let program = Program::new(inputs(&["x"]), root, &EvalContext::default()).unwrap();
        assert_eq!(program.to_string(), "MAXIMUM(MAP[*2](x))");
    }

    #[test]
    fn test_depth_and_size() {
        let root = Node::binary(
            OpName::Take,
            Node::unary(OpName::Head, Node::input("a")),
            Node::input("b"),
        );
        assert_eq!(root.depth(), 3);
        assert_eq!(root.size(), 4);
        assert_eq!(Node::input("a").depth(), 1);
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let root = Node::binary(OpName::Maximum, Node::input("x"), Node::input("x"));
        let err = Program::new(inputs(&["x"]), root, &EvalContext::default()).unwrap_err();
        assert_eq!(
            err,
            ProgramError::Arity {
                op: OpName::Maximum,
                expected: 1,
                got: 2
            }
        );
    }

    #[test]
    fn test_rejects_undeclared_input() {
        let root = Node::unary(OpName::Sum, Node::input("y"));
        let err = Program::new(inputs(&["x"]), root, &EvalContext::default()).unwrap_err();
        assert!(matches!(err, ProgramError::UndeclaredInput { name } if name == "y"));
    }

    #[test]
    fn test_rejects_too_deep() {
        let mut root = Node::input("x");
        for _ in 0..5 {
            root = Node::unary(OpName::Reverse, root);
        }
        let err = Program::new(inputs(&["x"]), root, &EvalContext::with_max_depth(4)).unwrap_err();
        assert_eq!(err, ProgramError::TooDeep { depth: 6, max: 4 });
    }

    #[test]
    fn test_rejects_operator_missing_from_library() {
        let root = Node::unary(OpName::Sum, Node::input("x"));
        let err = Program::with_library(
            inputs(&["x"]),
            root,
            &Library::new(),
            &EvalContext::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ProgramError::UnknownOperator { .. }));
    }
}
