//! Text frontend for programs
//!
//! Parses the form that [`Program`]'s `Display` prints:
//!
//! ```text
//! program := expr
//! expr    := input | op "(" expr ("," expr)* ")"
//! input   := [a-z_][a-z0-9_]*
//! op      := [A-Z][A-Z0-9_]* ("[" lambda "]")?
//! ```
//!
//! ```
//! use deepcode::{parse_program, EvalContext};
//!
//! let program = parse_program(&["xs"], "MAXIMUM(FILTER[>0](xs))", &EvalContext::default()).unwrap();
//! assert_eq!(program.to_string(), "MAXIMUM(FILTER[>0](xs))");
//! ```

use crate::error::ProgramError;
use crate::ops::{Library, OpName};
use crate::program::{Node, Program};
use crate::EvalContext;

/// Parse and validate a program against the global library.
pub fn parse_program(
    inputs: &[&str],
    src: &str,
    ctx: &EvalContext,
) -> Result<Program, ProgramError> {
    parse_program_with(inputs, src, Library::global(), ctx)
}

/// Parse and validate a program against a specific library.
pub fn parse_program_with(
    inputs: &[&str],
    src: &str,
    library: &Library,
    ctx: &EvalContext,
) -> Result<Program, ProgramError> {
    let mut parser = Parser {
        src,
        pos: 0,
        max_depth: ctx.max_depth,
    };
    let root = parser.expr(1)?;
    parser.skip_whitespace();
    if parser.pos != src.len() {
        return Err(parser.error("trailing input"));
    }
    let inputs = inputs.iter().map(|s| s.to_string()).collect();
    Program::with_library(inputs, root, library, ctx)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn error(&self, message: impl Into<String>) -> ProgramError {
        ProgramError::Parse {
            position: self.pos,
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, want: char) -> Result<(), ProgramError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == want => {
                self.pos += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", want, c))),
            None => Err(self.error(format!("expected '{}', found end of input", want))),
        }
    }

    /// Consume characters while `pred` holds and return them.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.src[start..self.pos]
    }

    fn expr(&mut self, depth: usize) -> Result<Node, ProgramError> {
        if depth > self.max_depth {
            return Err(ProgramError::TooDeep {
                depth,
                max: self.max_depth,
            });
        }

        self.skip_whitespace();
        match self.peek() {
            Some(c) if c.is_ascii_lowercase() || c == '_' => {
                let name =
                    self.take_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
                Ok(Node::input(name))
            }
            Some(c) if c.is_ascii_uppercase() => self.application(depth),
            Some(c) => Err(self.error(format!("unexpected '{}'", c))),
            None => Err(self.error("unexpected end of input")),
        }
    }

    fn application(&mut self, depth: usize) -> Result<Node, ProgramError> {
        let start = self.pos;
        self.take_while(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if self.peek() == Some('[') {
            self.take_while(|c| c != ']');
            self.expect(']')?;
        }
        let name = &self.src[start..self.pos];
        let op: OpName = name.parse().map_err(|_| ProgramError::UnknownOperator {
            name: name.to_string(),
        })?;

        self.expect('(')?;
        let mut args = vec![self.expr(depth + 1)?];
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.pos += 1;
                    args.push(self.expr(depth + 1)?);
                }
                _ => break,
            }
        }
        self.expect(')')?;

        Ok(Node::apply(op, args))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{BinFn, IntFn};

    fn parse(inputs: &[&str], src: &str) -> Result<Program, ProgramError> {
        parse_program(inputs, src, &EvalContext::default())
    }

    #[test]
    fn test_parse_nested() {
        let program = parse(&["a", "b"], "SUM(ZIPWITH[*](a, MAP[*(-1)](b)))").unwrap();
        let expected = Node::unary(
            OpName::Sum,
            Node::binary(
                OpName::ZipWith(BinFn::Mul),
                Node::input("a"),
                Node::unary(OpName::Map(IntFn::Negate), Node::input("b")),
            ),
        );
        assert_eq!(program.root(), &expected);
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let program = parse(&["n", "xs"], "  TAKE ( n ,\n  SORT(xs) ) ").unwrap();
        assert_eq!(program.to_string(), "TAKE(n, SORT(xs))");
    }

    #[test]
    fn test_trailing_input() {
        let err = parse(&["x"], "HEAD(x) x").unwrap_err();
        assert!(matches!(err, ProgramError::Parse { position: 8, .. }));
    }

    #[test]
    fn test_unknown_operator() {
        let err = parse(&["x"], "MEDIAN(x)").unwrap_err();
        assert_eq!(
            err,
            ProgramError::UnknownOperator {
                name: "MEDIAN".to_string()
            }
        );
    }

    #[test]
    fn test_missing_paren() {
        let err = parse(&["x"], "HEAD(x").unwrap_err();
        assert!(matches!(err, ProgramError::Parse { .. }));
    }

    #[test]
    fn test_depth_limit_during_parse() {
        let src = "REVERSE(REVERSE(REVERSE(x)))";
        let err = parse_program(&["x"], src, &EvalContext::with_max_depth(3)).unwrap_err();
        assert!(matches!(err, ProgramError::TooDeep { max: 3, .. }));
    }

    #[test]
    fn test_arity_checked_after_parse() {
        let err = parse(&["x"], "TAKE(x)").unwrap_err();
        assert!(matches!(err, ProgramError::Arity { expected: 2, got: 1, .. }));
    }
}
