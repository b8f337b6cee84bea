//! # Introduction
//!
//! exparse turns one line of arithmetic expression text into a syntax
//! tree, reporting a position-annotated diagnostic when it cannot.
//!
//! ## Pipeline
//!
//! ```text
//! Line → Lexer → Tokens → Parser → Expr
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the line with a character cursor and
//!    one character of lookahead.
//! 2. [`parser::parser`] — recursive descent over the token sequence,
//!    two precedence tiers, left-associative.
//! 3. [`parser::ast`] — the resulting [`parser::ast::Expr`] tree;
//!    its `Display` form is the nested tuple rendering printed by the
//!    interactive shell.
//!
//! The shell binary owns all process I/O and is not part of the library
//! API. The pipeline is synchronous and shares no state between calls:
//! each invocation owns its cursor and token buffer.

pub mod parser;

use parser::ast::Expr;
use parser::parser::{ParseError, Parser};

/// Parse one line of expression text into a syntax tree.
///
/// Runs the full lex-then-parse pipeline and hands the caller the root
/// of the tree.
///
/// # Errors
///
/// Returns a [`ParseError`] if the line contains an unrecognized
/// character, is not a complete expression, or has tokens left over
/// after one.
///
/// # Examples
///
/// ```
/// let tree = exparse::parse_line("1 + 2 * 3").unwrap();
/// assert_eq!(tree.to_string(), "(INT:1, PLUS, (INT:2, MUL, INT:3))");
/// ```
pub fn parse_line(source: &str) -> Result<Expr, ParseError> {
    let mut parser = Parser::new(source)?;
    parser.parse_expression()
}
