//! Recursive-descent parser for arithmetic expressions.
//!
//! Two precedence tiers, encoded structurally:
//!
//! ```text
//! expression := term ( (PLUS | MINUS) term )*
//! term       := factor ( (MUL | DIV) factor )*
//! factor     := INT | FLOAT
//! ```
//!
//! Multiplicative operators bind tighter than additive ones because
//! `expression` reaches them only through `term`. Repeated operators at
//! the same tier fold leftward: `8-3-2` parses as `(8-3)-2`.

use super::ast::Expr;
use super::lexer::{LexError, Lexer, Token, TokenKind};
use std::fmt;

/// Parser error type.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Tokenization failed before parsing could start.
    Lex(LexError),
    /// The current token cannot appear where the grammar requires
    /// something else.
    UnexpectedToken {
        expected: &'static str,
        found: Token,
    },
    /// The input ended where a token was still required.
    UnexpectedEndOfInput { expected: &'static str },
    /// A complete expression was parsed but tokens remain.
    TrailingTokens { found: Token },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => write!(f, "{}", err),
            ParseError::UnexpectedToken { expected, found } => {
                write!(
                    f,
                    "Expected {}, found {} at {}",
                    expected, found, found.position
                )
            }
            ParseError::UnexpectedEndOfInput { expected } => {
                write!(f, "Expected {}, found end of input", expected)
            }
            ParseError::TrailingTokens { found } => {
                write!(
                    f,
                    "Unexpected {} after expression at {}",
                    found, found.position
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

/// Recursive descent parser over a token sequence.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Lex `source` and build a parser over the resulting tokens.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Build a parser over an already-lexed token sequence.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the token sequence as a single expression.
    ///
    /// The whole sequence must be consumed: tokens left over after a
    /// complete expression are an error, as is an empty sequence.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let expr = self.expression()?;

        if let Some(found) = self.current() {
            return Err(ParseError::TrailingTokens {
                found: found.clone(),
            });
        }

        Ok(expr)
    }

    /// expression := term ( (PLUS | MINUS) term )*
    fn expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.term()?;

        while let Some(op) = self.match_any(&[TokenKind::Plus, TokenKind::Minus]) {
            let right = self.term()?;
            left = Expr::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// term := factor ( (MUL | DIV) factor )*
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.factor()?;

        while let Some(op) = self.match_any(&[TokenKind::Mul, TokenKind::Div]) {
            let right = self.factor()?;
            left = Expr::BinaryOp {
                left: Box::new(left),
                op,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// factor := INT | FLOAT
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let token = match self.current() {
            Some(token) if token.kind.is_number() => token.clone(),
            Some(token) => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a number",
                    found: token.clone(),
                });
            }
            None => {
                return Err(ParseError::UnexpectedEndOfInput {
                    expected: "a number",
                });
            }
        };

        self.advance();
        Ok(Expr::Number(token))
    }

    /// Consume and return the current token if its kind is one of `kinds`.
    fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        let token = match self.current() {
            Some(token) if kinds.contains(&token.kind) => token.clone(),
            _ => return None,
        };

        self.advance();
        Some(token)
    }

    /// Current token, or `None` once the sequence is exhausted.
    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Move the token cursor one forward.
    fn advance(&mut self) {
        self.position += 1;
    }
}
