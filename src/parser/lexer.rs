//! Lexer (tokenizer) for expression input.
//!
//! Converts a line of text into a flat [`Token`] stream consumed by the
//! parser. Whitespace separates tokens and is never emitted; the first
//! unrecognized character fails the whole [`Lexer::tokenize`] call.

use super::position::Position;
use std::fmt;

/// Classification of a token, carrying the literal payload for numbers.
///
/// The payload lives inside the variant, so an `Int` token holding a
/// floating value is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Integer literal, e.g. `42`.
    Int(i64),
    /// Floating-point literal, e.g. `3.14`.
    Float(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl TokenKind {
    /// True for the numeric literal kinds.
    pub fn is_number(&self) -> bool {
        matches!(self, TokenKind::Int(_) | TokenKind::Float(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(value) => write!(f, "INT:{}", value),
            TokenKind::Float(value) => write!(f, "FLOAT:{}", value),
            TokenKind::Plus => write!(f, "PLUS"),
            TokenKind::Minus => write!(f, "MINUS"),
            TokenKind::Mul => write!(f, "MUL"),
            TokenKind::Div => write!(f, "DIV"),
            TokenKind::LParen => write!(f, "LPAREN"),
            TokenKind::RParen => write!(f, "RPAREN"),
        }
    }
}

/// A classified unit of input text.
///
/// Every token records the position of the first character of its lexeme
/// so that parse errors can report an accurate offset and column without
/// a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Lexer error type.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character matched none of the recognized classes (whitespace,
    /// digit, single-character operator).
    IllegalCharacter { character: char, position: Position },
    /// An integer literal did not fit in `i64`.
    InvalidNumber { literal: String, position: Position },
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::IllegalCharacter {
                character,
                position,
            } => {
                write!(f, "Illegal character '{}' at {}", character, position)
            }
            LexError::InvalidNumber { literal, position } => {
                write!(f, "Invalid numeric literal '{}' at {}", literal, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Character-cursor tokenizer over one line of input.
///
/// Holds one character of lookahead: `current` is the character the next
/// decision is made on, and the position always points at it.
pub struct Lexer {
    text: Vec<char>,
    pos: Position,
    current: Option<char>,
}

impl Lexer {
    /// Create a new lexer with the cursor on the first character.
    pub fn new(text: &str) -> Self {
        let text: Vec<char> = text.chars().collect();
        let current = text.first().copied();
        Self {
            text,
            pos: Position::start(),
            current,
        }
    }

    /// Tokenize the entire input.
    ///
    /// Space and tab are skipped. The first unrecognized character fails
    /// the whole call; no partial token stream is returned.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current {
            match ch {
                ' ' | '\t' => self.advance(),
                '0'..='9' => {
                    tokens.push(self.number()?);
                    self.advance();
                }
                '+' => {
                    tokens.push(Token::new(TokenKind::Plus, self.pos));
                    self.advance();
                }
                '-' => {
                    tokens.push(Token::new(TokenKind::Minus, self.pos));
                    self.advance();
                }
                '*' => {
                    tokens.push(Token::new(TokenKind::Mul, self.pos));
                    self.advance();
                }
                '/' => {
                    tokens.push(Token::new(TokenKind::Div, self.pos));
                    self.advance();
                }
                '(' => {
                    tokens.push(Token::new(TokenKind::LParen, self.pos));
                    self.advance();
                }
                ')' => {
                    tokens.push(Token::new(TokenKind::RParen, self.pos));
                    self.advance();
                }
                _ => {
                    self.advance();
                    return Err(LexError::IllegalCharacter {
                        character: ch,
                        position: self.pos,
                    });
                }
            }
        }

        Ok(tokens)
    }

    /// Scan a numeric literal.
    ///
    /// The cursor enters on the first digit and stops on the last
    /// character belonging to the number; the tokenize loop advances
    /// past it. At most one `.` is consumed: a second `.` ends the
    /// number and is left for the next tokenize iteration, which rejects
    /// it as an illegal character.
    fn number(&mut self) -> Result<Token, LexError> {
        let position = self.pos;
        let mut literal = String::new();
        let mut dots = 0;

        while let Some(ch) = self.current {
            literal.push(ch);

            match self.peek_next() {
                Some(next) if next.is_ascii_digit() => self.advance(),
                Some('.') if dots == 0 => {
                    dots += 1;
                    self.advance();
                }
                _ => break,
            }
        }

        // A trailing dot is accepted: "12." parses as 12.0.
        let kind = if dots == 0 {
            literal.parse::<i64>().ok().map(TokenKind::Int)
        } else {
            literal.parse::<f64>().ok().map(TokenKind::Float)
        };

        match kind {
            Some(kind) => Ok(Token::new(kind, position)),
            None => Err(LexError::InvalidNumber { literal, position }),
        }
    }

    /// Move the cursor one character forward.
    fn advance(&mut self) {
        if let Some(ch) = self.current {
            self.pos.advance(ch);
            self.current = self.text.get(self.pos.offset).copied();
        }
    }

    /// Look at the character after the current one without consuming.
    fn peek_next(&self) -> Option<char> {
        self.text.get(self.pos.offset + 1).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        lexer
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_single_integer() {
        let mut lexer = Lexer::new("512");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Int(512));
        assert_eq!(tokens[0].position.offset, 0);
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(kinds("3.14"), vec![TokenKind::Float(3.14)]);
    }

    #[test]
    fn test_trailing_dot_is_float() {
        assert_eq!(kinds("12."), vec![TokenKind::Float(12.0)]);
    }

    #[test]
    fn test_operators_and_parens() {
        assert_eq!(
            kinds("+ - * / ( )"),
            vec![
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::Div,
                TokenKind::LParen,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(kinds("1 + 2"), kinds("1+2"));
        assert_eq!(kinds("\t1\t+\t2\t"), kinds("1+2"));
    }

    #[test]
    fn test_token_positions() {
        let mut lexer = Lexer::new("1 + 2");
        let tokens = lexer.tokenize().unwrap();

        let offsets: Vec<usize> = tokens.iter().map(|t| t.position.offset).collect();
        assert_eq!(offsets, vec![0, 2, 4]);
    }

    #[test]
    fn test_illegal_character() {
        let mut lexer = Lexer::new("1+@2");
        let err = lexer.tokenize().unwrap_err();

        match err {
            LexError::IllegalCharacter {
                character,
                position,
            } => {
                assert_eq!(character, '@');
                assert_eq!(position.offset, 3);
                assert_eq!(position.line, 0);
                assert_eq!(position.column, 3);
            }
            other => panic!("Expected IllegalCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_second_dot_terminates_number() {
        // "1.2.3" scans Float(1.2), then the stray dot is rejected.
        let mut lexer = Lexer::new("1.2.3");
        let err = lexer.tokenize().unwrap_err();

        assert!(matches!(
            err,
            LexError::IllegalCharacter {
                character: '.',
                position,
            } if position.offset == 4
        ));
    }

    #[test]
    fn test_huge_integer_rejected() {
        let mut lexer = Lexer::new("99999999999999999999");
        let err = lexer.tokenize().unwrap_err();

        assert!(matches!(err, LexError::InvalidNumber { .. }));
    }

    #[test]
    fn test_tokenize_is_deterministic() {
        let first = Lexer::new("1 + 2.5 * 3").tokenize();
        let second = Lexer::new("1 + 2.5 * 3").tokenize();

        assert_eq!(first.unwrap(), second.unwrap());
    }
}
