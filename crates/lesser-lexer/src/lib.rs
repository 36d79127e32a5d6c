//! lesser lexer
//!
//! Tokenizes `.lesser` stylesheet source into a flat stream of tokens.
//! Source is fed one line at a time; every line is trimmed and lexed on its
//! own, but all lines append to the same token sequence, so a declaration
//! may span several lines.
//!
//! # Example
//!
//! ```
//! use lesser_lexer::{Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("@x = red;").unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::At);
//! assert_eq!(tokens.len(), 5);
//! ```

pub mod classify;
pub mod cursor;
pub mod scanner;
pub mod token;

pub use cursor::CharCursor;
pub use scanner::Scanner;
pub use token::{Span, Token, TokenKind};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexerError {
    /// A character that matches none of the classifier predicates.
    #[error("Unrecognized token '{ch}' at line {line}, column {column}")]
    UnrecognizedToken { ch: char, line: usize, column: usize },

    /// A digit run whose value does not fit an `f64`.
    #[error("Unrecognized number '{literal}' at line {line}, column {column}: value out of range")]
    InvalidNumber {
        literal: String,
        line: usize,
        column: usize,
    },
}
