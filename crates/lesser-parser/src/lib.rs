//! lesser parser
//!
//! Parses the flat token stream from `lesser-lexer` into a [`ParseTree`]:
//! one map of variable declarations and one map of selector rules.
//!
//! ```text
//! program      := (variableDecl | ruleDecl)*
//! variableDecl := "@" run "=" run ";"
//! ruleDecl     := run "{" propertyDecl* "}"
//! propertyDecl := run ":" run ";"
//! ```
//!
//! A run is one or more tokens whose texts are concatenated verbatim.

pub mod cursor;
pub mod parser;
pub mod tree;

pub use cursor::TokenCursor;
pub use parser::Parser;
pub use tree::{ParseTree, Properties};

use lesser_lexer::LexerError;

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// A token that the current production cannot use.
    #[error("Syntax error at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// The token stream ran out inside a declaration.
    #[error("Syntax error: unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    /// Lexing failed before parsing could start (only from `Parser::parse_source`).
    #[error(transparent)]
    Lexer(#[from] LexerError),
}
