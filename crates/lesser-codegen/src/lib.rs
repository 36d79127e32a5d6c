//! lesser code generator
//!
//! Resolves variable and cross-selector references in a [`ParseTree`] and
//! renders the result as flat CSS.
//!
//! ```text
//! lines → Scanner → tokens → Parser → ParseTree → resolve() → css::render() → String
//! ```

pub mod css;
pub mod resolve;

pub use css::evaluate;
pub use resolve::{resolve, Declaration, ResolvedRule, ResolvedSheet};

use lesser_lexer::{LexerError, Scanner};
use lesser_parser::{ParseError, ParseTree, Parser};
use std::fmt;

/// Reference resolution error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Undefined variable '{name}' used by {selector} {{ {property} }}")]
    UndefinedVariable {
        name: String,
        selector: String,
        property: String,
    },

    /// The referenced selector, or the same property inside it, is missing.
    #[error("Unresolved reference '{reference}' used by {selector} {{ {property} }}: no property '{property}' in '{target}'")]
    UnresolvedReference {
        reference: String,
        target: String,
        selector: String,
        property: String,
    },
}

/// The four ways a compilation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnrecognizedToken,
    SyntaxError,
    UndefinedVariable,
    UnresolvedReference,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::UnrecognizedToken => "UnrecognizedToken",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::UndefinedVariable => "UndefinedVariable",
            ErrorKind::UnresolvedReference => "UnresolvedReference",
        };
        f.write_str(name)
    }
}

/// Any error raised while compiling a stylesheet.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompileError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CompileError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CompileError::Lexer(_) | CompileError::Parse(ParseError::Lexer(_)) => {
                ErrorKind::UnrecognizedToken
            }
            CompileError::Parse(_) => ErrorKind::SyntaxError,
            CompileError::Eval(EvalError::UndefinedVariable { .. }) => ErrorKind::UndefinedVariable,
            CompileError::Eval(EvalError::UnresolvedReference { .. }) => {
                ErrorKind::UnresolvedReference
            }
        }
    }
}

/// Compile lesser source into CSS.
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_lines(source.lines())
}

/// Compile source delivered as lines, in file order.
///
/// Every line is lexed before parsing starts; nothing is produced unless the
/// whole pipeline succeeds.
pub fn compile_lines<I, S>(lines: I) -> Result<String, CompileError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = Scanner::tokenize_lines(lines)?;
    let tree: ParseTree = Parser::parse(&tokens)?;
    Ok(evaluate(&tree)?)
}
