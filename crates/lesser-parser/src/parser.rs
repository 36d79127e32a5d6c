//! Declaration parser for lesser.
//!
//! Walks the token stream once, dispatching on the current token: `@` opens
//! a variable declaration, a selector-looking token opens a rule. Names and
//! values are runs of tokens concatenated without separators, so
//! `1px solid red` becomes `1pxsolidred`.

use crate::cursor::TokenCursor;
use crate::tree::{ParseTree, Properties};
use crate::ParseError;
use lesser_lexer::{Scanner, Token, TokenKind};

/// lesser declaration parser.
pub struct Parser<'a> {
    cursor: TokenCursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the given tokens.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
        }
    }

    /// Parse a complete token sequence.
    pub fn parse(tokens: &[Token]) -> Result<ParseTree, ParseError> {
        Parser::new(tokens).parse_program()
    }

    /// Lex and parse source text.
    pub fn parse_source(source: &str) -> Result<ParseTree, ParseError> {
        let tokens = Scanner::tokenize(source)?;
        Self::parse(&tokens)
    }

    /// Parse declarations until the tokens run out.
    fn parse_program(&mut self) -> Result<ParseTree, ParseError> {
        let mut tree = ParseTree::new();

        while let Some(token) = self.cursor.current() {
            match &token.kind {
                TokenKind::At => {
                    let (name, value) = self.parse_variable()?;
                    tree.variables.insert(name, value);
                }
                kind if starts_selector(kind) => {
                    let (selector, properties) = self.parse_rule()?;
                    tree.rules.insert(selector, properties);
                }
                _ => {
                    return Err(syntax_error(
                        token,
                        format!(
                            "unexpected {}, expected a variable or rule declaration",
                            found(token)
                        ),
                    ));
                }
            }
        }

        log::debug!(
            "parsed {} variables and {} rules",
            tree.variables.len(),
            tree.rules.len()
        );
        Ok(tree)
    }

    /// Parse `@name = value;`. The stored name keeps its `@`.
    fn parse_variable(&mut self) -> Result<(String, String), ParseError> {
        let name = self.collect_run(&TokenKind::Equals, "variable name")?;
        self.cursor.expect(&TokenKind::Equals)?;
        let value = self.collect_run(&TokenKind::Semicolon, "variable value")?;
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok((name, value))
    }

    /// Parse `selector { property: value; ... }`.
    fn parse_rule(&mut self) -> Result<(String, Properties), ParseError> {
        let selector = self.collect_run(&TokenKind::LBrace, "selector")?;
        self.cursor.expect(&TokenKind::LBrace)?;

        let mut properties = Properties::new();
        loop {
            match self.cursor.current() {
                Some(token) if token.kind == TokenKind::RBrace => {
                    self.cursor.advance();
                    break;
                }
                Some(_) => {
                    let (name, value) = self.parse_property()?;
                    properties.insert(name, value);
                }
                None => {
                    return Err(ParseError::UnexpectedEof {
                        expected: format!("'}}' closing {selector}"),
                    });
                }
            }
        }

        Ok((selector, properties))
    }

    /// Parse `name: value;`.
    fn parse_property(&mut self) -> Result<(String, String), ParseError> {
        let name = self.collect_run(&TokenKind::Colon, "property name")?;
        self.cursor.expect(&TokenKind::Colon)?;
        let value = self.collect_run(&TokenKind::Semicolon, "property value")?;
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok((name, value))
    }

    /// Concatenate token texts up to (not including) `delimiter`.
    ///
    /// Every other token, block punctuation included, joins the run. The run
    /// must be non-empty, and running out of tokens is an error.
    fn collect_run(&mut self, delimiter: &TokenKind, what: &str) -> Result<String, ParseError> {
        let mut run = String::new();

        loop {
            let Some(token) = self.cursor.current() else {
                return Err(ParseError::UnexpectedEof {
                    expected: format!("{} after {what}", delimiter.describe()),
                });
            };

            if token.kind == *delimiter {
                if run.is_empty() {
                    return Err(syntax_error(
                        token,
                        format!("expected {what} before {}", delimiter.describe()),
                    ));
                }
                return Ok(run);
            }

            run.push_str(&token.text());
            self.cursor.advance();
        }
    }
}

/// A rule starts with `.`, `#`, or an identifier beginning with a letter.
fn starts_selector(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::Dot | TokenKind::Hash => true,
        TokenKind::Identifier(name) => name.starts_with(|c: char| c.is_ascii_alphabetic()),
        _ => false,
    }
}

/// Describe a token for diagnostics, including literal text.
fn found(token: &Token) -> String {
    match &token.kind {
        TokenKind::Number(_) | TokenKind::Identifier(_) => {
            format!("{} '{}'", token.kind.describe(), token.text())
        }
        kind => kind.describe(),
    }
}

fn syntax_error(token: &Token, message: String) -> ParseError {
    ParseError::Syntax {
        message,
        line: token.span.line,
        column: token.span.column,
    }
}
