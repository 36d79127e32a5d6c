use crate::ParseError;
use lesser_lexer::{Token, TokenKind};

/// Read-only view over a token sequence with one token of lookahead.
///
/// Returned tokens borrow the underlying slice, not the cursor, so the
/// caller can keep them while advancing.
#[derive(Debug, Clone)]
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos + 1)
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Consume the current token if it has the given kind.
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == *kind => {
                self.advance();
                Ok(token)
            }
            Some(token) => Err(ParseError::Syntax {
                message: format!("expected {}, found {}", kind.describe(), token.kind.describe()),
                line: token.span.line,
                column: token.span.column,
            }),
            None => Err(ParseError::UnexpectedEof {
                expected: kind.describe(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesser_lexer::Scanner;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_walk() {
        let tokens = Scanner::tokenize("a{").unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        assert_eq!(cursor.current().map(|t| t.text()), Some("a".to_string()));
        assert_eq!(cursor.peek().map(|t| &t.kind), Some(&TokenKind::LBrace));
        cursor.advance();
        assert_eq!(cursor.peek(), None);
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_expect() {
        let tokens = Scanner::tokenize(";").unwrap();
        let mut cursor = TokenCursor::new(&tokens);
        let err = cursor.expect(&TokenKind::Colon).unwrap_err();
        assert!(matches!(err, ParseError::Syntax { line: 1, column: 1, .. }));
        assert!(cursor.expect(&TokenKind::Semicolon).is_ok());
        assert_eq!(
            cursor.expect(&TokenKind::RBrace),
            Err(ParseError::UnexpectedEof {
                expected: "'}'".into()
            })
        );
    }
}
