use crate::classify::{is_comment, is_digit, is_identifier_char, is_whitespace};
use crate::cursor::CharCursor;
use crate::token::{Span, Token, TokenKind};
use crate::LexerError;

/// lesser source scanner.
///
/// Lexes input one line at a time. The character cursor is re-targeted at
/// each new line while the token sequence keeps growing, so the program is
/// the concatenation of every per-line pass.
#[derive(Debug, Default)]
pub struct Scanner {
    cursor: CharCursor,
    tokens: Vec<Token>,
    line: usize,
}

impl Scanner {
    /// Create a scanner with an empty token sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize a complete source, line by line.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        Self::tokenize_lines(source.lines())
    }

    /// Tokenize lines in the order given.
    pub fn tokenize_lines<I, S>(lines: I) -> Result<Vec<Token>, LexerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut scanner = Scanner::new();
        for (idx, line) in lines.into_iter().enumerate() {
            scanner.scan_line(idx + 1, line.as_ref())?;
        }
        Ok(scanner.finish())
    }

    /// Trim and lex one line, appending its tokens.
    pub fn scan_line(&mut self, line: usize, text: &str) -> Result<(), LexerError> {
        self.line = line;
        self.cursor.reset(text.trim());

        while let Some(c) = self.cursor.current() {
            // `//` ends the line
            if is_comment(c) && self.cursor.peek().is_some_and(is_comment) {
                break;
            }

            if is_whitespace(c) {
                self.cursor.advance();
            } else if let Some(kind) = TokenKind::operator(c) {
                self.emit(kind, self.cursor.column());
                self.cursor.advance();
            } else if is_digit(c) {
                self.scan_number()?;
            } else if is_identifier_char(c) {
                self.scan_identifier();
            } else {
                return Err(LexerError::UnrecognizedToken {
                    ch: c,
                    line: self.line,
                    column: self.cursor.column(),
                });
            }
        }

        Ok(())
    }

    /// Number of tokens produced so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Hand the accumulated token sequence over.
    pub fn finish(self) -> Vec<Token> {
        log::debug!("lexed {} tokens from {} lines", self.tokens.len(), self.line);
        self.tokens
    }

    /// Scan a run of digits. `.` is always an operator, so a literal such
    /// as `1.5` comes out as `1`, `.`, `5`. A run too long to fit an `f64`
    /// is rejected rather than rendered as `inf`.
    fn scan_number(&mut self) -> Result<(), LexerError> {
        let column = self.cursor.column();
        let mut digits = String::new();

        while let Some(c) = self.cursor.current().filter(|&c| is_digit(c)) {
            digits.push(c);
            self.cursor.advance();
        }

        let value = digits
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LexerError::InvalidNumber {
                literal: digits.clone(),
                line: self.line,
                column,
            })?;
        self.emit(TokenKind::Number(value), column);
        Ok(())
    }

    /// Scan a greedy run of identifier characters.
    fn scan_identifier(&mut self) {
        let column = self.cursor.column();
        let mut ident = String::new();

        while let Some(c) = self.cursor.current().filter(|&c| is_identifier_char(c)) {
            ident.push(c);
            self.cursor.advance();
        }

        self.emit(TokenKind::Identifier(ident), column);
    }

    fn emit(&mut self, kind: TokenKind, column: usize) {
        self.tokens
            .push(Token::new(kind, Span::new(self.line, column)));
    }
}
