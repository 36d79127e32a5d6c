use std::fmt;

/// A position in source text, tracking line and column for error reporting.
///
/// `column` counts characters inside the trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Token classification for lesser source.
///
/// Operators are unit variants named after their symbol; literals carry
/// their value directly.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Operators
    Colon,     // :
    Equals,    // =
    LBrace,    // {
    RBrace,    // }
    At,        // @
    Semicolon, // ;
    Dot,       // .
    Hash,      // #

    // Literals
    Number(f64),
    Identifier(String),
}

impl TokenKind {
    /// Map an operator character to its token kind.
    pub fn operator(c: char) -> Option<TokenKind> {
        match c {
            ':' => Some(TokenKind::Colon),
            '=' => Some(TokenKind::Equals),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '@' => Some(TokenKind::At),
            ';' => Some(TokenKind::Semicolon),
            '.' => Some(TokenKind::Dot),
            '#' => Some(TokenKind::Hash),
            _ => None,
        }
    }

    /// Short description used in parser diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Number(_) => "number".into(),
            TokenKind::Identifier(_) => "identifier".into(),
            op => format!("'{op}'"),
        }
    }
}

/// Renders the lexeme: operators as their symbol, numbers in the canonical
/// form of their parsed value, identifiers verbatim.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Colon => f.write_str(":"),
            TokenKind::Equals => f.write_str("="),
            TokenKind::LBrace => f.write_str("{"),
            TokenKind::RBrace => f.write_str("}"),
            TokenKind::At => f.write_str("@"),
            TokenKind::Semicolon => f.write_str(";"),
            TokenKind::Dot => f.write_str("."),
            TokenKind::Hash => f.write_str("#"),
            TokenKind::Number(n) => write!(f, "{n}"),
            TokenKind::Identifier(s) => f.write_str(s),
        }
    }
}

/// A token produced by the lesser lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The literal text this token contributes to a concatenated run.
    pub fn text(&self) -> String {
        self.kind.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operator_lookup() {
        assert_eq!(TokenKind::operator('{'), Some(TokenKind::LBrace));
        assert_eq!(TokenKind::operator('#'), Some(TokenKind::Hash));
        assert_eq!(TokenKind::operator('a'), None);
        assert_eq!(TokenKind::operator('/'), None);
    }

    #[test]
    fn test_number_text_is_canonical() {
        assert_eq!(TokenKind::Number(7.0).to_string(), "7");
        assert_eq!(TokenKind::Number(120.0).to_string(), "120");
    }

    #[test]
    fn test_token_text() {
        let tok = Token::new(TokenKind::Identifier("px".into()), Span::new(1, 1));
        assert_eq!(tok.text(), "px");
        let tok = Token::new(TokenKind::Semicolon, Span::new(1, 4));
        assert_eq!(tok.text(), ";");
    }

    #[test]
    fn test_describe() {
        assert_eq!(TokenKind::Semicolon.describe(), "';'");
        assert_eq!(TokenKind::Number(1.0).describe(), "number");
        assert_eq!(TokenKind::Identifier("a".into()).describe(), "identifier");
    }
}
