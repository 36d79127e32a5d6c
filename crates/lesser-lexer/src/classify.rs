//! Character classes driving the scanner.
//!
//! Every predicate is pure; the scanner tries them in a fixed order
//! (comment, whitespace, operator, digit, identifier).

/// Characters with no meaning in the language. They are neither operators
/// nor identifier constituents, so the scanner rejects them.
pub const RESERVED: &[char] = &['$', '`', '\\', '^'];

pub fn is_comment(c: char) -> bool {
    c == '/'
}

pub fn is_operator(c: char) -> bool {
    matches!(c, ':' | '=' | '{' | '}' | '@' | ';' | '.' | '#')
}

pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Anything that is not an operator, digit, whitespace, control or
/// reserved character: letters, `-`, `%`, `/`, `(`, `,` and so on.
pub fn is_identifier_char(c: char) -> bool {
    !is_operator(c)
        && !is_digit(c)
        && !is_whitespace(c)
        && !c.is_control()
        && !RESERVED.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment() {
        assert!(is_comment('/'));
        assert!(!is_comment('*'));
    }

    #[test]
    fn test_operators() {
        for c in [':', '=', '{', '}', '@', ';', '.', '#'] {
            assert!(is_operator(c), "{c} should be an operator");
            assert!(!is_identifier_char(c));
        }
        assert!(!is_operator('-'));
    }

    #[test]
    fn test_digits() {
        assert!(is_digit('0'));
        assert!(is_digit('9'));
        assert!(!is_digit('a'));
        assert!(!is_identifier_char('5'));
    }

    #[test]
    fn test_whitespace() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(!is_identifier_char(' '));
    }

    #[test]
    fn test_identifier_chars() {
        for c in ['a', 'Z', '-', '_', '%', '/', '(', ')', ',', '!', 'é'] {
            assert!(is_identifier_char(c), "{c} should be an identifier char");
        }
    }

    #[test]
    fn test_reserved_chars_match_nothing() {
        for &c in RESERVED {
            assert!(!is_operator(c));
            assert!(!is_digit(c));
            assert!(!is_whitespace(c));
            assert!(!is_identifier_char(c));
        }
        assert!(!is_identifier_char('\u{7}'));
    }
}
