/// Read-only view over one line's characters with one character of lookahead.
#[derive(Debug, Default)]
pub struct CharCursor {
    chars: Vec<char>,
    pos: usize,
}

impl CharCursor {
    pub fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            pos: 0,
        }
    }

    /// Point the cursor at a new line and rewind it.
    pub fn reset(&mut self, line: &str) {
        self.chars.clear();
        self.chars.extend(line.chars());
        self.pos = 0;
    }

    pub fn current(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// 1-based column of the current character.
    pub fn column(&self) -> usize {
        self.pos + 1
    }
}
