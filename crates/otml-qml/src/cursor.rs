// ── Cursor ────────────────────────────────────────────────────────────────

/// Index-addressed reader over an in-memory source.
///
/// Tracks a 1-based line number: every `'\n'` consumed by [`advance`]
/// bumps it, and [`retreat`] over a newline takes it back, so `line()` is
/// always one plus the number of newlines before the cursor.
///
/// [`advance`]: Cursor::advance
/// [`retreat`]: Cursor::retreat
pub struct Cursor<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    /// Byte width of the last consumed char, cleared once it is pushed back.
    last: Option<usize>,
}

impl<'s> Cursor<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, last: None }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        self.last = Some(ch.len_utf8());
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Push the last consumed char back. Only one step of history is kept;
    /// a second call before the next `advance` does nothing.
    pub fn retreat(&mut self) {
        if let Some(width) = self.last.take() {
            self.pos -= width;
            if self.src[self.pos..].starts_with('\n') {
                self.line -= 1;
            }
        }
    }

    /// Consume the next char if it equals `expected`.
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skip spaces and tabs only; newlines stay put.
    pub fn skip_blanks(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t')) {
            self.advance();
        }
    }

    /// Skip whitespace, `//` line comments and `/* */` block comments.
    ///
    /// An unterminated block comment runs to end of input without error.
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.advance() {
            if ch.is_whitespace() {
                continue;
            }
            if ch == '/' && self.peek() == Some('/') {
                self.skip_line();
            } else if ch == '/' && self.peek() == Some('*') {
                self.advance(); // consume `*`
                while let Some(c) = self.advance() {
                    if c == '*' && self.eat('/') {
                        break;
                    }
                }
            } else {
                self.retreat();
                break;
            }
        }
    }

    /// Consume through the next newline (or to end of input).
    pub fn skip_line(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' {
                break;
            }
        }
    }

    /// Consume through the next newline or `;`, whichever comes first.
    pub fn skip_statement(&mut self) {
        while let Some(ch) = self.advance() {
            if ch == '\n' || ch == ';' {
                break;
            }
        }
    }

    /// Consume chars while `pred` holds and return them as a slice.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'s str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    /// Letters, digits, `_`, `.` and `-`.
    pub fn read_identifier(&mut self) -> &'s str {
        self.take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_counts_lines() {
        let mut c = Cursor::new("a\nb");
        assert_eq!(c.advance(), Some('a'));
        assert_eq!(c.advance(), Some('\n'));
        assert_eq!(c.line(), 2);
        assert_eq!(c.advance(), Some('b'));
        assert_eq!(c.advance(), None);
        assert!(c.is_eof());
    }

    #[test]
    fn retreat_is_single_step() {
        let mut c = Cursor::new("xy");
        c.advance();
        c.advance();
        c.retreat();
        c.retreat();
        assert_eq!(c.peek(), Some('y'));
    }

    #[test]
    fn retreat_over_newline_restores_line() {
        let mut c = Cursor::new("\nz");
        c.advance();
        assert_eq!(c.line(), 2);
        c.retreat();
        assert_eq!(c.line(), 1);
        assert_eq!(c.peek(), Some('\n'));
    }

    #[test]
    fn retreat_handles_multibyte() {
        let mut c = Cursor::new("é!");
        assert_eq!(c.advance(), Some('é'));
        c.retreat();
        assert_eq!(c.peek(), Some('é'));
    }

    #[test]
    fn skip_line_comment() {
        let mut c = Cursor::new("  // note\nid: val");
        c.skip_whitespace();
        assert_eq!(c.line(), 2);
        assert_eq!(c.peek(), Some('i'));
    }

    #[test]
    fn skip_block_comment_counts_newlines() {
        let mut c = Cursor::new("/* a\n b\n */ X");
        c.skip_whitespace();
        assert_eq!(c.line(), 3);
        assert_eq!(c.peek(), Some('X'));
    }

    #[test]
    fn unterminated_block_comment_stops_at_eof() {
        let mut c = Cursor::new("/* open\n forever");
        c.skip_whitespace();
        assert!(c.is_eof());
        assert_eq!(c.line(), 2);
    }

    #[test]
    fn lone_slash_is_pushed_back() {
        let mut c = Cursor::new(" / 2");
        c.skip_whitespace();
        assert_eq!(c.peek(), Some('/'));
    }

    #[test]
    fn identifier_chars() {
        let mut c = Cursor::new("anchors.left-edge_2: x");
        assert_eq!(c.read_identifier(), "anchors.left-edge_2");
        assert_eq!(c.peek(), Some(':'));
    }

    #[test]
    fn skip_statement_stops_at_semicolon() {
        let mut c = Cursor::new("clicked(int x); next");
        c.skip_statement();
        assert_eq!(c.peek(), Some(' '));
        assert_eq!(c.line(), 1);
    }
}
