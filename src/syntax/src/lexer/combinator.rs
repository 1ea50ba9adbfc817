//! Character level steps the lexical rules are written with.
//!
//! Nothing in here fails with an [`Error`][crate::lexer::Error]. A step that
//! doesn't match says so with `None` or `false`, and the rule using it decides
//! what that means.

use crate::lexer::Lexer;

impl<'i> Lexer<'i> {
    /// The next character, without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.remaining_input().chars().next()
    }

    /// The character after the next one, for the two character decisions
    /// like telling `/*` from `/`.
    pub(crate) fn peek_second(&self) -> Option<char> {
        self.remaining_input().chars().nth(1)
    }

    /// Consume one character.
    ///
    /// Everything that consumes input goes through here, so the caret is only
    /// ever moved in one place and each newline counts once.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.location.increment(c);
        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consume the next character only if it's `expected`.
    pub(crate) fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume characters for as long as `predicate` holds, returning them.
    /// This can be empty.
    pub(crate) fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'i str {
        let start = self.offset;

        while self.peek().map_or(false, &predicate) {
            self.advance();
        }

        &self.input[start..self.offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peeking_consumes_nothing() {
        let lexer = Lexer::new("ab");
        assert_eq!(lexer.peek(), Some('a'));
        assert_eq!(lexer.peek_second(), Some('b'));
        assert_eq!(lexer.remaining_input(), "ab");
        assert_eq!(Lexer::new("a").peek_second(), None);
    }

    #[test]
    fn advance_moves_the_caret() {
        let mut lexer = Lexer::new("é\nb");
        assert_eq!(lexer.advance(), Some('é'));
        assert_eq!(lexer.location().column(), 1);
        assert_eq!(lexer.advance(), Some('\n'));
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.location().column(), 0);
        assert_eq!(lexer.remaining_input(), "b");
    }

    #[test]
    fn advance_at_the_end() {
        let mut lexer = Lexer::new("");
        assert_eq!(lexer.advance(), None);
        assert_eq!(lexer.line(), 1);
    }

    #[test]
    fn eat() {
        let mut lexer = Lexer::new("*/");
        assert!(!lexer.eat('/'));
        assert!(lexer.eat('*'));
        assert!(lexer.eat('/'));
        assert!(lexer.is_empty());
    }

    #[test]
    fn take_while() {
        let mut lexer = Lexer::new("aababbcab");
        assert_eq!(lexer.take_while(|c| c == 'a' || c == 'b'), "aababb");
        assert_eq!(lexer.take_while(|c| c == 'a'), "");
        assert_eq!(lexer.remaining_input(), "cab");
    }
}
