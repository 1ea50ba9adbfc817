//! The rules of the lexical grammar

use diagnostic::Caret;
use unicode_xid::UnicodeXID;

use crate::lexer::{Category, Delimiter, Error, Lexer};

impl Lexer<'_> {
    /// This is the main entry point into the lexer internals. The `first`
    /// character has already been consumed, and started at `start`.
    pub(crate) fn category(&mut self, first: char, start: Caret, offset: usize) -> Result<Category, Error> {
        match first {
            '(' => Ok(Category::Open(Delimiter::Parenthesis)),
            ')' => Ok(Category::Close(Delimiter::Parenthesis)),
            '{' => Ok(Category::Open(Delimiter::Brace)),
            '}' => Ok(Category::Close(Delimiter::Brace)),
            '[' => Ok(Category::Open(Delimiter::Bracket)),
            ']' => Ok(Category::Close(Delimiter::Bracket)),

            // These are never merged, the parser decides if they're brackets,
            // comparisons or shifts.
            '<' => Ok(Category::Open(Delimiter::Angle)),
            '>' => Ok(Category::Close(Delimiter::Angle)),

            ';' => Ok(Category::Semicolon),
            ',' => Ok(Category::Comma),
            ':' => Ok(Category::Colon),
            '.' => Ok(Category::Dot),
            '\\' => Ok(Category::Backslash),
            '?' => Ok(Category::QuestionMark),
            '~' => Ok(Category::PrefixOperator),

            '=' | '*' | '+' | '-' | '%' | '!' | '|' | '&' | '^' | '/' => Ok(self.operator(first)),

            '\'' => self.quoted('\'', Error::UnclosedCharacter(start), Category::CharLiteral),
            '"' => self.quoted('"', Error::UnclosedString(start), Category::StringLiteral),

            '@' => self.annotation(start),

            c if c.is_ascii_digit() => {
                self.take_while(|c| c.is_ascii_digit());
                Ok(Category::IntLiteral)
            }
            c if is_identifier_start(c) => Ok(self.word(offset)),

            c => Err(Error::NotStartOfLexeme(start, c)),
        }
    }

    /// Skip whitespace and comments, which never produce lexemes.
    pub(crate) fn skip_trivia(&mut self) -> Result<(), Error> {
        loop {
            self.whitespace();

            match (self.peek(), self.peek_second()) {
                (Some('/'), Some('/')) => self.line_comment(),
                (Some('/'), Some('*')) => self.block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Whitespace is spaces, tabs and line breaks. A `\r` is allowed so that
    /// `\r\n` line endings work, but only the `\n` counts as a new line.
    ///
    /// ```text
    /// Whitespace := (' ' | '\t' | '\n' | '\r')*
    /// ```
    fn whitespace(&mut self) {
        self.take_while(|c| matches!(c, ' ' | '\t' | '\n' | '\r'));
    }

    /// Line comments start with `//` and go up to, but don't include, the
    /// next `\n`.
    fn line_comment(&mut self) {
        self.take_while(|c| c != '\n');
    }

    /// Block comments start with `/*` and end at the first `*/`. They don't
    /// nest.
    fn block_comment(&mut self) -> Result<(), Error> {
        let start = self.location;

        self.advance();
        self.advance();

        loop {
            match self.advance() {
                Some('*') if self.eat('/') => return Ok(()),
                Some(_) => continue,
                None => return Err(Error::UnclosedComment(start)),
            }
        }
    }

    /// Operators use maximal munch, so `+=` is one lexeme and not two.
    ///
    /// The `/` here is never a comment, those are skipped as trivia first.
    fn operator(&mut self, first: char) -> Category {
        use Category::*;

        let (category, length) = match (first, self.peek()) {
            ('=', Some('=')) => (InfixOperator, 2),
            ('=', _) => (AssignmentOperator, 1),
            ('!', Some('=')) => (InfixOperator, 2),
            ('!', _) => (PrefixOperator, 1),
            ('+', Some('+')) => (Increment, 2),
            ('-', Some('-')) => (Decrement, 2),
            ('|', Some('|')) | ('&', Some('&')) => (InfixOperator, 2),
            (_, Some('=')) => (AssignmentOperator, 2),
            ('+', _) => (Plus, 1),
            ('-', _) => (Minus, 1),
            _ => (InfixOperator, 1),
        };

        if length == 2 {
            self.advance();
        }

        category
    }

    /// Character and string literals run to the first unescaped closing
    /// quote. A backslash escapes whatever comes after it, so a quote after
    /// an odd run of backslashes doesn't close the literal.
    fn quoted(&mut self, quote: char, unclosed: Error, category: Category) -> Result<Category, Error> {
        loop {
            match self.advance() {
                Some('\\') => {
                    if self.advance().is_none() {
                        return Err(unclosed);
                    }
                }
                Some(c) if c == quote => return Ok(category),
                Some(_) => continue,
                None => return Err(unclosed),
            }
        }
    }

    /// Annotations like `@Override` are treated like any other modifier.
    fn annotation(&mut self, start: Caret) -> Result<Category, Error> {
        let name = self.take_while(char::is_alphabetic);

        if name.is_empty() {
            Err(Error::EmptyAnnotation(start))
        } else {
            Ok(Category::Modifier)
        }
    }

    /// A word is any keyword, modifier, primitive type or identifier. The
    /// first character is already consumed, and began at `offset`.
    fn word(&mut self, offset: usize) -> Category {
        self.take_while(is_identifier_continue);
        Category::from_word(&self.input[offset..self.offset])
    }
}

/// Is a character a valid beginning to an identifier, i.e.
/// [`is_xid_start`][UnicodeXID::is_xid_start], an underscore or a dollar sign?
fn is_identifier_start(c: char) -> bool {
    c == '_' || c == '$' || UnicodeXID::is_xid_start(c)
}

/// Is a character valid inside an identifier, i.e.
/// [`is_xid_continue`][UnicodeXID::is_xid_continue] or a dollar sign?
fn is_identifier_continue(c: char) -> bool {
    c == '$' || UnicodeXID::is_xid_continue(c)
}
