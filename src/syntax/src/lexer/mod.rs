//! The lexical analyzer.
//!
//! The [`Lexer`] turns source text into [`Lexeme`]s on demand, one per call.
//! Whitespace and comments are skipped on the way and never reach the parser.
//! There's no lookahead here beyond a character or two, anything that needs
//! more context (like what a `>` means) is left to the parser.

// Not an `Iterator`: a `while let Some(..) = lexer.next_lexeme()?` loop reads
// better than `Option<Result<..>>`.

mod combinator;
mod error;
mod rules;
mod token;

use diagnostic::{Caret, Span};

pub use crate::lexer::{
    error::Error,
    token::{Category, Delimiter, Keyword, Lexeme},
};

/// Hands out the [`Lexeme`]s in some input, in order.
///
/// # Example
///
/// ```
/// # use syntax::lexer::Lexer;
/// let mut lexer = Lexer::new("class A { }");
/// while let Ok(Some(lexeme)) = lexer.next_lexeme() {
///     // do something with lexeme
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'i> {
    pub(crate) input: &'i str,

    /// Where the next character is, for spans and line numbers.
    pub(crate) location: Caret,

    /// Where the next character is in `input`, in bytes.
    pub(crate) offset: usize,
}

impl<'i> Lexer<'i> {
    /// Create a new lexer over some input.
    pub fn new(input: &'i str) -> Self {
        Lexer {
            input,
            location: Caret::default(),
            offset: 0,
        }
    }

    /// Is every byte of the input behind the lexer? Trailing whitespace
    /// counts as input here, so this can be false when
    /// [`Lexer::next_lexeme`] has nothing left to give.
    pub fn is_empty(&self) -> bool {
        self.offset == self.input.len()
    }

    /// The line the lexer is on, counting from one. This goes up once for
    /// every newline consumed, including those in comments and literals.
    pub fn line(&self) -> u32 {
        self.location.line()
    }

    /// Where the lexer is in the input.
    pub fn location(&self) -> Caret {
        self.location
    }
}

impl<'i> Lexer<'i> {
    /// Produce the next lexeme (or [`Error`]), advancing the lexer.
    ///
    /// This returns `Ok(None)` once only whitespace and comments are left.
    ///
    /// # Examples
    ///
    /// ```
    /// # use syntax::lexer::{Category, Lexer};
    /// let mut lexer = Lexer::new("x += 1");
    /// let lexeme = lexer.next_lexeme().unwrap().unwrap();
    /// assert_eq!(lexeme.category(), Category::Identifier);
    /// let lexeme = lexer.next_lexeme().unwrap().unwrap();
    /// assert_eq!(lexeme.text(), "+=");
    /// ```
    pub fn next_lexeme(&mut self) -> Result<Option<Lexeme<'i>>, Error> {
        self.skip_trivia()?;

        let start_location = self.location;
        let start_offset = self.offset;

        let first = match self.advance() {
            Some(c) => c,
            None => return Ok(None),
        };

        let category = self.category(first, start_location, start_offset)?;

        let span = Span::new(start_location, self.location);
        let text = &self.input[start_offset..self.offset];
        let lexeme = Lexeme::new(category, text, span);

        log::trace!("line {}: {:?} {:?}", span.start().line(), category, text);

        Ok(Some(lexeme))
    }

    /// The input fed into the lexer that hasn't been broken into lexemes yet.
    ///
    /// # Example
    ///
    /// ```
    /// # use syntax::lexer::Lexer;
    /// let mut lexer = Lexer::new("abc def");
    /// let abc = lexer.next_lexeme();
    /// assert_eq!(lexer.remaining_input(), " def");
    /// ```
    pub fn remaining_input(&self) -> &'i str {
        &self.input[self.offset..]
    }
}
