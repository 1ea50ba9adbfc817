//! A parser.
//!
//! The [`Parser`] is a recursive descent recognizer with one method per
//! grammar rule. The rules themselves live in the modules next to this one,
//! this module has the machinery they share: the lookahead window, the single
//! consuming primitive, and the wrapper that traces each rule.

mod error;

use std::collections::VecDeque;

use diagnostic::{Caret, Span};

pub use self::error::{Reason, SyntaxError};

use crate::{
    config::Config,
    lexer::{self, Category, Lexeme, Lexer},
    trace::Trace,
};

/// A Parser pulls lexemes from a [`Lexer`] as its rules need them, and
/// records the derivation it walks in a [`Trace`].
///
/// # Example
///
/// ```
/// # use syntax::Parser;
/// let mut parser = Parser::new("class A { }");
/// assert!(parser.start().is_ok());
/// assert_eq!(parser.trace().first(), Some("Enter <program>"));
/// ```
#[derive(Debug)]
pub struct Parser<'i> {
    lexer: Lexer<'i>,

    /// Lexemes fetched but not consumed. The front is the lookahead, anything
    /// past it has only been peeked at.
    window: VecDeque<Slot<'i>>,

    trace: Trace,

    /// How many rules deep we are. This drives the trace indentation and the
    /// nesting limit.
    depth: usize,

    config: Config,

    /// The result of the one and only parse.
    outcome: Option<Result<(), SyntaxError>>,
}

/// A position in the lookahead window.
#[derive(Debug, Clone, Copy)]
enum Slot<'i> {
    Lexeme(Lexeme<'i>),
    End,
    /// The lexer failed here. Like `End`, everything after this is the same.
    Broken(lexer::Error),
}

impl<'i> Parser<'i> {
    /// Create a parser over some input with the default configuration.
    pub fn new(input: &'i str) -> Self {
        Parser::with_config(input, Config::default())
    }

    /// Create a parser over some input with a specific configuration.
    pub fn with_config(input: &'i str, config: Config) -> Self {
        Parser {
            lexer: Lexer::new(input),
            window: VecDeque::new(),
            trace: Trace::new(config.indent),
            depth: 0,
            config,
            outcome: None,
        }
    }

    /// Parse the input as a program.
    ///
    /// Only the first call does any work, calling it again returns the same
    /// result without touching the trace.
    ///
    /// # Example
    ///
    /// ```
    /// # use syntax::Parser;
    /// let mut parser = Parser::new("class A { int x = ; }");
    /// let error = parser.start().unwrap_err();
    /// assert_eq!(error.to_string(), "ERROR: Line 1: Invalid input: ;");
    /// ```
    pub fn start(&mut self) -> Result<(), SyntaxError> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }

        log::debug!("parsing {} bytes of input", self.lexer.input.len());

        let outcome = self.program();

        match &outcome {
            Ok(()) => log::debug!("accepted after {} trace lines", self.trace.len()),
            Err(e) => log::debug!("rejected on line {}: {}", e.line(), e.reason()),
        }

        self.outcome = Some(outcome.clone());
        outcome
    }

    /// The trace so far. After a failed parse this is everything up to the
    /// failure.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Give up the parser, keeping the trace.
    pub fn into_trace(self) -> Trace {
        self.trace
    }

    /// The error from [`Parser::start`], if it failed.
    pub fn error(&self) -> Option<&SyntaxError> {
        self.outcome.as_ref().and_then(|o| o.as_ref().err())
    }

    /// The formatted error from [`Parser::start`], if it failed.
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

// Rule tracing and depth tracking
impl<'i> Parser<'i> {
    /// Run the body of a grammar rule called `name`.
    ///
    /// This writes `Enter <name>` before the body, and `Exit <name>` after it
    /// if it succeeds. A failing body leaves no exit line, but the depth is
    /// restored either way.
    pub(crate) fn rule<T, F>(&mut self, name: &'static str, body: F) -> Result<T, SyntaxError>
    where
        F: FnOnce(&mut Parser<'i>) -> Result<T, SyntaxError>,
    {
        if self.depth >= self.config.max_depth {
            return Err(self.error_here(Reason::DepthExceeded));
        }

        self.trace.record(self.depth, format_args!("Enter <{}>", name));
        self.depth += 1;

        let result = body(self);

        self.depth -= 1;

        if result.is_ok() {
            self.trace.record(self.depth, format_args!("Exit <{}>", name));
        }

        result
    }
}

// Lookahead
impl<'i> Parser<'i> {
    /// Make sure the window reaches position `n`, fetching from the lexer.
    fn fill(&mut self, n: usize) {
        while self.window.len() <= n {
            let slot = match self.window.back() {
                Some(Slot::End) => Slot::End,
                Some(Slot::Broken(e)) => Slot::Broken(*e),
                _ => match self.lexer.next_lexeme() {
                    Ok(Some(lexeme)) => Slot::Lexeme(lexeme),
                    Ok(None) => Slot::End,
                    Err(e) => Slot::Broken(e),
                },
            };

            self.window.push_back(slot);
        }
    }

    fn slot(&mut self, n: usize) -> Slot<'i> {
        self.fill(n);
        self.window[n]
    }

    /// The category of the lookahead, or `None` at the end of input or a
    /// lexical error.
    pub(crate) fn peek(&mut self) -> Option<Category> {
        self.peek_nth(0)
    }

    /// Like [`Parser::peek`] but `n` lexemes further on, so `peek_nth(0)` is
    /// the lookahead.
    pub(crate) fn peek_nth(&mut self, n: usize) -> Option<Category> {
        match self.slot(n) {
            Slot::Lexeme(lexeme) => Some(lexeme.category()),
            _ => None,
        }
    }

    /// The text of the lexeme `n` past the lookahead.
    pub(crate) fn peek_text(&mut self, n: usize) -> Option<&'i str> {
        match self.slot(n) {
            Slot::Lexeme(lexeme) => Some(lexeme.text()),
            _ => None,
        }
    }

    /// Is the lookahead of this category?
    pub(crate) fn at(&mut self, category: Category) -> bool {
        self.peek() == Some(category)
    }

    /// Is the lexeme `n` past the lookahead of this category?
    pub(crate) fn at_nth(&mut self, n: usize, category: Category) -> bool {
        self.peek_nth(n) == Some(category)
    }

    /// Is the lookahead this exact category and text, like the `static`
    /// modifier?
    pub(crate) fn at_text(&mut self, category: Category, text: &str) -> bool {
        self.at_nth_text(0, category, text)
    }

    pub(crate) fn at_nth_text(&mut self, n: usize, category: Category, text: &str) -> bool {
        self.at_nth(n, category) && self.peek_text(n) == Some(text)
    }

    /// Has all the input been consumed?
    pub(crate) fn at_end(&mut self) -> bool {
        matches!(self.slot(0), Slot::End)
    }
}

// Consuming
impl<'i> Parser<'i> {
    /// Consume the lookahead if it's the `expected` category, recording it in
    /// the trace. Otherwise it's an error and nothing is recorded.
    ///
    /// This is the only way lexemes are consumed.
    pub(crate) fn consume(&mut self, expected: Category) -> Result<Lexeme<'i>, SyntaxError> {
        match self.slot(0) {
            Slot::Lexeme(lexeme) if lexeme.category() == expected => {
                self.trace.record(self.depth, lexeme);
                self.window.pop_front();
                Ok(lexeme)
            }
            _ => Err(self.error_here(Reason::Expected(expected))),
        }
    }

    /// Consume the lookahead only if it's the `expected` category.
    pub(crate) fn consume_if(&mut self, expected: Category) -> Result<bool, SyntaxError> {
        if self.at(expected) {
            self.consume(expected)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Build an error at the lookahead.
    ///
    /// If the lexer failed at the lookahead, that's reported instead of
    /// `reason` since it's the real problem.
    pub(crate) fn error_here(&mut self, reason: Reason) -> SyntaxError {
        match self.slot(0) {
            Slot::Lexeme(lexeme) => SyntaxError::new(lexeme.line(), lexeme.text(), Some(lexeme.span()), reason),
            Slot::End => {
                let end = self.lexer.location();
                SyntaxError::new(end.line(), "<EOF>", Some(Span::new(end, end)), reason)
            }
            Slot::Broken(e) => {
                let caret = e.caret();
                let text = self.offending_text(e);
                let end = Caret::new(caret.line(), caret.column() + text.chars().count() as u32);
                SyntaxError::new(caret.line(), text, Some(Span::new(caret, end)), Reason::Lexical(e))
            }
        }
    }

    /// The text to blame for a lexical error. An unknown character is blamed
    /// on its own, anything unclosed is blamed from where it opened to the end
    /// of that line.
    fn offending_text(&self, e: lexer::Error) -> String {
        if let lexer::Error::NotStartOfLexeme(_, c) = e {
            return c.to_string();
        }

        let caret = e.caret();
        self.lexer
            .input
            .split('\n')
            .nth(caret.line() as usize - 1)
            .map(|line| line.trim_end_matches('\r').chars().skip(caret.column() as usize).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
impl<'i> Parser<'i> {
    /// Run a single rule over all of the input, for testing rules on their
    /// own.
    pub(crate) fn check<F>(input: &'i str, rule: F) -> Result<Trace, SyntaxError>
    where
        F: FnOnce(&mut Parser<'i>) -> Result<(), SyntaxError>,
    {
        let mut parser = Parser::new(input);
        rule(&mut parser)?;

        if parser.at_end() {
            Ok(parser.into_trace())
        } else {
            Err(parser.error_here(Reason::TrailingInput))
        }
    }
}
