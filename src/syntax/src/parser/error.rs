//! Syntax errors
//!
//! A parse stops at the first problem, so there's only ever one of these per
//! attempt. It remembers the lookahead the parser was holding when it gave up.

use diagnostic::{Diagnostic, Span};
use thiserror::Error;

use crate::lexer::{self, Category};

/// The error produced when input doesn't match the grammar.
///
/// The `Display` form is the classic one-line report, something like
/// `ERROR: Line 3: Invalid input: ;`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ERROR: Line {line}: Invalid input: {lexeme}")]
pub struct SyntaxError {
    line: u32,
    lexeme: String,
    span: Option<Span>,
    reason: Reason,
}

impl SyntaxError {
    pub(crate) fn new(line: u32, lexeme: impl Into<String>, span: Option<Span>, reason: Reason) -> Self {
        SyntaxError {
            line,
            lexeme: lexeme.into(),
            span,
            reason,
        }
    }

    /// The line of the offending lexeme, counting from one.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The text of the offending lexeme, or `<EOF>` if the input ran out.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// Where the offending lexeme is, if it's anywhere.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Why the lexeme wasn't accepted.
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

/// What the parser was expecting when it failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("expected {}", .0.name())]
    Expected(Category),

    #[error("this can't start {0}")]
    NotStartOf(&'static str),

    #[error("type arguments must be followed by a variable name")]
    TypeArgumentsOutsideDeclaration,

    #[error("expected the end of the input after the class")]
    TrailingInput,

    #[error("the input is nested too deeply")]
    DepthExceeded,

    #[error("{0}")]
    Lexical(lexer::Error),
}

impl From<&SyntaxError> for Diagnostic {
    fn from(e: &SyntaxError) -> Self {
        let mut diagnostic = Diagnostic::new(format!("invalid input: {}", e.lexeme()));

        diagnostic = match e.span() {
            Some(span) => diagnostic
                .location(span.start())
                .highlight(span, e.reason().to_string()),
            None => diagnostic.info(e.reason().to_string()),
        };

        match e.reason() {
            Reason::TypeArgumentsOutsideDeclaration => diagnostic.help(
                "a name with type arguments is a type, so a declaration like `List<T> items;` was expected",
            ),
            Reason::DepthExceeded => {
                diagnostic.help("try splitting the nested code up, or allow more nesting with --max-depth")
            }
            Reason::Lexical(lexer::Error::UnclosedComment(_)) => {
                diagnostic.help("block comments end with `*/`")
            }
            _ => diagnostic,
        }
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(e: SyntaxError) -> Self {
        Diagnostic::from(&e)
    }
}
