//! Lexer errors

use diagnostic::Caret;
use thiserror::Error;

/// Lexical errors, with the caret where the offending construct began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no lexeme can start with a '{1}'")]
    NotStartOfLexeme(Caret, char),

    #[error("block comment is never closed")]
    UnclosedComment(Caret),

    #[error("string literal is never closed")]
    UnclosedString(Caret),

    #[error("character literal is never closed")]
    UnclosedCharacter(Caret),

    #[error("'@' must be followed by a name")]
    EmptyAnnotation(Caret),
}

impl Error {
    /// Where the problem starts.
    pub fn caret(&self) -> Caret {
        match self {
            Error::NotStartOfLexeme(c, _)
            | Error::UnclosedComment(c)
            | Error::UnclosedString(c)
            | Error::UnclosedCharacter(c)
            | Error::EmptyAnnotation(c) => *c,
        }
    }

    /// The line the problem starts on.
    pub fn line(&self) -> u32 {
        self.caret().line()
    }
}
