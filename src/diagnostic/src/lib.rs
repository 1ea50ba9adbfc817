//! Diagnostics - user-readable messages about problems in some input.
//!
//! A [`Diagnostic`] says what went wrong and where, and an [`Emitter`] decides
//! how that gets shown to a person. The source text itself lives in an
//! [`InputCoordinator`] so diagnostics only need to carry an [`InputId`].

mod caret;
mod diagnostic;
mod emitter;
mod input_coordinator;
mod message;
mod span;

pub use self::{
    caret::Caret,
    diagnostic::{Diagnostic, Highlight},
    emitter::{Emitter, LineArt, PlainEmitter, TerminalEmitter},
    input_coordinator::{InputCoordinator, InputId},
    message::{Level, Message},
    span::Span,
};

pub use termcolor::ColorChoice;
