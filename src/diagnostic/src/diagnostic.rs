//! Diagnostics, and the parts of the source they point at.

use std::fmt;

use crate::{
    caret::Caret,
    input_coordinator::InputId,
    message::{Level, Message},
    Span,
};

/// A stretch of source to show alongside a diagnostic, with a short note
/// printed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    span: Span,
    note: String,
}

impl Highlight {
    pub fn new(span: Span, note: impl Into<String>) -> Highlight {
        Highlight { span, note: note.into() }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The note, which may be empty.
    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Something to tell a person about their input.
///
/// `Display` gives unwrapped plain text. For anything nicer, hand it to an
/// [`Emitter`][crate::Emitter].
///
/// The builder methods take and return `self`. The `get_` and `set_` methods
/// work through references, for the parts (like which input it was) that are
/// only known once the diagnostic reaches the front end.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// Which input this is about.
    input_id: Option<InputId>,

    /// Where the problem begins, if it has a place at all.
    location: Option<Caret>,

    highlights: Vec<Highlight>,

    message: Message,

    /// Follow up messages, like hints on how to fix the problem.
    notes: Vec<Message>,
}

impl Diagnostic {
    /// A new error with nothing but its text.
    pub fn new(text: impl Into<String>) -> Self {
        Diagnostic {
            input_id: None,
            location: None,
            highlights: Vec::new(),
            message: Message::new(Level::default(), text),
            notes: Vec::new(),
        }
    }

    /// Which input, in an [`InputCoordinator`][crate::InputCoordinator],
    /// this is about.
    pub fn input(mut self, id: InputId) -> Self {
        self.input_id = Some(id);
        self
    }

    /// The id of the input that produced this issue.
    pub fn get_input(&self) -> Option<InputId> {
        self.input_id
    }

    /// The location where the issue started.
    pub fn location(mut self, location: Caret) -> Self {
        self.location = Some(location);
        self
    }

    pub fn get_location(&self) -> Option<Caret> {
        self.location
    }

    /// Add a highlight to this diagnostic message.
    pub fn highlight(mut self, span: Span, note: impl Into<String>) -> Self {
        self.highlights.push(Highlight::new(span, note));
        self
    }

    pub fn get_highlights(&self) -> &[Highlight] {
        &self.highlights
    }

    /// Add a hint about how the problem might be fixed.
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.notes.push(Message::new(Level::Help, text));
        self
    }

    /// Add some extra context that isn't a fix.
    pub fn info(mut self, text: impl Into<String>) -> Self {
        self.notes.push(Message::new(Level::Info, text));
        self
    }

    /// The follow up messages, in the order they were added.
    pub fn get_notes(&self) -> &[Message] {
        &self.notes
    }

    /// The main text of the diagnostic.
    pub fn get_text(&self) -> &str {
        self.message.text()
    }

    pub fn get_level(&self) -> Level {
        self.message.level()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.location {
            Some(l) => write!(f, "{} {}: {}", self.get_level(), l, self.get_text())?,
            None => write!(f, "{}", self.message)?,
        }

        for note in &self.notes {
            write!(f, "\n{}", note)?;
        }

        Ok(())
    }
}
