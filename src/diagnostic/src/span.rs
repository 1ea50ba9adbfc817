//! Stretches of source text.

use std::fmt;

use crate::caret::Caret;

/// The text between two carets. The span of `the` in `the cat` runs from
/// column 0 to column 3, so the end is just past the last character.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Span {
    start: Caret,
    end: Caret,
}

impl Span {
    /// The span between two carets, which can be given in either order.
    pub fn new(a: Caret, b: Caret) -> Self {
        if a <= b {
            Span { start: a, end: b }
        } else {
            Span { start: b, end: a }
        }
    }

    pub fn start(&self) -> Caret {
        self.start
    }

    pub fn end(&self) -> Caret {
        self.end
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line() == self.end.line()
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
