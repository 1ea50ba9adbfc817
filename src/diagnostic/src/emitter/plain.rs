//! A simple, safe, ascii-focused plain-text emitter.
//!
//! This should be a safe fall-back when we don't know what the output device
//! looks like, and it's what tests use since the output is easy to compare.

use std::io::{self, Write};

use super::Emitter;
use crate::{Diagnostic, InputCoordinator};

pub struct PlainEmitter<W> {
    out: W,
}

impl PlainEmitter<io::Stderr> {
    /// A plain emitter writing to standard error.
    pub fn stderr() -> Self {
        PlainEmitter::new(io::stderr())
    }
}

impl<W: Write> PlainEmitter<W> {
    pub fn new(out: W) -> Self {
        PlainEmitter { out }
    }

    /// Give back the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Emitter for PlainEmitter<W> {
    fn emit(&mut self, d: &Diagnostic, inputs: &InputCoordinator) -> io::Result<()> {
        write!(self.out, "{}", d.get_level())?;

        let name = d.get_input().map(|id| inputs.get_input_name(id));

        match (name, d.get_location()) {
            (None, None) => write!(self.out, ": ")?,
            (None, Some(l)) => write!(self.out, " {l}: ")?,
            (Some(n), None) => write!(self.out, ": {n} - ")?,
            (Some(n), Some(l)) => write!(self.out, ": {n}:{l} - ")?,
        }

        writeln!(self.out, "{}", d.get_text())?;

        for note in d.get_notes() {
            writeln!(self.out, "{note}")?;
        }

        self.out.flush()
    }
}
