//! Pretty printing of diagnostic messages.
//!
//! This module handles all the external libraries we need to do this (mostly)
//! right, and wraps them up in a single configurable printer.

use std::borrow::Cow;
use std::io::Result;

use term_size::dimensions_stderr;
use termcolor::{BufferedStandardStream, Color, ColorChoice, ColorSpec, WriteColor};
use textwrap::Options;
use unicode_width::UnicodeWidthStr;

use super::{Emitter, LineArt};
use crate::{Diagnostic, Highlight, InputCoordinator, InputId, Level, Message};

/// A printer for terminals, with colour, wrapping, and source excerpts.
pub struct TerminalEmitter<W> {
    /// Output stream.
    out: W,
    /// The set of line art characters to use.
    line_art: LineArt,
    /// The max width of the output
    width: usize,
}

impl TerminalEmitter<BufferedStandardStream> {
    /// Prints to stderr, sized to the terminal if there is one.
    ///
    /// Unicode line art is only used when colour is allowed, on the theory
    /// that a terminal which can't do one probably can't do the other.
    pub fn stderr(choice: ColorChoice) -> Self {
        let width = match dimensions_stderr() {
            Some((w, _)) if w >= Self::MIN_WIDTH => w,
            _ => Self::DEFAULT_WIDTH,
        };

        let line_art = match choice {
            ColorChoice::Never => LineArt::ASCII,
            _ => LineArt::UNICODE,
        };

        TerminalEmitter {
            out: BufferedStandardStream::stderr(choice),
            line_art,
            width,
        }
    }
}

impl<W: WriteColor> TerminalEmitter<W> {
    /// The default terminal width used if the actual terminal is below
    /// `MIN_WIDTH`.
    pub const DEFAULT_WIDTH: usize = 80;

    /// The narrowest allowed terminal size that things will be wrapped to, any
    /// smaller and we use `DEFAULT_WIDTH` instead to maintain readability.
    pub const MIN_WIDTH: usize = 40;

    /// An emitter over any colour-aware stream.
    pub fn new(out: W, line_art: LineArt, width: usize) -> Self {
        TerminalEmitter {
            out,
            line_art,
            width: width.max(Self::MIN_WIDTH),
        }
    }

    /// Give back the output stream.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// How wide is a string when printed?
    ///
    /// This isn't the same as the string's `s.len()` which counts bytes, or the
    /// `s.chars().count()` as some rendered characters are multiple code points
    /// (and some single code points may be double wide in a terminal).
    fn presentation_width(s: &str) -> usize {
        UnicodeWidthStr::width(s)
    }

    /// Line wrapping for message text.
    fn wrap<'a>(&self, text: &'a str, width: usize) -> Vec<Cow<'a, str>> {
        textwrap::wrap(text, Options::new(width))
    }

    /// Prints `len` number of the `padding` character.
    fn pad(&mut self, padding: char, len: usize) -> Result<()> {
        for _ in 0..len {
            write!(self.out, "{}", padding)?;
        }
        Ok(())
    }

    /// Set the output to print dimmed text.
    fn dim_spec(&mut self) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        self.out.set_color(&spec)
    }

    /// Set the output to highlight printed text.
    fn highlight_spec(&mut self) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec.set_fg(Some(Color::Yellow));
        self.out.set_color(&spec)
    }

    /// Reset the printed style to the default.
    fn reset_spec(&mut self) -> Result<()> {
        self.out.reset()
    }

    /// Set the spec of the settings for this level.
    fn set_level_spec(&mut self, level: Level) -> Result<()> {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        let color = match level {
            Level::Error => Color::Red,
            Level::Help => Color::Green,
            Level::Info => Color::Blue,
        };
        spec.set_fg(Some(color));
        self.out.set_color(&spec)
    }
}

impl<W: WriteColor> Emitter for TerminalEmitter<W> {
    fn emit(&mut self, d: &Diagnostic, inputs: &InputCoordinator) -> Result<()> {
        let level = d.get_level();
        self.emit_message(level, d.get_text())?;

        if let Some(id) = d.get_input() {
            self.emit_location(d, inputs, id)?;

            for highlight in d.get_highlights() {
                self.emit_excerpt(highlight, inputs, id)?;
            }
        }

        for note in d.get_notes() {
            self.emit_note(note)?;
        }

        self.out.flush()
    }
}

// For emitter
impl<W: WriteColor> TerminalEmitter<W> {
    fn emit_message(&mut self, level: Level, text: &str) -> Result<()> {
        // The coloured prefix also decides how much subsequent lines are
        // indented.
        let prefix_length = self.emit_message_level(level)?;
        let wrap_width = self.width.saturating_sub(prefix_length).max(1);

        let lines = self.wrap(text, wrap_width);

        // First line doesn't have a prefix, since it comes after the level.
        match lines.first() {
            Some(first) => writeln!(self.out, "{}", first)?,
            None => writeln!(self.out)?,
        }

        // Subsequent lines are indented by the length of the level name, to
        // align with the `:`.
        for line in lines.iter().skip(1) {
            self.pad(' ', prefix_length)?;
            writeln!(self.out, "{}", line)?;
        }

        Ok(())
    }

    fn emit_note(&mut self, note: &Message) -> Result<()> {
        self.emit_message(note.level(), note.text())
    }

    /// Emits the coloured prefix of the message, which is the level name with a
    /// `": "` at the end for spacing. This will set and reset the colour too.
    fn emit_message_level(&mut self, level: Level) -> Result<usize> {
        self.set_level_spec(level)?;
        write!(self.out, "{}: ", level.name())?;
        self.reset_spec()?;
        Ok(level.name().len() + ": ".len())
    }

    fn emit_location(&mut self, d: &Diagnostic, inputs: &InputCoordinator, id: InputId) -> Result<()> {
        let name = inputs.get_input_name(id);
        self.dim_spec()?;
        write!(self.out, "  {} ", self.line_art.arrow)?;
        self.reset_spec()?;

        match d.get_location() {
            Some(l) => writeln!(self.out, "{name}:{l}"),
            None => writeln!(self.out, "{name}"),
        }
    }

    /// Show the first line of a highlight with an underline below the
    /// highlighted part. Highlights over several lines are underlined to the
    /// end of their first line.
    fn emit_excerpt(&mut self, highlight: &Highlight, inputs: &InputCoordinator, id: InputId) -> Result<()> {
        let span = highlight.span();
        let line_number = span.start().line();

        let line = match inputs.get_line(id, line_number) {
            Some(line) => line,
            None => return Ok(()),
        };

        let start = span.start().column() as usize;
        let end = if span.is_single_line() {
            span.end().column() as usize
        } else {
            line.chars().count()
        };

        let before: String = line.chars().take(start).collect();
        let marked: String = line.chars().skip(start).take(end.saturating_sub(start)).collect();

        let gutter = line_number.to_string().len();
        let vertical = self.line_art.vertical;

        self.dim_spec()?;
        self.pad(' ', gutter + 1)?;
        writeln!(self.out, "{vertical}")?;
        write!(self.out, "{line_number} {vertical} ")?;
        self.reset_spec()?;
        writeln!(self.out, "{}", line)?;

        self.dim_spec()?;
        self.pad(' ', gutter + 1)?;
        write!(self.out, "{vertical} ")?;
        self.reset_spec()?;

        self.pad(' ', Self::presentation_width(&before))?;
        self.highlight_spec()?;
        self.pad(self.line_art.underline, Self::presentation_width(&marked).max(1))?;

        if !highlight.note().is_empty() {
            write!(self.out, " {}", highlight.note())?;
        }

        self.reset_spec()?;
        writeln!(self.out)
    }
}
