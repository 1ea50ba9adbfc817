//! Traces - the record of a parse.
//!
//! Every rule the parser enters or leaves, and every lexeme it consumes, adds
//! one line. Lines are indented by how deeply nested the parser was at the
//! time, so the trace reads as a derivation tree.

use std::fmt;

/// The ordered lines of a derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    lines: Vec<String>,
    indent: usize,
}

impl Trace {
    /// An empty trace which indents by `indent` spaces per level.
    pub fn new(indent: usize) -> Self {
        Trace {
            lines: Vec::new(),
            indent,
        }
    }

    /// Add a line at some depth.
    pub(crate) fn record(&mut self, depth: usize, event: impl fmt::Display) {
        let padding = depth * self.indent;
        self.lines.push(format!("{:padding$}{}", "", event));
    }

    /// The lines so far, without line breaks.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}

impl<'t> IntoIterator for &'t Trace {
    type Item = &'t String;
    type IntoIter = std::slice::Iter<'t, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// One line per event, each ending in a newline.
impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indentation() {
        let mut trace = Trace::new(4);
        trace.record(0, "Enter <a>");
        trace.record(1, "x");
        trace.record(0, "Exit <a>");
        assert_eq!(trace.lines(), ["Enter <a>", "    x", "Exit <a>"]);
        assert_eq!(trace.to_string(), "Enter <a>\n    x\nExit <a>\n");
    }

    #[test]
    fn custom_indent() {
        let mut trace = Trace::new(2);
        trace.record(2, "deep");
        assert_eq!(trace.first(), Some("    deep"));
    }
}
