//! Positions in source text.

use std::fmt;

/// A position between two characters of some input.
///
/// Lines count from one, matching how editors and the one-line syntax error
/// number them. Columns count characters from zero, so a caret in column zero
/// sits before the first character of its line.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Caret {
    line: u32,
    column: u32,
}

impl Caret {
    pub fn new(line: u32, column: u32) -> Self {
        Caret { line, column }
    }

    pub fn line(self) -> u32 {
        self.line
    }

    pub fn column(self) -> u32 {
        self.column
    }

    /// Move the caret past `c`.
    ///
    /// Only `\n` starts a new line. A `\r` is just another column, which is
    /// harmless since it's always last on its line. Columns are in code
    /// points, so a character drawn from several code points (some emoji) is
    /// several columns wide.
    pub fn increment(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }
}

/// The start of the input.
impl Default for Caret {
    fn default() -> Self {
        Caret::new(1, 0)
    }
}

/// Shown as `line:column`, with the column counted from one like the line.
impl fmt::Display for Caret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(input: &str) -> Caret {
        let mut caret = Caret::default();
        input.chars().for_each(|c| caret.increment(c));
        caret
    }

    #[test]
    fn lines_order_first() {
        assert!(Caret::new(2, 200) < Caret::new(10, 100));
        assert!(Caret::new(3, 1) < Caret::new(3, 2));
    }

    #[test]
    fn newlines() {
        assert_eq!(after(""), Caret::new(1, 0));
        assert_eq!(after("ab\ncd"), Caret::new(2, 2));
        assert_eq!(after("a\r\n"), Caret::new(2, 0));
    }

    #[test]
    fn code_points() {
        assert_eq!(after("🤦🏼‍♀️").column(), 5);
    }

    #[test]
    fn display() {
        assert_eq!(Caret::new(3, 0).to_string(), "3:1");
    }
}
