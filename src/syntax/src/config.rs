//! Parser settings.

/// Knobs for a [`Parser`][crate::Parser].
///
/// The defaults reproduce the usual four-space trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Spaces of trace indentation per level of rule nesting.
    pub indent: usize,

    /// How deeply grammar rules may nest before the input is rejected. This
    /// keeps pathological input from overflowing the stack.
    pub max_depth: usize,
}

impl Config {
    pub const DEFAULT_INDENT: usize = 4;
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Use `indent` spaces per level in the trace.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Allow rules to nest at most `max_depth` deep.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: Config::DEFAULT_INDENT,
            max_depth: Config::DEFAULT_MAX_DEPTH,
        }
    }
}
