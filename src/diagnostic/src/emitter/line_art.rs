//! Line art helpers used by different emitters.

/// Different sets of line art characters, used to draw the gutter and
/// underlines of a source excerpt.
#[derive(Clone, Copy, Debug)]
pub struct LineArt {
    pub(crate) vertical: char,
    pub(crate) underline: char,
    pub(crate) arrow: &'static str,
}

impl LineArt {
    /// Unicode line art symbols
    pub const UNICODE: LineArt = LineArt {
        vertical: '│',
        underline: '─',
        arrow: "→",
    };

    /// ASCII line art symbols
    pub const ASCII: LineArt = LineArt {
        vertical: '|',
        underline: '^',
        arrow: "-->",
    };
}
