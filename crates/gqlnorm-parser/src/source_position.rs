use std::fmt;

/// A zero-indexed line/column pair pointing into the source text.
///
/// Rendered one-indexed in error messages, which is what editors and
/// humans expect.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct SourcePosition {
    pub line: usize,
    pub col: usize,
}

impl SourcePosition {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line + 1, self.col + 1)
    }
}
