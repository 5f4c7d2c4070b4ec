use crate::SourcePosition;
use crate::token::SdlTokenKind;

/// A single token plus the position of its first character.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SdlToken<'src> {
    pub kind: SdlTokenKind<'src>,
    pub position: SourcePosition,
}

impl<'src> SdlToken<'src> {
    pub fn new(kind: SdlTokenKind<'src>, position: SourcePosition) -> Self {
        Self { kind, position }
    }
}
