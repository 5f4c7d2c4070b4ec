use crate::SourcePosition;
use crate::lexer::LexError;
use crate::tree::TreeError;

/// An error produced while parsing an SDL document.
///
/// Generic over the semantic policy's own error type, which surfaces
/// through [`ParseError::Semantics`] when a hook rejects a definition.
#[derive(Debug, thiserror::Error)]
pub enum ParseError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Semantics(E),

    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("unexpected {found} at {position}: expected {expected}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        position: SourcePosition,
    },

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEof { expected: &'static str },
}
