//! Lexing, parsing, and the labeled parse-tree model for GraphQL SDL
//! documents.
//!
//! The parser here is deliberately not a general GraphQL parser: it covers
//! the type-system sublanguage (type/interface/input/enum/scalar/union
//! definitions, directive definitions, and schema blocks) and builds a
//! concrete, position-labeled [`tree::Tree`] that preserves enough layout
//! information for a pretty-printer to re-render the document. Semantic
//! policies plug into the parse via the [`SdlSemantics`] trait and may
//! rewrite or suppress definitions as they are produced.

mod lexer;
mod parse_error;
mod parser;
mod semantics;
mod source_position;
pub mod token;
pub mod tree;

pub use lexer::{LexError, Lexer};
pub use parse_error::ParseError;
pub use parser::SdlParser;
pub use semantics::{Disposition, PassthroughSemantics, SdlSemantics};
pub use source_position::SourcePosition;

mod token_stream;
pub use token_stream::TokenStream;

#[cfg(test)]
mod tests;
