//! Semantic normalization of GraphQL SDL documents.
//!
//! This crate layers engine-specific meaning on top of the parse trees
//! built by `gqlnorm-parser`: a [`Registry`] that deduplicates and merges
//! repeated definitions, inheritance and directive-propagation passes, the
//! two engine policies ([`GqlgenSemantics`] and [`DgraphSemantics`]), and
//! the position-driven pretty-printer that renders the rewritten tree back
//! to SDL text. The one-call entry point is [`normalize`].

pub mod conventions;
mod directive_entry;
mod field_entry;
pub mod fragment;
mod input_link;
mod input_record;
mod normalize;
pub mod passes;
mod printer;
mod record_kind;
mod registry;
mod semantic_error;
mod semantics;
mod type_record;

pub use directive_entry::DirectiveEntry;
pub use field_entry::FieldEntry;
pub use input_link::InputLink;
pub use input_record::InputRecord;
pub use normalize::{NormalizeError, NormalizeOutput, TargetEngine, normalize};
pub use printer::Printer;
pub use record_kind::RecordKind;
pub use registry::{Registered, Registry};
pub use semantic_error::SemanticError;
pub use semantics::{DgraphSemantics, GqlgenSemantics};
pub use type_record::TypeRecord;

pub use gqlnorm_parser::tree::{NodeId, Tree};

#[cfg(test)]
mod tests;
