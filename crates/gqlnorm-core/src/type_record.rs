use gqlnorm_parser::tree::NodeId;

use crate::{DirectiveEntry, FieldEntry};

/// The registry's view of an object or interface definition.
#[derive(Clone, Debug)]
pub struct TypeRecord {
    pub name: String,
    /// The definition record fragment.
    pub def: NodeId,
    /// The inner field-wrapper sequence of the definition's `{ ... }`
    /// block. Merged fields from later duplicates are appended here.
    pub fields_seq: NodeId,
    pub fields: Vec<FieldEntry>,
    /// The single implemented interface, for object types that declare
    /// one.
    pub implements: Option<String>,
    /// Type-level directives, including stripped hook applications.
    pub directives: Vec<DirectiveEntry>,
}
