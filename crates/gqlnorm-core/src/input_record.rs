use gqlnorm_parser::tree::NodeId;

use crate::{DirectiveEntry, FieldEntry, InputLink};

/// The registry's view of an input object definition.
#[derive(Clone, Debug)]
pub struct InputRecord {
    pub name: String,
    pub def: NodeId,
    pub fields_seq: NodeId,
    pub fields: Vec<FieldEntry>,
    pub directives: Vec<DirectiveEntry>,
    /// The object type this input mirrors, when its name follows one of
    /// the mutation-input naming conventions.
    pub link: Option<InputLink>,
}
