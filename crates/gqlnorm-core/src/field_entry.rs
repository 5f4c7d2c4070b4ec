use gqlnorm_parser::tree::NodeId;

use crate::DirectiveEntry;

/// The registry's view of one field definition.
#[derive(Clone, Debug)]
pub struct FieldEntry {
    pub name: String,
    /// The `{ field: ... }` wrapper, the unit spliced between fragments.
    pub wrapper: NodeId,
    /// The field record itself, holding name/args/type/directives slots.
    pub record: NodeId,
    /// The argument list sequence, when the field declares one.
    pub args: Option<NodeId>,
    /// Every directive applied to the field, including applications a
    /// registration pass stripped from the fragment.
    pub directives: Vec<DirectiveEntry>,
}
