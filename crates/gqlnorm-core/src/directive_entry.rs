use gqlnorm_parser::tree::NodeId;

/// One directive application captured off a definition or field fragment.
///
/// The node stays alive in the arena even when the pass that captured it
/// strips the application from the rendered fragment, so later passes can
/// still clone or re-attach it.
#[derive(Clone, Debug)]
pub struct DirectiveEntry {
    pub name: String,
    pub node: NodeId,
}

impl DirectiveEntry {
    pub fn new(name: impl Into<String>, node: NodeId) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}
