use smallvec::SmallVec;

use crate::tree::Label;

/// An index into a [`crate::tree::Tree`]'s node arena.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One labeled slot of a record node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecordEntry {
    pub label: Label,
    pub value: NodeId,
}

impl RecordEntry {
    pub fn new(label: Label, value: NodeId) -> Self {
        Self { label, value }
    }
}

pub type RecordEntries = SmallVec<[RecordEntry; 6]>;

/// A node in the parse tree.
///
/// Subtrees may be shared: appending an existing [`NodeId`] under a second
/// parent aliases the subtree instead of copying it, which is how
/// interface fields are inherited into implementing types.
#[derive(Clone, Debug, PartialEq)]
pub enum TreeNode {
    /// An ordered list of labeled children with unique label names.
    Record(RecordEntries),
    /// An ordered list of unlabeled children.
    Sequence(Vec<NodeId>),
    /// A verbatim piece of output text.
    Terminal(String),
    /// An explicitly empty slot, rendered as nothing.
    Absent,
}

/// A structural violation of the tree model.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TreeError {
    #[error("duplicate label `{label}` in record")]
    DuplicateLabel { label: &'static str },

    #[error("expected a {expected} node")]
    UnexpectedShape { expected: &'static str },

    #[error("record has no entry labeled `{label}`")]
    MissingLabel { label: &'static str },
}
