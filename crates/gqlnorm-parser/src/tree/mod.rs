//! The arena-backed parse-tree model.

mod label;
mod node;

pub use label::{Label, SpaceTag, labels};
pub use node::{NodeId, RecordEntries, RecordEntry, TreeError, TreeNode};

use std::fmt::Write as _;

/// An arena of [`TreeNode`]s.
///
/// All structural edges are [`NodeId`]s into this arena, so rewrites done
/// by the semantic passes (splicing fields between definitions, cloning
/// directive applications, blanking slots) are cheap index operations and
/// never invalidate other references into the tree. Nodes are not
/// reclaimed; a detached subtree simply stops being reachable from the
/// document root.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: TreeNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.index()]
    }

    pub fn terminal(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(TreeNode::Terminal(text.into()))
    }

    pub fn absent(&mut self) -> NodeId {
        self.alloc(TreeNode::Absent)
    }

    pub fn sequence(&mut self, items: Vec<NodeId>) -> NodeId {
        self.alloc(TreeNode::Sequence(items))
    }

    /// Allocates a record node, rejecting duplicate label names.
    pub fn record(
        &mut self,
        entries: impl IntoIterator<Item = RecordEntry>,
    ) -> Result<NodeId, TreeError> {
        let entries: RecordEntries = entries.into_iter().collect();
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.label.name == entry.label.name) {
                return Err(TreeError::DuplicateLabel {
                    label: entry.label.name,
                });
            }
        }
        Ok(self.alloc(TreeNode::Record(entries)))
    }

    pub fn as_terminal(&self, id: NodeId) -> Option<&str> {
        match self.node(id) {
            TreeNode::Terminal(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_sequence(&self, id: NodeId) -> Option<&[NodeId]> {
        match self.node(id) {
            TreeNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self, id: NodeId) -> Option<&mut Vec<NodeId>> {
        match self.node_mut(id) {
            TreeNode::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self, id: NodeId) -> Option<&[RecordEntry]> {
        match self.node(id) {
            TreeNode::Record(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_absent(&self, id: NodeId) -> bool {
        matches!(self.node(id), TreeNode::Absent)
    }

    /// Looks up a record entry's value by label name.
    pub fn record_entry(&self, record: NodeId, label: &str) -> Option<NodeId> {
        self.as_record(record)?
            .iter()
            .find(|e| e.label.name == label)
            .map(|e| e.value)
    }

    /// Repoints an existing record entry at a different value node.
    pub fn set_record_entry(
        &mut self,
        record: NodeId,
        label: &'static str,
        value: NodeId,
    ) -> Result<(), TreeError> {
        let TreeNode::Record(entries) = self.node_mut(record) else {
            return Err(TreeError::UnexpectedShape { expected: "record" });
        };
        match entries.iter_mut().find(|e| e.label.name == label) {
            Some(entry) => {
                entry.value = value;
                Ok(())
            }
            None => Err(TreeError::MissingLabel { label }),
        }
    }

    /// Appends a new labeled entry to a record, rejecting duplicates.
    pub fn record_push_entry(
        &mut self,
        record: NodeId,
        label: Label,
        value: NodeId,
    ) -> Result<(), TreeError> {
        let TreeNode::Record(entries) = self.node_mut(record) else {
            return Err(TreeError::UnexpectedShape { expected: "record" });
        };
        if entries.iter().any(|e| e.label.name == label.name) {
            return Err(TreeError::DuplicateLabel { label: label.name });
        }
        entries.push(RecordEntry::new(label, value));
        Ok(())
    }

    pub fn seq_push(&mut self, seq: NodeId, item: NodeId) -> Result<(), TreeError> {
        self.as_sequence_mut(seq)
            .ok_or(TreeError::UnexpectedShape {
                expected: "sequence",
            })?
            .push(item);
        Ok(())
    }

    pub fn seq_insert(&mut self, seq: NodeId, index: usize, item: NodeId) -> Result<(), TreeError> {
        let items = self.as_sequence_mut(seq).ok_or(TreeError::UnexpectedShape {
            expected: "sequence",
        })?;
        let index = index.min(items.len());
        items.insert(index, item);
        Ok(())
    }

    /// Deep-copies a subtree and returns the root of the copy.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        match self.node(id).clone() {
            TreeNode::Terminal(text) => self.alloc(TreeNode::Terminal(text)),
            TreeNode::Absent => self.alloc(TreeNode::Absent),
            TreeNode::Sequence(items) => {
                let cloned = items.into_iter().map(|c| self.clone_subtree(c)).collect();
                self.alloc(TreeNode::Sequence(cloned))
            }
            TreeNode::Record(entries) => {
                let cloned: RecordEntries = entries
                    .into_iter()
                    .map(|e| RecordEntry::new(e.label, self.clone_subtree(e.value)))
                    .collect();
                self.alloc(TreeNode::Record(cloned))
            }
        }
    }

    /// Renders an indented structural dump of a subtree, for debugging.
    pub fn dump(&self, root: NodeId) -> String {
        let mut out = String::new();
        self.dump_node(root, 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let pad = "  ".repeat(depth);
        match self.node(id) {
            TreeNode::Absent => {
                let _ = writeln!(out, "{pad}absent");
            }
            TreeNode::Terminal(text) => {
                let _ = writeln!(out, "{pad}{text:?}");
            }
            TreeNode::Sequence(items) => {
                let _ = writeln!(out, "{pad}sequence");
                for item in items {
                    self.dump_node(*item, depth + 1, out);
                }
            }
            TreeNode::Record(entries) => {
                let _ = writeln!(out, "{pad}record");
                for entry in entries {
                    let marker = if entry.label.internal { "*" } else { "" };
                    let _ = writeln!(out, "{pad}  {}{marker}:", entry.label.name);
                    self.dump_node(entry.value, depth + 2, out);
                }
            }
        }
    }
}
