//! Typed accessors over the raw parse-tree fragments.
//!
//! The parser guarantees each grammar rule's fragment shape; these helpers
//! turn shape violations into [`SemanticError::MalformedFragment`] instead
//! of panicking, and give the passes a vocabulary of domain operations
//! (field lists, directive slots, implements clauses) instead of raw node
//! navigation.

use gqlnorm_parser::tree::{Label, NodeId, RecordEntry, SpaceTag, Tree, TreeNode, labels};

use crate::SemanticError;

/// The parsed `implements` clause of an object definition.
#[derive(Clone, Debug)]
pub struct ImplementsClause {
    /// The first named interface.
    pub interface: String,
    /// How many interfaces the clause names in total.
    pub count: usize,
}

/// A field record broken into the parts the passes work with.
#[derive(Clone, Debug)]
pub struct FieldParts {
    pub name: String,
    pub record: NodeId,
    pub args: Option<NodeId>,
    pub directives: Vec<(String, NodeId)>,
}

fn malformed(context: &'static str) -> SemanticError {
    SemanticError::MalformedFragment { context }
}

/// The name a definition record declares.
pub fn definition_name(tree: &Tree, def: NodeId) -> Result<String, SemanticError> {
    let name_record = tree
        .record_entry(def, labels::NAME)
        .ok_or_else(|| malformed("a named definition"))?;
    name_text(tree, name_record)
}

/// The name inside a `{ name: <terminal> }` record.
pub fn name_text(tree: &Tree, name_record: NodeId) -> Result<String, SemanticError> {
    let terminal = tree
        .record_entry(name_record, labels::NAME)
        .ok_or_else(|| malformed("a name record"))?;
    tree.as_terminal(terminal)
        .map(str::to_string)
        .ok_or_else(|| malformed("a name terminal"))
}

/// The name of an enum definition, which keeps its grammar's sequence
/// shape: `[ "enum", name, body ]`.
pub fn enum_name(tree: &Tree, def: NodeId) -> Result<String, SemanticError> {
    let items = tree
        .as_sequence(def)
        .ok_or_else(|| malformed("an enum definition sequence"))?;
    let name_record = *items
        .get(1)
        .ok_or_else(|| malformed("an enum definition sequence"))?;
    name_text(tree, name_record)
}

/// The implements clause of a definition, when present and non-empty.
pub fn implements_clause(
    tree: &Tree,
    def: NodeId,
) -> Result<Option<ImplementsClause>, SemanticError> {
    let Some(clause) = tree.record_entry(def, labels::IMPLEMENTS) else {
        return Ok(None);
    };
    let items = match tree.node(clause) {
        TreeNode::Absent => return Ok(None),
        TreeNode::Sequence(items) => items,
        _ => return Err(malformed("an implements clause")),
    };
    let mut names = Vec::new();
    for item in items {
        if tree.record_entry(*item, labels::NAME).is_some() {
            names.push(name_text(tree, *item)?);
        }
    }
    let count = names.len();
    match names.into_iter().next() {
        Some(interface) => Ok(Some(ImplementsClause { interface, count })),
        None => Err(malformed("an implements clause with interfaces")),
    }
}

/// Blanks a definition's implements clause, if it has one.
pub fn clear_implements(tree: &mut Tree, def: NodeId) {
    if let Some(clause) = tree.record_entry(def, labels::IMPLEMENTS) {
        *tree.node_mut(clause) = TreeNode::Absent;
    }
}

/// The inner field-wrapper sequence of a definition's `{ ... }` block.
pub fn fields_sequence(tree: &Tree, def: NodeId) -> Result<NodeId, SemanticError> {
    let block = tree
        .record_entry(def, labels::FIELDS)
        .ok_or_else(|| malformed("a definition with a fields block"))?;
    let items = tree
        .as_sequence(block)
        .ok_or_else(|| malformed("a brace-delimited fields block"))?;
    if items.len() != 3
        || tree.as_terminal(items[0]) != Some("{")
        || tree.as_terminal(items[2]) != Some("}")
    {
        return Err(malformed("a brace-delimited fields block"));
    }
    Ok(items[1])
}

fn is_field_wrapper(tree: &Tree, id: NodeId) -> bool {
    match tree.as_record(id) {
        Some([entry]) => entry.label.name == labels::FIELD,
        _ => false,
    }
}

/// Drops comment and doc wrappers from a field sequence, leaving only
/// field wrappers.
pub fn prune_non_fields(tree: &mut Tree, fields_seq: NodeId) -> Result<(), SemanticError> {
    let items = sequence_items(tree, fields_seq)?;
    let kept: Vec<NodeId> = items
        .into_iter()
        .filter(|id| is_field_wrapper(tree, *id))
        .collect();
    match tree.as_sequence_mut(fields_seq) {
        Some(seq) => *seq = kept,
        None => return Err(malformed("a field sequence")),
    }
    Ok(())
}

/// A sequence's items, copied out so the tree can be mutated while
/// iterating.
pub fn sequence_items(tree: &Tree, seq: NodeId) -> Result<Vec<NodeId>, SemanticError> {
    tree.as_sequence(seq)
        .map(<[NodeId]>::to_vec)
        .ok_or_else(|| malformed("a sequence"))
}

/// Splits a `{ field: ... }` wrapper into its navigable parts.
pub fn field_parts(tree: &Tree, wrapper: NodeId) -> Result<FieldParts, SemanticError> {
    let record = tree
        .record_entry(wrapper, labels::FIELD)
        .ok_or_else(|| malformed("a field wrapper"))?;
    let name_record = tree
        .record_entry(record, labels::NAME)
        .ok_or_else(|| malformed("a field record"))?;
    let name = name_text(tree, name_record)?;

    let args = match tree.record_entry(record, labels::ARGS) {
        None => None,
        Some(args) => match tree.node(args) {
            TreeNode::Absent => None,
            TreeNode::Sequence(items) => {
                if items.len() < 2
                    || tree.as_terminal(items[0]) != Some("(")
                    || tree.as_terminal(*items.last().ok_or_else(|| malformed("an argument list"))?)
                        != Some(")")
                {
                    return Err(malformed("a parenthesized argument list"));
                }
                Some(args)
            }
            _ => return Err(malformed("a parenthesized argument list")),
        },
    };

    let directives = list_directives(tree, record)?;
    Ok(FieldParts {
        name,
        record,
        args,
        directives,
    })
}

/// The name a directive application record applies.
pub fn directive_name(tree: &Tree, directive: NodeId) -> Result<String, SemanticError> {
    let name_record = tree
        .record_entry(directive, labels::NAME)
        .ok_or_else(|| malformed("a directive application"))?;
    name_text(tree, name_record)
}

/// All `(name, node)` directive applications attached to a record.
pub fn list_directives(
    tree: &Tree,
    record: NodeId,
) -> Result<Vec<(String, NodeId)>, SemanticError> {
    let Some(slot) = tree.record_entry(record, labels::DIRECTIVES) else {
        return Ok(Vec::new());
    };
    let items = match tree.node(slot) {
        TreeNode::Absent => return Ok(Vec::new()),
        TreeNode::Sequence(items) => items.clone(),
        _ => return Err(malformed("a directive list")),
    };
    items
        .into_iter()
        .map(|id| Ok((directive_name(tree, id)?, id)))
        .collect()
}

/// Records every directive on `record` and removes the ones `drop`
/// matches from the rendered fragment. Returns all of them, dropped ones
/// included.
pub fn strip_directives(
    tree: &mut Tree,
    record: NodeId,
    drop: impl Fn(&str) -> bool,
) -> Result<Vec<(String, NodeId)>, SemanticError> {
    let all = list_directives(tree, record)?;
    if all.is_empty() {
        return Ok(all);
    }
    let kept: Vec<NodeId> = all
        .iter()
        .filter(|(name, _)| !drop(name))
        .map(|(_, id)| *id)
        .collect();
    if kept.len() != all.len() {
        let slot = directives_slot(tree, record)?;
        *tree.node_mut(slot) = TreeNode::Sequence(kept);
    }
    Ok(all)
}

/// The directives slot of a field or definition record.
pub fn directives_slot(tree: &Tree, record: NodeId) -> Result<NodeId, SemanticError> {
    tree.record_entry(record, labels::DIRECTIVES)
        .ok_or_else(|| malformed("a record with a directives slot"))
}

pub fn has_directives(tree: &Tree, record: NodeId) -> Result<bool, SemanticError> {
    let slot = directives_slot(tree, record)?;
    Ok(matches!(tree.node(slot), TreeNode::Sequence(items) if !items.is_empty()))
}

/// Makes sure a record's directives slot is a sequence and returns it.
pub fn ensure_directive_sequence(tree: &mut Tree, record: NodeId) -> Result<NodeId, SemanticError> {
    let slot = directives_slot(tree, record)?;
    if tree.is_absent(slot) {
        *tree.node_mut(slot) = TreeNode::Sequence(Vec::new());
    }
    Ok(slot)
}

/// Replaces a record's directives with exactly the given applications.
pub fn set_directives(
    tree: &mut Tree,
    record: NodeId,
    items: Vec<NodeId>,
) -> Result<(), SemanticError> {
    let slot = directives_slot(tree, record)?;
    *tree.node_mut(slot) = TreeNode::Sequence(items);
    Ok(())
}

/// Swaps a definition's leading keyword terminal.
pub fn set_keyword(tree: &mut Tree, def: NodeId, keyword: &str) -> Result<(), SemanticError> {
    let cst = tree
        .record_entry(def, labels::CST)
        .ok_or_else(|| malformed("a definition keyword"))?;
    *tree.node_mut(cst) = TreeNode::Terminal(keyword.to_string());
    Ok(())
}

/// Builds a `_VOID: String` placeholder field wrapper.
pub fn synthetic_void_field(tree: &mut Tree) -> Result<NodeId, SemanticError> {
    let name = tree.terminal(crate::conventions::VOID_FIELD);
    let name = tree.record([RecordEntry::new(Label::new(labels::NAME), name)])?;
    let args = tree.absent();
    let colon = tree.terminal(":");
    let annotation = tree.terminal("String");
    let annotation = tree.record([RecordEntry::new(Label::new(labels::NAME), annotation)])?;
    let directives = tree.absent();
    let record = tree.record([
        RecordEntry::new(Label::internal(labels::NAME), name),
        RecordEntry::new(Label::new(labels::ARGS), args),
        RecordEntry::new(Label::internal(labels::CST), colon),
        RecordEntry::new(Label::internal(labels::TYPE), annotation),
        RecordEntry::new(Label::internal(labels::DIRECTIVES), directives),
    ])?;
    Ok(tree.record([RecordEntry::new(Label::new(labels::FIELD), record)])?)
}

/// Builds a bare `@<name>` directive application.
pub fn synthetic_directive(tree: &mut Tree, name: &str) -> Result<NodeId, SemanticError> {
    let at = tree.terminal("@");
    let name = tree.terminal(name);
    let name = tree.record([RecordEntry::new(Label::new(labels::NAME), name)])?;
    let args = tree.absent();
    Ok(tree.record([
        RecordEntry::new(Label::internal(labels::CST).with_tag(SpaceTag::Before), at),
        RecordEntry::new(Label::internal(labels::NAME), name),
        RecordEntry::new(Label::new(labels::ARGS), args),
    ])?)
}

/// Appends an operation-name suffix terminal to a cloned hook directive,
/// completing its rendered name.
pub fn push_directive_suffix(
    tree: &mut Tree,
    directive: NodeId,
    suffix: &str,
) -> Result<(), SemanticError> {
    let suffix = tree.terminal(suffix);
    tree.record_push_entry(directive, Label::internal(labels::SUFFIX), suffix)?;
    Ok(())
}
