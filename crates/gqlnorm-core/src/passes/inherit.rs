use gqlnorm_parser::tree::{NodeId, Tree};

use crate::{Registry, SemanticError, fragment};

/// Copies interface fields down into an implementing type.
///
/// For the flattening rewrite interfaces become plain types, so every
/// implementer must spell the interface's fields out. Inherited fields
/// are spliced in by node id, aliasing the interface's fragment rather
/// than copying it, and pick up the directives recorded for the interface
/// field when the fragment itself carries none. A field the type already
/// declares wins over the interface's version.
pub fn inherit(tree: &mut Tree, registry: &Registry, def: NodeId) -> Result<(), SemanticError> {
    let Some((interface, fields_seq)) = implemented_interface(tree, def)? else {
        return Ok(());
    };

    let own_names = own_field_names(tree, fields_seq)?;
    let interface_record = registry
        .interface(&interface)
        .ok_or(SemanticError::UnknownType { name: interface })?;

    for entry in &interface_record.fields {
        if own_names.iter().any(|n| n == &entry.name) {
            // The type redeclares this field; its version wins.
            continue;
        }
        tree.seq_push(fields_seq, entry.wrapper)?;
        if !entry.directives.is_empty() && !fragment::has_directives(tree, entry.record)? {
            let nodes = entry.directives.iter().map(|d| d.node).collect();
            fragment::set_directives(tree, entry.record, nodes)?;
        }
    }
    Ok(())
}

/// Removes from a type every field its interface also declares.
///
/// The graph engine keeps interfaces first-class and rejects a type that
/// redeclares an inherited field, so the division of labor is the inverse
/// of [`inherit`]. A type left with no fields of its own gets a
/// `_VOID: String` placeholder so its block stays syntactically valid.
pub fn inherit_exclusive(
    tree: &mut Tree,
    registry: &Registry,
    def: NodeId,
) -> Result<(), SemanticError> {
    let Some((interface, fields_seq)) = implemented_interface(tree, def)? else {
        return Ok(());
    };

    let interface_record = registry
        .interface(&interface)
        .ok_or(SemanticError::UnknownType { name: interface })?;
    let interface_names: Vec<&str> = interface_record
        .fields
        .iter()
        .map(|f| f.name.as_str())
        .collect();

    let mut kept = Vec::new();
    for wrapper in fragment::sequence_items(tree, fields_seq)? {
        let name = fragment::field_parts(tree, wrapper)?.name;
        if !interface_names.contains(&name.as_str()) {
            kept.push(wrapper);
        }
    }
    if kept.is_empty() {
        kept.push(fragment::synthetic_void_field(tree)?);
    }
    match tree.as_sequence_mut(fields_seq) {
        Some(items) => *items = kept,
        None => {
            return Err(SemanticError::MalformedFragment {
                context: "a field sequence",
            });
        }
    }
    Ok(())
}

/// Resolves a definition's implements clause to the single interface both
/// rewrites support, alongside its pruned field sequence.
fn implemented_interface(
    tree: &mut Tree,
    def: NodeId,
) -> Result<Option<(String, NodeId)>, SemanticError> {
    let Some(clause) = fragment::implements_clause(tree, def)? else {
        return Ok(None);
    };
    if clause.count > 1 {
        return Err(SemanticError::MultipleInheritance {
            type_name: fragment::definition_name(tree, def)?,
        });
    }
    let fields_seq = fragment::fields_sequence(tree, def)?;
    fragment::prune_non_fields(tree, fields_seq)?;
    Ok(Some((clause.interface, fields_seq)))
}

fn own_field_names(tree: &Tree, fields_seq: NodeId) -> Result<Vec<String>, SemanticError> {
    fragment::sequence_items(tree, fields_seq)?
        .into_iter()
        .map(|wrapper| Ok(fragment::field_parts(tree, wrapper)?.name))
        .collect()
}

