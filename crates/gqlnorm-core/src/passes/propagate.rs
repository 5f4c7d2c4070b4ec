use gqlnorm_parser::tree::Tree;

use crate::{RecordKind, Registry, SemanticError, conventions, fragment};

/// Copies prefix-matching field directives from one definition's fields
/// onto the same-named fields of another.
///
/// Used to push `w_`/`x_` conventions from an object type onto the input
/// objects that mirror it. Copies are deep clones, so later rewrites of
/// one fragment never leak into the other. With `set_default`, a target
/// field that matches a source field but ends up with no directives at
/// all receives a bare `@x_patch_ro`.
pub fn copy_directives(
    tree: &mut Tree,
    registry: &Registry,
    from_name: &str,
    from_kinds: &[RecordKind],
    to_kind: RecordKind,
    to_name: &str,
    prefix: &str,
    set_default: bool,
) -> Result<(), SemanticError> {
    let source_fields = from_kinds
        .iter()
        .find_map(|kind| registry.fields(*kind, from_name))
        .ok_or_else(|| SemanticError::UnknownType {
            name: from_name.to_string(),
        })?;
    let target_fields =
        registry
            .fields(to_kind, to_name)
            .ok_or_else(|| SemanticError::UnknownType {
                name: to_name.to_string(),
            })?;

    for target in target_fields {
        let Some(source) = source_fields.iter().find(|f| f.name == target.name) else {
            continue;
        };
        for directive in &source.directives {
            if !directive.name.starts_with(prefix) {
                continue;
            }
            log::trace!(
                "Copying @{} from `{from_name}.{}` onto `{to_name}`.",
                directive.name,
                source.name,
            );
            let copy = tree.clone_subtree(directive.node);
            let slot = fragment::ensure_directive_sequence(tree, target.record)?;
            tree.seq_push(slot, copy)?;
        }
        if set_default && !fragment::has_directives(tree, target.record)? {
            let fallback =
                fragment::synthetic_directive(tree, conventions::PATCH_READONLY_DIRECTIVE)?;
            fragment::set_directives(tree, target.record, vec![fallback])?;
        }
    }
    Ok(())
}

/// Re-emits a type's hook directives on the root fields that operate on
/// it.
///
/// A root field whose name decomposes as `<operation><TypeName>` gets, for
/// every `hook_` directive recorded on that type: a pre-hook cloned into
/// its argument list as `@hook_<operation><TypeName>Input`, and, for the
/// mutating operations, a post-hook `@hook_<operation><TypeName>` appended
/// to the field itself. Fields declared without an argument list only get
/// the post-hook.
pub fn copy_hook_directives(
    tree: &mut Tree,
    registry: &Registry,
    root_name: &str,
) -> Result<(), SemanticError> {
    let root_fields =
        registry
            .fields(RecordKind::Type, root_name)
            .ok_or_else(|| SemanticError::UnknownType {
                name: root_name.to_string(),
            })?;

    for kind in [RecordKind::Type, RecordKind::Interface] {
        for field in root_fields {
            let Some((operation, type_name)) = conventions::split_operation(&field.name) else {
                continue;
            };
            let Some(directives) = registry.type_directives(kind, type_name) else {
                continue;
            };
            for directive in directives {
                if directive.name != conventions::HOOK_DIRECTIVE {
                    continue;
                }
                log::debug!(
                    "Hooking `{root_name}.{}` into `{type_name}` ({operation}).",
                    field.name,
                );
                if let Some(args) = field.args {
                    let pre = tree.clone_subtree(directive.node);
                    let suffix = format!("{operation}{type_name}Input");
                    fragment::push_directive_suffix(tree, pre, &suffix)?;
                    let len = fragment::sequence_items(tree, args)?.len();
                    tree.seq_insert(args, len - 1, pre)?;
                }
                if matches!(operation, "add" | "update" | "delete") {
                    let post = tree.clone_subtree(directive.node);
                    let suffix = format!("{operation}{type_name}");
                    fragment::push_directive_suffix(tree, post, &suffix)?;
                    let slot = fragment::ensure_directive_sequence(tree, field.record)?;
                    let len = fragment::sequence_items(tree, slot)?.len();
                    if len == 0 {
                        tree.seq_push(slot, post)?;
                    } else {
                        tree.seq_insert(slot, len - 1, post)?;
                    }
                }
            }
        }
    }
    Ok(())
}
