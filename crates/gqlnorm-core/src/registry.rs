use indexmap::{IndexMap, IndexSet};

use gqlnorm_parser::tree::{NodeId, Tree, labels};

use crate::{
    DirectiveEntry, FieldEntry, InputLink, InputRecord, RecordKind, SemanticError, TypeRecord,
    conventions, fragment,
};

/// Whether [`Registry::register`] stored a new record or found the name
/// already taken.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Registered {
    New,
    Duplicate,
}

/// The semantic registry of every definition seen so far.
///
/// Interfaces, object types, and inputs live in separate namespaces and
/// keep their insertion order, so passes that walk the registry render
/// deterministically. Enum deduplication only needs names.
#[derive(Debug, Default)]
pub struct Registry {
    interfaces: IndexMap<String, TypeRecord>,
    types: IndexMap<String, TypeRecord>,
    inputs: IndexMap<String, InputRecord>,
    enums: IndexSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, kind: RecordKind, name: &str) -> bool {
        match kind {
            RecordKind::Interface => self.interfaces.contains_key(name),
            RecordKind::Type => self.types.contains_key(name),
            RecordKind::Input => self.inputs.contains_key(name),
        }
    }

    pub fn interface(&self, name: &str) -> Option<&TypeRecord> {
        self.interfaces.get(name)
    }

    pub fn object_type(&self, name: &str) -> Option<&TypeRecord> {
        self.types.get(name)
    }

    pub fn input(&self, name: &str) -> Option<&InputRecord> {
        self.inputs.get(name)
    }

    /// The recorded fields of a definition, in declaration order.
    pub fn fields(&self, kind: RecordKind, name: &str) -> Option<&[FieldEntry]> {
        match kind {
            RecordKind::Interface => self.interfaces.get(name).map(|r| r.fields.as_slice()),
            RecordKind::Type => self.types.get(name).map(|r| r.fields.as_slice()),
            RecordKind::Input => self.inputs.get(name).map(|r| r.fields.as_slice()),
        }
    }

    /// The recorded type-level directives of a definition.
    pub fn type_directives(&self, kind: RecordKind, name: &str) -> Option<&[DirectiveEntry]> {
        match kind {
            RecordKind::Interface => self.interfaces.get(name).map(|r| r.directives.as_slice()),
            RecordKind::Type => self.types.get(name).map(|r| r.directives.as_slice()),
            RecordKind::Input => self.inputs.get(name).map(|r| r.directives.as_slice()),
        }
    }

    /// Registers a definition fragment, or reports it as a duplicate of
    /// an earlier one.
    ///
    /// Registration rewrites the fragment as a side effect: comment and
    /// doc wrappers are pruned from its field block, hook directives are
    /// stripped from the type level, and, with `filter_directives` set,
    /// write- and exposure-convention directives are stripped from its
    /// fields. Everything stripped stays recorded for later passes.
    pub fn register(
        &mut self,
        tree: &mut Tree,
        kind: RecordKind,
        def: NodeId,
        filter_directives: bool,
    ) -> Result<Registered, SemanticError> {
        let name = fragment::definition_name(tree, def)?;
        if self.contains(kind, &name) {
            log::debug!("Duplicate definition of `{name}`.");
            return Ok(Registered::Duplicate);
        }

        let directives = fragment::strip_directives(tree, def, |n| n == conventions::HOOK_DIRECTIVE)?
            .into_iter()
            .map(|(name, node)| DirectiveEntry::new(name, node))
            .collect();
        let implements = match kind {
            RecordKind::Type => fragment::implements_clause(tree, def)?.map(|c| c.interface),
            _ => None,
        };

        let fields_seq = fragment::fields_sequence(tree, def)?;
        fragment::prune_non_fields(tree, fields_seq)?;
        let mut fields = Vec::new();
        for wrapper in fragment::sequence_items(tree, fields_seq)? {
            fields.push(Self::build_field_entry(tree, wrapper, filter_directives)?);
        }

        match kind {
            RecordKind::Interface => {
                self.interfaces.insert(
                    name.clone(),
                    TypeRecord {
                        name,
                        def,
                        fields_seq,
                        fields,
                        implements: None,
                        directives,
                    },
                );
            }
            RecordKind::Type => {
                self.types.insert(
                    name.clone(),
                    TypeRecord {
                        name,
                        def,
                        fields_seq,
                        fields,
                        implements,
                        directives,
                    },
                );
            }
            RecordKind::Input => {
                let link = InputLink::from_name(&name);
                self.inputs.insert(
                    name.clone(),
                    InputRecord {
                        name,
                        def,
                        fields_seq,
                        fields,
                        directives,
                        link,
                    },
                );
            }
        }
        Ok(Registered::New)
    }

    /// Deduplicates an enum by name.
    pub fn register_enum(&mut self, name: &str) -> Registered {
        if self.enums.insert(name.to_string()) {
            Registered::New
        } else {
            Registered::Duplicate
        }
    }

    fn build_field_entry(
        tree: &mut Tree,
        wrapper: NodeId,
        filter_directives: bool,
    ) -> Result<FieldEntry, SemanticError> {
        let parts = fragment::field_parts(tree, wrapper)?;
        let directives = fragment::strip_directives(tree, parts.record, |n| {
            filter_directives
                && (n.starts_with(conventions::WRITE_PREFIX)
                    || n.starts_with(conventions::EXPOSURE_PREFIX))
        })?
        .into_iter()
        .map(|(name, node)| DirectiveEntry::new(name, node))
        .collect();
        Ok(FieldEntry {
            name: parts.name,
            wrapper,
            record: parts.record,
            args: parts.args,
            directives,
        })
    }

    /// Folds a duplicate definition's fields into the registered original.
    ///
    /// Fields already present on the original, or inherited through its
    /// interface, stay as they are, except that a field declared without
    /// arguments picks up the duplicate's argument list. Genuinely new
    /// fields are appended to the original fragment, directives intact.
    pub fn merge_fields(
        &mut self,
        tree: &mut Tree,
        kind: RecordKind,
        name: &str,
        duplicate: NodeId,
    ) -> Result<(), SemanticError> {
        let implements = match kind {
            RecordKind::Type => self.types.get(name).and_then(|r| r.implements.clone()),
            _ => None,
        };
        let mut known: Vec<String> = self
            .fields(kind, name)
            .ok_or_else(|| SemanticError::UnknownType {
                name: name.to_string(),
            })?
            .iter()
            .map(|f| f.name.clone())
            .collect();
        if let Some(interface) = implements {
            let interface_record =
                self.interfaces
                    .get(&interface)
                    .ok_or(SemanticError::UnknownType { name: interface })?;
            known.extend(interface_record.fields.iter().map(|f| f.name.clone()));
        }

        let dup_seq = fragment::fields_sequence(tree, duplicate)?;
        fragment::prune_non_fields(tree, dup_seq)?;
        for wrapper in fragment::sequence_items(tree, dup_seq)? {
            let parts = fragment::field_parts(tree, wrapper)?;
            let is_known = known.iter().any(|n| n == &parts.name);
            if !is_known && parts.name != conventions::VOID_FIELD {
                let entry = Self::build_field_entry(tree, wrapper, false)?;
                let Some((fields_seq, fields)) = self.record_parts_mut(kind, name) else {
                    return Err(SemanticError::UnknownType {
                        name: name.to_string(),
                    });
                };
                tree.seq_push(fields_seq, wrapper)?;
                fields.push(entry);
                known.push(parts.name);
            } else if let Some((_, fields)) = self.record_parts_mut(kind, name)
                && let Some(existing) = fields.iter_mut().find(|f| f.name == parts.name)
                && existing.args.is_none()
                && let Some(new_args) = parts.args
            {
                // Argument backfill: the first declaration wins otherwise.
                tree.set_record_entry(existing.record, labels::ARGS, new_args)?;
                existing.args = Some(new_args);
            }
        }
        Ok(())
    }

    fn record_parts_mut(
        &mut self,
        kind: RecordKind,
        name: &str,
    ) -> Option<(NodeId, &mut Vec<FieldEntry>)> {
        match kind {
            RecordKind::Interface => self
                .interfaces
                .get_mut(name)
                .map(|r| (r.fields_seq, &mut r.fields)),
            RecordKind::Type => self
                .types
                .get_mut(name)
                .map(|r| (r.fields_seq, &mut r.fields)),
            RecordKind::Input => self
                .inputs
                .get_mut(name)
                .map(|r| (r.fields_seq, &mut r.fields)),
        }
    }
}
