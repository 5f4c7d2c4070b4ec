use gqlnorm_parser::{Disposition, SdlSemantics};
use gqlnorm_parser::tree::{NodeId, Tree};

use crate::{
    InputLink, RecordKind, Registered, Registry, SemanticError, conventions, fragment, passes,
};

/// The flattening policy, for resolver-generator engines that have no
/// native interface support.
///
/// Interfaces are rewritten into plain object types, implementers inherit
/// their interface's fields and lose the `implements` clause, duplicate
/// definitions merge into the first one, write/exposure directive
/// conventions propagate onto mutation inputs, and hook directives land
/// on the root operation fields.
#[derive(Debug, Default)]
pub struct GqlgenSemantics {
    registry: Registry,
}

impl GqlgenSemantics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl SdlSemantics for GqlgenSemantics {
    type Error = SemanticError;

    fn on_interface_definition(
        &mut self,
        tree: &mut Tree,
        def: NodeId,
    ) -> Result<Disposition, Self::Error> {
        let name = fragment::definition_name(tree, def)?;
        match self
            .registry
            .register(tree, RecordKind::Interface, def, true)?
        {
            Registered::Duplicate => {
                self.registry
                    .merge_fields(tree, RecordKind::Interface, &name, def)?;
                Ok(Disposition::Suppress)
            }
            Registered::New => {
                // The engine never sees an interface keyword.
                fragment::set_keyword(tree, def, "type")?;
                Ok(Disposition::Keep)
            }
        }
    }

    fn on_object_definition(
        &mut self,
        tree: &mut Tree,
        def: NodeId,
    ) -> Result<Disposition, Self::Error> {
        let name = fragment::definition_name(tree, def)?;
        if self.registry.contains(RecordKind::Type, &name) {
            self.registry
                .merge_fields(tree, RecordKind::Type, &name, def)?;
            return Ok(Disposition::Suppress);
        }

        // Inheritance first: registration records the flattened field
        // list, inherited fields included.
        passes::inherit(tree, &self.registry, def)?;
        self.registry.register(tree, RecordKind::Type, def, true)?;
        fragment::clear_implements(tree, def);

        if conventions::ROOT_TYPES.contains(&name.as_str()) {
            passes::copy_hook_directives(tree, &self.registry, &name)?;
        }
        Ok(Disposition::Keep)
    }

    fn on_input_definition(
        &mut self,
        tree: &mut Tree,
        def: NodeId,
    ) -> Result<Disposition, Self::Error> {
        let name = fragment::definition_name(tree, def)?;
        if self.registry.register(tree, RecordKind::Input, def, false)? == Registered::Duplicate {
            return Ok(Disposition::Suppress);
        }

        let object_kinds = [RecordKind::Type, RecordKind::Interface];
        match InputLink::from_name(&name) {
            Some(InputLink::Add(base)) => {
                passes::copy_directives(
                    tree,
                    &self.registry,
                    &base,
                    &object_kinds,
                    RecordKind::Input,
                    &name,
                    conventions::WRITE_PREFIX,
                    false,
                )?;
            }
            Some(InputLink::Patch(base)) => {
                passes::copy_directives(
                    tree,
                    &self.registry,
                    &base,
                    &object_kinds,
                    RecordKind::Input,
                    &name,
                    conventions::WRITE_PREFIX,
                    false,
                )?;
                passes::copy_directives(
                    tree,
                    &self.registry,
                    &base,
                    &object_kinds,
                    RecordKind::Input,
                    &name,
                    conventions::EXPOSURE_PREFIX,
                    true,
                )?;
            }
            None => (),
        }
        Ok(Disposition::Keep)
    }

    fn on_enum_definition(
        &mut self,
        tree: &mut Tree,
        def: NodeId,
    ) -> Result<Disposition, Self::Error> {
        let name = fragment::enum_name(tree, def)?;
        match self.registry.register_enum(&name) {
            Registered::New => Ok(Disposition::Keep),
            Registered::Duplicate => Ok(Disposition::Suppress),
        }
    }

    fn on_directive(
        &mut self,
        _tree: &mut Tree,
        _directive: NodeId,
    ) -> Result<Disposition, Self::Error> {
        Ok(Disposition::Keep)
    }
}
