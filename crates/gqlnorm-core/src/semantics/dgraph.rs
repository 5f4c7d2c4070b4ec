use gqlnorm_parser::{Disposition, SdlSemantics};
use gqlnorm_parser::tree::{NodeId, Tree};

use crate::{RecordKind, Registered, Registry, SemanticError, conventions, fragment, passes};

/// The policy for the dgraph engine, which keeps interfaces first-class.
///
/// Implementing types shed the fields their interface already declares
/// and keep their `implements` clause. Directives the engine does not
/// understand are filtered out wholesale; input objects pass through
/// untouched, since dgraph generates its own.
#[derive(Debug, Default)]
pub struct DgraphSemantics {
    registry: Registry,
}

impl DgraphSemantics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

impl SdlSemantics for DgraphSemantics {
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
            Registered::New => Ok(Disposition::Keep),
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
        self.registry.register(tree, RecordKind::Type, def, true)?;
        passes::inherit_exclusive(tree, &self.registry, def)?;
        Ok(Disposition::Keep)
    }

    fn on_input_definition(
        &mut self,
        _tree: &mut Tree,
        _def: NodeId,
    ) -> Result<Disposition, Self::Error> {
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
        tree: &mut Tree,
        directive: NodeId,
    ) -> Result<Disposition, Self::Error> {
        let name = fragment::directive_name(tree, directive)?;
        if conventions::DGRAPH_DIRECTIVES.contains(&name.as_str()) {
            Ok(Disposition::Keep)
        } else {
            log::debug!("Dropping @{name}: not a dgraph directive.");
            Ok(Disposition::Suppress)
        }
    }
}
