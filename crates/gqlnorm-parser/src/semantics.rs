use crate::tree::{NodeId, Tree};

/// What the parser should do with a freshly built definition or directive
/// application.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Disposition {
    /// Emit the fragment into the document.
    Keep,
    /// Drop the fragment from the document. The fragment stays alive in
    /// the arena, so a policy that already captured its [`NodeId`]s may
    /// keep splicing from it.
    Suppress,
}

/// A semantic policy plugged into the parse.
///
/// The parser invokes the matching hook as soon as it finishes building a
/// definition fragment, before wrapping it into the document. Hooks get
/// mutable access to the tree and may rewrite the fragment in place,
/// splice it into earlier fragments, or suppress it altogether.
///
/// Directive applications are dispatched through [`SdlSemantics::on_directive`]
/// wherever they occur, which is how engine-specific directive filtering
/// happens before a definition hook ever sees the fragment.
pub trait SdlSemantics {
    type Error: std::error::Error + 'static;

    fn on_interface_definition(
        &mut self,
        tree: &mut Tree,
        def: NodeId,
    ) -> Result<Disposition, Self::Error>;

    fn on_object_definition(
        &mut self,
        tree: &mut Tree,
        def: NodeId,
    ) -> Result<Disposition, Self::Error>;

    fn on_input_definition(
        &mut self,
        tree: &mut Tree,
        def: NodeId,
    ) -> Result<Disposition, Self::Error>;

    fn on_enum_definition(
        &mut self,
        tree: &mut Tree,
        def: NodeId,
    ) -> Result<Disposition, Self::Error>;

    fn on_directive(
        &mut self,
        tree: &mut Tree,
        directive: NodeId,
    ) -> Result<Disposition, Self::Error>;
}

/// A policy that keeps everything untouched. Parsing with it yields a
/// tree that re-renders the input document unchanged (modulo layout
/// normalization).
#[derive(Clone, Copy, Debug, Default)]
pub struct PassthroughSemantics;

impl SdlSemantics for PassthroughSemantics {
    type Error = std::convert::Infallible;

    fn on_interface_definition(
        &mut self,
        _tree: &mut Tree,
        _def: NodeId,
    ) -> Result<Disposition, Self::Error> {
        Ok(Disposition::Keep)
    }

    fn on_object_definition(
        &mut self,
        _tree: &mut Tree,
        _def: NodeId,
    ) -> Result<Disposition, Self::Error> {
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
        _tree: &mut Tree,
        _def: NodeId,
    ) -> Result<Disposition, Self::Error> {
        Ok(Disposition::Keep)
    }

    fn on_directive(
        &mut self,
        _tree: &mut Tree,
        _directive: NodeId,
    ) -> Result<Disposition, Self::Error> {
        Ok(Disposition::Keep)
    }
}
