use gqlnorm_parser::tree::TreeError;

/// An error raised by a semantic policy while rewriting the tree.
#[derive(Debug, thiserror::Error)]
pub enum SemanticError {
    /// A definition refers to a type the registry has not seen, for
    /// example an `implements` clause naming an interface that is absent
    /// from the document.
    #[error("unknown type `{name}`")]
    UnknownType { name: String },

    /// A type implements more than one interface, which neither engine
    /// rewrite supports.
    #[error("type `{type_name}` implements more than one interface")]
    MultipleInheritance { type_name: String },

    /// A fragment did not have the shape its grammar rule guarantees.
    #[error("malformed fragment: expected {context}")]
    MalformedFragment { context: &'static str },

    #[error(transparent)]
    Tree(#[from] TreeError),
}
