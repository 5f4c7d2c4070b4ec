/// Whitespace the printer must emit around a labeled value.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SpaceTag {
    #[default]
    None,
    /// A single space before the value, unless one is already pending.
    Before,
    /// A single space after the value.
    After,
    /// Spaces on both sides, merged with any pending space.
    Surround,
}

/// A static label attached to one entry of a record node.
///
/// The label name drives the printer's layout decisions (newlines,
/// indentation) and the semantic passes' fragment navigation. Internal
/// labels are structural only: the printer renders their value without
/// any layout treatment of its own.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Label {
    pub name: &'static str,
    pub tag: SpaceTag,
    pub internal: bool,
}

impl Label {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            tag: SpaceTag::None,
            internal: false,
        }
    }

    pub const fn internal(name: &'static str) -> Self {
        Self {
            name,
            tag: SpaceTag::None,
            internal: true,
        }
    }

    pub const fn with_tag(mut self, tag: SpaceTag) -> Self {
        self.tag = tag;
        self
    }
}

/// Label names shared between the parser, the semantic passes, and the
/// printer.
pub mod labels {
    // Definition wrapper labels. The `_definition` suffix is significant:
    // the printer starts a fresh block for any label carrying it.
    pub const OBJECT_DEFINITION: &str = "object_type_definition";
    pub const INTERFACE_DEFINITION: &str = "interface_type_definition";
    pub const INPUT_DEFINITION: &str = "input_object_type_definition";
    pub const ENUM_DEFINITION: &str = "enum_type_definition";
    pub const SCALAR_DEFINITION: &str = "scalar_type_definition";
    pub const UNION_DEFINITION: &str = "union_type_definition";
    pub const DIRECTIVE_DEFINITION: &str = "directive_definition";
    pub const SCHEMA_DEFINITION: &str = "schema_definition";

    pub const COMMENT: &str = "comment";
    pub const DOC: &str = "doc";
    pub const FIELD: &str = "field";

    // Record entry labels.
    pub const CST: &str = "cst";
    pub const NAME: &str = "name";
    pub const IMPLEMENTS: &str = "implements";
    pub const DIRECTIVES: &str = "directives";
    pub const FIELDS: &str = "fields";
    pub const ARGS: &str = "args";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
    pub const DEFAULT: &str = "default";
    pub const OPEN: &str = "open";
    pub const CLOSE: &str = "close";
    pub const EQ: &str = "eq";
    pub const AT: &str = "at";
    pub const ON: &str = "on";
    pub const LOCATIONS: &str = "locations";
    pub const MEMBERS: &str = "members";
    pub const SUFFIX: &str = "suffix";
}
