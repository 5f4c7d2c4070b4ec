use gqlnorm_parser::{PassthroughSemantics, SdlParser};
use gqlnorm_parser::tree::Tree;

use crate::Printer;
use crate::tests::gqlgen;

fn passthrough(source: &str) -> String {
    let mut tree = Tree::new();
    let mut semantics = PassthroughSemantics;
    let root = SdlParser::new(source, &mut tree, &mut semantics)
        .parse_document()
        .expect("document should parse");
    Printer::new(false).render(&tree, root)
}

#[test]
fn renders_a_type_block() {
    assert_eq!(
        passthrough("type Foo {\n  a: String\n}"),
        "\n\n\ntype Foo {\n  a: String\n}",
    );
}

#[test]
fn normalizes_sloppy_layout() {
    assert_eq!(
        passthrough("type   Foo{a:String,b:Int}"),
        "\n\n\ntype Foo {\n  a: String\n  b: Int\n}",
    );
}

#[test]
fn drops_comments_and_docs() {
    assert_eq!(
        passthrough("# leading\n\"\"\"docs\"\"\"\ntype Foo {\n  # inner\n  a: String\n}"),
        "\n\n\ntype Foo {\n  a: String\n}",
    );
}

#[test]
fn a_dropped_leading_comment_keeps_the_brace_spaced() {
    // The first field's indentation rules must see the `{` as its
    // neighbor even when comment wrappers sit in between.
    assert_eq!(
        passthrough("type Foo {\n  # first\n  \"\"\"docs\"\"\"\n  a: String\n}"),
        "\n\n\ntype Foo {\n  a: String\n}",
    );
}

#[test]
fn keeps_argument_lists_inline() {
    assert_eq!(
        passthrough("type Foo {\n  find(first: Int = 10, after: ID): [Foo!]!\n}"),
        "\n\n\ntype Foo {\n  find(first: Int = 10, after: ID): [Foo!]!\n}",
    );
}

#[test]
fn renders_implements_clauses() {
    assert_eq!(
        passthrough("type Foo implements Bar {\n  a: String\n}"),
        "\n\n\ntype Foo implements Bar {\n  a: String\n}",
    );
}

#[test]
fn renders_field_directives_with_arguments() {
    assert_eq!(
        passthrough("type Foo {\n  a: String @auth(role: \"admin\")\n}"),
        "\n\n\ntype Foo {\n  a: String @auth(role: \"admin\")\n}",
    );
}

#[test]
fn renders_scalar_definitions() {
    assert_eq!(
        passthrough("scalar DateTime @search"),
        "\n\n\nscalar DateTime @search",
    );
}

#[test]
fn renders_union_definitions() {
    assert_eq!(passthrough("union U = A | B"), "\n\n\nunion U = A | B");
}

#[test]
fn renders_enum_definitions() {
    assert_eq!(
        passthrough("enum Color { RED, GREEN }"),
        "\n\n\nenum Color {\n  RED\n  GREEN\n}",
    );
}

#[test]
fn renders_directive_definitions() {
    assert_eq!(
        passthrough("directive @quiet(reason: String = \"none\") on FIELD_DEFINITION | ENUM_VALUE"),
        "\n\n\ndirective @quiet(reason: String = \"none\") on FIELD_DEFINITION | ENUM_VALUE",
    );
}

#[test]
fn renders_schema_definitions() {
    assert_eq!(
        passthrough("schema {\n  query: Query\n}"),
        "\n\n\nschema {\n  query: Query\n}",
    );
}

#[test]
fn separates_definitions_with_a_blank_line() {
    assert_eq!(
        passthrough("scalar A\nscalar B"),
        "\n\n\nscalar A\n\nscalar B",
    );
}

#[test]
fn rendering_is_idempotent() {
    let source = "interface Node {\n  id: ID!\n}\n\ntype User implements Node {\n  name: String\n}";
    let once = gqlgen(source);
    let twice = gqlgen(&once);
    assert_eq!(once, twice);
}
