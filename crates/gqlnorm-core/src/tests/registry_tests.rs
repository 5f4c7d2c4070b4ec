use gqlnorm_parser::SdlParser;
use gqlnorm_parser::tree::Tree;

use crate::{GqlgenSemantics, InputLink, RecordKind, Registered, Registry, conventions};

fn run(source: &str) -> (Tree, GqlgenSemantics) {
    let mut tree = Tree::new();
    let mut semantics = GqlgenSemantics::new();
    SdlParser::new(source, &mut tree, &mut semantics)
        .parse_document()
        .expect("document should parse");
    (tree, semantics)
}

#[test]
fn records_fields_in_declaration_order() {
    let (_, semantics) = run("type Post {\n  id: ID!\n  title: String\n  body: String\n}");
    let fields = semantics
        .registry()
        .fields(RecordKind::Type, "Post")
        .expect("Post should be registered");
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["id", "title", "body"]);
}

#[test]
fn stripped_field_directives_stay_recorded() {
    let (_, semantics) = run("type Post {\n  title: String @w_locked @search\n}");
    let fields = semantics
        .registry()
        .fields(RecordKind::Type, "Post")
        .expect("Post should be registered");
    let names: Vec<&str> = fields[0].directives.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["w_locked", "search"]);
}

#[test]
fn input_fields_keep_their_directives_unfiltered() {
    let (tree, semantics) = run("input PatchLike {\n  title: String @w_locked\n}");
    let record = semantics
        .registry()
        .input("PatchLike")
        .expect("input should be registered");
    assert!(crate::fragment::has_directives(&tree, record.fields[0].record)
        .expect("field should have a directives slot"));
}

#[test]
fn hook_directives_are_recorded_at_the_type_level() {
    let (_, semantics) = run("type User @hook_ {\n  name: String\n}");
    let directives = semantics
        .registry()
        .type_directives(RecordKind::Type, "User")
        .expect("User should be registered");
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].name, conventions::HOOK_DIRECTIVE);
}

#[test]
fn merged_duplicates_extend_the_recorded_field_list() {
    let (_, semantics) = run("type Foo {\n  a: String\n}\n\ntype Foo {\n  b: Int\n}");
    let fields = semantics
        .registry()
        .fields(RecordKind::Type, "Foo")
        .expect("Foo should be registered");
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn void_placeholder_fields_never_merge() {
    let (_, semantics) = run("type Foo {\n  a: String\n}\n\ntype Foo {\n  _VOID: String\n}");
    let fields = semantics
        .registry()
        .fields(RecordKind::Type, "Foo")
        .expect("Foo should be registered");
    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["a"]);
}

#[test]
fn enum_registration_deduplicates_by_name() {
    let mut registry = Registry::new();
    assert_eq!(registry.register_enum("Color"), Registered::New);
    assert_eq!(registry.register_enum("Color"), Registered::Duplicate);
    assert_eq!(registry.register_enum("Size"), Registered::New);
}

#[test]
fn input_links_follow_the_naming_conventions() {
    assert_eq!(
        InputLink::from_name("AddPostInput"),
        Some(InputLink::Add("Post".to_string())),
    );
    assert_eq!(
        InputLink::from_name("PostPatch"),
        Some(InputLink::Patch("Post".to_string())),
    );
    // `Add...Input` wins over `...Patch` when both could apply.
    assert_eq!(
        InputLink::from_name("AddPatchInput"),
        Some(InputLink::Add("Patch".to_string())),
    );
    assert_eq!(InputLink::from_name("AddInput"), None);
    assert_eq!(InputLink::from_name("Patch"), None);
    assert_eq!(InputLink::from_name("QueryOptions"), None);
}

#[test]
fn operation_prefixes_resolve_in_declaration_order() {
    assert_eq!(conventions::split_operation("queryUser"), Some(("query", "User")));
    assert_eq!(conventions::split_operation("getUser"), Some(("get", "User")));
    assert_eq!(conventions::split_operation("addUser"), Some(("add", "User")));
    assert_eq!(
        conventions::split_operation("updateUser"),
        Some(("update", "User")),
    );
    assert_eq!(
        conventions::split_operation("deleteUser"),
        Some(("delete", "User")),
    );
    assert_eq!(conventions::split_operation("user"), None);
    assert_eq!(conventions::split_operation("get"), None);
}
