use crate::parse_error::ParseError;
use crate::parser::SdlParser;
use crate::semantics::{Disposition, PassthroughSemantics, SdlSemantics};
use crate::tree::{NodeId, Tree, TreeNode, labels};

fn parse(source: &str) -> (Tree, NodeId) {
    let mut tree = Tree::new();
    let mut semantics = PassthroughSemantics;
    let root = SdlParser::new(source, &mut tree, &mut semantics)
        .parse_document()
        .expect("document should parse");
    (tree, root)
}

fn wrapper_labels(tree: &Tree, root: NodeId) -> Vec<&str> {
    tree.as_sequence(root)
        .expect("root should be a sequence")
        .iter()
        .map(|w| tree.as_record(*w).expect("wrapper should be a record")[0].label.name)
        .collect()
}

fn definition(tree: &Tree, root: NodeId, index: usize) -> NodeId {
    let wrapper = tree.as_sequence(root).expect("root should be a sequence")[index];
    tree.as_record(wrapper).expect("wrapper should be a record")[0].value
}

#[test]
fn wraps_each_definition_by_rule_name() {
    let (tree, root) = parse(
        "# leading\n\
         type Foo { a: String }\n\
         interface Bar { a: String }\n\
         input Baz { a: String }\n\
         enum Color { RED }\n\
         scalar DateTime\n\
         union U = Foo\n\
         directive @quiet on FIELD_DEFINITION\n\
         schema { query: Foo }",
    );
    assert_eq!(
        wrapper_labels(&tree, root),
        vec![
            labels::COMMENT,
            labels::OBJECT_DEFINITION,
            labels::INTERFACE_DEFINITION,
            labels::INPUT_DEFINITION,
            labels::ENUM_DEFINITION,
            labels::SCALAR_DEFINITION,
            labels::UNION_DEFINITION,
            labels::DIRECTIVE_DEFINITION,
            labels::SCHEMA_DEFINITION,
        ],
    );
}

#[test]
fn object_definitions_keep_the_labeled_record_shape() {
    let (tree, root) = parse("type Foo implements Bar @keep { a: String }");
    let def = definition(&tree, root, 0);
    let entries = tree.as_record(def).expect("definition should be a record");
    let names: Vec<&str> = entries.iter().map(|e| e.label.name).collect();
    assert_eq!(
        names,
        vec![
            labels::CST,
            labels::NAME,
            labels::IMPLEMENTS,
            labels::DIRECTIVES,
            labels::FIELDS,
        ],
    );
    let keyword = tree.record_entry(def, labels::CST).expect("cst entry");
    assert_eq!(tree.as_terminal(keyword), Some("type"));
}

#[test]
fn input_definitions_have_no_implements_slot() {
    let (tree, root) = parse("input Foo { a: String }");
    let def = definition(&tree, root, 0);
    assert!(tree.record_entry(def, labels::IMPLEMENTS).is_none());
}

#[test]
fn fields_blocks_are_brace_delimited_sequences() {
    let (tree, root) = parse("type Foo {\n  # note\n  a: String\n  b: Int\n}");
    let def = definition(&tree, root, 0);
    let block = tree.record_entry(def, labels::FIELDS).expect("fields entry");
    let items = tree.as_sequence(block).expect("block should be a sequence");
    assert_eq!(items.len(), 3);
    assert_eq!(tree.as_terminal(items[0]), Some("{"));
    assert_eq!(tree.as_terminal(items[2]), Some("}"));
    // Comment wrapper plus two field wrappers.
    assert_eq!(tree.as_sequence(items[1]).map(<[NodeId]>::len), Some(3));
}

#[test]
fn fields_without_arguments_get_an_absent_args_slot() {
    let (tree, root) = parse("type Foo { plain: String\n  fancy(x: Int = 3): String }");
    let def = definition(&tree, root, 0);
    let block = tree.record_entry(def, labels::FIELDS).expect("fields entry");
    let fields = tree
        .as_sequence(tree.as_sequence(block).expect("block")[1])
        .expect("field list");

    let plain = tree.record_entry(fields[0], labels::FIELD).expect("field");
    let args = tree.record_entry(plain, labels::ARGS).expect("args entry");
    assert!(tree.is_absent(args));

    let fancy = tree.record_entry(fields[1], labels::FIELD).expect("field");
    let args = tree.record_entry(fancy, labels::ARGS).expect("args entry");
    let items = tree.as_sequence(args).expect("args should be a sequence");
    assert_eq!(tree.as_terminal(items[0]), Some("("));
    assert_eq!(tree.as_terminal(*items.last().expect("args")), Some(")"));
}

#[test]
fn enum_definitions_keep_the_sequence_shape() {
    let (tree, root) = parse("enum Color { RED GREEN }");
    let def = definition(&tree, root, 0);
    let items = tree.as_sequence(def).expect("enum should be a sequence");
    assert_eq!(items.len(), 3);
    assert_eq!(tree.as_terminal(items[0]), Some("enum"));
    let name = tree.record_entry(items[1], labels::NAME).expect("name");
    assert_eq!(tree.as_terminal(name), Some("Color"));
}

#[test]
fn implements_clauses_collect_every_listed_interface() {
    let (tree, root) = parse("type Foo implements A & B { a: String }");
    let def = definition(&tree, root, 0);
    let clause = tree
        .record_entry(def, labels::IMPLEMENTS)
        .expect("implements entry");
    let items = tree.as_sequence(clause).expect("clause should be a sequence");
    assert_eq!(tree.as_terminal(items[0]), Some("implements"));
    let names: Vec<&str> = items
        .iter()
        .filter_map(|id| tree.record_entry(*id, labels::NAME))
        .filter_map(|id| tree.as_terminal(id))
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn rejects_object_literals_in_directive_arguments() {
    let mut tree = Tree::new();
    let mut semantics = PassthroughSemantics;
    let result = SdlParser::new(
        "type Foo { a: String @auth(rule: {query: 1}) }",
        &mut tree,
        &mut semantics,
    )
    .parse_document();
    assert!(matches!(result, Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn reports_eof_inside_an_unclosed_block() {
    let mut tree = Tree::new();
    let mut semantics = PassthroughSemantics;
    let result = SdlParser::new("type Foo { a: String", &mut tree, &mut semantics).parse_document();
    assert!(matches!(
        result,
        Err(ParseError::UnexpectedEof { expected: "`}`" }),
    ));
}

#[test]
fn rejects_unknown_definition_keywords() {
    let mut tree = Tree::new();
    let mut semantics = PassthroughSemantics;
    let result = SdlParser::new("extend type Foo { a: String }", &mut tree, &mut semantics)
        .parse_document();
    assert!(matches!(result, Err(ParseError::UnexpectedToken { .. })));
}

struct DropEnums;

impl SdlSemantics for DropEnums {
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
        Ok(Disposition::Suppress)
    }

    fn on_directive(
        &mut self,
        _tree: &mut Tree,
        _directive: NodeId,
    ) -> Result<Disposition, Self::Error> {
        Ok(Disposition::Keep)
    }
}

#[test]
fn suppressed_definitions_never_reach_the_document() {
    let mut tree = Tree::new();
    let mut semantics = DropEnums;
    let root = SdlParser::new(
        "enum Color { RED }\ntype Foo { a: String }",
        &mut tree,
        &mut semantics,
    )
    .parse_document()
    .expect("document should parse");
    assert_eq!(wrapper_labels(&tree, root), vec![labels::OBJECT_DEFINITION]);
}

#[test]
fn cloned_subtrees_are_deep_copies() {
    let (mut tree, root) = parse("type Foo { a: String @mark }");
    let def = definition(&tree, root, 0);
    let block = tree.record_entry(def, labels::FIELDS).expect("fields");
    let field_list = tree.as_sequence(block).expect("block")[1];
    let wrapper = tree.as_sequence(field_list).expect("fields")[0];
    let field = tree.record_entry(wrapper, labels::FIELD).expect("field");
    let directives = tree
        .record_entry(field, labels::DIRECTIVES)
        .expect("directives");
    let original = tree.as_sequence(directives).expect("directives")[0];

    let copy = tree.clone_subtree(original);
    assert_ne!(copy, original);

    // Same shape, fresh nodes all the way down.
    let copied_name = tree.record_entry(copy, labels::NAME).expect("name");
    let original_name = tree.record_entry(original, labels::NAME).expect("name");
    assert_ne!(copied_name, original_name);
    let copied_text = tree.record_entry(copied_name, labels::NAME).expect("text");
    let original_text = tree
        .record_entry(original_name, labels::NAME)
        .expect("text");
    assert_ne!(copied_text, original_text);
    assert_eq!(tree.as_terminal(copied_text), tree.as_terminal(original_text));
    assert_eq!(tree.as_terminal(copied_text), Some("mark"));
}

#[test]
fn records_reject_duplicate_labels() {
    let mut tree = Tree::new();
    let a = tree.terminal("a");
    let b = tree.terminal("b");
    let result = tree.record([
        crate::tree::RecordEntry::new(crate::tree::Label::new("x"), a),
        crate::tree::RecordEntry::new(crate::tree::Label::internal("x"), b),
    ]);
    assert!(matches!(
        result,
        Err(crate::tree::TreeError::DuplicateLabel { label: "x" }),
    ));
}

#[test]
fn absent_nodes_are_distinct_allocations() {
    let mut tree = Tree::new();
    let a = tree.absent();
    let b = tree.absent();
    assert_ne!(a, b);
    assert!(matches!(tree.node(a), TreeNode::Absent));
}
