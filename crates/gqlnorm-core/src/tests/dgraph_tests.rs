use crate::tests::dgraph;

#[test]
fn interfaces_stay_first_class() {
    assert_eq!(
        dgraph("interface Bar {\n  id: ID!\n}\n\ntype Foo implements Bar {\n  own: String\n}"),
        "\n\n\ninterface Bar {\n  id: ID!\n}\n\ntype Foo implements Bar {\n  own: String\n}",
    );
}

#[test]
fn fields_shared_with_the_interface_are_removed() {
    assert_eq!(
        dgraph(
            "interface Bar {\n  id: ID!\n}\n\n\
             type Foo implements Bar {\n  id: ID!\n  own: String\n}",
        ),
        "\n\n\ninterface Bar {\n  id: ID!\n}\n\ntype Foo implements Bar {\n  own: String\n}",
    );
}

#[test]
fn a_fully_inherited_type_gets_a_void_placeholder() {
    assert_eq!(
        dgraph("interface Bar {\n  id: ID!\n}\n\ntype Foo implements Bar {\n  id: ID!\n}"),
        "\n\n\ninterface Bar {\n  id: ID!\n}\n\ntype Foo implements Bar {\n  _VOID: String\n}",
    );
}

#[test]
fn unknown_directives_are_filtered_out() {
    assert_eq!(
        dgraph("type Post {\n  title: String @search @w_locked\n}"),
        "\n\n\ntype Post {\n  title: String @search\n}",
    );
}

#[test]
fn directive_arguments_survive_the_filter() {
    assert_eq!(
        dgraph("type Post {\n  title: String @dgraph(pred: \"Post.title\") @x_ro\n}"),
        "\n\n\ntype Post {\n  title: String @dgraph(pred: \"Post.title\")\n}",
    );
}

#[test]
fn inputs_pass_through_untouched() {
    assert_eq!(
        dgraph(
            "type Post {\n  title: String @w_locked\n}\n\n\
             input AddPostInput {\n  title: String\n}",
        ),
        "\n\n\ntype Post {\n  title: String\n}\n\n\
         input AddPostInput {\n  title: String\n}",
    );
}

#[test]
fn the_auth_pragma_comment_is_preserved() {
    assert_eq!(
        dgraph("# Dgraph.Authorization {\"Header\":\"X\"}\n\ntype X {\n  a: String\n}"),
        "\n\n\n# Dgraph.Authorization {\"Header\":\"X\"}\n\ntype X {\n  a: String\n}",
    );
}

#[test]
fn ordinary_comments_are_still_dropped() {
    assert_eq!(
        dgraph("# just a note\ntype X {\n  a: String\n}"),
        "\n\n\ntype X {\n  a: String\n}",
    );
}

#[test]
fn duplicate_types_merge_for_dgraph_too() {
    assert_eq!(
        dgraph("type Foo {\n  a: String\n}\n\ntype Foo {\n  b: Int\n}"),
        "\n\n\ntype Foo {\n  a: String\n  b: Int\n}",
    );
}
