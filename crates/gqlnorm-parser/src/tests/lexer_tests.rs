use crate::lexer::{LexError, Lexer};
use crate::token::SdlTokenKind;

fn kinds(source: &str) -> Vec<SdlTokenKind<'_>> {
    Lexer::new(source)
        .map(|t| t.expect("source should lex").kind)
        .collect()
}

#[test]
fn tokenizes_a_field_definition() {
    assert_eq!(
        kinds("type Foo { id: ID! }"),
        vec![
            SdlTokenKind::Name("type"),
            SdlTokenKind::Name("Foo"),
            SdlTokenKind::CurlyBraceOpen,
            SdlTokenKind::Name("id"),
            SdlTokenKind::Colon,
            SdlTokenKind::Name("ID"),
            SdlTokenKind::Bang,
            SdlTokenKind::CurlyBraceClose,
            SdlTokenKind::Eof,
        ],
    );
}

#[test]
fn commas_are_tokens_not_trivia() {
    assert_eq!(
        kinds("(a, b)"),
        vec![
            SdlTokenKind::ParenOpen,
            SdlTokenKind::Name("a"),
            SdlTokenKind::Comma,
            SdlTokenKind::Name("b"),
            SdlTokenKind::ParenClose,
            SdlTokenKind::Eof,
        ],
    );
}

#[test]
fn folds_numeric_literals() {
    assert_eq!(
        kinds("42 -7 3.14 -1.5e3 2E-1"),
        vec![
            SdlTokenKind::IntValue("42"),
            SdlTokenKind::IntValue("-7"),
            SdlTokenKind::FloatValue("3.14"),
            SdlTokenKind::FloatValue("-1.5e3"),
            SdlTokenKind::FloatValue("2E-1"),
            SdlTokenKind::Eof,
        ],
    );
}

#[test]
fn folds_string_literals_with_quotes() {
    assert_eq!(
        kinds(r#""hello \"there\"""#),
        vec![
            SdlTokenKind::StringValue(r#""hello \"there\"""#),
            SdlTokenKind::Eof,
        ],
    );
}

#[test]
fn folds_block_strings() {
    let source = "\"\"\"line one\nline two\"\"\" after";
    assert_eq!(
        kinds(source),
        vec![
            SdlTokenKind::StringValue("\"\"\"line one\nline two\"\"\""),
            SdlTokenKind::Name("after"),
            SdlTokenKind::Eof,
        ],
    );
}

#[test]
fn folds_comments_to_end_of_line() {
    assert_eq!(
        kinds("# a comment {not a block}\r\nname"),
        vec![
            SdlTokenKind::Comment("# a comment {not a block}"),
            SdlTokenKind::Name("name"),
            SdlTokenKind::Eof,
        ],
    );
}

#[test]
fn rejects_unterminated_strings() {
    let result: Result<Vec<_>, _> = Lexer::new("\"abc").collect();
    assert!(matches!(result, Err(LexError::UnterminatedString { .. })));
}

#[test]
fn rejects_unexpected_characters() {
    let result: Result<Vec<_>, _> = Lexer::new("type %").collect();
    let Err(LexError::UnexpectedCharacter { ch, position }) = result else {
        panic!("expected an unexpected-character error");
    };
    assert_eq!(ch, '%');
    assert_eq!((position.line, position.col), (0, 5));
}

#[test]
fn rejects_a_bare_minus_sign() {
    let result: Result<Vec<_>, _> = Lexer::new("-x").collect();
    assert!(matches!(result, Err(LexError::MalformedNumber { .. })));
}

#[test]
fn error_positions_point_at_the_offending_character() {
    let result: Result<Vec<_>, _> = Lexer::new("type Foo\n  $x").collect();
    let Err(LexError::UnexpectedCharacter { ch, position }) = result else {
        panic!("expected an unexpected-character error");
    };
    assert_eq!(ch, '$');
    assert_eq!((position.line, position.col), (1, 2));
}

#[test]
fn tracks_line_and_column_positions() {
    let tokens: Vec<_> = Lexer::new("type\n  Foo")
        .map(|t| t.expect("source should lex"))
        .collect();
    assert_eq!((tokens[0].position.line, tokens[0].position.col), (0, 0));
    assert_eq!((tokens[1].position.line, tokens[1].position.col), (1, 2));
}
