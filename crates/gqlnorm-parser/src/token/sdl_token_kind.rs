use std::fmt;

/// The kind of a single SDL token.
///
/// Multi-character literals (names, numbers, strings, comments) are folded
/// into a single token at lex time and carry a zero-copy slice of the
/// source text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SdlTokenKind<'src> {
    Ampersand,
    At,
    Bang,
    Colon,
    Comma,
    CurlyBraceClose,
    CurlyBraceOpen,
    Equals,
    ParenClose,
    ParenOpen,
    Pipe,
    SquareBracketClose,
    SquareBracketOpen,

    /// A name or keyword. Keywords are not distinguished at lex time.
    Name(&'src str),
    IntValue(&'src str),
    FloatValue(&'src str),
    /// A quoted or block-quoted string, including its quotes.
    StringValue(&'src str),
    /// A `#`-comment, including the leading `#`, excluding the newline.
    Comment(&'src str),

    /// End of input. The lexer always produces exactly one of these.
    Eof,
}

impl<'src> SdlTokenKind<'src> {
    /// A short human-readable description for error messages.
    pub fn description(&self) -> String {
        match self {
            SdlTokenKind::Ampersand => "`&`".to_string(),
            SdlTokenKind::At => "`@`".to_string(),
            SdlTokenKind::Bang => "`!`".to_string(),
            SdlTokenKind::Colon => "`:`".to_string(),
            SdlTokenKind::Comma => "`,`".to_string(),
            SdlTokenKind::CurlyBraceClose => "`}`".to_string(),
            SdlTokenKind::CurlyBraceOpen => "`{`".to_string(),
            SdlTokenKind::Equals => "`=`".to_string(),
            SdlTokenKind::ParenClose => "`)`".to_string(),
            SdlTokenKind::ParenOpen => "`(`".to_string(),
            SdlTokenKind::Pipe => "`|`".to_string(),
            SdlTokenKind::SquareBracketClose => "`]`".to_string(),
            SdlTokenKind::SquareBracketOpen => "`[`".to_string(),
            SdlTokenKind::Name(name) => format!("name `{name}`"),
            SdlTokenKind::IntValue(text) => format!("integer `{text}`"),
            SdlTokenKind::FloatValue(text) => format!("float `{text}`"),
            SdlTokenKind::StringValue(_) => "string value".to_string(),
            SdlTokenKind::Comment(_) => "comment".to_string(),
            SdlTokenKind::Eof => "end of input".to_string(),
        }
    }

    /// The verbatim source text this token folds, for literal tokens.
    pub fn text(&self) -> Option<&'src str> {
        match self {
            SdlTokenKind::Name(text)
            | SdlTokenKind::IntValue(text)
            | SdlTokenKind::FloatValue(text)
            | SdlTokenKind::StringValue(text)
            | SdlTokenKind::Comment(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for SdlTokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
