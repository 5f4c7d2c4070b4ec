use crate::parse_error::ParseError;
use crate::semantics::{Disposition, SdlSemantics};
use crate::token::{SdlToken, SdlTokenKind};
use crate::token_stream::TokenStream;
use crate::tree::{Label, NodeId, RecordEntry, SpaceTag, Tree, labels};

/// A recursive-descent parser for SDL type-system documents.
///
/// The parser owns the token stream but borrows the tree and the semantic
/// policy: every definition fragment is built directly into the shared
/// arena and handed to the policy's hook before it is (possibly) wrapped
/// into the document sequence. Suppressed fragments stay allocated, which
/// lets a policy merge a duplicate definition's fields into an earlier
/// fragment by node id.
pub struct SdlParser<'src, 'sem, S: SdlSemantics> {
    stream: TokenStream<'src>,
    tree: &'sem mut Tree,
    semantics: &'sem mut S,
}

impl<'src, 'sem, S: SdlSemantics> SdlParser<'src, 'sem, S> {
    pub fn new(source: &'src str, tree: &'sem mut Tree, semantics: &'sem mut S) -> Self {
        Self {
            stream: TokenStream::new(source),
            tree,
            semantics,
        }
    }

    /// Parses a full document and returns the root sequence node.
    ///
    /// The root is a sequence of single-entry wrapper records, one per
    /// surviving definition or top-level comment, labeled by the grammar
    /// rule that produced it.
    pub fn parse_document(mut self) -> Result<NodeId, ParseError<S::Error>> {
        let mut definitions = Vec::new();
        loop {
            let token = self.peek()?;
            match token.kind {
                SdlTokenKind::Eof => break,
                SdlTokenKind::Comma => {
                    self.bump()?;
                }
                SdlTokenKind::Comment(text) => {
                    self.bump()?;
                    let text = self.tree.terminal(text);
                    let wrapper = self.wrap(labels::COMMENT, text)?;
                    definitions.push(wrapper);
                }
                SdlTokenKind::StringValue(text) => {
                    self.bump()?;
                    let text = self.tree.terminal(text);
                    let wrapper = self.wrap(labels::DOC, text)?;
                    definitions.push(wrapper);
                }
                SdlTokenKind::Name(_) => {
                    self.parse_definition(token, &mut definitions)?;
                }
                _ => return Err(self.unexpected("a definition keyword", token)),
            }
        }
        Ok(self.tree.sequence(definitions))
    }

    fn parse_definition(
        &mut self,
        token: SdlToken<'src>,
        definitions: &mut Vec<NodeId>,
    ) -> Result<(), ParseError<S::Error>> {
        let SdlTokenKind::Name(keyword) = token.kind else {
            return Err(self.unexpected("a definition keyword", token));
        };
        match keyword {
            "type" => {
                let def = self.parse_object_like("type", true)?;
                let disposition = self
                    .semantics
                    .on_object_definition(self.tree, def)
                    .map_err(ParseError::Semantics)?;
                self.emit(labels::OBJECT_DEFINITION, def, disposition, definitions)?;
            }
            "interface" => {
                let def = self.parse_object_like("interface", true)?;
                let disposition = self
                    .semantics
                    .on_interface_definition(self.tree, def)
                    .map_err(ParseError::Semantics)?;
                self.emit(labels::INTERFACE_DEFINITION, def, disposition, definitions)?;
            }
            "input" => {
                let def = self.parse_object_like("input", false)?;
                let disposition = self
                    .semantics
                    .on_input_definition(self.tree, def)
                    .map_err(ParseError::Semantics)?;
                self.emit(labels::INPUT_DEFINITION, def, disposition, definitions)?;
            }
            "enum" => {
                let def = self.parse_enum_definition()?;
                let disposition = self
                    .semantics
                    .on_enum_definition(self.tree, def)
                    .map_err(ParseError::Semantics)?;
                self.emit(labels::ENUM_DEFINITION, def, disposition, definitions)?;
            }
            "scalar" => {
                let def = self.parse_scalar_definition()?;
                self.emit(labels::SCALAR_DEFINITION, def, Disposition::Keep, definitions)?;
            }
            "union" => {
                let def = self.parse_union_definition()?;
                self.emit(labels::UNION_DEFINITION, def, Disposition::Keep, definitions)?;
            }
            "directive" => {
                let def = self.parse_directive_definition()?;
                self.emit(
                    labels::DIRECTIVE_DEFINITION,
                    def,
                    Disposition::Keep,
                    definitions,
                )?;
            }
            "schema" => {
                let def = self.parse_schema_definition()?;
                self.emit(labels::SCHEMA_DEFINITION, def, Disposition::Keep, definitions)?;
            }
            _ => return Err(self.unexpected("a definition keyword", token)),
        }
        Ok(())
    }

    fn emit(
        &mut self,
        label: &'static str,
        def: NodeId,
        disposition: Disposition,
        definitions: &mut Vec<NodeId>,
    ) -> Result<(), ParseError<S::Error>> {
        match disposition {
            Disposition::Keep => {
                let wrapper = self.wrap(label, def)?;
                definitions.push(wrapper);
            }
            Disposition::Suppress => {
                log::trace!("Suppressed a `{label}` fragment.");
            }
        }
        Ok(())
    }

    /// `type`, `interface`, and `input` definitions share one shape, with
    /// the implements clause only allowed on the first two.
    fn parse_object_like(
        &mut self,
        keyword: &'static str,
        with_implements: bool,
    ) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let name = self.name_record("a type name")?;
        let keyword = self.tree.terminal(keyword);

        let mut entries = vec![
            RecordEntry::new(Label::internal(labels::CST), keyword),
            RecordEntry::new(Label::internal(labels::NAME), name),
        ];
        if with_implements {
            let implements = if self.peek()?.kind == SdlTokenKind::Name("implements") {
                self.parse_implements()?
            } else {
                self.tree.absent()
            };
            entries.push(RecordEntry::new(
                Label::internal(labels::IMPLEMENTS),
                implements,
            ));
        }
        let directives = self.parse_directives()?;
        entries.push(RecordEntry::new(
            Label::internal(labels::DIRECTIVES),
            directives,
        ));
        let fields = self.parse_fields_block()?;
        entries.push(RecordEntry::new(Label::internal(labels::FIELDS), fields));

        Ok(self.tree.record(entries)?)
    }

    fn parse_implements(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let keyword = self.tree.terminal("implements");
        let mut items = vec![keyword];
        loop {
            items.push(self.name_record("an interface name")?);
            if self.peek()?.kind != SdlTokenKind::Ampersand {
                break;
            }
            self.bump()?;
            let amp = self.tree.terminal("&");
            let amp = self.tree.record([RecordEntry::new(
                Label::internal(labels::CST).with_tag(SpaceTag::Surround),
                amp,
            )])?;
            items.push(amp);
        }
        Ok(self.tree.sequence(items))
    }

    /// Zero or more directive applications. Each one is dispatched to the
    /// policy immediately; suppressed applications never reach the list.
    fn parse_directives(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        let mut items = Vec::new();
        while self.peek()?.kind == SdlTokenKind::At {
            let directive = self.parse_directive_application()?;
            match self
                .semantics
                .on_directive(self.tree, directive)
                .map_err(ParseError::Semantics)?
            {
                Disposition::Keep => items.push(directive),
                Disposition::Suppress => (),
            }
        }
        if items.is_empty() {
            Ok(self.tree.absent())
        } else {
            Ok(self.tree.sequence(items))
        }
    }

    fn parse_directive_application(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let name = self.name_record("a directive name")?;
        let args = if self.peek()?.kind == SdlTokenKind::ParenOpen {
            self.parse_directive_args()?
        } else {
            self.tree.absent()
        };
        let at = self.tree.terminal("@");
        Ok(self.tree.record([
            RecordEntry::new(Label::internal(labels::CST).with_tag(SpaceTag::Before), at),
            RecordEntry::new(Label::internal(labels::NAME), name),
            RecordEntry::new(Label::new(labels::ARGS), args),
        ])?)
    }

    fn parse_directive_args(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let open = self.tree.terminal("(");
        let mut items = vec![open];
        loop {
            let token = self.peek()?;
            match token.kind {
                SdlTokenKind::ParenClose => {
                    self.bump()?;
                    items.push(self.tree.terminal(")"));
                    break;
                }
                SdlTokenKind::Comma => {
                    self.bump()?;
                    items.push(self.tree.terminal(","));
                }
                SdlTokenKind::Name(_) => {
                    let name = self.name_record("an argument name")?;
                    self.expect(SdlTokenKind::Colon, "`:`")?;
                    let colon = self.tree.terminal(":");
                    let value = self.parse_value(true)?;
                    let arg = self.tree.record([
                        RecordEntry::new(Label::internal(labels::NAME), name),
                        RecordEntry::new(Label::internal(labels::CST), colon),
                        RecordEntry::new(Label::internal(labels::VALUE), value),
                    ])?;
                    items.push(arg);
                }
                SdlTokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof { expected: "`)`" });
                }
                _ => return Err(self.unexpected("an argument name or `)`", token)),
            }
        }
        Ok(self.tree.sequence(items))
    }

    /// A literal or name value. In `spaced` position (after `:`) values
    /// carry their own leading-space tag; after `=` the surrounding
    /// punctuation already supplies the spacing and values render
    /// verbatim.
    fn parse_value(&mut self, spaced: bool) -> Result<NodeId, ParseError<S::Error>> {
        let token = self.peek()?;
        match token.kind {
            SdlTokenKind::IntValue(text)
            | SdlTokenKind::FloatValue(text)
            | SdlTokenKind::StringValue(text) => {
                self.bump()?;
                let text = self.tree.terminal(text);
                if spaced {
                    Ok(self.tree.record([RecordEntry::new(
                        Label::internal(labels::VALUE).with_tag(SpaceTag::Before),
                        text,
                    )])?)
                } else {
                    Ok(text)
                }
            }
            SdlTokenKind::Name(text) => {
                if spaced {
                    self.name_record("a value")
                } else {
                    self.bump()?;
                    Ok(self.tree.terminal(text))
                }
            }
            SdlTokenKind::SquareBracketOpen => self.parse_list_value(spaced),
            SdlTokenKind::CurlyBraceOpen => Err(self.unexpected("a scalar value", token)),
            _ => Err(self.unexpected("a value", token)),
        }
    }

    fn parse_list_value(&mut self, spaced: bool) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let mut items = Vec::new();
        loop {
            let token = self.peek()?;
            match token.kind {
                SdlTokenKind::SquareBracketClose => {
                    self.bump()?;
                    break;
                }
                SdlTokenKind::Comma => {
                    self.bump()?;
                    items.push(self.tree.terminal(","));
                }
                SdlTokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof { expected: "`]`" });
                }
                _ => items.push(self.parse_value(false)?),
            }
        }
        let open_label = if spaced {
            Label::internal(labels::OPEN).with_tag(SpaceTag::Before)
        } else {
            Label::internal(labels::OPEN)
        };
        let open = self.tree.terminal("[");
        let members = self.tree.sequence(items);
        let close = self.tree.terminal("]");
        Ok(self.tree.record([
            RecordEntry::new(open_label, open),
            RecordEntry::new(Label::internal(labels::MEMBERS), members),
            RecordEntry::new(Label::internal(labels::CLOSE), close),
        ])?)
    }

    /// A `{ ... }` block of field definitions, interleaved with comments
    /// and doc strings. The result is always the three-element sequence
    /// `[ "{", fields, "}" ]`.
    fn parse_fields_block(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.expect(SdlTokenKind::CurlyBraceOpen, "`{`")?;
        let mut items = Vec::new();
        loop {
            let token = self.peek()?;
            match token.kind {
                SdlTokenKind::CurlyBraceClose => {
                    self.bump()?;
                    break;
                }
                SdlTokenKind::Comma => {
                    self.bump()?;
                }
                SdlTokenKind::Comment(text) => {
                    self.bump()?;
                    let text = self.tree.terminal(text);
                    let wrapper = self.wrap(labels::COMMENT, text)?;
                    items.push(wrapper);
                }
                SdlTokenKind::StringValue(text) => {
                    self.bump()?;
                    let text = self.tree.terminal(text);
                    let wrapper = self.wrap(labels::DOC, text)?;
                    items.push(wrapper);
                }
                SdlTokenKind::Name(_) => {
                    let field = self.parse_field()?;
                    items.push(field);
                }
                SdlTokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof { expected: "`}`" });
                }
                _ => return Err(self.unexpected("a field definition or `}`", token)),
            }
        }
        let open = self.tree.terminal("{");
        let fields = self.tree.sequence(items);
        let close = self.tree.terminal("}");
        Ok(self.tree.sequence(vec![open, fields, close]))
    }

    fn parse_field(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        let name = self.name_record("a field name")?;
        let args = if self.peek()?.kind == SdlTokenKind::ParenOpen {
            self.parse_argument_definitions()?
        } else {
            self.tree.absent()
        };
        self.expect(SdlTokenKind::Colon, "`:`")?;
        let colon = self.tree.terminal(":");
        let annotation = self.parse_type_annotation()?;
        let directives = self.parse_directives()?;
        let record = self.tree.record([
            RecordEntry::new(Label::internal(labels::NAME), name),
            RecordEntry::new(Label::new(labels::ARGS), args),
            RecordEntry::new(Label::internal(labels::CST), colon),
            RecordEntry::new(Label::internal(labels::TYPE), annotation),
            RecordEntry::new(Label::internal(labels::DIRECTIVES), directives),
        ])?;
        self.wrap(labels::FIELD, record)
    }

    fn parse_argument_definitions(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let open = self.tree.terminal("(");
        let mut items = vec![open];
        loop {
            let token = self.peek()?;
            match token.kind {
                SdlTokenKind::ParenClose => {
                    self.bump()?;
                    items.push(self.tree.terminal(")"));
                    break;
                }
                SdlTokenKind::Comma => {
                    self.bump()?;
                    items.push(self.tree.terminal(","));
                }
                SdlTokenKind::Name(_) => {
                    let name = self.name_record("an argument name")?;
                    self.expect(SdlTokenKind::Colon, "`:`")?;
                    let colon = self.tree.terminal(":");
                    let annotation = self.parse_type_annotation()?;
                    let default = if self.peek()?.kind == SdlTokenKind::Equals {
                        self.bump()?;
                        let eq = self.tree.terminal("=");
                        let value = self.parse_value(false)?;
                        self.tree.record([
                            RecordEntry::new(
                                Label::internal(labels::EQ).with_tag(SpaceTag::Surround),
                                eq,
                            ),
                            RecordEntry::new(Label::internal(labels::VALUE), value),
                        ])?
                    } else {
                        self.tree.absent()
                    };
                    let directives = self.parse_directives()?;
                    let arg = self.tree.record([
                        RecordEntry::new(Label::internal(labels::NAME), name),
                        RecordEntry::new(Label::internal(labels::CST), colon),
                        RecordEntry::new(Label::internal(labels::TYPE), annotation),
                        RecordEntry::new(Label::internal(labels::DEFAULT), default),
                        RecordEntry::new(Label::internal(labels::DIRECTIVES), directives),
                    ])?;
                    items.push(arg);
                }
                SdlTokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof { expected: "`)`" });
                }
                _ => return Err(self.unexpected("an argument definition or `)`", token)),
            }
        }
        Ok(self.tree.sequence(items))
    }

    fn parse_type_annotation(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        let token = self.peek()?;
        let base = match token.kind {
            SdlTokenKind::SquareBracketOpen => {
                self.bump()?;
                let inner = self.parse_type_annotation()?;
                self.expect(SdlTokenKind::SquareBracketClose, "`]`")?;
                let open = self.tree.terminal("[");
                let close = self.tree.terminal("]");
                self.tree.record([
                    RecordEntry::new(Label::internal(labels::OPEN).with_tag(SpaceTag::Before), open),
                    RecordEntry::new(Label::internal(labels::TYPE), inner),
                    RecordEntry::new(Label::internal(labels::CLOSE), close),
                ])?
            }
            SdlTokenKind::Name(_) => self.name_record("a type")?,
            _ => return Err(self.unexpected("a type", token)),
        };
        if self.peek()?.kind == SdlTokenKind::Bang {
            self.bump()?;
            let bang = self.tree.terminal("!");
            Ok(self.tree.sequence(vec![base, bang]))
        } else {
            Ok(base)
        }
    }

    /// Enum definitions keep the original grammar's list shape: the name
    /// record sits at offset one of a plain sequence rather than in a
    /// labeled record slot.
    fn parse_enum_definition(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let keyword = self.tree.terminal("enum");
        let name = self.name_record("an enum name")?;
        self.expect(SdlTokenKind::CurlyBraceOpen, "`{`")?;
        let mut values = Vec::new();
        loop {
            let token = self.peek()?;
            match token.kind {
                SdlTokenKind::CurlyBraceClose => {
                    self.bump()?;
                    break;
                }
                SdlTokenKind::Comma => {
                    self.bump()?;
                }
                SdlTokenKind::Comment(text) => {
                    self.bump()?;
                    let text = self.tree.terminal(text);
                    let wrapper = self.wrap(labels::COMMENT, text)?;
                    values.push(wrapper);
                }
                SdlTokenKind::StringValue(text) => {
                    self.bump()?;
                    let text = self.tree.terminal(text);
                    let wrapper = self.wrap(labels::DOC, text)?;
                    values.push(wrapper);
                }
                SdlTokenKind::Name(_) => {
                    let value = self.name_record("an enum value")?;
                    let directives = self.parse_directives()?;
                    let record = self.tree.record([
                        RecordEntry::new(Label::internal(labels::NAME), value),
                        RecordEntry::new(Label::internal(labels::DIRECTIVES), directives),
                    ])?;
                    let wrapper = self.wrap(labels::FIELD, record)?;
                    values.push(wrapper);
                }
                SdlTokenKind::Eof => {
                    return Err(ParseError::UnexpectedEof { expected: "`}`" });
                }
                _ => return Err(self.unexpected("an enum value or `}`", token)),
            }
        }
        let open = self.tree.terminal("{");
        let inner = self.tree.sequence(values);
        let close = self.tree.terminal("}");
        let body = self.tree.sequence(vec![open, inner, close]);
        Ok(self.tree.sequence(vec![keyword, name, body]))
    }

    fn parse_scalar_definition(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let keyword = self.tree.terminal("scalar");
        let name = self.name_record("a scalar name")?;
        let directives = self.parse_directives()?;
        Ok(self.tree.record([
            RecordEntry::new(Label::internal(labels::CST), keyword),
            RecordEntry::new(Label::internal(labels::NAME), name),
            RecordEntry::new(Label::internal(labels::DIRECTIVES), directives),
        ])?)
    }

    fn parse_union_definition(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let keyword = self.tree.terminal("union");
        let name = self.name_record("a union name")?;
        let directives = self.parse_directives()?;
        self.expect(SdlTokenKind::Equals, "`=`")?;
        let eq = self.tree.terminal("=");
        let eq = self.tree.record([RecordEntry::new(
            Label::internal(labels::EQ).with_tag(SpaceTag::Surround),
            eq,
        )])?;
        let mut members = vec![eq];
        loop {
            let member = self.expect_name("a union member")?;
            members.push(self.tree.terminal(member));
            if self.peek()?.kind != SdlTokenKind::Pipe {
                break;
            }
            self.bump()?;
            let pipe = self.tree.terminal("|");
            let pipe = self.tree.record([RecordEntry::new(
                Label::internal(labels::CST).with_tag(SpaceTag::Surround),
                pipe,
            )])?;
            members.push(pipe);
        }
        let members = self.tree.sequence(members);
        Ok(self.tree.record([
            RecordEntry::new(Label::internal(labels::CST), keyword),
            RecordEntry::new(Label::internal(labels::NAME), name),
            RecordEntry::new(Label::internal(labels::DIRECTIVES), directives),
            RecordEntry::new(Label::internal(labels::MEMBERS), members),
        ])?)
    }

    fn parse_directive_definition(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let keyword = self.tree.terminal("directive");
        self.expect(SdlTokenKind::At, "`@`")?;
        let at = self.tree.terminal("@");
        let name = self.name_record("a directive name")?;
        let args = if self.peek()?.kind == SdlTokenKind::ParenOpen {
            self.parse_argument_definitions()?
        } else {
            self.tree.absent()
        };
        self.expect(SdlTokenKind::Name("on"), "`on`")?;
        let on = self.tree.terminal("on");

        let location = self.expect_name("a directive location")?;
        let mut locations = vec![self.tree.terminal(location)];
        while self.peek()?.kind == SdlTokenKind::Pipe {
            self.bump()?;
            let pipe = self.tree.terminal("|");
            let pipe = self.tree.record([RecordEntry::new(
                Label::internal(labels::CST).with_tag(SpaceTag::Surround),
                pipe,
            )])?;
            locations.push(pipe);
            let location = self.expect_name("a directive location")?;
            locations.push(self.tree.terminal(location));
        }
        let locations = self.tree.sequence(locations);

        Ok(self.tree.record([
            RecordEntry::new(Label::internal(labels::CST), keyword),
            RecordEntry::new(Label::internal(labels::AT).with_tag(SpaceTag::Before), at),
            RecordEntry::new(Label::internal(labels::NAME), name),
            RecordEntry::new(Label::new(labels::ARGS), args),
            RecordEntry::new(Label::internal(labels::ON).with_tag(SpaceTag::Surround), on),
            RecordEntry::new(Label::internal(labels::LOCATIONS), locations),
        ])?)
    }

    fn parse_schema_definition(&mut self) -> Result<NodeId, ParseError<S::Error>> {
        self.bump()?;
        let keyword = self.tree.terminal("schema");
        let directives = self.parse_directives()?;
        let fields = self.parse_fields_block()?;
        Ok(self.tree.record([
            RecordEntry::new(Label::internal(labels::CST), keyword),
            RecordEntry::new(Label::internal(labels::DIRECTIVES), directives),
            RecordEntry::new(Label::internal(labels::FIELDS), fields),
        ])?)
    }

    /// A name token wrapped in the `{ name: <terminal> }` record shape
    /// the printer's spacing rules key off of.
    fn name_record(&mut self, expected: &'static str) -> Result<NodeId, ParseError<S::Error>> {
        let name = self.expect_name(expected)?;
        let name = self.tree.terminal(name);
        Ok(self
            .tree
            .record([RecordEntry::new(Label::new(labels::NAME), name)])?)
    }

    fn wrap(&mut self, label: &'static str, value: NodeId) -> Result<NodeId, ParseError<S::Error>> {
        Ok(self
            .tree
            .record([RecordEntry::new(Label::new(label), value)])?)
    }

    fn peek(&mut self) -> Result<SdlToken<'src>, ParseError<S::Error>> {
        Ok(self.stream.peek()?)
    }

    fn bump(&mut self) -> Result<SdlToken<'src>, ParseError<S::Error>> {
        Ok(self.stream.next()?)
    }

    fn expect(
        &mut self,
        kind: SdlTokenKind<'static>,
        expected: &'static str,
    ) -> Result<SdlToken<'src>, ParseError<S::Error>> {
        let token = self.bump()?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(self.unexpected(expected, token))
        }
    }

    fn expect_name(&mut self, expected: &'static str) -> Result<&'src str, ParseError<S::Error>> {
        let token = self.bump()?;
        match token.kind {
            SdlTokenKind::Name(name) => Ok(name),
            _ => Err(self.unexpected(expected, token)),
        }
    }

    fn unexpected(&self, expected: &'static str, token: SdlToken<'src>) -> ParseError<S::Error> {
        if token.kind == SdlTokenKind::Eof {
            ParseError::UnexpectedEof { expected }
        } else {
            ParseError::UnexpectedToken {
                expected,
                found: token.kind.description(),
                position: token.position,
            }
        }
    }
}
