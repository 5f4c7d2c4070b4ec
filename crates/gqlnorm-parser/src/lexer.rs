use crate::SourcePosition;
use crate::token::{SdlToken, SdlTokenKind};

/// An error encountered while scanning raw SDL text into tokens.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("unexpected character `{ch}` at {position}")]
    UnexpectedCharacter { ch: char, position: SourcePosition },

    #[error("unterminated string literal starting at {position}")]
    UnterminatedString { position: SourcePosition },

    #[error("malformed numeric literal at {position}")]
    MalformedNumber { position: SourcePosition },
}

/// A zero-copy lexer over SDL source text.
///
/// Runs of characters that belong to a single literal (names, numbers,
/// strings, comments) are folded into one token holding a slice of the
/// original source. Commas are significant to the downstream printer and
/// are surfaced as tokens rather than discarded as trivia.
///
/// The lexer yields exactly one [`SdlTokenKind::Eof`] token and then ends,
/// or ends immediately after the first error.
pub struct Lexer<'src> {
    source: &'src str,
    offset: usize,
    line: usize,
    col: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 0,
            col: 0,
            finished: false,
        }
    }

    // Not named `position`: the `Iterator` impl would shadow it through
    // the blanket `impl Iterator for &mut I`.
    fn current_position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.col)
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    fn peek_char2(&self) -> Option<char> {
        let mut chars = self.source[self.offset..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_trivia(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\r' | '\n' | '\u{feff}' => {
                    self.bump();
                }
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> Result<SdlToken<'src>, LexError> {
        self.skip_trivia();
        let position = self.current_position();
        let Some(ch) = self.peek_char() else {
            return Ok(SdlToken::new(SdlTokenKind::Eof, position));
        };

        let punct = match ch {
            '&' => Some(SdlTokenKind::Ampersand),
            '@' => Some(SdlTokenKind::At),
            '!' => Some(SdlTokenKind::Bang),
            ':' => Some(SdlTokenKind::Colon),
            ',' => Some(SdlTokenKind::Comma),
            '}' => Some(SdlTokenKind::CurlyBraceClose),
            '{' => Some(SdlTokenKind::CurlyBraceOpen),
            '=' => Some(SdlTokenKind::Equals),
            ')' => Some(SdlTokenKind::ParenClose),
            '(' => Some(SdlTokenKind::ParenOpen),
            '|' => Some(SdlTokenKind::Pipe),
            ']' => Some(SdlTokenKind::SquareBracketClose),
            '[' => Some(SdlTokenKind::SquareBracketOpen),
            _ => None,
        };
        if let Some(kind) = punct {
            self.bump();
            return Ok(SdlToken::new(kind, position));
        }

        match ch {
            '#' => Ok(SdlToken::new(self.fold_comment(), position)),
            '"' => Ok(SdlToken::new(self.fold_string(position)?, position)),
            '-' | '0'..='9' => Ok(SdlToken::new(self.fold_number(position)?, position)),
            'A'..='Z' | 'a'..='z' | '_' => Ok(SdlToken::new(self.fold_name(), position)),
            _ => Err(LexError::UnexpectedCharacter { ch, position }),
        }
    }

    /// Folds a `#`-comment into a single token spanning to end of line.
    fn fold_comment(&mut self) -> SdlTokenKind<'src> {
        let start = self.offset;
        let rest = &self.source.as_bytes()[self.offset..];
        let end = match memchr::memchr(b'\n', rest) {
            Some(i) => self.offset + i,
            None => self.source.len(),
        };
        let mut text = &self.source[start..end];
        if let Some(stripped) = text.strip_suffix('\r') {
            text = stripped;
        }
        // Comments never contain a newline, so the column math is simple.
        self.col += self.source[start..end].chars().count();
        self.offset = end;
        SdlTokenKind::Comment(text)
    }

    fn fold_name(&mut self) -> SdlTokenKind<'src> {
        let start = self.offset;
        while let Some(ch) = self.peek_char() {
            match ch {
                'A'..='Z' | 'a'..='z' | '0'..='9' | '_' => {
                    self.bump();
                }
                _ => break,
            }
        }
        SdlTokenKind::Name(&self.source[start..self.offset])
    }

    /// Folds an integer or float literal, including sign, fraction, and
    /// exponent parts.
    fn fold_number(&mut self, position: SourcePosition) -> Result<SdlTokenKind<'src>, LexError> {
        let start = self.offset;
        if self.peek_char() == Some('-') {
            self.bump();
        }
        if !matches!(self.peek_char(), Some('0'..='9')) {
            return Err(LexError::MalformedNumber { position });
        }
        while matches!(self.peek_char(), Some('0'..='9')) {
            self.bump();
        }

        let mut is_float = false;
        if self.peek_char() == Some('.') && matches!(self.peek_char2(), Some('0'..='9')) {
            is_float = true;
            self.bump();
            while matches!(self.peek_char(), Some('0'..='9')) {
                self.bump();
            }
        }
        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.bump();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.bump();
            }
            if !matches!(self.peek_char(), Some('0'..='9')) {
                return Err(LexError::MalformedNumber { position });
            }
            while matches!(self.peek_char(), Some('0'..='9')) {
                self.bump();
            }
        }

        let text = &self.source[start..self.offset];
        if is_float {
            Ok(SdlTokenKind::FloatValue(text))
        } else {
            Ok(SdlTokenKind::IntValue(text))
        }
    }

    /// Folds a `"..."` or `"""..."""` literal, quotes included.
    fn fold_string(&mut self, position: SourcePosition) -> Result<SdlTokenKind<'src>, LexError> {
        let start = self.offset;
        if self.source[self.offset..].starts_with("\"\"\"") {
            self.bump();
            self.bump();
            self.bump();
            loop {
                if self.source[self.offset..].starts_with("\"\"\"") {
                    self.bump();
                    self.bump();
                    self.bump();
                    return Ok(SdlTokenKind::StringValue(&self.source[start..self.offset]));
                }
                if self.bump().is_none() {
                    return Err(LexError::UnterminatedString { position });
                }
            }
        }

        self.bump();
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.bump();
                    return Ok(SdlTokenKind::StringValue(&self.source[start..self.offset]));
                }
                Some('\\') => {
                    self.bump();
                    self.bump();
                }
                Some('\n') | None => {
                    return Err(LexError::UnterminatedString { position });
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Result<SdlToken<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let result = self.next_token();
        match &result {
            Ok(token) if token.kind == SdlTokenKind::Eof => self.finished = true,
            Err(_) => self.finished = true,
            Ok(_) => (),
        }
        Some(result)
    }
}
