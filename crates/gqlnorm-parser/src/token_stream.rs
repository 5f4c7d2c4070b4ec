use std::collections::VecDeque;

use crate::lexer::{LexError, Lexer};
use crate::token::{SdlToken, SdlTokenKind};

/// A lookahead buffer over [`Lexer`].
///
/// The end-of-input token is sticky: once the lexer reaches it, both
/// [`TokenStream::peek`] and [`TokenStream::next`] keep returning it, so
/// the parser can never read past the end of the document.
pub struct TokenStream<'src> {
    lexer: Lexer<'src>,
    buffer: VecDeque<SdlToken<'src>>,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            lexer: Lexer::new(source),
            buffer: VecDeque::new(),
        }
    }

    fn fill(&mut self) -> Result<(), LexError> {
        if self.buffer.is_empty() {
            match self.lexer.next() {
                Some(token) => self.buffer.push_back(token?),
                None => (),
            }
        }
        Ok(())
    }

    /// The next token without consuming it.
    pub fn peek(&mut self) -> Result<SdlToken<'src>, LexError> {
        self.fill()?;
        match self.buffer.front() {
            Some(token) => Ok(*token),
            // The lexer was already drained past its Eof token.
            None => Ok(SdlToken::new(SdlTokenKind::Eof, Default::default())),
        }
    }

    /// Consumes and returns the next token. Eof is never consumed.
    pub fn next(&mut self) -> Result<SdlToken<'src>, LexError> {
        let token = self.peek()?;
        if token.kind != SdlTokenKind::Eof {
            self.buffer.pop_front();
        }
        Ok(token)
    }
}
