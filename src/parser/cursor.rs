//! Read-only cursor over a [`TokenSequence`].

use crate::lexer::{
    token_list::TokenSequence,
    tokens::{Token, TokenKind},
};

/// Walks a token sequence front to back without modifying it.
///
/// The cursor never moves past the end of the sequence, so it can be
/// advanced freely while checking [`TokenCursor::at_end`].
pub struct TokenCursor<'a> {
    /// The tokens being walked
    tokens: &'a TokenSequence,
    /// Index of the current token
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a TokenSequence) -> Self {
        TokenCursor { tokens, pos: 0 }
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    /// Returns the token `offset` places after the current one.
    pub fn peek(&self, offset: usize) -> Option<&'a Token> {
        self.pos
            .checked_add(offset)
            .and_then(|index| self.tokens.get(index))
    }

    /// Advances to the next token and returns the previous one.
    pub fn advance(&mut self) -> Option<&'a Token> {
        let token = self.current_token()?;
        self.pos += 1;
        Some(token)
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// # Arguments
    ///
    /// * `expected_kind` - The expected TokenKind
    ///
    /// # Returns
    ///
    /// The consumed token, or `None` (leaving the cursor where it was) if the
    /// current token has another kind or there are no tokens left.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Option<&'a Token> {
        if self.current_token_kind()? != expected_kind {
            return None;
        }

        self.advance()
    }

    /// Checks if every token has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}
