//! Growable, ordered storage for the tokens of one tokenization pass.
//!
//! The sequence tracks a logical capacity that starts at
//! [`TOKEN_LIST_STARTING_CAPACITY`] and doubles whenever a push would
//! overflow it. Capacity never shrinks, not even on [`TokenSequence::clear`].

use std::{fmt::Display, ops::Index, slice::Iter};

use super::tokens::Token;

pub const TOKEN_LIST_STARTING_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    tokens: Vec<Token>,
    capacity: usize,
}

impl TokenSequence {
    pub fn new() -> Self {
        TokenSequence {
            tokens: Vec::with_capacity(TOKEN_LIST_STARTING_CAPACITY),
            capacity: TOKEN_LIST_STARTING_CAPACITY,
        }
    }

    pub fn push(&mut self, token: Token) {
        if self.tokens.len() == self.capacity {
            self.capacity *= 2;
            self.tokens.reserve_exact(self.capacity - self.tokens.len());
        }

        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Hands the tokens over to the caller, consuming the sequence.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Releases every owned token. The capacity is left as it was.
    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

impl Default for TokenSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl Display for TokenSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Length: {}", self.len())?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Tokens:")?;

        for (index, token) in self.tokens.iter().enumerate() {
            writeln!(
                f,
                "    {:>3} {:>3} {:<20} [{}]",
                index,
                token.length,
                token.kind.to_string(),
                token.text
            )?;
        }

        Ok(())
    }
}
