use tracing::{debug, debug_span, trace};

use crate::{
    errors::errors::{Error, ErrorImpl, LexResult},
    Position, Span, MK_TOKEN,
};

use super::{
    classify::{classify, is_special_character, is_whitespace},
    token_list::TokenSequence,
    tokens::{Token, TokenKind},
};

/// State of the scanner's finite state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    SkippingWhitespace,
    ReadingToken,
    ReadingString,
    EndOfString,
    Escape,
    AfterSpecialCharacter,
}

pub struct Lexer {
    source: Vec<char>,
    tokens: TokenSequence,
    pos: usize,
    start: usize,
    state: FsmState,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            tokens: TokenSequence::new(),
            pos: 0,
            start: 0,
            state: FsmState::SkippingWhitespace,
        }
    }

    pub fn state(&self) -> FsmState {
        self.state
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    pub fn at(&self) -> char {
        self.source[self.pos]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn transition(&mut self, next: FsmState) {
        if next != self.state {
            trace!(pos = self.pos, from = ?self.state, to = ?next, "state change");
            self.state = next;
        }
    }

    fn span(&self, start: usize, end: usize) -> Span {
        Span {
            start: Position(start as u32),
            end: Position(end as u32),
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.source[start..end].iter().collect()
    }

    /// Marks the current character as the first of a new token.
    fn begin(&mut self, next: FsmState) {
        self.start = self.pos;
        self.transition(next);
    }

    /// Emits the bare token `[start, pos)`, classified by its text.
    fn push_pending(&mut self) {
        let text = self.slice(self.start, self.pos);
        let span = self.span(self.start, self.pos);
        self.tokens.push(MK_TOKEN!(classify(&text), text, span));
    }

    /// Emits the quoted string `[start, pos)` without its outer quotes. The
    /// content is kept exactly as written, escapes included.
    fn push_literal(&mut self) {
        let text = self.slice(self.start + 1, self.pos - 1);
        let span = self.span(self.start, self.pos);
        self.tokens
            .push(MK_TOKEN!(TokenKind::LiteralString, text, span));
    }

    fn push_special(&mut self, c: char) {
        let span = self.span(self.pos, self.pos + 1);
        self.tokens
            .push(MK_TOKEN!(TokenKind::SpecialCharacter, c.to_string(), span));
    }

    /// Feeds one character to the state machine.
    pub fn step(&mut self, c: char) -> LexResult<()> {
        match self.state {
            FsmState::SkippingWhitespace => {
                if is_whitespace(c) {
                    return Ok(());
                }

                if is_special_character(c) {
                    self.push_special(c);
                    self.transition(FsmState::AfterSpecialCharacter);
                } else if c == '"' {
                    self.begin(FsmState::ReadingString);
                } else {
                    self.begin(FsmState::ReadingToken);
                }
            }

            FsmState::ReadingToken => {
                if is_special_character(c) {
                    self.push_pending();
                    self.push_special(c);
                    self.transition(FsmState::AfterSpecialCharacter);
                } else if is_whitespace(c) {
                    self.push_pending();
                    self.transition(FsmState::SkippingWhitespace);
                }
            }

            FsmState::ReadingString => match c {
                '\\' => self.transition(FsmState::Escape),
                '"' => self.transition(FsmState::EndOfString),
                _ => {}
            },

            // Whatever follows the backslash is part of the string, quotes
            // and backslashes included.
            FsmState::Escape => self.transition(FsmState::ReadingString),

            FsmState::EndOfString => {
                if is_whitespace(c) {
                    self.push_literal();
                    self.transition(FsmState::SkippingWhitespace);
                } else if is_special_character(c) {
                    self.push_literal();
                    self.push_special(c);
                    self.transition(FsmState::AfterSpecialCharacter);
                } else {
                    return Err(Error::new(
                        ErrorImpl::DanglingLiteralDelimiter { found: c },
                        Position(self.pos as u32),
                    ));
                }
            }

            FsmState::AfterSpecialCharacter => {
                if is_whitespace(c) {
                    self.transition(FsmState::SkippingWhitespace);
                } else if is_special_character(c) {
                    self.push_special(c);
                } else if c == '"' {
                    self.begin(FsmState::ReadingString);
                } else {
                    self.begin(FsmState::ReadingToken);
                }
            }
        }

        Ok(())
    }

    /// Flushes whatever token is still pending at the end of the input.
    pub fn finish(mut self) -> LexResult<TokenSequence> {
        match self.state {
            FsmState::SkippingWhitespace | FsmState::AfterSpecialCharacter => {}
            FsmState::ReadingToken => self.push_pending(),
            FsmState::EndOfString => self.push_literal(),
            FsmState::ReadingString | FsmState::Escape => {
                let position = Position(self.start as u32);
                return Err(self.abort(Error::new(ErrorImpl::UnterminatedLiteral, position)));
            }
        }

        Ok(self.tokens)
    }

    /// Drops the partially built sequence and hands back `error`.
    pub fn abort(self, error: Error) -> Error {
        debug!(
            discarded = self.tokens.len(),
            position = error.get_position().0,
            "{}",
            error
        );

        error
    }
}

/// Splits `source` into classified tokens.
///
/// Whitespace separates tokens and is otherwise dropped. `[ ] ( ) : ;` are
/// tokens on their own wherever they appear. A quoted string becomes one
/// `LiteralString` token and must be followed by whitespace, a special
/// character or the end of the input.
pub fn tokenize(source: &str) -> LexResult<TokenSequence> {
    let mut lex = Lexer::new(source);
    let _span = debug_span!("tokenize", chars = lex.source.len()).entered();

    while !lex.at_eof() {
        if let Err(error) = lex.step(lex.at()) {
            return Err(lex.abort(error));
        }

        lex.advance();
    }

    let tokens = lex.finish()?;
    debug!(tokens = tokens.len(), capacity = tokens.capacity(), "tokenized");

    Ok(tokens)
}
