//! Lexical analysis module for RegLang.
//!
//! This module contains the tokenizer that converts RegLang source into a
//! sequence of classified tokens for parsing. It handles:
//!
//! - A character-driven finite state machine over the input
//! - Quoted literal strings, with `\` neutralizing the next character
//! - The single-character punctuation tokens `[ ] ( ) : ;`
//! - Recognition of keywords, identifiers and unknown words
//! - Whitespace elision and source spans for error reporting

pub mod classify;
pub mod lexer;
pub mod token_list;
pub mod tokens;
