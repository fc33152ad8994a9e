//! Character and token classification used by the scanner.

use lazy_static::lazy_static;
use regex::Regex;

use super::tokens::{TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

pub fn is_special_character(c: char) -> bool {
    matches!(c, '[' | ']' | '(' | ')' | ':' | ';')
}

/// Classifies the text of a bare (unquoted, non-punctuation) token.
///
/// Keywords match exactly and case-sensitively. Anything else that fits
/// `[A-Za-z_][A-Za-z0-9_]*` is an identifier, and the rest is `Unknown`.
pub fn classify(text: &str) -> TokenKind {
    if let Some(keyword) = RESERVED_LOOKUP.get(text) {
        return TokenKind::Keyword(*keyword);
    }

    if IDENTIFIER.is_match(text) {
        TokenKind::Identifier
    } else {
        TokenKind::Unknown
    }
}
