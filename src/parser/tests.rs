//! Unit tests for the token cursor.

use super::cursor::TokenCursor;
use crate::lexer::{
    lexer::tokenize,
    tokens::{Keyword, TokenKind},
};

#[test]
fn test_cursor_walks_in_order() {
    let tokens = tokenize("digit: any character;").unwrap();
    let mut cursor = TokenCursor::new(&tokens);

    let mut texts = vec![];
    while let Some(token) = cursor.advance() {
        texts.push(token.text.as_str());
    }

    assert_eq!(texts, ["digit", ":", "any", "character", ";"]);
    assert!(cursor.at_end());
    assert_eq!(cursor.position(), 5);
}

#[test]
fn test_cursor_expect() {
    let tokens = tokenize("digit: any").unwrap();
    let mut cursor = TokenCursor::new(&tokens);

    assert!(cursor.expect(TokenKind::SpecialCharacter).is_none());
    assert_eq!(cursor.position(), 0);

    let name = cursor.expect(TokenKind::Identifier).unwrap();
    assert_eq!(name.text, "digit");
    assert!(cursor.expect(TokenKind::SpecialCharacter).is_some());
    assert!(cursor
        .expect(TokenKind::Keyword(Keyword::Any))
        .is_some());
    assert!(cursor.expect(TokenKind::Identifier).is_none());
}

#[test]
fn test_cursor_peek() {
    let tokens = tokenize("the set \"abc\"").unwrap();
    let cursor = TokenCursor::new(&tokens);

    assert_eq!(
        cursor.current_token_kind(),
        Some(TokenKind::Keyword(Keyword::The))
    );
    assert_eq!(cursor.peek(2).unwrap().kind, TokenKind::LiteralString);
    assert!(cursor.peek(3).is_none());
}

#[test]
fn test_cursor_on_empty_sequence() {
    let tokens = tokenize("").unwrap();
    let mut cursor = TokenCursor::new(&tokens);

    assert!(cursor.at_end());
    assert!(cursor.current_token().is_none());
    assert!(cursor.advance().is_none());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_cursor_peek_far_past_end() {
    let tokens = tokenize("a b").unwrap();
    let mut cursor = TokenCursor::new(&tokens);

    cursor.advance();

    assert!(cursor.peek(usize::MAX).is_none());
    assert_eq!(cursor.peek(1).unwrap().text, "b");
}
