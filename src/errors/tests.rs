//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::{display_error, Position};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnterminatedLiteral, Position(10));

    assert_eq!(error.get_error_name(), "UnterminatedLiteral");
    assert_eq!(error.get_kind(), &ErrorImpl::UnterminatedLiteral);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::DanglingLiteralDelimiter { found: 'e' },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_dangling_delimiter_error() {
    let error = Error::new(
        ErrorImpl::DanglingLiteralDelimiter { found: 'x' },
        Position(0),
    );

    assert_eq!(error.get_error_name(), "DanglingLiteralDelimiter");
}

#[test]
fn test_error_tips() {
    let unterminated = Error::new(ErrorImpl::UnterminatedLiteral, Position(0));
    let dangling = Error::new(
        ErrorImpl::DanglingLiteralDelimiter { found: 'e' },
        Position(0),
    );

    match unterminated.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("closing")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
    match dangling.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`e`")),
        ErrorTip::None => panic!("expected a suggestion"),
    }
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::UnterminatedLiteral, Position(14));

    assert_eq!(
        error.to_string(),
        "quoted string has no closing quote at position 14"
    );
}

#[test]
fn test_error_impl_messages() {
    assert_eq!(
        ErrorImpl::DanglingLiteralDelimiter { found: 'e' }.to_string(),
        "quoted string ended with no whitespace or delimiter after it: 'e'"
    );
}

#[test]
fn test_error_tip_display() {
    assert_eq!(ErrorTip::None.to_string(), "");
    assert_eq!(
        ErrorTip::Suggestion("try this".to_string()).to_string(),
        "try this"
    );
}

#[test]
fn test_display_error_points_at_position() {
    let source = "so is \"this on\"e";
    let error = Error::new(
        ErrorImpl::DanglingLiteralDelimiter { found: 'e' },
        Position(15),
    );

    let rendered = display_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert!(lines[0].starts_with("Error: DanglingLiteralDelimiter ("));
    assert_eq!(lines[1], "  |");
    assert_eq!(lines[2], "1 | so is \"this on\"e");
    assert_eq!(lines[3], format!("  | {}^", "-".repeat(15)));
}

#[test]
fn test_display_error_on_later_line() {
    let source = "a b\n  \"open";
    let error = Error::new(ErrorImpl::UnterminatedLiteral, Position(6));

    let rendered = display_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[2], "2 | \"open");
    assert_eq!(lines[3], "  | ^");
}
