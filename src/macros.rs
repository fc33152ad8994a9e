//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance from its kind, text and span

/// Creates a Token instance. The length is taken from the text's character
/// count. `$kind` is evaluated before `$text` is moved, so the kind may be
/// computed from a borrow of the same text.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The token's text as a `String`
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "digit".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $span:expr) => {{
        let kind: TokenKind = $kind;
        let text: String = $text;
        Token {
            kind,
            length: text.chars().count(),
            text,
            span: $span,
        }
    }};
}
