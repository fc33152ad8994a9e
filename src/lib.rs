#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use errors::errors::{LexError, LexResult};
pub use lexer::lexer::tokenize;

/// Zero-based character offset into the tokenized source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub u32);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Returns the 1-based line number, the text of that line and the column of
/// `position` within it. Positions past the end land on the last line.
pub fn line_and_column(source: &str, position: Position) -> (usize, String, usize) {
    let pos = position.0 as usize;

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in source.split_inclusive('\n') {
        let len = line.chars().count();
        let end = start + len;

        if (start..end).contains(&pos) {
            return (line_number, line.to_string(), pos - start);
        }

        last = (line_number, line.to_string(), len);
        start = end;
        line_number += 1;
    }

    last
}

#[cfg(test)]
mod tests {
    use super::{line_and_column, Position};

    #[test]
    fn test_line_and_column() {
        let source = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = line_and_column(source, Position(10));
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = line_and_column(source, Position(30));
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_line_and_column_past_end() {
        let (line_number, line, line_pos) = line_and_column("ab \"cd", Position(6));
        assert_eq!(line_number, 1);
        assert_eq!(line, "ab \"cd");
        assert_eq!(line_pos, 6);
    }
}

/// Renders a caret diagnostic for `error` against the source it came from.
pub fn display_error(error: &Error, source: &str) -> String {
    /*
        Error: DanglingLiteralDelimiter (...)
          |
        1 | so is "this on"e
          | ---------------^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = line_and_column(source, *position);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
