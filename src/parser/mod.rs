//! Parser-facing view of a finished token sequence.
//!
//! Building an expression tree from the tokens and emitting a regular
//! expression from it are not part of this crate. What lives here is the
//! read-only cursor a parser walks the tokens with.

pub mod cursor;

#[cfg(test)]
mod tests;
