//! Error types and error handling for the tokenizer.
//!
//! This module defines the errors a tokenization pass can end with:
//!
//! - Error structures with source position information
//! - The lexical error variants (unterminated and dangling literals)
//! - Error names and suggestions for diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
