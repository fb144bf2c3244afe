//! Error types and error handling for the token lexer.
//!
//! This module defines the errors raised while tokenizing and parsing
//! placeholder text. It includes:
//!
//! - Error structures with the byte offset of the offending bit
//! - Format-violation variants naming the expected and found bit kinds
//! - The wrapper that attaches the raw input to a failed parse
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
