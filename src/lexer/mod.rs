//! Lexical analysis module for the token lexer.
//!
//! This module contains the tokenizer that splits raw placeholder text
//! into a sequence of classified bits for parsing. It handles:
//!
//! - Splitting on the `{{`/`}}` markers and the `:`/`|` argument separators
//! - Short-circuiting boolean literals and blank strings
//! - Bit offset tracking for error reporting

pub mod bits;
pub mod lexer;
