//! Parser module for building the placeholder token tree.
//!
//! This module contains the parser that transforms a queue of lexical bits
//! into a sequence of tokens. It is a recursive-descent parser that handles:
//!
//! - Literal text and braced `{{Name}}` tokens
//! - Positional (`:`) and named (`|`) input arguments, with nested tokens
//! - Implied-brace contexts holding exactly one token
//! - Literal normalization (merging and trimming at token boundaries)

pub mod normalize;
pub mod parser;
pub mod tokens;
