//! Lexically-aware splitting of delimited lists.
//!
//! Splits a string such as a comma list only at delimiters that sit outside
//! any `{{...}}` token, reusing the parser to find token boundaries.

pub mod splitter;
