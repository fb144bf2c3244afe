#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod parser;
pub mod splitter;

extern crate regex;

pub use crate::lexer::{
    bits::{LexBit, LexBitKind},
    lexer::{might_contain_tokens, tokenize_string},
};
pub use crate::parser::{
    parser::{parse_bits, parse_str, parse_str_with_config, Parser},
    tokens::{collect_token_names, reconstruct, InputArgs, LexToken, LexTokenKind, TokenCall},
};
pub use crate::splitter::splitter::{split_lexically, split_lexically_with, SplitOptions};

/// Byte offset into the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position(pub usize);

/// Finds the line of `source` containing byte offset `position`.
///
/// Returns the 1-based line number, the line text, and the offset within
/// the line. An offset at the very end of the input belongs to the last line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) || (end == source.len() && position == end) {
            let line_pos = position - start;
            return Some((line_number, line.trim_end_matches('\n').to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    Some((line_number, String::new(), 0))
}

/// Renders an error as a caret diagram under the offending line of `raw`.
///
/// ```text
/// Error: InvalidInput (Found `}}` without a matching `{{`)
///   |
/// 1 | {{Name: a }} }}
///   | -------------^
/// ```
pub fn render_error(error: &Error, raw: &str) -> String {
    let position = error.get_position().0;
    let (line, line_text, line_pos) =
        get_line_at_position(raw, position).unwrap_or((1, raw.to_string(), raw.len()));

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}\n", error.get_error_name())
    } else {
        format!("Error: {} ({})\n", error.get_error_name(), error.get_tip())
    };

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text));

    let arrows = line_text
        .get(..line_pos)
        .map_or(line_pos, |prefix| prefix.chars().count())
        + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}
