use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::MK_BIT;

use super::bits::{LexBit, LexBitKind, START_TOKEN};

lazy_static! {
    /// Split-and-capture pattern: start/end markers and both argument separators.
    static ref LEXICAL_PATTERN: Regex = Regex::new(r"\{\{|\}\}|:|\|").unwrap();
}

/// Returns true when the raw text is returned as a single literal without lexing.
fn is_opaque(raw: &str) -> bool {
    raw == "true" || raw == "false" || raw.trim().is_empty()
}

/// Splits raw text into an ordered sequence of classified bits.
///
/// Boolean literals and blank strings are returned verbatim as one literal bit.
/// Every other input is split on `{{`, `}}`, `:` and `|`, keeping each delimiter
/// as its own bit and discarding the empty fragments between adjacent delimiters.
pub fn tokenize_string(raw: &str) -> Vec<LexBit> {
    if is_opaque(raw) {
        trace!(raw, "short-circuit tokenization");
        return vec![MK_BIT!(LexBitKind::Literal, raw, 0)];
    }

    let mut bits = vec![];
    let mut pos = 0;

    for delimiter in LEXICAL_PATTERN.find_iter(raw) {
        if delimiter.start() > pos {
            bits.push(MK_BIT!(LexBitKind::Literal, &raw[pos..delimiter.start()], pos));
        }

        bits.push(MK_BIT!(delimiter.as_str(), delimiter.start()));
        pos = delimiter.end();
    }

    if pos < raw.len() {
        bits.push(MK_BIT!(LexBitKind::Literal, &raw[pos..], pos));
    }

    bits
}

/// Cheap probe for the start-token marker. May report false positives, such as
/// an unmatched `{{`, but never misses text that contains a token.
pub fn might_contain_tokens(raw: &str) -> bool {
    raw.contains(START_TOKEN)
}
