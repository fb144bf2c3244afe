//! Literal normalization applied after a token sequence is parsed.
//!
//! The sequence is rebuilt rather than edited in place: adjacent literals are
//! merged, whitespace touching a token boundary is trimmed, and literals that
//! trimming leaves empty are dropped.

use super::tokens::LexToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Merge adjacent literals and trim whitespace at token boundaries.
    Full,
    /// Only merge adjacent literals.
    MergeOnly,
}

/// Concatenates runs of adjacent literals, keeping their order.
pub fn merge_literals(tokens: Vec<LexToken>) -> Vec<LexToken> {
    let mut merged: Vec<LexToken> = Vec::with_capacity(tokens.len());

    for token in tokens {
        if let (Some(LexToken::Literal(previous)), LexToken::Literal(text)) =
            (merged.last_mut(), &token)
        {
            previous.push_str(text);
            continue;
        }
        merged.push(token);
    }

    merged
}

fn is_token(token: Option<&LexToken>) -> bool {
    matches!(token, Some(LexToken::Token(_)))
}

pub fn normalize(tokens: Vec<LexToken>, mode: Normalization, trim: bool) -> Vec<LexToken> {
    let merged = merge_literals(tokens);
    let last = merged.len().saturating_sub(1);
    let mut result = Vec::with_capacity(merged.len());

    for (i, token) in merged.iter().enumerate() {
        let LexToken::Literal(text) = token else {
            result.push(token.clone());
            continue;
        };

        let mut trimmed = text.as_str();
        if mode == Normalization::Full {
            if is_token(merged.get(i + 1)) {
                trimmed = trimmed.trim_end();
            }
            if i > 0 && is_token(merged.get(i - 1)) {
                trimmed = trimmed.trim_start();
            }
        }
        if trim && i == 0 {
            trimmed = trimmed.trim_start();
        }
        if trim && i == last {
            trimmed = trimmed.trim_end();
        }

        if trimmed.is_empty() && (trim || !text.is_empty()) {
            continue;
        }
        result.push(LexToken::literal(trimmed));
    }

    result
}
