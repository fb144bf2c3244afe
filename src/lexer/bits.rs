use std::fmt::Display;

use crate::Position;

pub const START_TOKEN: &str = "{{";
pub const END_TOKEN: &str = "}}";
pub const POSITIONAL_SEPARATOR: &str = ":";
pub const NAMED_SEPARATOR: &str = "|";

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexBitKind {
    Literal,
    StartToken,                  // {{
    EndToken,                    // }}
    PositionalInputArgSeparator, // :
    NamedInputArgSeparator,      // |
}

impl LexBitKind {
    /// Classifies a fragment produced by the tokenizer split.
    pub fn classify(text: &str) -> LexBitKind {
        match text {
            START_TOKEN => LexBitKind::StartToken,
            END_TOKEN => LexBitKind::EndToken,
            POSITIONAL_SEPARATOR => LexBitKind::PositionalInputArgSeparator,
            NAMED_SEPARATOR => LexBitKind::NamedInputArgSeparator,
            _ => LexBitKind::Literal,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            LexBitKind::Literal => "literal text",
            LexBitKind::StartToken => "start of token `{{`",
            LexBitKind::EndToken => "end of token `}}`",
            LexBitKind::PositionalInputArgSeparator => "positional argument separator `:`",
            LexBitKind::NamedInputArgSeparator => "named argument separator `|`",
        }
    }
}

impl Display for LexBitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified slice of raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexBit {
    pub kind: LexBitKind,
    pub text: String,
    /// Byte offset of `text` in the tokenized input.
    pub position: Position,
}

impl LexBit {
    pub fn new(kind: LexBitKind, text: impl Into<String>, position: Position) -> Self {
        LexBit {
            kind,
            text: text.into(),
            position,
        }
    }

    /// Byte offset just past the end of this bit.
    pub fn end(&self) -> Position {
        Position(self.position.0 + self.text.len())
    }
}

impl Display for LexBit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} @{}", self.kind, self.text, self.position.0)
    }
}
