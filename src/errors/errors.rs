use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::bits::LexBitKind, Position};

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} (at offset {})", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    /// Wraps a failure raised while parsing `raw`, keeping the inner position.
    pub fn wrap_input(raw: &str, inner: Error) -> Self {
        let position = inner.position;
        Error {
            internal_error: ErrorImpl::InvalidInput {
                raw: raw.to_string(),
                source: Box::new(inner),
            },
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Returns the innermost error, looking through `InvalidInput` wrappers.
    pub fn root(&self) -> &Error {
        match &self.internal_error {
            ErrorImpl::InvalidInput { source, .. } => source.root(),
            _ => self,
        }
    }

    /// True when the root cause is malformed token syntax.
    pub fn is_format_violation(&self) -> bool {
        matches!(
            self.root().internal_error,
            ErrorImpl::UnexpectedBit { .. }
                | ErrorImpl::UnexpectedBitType { .. }
                | ErrorImpl::TrailingContent { .. }
                | ErrorImpl::EmptyTokenName { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedBit { .. } => "UnexpectedBit",
            ErrorImpl::UnexpectedBitType { .. } => "UnexpectedBitType",
            ErrorImpl::TrailingContent { .. } => "TrailingContent",
            ErrorImpl::EmptyTokenName { .. } => "EmptyTokenName",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::InvalidInput { .. } => "InvalidInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedBit {
                expected: LexBitKind::EndToken,
                found: None,
                ..
            } => ErrorTip::Suggestion(String::from(
                "Reached the end of the input, did you miss a closing `}}`?",
            )),
            ErrorImpl::UnexpectedBit {
                expected: LexBitKind::Literal,
                ..
            } => ErrorTip::Suggestion(String::from(
                "A token must start with its name, like `{{Name}}`",
            )),
            ErrorImpl::UnexpectedBit { expected, .. } => {
                ErrorTip::Suggestion(format!("Expected {} here", expected.describe()))
            }
            ErrorImpl::UnexpectedBitType {
                found: LexBitKind::EndToken,
                ..
            } => ErrorTip::Suggestion(String::from(
                "Found `}}` without a matching `{{`",
            )),
            ErrorImpl::UnexpectedBitType { .. } => ErrorTip::None,
            ErrorImpl::TrailingContent { text, .. } => ErrorTip::Suggestion(format!(
                "Only one token is allowed here, remove `{}`",
                text
            )),
            ErrorImpl::EmptyTokenName { .. } => ErrorTip::Suggestion(String::from(
                "A token must start with its name, like `{{Name}}`",
            )),
            ErrorImpl::NestingTooDeep { max_depth } => ErrorTip::Suggestion(format!(
                "Tokens may be nested at most {} levels deep",
                max_depth
            )),
            ErrorImpl::InvalidInput { source, .. } => source.get_tip(),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

fn describe_found(found: &Option<LexBitKind>) -> &'static str {
    match found {
        Some(kind) => kind.describe(),
        None => "end of input",
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected {}, found {} {text:?}", .expected.describe(), describe_found(.found))]
    UnexpectedBit {
        expected: LexBitKind,
        found: Option<LexBitKind>,
        text: String,
    },
    #[error("unexpected {} {text:?}", .found.describe())]
    UnexpectedBitType { found: LexBitKind, text: String },
    #[error("unexpected {} {text:?} after the token", .found.describe())]
    TrailingContent { found: LexBitKind, text: String },
    #[error("token name {text:?} is empty")]
    EmptyTokenName { text: String },
    #[error("tokens are nested deeper than the limit of {max_depth}")]
    NestingTooDeep { max_depth: usize },
    #[error("failed parsing {raw:?}: {}", .source.internal_error)]
    InvalidInput {
        raw: String,
        #[source]
        source: Box<Error>,
    },
}
