//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use std::error::Error as _;

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::bits::LexBitKind;
use crate::Position;

fn missing_close() -> Error {
    Error::new(
        ErrorImpl::UnexpectedBit {
            expected: LexBitKind::EndToken,
            found: None,
            text: String::new(),
        },
        Position(12),
    )
}

#[test]
fn test_error_creation() {
    let error = missing_close();

    assert_eq!(error.get_error_name(), "UnexpectedBit");
    assert_eq!(error.get_position().0, 12);
    assert!(error.is_format_violation());
}

#[test]
fn test_unexpected_bit_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedBit {
            expected: LexBitKind::Literal,
            found: Some(LexBitKind::StartToken),
            text: "{{".to_string(),
        },
        Position(2),
    );

    assert_eq!(
        error.to_string(),
        "expected literal text, found start of token `{{` \"{{\" (at offset 2)"
    );
}

#[test]
fn test_end_of_input_message() {
    assert_eq!(
        missing_close().to_string(),
        "expected end of token `}}`, found end of input \"\" (at offset 12)"
    );
}

#[test]
fn test_wrapped_error_keeps_source() {
    let inner = missing_close();
    let error = Error::wrap_input("{{Outer: x", inner.clone());

    assert_eq!(error.get_error_name(), "InvalidInput");
    assert_eq!(error.get_position(), inner.get_position());
    assert_eq!(error.root(), &inner);
    assert!(error.to_string().starts_with("failed parsing \"{{Outer: x\""));
    assert_eq!(error.to_string().matches("at offset").count(), 1);

    let source = error.kind().source().expect("wrapped error should have a source");
    assert_eq!(source.to_string(), inner.to_string());
}

#[test]
fn test_nesting_error_is_not_format_violation() {
    let error = Error::new(ErrorImpl::NestingTooDeep { max_depth: 4 }, Position(0));

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(!error.is_format_violation());
    assert_eq!(
        error.get_tip().to_string(),
        "Tokens may be nested at most 4 levels deep"
    );
}

#[test]
fn test_error_tips() {
    assert!(matches!(missing_close().get_tip(), ErrorTip::Suggestion(tip) if tip.contains("closing `}}`")));

    let stray = Error::new(
        ErrorImpl::UnexpectedBitType {
            found: LexBitKind::EndToken,
            text: "}}".to_string(),
        },
        Position(0),
    );
    assert_eq!(
        stray.get_tip().to_string(),
        "Found `}}` without a matching `{{`"
    );

    let wrapped = Error::wrap_input("}}", stray);
    assert_eq!(
        wrapped.get_tip().to_string(),
        "Found `}}` without a matching `{{`"
    );
}

#[test]
fn test_wrapped_error_message_names_offset_once() {
    let error = crate::parse_str("{{A: {{B}", false, false).unwrap_err();

    assert_eq!(
        error.to_string(),
        "failed parsing \"{{A: {{B}\": expected end of token `}}`, found end of input \"\" (at offset 9)"
    );
}

#[test]
fn test_empty_token_name_error() {
    let error = Error::new(
        ErrorImpl::EmptyTokenName {
            text: " ".to_string(),
        },
        Position(2),
    );

    assert_eq!(error.get_error_name(), "EmptyTokenName");
    assert!(error.is_format_violation());
    assert_eq!(error.to_string(), "token name \" \" is empty (at offset 2)");
}
