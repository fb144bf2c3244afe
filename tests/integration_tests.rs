//! Integration tests for the public token lexer API.
//!
//! These tests drive the crate the way configuration loaders do: tokenize
//! raw strings, parse them into token trees, and split token-aware lists.

use std::thread;

use tokenlex::{
    collect_token_names, might_contain_tokens, parse_bits, parse_str, reconstruct,
    render_error, split_lexically, split_lexically_with, tokenize_string, LexBit, LexBitKind,
    LexToken, LexTokenKind, SplitOptions, MK_BIT,
};

#[test]
fn test_config_value_pipeline() {
    let raw = "Spring {{Weather: rain, sun |chance=50}} day";

    let bits = tokenize_string(raw);
    assert_eq!(bits.first().map(|bit| bit.kind), Some(LexBitKind::Literal));
    assert!(might_contain_tokens(raw));

    let tokens = parse_str(raw, false, false).unwrap();
    let kinds: Vec<LexTokenKind> = tokens.iter().map(LexToken::kind).collect();
    assert_eq!(
        kinds,
        vec![LexTokenKind::Literal, LexTokenKind::Token, LexTokenKind::Literal]
    );

    let weather = tokens[1].as_token().unwrap();
    assert_eq!(weather.name, "Weather");
    assert_eq!(
        weather.input.as_ref().unwrap().to_string(),
        "rain, sun |chance=50"
    );
    assert_eq!(reconstruct(&tokens), "Spring{{Weather: rain, sun |chance=50}}day");
}

#[test]
fn test_parse_bits_matches_parse_str() {
    let raw = "{{Outer: {{Inner: a}} b}}";
    assert_eq!(
        parse_bits(tokenize_string(raw), false, false).unwrap(),
        parse_str(raw, false, false).unwrap()
    );
}

#[test]
fn test_hand_built_implied_brace_bits() {
    let bits: Vec<LexBit> = vec![
        MK_BIT!("Name", 0),
        MK_BIT!(":", 4),
        MK_BIT!(" value", 5),
    ];

    let tokens = parse_bits(bits, true, false).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].to_string(), "Name: value");
}

#[test]
fn test_split_token_aware_list() {
    assert_eq!(
        split_lexically("a, {{Random: b, c}}, d").unwrap(),
        vec!["a", "{{Random: b, c}}", "d"]
    );

    let keep_empty = SplitOptions {
        ignore_empty: false,
        ..SplitOptions::default()
    };
    assert_eq!(split_lexically("a,,b").unwrap(), vec!["a", "b"]);
    assert_eq!(
        split_lexically_with("a,,b", &keep_empty).unwrap(),
        vec!["a", "", "b"]
    );
}

#[test]
fn test_token_names_of_nested_value() {
    let tokens = parse_str("{{Lowercase: {{PlayerName}}}} and {{Season}}", false, false).unwrap();
    assert_eq!(
        collect_token_names(&tokens),
        vec!["Lowercase", "PlayerName", "Season"]
    );
}

#[test]
fn test_error_report_names_raw_input() {
    let raw = "{{Outer: {{Inner}}";
    let error = parse_str(raw, false, false).unwrap_err();

    assert!(error.is_format_violation());
    assert!(error.to_string().contains(raw));

    let rendered = render_error(&error, raw);
    assert!(rendered.contains("did you miss a closing `}}`?"));
    assert!(rendered.contains(raw));
}

#[test]
fn test_parsing_is_reentrant_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let raw = format!("{{{{Token{}: {{{{Nested: {}}}}}}}}}, tail", i, i);
                let tokens = parse_str(&raw, false, false).unwrap();
                collect_token_names(&tokens)
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let names = handle.join().unwrap();
        assert_eq!(names, vec![format!("Token{}", i), String::from("Nested")]);
    }
}
