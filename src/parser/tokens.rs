use std::fmt::Display;

use crate::lexer::bits::{NAMED_SEPARATOR, POSITIONAL_SEPARATOR};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexTokenKind {
    Literal,
    Token,
    Input,
}

impl Display for LexTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A parsed unit of placeholder text.
///
/// `Display` reconstructs the raw text the token represents, after
/// normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexToken {
    /// Plain text outside any token.
    Literal(String),
    /// A placeholder invocation like `{{Name: args}}`.
    Token(TokenCall),
    /// The argument content of a token.
    Input(InputArgs),
}

impl LexToken {
    pub fn literal(text: impl Into<String>) -> Self {
        LexToken::Literal(text.into())
    }

    pub fn kind(&self) -> LexTokenKind {
        match self {
            LexToken::Literal(_) => LexTokenKind::Literal,
            LexToken::Token(_) => LexTokenKind::Token,
            LexToken::Input(_) => LexTokenKind::Input,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            LexToken::Literal(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_token(&self) -> Option<&TokenCall> {
        match self {
            LexToken::Token(token) => Some(token),
            _ => None,
        }
    }
}

impl Display for LexToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexToken::Literal(text) => write!(f, "{}", text),
            LexToken::Token(token) => write!(f, "{}", token),
            LexToken::Input(input) => write!(f, "{}", input),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCall {
    /// Trimmed token name.
    pub name: String,
    pub input: Option<InputArgs>,
    /// Set when the token was parsed without surrounding `{{ }}` markers.
    pub implied_braces: bool,
}

impl TokenCall {
    pub fn new(name: &str, input: Option<InputArgs>, implied_braces: bool) -> Self {
        TokenCall {
            name: name.trim().to_string(),
            input,
            implied_braces,
        }
    }

    pub fn has_input_args(&self) -> bool {
        self.input.as_ref().is_some_and(|input| !input.parts.is_empty())
    }

    fn fmt_input(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(input) = &self.input else {
            return Ok(());
        };

        let raw = input.to_string();
        if raw.starts_with(NAMED_SEPARATOR) {
            write!(f, " {}", raw)
        } else if raw.is_empty() {
            write!(f, "{}", POSITIONAL_SEPARATOR)
        } else {
            write!(f, "{} {}", POSITIONAL_SEPARATOR, raw)
        }
    }
}

impl Display for TokenCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.implied_braces {
            write!(f, "{}", self.name)?;
            return self.fmt_input(f);
        }

        write!(f, "{{{{{}", self.name)?;
        self.fmt_input(f)?;
        write!(f, "}}}}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputArgs {
    pub parts: Vec<LexToken>,
}

impl InputArgs {
    pub fn new(parts: Vec<LexToken>) -> Self {
        InputArgs { parts }
    }

    pub fn parts(&self) -> &[LexToken] {
        &self.parts
    }
}

impl Display for InputArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", reconstruct(&self.parts))
    }
}

/// Joins the raw-text representation of each token in order.
pub fn reconstruct(tokens: &[LexToken]) -> String {
    tokens.iter().map(|token| token.to_string()).collect()
}

/// Every token name in document order, including tokens nested in arguments.
pub fn collect_token_names(tokens: &[LexToken]) -> Vec<&str> {
    let mut names = vec![];
    for token in tokens {
        match token {
            LexToken::Literal(_) => {}
            LexToken::Token(call) => {
                names.push(call.name.as_str());
                if let Some(input) = &call.input {
                    names.extend(collect_token_names(&input.parts));
                }
            }
            LexToken::Input(input) => names.extend(collect_token_names(&input.parts)),
        }
    }
    names
}
