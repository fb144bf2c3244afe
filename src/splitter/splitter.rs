use tracing::trace;

use crate::{
    config::LexerConfig,
    errors::errors::Error,
    lexer::lexer::might_contain_tokens,
    parser::{normalize::Normalization, parser::parse_raw, tokens::LexToken},
};

/// Options for `split_lexically_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions<'a> {
    pub delimiter: &'a str,
    pub ignore_empty: bool,
    pub trim: bool,
    /// Limits applied when the input has to be parsed.
    pub config: LexerConfig,
}

impl Default for SplitOptions<'_> {
    fn default() -> Self {
        SplitOptions {
            delimiter: ",",
            ignore_empty: true,
            trim: true,
            config: LexerConfig::default(),
        }
    }
}

/// Splits on `,` outside tokens, trimming segments and dropping empty ones.
pub fn split_lexically(input: &str) -> Result<Vec<String>, Error> {
    split_lexically_with(input, &SplitOptions::default())
}

/// Splits `input` on the delimiter only where it is not nested inside `{{...}}`.
pub fn split_lexically_with(input: &str, options: &SplitOptions) -> Result<Vec<String>, Error> {
    let delimiter = options.delimiter;

    let segments: Vec<String> = if delimiter.is_empty() || !input.contains(delimiter) {
        trace!(input, "no delimiter, single segment");
        vec![input.to_string()]
    } else if !might_contain_tokens(input) {
        trace!(input, "no tokens, plain split");
        input.split(delimiter).map(String::from).collect()
    } else {
        let tokens = parse_raw(input, false, false, Normalization::MergeOnly, options.config)?;
        split_tokens(&tokens, delimiter)
    };

    Ok(segments
        .into_iter()
        .map(|segment| {
            if options.trim {
                segment.trim().to_string()
            } else {
                segment
            }
        })
        .filter(|segment| !options.ignore_empty || !segment.is_empty())
        .collect())
}

fn split_tokens(tokens: &[LexToken], delimiter: &str) -> Vec<String> {
    let mut segments = vec![];
    let mut buffer = String::new();

    for token in tokens {
        match token {
            LexToken::Literal(text) if text.contains(delimiter) => {
                let mut parts = text.split(delimiter);
                if let Some(first) = parts.next() {
                    buffer.push_str(first);
                }
                for part in parts {
                    segments.push(std::mem::take(&mut buffer));
                    buffer.push_str(part);
                }
            }
            _ => buffer.push_str(&token.to_string()),
        }
    }

    segments.push(buffer);
    segments
}
