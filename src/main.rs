use std::process;

use clap::{Parser as ClapParser, Subcommand};
use tracing::info;

use tokenlex::{
    config::{parse_max_depth, AppConfig, LogLevel},
    errors::errors::Error,
    lexer::lexer::tokenize_string,
    logging::init_logging,
    parser::parser::parse_str_with_config,
    render_error, split_lexically_with, LexToken, SplitOptions,
};

/// Inspect placeholder text like `{{Name: a, b |key=value}}`.
#[derive(ClapParser, Debug)]
#[command(name = "tokenlex", version, about)]
struct Args {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Maximum nesting depth of tokens inside token arguments.
    #[arg(long, global = true, value_parser = parse_max_depth)]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the lexical bits of the text.
    Bits { text: String },
    /// Print the parsed token tree.
    Parse {
        text: String,
        /// Parse the text as a single token without `{{ }}`.
        #[arg(long)]
        implied: bool,
        /// Trim whitespace at the start and end of the sequence.
        #[arg(long)]
        trim: bool,
    },
    /// Split the text on a delimiter outside of tokens.
    Split {
        text: String,
        #[arg(long, default_value = ",")]
        delimiter: String,
        /// Keep empty segments.
        #[arg(long)]
        keep_empty: bool,
        /// Do not trim segments.
        #[arg(long)]
        no_trim: bool,
    },
}

fn main() {
    let args = Args::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config.apply_overrides(args.log_level, args.max_depth),
        Err(e) => {
            init_logging(&AppConfig::default());
            tracing::error!(error = %e, "invalid configuration");
            process::exit(2);
        }
    };
    init_logging(&config);

    info!(version = env!("CARGO_PKG_VERSION"), "starting tokenlex");

    let (text, result) = run(&args.command, &config);
    match result {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(error) => {
            eprintln!("{}", render_error(&error, text));
            process::exit(1);
        }
    }
}

fn run<'a>(command: &'a Command, config: &AppConfig) -> (&'a str, Result<Vec<String>, Error>) {
    match command {
        Command::Bits { text } => (
            text.as_str(),
            Ok(tokenize_string(text).iter().map(|bit| bit.to_string()).collect()),
        ),
        Command::Parse {
            text,
            implied,
            trim,
        } => {
            let result = parse_str_with_config(text, *implied, *trim, config.lexer).map(|tokens| {
                let mut lines = vec![];
                describe_tokens(&tokens, 0, &mut lines);
                lines
            });
            (text.as_str(), result)
        }
        Command::Split {
            text,
            delimiter,
            keep_empty,
            no_trim,
        } => {
            let options = SplitOptions {
                delimiter: delimiter.as_str(),
                ignore_empty: !keep_empty,
                trim: !no_trim,
                config: config.lexer,
            };
            (text.as_str(), split_lexically_with(text, &options))
        }
    }
}

fn describe_tokens(tokens: &[LexToken], indent: usize, lines: &mut Vec<String>) {
    let pad = "  ".repeat(indent);

    for token in tokens {
        match token {
            LexToken::Literal(text) => lines.push(format!("{}Literal {:?}", pad, text)),
            LexToken::Token(call) => {
                let implied = if call.implied_braces { " (implied)" } else { "" };
                lines.push(format!("{}Token {}{}", pad, call.name, implied));
                if let Some(input) = &call.input {
                    lines.push(format!("{}  Input", pad));
                    describe_tokens(&input.parts, indent + 2, lines);
                }
            }
            LexToken::Input(input) => {
                lines.push(format!("{}Input", pad));
                describe_tokens(&input.parts, indent + 1, lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_depth_flag_rejects_what_env_rejects() {
        assert!(Args::try_parse_from(["tokenlex", "--max-depth", "-1", "bits", "x"]).is_err());
        assert!(Args::try_parse_from(["tokenlex", "--max-depth", "deep", "bits", "x"]).is_err());

        let args = Args::try_parse_from(["tokenlex", "--max-depth", "0", "bits", "x"]).unwrap();
        assert_eq!(args.max_depth, Some(0));
    }

    #[test]
    fn test_split_uses_configured_depth() {
        let args =
            Args::try_parse_from(["tokenlex", "split", "a, {{A: {{B}}}}", "--max-depth", "0"])
                .unwrap();
        let config = AppConfig::default().apply_overrides(args.log_level, args.max_depth);

        let (_, result) = run(&args.command, &config);
        let error = result.unwrap_err();
        assert_eq!(error.get_error_name(), "InvalidInput");
        assert_eq!(
            error.root().kind(),
            &tokenlex::errors::errors::ErrorImpl::NestingTooDeep { max_depth: 0 }
        );
    }
}
