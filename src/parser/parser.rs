//! Recursive-descent parser turning lexical bits into a token tree.
//!
//! The parser consumes a queue of bits front to back. Braced tokens are
//! extracted with `extract_token`; their arguments are collected by
//! `extract_input_arguments`, which tracks nested `{{ }}` depth and parses
//! the collected bits with a child parser. Each call owns its queue, so
//! parsing is re-entrant and safe to run from several threads at once.

use std::collections::VecDeque;

use tracing::debug;

use crate::{
    config::LexerConfig,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        bits::{LexBit, LexBitKind},
        lexer::tokenize_string,
    },
    Position,
};

use super::{
    normalize::{normalize, Normalization},
    tokens::{InputArgs, LexToken, TokenCall},
};

/// The parsing state for one bit queue.
pub struct Parser {
    /// Bits not yet consumed
    bits: VecDeque<LexBit>,
    /// Offset reported for errors raised once the queue is empty
    end: Position,
    /// How many token arguments enclose the bits of this parser
    depth: usize,
    config: LexerConfig,
}

impl Parser {
    pub fn new(bits: impl IntoIterator<Item = LexBit>) -> Self {
        Self::with_config(bits, LexerConfig::default())
    }

    pub fn with_config(bits: impl IntoIterator<Item = LexBit>, config: LexerConfig) -> Self {
        let bits: VecDeque<LexBit> = bits.into_iter().collect();
        let end = bits.back().map_or(Position(0), LexBit::end);

        Parser {
            bits,
            end,
            depth: 0,
            config,
        }
    }

    /// Creates the parser for a token's argument bits, one level deeper.
    fn nested(&self, bits: Vec<LexBit>, end: Position) -> Parser {
        Parser {
            bits: bits.into(),
            end,
            depth: self.depth + 1,
            config: self.config,
        }
    }

    /// Returns the current bit without consuming it.
    pub fn current_bit(&self) -> Option<&LexBit> {
        self.bits.front()
    }

    pub fn current_bit_kind(&self) -> Option<LexBitKind> {
        self.bits.front().map(|bit| bit.kind)
    }

    /// Consumes and returns the current bit.
    pub fn advance(&mut self) -> Option<LexBit> {
        self.bits.pop_front()
    }

    pub fn has_bits(&self) -> bool {
        !self.bits.is_empty()
    }

    /// Offset of the current bit, or the end of input once the queue is empty.
    pub fn get_position(&self) -> Position {
        self.bits.front().map_or(self.end, |bit| bit.position)
    }

    /// Consumes the current bit if it has the expected kind.
    ///
    /// On mismatch the bit is left in the queue and an `UnexpectedBit` error
    /// naming both kinds is returned.
    pub fn expect(&mut self, expected_kind: LexBitKind) -> Result<LexBit, Error> {
        match self.bits.pop_front() {
            Some(bit) if bit.kind == expected_kind => Ok(bit),
            Some(bit) => {
                let error = Error::new(
                    ErrorImpl::UnexpectedBit {
                        expected: expected_kind,
                        found: Some(bit.kind),
                        text: bit.text.clone(),
                    },
                    bit.position,
                );
                self.bits.push_front(bit);
                Err(error)
            }
            None => Err(Error::new(
                ErrorImpl::UnexpectedBit {
                    expected: expected_kind,
                    found: None,
                    text: String::new(),
                },
                self.end,
            )),
        }
    }

    /// Parses the whole queue into a normalized token sequence.
    ///
    /// With `implied_braces` the queue must hold exactly one token without
    /// its `{{ }}` markers. Otherwise it may hold any mix of literal text and
    /// braced tokens; separators outside a token are literal text.
    pub fn parse(&mut self, implied_braces: bool, trim: bool) -> Result<Vec<LexToken>, Error> {
        self.parse_with(implied_braces, trim, Normalization::Full)
    }

    pub(crate) fn parse_with(
        &mut self,
        implied_braces: bool,
        trim: bool,
        mode: Normalization,
    ) -> Result<Vec<LexToken>, Error> {
        let mut tokens = vec![];

        if implied_braces {
            tokens.push(LexToken::Token(self.extract_token(true)?));

            if let Some(bit) = self.current_bit() {
                return Err(Error::new(
                    ErrorImpl::TrailingContent {
                        found: bit.kind,
                        text: bit.text.clone(),
                    },
                    bit.position,
                ));
            }
        } else {
            while let Some(kind) = self.current_bit_kind() {
                match kind {
                    LexBitKind::StartToken => {
                        tokens.push(LexToken::Token(self.extract_token(false)?));
                    }
                    LexBitKind::Literal
                    | LexBitKind::PositionalInputArgSeparator
                    | LexBitKind::NamedInputArgSeparator => {
                        if let Some(bit) = self.advance() {
                            tokens.push(LexToken::Literal(bit.text));
                        }
                    }
                    LexBitKind::EndToken => {
                        let position = self.get_position();
                        let text = self.advance().map(|bit| bit.text).unwrap_or_default();
                        return Err(Error::new(
                            ErrorImpl::UnexpectedBitType { found: kind, text },
                            position,
                        ));
                    }
                }
            }
        }

        Ok(normalize(tokens, mode, trim))
    }

    /// Consumes exactly the bits of one token.
    ///
    /// Without implied braces the queue must start at `{{` and the token must
    /// close with `}}`. The first separator after the name decides the
    /// argument form: `:` is consumed as a delimiter, while `|` stays in the
    /// arguments so `{{Name |key=value}}` skips positional arguments.
    ///
    /// A name that is blank after trimming is rejected, as is a token nested
    /// in arguments deeper than `LexerConfig::max_depth`.
    pub fn extract_token(&mut self, implied_braces: bool) -> Result<TokenCall, Error> {
        if self.depth > self.config.max_depth {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    max_depth: self.config.max_depth,
                },
                self.get_position(),
            ));
        }

        if !implied_braces {
            self.expect(LexBitKind::StartToken)?;
        }

        let name = self.expect(LexBitKind::Literal)?;
        if name.text.trim().is_empty() {
            return Err(Error::new(
                ErrorImpl::EmptyTokenName { text: name.text },
                name.position,
            ));
        }

        let input = match self.current_bit_kind() {
            Some(LexBitKind::PositionalInputArgSeparator) => {
                self.advance();
                Some(self.extract_input_arguments()?)
            }
            Some(LexBitKind::NamedInputArgSeparator) => Some(self.extract_input_arguments()?),
            _ => None,
        };

        if !implied_braces {
            self.expect(LexBitKind::EndToken)?;
        }

        Ok(TokenCall::new(&name.text, input, implied_braces))
    }

    /// Consumes bits up to, but not including, the current token's `}}`.
    ///
    /// Nested `{{ }}` pairs are kept in the arguments. The collected bits are
    /// parsed as trimmed, non-implied token text.
    pub fn extract_input_arguments(&mut self) -> Result<InputArgs, Error> {
        let mut buffer = vec![];
        let mut depth: usize = 0;

        loop {
            match self.current_bit_kind() {
                None => break,
                Some(LexBitKind::EndToken) if depth == 0 => break,
                Some(LexBitKind::EndToken) => depth -= 1,
                Some(LexBitKind::StartToken) => depth += 1,
                Some(_) => {}
            }
            buffer.extend(self.advance());
        }

        let mut nested = self.nested(buffer, self.get_position());
        Ok(InputArgs::new(nested.parse(false, true)?))
    }
}

/// Parses pre-tokenized bits.
pub fn parse_bits(
    bits: impl IntoIterator<Item = LexBit>,
    implied_braces: bool,
    trim: bool,
) -> Result<Vec<LexToken>, Error> {
    Parser::new(bits).parse(implied_braces, trim)
}

/// Tokenizes and parses raw text. Failures are wrapped with the raw input.
pub fn parse_str(raw: &str, implied_braces: bool, trim: bool) -> Result<Vec<LexToken>, Error> {
    parse_str_with_config(raw, implied_braces, trim, LexerConfig::default())
}

pub fn parse_str_with_config(
    raw: &str,
    implied_braces: bool,
    trim: bool,
    config: LexerConfig,
) -> Result<Vec<LexToken>, Error> {
    parse_raw(raw, implied_braces, trim, Normalization::Full, config)
}

pub(crate) fn parse_raw(
    raw: &str,
    implied_braces: bool,
    trim: bool,
    mode: Normalization,
    config: LexerConfig,
) -> Result<Vec<LexToken>, Error> {
    let mut parser = Parser::with_config(tokenize_string(raw), config);
    parser.end = Position(raw.len());

    match parser.parse_with(implied_braces, trim, mode) {
        Ok(tokens) => {
            debug!(count = tokens.len(), "parsed token sequence");
            Ok(tokens)
        }
        Err(error) => {
            debug!(raw, error = %error, "failed parsing raw input");
            Err(Error::wrap_input(raw, error))
        }
    }
}
