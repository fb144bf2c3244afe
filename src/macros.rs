//! Utility macros for the token lexer.
//!
//! - `MK_BIT!` - Creates a LexBit instance, classifying its text when no kind is given
//!
//! These macros reduce boilerplate in the tokenizer and in tests that feed
//! hand-built bit queues to the parser.

/// Creates a LexBit instance.
///
/// # Arguments
///
/// * `$kind` - The LexBitKind (optional; classified from `$text` when omitted)
/// * `$text` - The bit's raw text
/// * `$position` - Byte offset of the text in the input
///
/// # Example
///
/// ```ignore
/// let bit = MK_BIT!("{{", 0);
/// let bit = MK_BIT!(LexBitKind::Literal, "Name", 2);
/// ```
#[macro_export]
macro_rules! MK_BIT {
    ($kind:expr, $text:expr, $position:expr) => {
        $crate::lexer::bits::LexBit::new($kind, $text, $crate::Position($position))
    };
    ($text:expr, $position:expr) => {{
        let text: &str = $text;
        $crate::lexer::bits::LexBit::new(
            $crate::lexer::bits::LexBitKind::classify(text),
            text,
            $crate::Position($position),
        )
    }};
}
