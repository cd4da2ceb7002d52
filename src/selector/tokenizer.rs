//! logos-based selector tokenizer.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins
//! 2. For equal length matches, earlier-defined variants win
//!
//! `.carousel` must lex as one [`Token::Class`] rather than punctuation plus
//! an identifier, so the compound patterns are defined before the bare ones.

use logos::Logos;

use super::parser::SelectorError;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // ── Compound tokens (defined first) ──────────────────────────────

    /// Class selector: `.carousel`, `.tab-button`.
    #[regex(r"\.[a-zA-Z_][a-zA-Z0-9_-]*")]
    Class,

    /// Id selector: `#hero`, `#callback-form`.
    #[regex(r"#[a-zA-Z_][a-zA-Z0-9_-]*")]
    Id,

    /// Element type name: `Section`, `Button`, `Img`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Type,

    // ── Punctuation ──────────────────────────────────────────────────

    /// `*` — matches any element type.
    #[token("*")]
    Star,

    /// `,` — separates selectors in a list.
    #[token(",")]
    Comma,
}

/// Tokenize a selector string into `(Token, text)` pairs.
///
/// Unlike a forgiving lexer, any unrecognized input is a hard
/// [`SelectorError::InvalidToken`]: a typo in a hook selector should fail
/// loudly rather than silently match the wrong nodes.
pub fn tokenize(input: &str) -> Result<Vec<(Token, String)>, SelectorError> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok((token, input[span].to_string())),
            Err(()) => Err(SelectorError::InvalidToken(input[span].to_string())),
        })
        .collect()
}
