//! Tokens produced by the lexer.

mod kind;
mod list;

pub use kind::TokenKind;
pub use list::TokenList;

use crate::Span;

/// A lexed token: a kind over a span of the original text.
///
/// Tokens carry no text of their own; slice the source with
/// [`Token::text`] when the spelling is needed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The token's text within `source`.
    ///
    /// `source` must be the text the token was lexed from.
    #[inline]
    pub fn text(self, source: &str) -> &str {
        &source[self.span.to_range()]
    }
}
