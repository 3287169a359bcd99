//! Lexing for consumers of whole documents.
//!
//! [`lex`] tokenizes a source for a parser. [`LexedDocument`] also keeps the
//! resumption state of every token, so an editor can re-lex only the part of
//! a document an edit touched.

mod document;

pub use document::{EditSummary, LexedDocument};
pub use xq_ir::{Span, Token, TokenKind, TokenList};
pub use xq_lexer_core::{Dialect, LexerOptions, LexerState};

/// Lex a whole source from the default state.
///
/// # Panics
///
/// If `source` is 4 GiB or larger.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(bytes = source.len(), dialect = ?options.dialect)
)]
pub fn lex(source: &str, options: LexerOptions) -> TokenList {
    let tokens = xq_lexer_core::tokenize(source, options);
    tracing::debug!(tokens = tokens.len(), "lexed source");
    tokens
}
