//! Token types shared by the XPath/XQuery lexer, the parser and editor tooling.
//!
//! Both downstream consumers key exclusively off [`TokenKind`] identity, never
//! off token text, so the kind registry here is a stable interface.

mod span;
mod token;

pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
