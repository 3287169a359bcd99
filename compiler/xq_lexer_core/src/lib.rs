//! Restartable, stack-based lexer for XPath and XQuery.
//!
//! The lexer turns text into a stream of [`Token`]s whose spans cover the
//! input exactly. Nested constructs (strings, comments, pragmas, direct
//! element constructors, string constructors) are tracked on an explicit
//! mode stack, which is exposed between tokens as a [`LexerState`] integer.
//! Restarting at any token boundary with the state captured there produces
//! the same tokens as lexing straight through, which is what incremental
//! re-lexing builds on.
//!
//! Malformed input never fails: unknown characters and unterminated blocks
//! become ordinary token kinds for the parser to diagnose.
//!
//! # Modules
//!
//! - [`cursor`]: code-point reader with a single backtrack register
//! - [`char_class`]: code point to lexical class
//! - [`keywords`]: keyword spelling table
//! - [`mode`]: modes, the mode stack, and its integer encoding
//! - [`lexer`]: the engine and host contract

pub mod char_class;
pub mod cursor;
pub mod keywords;
pub mod lexer;
pub mod mode;
mod scanner;

pub use char_class::CharClass;
pub use cursor::Cursor;
pub use lexer::{tokenize, Dialect, Lexer, LexerOptions};
pub use mode::{InvalidState, LexerState, Mode, StateStack, MAX_ENCODED_FRAMES};
pub use xq_ir::{Span, Token, TokenKind, TokenList};
