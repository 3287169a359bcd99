//! The lexer engine and its host contract.
//!
//! A host (parser, highlighter, incremental re-lexer) drives the lexer one
//! token at a time:
//!
//! ```
//! use xq_lexer_core::{Lexer, LexerOptions, LexerState};
//! use xq_ir::TokenKind;
//!
//! let text = "1e";
//! let mut lexer = Lexer::new(LexerOptions::default());
//! lexer.start(text, 0, 2, LexerState::DEFAULT);
//!
//! assert_eq!(lexer.advance().map(|t| t.kind), Some(TokenKind::IntegerLiteral));
//! let resume_at = lexer.token_end();
//! let state = lexer.state();
//!
//! // Restarting at that boundary with that state continues identically.
//! let mut resumed = Lexer::new(LexerOptions::default());
//! resumed.start(text, resume_at, 2, state);
//! assert_eq!(
//!     resumed.advance().map(|t| t.kind),
//!     Some(TokenKind::PartialDoubleLiteralExponent)
//! );
//! ```

use xq_ir::{Token, TokenKind, TokenList};

use crate::cursor::Cursor;
use crate::mode::{InvalidState, LexerState, StateStack};
use crate::scanner::Scanner;

/// Which member of the language family to lex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Expressions only: no direct constructors, pragmas, string
    /// constructors, or references inside string literals.
    XPath,
    /// The full language, including direct constructors.
    #[default]
    XQuery,
}

/// Engine configuration.
///
/// Options are not part of the [`LexerState`]: a lexer resuming from a
/// state must use the options it was produced with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LexerOptions {
    pub dialect: Dialect,
}

impl LexerOptions {
    pub fn xpath() -> Self {
        LexerOptions {
            dialect: Dialect::XPath,
        }
    }

    pub fn xquery() -> Self {
        LexerOptions {
            dialect: Dialect::XQuery,
        }
    }
}

/// Restartable lexer over a range of a text buffer.
///
/// Independent instances share nothing and may run on separate threads;
/// one instance is driven sequentially.
#[derive(Clone, Debug)]
pub struct Lexer<'a> {
    options: LexerOptions,
    scanner: Scanner<'a>,
    /// The token returned by the last `advance()`.
    token: Option<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer positioned over empty text.
    pub fn new(options: LexerOptions) -> Self {
        Lexer {
            options,
            scanner: Scanner::new(Cursor::new("", 0, 0), StateStack::new(), options.dialect),
            token: None,
        }
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Begin lexing `text[range_start..range_end]` in `initial_state`.
    ///
    /// # Panics
    ///
    /// If `initial_state` was not produced by [`Lexer::state`], or the range
    /// is out of bounds or splits a character. These are host bugs, not
    /// input errors.
    pub fn start(
        &mut self,
        text: &'a str,
        range_start: u32,
        range_end: u32,
        initial_state: LexerState,
    ) {
        if let Err(err) = self.try_start(text, range_start, range_end, initial_state) {
            panic!("{err}");
        }
    }

    /// Like [`Lexer::start`], but reports an invalid state instead of
    /// panicking. The lexer is unchanged on error.
    pub fn try_start(
        &mut self,
        text: &'a str,
        range_start: u32,
        range_end: u32,
        initial_state: LexerState,
    ) -> Result<(), InvalidState> {
        let stack = initial_state.decode()?;
        let cursor = Cursor::new(text, range_start, range_end);
        self.scanner = Scanner::new(cursor, stack, self.options.dialect);
        self.token = None;
        Ok(())
    }

    /// Lex the next token. Returns `None` at the end of the range, and keeps
    /// returning `None` afterwards.
    pub fn advance(&mut self) -> Option<Token> {
        self.token = self.scanner.next_token();
        self.token
    }

    /// The token returned by the last `advance()`.
    #[inline]
    pub fn token(&self) -> Option<Token> {
        self.token
    }

    #[inline]
    pub fn token_kind(&self) -> Option<TokenKind> {
        self.token.map(|token| token.kind)
    }

    /// Start of the current token, or the cursor position when there is
    /// none (before the first `advance()` or after the end).
    #[inline]
    pub fn token_start(&self) -> u32 {
        self.token.map_or(self.scanner.pos(), |token| token.span.start)
    }

    /// End of the current token, or the cursor position when there is none.
    #[inline]
    pub fn token_end(&self) -> u32 {
        self.token.map_or(self.scanner.pos(), |token| token.span.end)
    }

    /// Encoded stack after the current token; a valid `initial_state` for
    /// restarting at [`Lexer::token_end`].
    ///
    /// While more than [`MAX_ENCODED_FRAMES`](crate::MAX_ENCODED_FRAMES)
    /// constructs are open this is [`LexerState::OVERFLOW`], which
    /// [`Lexer::try_start`] rejects; the host must resume from an earlier
    /// boundary instead.
    #[inline]
    pub fn state(&self) -> LexerState {
        self.scanner.state()
    }

    /// Exclusive bound on the text every token so far was decided from,
    /// lookahead included. An edit at or past this offset cannot change
    /// them. The bound may lie past the end of the range.
    #[inline]
    pub fn lookahead_end(&self) -> u32 {
        self.scanner.lookahead_end()
    }

    /// The live stack, at any depth.
    #[inline]
    pub fn stack(&self) -> &StateStack {
        self.scanner.stack()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.advance()
    }
}

/// Lex a whole document from the default state.
///
/// # Panics
///
/// If `source` is 4 GiB or larger.
pub fn tokenize(source: &str, options: LexerOptions) -> TokenList {
    let end = u32::try_from(source.len())
        .unwrap_or_else(|_| panic!("source of {} bytes exceeds u32 offsets", source.len()));
    let mut lexer = Lexer::new(options);
    lexer.start(source, 0, end, LexerState::DEFAULT);
    lexer.collect()
}

#[cfg(test)]
mod tests;
