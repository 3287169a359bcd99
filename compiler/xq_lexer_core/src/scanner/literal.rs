//! String literals, braced URI literals and string constructors.

use xq_ir::TokenKind;

use super::{Scanner, Step};
use crate::char_class::is_name_start;
use crate::cursor::EOB;
use crate::mode::Mode;

/// Delimiter of a quoted literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Quote {
    /// `"..."`
    Quotation,
    /// `'...'`
    Apostrophe,
    /// `Q{...}`
    BraceUri,
}

impl Quote {
    fn delimiter(self) -> char {
        match self {
            Quote::Quotation => '"',
            Quote::Apostrophe => '\'',
            Quote::BraceUri => '}',
        }
    }

    /// Bytes that end a run of contents.
    fn stops(self, references: bool) -> &'static [u8] {
        match (self, references) {
            (Quote::Quotation, true) => b"\"&",
            (Quote::Quotation, false) => b"\"",
            (Quote::Apostrophe, true) => b"'&",
            (Quote::Apostrophe, false) => b"'",
            (Quote::BraceUri, true) => b"}{&",
            (Quote::BraceUri, false) => b"}{",
        }
    }
}

impl Scanner<'_> {
    /// Contents of a quoted literal.
    ///
    /// A doubled quote is an escaped character; braced URI literals have no
    /// escapes and may not contain `{`. In XQuery, `&` starts a reference.
    /// An unterminated literal simply runs to the end of the range.
    pub(super) fn quoted(&mut self, start: u32, quote: Quote) -> Step {
        let delimiter = quote.delimiter();
        let references = self.is_xquery();
        match self.cursor.current() {
            EOB if self.cursor.is_eof() => Step::End,
            c if c == delimiter => {
                if quote != Quote::BraceUri && self.cursor.peek() == delimiter {
                    return self.single(2, TokenKind::EscapedCharacter);
                }
                self.cursor.advance();
                if quote == Quote::BraceUri {
                    if is_name_start(self.cursor.current()) {
                        self.stack.replace(Mode::QNameLocalName);
                    } else {
                        self.stack.pop();
                    }
                    Step::Token(TokenKind::BracedUriLiteralEnd)
                } else {
                    self.stack.pop();
                    Step::Token(TokenKind::StringLiteralEnd)
                }
            }
            '{' if quote == Quote::BraceUri => self.bad_character(),
            '&' if references => self.reference(false),
            _ => {
                self.cursor.advance();
                self.cursor.skip_to_any(quote.stops(references));
                debug_assert!(self.cursor.pos() > start);
                Step::Token(TokenKind::StringLiteralContents)
            }
        }
    }

    /// Text of a string constructor between ``` ``[ ``` and ``` ]`` ```,
    /// broken up by `` `{ ... }` `` interpolations.
    pub(super) fn string_constructor_contents(&mut self, start: u32) -> Step {
        if self.cursor.eat("]``") {
            self.stack.pop();
            return Step::Token(TokenKind::StringConstructorEnd);
        }
        if self.cursor.eat("`{") {
            self.stack.push(Mode::StringInterpolation);
            return Step::Token(TokenKind::StringInterpolationOpen);
        }
        if self.cursor.is_eof() {
            return self.unterminated(start, TokenKind::StringConstructorContents);
        }
        loop {
            self.cursor.advance();
            if self.cursor.skip_to_any(b"]`") == EOB && self.cursor.is_eof() {
                return self.unterminated(start, TokenKind::StringConstructorContents);
            }
            if self.cursor.starts_with("]``") || self.cursor.starts_with("`{") {
                return Step::Token(TokenKind::StringConstructorContents);
            }
        }
    }
}
