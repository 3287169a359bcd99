//! Comments and pragmas.

use xq_ir::TokenKind;

use super::{is_xml_whitespace, Scanner, Step};
use crate::char_class::is_name_start;
use crate::cursor::EOB;
use crate::mode::Mode;

impl Scanner<'_> {
    /// Body or end tag of a `(: ... :)` comment.
    ///
    /// Comments nest by whole two-character tags only. The body is a single
    /// token running up to the `:)` that closes the comment's own `(:`, so
    /// no nesting depth ever needs to be carried in the lexer state.
    pub(super) fn comment(&mut self, start: u32) -> Step {
        if self.cursor.eat(":)") {
            self.stack.pop();
            return Step::Token(TokenKind::CommentEndTag);
        }
        let mut depth = 0u32;
        loop {
            match self.cursor.skip_to_any(b"(:") {
                EOB => return self.unterminated(start, TokenKind::Comment),
                '(' => {
                    self.cursor.advance();
                    if self.cursor.current() == ':' {
                        self.cursor.advance();
                        depth += 1;
                    }
                }
                _ => {
                    self.cursor.save();
                    self.cursor.advance();
                    if self.cursor.current() == ')' {
                        if depth == 0 {
                            self.cursor.restore();
                            return Step::Token(TokenKind::Comment);
                        }
                        self.cursor.advance();
                        depth -= 1;
                    }
                }
            }
        }
    }

    // ─── Pragmas ────────────────────────────────────────────────────

    /// Optional whitespace between `(#` and the pragma name.
    pub(super) fn pragma_pre_qname(&mut self) -> Step {
        self.stack.replace(Mode::PragmaQName);
        if is_xml_whitespace(self.cursor.current()) && !self.cursor.is_eof() {
            self.whitespace(TokenKind::Whitespace)
        } else {
            Step::Rescan
        }
    }

    /// The pragma name: `NCName`, `prefix:local`, or `Q{uri}local`.
    pub(super) fn pragma_qname(&mut self) -> Step {
        let c = self.cursor.current();
        if c == 'Q' && self.cursor.peek() == '{' {
            self.stack.push(Mode::BracedUriLiteral);
            return self.single(2, TokenKind::BracedUriLiteralStart);
        }
        if is_name_start(c) {
            self.ncname();
            self.push_local_name_if_prefix();
            return Step::Token(TokenKind::NcName);
        }
        self.stack.replace(Mode::PragmaContents);
        Step::Rescan
    }

    /// Whitespace, contents, or the `#)` end tag of a pragma.
    pub(super) fn pragma_contents(&mut self, start: u32) -> Step {
        if self.cursor.eat("#)") {
            self.stack.pop();
            return Step::Token(TokenKind::PragmaEnd);
        }
        if self.cursor.is_eof() {
            return self.unterminated(start, TokenKind::PragmaContents);
        }
        if is_xml_whitespace(self.cursor.current()) {
            return self.whitespace(TokenKind::Whitespace);
        }
        loop {
            self.cursor.advance();
            if self.cursor.skip_to_any(b"#") == EOB {
                return self.unterminated(start, TokenKind::PragmaContents);
            }
            if self.cursor.peek() == ')' {
                return Step::Token(TokenKind::PragmaContents);
            }
        }
    }
}
