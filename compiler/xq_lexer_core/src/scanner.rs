//! Mode scanners.
//!
//! [`Scanner::next_token`] looks at the top of the [`StateStack`] and hands
//! the cursor to the scanner for that mode. Each scanner consumes exactly one
//! token and pushes, pops, or replaces frames as constructs open and close.
//!
//! # Design
//!
//! A scanner returns a [`Step`] rather than a token directly. `Rescan` is
//! for phase changes that consume nothing (a pragma's name phase giving way
//! to its contents, for example): the mode is switched and the loop
//! dispatches again at the same position. Every `Rescan` moves to a mode that
//! either consumes input or ends, so the loop always terminates.
//!
//! Malformed input never fails. Unknown characters become single-code-point
//! `BadCharacter` tokens, and unterminated blocks end with a zero-length
//! `UnexpectedEndOfBlock` token.

mod comment;
mod expr;
mod literal;
mod markup;
mod reference;

use xq_ir::{Span, Token, TokenKind};

use crate::cursor::Cursor;
use crate::lexer::Dialect;
use crate::mode::{LexerState, Mode, StateStack};

/// Outcome of one dispatch.
enum Step {
    /// A token ending at the cursor position.
    Token(TokenKind),
    /// The mode changed without consuming input; dispatch again.
    Rescan,
    /// Nothing left in the range for this mode.
    End,
}

/// Mode-driven scanner over one cursor range.
#[derive(Clone, Debug)]
pub(crate) struct Scanner<'a> {
    cursor: Cursor<'a>,
    stack: StateStack,
    dialect: Dialect,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(cursor: Cursor<'a>, stack: StateStack, dialect: Dialect) -> Self {
        Self {
            cursor,
            stack,
            dialect,
        }
    }

    /// Produce the next token, or `None` at the end of the range.
    ///
    /// Calls after the end keep returning `None`.
    pub(crate) fn next_token(&mut self) -> Option<Token> {
        loop {
            let start = self.cursor.pos();
            let step = match self.stack.top() {
                Mode::Default | Mode::StringInterpolation => self.expression(start),
                Mode::QNameLocalName => self.qname_local_name(),
                Mode::DoubleExponent => self.double_exponent(),
                Mode::UnexpectedEndOfBlock => {
                    self.stack.pop();
                    Step::Token(TokenKind::UnexpectedEndOfBlock)
                }
                Mode::StringLiteralQuote => self.quoted(start, literal::Quote::Quotation),
                Mode::StringLiteralApostrophe => self.quoted(start, literal::Quote::Apostrophe),
                Mode::BracedUriLiteral => self.quoted(start, literal::Quote::BraceUri),
                Mode::Comment => self.comment(start),
                Mode::PragmaPreQName => self.pragma_pre_qname(),
                Mode::PragmaQName => self.pragma_qname(),
                Mode::PragmaContents => self.pragma_contents(start),
                Mode::ElementTagOpen => self.element_tag_open(),
                Mode::AttributeList => self.attribute_list(),
                Mode::ElementTagClose => self.element_tag_close(),
                Mode::AttributeValueQuote => self.attribute_value(start, '"'),
                Mode::AttributeValueApostrophe => self.attribute_value(start, '\''),
                Mode::ElementContent => self.element_content(start),
                Mode::XmlComment => self.delimited_contents(
                    start,
                    "-->",
                    TokenKind::XmlComment,
                    TokenKind::XmlCommentEndTag,
                ),
                Mode::CdataSection => self.delimited_contents(
                    start,
                    "]]>",
                    TokenKind::CdataSection,
                    TokenKind::CdataSectionEndTag,
                ),
                Mode::ProcessingInstruction => self.processing_instruction(start),
                Mode::ProcessingInstructionContents => self.delimited_contents(
                    start,
                    "?>",
                    TokenKind::ProcessingInstructionContents,
                    TokenKind::ProcessingInstructionEnd,
                ),
                Mode::StringConstructorContents => self.string_constructor_contents(start),
            };
            match step {
                Step::Token(kind) => {
                    return Some(Token::new(kind, Span::new(start, self.cursor.pos())));
                }
                Step::Rescan => {}
                Step::End => return None,
            }
        }
    }

    /// The encoded stack after the last token.
    #[inline]
    pub(crate) fn state(&self) -> LexerState {
        self.stack.encode()
    }

    #[inline]
    pub(crate) fn stack(&self) -> &StateStack {
        &self.stack
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    pub(crate) fn lookahead_end(&self) -> u32 {
        self.cursor.lookahead_end()
    }

    #[inline]
    fn is_xquery(&self) -> bool {
        self.dialect == Dialect::XQuery
    }

    // ─── Shared helpers ─────────────────────────────────────────────

    /// Consume `n` code points and emit `kind`.
    #[inline]
    fn single(&mut self, n: u32, kind: TokenKind) -> Step {
        self.cursor.advance_n(n);
        Step::Token(kind)
    }

    /// Consume one code point as a `BadCharacter` token.
    #[inline]
    fn bad_character(&mut self) -> Step {
        self.single(1, TokenKind::BadCharacter)
    }

    /// Consume a run of XML whitespace as `kind`.
    #[inline]
    fn whitespace(&mut self, kind: TokenKind) -> Step {
        self.cursor.eat_while(is_xml_whitespace);
        Step::Token(kind)
    }

    /// Consume an `NCName` starting at the current name-start character.
    #[inline]
    fn ncname(&mut self) {
        self.cursor.advance();
        self.cursor.eat_while(crate::char_class::is_name_char);
    }

    /// A block reached the end of the range before its end tag.
    ///
    /// If the block has contents since `start`, they are emitted now and the
    /// frame becomes `UnexpectedEndOfBlock`, so the sentinel follows as the
    /// next token. Otherwise the frame is popped and the empty sentinel is
    /// emitted directly.
    fn unterminated(&mut self, start: u32, contents: TokenKind) -> Step {
        if self.cursor.pos() > start {
            self.stack.replace(Mode::UnexpectedEndOfBlock);
            Step::Token(contents)
        } else {
            self.stack.pop();
            Step::Token(TokenKind::UnexpectedEndOfBlock)
        }
    }
}

#[inline]
fn is_xml_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}
