//! Expression text: the `Default` and `StringInterpolation` modes, plus the
//! transient modes that follow a name prefix or a number.

use xq_ir::TokenKind;

use super::{Scanner, Step};
use crate::char_class::{is_name_start, CharClass};
use crate::keywords;
use crate::mode::Mode;

impl Scanner<'_> {
    /// Dispatch on the class of the current code point.
    pub(super) fn expression(&mut self, start: u32) -> Step {
        match self.cursor.class() {
            CharClass::EndOfBuffer => Step::End,
            CharClass::Whitespace => self.whitespace(TokenKind::Whitespace),
            CharClass::NameStartChar => self.name(),
            CharClass::Digit => self.number(start),
            CharClass::Dot => self.dot(start),
            CharClass::QuotationMark => self.string_start(Mode::StringLiteralQuote),
            CharClass::Apostrophe => self.string_start(Mode::StringLiteralApostrophe),
            CharClass::ParenthesisOpen => self.parenthesis_open(),
            CharClass::ParenthesisClose => self.single(1, TokenKind::ParenthesisClose),
            CharClass::NumberSign => self.number_sign(),
            CharClass::Colon => self.colon(),
            CharClass::ExclamationMark => self.pair('=', TokenKind::NotEqual, TokenKind::MapOperator),
            CharClass::EqualsSign => self.pair('>', TokenKind::Arrow, TokenKind::Equal),
            CharClass::HyphenMinus => self.pair('>', TokenKind::ThinArrow, TokenKind::Minus),
            CharClass::VerticalLine => self.pair('|', TokenKind::Concatenation, TokenKind::Union),
            CharClass::Solidus => self.pair(
                '/',
                TokenKind::AllDescendantsPath,
                TokenKind::DirectDescendantsPath,
            ),
            CharClass::GreaterThan => self.greater_than(),
            CharClass::LessThan => self.less_than(),
            CharClass::Asterisk => self.single(1, TokenKind::Star),
            CharClass::PlusSign => self.single(1, TokenKind::Plus),
            CharClass::Comma => self.single(1, TokenKind::Comma),
            CharClass::Semicolon => self.single(1, TokenKind::Separator),
            CharClass::DollarSign => self.single(1, TokenKind::VariableIndicator),
            CharClass::PercentSign => self.single(1, TokenKind::AnnotationIndicator),
            CharClass::CommercialAt => self.single(1, TokenKind::AttributeSelector),
            CharClass::SquareBracketOpen => self.single(1, TokenKind::SquareOpen),
            CharClass::SquareBracketClose => self.single(1, TokenKind::SquareClose),
            CharClass::QuestionMark => self.single(1, TokenKind::Optional),
            CharClass::CurlyBracketOpen => {
                self.stack.push(Mode::Default);
                self.single(1, TokenKind::BlockOpen)
            }
            CharClass::CurlyBracketClose => self.block_close(),
            CharClass::GraveAccent => self.grave_accent(),
            CharClass::NameChar | CharClass::Ampersand | CharClass::Other => self.bad_character(),
        }
    }

    // ─── Names ──────────────────────────────────────────────────────

    /// `Q{` opens a braced URI literal; anything else is an `NCName`,
    /// reclassified as a keyword when its spelling is one.
    fn name(&mut self) -> Step {
        if self.cursor.current() == 'Q' && self.cursor.peek() == '{' {
            self.stack.push(Mode::BracedUriLiteral);
            return self.single(2, TokenKind::BracedUriLiteralStart);
        }
        let start = self.cursor.pos();
        self.ncname();
        let kind = keywords::lookup(self.cursor.slice_from(start)).unwrap_or(TokenKind::NcName);
        self.push_local_name_if_prefix();
        Step::Token(kind)
    }

    /// An `NCName` directly followed by `:` and a name-start character is a
    /// prefix; the separator and local part are scanned in `QNameLocalName`.
    pub(super) fn push_local_name_if_prefix(&mut self) {
        if self.cursor.current() == ':' && is_name_start(self.cursor.peek()) {
            self.stack.push(Mode::QNameLocalName);
        }
    }

    /// Separator and local name of a qualified name. No keyword lookup.
    pub(super) fn qname_local_name(&mut self) -> Step {
        match self.cursor.current() {
            ':' if !self.cursor.is_eof() => self.single(1, TokenKind::QNameSeparator),
            c if is_name_start(c) => {
                self.stack.pop();
                self.ncname();
                Step::Token(TokenKind::NcName)
            }
            _ => {
                self.stack.pop();
                Step::Rescan
            }
        }
    }

    // ─── Numbers ────────────────────────────────────────────────────

    /// `IntegerLiteral`, `DecimalLiteral` or `DoubleLiteral`.
    ///
    /// An exponent marker without digits is left for the `DoubleExponent`
    /// mode, so `1e` is an integer followed by a partial exponent.
    fn number(&mut self, start: u32) -> Step {
        let mut kind = TokenKind::IntegerLiteral;
        self.cursor.eat_while(|c| c.is_ascii_digit());
        if self.cursor.current() == '.' {
            self.cursor.advance();
            self.cursor.eat_while(|c| c.is_ascii_digit());
            kind = TokenKind::DecimalLiteral;
        }
        debug_assert!(self.cursor.pos() > start, "number scanned nothing");

        if matches!(self.cursor.current(), 'e' | 'E') {
            let mark = self.cursor.pos();
            self.cursor.advance();
            if matches!(self.cursor.current(), '+' | '-') {
                self.cursor.advance();
            }
            if self.cursor.current().is_ascii_digit() {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                kind = TokenKind::DoubleLiteral;
            } else {
                self.cursor.seek(mark);
                self.stack.push(Mode::DoubleExponent);
            }
        }
        Step::Token(kind)
    }

    /// The digit-less exponent marker left behind by [`Self::number`].
    pub(super) fn double_exponent(&mut self) -> Step {
        self.stack.pop();
        if !matches!(self.cursor.current(), 'e' | 'E') {
            return Step::Rescan;
        }
        self.cursor.advance();
        if matches!(self.cursor.current(), '+' | '-') {
            self.cursor.advance();
        }
        Step::Token(TokenKind::PartialDoubleLiteralExponent)
    }

    /// `.5`, `.`, `..` or `...`.
    fn dot(&mut self, start: u32) -> Step {
        if self.cursor.peek().is_ascii_digit() {
            return self.number(start);
        }
        if self.cursor.eat("...") {
            Step::Token(TokenKind::Ellipsis)
        } else if self.cursor.eat("..") {
            Step::Token(TokenKind::ParentSelector)
        } else {
            self.single(1, TokenKind::Dot)
        }
    }

    // ─── Punctuation ────────────────────────────────────────────────

    /// The current character followed by `second` as `double`, else the
    /// current character alone as `single`.
    #[inline]
    fn pair(&mut self, second: char, double: TokenKind, single: TokenKind) -> Step {
        if self.cursor.peek() == second {
            self.single(2, double)
        } else {
            self.single(1, single)
        }
    }

    fn string_start(&mut self, mode: Mode) -> Step {
        self.stack.push(mode);
        self.single(1, TokenKind::StringLiteralStart)
    }

    fn parenthesis_open(&mut self) -> Step {
        match self.cursor.peek() {
            ':' => {
                self.stack.push(Mode::Comment);
                self.single(2, TokenKind::CommentStartTag)
            }
            '#' if self.is_xquery() => {
                self.stack.push(Mode::PragmaPreQName);
                self.single(2, TokenKind::PragmaBegin)
            }
            _ => self.single(1, TokenKind::ParenthesisOpen),
        }
    }

    fn number_sign(&mut self) -> Step {
        if self.is_xquery() && self.cursor.peek() == ')' {
            self.single(2, TokenKind::PragmaEnd)
        } else {
            self.single(1, TokenKind::FunctionRefOperator)
        }
    }

    fn colon(&mut self) -> Step {
        match self.cursor.peek() {
            ':' => self.single(2, TokenKind::AxisSeparator),
            '=' => self.single(2, TokenKind::AssignEqual),
            ')' => self.single(2, TokenKind::CommentEndTag),
            _ => self.single(1, TokenKind::QNameSeparator),
        }
    }

    fn greater_than(&mut self) -> Step {
        match self.cursor.peek() {
            '=' => self.single(2, TokenKind::GreaterThanOrEqual),
            '>' => self.single(2, TokenKind::NodeAfter),
            _ => self.single(1, TokenKind::GreaterThan),
        }
    }

    fn less_than(&mut self) -> Step {
        if self.is_xquery() {
            if let Some(step) = self.markup_open() {
                return step;
            }
        }
        match self.cursor.peek() {
            '=' => self.single(2, TokenKind::LessThanOrEqual),
            '<' => self.single(2, TokenKind::NodeBefore),
            _ => self.single(1, TokenKind::LessThan),
        }
    }

    /// `}` closes a block. In an interpolation, `` }` `` closes the
    /// interpolation itself.
    fn block_close(&mut self) -> Step {
        if self.stack.top() == Mode::StringInterpolation {
            if self.cursor.peek() == '`' {
                self.stack.pop();
                return self.single(2, TokenKind::StringInterpolationClose);
            }
            return self.single(1, TokenKind::BlockClose);
        }
        if !self.stack.is_empty() {
            self.stack.pop();
        }
        self.single(1, TokenKind::BlockClose)
    }

    fn grave_accent(&mut self) -> Step {
        if self.is_xquery() && self.cursor.starts_with("``[") {
            self.stack.push(Mode::StringConstructorContents);
            return self.single(3, TokenKind::StringConstructorStart);
        }
        self.bad_character()
    }
}

