//! Direct constructors: element tags, attribute values, element content,
//! XML comments, CDATA sections and processing instructions.
//!
//! Each construct opened from expression text or element content is pushed
//! on the stack and popped on its close, so the "inside element content"
//! case needs no separate modes: closing a construct returns to whichever
//! frame it was opened from.

use xq_ir::TokenKind;

use super::{is_xml_whitespace, Scanner, Step};
use crate::char_class::{is_name_char, is_name_start};
use crate::cursor::EOB;
use crate::mode::Mode;

impl Scanner<'_> {
    /// `<` in expression text that opens a constructor, if it does.
    ///
    /// Returns `None` when the `<` is a comparison operator.
    pub(super) fn markup_open(&mut self) -> Option<Step> {
        if self.cursor.eat("<!--") {
            self.stack.push(Mode::XmlComment);
            return Some(Step::Token(TokenKind::XmlCommentStartTag));
        }
        if self.cursor.eat("<![CDATA[") {
            self.stack.push(Mode::CdataSection);
            return Some(Step::Token(TokenKind::CdataSectionStartTag));
        }
        let next = self.cursor.peek();
        if next == '?' {
            self.cursor.save();
            self.cursor.advance_n(2);
            let target = is_name_start(self.cursor.current());
            self.cursor.restore();
            if target {
                self.stack.push(Mode::ProcessingInstruction);
                return Some(self.single(2, TokenKind::ProcessingInstructionBegin));
            }
            return None;
        }
        if is_name_start(next) && self.looks_like_start_tag() {
            self.stack.push(Mode::ElementTagOpen);
            return Some(self.single(1, TokenKind::OpenXmlTag));
        }
        None
    }

    /// Decide whether `<name` in expression text starts an element.
    ///
    /// It does when the name is followed by `>`, `/`, the end of the range,
    /// or whitespace and then one of those or an attribute (`name =`).
    /// Otherwise it is a comparison such as `$a <b and $c`. The cursor is
    /// left where it started.
    fn looks_like_start_tag(&mut self) -> bool {
        self.cursor.save();
        self.cursor.advance();
        self.skip_qname();
        let mut is_tag = match self.cursor.current() {
            '>' | '/' => true,
            EOB => self.cursor.is_eof(),
            _ => false,
        };
        if !is_tag && is_xml_whitespace(self.cursor.current()) {
            self.cursor.eat_while(is_xml_whitespace);
            is_tag = match self.cursor.current() {
                '>' | '/' => true,
                EOB => self.cursor.is_eof(),
                c if is_name_start(c) => {
                    self.skip_qname();
                    self.cursor.eat_while(is_xml_whitespace);
                    self.cursor.current() == '='
                }
                _ => false,
            };
        }
        self.cursor.restore();
        is_tag
    }

    /// Skip `name` or `prefix:name`.
    fn skip_qname(&mut self) {
        self.cursor.eat_while(is_name_char);
        if self.cursor.current() == ':' && is_name_start(self.cursor.peek()) {
            self.cursor.advance();
            self.cursor.eat_while(is_name_char);
        }
    }

    // ─── Tags ───────────────────────────────────────────────────────

    /// Element name of a start tag.
    pub(super) fn element_tag_open(&mut self) -> Step {
        match self.cursor.current() {
            c if is_name_start(c) => {
                self.ncname();
                Step::Token(TokenKind::XmlTagNcName)
            }
            ':' if !self.cursor.is_eof() => self.single(1, TokenKind::XmlTagQNameSeparator),
            _ => {
                self.stack.replace(Mode::AttributeList);
                Step::Rescan
            }
        }
    }

    /// Attributes of a start tag, up to `>` or `/>`.
    pub(super) fn attribute_list(&mut self) -> Step {
        if self.cursor.is_eof() {
            return Step::End;
        }
        match self.cursor.current() {
            c if is_xml_whitespace(c) => self.whitespace(TokenKind::XmlWhitespace),
            c if is_name_start(c) => {
                self.ncname();
                Step::Token(TokenKind::XmlAttributeNcName)
            }
            ':' => self.single(1, TokenKind::XmlAttributeQNameSeparator),
            '=' => self.single(1, TokenKind::XmlEqual),
            '"' => {
                self.stack.push(Mode::AttributeValueQuote);
                self.single(1, TokenKind::XmlAttributeValueStart)
            }
            '\'' => {
                self.stack.push(Mode::AttributeValueApostrophe);
                self.single(1, TokenKind::XmlAttributeValueStart)
            }
            '/' if self.cursor.peek() == '>' => {
                self.stack.pop();
                self.single(2, TokenKind::SelfClosingXmlTag)
            }
            '>' => {
                self.stack.replace(Mode::ElementContent);
                self.single(1, TokenKind::EndXmlTag)
            }
            _ => self.bad_character(),
        }
    }

    /// Element name of an end tag, up to `>`.
    pub(super) fn element_tag_close(&mut self) -> Step {
        if self.cursor.is_eof() {
            return Step::End;
        }
        match self.cursor.current() {
            c if is_name_start(c) => {
                self.ncname();
                Step::Token(TokenKind::XmlTagNcName)
            }
            c if is_xml_whitespace(c) => self.whitespace(TokenKind::XmlWhitespace),
            ':' => self.single(1, TokenKind::XmlTagQNameSeparator),
            '>' => {
                self.stack.pop();
                self.single(1, TokenKind::EndXmlTag)
            }
            _ => self.bad_character(),
        }
    }

    // ─── Attribute values and content ───────────────────────────────

    /// Attribute value delimited by `quote`.
    ///
    /// Unlike string literals, `{` opens an enclosed expression and `{{` /
    /// `}}` escape braces.
    pub(super) fn attribute_value(&mut self, start: u32, quote: char) -> Step {
        if self.cursor.is_eof() {
            return Step::End;
        }
        match self.cursor.current() {
            c if c == quote => {
                if self.cursor.peek() == quote {
                    return self.single(2, TokenKind::XmlEscapedCharacter);
                }
                self.stack.pop();
                self.single(1, TokenKind::XmlAttributeValueEnd)
            }
            '{' | '}' => self.brace_in_markup(),
            '&' => self.reference(true),
            '<' => self.bad_character(),
            _ => {
                self.cursor.advance();
                let stops: &[u8] = if quote == '"' {
                    b"\"{}<&"
                } else {
                    b"'{}<&"
                };
                self.cursor.skip_to_any(stops);
                debug_assert!(self.cursor.pos() > start);
                Step::Token(TokenKind::XmlAttributeValueContents)
            }
        }
    }

    /// Text between an element's start and end tags.
    pub(super) fn element_content(&mut self, start: u32) -> Step {
        if self.cursor.is_eof() {
            return Step::End;
        }
        match self.cursor.current() {
            '{' | '}' => self.brace_in_markup(),
            '&' => self.reference(false),
            '<' => self.markup_in_content(),
            _ => {
                self.cursor.advance();
                self.cursor.skip_to_any(b"{}<&");
                debug_assert!(self.cursor.pos() > start);
                Step::Token(TokenKind::XmlElementContents)
            }
        }
    }

    /// `{{`, `}}`, `{` or a stray `}` in attribute values and content.
    fn brace_in_markup(&mut self) -> Step {
        let c = self.cursor.current();
        if self.cursor.peek() == c {
            return self.single(2, TokenKind::XmlEscapedCharacter);
        }
        if c == '{' {
            self.stack.push(Mode::Default);
            return self.single(1, TokenKind::BlockOpen);
        }
        self.bad_character()
    }

    /// `<` in element content: a nested construct or the end tag.
    ///
    /// A `<` that cannot open anything is a bad character, so the parser can
    /// point at it.
    fn markup_in_content(&mut self) -> Step {
        if self.cursor.eat("</") {
            self.stack.replace(Mode::ElementTagClose);
            return Step::Token(TokenKind::CloseXmlTag);
        }
        if self.cursor.eat("<!--") {
            self.stack.push(Mode::XmlComment);
            return Step::Token(TokenKind::XmlCommentStartTag);
        }
        if self.cursor.eat("<![CDATA[") {
            self.stack.push(Mode::CdataSection);
            return Step::Token(TokenKind::CdataSectionStartTag);
        }
        // Unlike expression text, content has no `<` operator, so `<?`
        // opens an instruction even without a target name.
        if self.cursor.eat("<?") {
            self.stack.push(Mode::ProcessingInstruction);
            return Step::Token(TokenKind::ProcessingInstructionBegin);
        }
        if is_name_start(self.cursor.peek()) {
            self.stack.push(Mode::ElementTagOpen);
            return self.single(1, TokenKind::OpenXmlTag);
        }
        self.bad_character()
    }

    // ─── Comments, CDATA, processing instructions ───────────────────

    /// Raw text up to `end_tag`, or the end tag itself.
    pub(super) fn delimited_contents(
        &mut self,
        start: u32,
        end_tag: &str,
        contents: TokenKind,
        end: TokenKind,
    ) -> Step {
        if self.cursor.eat(end_tag) {
            self.stack.pop();
            return Step::Token(end);
        }
        if self.cursor.is_eof() {
            return self.unterminated(start, contents);
        }
        let first = &end_tag.as_bytes()[..1];
        loop {
            self.cursor.advance();
            if self.cursor.skip_to_any(first) == EOB {
                return self.unterminated(start, contents);
            }
            if self.cursor.starts_with(end_tag) {
                return Step::Token(contents);
            }
        }
    }

    /// Target name of a processing instruction.
    pub(super) fn processing_instruction(&mut self, start: u32) -> Step {
        if self.cursor.eat("?>") {
            self.stack.pop();
            return Step::Token(TokenKind::ProcessingInstructionEnd);
        }
        if self.cursor.is_eof() {
            return self.unterminated(start, TokenKind::ProcessingInstructionContents);
        }
        let c = self.cursor.current();
        if is_name_start(c) {
            self.ncname();
            return Step::Token(TokenKind::XmlPiTargetNcName);
        }
        self.stack.replace(Mode::ProcessingInstructionContents);
        if is_xml_whitespace(c) {
            return self.whitespace(TokenKind::XmlWhitespace);
        }
        Step::Rescan
    }
}
