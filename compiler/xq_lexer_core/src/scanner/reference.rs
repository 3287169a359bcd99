//! Entity and character references.

use xq_ir::TokenKind;

use super::{Scanner, Step};
use crate::char_class::is_name_start;

/// Token kinds for the four reference outcomes in one context.
struct ReferenceKinds {
    predefined: TokenKind,
    character: TokenKind,
    partial: TokenKind,
    empty: TokenKind,
}

const TEXT_REFERENCES: ReferenceKinds = ReferenceKinds {
    predefined: TokenKind::PredefinedEntityReference,
    character: TokenKind::CharacterReference,
    partial: TokenKind::PartialEntityReference,
    empty: TokenKind::EmptyEntityReference,
};

const ATTRIBUTE_REFERENCES: ReferenceKinds = ReferenceKinds {
    predefined: TokenKind::XmlPredefinedEntityReference,
    character: TokenKind::XmlCharacterReference,
    partial: TokenKind::XmlPartialEntityReference,
    empty: TokenKind::XmlEmptyEntityReference,
};

impl Scanner<'_> {
    /// Scan a reference starting at `&`.
    ///
    /// The rules are the same everywhere; attribute values only differ in
    /// the kinds emitted. Nothing here is an error: `&name` without `;`, a
    /// bare `&`, and `&#;` are partial references, and `&;` is empty.
    pub(super) fn reference(&mut self, in_attribute: bool) -> Step {
        let kinds = if in_attribute {
            &ATTRIBUTE_REFERENCES
        } else {
            &TEXT_REFERENCES
        };
        debug_assert_eq!(self.cursor.current(), '&');
        self.cursor.advance();

        let complete = match self.cursor.current() {
            ';' => return self.single(1, kinds.empty),
            '#' => {
                self.cursor.advance();
                let digits_start = if self.cursor.current() == 'x' {
                    self.cursor.advance();
                    let at = self.cursor.pos();
                    self.cursor.eat_while(|c| c.is_ascii_hexdigit());
                    at
                } else {
                    let at = self.cursor.pos();
                    self.cursor.eat_while(|c| c.is_ascii_digit());
                    at
                };
                if self.cursor.pos() > digits_start && self.cursor.current() == ';' {
                    kinds.character
                } else {
                    kinds.partial
                }
            }
            c if is_name_start(c) => {
                self.ncname();
                if self.cursor.current() == ';' {
                    kinds.predefined
                } else {
                    kinds.partial
                }
            }
            _ => kinds.partial,
        };

        if complete != kinds.partial {
            self.cursor.advance();
        }
        Step::Token(complete)
    }
}
