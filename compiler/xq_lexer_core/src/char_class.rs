//! Character classifier.
//!
//! [`CharClass::of`] is a total function from code point to lexical class.
//! ASCII goes through a 128-entry table so the Default-mode dispatch is a
//! single indexed read. Everything above ASCII is either a name character
//! per the XML 1.0 (fifth edition) `NameStartChar` / `NameChar` productions,
//! or [`CharClass::Other`].
//!
//! Name classification deliberately excludes `:`, which makes these the
//! `NCName` rules of XML Namespaces.

/// Lexical class of a single code point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `#x20`, `#x9`, `#xD`, `#xA`. No other code point is whitespace.
    Whitespace,
    /// May start an `NCName`: letters, `_`, and the non-ASCII start ranges.
    NameStartChar,
    /// May continue but not start an `NCName` (combining marks, `·`, ...).
    ///
    /// The ASCII continuation characters have their own classes:
    /// [`Digit`](Self::Digit), [`Dot`](Self::Dot) and
    /// [`HyphenMinus`](Self::HyphenMinus).
    NameChar,
    Digit,
    Dot,
    HyphenMinus,
    QuotationMark,
    Apostrophe,
    ExclamationMark,
    NumberSign,
    DollarSign,
    PercentSign,
    Ampersand,
    ParenthesisOpen,
    ParenthesisClose,
    Asterisk,
    PlusSign,
    Comma,
    Solidus,
    Colon,
    Semicolon,
    LessThan,
    EqualsSign,
    GreaterThan,
    QuestionMark,
    CommercialAt,
    SquareBracketOpen,
    SquareBracketClose,
    CurlyBracketOpen,
    CurlyBracketClose,
    VerticalLine,
    GraveAccent,
    /// Past the end of the readable range. Never returned by [`CharClass::of`];
    /// the cursor reports it.
    EndOfBuffer,
    /// Anything the lexer has no dedicated class for (`^`, `\`, `~`, control
    /// characters, non-name code points).
    Other,
}

/// Class of every ASCII code point.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..128, always fits in u8"
)]
static ASCII_CLASS_TABLE: [CharClass; 128] = {
    let mut table = [CharClass::Other; 128];
    let mut i = 0u16;
    while i < 128 {
        table[i as usize] = match i as u8 {
            b' ' | b'\t' | b'\r' | b'\n' => CharClass::Whitespace,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => CharClass::NameStartChar,
            b'0'..=b'9' => CharClass::Digit,
            b'.' => CharClass::Dot,
            b'-' => CharClass::HyphenMinus,
            b'"' => CharClass::QuotationMark,
            b'\'' => CharClass::Apostrophe,
            b'!' => CharClass::ExclamationMark,
            b'#' => CharClass::NumberSign,
            b'$' => CharClass::DollarSign,
            b'%' => CharClass::PercentSign,
            b'&' => CharClass::Ampersand,
            b'(' => CharClass::ParenthesisOpen,
            b')' => CharClass::ParenthesisClose,
            b'*' => CharClass::Asterisk,
            b'+' => CharClass::PlusSign,
            b',' => CharClass::Comma,
            b'/' => CharClass::Solidus,
            b':' => CharClass::Colon,
            b';' => CharClass::Semicolon,
            b'<' => CharClass::LessThan,
            b'=' => CharClass::EqualsSign,
            b'>' => CharClass::GreaterThan,
            b'?' => CharClass::QuestionMark,
            b'@' => CharClass::CommercialAt,
            b'[' => CharClass::SquareBracketOpen,
            b']' => CharClass::SquareBracketClose,
            b'{' => CharClass::CurlyBracketOpen,
            b'}' => CharClass::CurlyBracketClose,
            b'|' => CharClass::VerticalLine,
            b'`' => CharClass::GraveAccent,
            _ => CharClass::Other,
        };
        i += 1;
    }
    table
};

impl CharClass {
    /// Classify a code point.
    #[inline]
    pub fn of(c: char) -> CharClass {
        if c.is_ascii() {
            ASCII_CLASS_TABLE[c as usize]
        } else if is_non_ascii_name_start(c) {
            CharClass::NameStartChar
        } else if is_non_ascii_name_continue(c) {
            CharClass::NameChar
        } else {
            CharClass::Other
        }
    }
}

/// Returns `true` if `c` may start an `NCName`.
#[inline]
pub fn is_name_start(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphabetic() || c == '_'
    } else {
        is_non_ascii_name_start(c)
    }
}

/// Returns `true` if `c` may appear after the first character of an `NCName`.
#[inline]
pub fn is_name_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
    } else {
        is_non_ascii_name_start(c) || is_non_ascii_name_continue(c)
    }
}

fn is_non_ascii_name_start(c: char) -> bool {
    matches!(
        c,
        '\u{C0}'..='\u{D6}'
            | '\u{D8}'..='\u{F6}'
            | '\u{F8}'..='\u{2FF}'
            | '\u{370}'..='\u{37D}'
            | '\u{37F}'..='\u{1FFF}'
            | '\u{200C}'..='\u{200D}'
            | '\u{2070}'..='\u{218F}'
            | '\u{2C00}'..='\u{2FEF}'
            | '\u{3001}'..='\u{D7FF}'
            | '\u{F900}'..='\u{FDCF}'
            | '\u{FDF0}'..='\u{FFFD}'
            | '\u{10000}'..='\u{EFFFF}'
    )
}

/// The non-ASCII `NameChar` additions over `NameStartChar`.
fn is_non_ascii_name_continue(c: char) -> bool {
    matches!(c, '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}
