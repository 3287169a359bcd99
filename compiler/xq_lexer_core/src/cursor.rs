//! Forward-only code-point cursor with a single backtrack register.
//!
//! The cursor reads one Unicode code point at a time from `text[pos..end]`.
//! Past `end` it reports [`EOB`] (`'\0'`); repeated reads at the end are
//! idempotent. A `'\0'` inside the range is an ordinary character, so callers
//! that care use [`Cursor::is_eof`] to tell the two apart, as with any
//! sentinel-terminated reader.
//!
//! Backtracking needs at most one level: [`Cursor::save`] overwrites the
//! register and [`Cursor::restore`] rewinds to it. [`Cursor::seek`] is the
//! absolute form, for abandoning a lookahead at a known offset.
//!
//! The cursor also remembers how far it has ever read, including lookahead
//! it later rewound. [`Cursor::lookahead_end`] bounds the text that tokens
//! lexed so far depend on, which is what an incremental re-lexer needs to
//! decide where an edit invalidates them.

use crate::char_class::CharClass;

/// Code point reported at and past the end of the range.
pub const EOB: char = '\0';

/// Bytes a scanner may inspect past the furthest position it moved to:
/// one code point of `peek()` after the current one, or the longest
/// `starts_with` probe (`<![CDATA[`).
const PEEK_WINDOW: u32 = 9;

/// Returns the earliest (minimum) of two optional positions.
///
/// Used to combine separate `memchr` searches when more needles are needed
/// than `memchr3` supports.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Code-point cursor over a sub-range of a text buffer.
///
/// Backtrack with `save`/`restore` or `seek` only. Assigning back an older
/// copy of the cursor would forget lookahead read since, and
/// [`Cursor::lookahead_end`] would then undercount.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    text: &'a str,
    /// Current read position (byte offset into `text`).
    pos: u32,
    /// Exclusive end of the readable range.
    end: u32,
    /// Backtrack register written by `save()`.
    saved: u32,
    /// Furthest position moved away from by `restore()` or `seek()`.
    furthest: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `text[start..end]`, positioned at `start`.
    ///
    /// # Contract
    ///
    /// `start <= end <= text.len()`, and both offsets fall on character
    /// boundaries.
    pub fn new(text: &'a str, start: u32, end: u32) -> Self {
        assert!(
            start <= end && end as usize <= text.len(),
            "cursor range {start}..{end} outside text of length {}",
            text.len()
        );
        assert!(
            text.is_char_boundary(start as usize) && text.is_char_boundary(end as usize),
            "cursor range {start}..{end} splits a character"
        );
        Self {
            text,
            pos: start,
            end,
            saved: start,
            furthest: start,
        }
    }

    /// Returns the code point at the current position, or [`EOB`] at the end.
    #[inline]
    pub fn current(&self) -> char {
        self.char_at(self.pos)
    }

    /// Returns the code point after the current one, or [`EOB`].
    #[inline]
    pub fn peek(&self) -> char {
        let next = self.pos + Self::width(self.current());
        self.char_at(next)
    }

    /// Lexical class of the current code point.
    ///
    /// At the end of the range this is [`CharClass::EndOfBuffer`], which is
    /// how an interior `'\0'` is kept apart from the end.
    #[inline]
    pub fn class(&self) -> CharClass {
        if self.is_eof() {
            CharClass::EndOfBuffer
        } else {
            CharClass::of(self.current())
        }
    }

    /// Consume the current code point. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.end {
            self.pos += Self::width(self.current());
        }
    }

    /// Consume `n` code points (stopping at the end).
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Returns `true` once every code point in the range is consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.end
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Exclusive end of the range.
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Remember the current position, overwriting any earlier `save()`.
    #[inline]
    pub fn save(&mut self) {
        self.saved = self.pos;
    }

    /// Rewind to the position recorded by the last `save()`.
    #[inline]
    pub fn restore(&mut self) {
        self.furthest = self.furthest.max(self.pos);
        self.pos = self.saved;
    }

    /// Reposition to an absolute offset within the range.
    #[inline]
    pub fn seek(&mut self, offset: u32) {
        debug_assert!(offset <= self.end, "seek to {offset} past end {}", self.end);
        debug_assert!(
            self.text.is_char_boundary(offset as usize),
            "seek to {offset} splits a character"
        );
        self.furthest = self.furthest.max(self.pos);
        self.pos = offset;
    }

    /// Exclusive bound on every byte offset read so far.
    ///
    /// May exceed the range end: reading the end itself is a dependency,
    /// since appending text changes what was seen there.
    #[inline]
    pub fn lookahead_end(&self) -> u32 {
        self.furthest.max(self.pos).saturating_add(PEEK_WINDOW)
    }

    /// Returns `true` if the unread text starts with `s`.
    #[inline]
    pub fn starts_with(&self, s: &str) -> bool {
        self.remaining().starts_with(s)
    }

    /// Consume `s` if the unread text starts with it.
    #[inline]
    pub fn eat(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            self.pos += Self::len_u32(s);
            true
        } else {
            false
        }
    }

    /// Advance while `pred` returns `true` for the current code point.
    ///
    /// Stops at the end of the range regardless of `pred(EOB)`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.advance();
        }
    }

    /// Advance to the next occurrence of any needle byte, or to the end.
    ///
    /// Returns the code point found, or [`EOB`]. Needles must be ASCII, so
    /// the cursor always lands on a character boundary.
    pub fn skip_to_any(&mut self, needles: &[u8]) -> char {
        debug_assert!(needles.iter().all(u8::is_ascii), "needles must be ASCII");
        let haystack = self.remaining().as_bytes();
        let offset = match *needles {
            [a] => memchr::memchr(a, haystack),
            [a, b] => memchr::memchr2(a, b, haystack),
            [a, b, c] => memchr::memchr3(a, b, c, haystack),
            [a, b, c, ref rest @ ..] => {
                let primary = memchr::memchr3(a, b, c, haystack);
                // Search the tail only up to the primary hit.
                let limit = primary.unwrap_or(haystack.len());
                let secondary = haystack[..limit]
                    .iter()
                    .position(|byte| rest.contains(byte));
                earliest_of(primary, secondary)
            }
            [] => None,
        };
        match offset {
            Some(off) => {
                self.pos += Self::len_u32_from(off);
                self.current()
            }
            None => {
                self.pos = self.end;
                EOB
            }
        }
    }

    /// Extract `text[start..end]`.
    #[inline]
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.text[start as usize..end as usize]
    }

    /// Extract the text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    #[inline]
    fn remaining(&self) -> &'a str {
        &self.text[self.pos as usize..self.end as usize]
    }

    #[inline]
    fn char_at(&self, offset: u32) -> char {
        if offset >= self.end {
            return EOB;
        }
        let bytes = self.text.as_bytes();
        let lead = bytes[offset as usize];
        if lead.is_ascii() {
            char::from(lead)
        } else {
            self.text[offset as usize..self.end as usize]
                .chars()
                .next()
                .unwrap_or(EOB)
        }
    }

    /// UTF-8 width of `c`. [`EOB`] has width 1, which is harmless because
    /// nothing advances past the end.
    #[inline]
    fn width(c: char) -> u32 {
        Self::len_u32_from(c.len_utf8())
    }

    #[inline]
    fn len_u32(s: &str) -> u32 {
        Self::len_u32_from(s.len())
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "lengths are bounded by the range end, which fits in u32"
    )]
    #[inline]
    fn len_u32_from(len: usize) -> u32 {
        len as u32
    }
}
