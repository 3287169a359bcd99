//! Documents that remember where the lexer can resume.
//!
//! Every token is stored with the state that was current before it, and
//! with a bound on how far into the text the lexer had looked by the time it
//! produced it. An edit re-lexes from the first token that looked at the
//! edited bytes and stops once the new token stream meets an old boundary
//! in the same state; everything after that is reused with shifted spans.

use std::ops::Range;

use xq_ir::{Token, TokenList};
use xq_lexer_core::{Lexer, LexerOptions, LexerState};

/// A lexed source text that can be edited and re-lexed incrementally.
#[derive(Clone, Debug)]
pub struct LexedDocument {
    text: String,
    options: LexerOptions,
    tokens: Vec<Token>,
    /// State before each token. `None` where the stack was deeper than a
    /// state can encode; such boundaries are never resumed from.
    states: Vec<Option<LexerState>>,
    /// Non-decreasing: `reaches[i]` bounds the bytes read while lexing
    /// tokens `0..=i`.
    reaches: Vec<u32>,
}

/// Token ranges touched by [`LexedDocument::edit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditSummary {
    /// Index of the first re-lexed token.
    pub first: usize,
    /// Number of old tokens replaced, starting at `first`.
    pub removed: usize,
    /// Number of new tokens in their place.
    pub inserted: usize,
}

impl EditSummary {
    /// Indices of the new tokens in the edited document.
    pub fn changed(&self) -> Range<usize> {
        self.first..self.first + self.inserted
    }
}

#[derive(Clone, Copy, Debug)]
struct RestartPoint {
    index: usize,
    offset: u32,
    state: LexerState,
}

impl RestartPoint {
    const START: RestartPoint = RestartPoint {
        index: 0,
        offset: 0,
        state: LexerState::DEFAULT,
    };
}

#[derive(Default)]
struct Scanned {
    tokens: Vec<Token>,
    states: Vec<Option<LexerState>>,
    reaches: Vec<u32>,
    /// Old token index the new stream joined, if it did.
    resync: Option<usize>,
}

impl LexedDocument {
    /// Lex `text` from the default state.
    ///
    /// # Panics
    ///
    /// If `text` is 4 GiB or larger.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(bytes = tracing::field::Empty, dialect = ?options.dialect)
    )]
    pub fn lex(text: impl Into<String>, options: LexerOptions) -> Self {
        let text = text.into();
        tracing::Span::current().record("bytes", text.len());
        let scanned = scan(&text, options, RestartPoint::START, |_, _| None);
        tracing::debug!(tokens = scanned.tokens.len(), "lexed document");
        LexedDocument {
            text,
            options,
            tokens: scanned.tokens,
            states: scanned.states,
            reaches: scanned.reaches,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The state a lexer must start in to produce token `index` and the
    /// rest of the document, or `None` if there is no such token or its
    /// state could not be encoded.
    pub fn state_before(&self, index: usize) -> Option<LexerState> {
        self.states.get(index).copied().flatten()
    }

    /// Index of the token whose span contains `offset`.
    ///
    /// Zero-length tokens contain nothing.
    pub fn token_index_at(&self, offset: u32) -> Option<usize> {
        let index = self.tokens.partition_point(|token| token.span.end <= offset);
        self.tokens
            .get(index)
            .filter(|token| token.span.contains(offset))
            .map(|_| index)
    }

    pub fn to_token_list(&self) -> TokenList {
        self.tokens.iter().copied().collect()
    }

    /// Replace `range` of the text with `replacement` and re-lex what it
    /// affects.
    ///
    /// The tokens afterwards are exactly those a full lex of the new text
    /// produces.
    ///
    /// # Panics
    ///
    /// If `range` is out of bounds or splits a character, or the edited
    /// text is 4 GiB or larger.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(start = range.start, end = range.end, inserted_bytes = replacement.len())
    )]
    pub fn edit(&mut self, range: Range<u32>, replacement: &str) -> EditSummary {
        let (start, end) = (range.start as usize, range.end as usize);
        assert!(
            start <= end && end <= self.text.len(),
            "edit range {start}..{end} out of bounds for document of {} bytes",
            self.text.len()
        );
        assert!(
            self.text.is_char_boundary(start) && self.text.is_char_boundary(end),
            "edit range {start}..{end} splits a character"
        );
        self.text.replace_range(start..end, replacement);
        let new_len = text_len(&self.text);

        let replacement_len = text_len(replacement);
        let inserted_end = range.start + replacement_len;
        debug_assert!(inserted_end <= new_len);
        let delta = i64::from(replacement_len) - i64::from(range.end - range.start);

        let restart = self.restart_point(range.start);
        tracing::trace!(
            index = restart.index,
            offset = restart.offset,
            state = %restart.state,
            "restarting"
        );
        let scanned = scan(&self.text, self.options, restart, |pos, state| {
            if pos < inserted_end {
                return None;
            }
            self.resync_point(pos, delta, state?)
        });

        let tail = scanned.resync.unwrap_or(self.tokens.len());
        let summary = EditSummary {
            first: restart.index,
            removed: tail - restart.index,
            inserted: scanned.tokens.len(),
        };

        for token in &mut self.tokens[tail..] {
            token.span = token.span.shift(delta);
        }
        for reach in &mut self.reaches[tail..] {
            *reach = shift_offset(*reach, delta);
        }
        self.tokens.splice(restart.index..tail, scanned.tokens);
        self.states.splice(restart.index..tail, scanned.states);
        self.reaches.splice(restart.index..tail, scanned.reaches);

        let mut floor = restart
            .index
            .checked_sub(1)
            .map_or(0, |previous| self.reaches[previous]);
        for reach in &mut self.reaches[restart.index..] {
            floor = floor.max(*reach);
            *reach = floor;
        }

        tracing::debug!(
            first = summary.first,
            removed = summary.removed,
            inserted = summary.inserted,
            reused = self.tokens.len() - summary.changed().end,
            "re-lexed edit"
        );
        summary
    }

    /// Latest boundary at or before every token that may have read `offset`,
    /// with an encodable state.
    fn restart_point(&self, offset: u32) -> RestartPoint {
        let last = self.tokens.len().saturating_sub(1);
        let mut index = self
            .reaches
            .partition_point(|&reach| reach <= offset)
            .min(last);
        while index > 0 {
            if let Some(state) = self.states[index] {
                return RestartPoint {
                    index,
                    offset: self.tokens[index].span.start,
                    state,
                };
            }
            index -= 1;
        }
        RestartPoint::START
    }

    /// Old token that starts where `pos` was before the edit, in `state`.
    fn resync_point(&self, pos: u32, delta: i64, state: LexerState) -> Option<usize> {
        let old_pos = u32::try_from(i64::from(pos) - delta).ok()?;
        let first = self
            .tokens
            .partition_point(|token| token.span.start < old_pos);
        let found = self.tokens[first..]
            .iter()
            .zip(&self.states[first..])
            .take_while(|(token, _)| token.span.start == old_pos)
            .position(|(_, before)| *before == Some(state))
            .map(|offset| first + offset);
        if let Some(index) = found {
            tracing::trace!(index, offset = pos, "resynchronised");
        }
        found
    }
}

/// Lex from `from` to the end of `text`, stopping early at the first
/// boundary `resync` accepts.
fn scan(
    text: &str,
    options: LexerOptions,
    from: RestartPoint,
    mut resync: impl FnMut(u32, Option<LexerState>) -> Option<usize>,
) -> Scanned {
    let mut lexer = Lexer::new(options);
    lexer.start(text, from.offset, text_len(text), from.state);
    let mut scanned = Scanned::default();
    let mut before = Some(from.state);
    loop {
        if let Some(index) = resync(lexer.token_end(), before) {
            scanned.resync = Some(index);
            break;
        }
        let Some(token) = lexer.advance() else {
            break;
        };
        scanned.tokens.push(token);
        scanned.states.push(before);
        scanned.reaches.push(lexer.lookahead_end());
        before = Some(lexer.state()).filter(|state| state.is_resumable());
    }
    scanned
}

fn text_len(text: &str) -> u32 {
    u32::try_from(text.len())
        .unwrap_or_else(|_| panic!("document of {} bytes exceeds u32 offsets", text.len()))
}

fn shift_offset(offset: u32, delta: i64) -> u32 {
    let shifted = (i64::from(offset) + delta).clamp(0, i64::from(u32::MAX));
    u32::try_from(shifted).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
