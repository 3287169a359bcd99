//! Lexical modes, the mode stack, and its integer encoding.
//!
//! The stack always rests on an implicit [`Mode::Default`] frame that is
//! never popped and never encoded. Every other frame is pushed when a nested
//! construct opens and popped (or replaced) when it closes or moves to its
//! next phase.
//!
//! # State encoding
//!
//! [`LexerState`] packs the stack into a `u128`, five bits per frame. Each
//! digit holds `mode + 1`, so a zero digit means "no frame"; the innermost
//! frame sits in the lowest digit. State `0` is therefore the plain
//! [`Mode::Default`] start state.
//!
//! ```text
//!   bit 127      bits 124..120  ...  bits 9..5   bits 4..0
//!   overflow     outermost           frame 1     innermost (top)
//! ```
//!
//! At most [`MAX_ENCODED_FRAMES`] frames fit. A deeper stack encodes as
//! [`LexerState::OVERFLOW`], which decodes to an error: the encoding never
//! drops frames, so every state that decodes resumes exactly.

use smallvec::SmallVec;
use thiserror::Error;

/// Number of frames a [`LexerState`] can hold.
pub const MAX_ENCODED_FRAMES: usize = 25;

/// Bits per encoded frame.
const FRAME_BITS: u32 = 5;

const FRAME_MASK: u128 = (1 << FRAME_BITS) - 1;

/// Bits used by a full [`LexerState`]; anything above must be zero.
#[allow(clippy::cast_possible_truncation, reason = "25 frames")]
const ENCODED_BITS: u32 = FRAME_BITS * MAX_ENCODED_FRAMES as u32;

/// A lexical mode: which scanner handles the next token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mode {
    /// Expression text. Also the mode inside `{ ... }` blocks.
    Default = 0,
    /// Expression inside a string constructor's `` `{ ... }` ``.
    StringInterpolation = 1,
    /// After a prefix and before `:local`. Transient.
    QNameLocalName = 2,
    /// After a number whose exponent has no digits. Transient.
    DoubleExponent = 3,
    /// Emits a single empty `UnexpectedEndOfBlock` token. Transient.
    UnexpectedEndOfBlock = 4,
    StringLiteralQuote = 5,
    StringLiteralApostrophe = 6,
    BracedUriLiteral = 7,
    Comment = 8,
    PragmaPreQName = 9,
    PragmaQName = 10,
    PragmaContents = 11,
    /// Element name after `<`.
    ElementTagOpen = 12,
    /// Attributes of a start tag, up to `>` or `/>`.
    AttributeList = 13,
    /// Element name after `</`.
    ElementTagClose = 14,
    AttributeValueQuote = 15,
    AttributeValueApostrophe = 16,
    ElementContent = 17,
    XmlComment = 18,
    CdataSection = 19,
    /// Target name after `<?`.
    ProcessingInstruction = 20,
    ProcessingInstructionContents = 21,
    StringConstructorContents = 22,
}

impl Mode {
    /// Every mode, indexed by discriminant.
    const ALL: [Mode; 23] = [
        Mode::Default,
        Mode::StringInterpolation,
        Mode::QNameLocalName,
        Mode::DoubleExponent,
        Mode::UnexpectedEndOfBlock,
        Mode::StringLiteralQuote,
        Mode::StringLiteralApostrophe,
        Mode::BracedUriLiteral,
        Mode::Comment,
        Mode::PragmaPreQName,
        Mode::PragmaQName,
        Mode::PragmaContents,
        Mode::ElementTagOpen,
        Mode::AttributeList,
        Mode::ElementTagClose,
        Mode::AttributeValueQuote,
        Mode::AttributeValueApostrophe,
        Mode::ElementContent,
        Mode::XmlComment,
        Mode::CdataSection,
        Mode::ProcessingInstruction,
        Mode::ProcessingInstructionContents,
        Mode::StringConstructorContents,
    ];

    /// Stable numeric code of this mode.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// The mode with the given code, if any.
    #[inline]
    pub fn from_code(code: u8) -> Option<Mode> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Transient modes last exactly one token and are only ever the top
    /// frame.
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(
            self,
            Mode::QNameLocalName | Mode::DoubleExponent | Mode::UnexpectedEndOfBlock
        )
    }
}

/// Error decoding a [`LexerState`].
///
/// States are only ever produced by [`StateStack::encode`], so any of these
/// means the host passed back a value the lexer never handed out.
/// `depth` counts frames from the top of the stack, starting at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("invalid lexer state {state:#x}: unknown mode digit {code} at depth {depth}")]
    UnknownMode { state: u128, code: u8, depth: usize },
    #[error("invalid lexer state {state:#x}: empty frame at depth {depth} below a non-empty one")]
    Gap { state: u128, depth: usize },
    #[error(
        "invalid lexer state {state:#x}: more than {max} frames",
        max = MAX_ENCODED_FRAMES
    )]
    TooDeep { state: u128 },
    #[error("invalid lexer state {state:#x}: transient mode {mode:?} below the top")]
    MisplacedTransient { state: u128, mode: Mode },
}

/// The encoded mode stack, as exchanged with the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LexerState(u128);

impl LexerState {
    /// Empty stack: plain expression text.
    pub const DEFAULT: LexerState = LexerState(0);

    /// Encoding of a stack deeper than [`MAX_ENCODED_FRAMES`]. Not resumable.
    pub const OVERFLOW: LexerState = LexerState(1 << 127);

    /// Wrap a raw integer previously returned by [`LexerState::raw`].
    #[inline]
    pub const fn from_raw(raw: u128) -> Self {
        LexerState(raw)
    }

    #[inline]
    pub const fn raw(self) -> u128 {
        self.0
    }

    /// Returns `false` for [`LexerState::OVERFLOW`], which no lexer can
    /// start from.
    #[inline]
    pub const fn is_resumable(self) -> bool {
        self.0 != Self::OVERFLOW.0
    }

    /// Rebuild the stack this state was encoded from.
    pub fn decode(self) -> Result<StateStack, InvalidState> {
        let state = self.0;
        if state >> ENCODED_BITS != 0 {
            return Err(InvalidState::TooDeep { state });
        }

        // Digits come out innermost first.
        let mut frames: SmallVec<[Mode; 8]> = SmallVec::new();
        let mut rest = state;
        let mut depth = 0;
        while rest != 0 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "masked to five bits"
            )]
            let digit = (rest & FRAME_MASK) as u8;
            if digit == 0 {
                return Err(InvalidState::Gap { state, depth });
            }
            let mode = Mode::from_code(digit - 1).ok_or(InvalidState::UnknownMode {
                state,
                code: digit,
                depth,
            })?;
            if mode.is_transient() && depth > 0 {
                return Err(InvalidState::MisplacedTransient { state, mode });
            }
            frames.push(mode);
            rest >>= FRAME_BITS;
            depth += 1;
        }
        frames.reverse();
        Ok(StateStack { frames })
    }
}

impl std::fmt::Display for LexerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Explicit stack of nested modes.
///
/// Inline capacity covers ordinary nesting (a string inside a block inside
/// an attribute inside an element) without allocating.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StateStack {
    /// Pushed frames, outermost first. The implicit `Default` bottom is not
    /// stored.
    frames: SmallVec<[Mode; 8]>,
}

impl StateStack {
    /// A stack holding only the implicit `Default` frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active mode.
    #[inline]
    pub fn top(&self) -> Mode {
        self.frames.last().copied().unwrap_or(Mode::Default)
    }

    #[inline]
    pub fn push(&mut self, mode: Mode) {
        self.frames.push(mode);
    }

    /// Pop the top frame, returning it.
    ///
    /// # Panics
    ///
    /// Popping the implicit `Default` frame is a contract violation; no
    /// scanner does it for a stack decoded from a valid state.
    #[inline]
    pub fn pop(&mut self) -> Mode {
        match self.frames.pop() {
            Some(mode) => mode,
            None => panic!("lexer state stack underflow"),
        }
    }

    /// Switch the top frame to `mode`, as a pop followed by a push.
    ///
    /// On the implicit bottom this pushes instead, leaving `Default` beneath.
    #[inline]
    pub fn replace(&mut self, mode: Mode) {
        match self.frames.last_mut() {
            Some(top) => *top = mode,
            None => self.frames.push(mode),
        }
    }

    /// Number of pushed frames, excluding the implicit bottom.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if only the implicit `Default` frame is left.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pushed frames, outermost first.
    pub fn frames(&self) -> &[Mode] {
        &self.frames
    }

    /// Pack the stack into a [`LexerState`], or [`LexerState::OVERFLOW`]
    /// if it is deeper than [`MAX_ENCODED_FRAMES`].
    pub fn encode(&self) -> LexerState {
        if self.frames.len() > MAX_ENCODED_FRAMES {
            return LexerState::OVERFLOW;
        }
        let raw = self.frames.iter().fold(0u128, |acc, mode| {
            (acc << FRAME_BITS) | u128::from(mode.code() + 1)
        });
        LexerState(raw)
    }
}
