use super::*;
use crate::keywords::KEYWORDS;
use crate::mode::{Mode, MAX_ENCODED_FRAMES};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn len_u32(text: &str) -> u32 {
    u32::try_from(text.len()).unwrap_or(u32::MAX)
}

/// Every token with the state that was current before it.
fn lex_with_states(text: &str, options: LexerOptions) -> Vec<(Token, LexerState)> {
    let mut lexer = Lexer::new(options);
    lexer.start(text, 0, len_u32(text), LexerState::DEFAULT);
    let mut out = Vec::new();
    let mut before = LexerState::DEFAULT;
    while let Some(token) = lexer.advance() {
        out.push((token, before));
        before = lexer.state();
    }
    out
}

/// Lex `text[offset..]` from `state`, with spans relative to `offset`.
fn resume(text: &str, offset: u32, state: LexerState, options: LexerOptions) -> Vec<Token> {
    let tail = &text[offset as usize..];
    let mut lexer = Lexer::new(options);
    lexer.start(tail, 0, len_u32(tail), state);
    lexer.collect()
}

/// The tokens from `index` on, with spans relative to that token's start.
fn rest_from(all: &[(Token, LexerState)], index: usize) -> Vec<Token> {
    let offset = i64::from(all[index].0.span.start);
    all[index..]
        .iter()
        .map(|(t, _)| Token::new(t.kind, t.span.shift(-offset)))
        .collect()
}

/// `depth` nested elements around `x`.
fn nested_elements(depth: usize) -> String {
    format!("{}x{}", "<a>".repeat(depth), "</a>".repeat(depth))
}

// ─── Host contract ──────────────────────────────────────────────────

#[test]
fn host_contract_accessors() {
    let text = "let $x";
    let mut lexer = Lexer::new(LexerOptions::default());
    lexer.start(text, 0, len_u32(text), LexerState::DEFAULT);
    assert_eq!(lexer.token(), None);
    assert_eq!(lexer.token_start(), 0);

    assert!(lexer.advance().is_some());
    assert_eq!(lexer.token_kind(), Some(TokenKind::KwLet));
    assert_eq!((lexer.token_start(), lexer.token_end()), (0, 3));
    assert_eq!(lexer.state(), LexerState::DEFAULT);

    let rest: Vec<TokenKind> = lexer.by_ref().map(|token| token.kind).collect();
    assert_eq!(
        rest,
        vec![
            TokenKind::Whitespace,
            TokenKind::VariableIndicator,
            TokenKind::NcName
        ]
    );
    assert_eq!(lexer.advance(), None);
    assert_eq!(lexer.token_kind(), None);
    assert_eq!(lexer.token_start(), 6);
}

#[test]
fn state_tracks_open_constructs() {
    let text = "(: x";
    let mut lexer = Lexer::new(LexerOptions::default());
    lexer.start(text, 0, len_u32(text), LexerState::DEFAULT);
    lexer.advance();
    assert_eq!(lexer.stack().frames(), &[Mode::Comment]);
    lexer.advance();
    assert_eq!(lexer.stack().frames(), &[Mode::UnexpectedEndOfBlock]);
    lexer.advance();
    assert!(lexer.stack().is_empty());
}

#[test]
fn start_within_a_range() {
    let text = "aaa (: c :) bbb";
    let mut lexer = Lexer::new(LexerOptions::default());
    let mut comment = StateStack::new();
    comment.push(Mode::Comment);
    lexer.start(text, 6, 9, comment.encode());
    let tokens: Vec<Token> = lexer.collect();
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Comment, xq_ir::Span::new(6, 9)),
            Token::new(TokenKind::UnexpectedEndOfBlock, xq_ir::Span::new(9, 9)),
        ]
    );
}

#[test]
fn try_start_reports_invalid_state() {
    let mut lexer = Lexer::new(LexerOptions::default());
    let err = lexer.try_start("x", 0, 1, LexerState::from_raw(31));
    assert!(matches!(err, Err(InvalidState::UnknownMode { .. })));
}

#[test]
#[should_panic(expected = "invalid lexer state")]
fn start_panics_on_invalid_state() {
    let mut lexer = Lexer::new(LexerOptions::default());
    lexer.start("x", 0, 1, LexerState::from_raw(u128::MAX));
}

#[test]
fn advance_after_end_keeps_returning_none() {
    let mut lexer = Lexer::new(LexerOptions::default());
    lexer.start("", 0, 0, LexerState::DEFAULT);
    assert_eq!(lexer.advance(), None);
    assert_eq!(lexer.advance(), None);
}

#[test]
fn tokenize_covers_source() {
    let source = "for $i in 1 to 3 return <a b=\"{$i}\">{$i}</a>";
    let tokens = tokenize(source, LexerOptions::default());
    assert!(tokens.covers(len_u32(source)));
}

// ─── Keywords ───────────────────────────────────────────────────────

#[test]
fn keywords_lex_as_themselves() {
    for &(spelling, kind) in KEYWORDS {
        let tokens = tokenize(spelling, LexerOptions::default());
        assert_eq!(tokens.kinds(), vec![kind], "{spelling}");
    }
}

// ─── Resumability ───────────────────────────────────────────────────

#[test]
fn resume_inside_string_constructor_interpolation() {
    let text = "``[a`{ {1} }`b]``";
    let options = LexerOptions::default();
    let all = lex_with_states(text, options);
    for (index, &(token, state)) in all.iter().enumerate() {
        assert_eq!(
            resume(text, token.span.start, state, options),
            rest_from(&all, index)
        );
    }
}

#[test]
fn resume_inside_thirteen_nested_elements() {
    let text = nested_elements(13);
    let options = LexerOptions::default();
    let all = lex_with_states(&text, options);
    for (index, &(token, state)) in all.iter().enumerate() {
        assert!(state.is_resumable(), "boundary {}", token.span.start);
        assert_eq!(
            resume(&text, token.span.start, state, options),
            rest_from(&all, index),
            "boundary {}",
            token.span.start
        );
    }
}

#[test]
fn nesting_past_the_encodable_depth_is_not_resumable() {
    let depth = MAX_ENCODED_FRAMES + 2;
    let text = nested_elements(depth);
    let options = LexerOptions::default();
    let all = lex_with_states(&text, options);

    let mut overflowed = 0;
    for (index, &(token, state)) in all.iter().enumerate() {
        if state.is_resumable() {
            assert_eq!(
                resume(&text, token.span.start, state, options),
                rest_from(&all, index)
            );
        } else {
            overflowed += 1;
            let mut lexer = Lexer::new(options);
            assert!(matches!(
                lexer.try_start(&text, token.span.start, len_u32(&text), state),
                Err(InvalidState::TooDeep { .. })
            ));
        }
    }
    assert!(overflowed > 0);
}

const FRAGMENTS: &[&str] = &[
    "let", "$x", " ", "\n", "1", "1e", ".5", "..", "\"", "'", "\"\"", "(:", ":)", "(#", "#)",
    "<a", "<a>", "</a>", "/>", ">", "=", "{", "}", "{{", "}}", "&amp;", "&", ";", "<!--", "-->",
    "<![CDATA[", "]]>", "<?pi", "?>", "``[", "]``", "`{", "}`", "Q{", "xs:int", ":", "^", "é",
    "<", "b=", "-", "x", "<a>", "<a>", "<a>",
];

fn fragment_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(FRAGMENTS), 0..24)
        .prop_map(|parts| parts.concat())
}

fn any_options() -> impl Strategy<Value = LexerOptions> {
    prop_oneof![Just(LexerOptions::xquery()), Just(LexerOptions::xpath())]
}

proptest! {
    #[test]
    fn tokens_cover_arbitrary_text(text in "\\PC{0,64}", options in any_options()) {
        let tokens = tokenize(&text, options);
        prop_assert!(tokens.covers(len_u32(&text)));
    }

    #[test]
    fn tokens_cover_fragment_text(text in fragment_text(), options in any_options()) {
        let tokens = tokenize(&text, options);
        prop_assert!(tokens.covers(len_u32(&text)));
    }

    #[test]
    fn resuming_at_any_boundary_matches(text in fragment_text(), options in any_options()) {
        let all = lex_with_states(&text, options);
        for (index, &(token, state)) in all.iter().enumerate() {
            let offset = token.span.start;
            if state.is_resumable() {
                prop_assert_eq!(resume(&text, offset, state, options), rest_from(&all, index));
            } else {
                let mut lexer = Lexer::new(options);
                prop_assert!(lexer.try_start(&text, offset, len_u32(&text), state).is_err());
            }
        }
    }
}

// ─── Lookahead ──────────────────────────────────────────────────────

#[test]
fn lookahead_end_covers_start_tag_decision() {
    let text = "<a   b = 1";
    let mut lexer = Lexer::new(LexerOptions::default());
    lexer.start(text, 0, len_u32(text), LexerState::DEFAULT);
    assert_eq!(lexer.advance().map(|t| t.kind), Some(TokenKind::OpenXmlTag));
    assert!(lexer.lookahead_end() > 7);
}
