//! Incremental re-lexing must agree with lexing the edited text from
//! scratch, whatever the edit.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use xq_lexer::{LexedDocument, LexerOptions, LexerState};

const FRAGMENTS: &[&str] = &[
    "let", "$x", " ", "\n", "1", "1e", ".5", "\"", "'", "(:", ":)", "(#", "#)", "<a", ">", "</a>",
    "/>", "=", "{", "}", "&amp;", "&", "<!--", "-->", "<![CDATA[", "]]>", "<?pi", "?>", "``[",
    "]``", "`{", "}`", "Q{", "xs:int", ":", "é", "<", "b=", "x",
];

fn fragment_text(max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(FRAGMENTS), 0..max)
        .prop_map(|parts| parts.concat())
}

fn any_options() -> impl Strategy<Value = LexerOptions> {
    prop_oneof![Just(LexerOptions::xquery()), Just(LexerOptions::xpath())]
}

/// Largest char boundary at or below `offset`.
fn floor_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

fn snapshot(document: &LexedDocument) -> (Vec<xq_lexer::Token>, Vec<Option<LexerState>>) {
    let states = (0..document.len())
        .map(|index| document.state_before(index))
        .collect();
    (document.tokens().to_vec(), states)
}

/// An edit as (start, length, replacement), with positions as fractions
/// of the text so they stay meaningful as the text changes.
fn any_edit() -> impl Strategy<Value = (f64, f64, String)> {
    (0.0..=1.0f64, 0.0..=0.5f64, fragment_text(4))
}

fn apply(document: &mut LexedDocument, (start, length, replacement): &(f64, f64, String)) {
    let len = document.text().len();
    // Truncating the scaled fraction is fine for choosing a position.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let scale = |fraction: f64| (fraction * len as f64) as usize;
    let start = floor_boundary(document.text(), scale(*start));
    let end = floor_boundary(document.text(), start + scale(*length)).max(start);
    let range = u32::try_from(start).unwrap()..u32::try_from(end).unwrap();
    document.edit(range, replacement);
}

proptest! {
    #[test]
    fn single_edit_matches_full_lex(
        text in fragment_text(24),
        edit in any_edit(),
        options in any_options(),
    ) {
        let mut document = LexedDocument::lex(text, options);
        apply(&mut document, &edit);
        let full = LexedDocument::lex(document.text(), options);
        prop_assert_eq!(snapshot(&document), snapshot(&full));
    }

    #[test]
    fn edit_sequences_match_full_lex(
        text in fragment_text(16),
        edits in proptest::collection::vec(any_edit(), 1..8),
        options in any_options(),
    ) {
        let mut document = LexedDocument::lex(text, options);
        for edit in &edits {
            apply(&mut document, edit);
            let full = LexedDocument::lex(document.text(), options);
            prop_assert_eq!(snapshot(&document), snapshot(&full));
        }
    }
}

#[test]
fn typing_a_query_character_by_character() {
    let query = "for $x in (1, 2) return <r v=\"{$x}\">{$x * 2}</r>";
    let mut document = LexedDocument::lex("", LexerOptions::default());
    for (offset, c) in query.char_indices() {
        let at = u32::try_from(offset).unwrap();
        document.edit(at..at, c.encode_utf8(&mut [0; 4]));
        let full = LexedDocument::lex(document.text(), LexerOptions::default());
        assert_eq!(snapshot(&document), snapshot(&full), "after {:?}", &query[..=offset]);
    }
}
