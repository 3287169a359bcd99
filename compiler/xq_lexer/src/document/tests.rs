use super::*;
use pretty_assertions::assert_eq;
use xq_ir::TokenKind;
use xq_lexer_core::{Mode, StateStack, MAX_ENCODED_FRAMES};

fn states(document: &LexedDocument) -> Vec<Option<LexerState>> {
    (0..document.len())
        .map(|index| document.state_before(index))
        .collect()
}

fn assert_matches_full_lex(document: &LexedDocument) {
    let full = LexedDocument::lex(document.text(), document.options());
    assert_eq!(document.tokens().to_vec(), full.tokens().to_vec());
    assert_eq!(states(document), states(&full));
}

fn kinds(document: &LexedDocument) -> Vec<TokenKind> {
    document.tokens().iter().map(|token| token.kind).collect()
}

// ─── Whole-document lexing ──────────────────────────────────────────

#[test]
fn lex_records_state_before_each_token() {
    let document = LexedDocument::lex(r#""a""#, LexerOptions::default());
    let mut in_string = StateStack::new();
    in_string.push(Mode::StringLiteralQuote);

    assert_eq!(
        states(&document),
        vec![
            Some(LexerState::DEFAULT),
            Some(in_string.encode()),
            Some(in_string.encode()),
        ]
    );
    assert_eq!(document.state_before(3), None);
}

#[test]
fn token_index_at_offsets() {
    let document = LexedDocument::lex("let $x", LexerOptions::default());
    assert_eq!(document.token_index_at(0), Some(0));
    assert_eq!(document.token_index_at(2), Some(0));
    assert_eq!(document.token_index_at(3), Some(1));
    assert_eq!(document.token_index_at(5), Some(3));
    assert_eq!(document.token_index_at(6), None);
}

#[test]
fn to_token_list_matches_tokens() {
    let document = LexedDocument::lex("1 to 3", LexerOptions::default());
    let list = document.to_token_list();
    assert_eq!(list.as_slice().to_vec(), document.tokens().to_vec());
    assert!(list.covers(6));
}

#[test]
fn empty_document() {
    let document = LexedDocument::lex("", LexerOptions::default());
    assert!(document.is_empty());
    assert_eq!(document.token_index_at(0), None);
}

// ─── Edits ──────────────────────────────────────────────────────────

#[test]
fn edit_reuses_tokens_after_the_change() {
    let mut document = LexedDocument::lex("(1, 2, 3)", LexerOptions::default());
    let summary = document.edit(1..2, "10");

    assert_eq!(
        summary,
        EditSummary {
            first: 0,
            removed: 2,
            inserted: 2,
        }
    );
    assert_eq!(summary.changed(), 0..2);
    assert_eq!(document.text(), "(10, 2, 3)");
    assert_matches_full_lex(&document);
}

#[test]
fn edit_opening_a_comment() {
    let mut document = LexedDocument::lex("1 + 2 :) 3", LexerOptions::default());
    let summary = document.edit(0..0, "(:");

    assert_eq!(summary.first, 0);
    assert_eq!(
        kinds(&document),
        vec![
            TokenKind::CommentStartTag,
            TokenKind::Comment,
            TokenKind::CommentEndTag,
            TokenKind::Whitespace,
            TokenKind::IntegerLiteral,
        ]
    );
    assert_matches_full_lex(&document);
}

#[test]
fn edit_closing_a_string() {
    let mut document = LexedDocument::lex(r#"("a, b)"#, LexerOptions::default());
    document.edit(3..3, "\"");
    assert_eq!(document.text(), r#"("a", b)"#);
    assert_matches_full_lex(&document);
}

#[test]
fn appending_turns_a_name_into_a_qname() {
    let mut document = LexedDocument::lex("a", LexerOptions::default());
    document.edit(1..1, ":b");

    assert_eq!(
        kinds(&document),
        vec![TokenKind::NcName, TokenKind::QNameSeparator, TokenKind::NcName]
    );
    assert_matches_full_lex(&document);
}

#[test]
fn edit_far_ahead_changes_start_tag_decision() {
    let mut document = LexedDocument::lex("$a <b   c 1", LexerOptions::default());
    assert_eq!(
        document.tokens().get(3).map(|token| token.kind),
        Some(TokenKind::LessThan)
    );

    document.edit(10..10, "= ");
    assert_eq!(
        document.tokens().get(3).map(|token| token.kind),
        Some(TokenKind::OpenXmlTag)
    );
    assert_matches_full_lex(&document);
}

#[test]
fn deleting_everything() {
    let mut document = LexedDocument::lex("let $x", LexerOptions::default());
    let summary = document.edit(0..6, "");

    assert!(document.is_empty());
    assert_eq!(
        summary,
        EditSummary {
            first: 0,
            removed: 4,
            inserted: 0,
        }
    );
}

#[test]
fn edit_inside_string_constructor_interpolation() {
    let mut document = LexedDocument::lex("``[a`{1}`b]``", LexerOptions::default());
    document.edit(6..7, "$x");
    assert_eq!(document.text(), "``[a`{$x}`b]``");
    assert_matches_full_lex(&document);
}

#[test]
fn edit_inside_element_content() {
    let text = "<a x='1'>text {1 + 2} more</a>";
    let mut document = LexedDocument::lex(text, LexerOptions::default());
    document.edit(10..10, "<b/>");
    assert_matches_full_lex(&document);
    document.edit(0..1, "");
    assert_matches_full_lex(&document);
}

#[test]
fn edit_below_unencodable_depth() {
    let depth = MAX_ENCODED_FRAMES + 2;
    let text = format!("{}1{}", "{".repeat(depth), "}".repeat(depth));
    let mut document = LexedDocument::lex(text, LexerOptions::default());
    assert!(document.state_before(MAX_ENCODED_FRAMES).is_some());
    assert_eq!(document.state_before(MAX_ENCODED_FRAMES + 1), None);

    let at = u32::try_from(depth).unwrap_or(u32::MAX);
    document.edit(at..at + 1, "2 + 3");
    assert_matches_full_lex(&document);
}

#[test]
fn deeply_nested_elements_keep_every_state() {
    let text = format!("{}x{}", "<a>".repeat(13), "</a>".repeat(13));
    let mut document = LexedDocument::lex(text, LexerOptions::default());
    assert!((0..document.len()).all(|index| document.state_before(index).is_some()));

    document.edit(39..40, "y");
    assert_matches_full_lex(&document);
}

#[test]
fn edit_in_xpath_document() {
    let mut document = LexedDocument::lex("$a < $b", LexerOptions::xpath());
    document.edit(4..4, "b");
    assert_eq!(document.options(), LexerOptions::xpath());
    assert_matches_full_lex(&document);
}

#[test]
fn several_edits_match_full_lex() {
    let mut document = LexedDocument::lex(
        "declare function local:f($x) { (: note :) $x + 1 };",
        LexerOptions::default(),
    );
    document.edit(32..32, "(: ");
    assert_matches_full_lex(&document);
    document.edit(32..35, "");
    assert_matches_full_lex(&document);
    document.edit(0..7, "define");
    assert_matches_full_lex(&document);
    let end = u32::try_from(document.text().len()).unwrap_or(u32::MAX);
    document.edit(end..end, " \"tail");
    assert_matches_full_lex(&document);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn edit_out_of_bounds_panics() {
    let mut document = LexedDocument::lex("abc", LexerOptions::default());
    document.edit(2..4, "");
}

#[test]
#[should_panic(expected = "splits a character")]
fn edit_splitting_a_character_panics() {
    let mut document = LexedDocument::lex("é", LexerOptions::default());
    document.edit(1..1, "x");
}
