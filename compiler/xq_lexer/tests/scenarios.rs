//! End-to-end lexing scenarios through the public API.
//!
//! Each test lexes a complete source and checks the exact token stream,
//! including the text each token covers.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use xq_lexer::{lex, LexerOptions, TokenKind};
use TokenKind::*;

fn lexed(source: &str) -> Vec<(TokenKind, &str)> {
    lex(source, LexerOptions::default())
        .iter()
        .map(|token| (token.kind, token.text(source)))
        .collect()
}

// ─── Comments ───────────────────────────────────────────────────────

#[test]
fn nested_comment_is_one_token() {
    assert_eq!(
        lexed("(: a (: b :) c :)"),
        vec![
            (CommentStartTag, "(:"),
            (Comment, " a (: b :) c "),
            (CommentEndTag, ":)"),
        ]
    );
}

#[test]
fn broken_inner_start_tag_closes_at_first_end_tag() {
    assert_eq!(
        lexed("(: a ( : b :) c :)"),
        vec![
            (CommentStartTag, "(:"),
            (Comment, " a ( : b "),
            (CommentEndTag, ":)"),
            (Whitespace, " "),
            (NcName, "c"),
            (Whitespace, " "),
            (CommentEndTag, ":)"),
        ]
    );
}

// ─── Literals ───────────────────────────────────────────────────────

#[test]
fn exponent_without_digits() {
    assert_eq!(
        lexed("1e"),
        vec![(IntegerLiteral, "1"), (PartialDoubleLiteralExponent, "e")]
    );
}

#[test]
fn doubled_quote_in_string() {
    assert_eq!(
        lexed(r#""One""Two""#),
        vec![
            (StringLiteralStart, "\""),
            (StringLiteralContents, "One"),
            (EscapedCharacter, "\"\""),
            (StringLiteralContents, "Two"),
            (StringLiteralEnd, "\""),
        ]
    );
}

// ─── Unterminated constructs ────────────────────────────────────────

#[test]
fn unterminated_pragma() {
    assert_eq!(
        lexed("(# let 2"),
        vec![
            (PragmaBegin, "(#"),
            (Whitespace, " "),
            (NcName, "let"),
            (Whitespace, " "),
            (PragmaContents, "2"),
            (UnexpectedEndOfBlock, ""),
        ]
    );
}

#[test]
fn unterminated_comment() {
    assert_eq!(
        lexed("(: open"),
        vec![
            (CommentStartTag, "(:"),
            (Comment, " open"),
            (UnexpectedEndOfBlock, ""),
        ]
    );
}

// ─── Whole queries ──────────────────────────────────────────────────

#[test]
fn flwor_with_constructor() {
    let source = "for $i in 1 to 3 return <li n=\"{$i}\">&lt;{$i}</li>";
    let kinds: Vec<TokenKind> = lexed(source)
        .into_iter()
        .map(|(kind, _)| kind)
        .filter(|kind| *kind != Whitespace)
        .collect();
    assert_eq!(
        kinds,
        vec![
            KwFor,
            VariableIndicator,
            NcName,
            KwIn,
            IntegerLiteral,
            KwTo,
            IntegerLiteral,
            KwReturn,
            OpenXmlTag,
            XmlTagNcName,
            XmlWhitespace,
            XmlAttributeNcName,
            XmlEqual,
            XmlAttributeValueStart,
            BlockOpen,
            VariableIndicator,
            NcName,
            BlockClose,
            XmlAttributeValueEnd,
            EndXmlTag,
            PredefinedEntityReference,
            BlockOpen,
            VariableIndicator,
            NcName,
            BlockClose,
            CloseXmlTag,
            XmlTagNcName,
            EndXmlTag,
        ]
    );
}

#[test]
fn xpath_has_no_markup() {
    let source = "$a <b";
    let kinds: Vec<TokenKind> = lex(source, LexerOptions::xpath()).kinds();
    assert_eq!(
        kinds,
        vec![VariableIndicator, NcName, Whitespace, LessThan, NcName]
    );
}

#[test]
fn every_source_is_covered() {
    let sources = [
        "",
        "]]>",
        "<a b='{{x}}'>&#x20;<![CDATA[ raw ]]><?pi data?><!-- c --></a>",
        "``[ `{ 1 }` ]``",
        "Q{http://example.com}local",
        "\u{0}\u{ffff}é",
    ];
    for source in sources {
        let tokens = lex(source, LexerOptions::default());
        let len = u32::try_from(source.len()).unwrap();
        assert!(tokens.covers(len), "{source:?}");
    }
}
