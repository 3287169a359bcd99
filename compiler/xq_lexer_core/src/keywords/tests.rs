use super::*;

#[test]
fn table_is_strictly_sorted() {
    for pair in KEYWORDS.windows(2) {
        assert!(
            pair[0].0.as_bytes() < pair[1].0.as_bytes(),
            "{:?} must sort before {:?}",
            pair[0].0,
            pair[1].0
        );
    }
}

#[test]
fn every_entry_spells_its_kind() {
    for &(spelling, kind) in KEYWORDS {
        assert!(kind.is_keyword(), "{spelling} maps to non-keyword {kind:?}");
        assert_eq!(kind.lexeme(), Some(spelling));
    }
}

#[test]
fn length_bounds_match_table() {
    let min = KEYWORDS.iter().map(|(s, _)| s.len()).min();
    let max = KEYWORDS.iter().map(|(s, _)| s.len()).max();
    assert_eq!(min, Some(MIN_KEYWORD_LEN));
    assert_eq!(max, Some(MAX_KEYWORD_LEN));
}

#[test]
fn every_entry_is_found() {
    for &(spelling, kind) in KEYWORDS {
        assert_eq!(lookup(spelling), Some(kind), "{spelling}");
    }
}

#[test]
fn lookup_common_keywords() {
    assert_eq!(lookup("let"), Some(TokenKind::KwLet));
    assert_eq!(lookup("for"), Some(TokenKind::KwFor));
    assert_eq!(lookup("NaN"), Some(TokenKind::KwNaN));
    assert_eq!(lookup("ancestor-or-self"), Some(TokenKind::KwAncestorOrSelf));
    assert_eq!(lookup("ft-option"), Some(TokenKind::KwFtOption));
    assert_eq!(
        lookup("processing-instruction"),
        Some(TokenKind::KwProcessingInstruction)
    );
}

#[test]
fn lookup_is_case_sensitive() {
    assert_eq!(lookup("LET"), None);
    assert_eq!(lookup("Let"), None);
    assert_eq!(lookup("nan"), None);
}

#[test]
fn lookup_rejects_non_keywords() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("lets"), None);
    assert_eq!(lookup("_let"), None);
    assert_eq!(lookup("processing-instructions"), None);
    assert_eq!(lookup("é-let"), None);
}
