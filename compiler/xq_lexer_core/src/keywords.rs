//! Keyword table.
//!
//! Exact, case-sensitive spelling to keyword kind. The table is a sorted
//! static array searched with a binary search; it spans XPath/XQuery 3.1 and
//! 4.0, Full-Text 3.0, the Update Facility, the Scripting Extension, and the
//! MarkLogic, Saxon and `BaseX` vendor extensions.
//!
//! Entries are in byte order, which is why `NaN` sorts first. Adding or
//! removing an entry changes how every identifier with that spelling lexes.

use xq_ir::TokenKind;

/// Shortest keyword spelling (`as`, `at`, `by`, ...).
const MIN_KEYWORD_LEN: usize = 2;

/// Longest keyword spelling (`processing-instruction`).
const MAX_KEYWORD_LEN: usize = 22;

/// Every keyword spelling, sorted by bytes.
pub static KEYWORDS: &[(&str, TokenKind)] = &[
    ("NaN", TokenKind::KwNaN),
    ("after", TokenKind::KwAfter),
    ("all", TokenKind::KwAll),
    ("allowing", TokenKind::KwAllowing),
    ("ancestor", TokenKind::KwAncestor),
    ("ancestor-or-self", TokenKind::KwAncestorOrSelf),
    ("and", TokenKind::KwAnd),
    ("any", TokenKind::KwAny),
    ("array", TokenKind::KwArray),
    ("array-node", TokenKind::KwArrayNode),
    ("as", TokenKind::KwAs),
    ("ascending", TokenKind::KwAscending),
    ("assignable", TokenKind::KwAssignable),
    ("at", TokenKind::KwAt),
    ("attribute", TokenKind::KwAttribute),
    ("base-uri", TokenKind::KwBaseUri),
    ("before", TokenKind::KwBefore),
    ("binary", TokenKind::KwBinary),
    ("block", TokenKind::KwBlock),
    ("boolean-node", TokenKind::KwBooleanNode),
    ("boundary-space", TokenKind::KwBoundarySpace),
    ("by", TokenKind::KwBy),
    ("case", TokenKind::KwCase),
    ("cast", TokenKind::KwCast),
    ("castable", TokenKind::KwCastable),
    ("catch", TokenKind::KwCatch),
    ("child", TokenKind::KwChild),
    ("collation", TokenKind::KwCollation),
    ("comment", TokenKind::KwComment),
    ("construction", TokenKind::KwConstruction),
    ("contains", TokenKind::KwContains),
    ("content", TokenKind::KwContent),
    ("context", TokenKind::KwContext),
    ("copy", TokenKind::KwCopy),
    ("copy-namespaces", TokenKind::KwCopyNamespaces),
    ("count", TokenKind::KwCount),
    ("decimal-format", TokenKind::KwDecimalFormat),
    ("decimal-separator", TokenKind::KwDecimalSeparator),
    ("declare", TokenKind::KwDeclare),
    ("default", TokenKind::KwDefault),
    ("delete", TokenKind::KwDelete),
    ("descendant", TokenKind::KwDescendant),
    ("descendant-or-self", TokenKind::KwDescendantOrSelf),
    ("descending", TokenKind::KwDescending),
    ("diacritics", TokenKind::KwDiacritics),
    ("different", TokenKind::KwDifferent),
    ("digit", TokenKind::KwDigit),
    ("distance", TokenKind::KwDistance),
    ("div", TokenKind::KwDiv),
    ("document", TokenKind::KwDocument),
    ("document-node", TokenKind::KwDocumentNode),
    ("element", TokenKind::KwElement),
    ("else", TokenKind::KwElse),
    ("empty", TokenKind::KwEmpty),
    ("empty-sequence", TokenKind::KwEmptySequence),
    ("encoding", TokenKind::KwEncoding),
    ("end", TokenKind::KwEnd),
    ("entire", TokenKind::KwEntire),
    ("enum", TokenKind::KwEnum),
    ("eq", TokenKind::KwEq),
    ("every", TokenKind::KwEvery),
    ("exactly", TokenKind::KwExactly),
    ("except", TokenKind::KwExcept),
    ("exit", TokenKind::KwExit),
    ("exponent-separator", TokenKind::KwExponentSeparator),
    ("external", TokenKind::KwExternal),
    ("finally", TokenKind::KwFinally),
    ("first", TokenKind::KwFirst),
    ("fixed", TokenKind::KwFixed),
    ("fn", TokenKind::KwFn),
    ("following", TokenKind::KwFollowing),
    ("following-sibling", TokenKind::KwFollowingSibling),
    ("for", TokenKind::KwFor),
    ("from", TokenKind::KwFrom),
    ("ft-option", TokenKind::KwFtOption),
    ("ftand", TokenKind::KwFtand),
    ("ftnot", TokenKind::KwFtnot),
    ("ftor", TokenKind::KwFtor),
    ("function", TokenKind::KwFunction),
    ("ge", TokenKind::KwGe),
    ("greatest", TokenKind::KwGreatest),
    ("group", TokenKind::KwGroup),
    ("grouping-separator", TokenKind::KwGroupingSeparator),
    ("gt", TokenKind::KwGt),
    ("idiv", TokenKind::KwIdiv),
    ("if", TokenKind::KwIf),
    ("import", TokenKind::KwImport),
    ("in", TokenKind::KwIn),
    ("infinity", TokenKind::KwInfinity),
    ("inherit", TokenKind::KwInherit),
    ("insensitive", TokenKind::KwInsensitive),
    ("insert", TokenKind::KwInsert),
    ("instance", TokenKind::KwInstance),
    ("intersect", TokenKind::KwIntersect),
    ("into", TokenKind::KwInto),
    ("invoke", TokenKind::KwInvoke),
    ("is", TokenKind::KwIs),
    ("item", TokenKind::KwItem),
    ("key", TokenKind::KwKey),
    ("language", TokenKind::KwLanguage),
    ("last", TokenKind::KwLast),
    ("lax", TokenKind::KwLax),
    ("le", TokenKind::KwLe),
    ("least", TokenKind::KwLeast),
    ("let", TokenKind::KwLet),
    ("levels", TokenKind::KwLevels),
    ("lowercase", TokenKind::KwLowercase),
    ("lt", TokenKind::KwLt),
    ("map", TokenKind::KwMap),
    ("member", TokenKind::KwMember),
    ("minus-sign", TokenKind::KwMinusSign),
    ("mod", TokenKind::KwMod),
    ("modify", TokenKind::KwModify),
    ("module", TokenKind::KwModule),
    ("most", TokenKind::KwMost),
    ("namespace", TokenKind::KwNamespace),
    ("namespace-node", TokenKind::KwNamespaceNode),
    ("ne", TokenKind::KwNe),
    ("next", TokenKind::KwNext),
    ("no-inherit", TokenKind::KwNoInherit),
    ("no-preserve", TokenKind::KwNoPreserve),
    ("node", TokenKind::KwNode),
    ("nodes", TokenKind::KwNodes),
    ("not", TokenKind::KwNot),
    ("null-node", TokenKind::KwNullNode),
    ("number-node", TokenKind::KwNumberNode),
    ("object-node", TokenKind::KwObjectNode),
    ("occurs", TokenKind::KwOccurs),
    ("of", TokenKind::KwOf),
    ("only", TokenKind::KwOnly),
    ("option", TokenKind::KwOption),
    ("or", TokenKind::KwOr),
    ("order", TokenKind::KwOrder),
    ("ordered", TokenKind::KwOrdered),
    ("ordering", TokenKind::KwOrdering),
    ("otherwise", TokenKind::KwOtherwise),
    ("paragraph", TokenKind::KwParagraph),
    ("paragraphs", TokenKind::KwParagraphs),
    ("parent", TokenKind::KwParent),
    ("pattern-separator", TokenKind::KwPatternSeparator),
    ("per-mille", TokenKind::KwPerMille),
    ("percent", TokenKind::KwPercent),
    ("phrase", TokenKind::KwPhrase),
    ("preceding", TokenKind::KwPreceding),
    ("preceding-sibling", TokenKind::KwPrecedingSibling),
    ("preserve", TokenKind::KwPreserve),
    ("previous", TokenKind::KwPrevious),
    ("private", TokenKind::KwPrivate),
    ("processing-instruction", TokenKind::KwProcessingInstruction),
    ("record", TokenKind::KwRecord),
    ("relationship", TokenKind::KwRelationship),
    ("rename", TokenKind::KwRename),
    ("replace", TokenKind::KwReplace),
    ("return", TokenKind::KwReturn),
    ("returning", TokenKind::KwReturning),
    ("revalidation", TokenKind::KwRevalidation),
    ("same", TokenKind::KwSame),
    ("satisfies", TokenKind::KwSatisfies),
    ("schema", TokenKind::KwSchema),
    ("schema-attribute", TokenKind::KwSchemaAttribute),
    ("schema-element", TokenKind::KwSchemaElement),
    ("score", TokenKind::KwScore),
    ("self", TokenKind::KwSelf),
    ("sensitive", TokenKind::KwSensitive),
    ("sentence", TokenKind::KwSentence),
    ("sentences", TokenKind::KwSentences),
    ("sequential", TokenKind::KwSequential),
    ("simple", TokenKind::KwSimple),
    ("skip", TokenKind::KwSkip),
    ("sliding", TokenKind::KwSliding),
    ("some", TokenKind::KwSome),
    ("stable", TokenKind::KwStable),
    ("start", TokenKind::KwStart),
    ("stemming", TokenKind::KwStemming),
    ("stop", TokenKind::KwStop),
    ("strict", TokenKind::KwStrict),
    ("strip", TokenKind::KwStrip),
    ("stylesheet", TokenKind::KwStylesheet),
    ("switch", TokenKind::KwSwitch),
    ("text", TokenKind::KwText),
    ("then", TokenKind::KwThen),
    ("thesaurus", TokenKind::KwThesaurus),
    ("times", TokenKind::KwTimes),
    ("to", TokenKind::KwTo),
    ("transform", TokenKind::KwTransform),
    ("treat", TokenKind::KwTreat),
    ("try", TokenKind::KwTry),
    ("tumbling", TokenKind::KwTumbling),
    ("tuple", TokenKind::KwTuple),
    ("type", TokenKind::KwType),
    ("typeswitch", TokenKind::KwTypeswitch),
    ("unassignable", TokenKind::KwUnassignable),
    ("union", TokenKind::KwUnion),
    ("unordered", TokenKind::KwUnordered),
    ("update", TokenKind::KwUpdate),
    ("updating", TokenKind::KwUpdating),
    ("uppercase", TokenKind::KwUppercase),
    ("using", TokenKind::KwUsing),
    ("validate", TokenKind::KwValidate),
    ("value", TokenKind::KwValue),
    ("variable", TokenKind::KwVariable),
    ("version", TokenKind::KwVersion),
    ("weight", TokenKind::KwWeight),
    ("when", TokenKind::KwWhen),
    ("where", TokenKind::KwWhere),
    ("while", TokenKind::KwWhile),
    ("wildcards", TokenKind::KwWildcards),
    ("window", TokenKind::KwWindow),
    ("with", TokenKind::KwWith),
    ("without", TokenKind::KwWithout),
    ("word", TokenKind::KwWord),
    ("words", TokenKind::KwWords),
    ("xquery", TokenKind::KwXquery),
    ("zero-digit", TokenKind::KwZeroDigit),
];

/// Look up the keyword kind for an `NCName`.
///
/// Returns `None` for identifiers that are not keywords. Cheap rejections
/// (length, first byte) run before the search since most names in a query
/// are not keywords.
#[inline]
pub fn lookup(text: &str) -> Option<TokenKind> {
    if !(MIN_KEYWORD_LEN..=MAX_KEYWORD_LEN).contains(&text.len()) {
        return None;
    }
    if !text.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }
    KEYWORDS
        .binary_search_by(|(spelling, _)| spelling.as_bytes().cmp(text.as_bytes()))
        .ok()
        .map(|index| KEYWORDS[index].1)
}

#[cfg(test)]
mod tests;
