//! The token-kind registry.

/// Kind of a lexed token.
///
/// Discriminants are grouped into stable ranges so that adding a kind never
/// renumbers an existing one:
///
/// | Range     | Category                               |
/// |-----------|----------------------------------------|
/// | 0-63      | Literals, names, trivia, comments      |
/// | 64-159    | Punctuation and operators              |
/// | 160-223   | Direct constructor markup              |
/// | 224-253   | Entity and character references        |
/// | 254-255   | Error sentinels                        |
/// | 512-      | Keywords, one kind per spelling        |
///
/// Keyword variants are named after their spelling (`KwAncestorOrSelf` is
/// `ancestor-or-self`) and are kept in alphabetical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum TokenKind {
    // === Literals, names, trivia (0-63) ===
    IntegerLiteral = 0,
    DecimalLiteral = 1,
    DoubleLiteral = 2,
    /// `e`, `E`, optionally followed by a sign, with no exponent digits.
    PartialDoubleLiteralExponent = 3,
    StringLiteralStart = 4,
    StringLiteralContents = 5,
    StringLiteralEnd = 6,
    /// A doubled string delimiter: `""` or `''`.
    EscapedCharacter = 7,
    BracedUriLiteralStart = 8,
    BracedUriLiteralEnd = 9,
    StringConstructorStart = 10,
    StringConstructorContents = 11,
    StringConstructorEnd = 12,
    StringInterpolationOpen = 13,
    StringInterpolationClose = 14,
    NcName = 15,
    Whitespace = 16,
    CommentStartTag = 17,
    Comment = 18,
    CommentEndTag = 19,
    PragmaBegin = 20,
    PragmaContents = 21,
    PragmaEnd = 22,

    // === Punctuation and operators (64-159) ===
    ParenthesisOpen = 64,
    ParenthesisClose = 65,
    SquareOpen = 66,
    SquareClose = 67,
    BlockOpen = 68,
    BlockClose = 69,
    Comma = 70,
    Separator = 71,
    QNameSeparator = 72,
    AxisSeparator = 73,
    AssignEqual = 74,
    VariableIndicator = 75,
    AnnotationIndicator = 76,
    FunctionRefOperator = 77,
    AttributeSelector = 78,
    Dot = 79,
    ParentSelector = 80,
    Ellipsis = 81,
    DirectDescendantsPath = 82,
    AllDescendantsPath = 83,
    Star = 84,
    Plus = 85,
    Minus = 86,
    Equal = 87,
    NotEqual = 88,
    LessThan = 89,
    LessThanOrEqual = 90,
    GreaterThan = 91,
    GreaterThanOrEqual = 92,
    NodeBefore = 93,
    NodeAfter = 94,
    Union = 95,
    Concatenation = 96,
    MapOperator = 97,
    Arrow = 98,
    ThinArrow = 99,
    Optional = 100,

    // === Direct constructor markup (160-223) ===
    OpenXmlTag = 160,
    EndXmlTag = 161,
    CloseXmlTag = 162,
    SelfClosingXmlTag = 163,
    XmlTagNcName = 164,
    XmlTagQNameSeparator = 165,
    XmlAttributeNcName = 166,
    XmlAttributeQNameSeparator = 167,
    XmlWhitespace = 168,
    XmlEqual = 169,
    XmlAttributeValueStart = 170,
    XmlAttributeValueContents = 171,
    XmlAttributeValueEnd = 172,
    /// `{{`, `}}`, or a doubled attribute value delimiter.
    XmlEscapedCharacter = 173,
    XmlElementContents = 174,
    XmlCommentStartTag = 175,
    XmlComment = 176,
    XmlCommentEndTag = 177,
    CdataSectionStartTag = 178,
    CdataSection = 179,
    CdataSectionEndTag = 180,
    ProcessingInstructionBegin = 181,
    XmlPiTargetNcName = 182,
    ProcessingInstructionContents = 183,
    ProcessingInstructionEnd = 184,

    // === Entity and character references (224-253) ===
    /// `&name;` in a string literal or element content.
    PredefinedEntityReference = 224,
    /// `&#nnn;` or `&#xHHHH;` in a string literal or element content.
    CharacterReference = 225,
    /// A reference missing its terminating `;`, including a bare `&`.
    PartialEntityReference = 226,
    /// `&;`
    EmptyEntityReference = 227,
    XmlPredefinedEntityReference = 228,
    XmlCharacterReference = 229,
    XmlPartialEntityReference = 230,
    XmlEmptyEntityReference = 231,

    // === Error sentinels (254-255) ===
    /// A single code point the active mode cannot classify.
    BadCharacter = 254,
    /// Zero-length marker after an unterminated nested construct.
    UnexpectedEndOfBlock = 255,

    // === Keywords (512-) ===
    KwNaN = 512,
    KwAfter,
    KwAll,
    KwAllowing,
    KwAncestor,
    KwAncestorOrSelf,
    KwAnd,
    KwAny,
    KwArray,
    KwArrayNode,
    KwAs,
    KwAscending,
    KwAssignable,
    KwAt,
    KwAttribute,
    KwBaseUri,
    KwBefore,
    KwBinary,
    KwBlock,
    KwBooleanNode,
    KwBoundarySpace,
    KwBy,
    KwCase,
    KwCast,
    KwCastable,
    KwCatch,
    KwChild,
    KwCollation,
    KwComment,
    KwConstruction,
    KwContains,
    KwContent,
    KwContext,
    KwCopy,
    KwCopyNamespaces,
    KwCount,
    KwDecimalFormat,
    KwDecimalSeparator,
    KwDeclare,
    KwDefault,
    KwDelete,
    KwDescendant,
    KwDescendantOrSelf,
    KwDescending,
    KwDiacritics,
    KwDifferent,
    KwDigit,
    KwDistance,
    KwDiv,
    KwDocument,
    KwDocumentNode,
    KwElement,
    KwElse,
    KwEmpty,
    KwEmptySequence,
    KwEncoding,
    KwEnd,
    KwEntire,
    KwEnum,
    KwEq,
    KwEvery,
    KwExactly,
    KwExcept,
    KwExit,
    KwExponentSeparator,
    KwExternal,
    KwFinally,
    KwFirst,
    KwFixed,
    KwFn,
    KwFollowing,
    KwFollowingSibling,
    KwFor,
    KwFrom,
    KwFtOption,
    KwFtand,
    KwFtnot,
    KwFtor,
    KwFunction,
    KwGe,
    KwGreatest,
    KwGroup,
    KwGroupingSeparator,
    KwGt,
    KwIdiv,
    KwIf,
    KwImport,
    KwIn,
    KwInfinity,
    KwInherit,
    KwInsensitive,
    KwInsert,
    KwInstance,
    KwIntersect,
    KwInto,
    KwInvoke,
    KwIs,
    KwItem,
    KwKey,
    KwLanguage,
    KwLast,
    KwLax,
    KwLe,
    KwLeast,
    KwLet,
    KwLevels,
    KwLowercase,
    KwLt,
    KwMap,
    KwMember,
    KwMinusSign,
    KwMod,
    KwModify,
    KwModule,
    KwMost,
    KwNamespace,
    KwNamespaceNode,
    KwNe,
    KwNext,
    KwNoInherit,
    KwNoPreserve,
    KwNode,
    KwNodes,
    KwNot,
    KwNullNode,
    KwNumberNode,
    KwObjectNode,
    KwOccurs,
    KwOf,
    KwOnly,
    KwOption,
    KwOr,
    KwOrder,
    KwOrdered,
    KwOrdering,
    KwOtherwise,
    KwParagraph,
    KwParagraphs,
    KwParent,
    KwPatternSeparator,
    KwPerMille,
    KwPercent,
    KwPhrase,
    KwPreceding,
    KwPrecedingSibling,
    KwPreserve,
    KwPrevious,
    KwPrivate,
    KwProcessingInstruction,
    KwRecord,
    KwRelationship,
    KwRename,
    KwReplace,
    KwReturn,
    KwReturning,
    KwRevalidation,
    KwSame,
    KwSatisfies,
    KwSchema,
    KwSchemaAttribute,
    KwSchemaElement,
    KwScore,
    KwSelf,
    KwSensitive,
    KwSentence,
    KwSentences,
    KwSequential,
    KwSimple,
    KwSkip,
    KwSliding,
    KwSome,
    KwStable,
    KwStart,
    KwStemming,
    KwStop,
    KwStrict,
    KwStrip,
    KwStylesheet,
    KwSwitch,
    KwText,
    KwThen,
    KwThesaurus,
    KwTimes,
    KwTo,
    KwTransform,
    KwTreat,
    KwTry,
    KwTumbling,
    KwTuple,
    KwType,
    KwTypeswitch,
    KwUnassignable,
    KwUnion,
    KwUnordered,
    KwUpdate,
    KwUpdating,
    KwUppercase,
    KwUsing,
    KwValidate,
    KwValue,
    KwVariable,
    KwVersion,
    KwWeight,
    KwWhen,
    KwWhere,
    KwWhile,
    KwWildcards,
    KwWindow,
    KwWith,
    KwWithout,
    KwWord,
    KwWords,
    KwXquery,
    KwZeroDigit,
}

impl TokenKind {
    /// First keyword discriminant.
    const FIRST_KEYWORD: u16 = 512;

    /// Stable numeric identifier of this kind.
    #[inline]
    pub const fn id(self) -> u16 {
        self as u16
    }

    /// Returns `true` for the reserved and contextual keyword kinds.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        self.id() >= Self::FIRST_KEYWORD
    }

    /// Returns `true` for tokens a parser skips between significant tokens.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace
                | TokenKind::XmlWhitespace
                | TokenKind::CommentStartTag
                | TokenKind::Comment
                | TokenKind::CommentEndTag
        )
    }

    /// Returns `true` for the error-signalling kinds.
    ///
    /// Partial and empty references are not errors at this level; the
    /// parser decides how to report them.
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            TokenKind::BadCharacter | TokenKind::UnexpectedEndOfBlock
        )
    }

    /// Returns `true` for entity and character reference kinds.
    pub const fn is_reference(self) -> bool {
        matches!(self.id(), 224..=231)
    }

    /// The fixed source text of this kind, if it has one.
    ///
    /// Kinds with variable text (literals, names, contents) return `None`.
    pub const fn lexeme(self) -> Option<&'static str> {
        if self.is_keyword() {
            return Some(self.keyword_text());
        }
        let text = match self {
            TokenKind::BracedUriLiteralStart => "Q{",
            TokenKind::BracedUriLiteralEnd => "}",
            TokenKind::StringConstructorStart => "``[",
            TokenKind::StringConstructorEnd => "]``",
            TokenKind::StringInterpolationOpen => "`{",
            TokenKind::StringInterpolationClose => "}`",
            TokenKind::CommentStartTag => "(:",
            TokenKind::CommentEndTag => ":)",
            TokenKind::PragmaBegin => "(#",
            TokenKind::PragmaEnd => "#)",
            TokenKind::ParenthesisOpen => "(",
            TokenKind::ParenthesisClose => ")",
            TokenKind::SquareOpen => "[",
            TokenKind::SquareClose => "]",
            TokenKind::BlockOpen => "{",
            TokenKind::BlockClose => "}",
            TokenKind::Comma => ",",
            TokenKind::Separator => ";",
            TokenKind::QNameSeparator
            | TokenKind::XmlTagQNameSeparator
            | TokenKind::XmlAttributeQNameSeparator => ":",
            TokenKind::AxisSeparator => "::",
            TokenKind::AssignEqual => ":=",
            TokenKind::VariableIndicator => "$",
            TokenKind::AnnotationIndicator => "%",
            TokenKind::FunctionRefOperator => "#",
            TokenKind::AttributeSelector => "@",
            TokenKind::Dot => ".",
            TokenKind::ParentSelector => "..",
            TokenKind::Ellipsis => "...",
            TokenKind::DirectDescendantsPath => "/",
            TokenKind::AllDescendantsPath => "//",
            TokenKind::Star => "*",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Equal | TokenKind::XmlEqual => "=",
            TokenKind::NotEqual => "!=",
            TokenKind::LessThan | TokenKind::OpenXmlTag => "<",
            TokenKind::LessThanOrEqual => "<=",
            TokenKind::GreaterThan | TokenKind::EndXmlTag => ">",
            TokenKind::GreaterThanOrEqual => ">=",
            TokenKind::NodeBefore => "<<",
            TokenKind::NodeAfter => ">>",
            TokenKind::Union => "|",
            TokenKind::Concatenation => "||",
            TokenKind::MapOperator => "!",
            TokenKind::Arrow => "=>",
            TokenKind::ThinArrow => "->",
            TokenKind::Optional => "?",
            TokenKind::CloseXmlTag => "</",
            TokenKind::SelfClosingXmlTag => "/>",
            TokenKind::XmlCommentStartTag => "<!--",
            TokenKind::XmlCommentEndTag => "-->",
            TokenKind::CdataSectionStartTag => "<![CDATA[",
            TokenKind::CdataSectionEndTag => "]]>",
            TokenKind::ProcessingInstructionBegin => "<?",
            TokenKind::ProcessingInstructionEnd => "?>",
            TokenKind::EmptyEntityReference | TokenKind::XmlEmptyEntityReference => "&;",
            TokenKind::UnexpectedEndOfBlock => "",
            _ => return None,
        };
        Some(text)
    }

    /// Human-readable description, for diagnostics and token dumps.
    pub const fn name(self) -> &'static str {
        if self.is_keyword() {
            return self.keyword_text();
        }
        match self {
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::DecimalLiteral => "decimal literal",
            TokenKind::DoubleLiteral => "double literal",
            TokenKind::PartialDoubleLiteralExponent => "partial double literal exponent",
            TokenKind::StringLiteralStart => "string literal start",
            TokenKind::StringLiteralContents => "string literal contents",
            TokenKind::StringLiteralEnd => "string literal end",
            TokenKind::EscapedCharacter => "escaped character",
            TokenKind::BracedUriLiteralStart => "`Q{`",
            TokenKind::BracedUriLiteralEnd => "braced URI literal end",
            TokenKind::StringConstructorStart => "`` ``[ ``",
            TokenKind::StringConstructorContents => "string constructor contents",
            TokenKind::StringConstructorEnd => "`` ]`` ``",
            TokenKind::StringInterpolationOpen => "`` `{ ``",
            TokenKind::StringInterpolationClose => "`` }` ``",
            TokenKind::NcName => "NCName",
            TokenKind::Whitespace => "whitespace",
            TokenKind::CommentStartTag => "`(:`",
            TokenKind::Comment => "comment",
            TokenKind::CommentEndTag => "`:)`",
            TokenKind::PragmaBegin => "`(#`",
            TokenKind::PragmaContents => "pragma contents",
            TokenKind::PragmaEnd => "`#)`",
            TokenKind::ParenthesisOpen => "`(`",
            TokenKind::ParenthesisClose => "`)`",
            TokenKind::SquareOpen => "`[`",
            TokenKind::SquareClose => "`]`",
            TokenKind::BlockOpen => "`{`",
            TokenKind::BlockClose => "`}`",
            TokenKind::Comma => "`,`",
            TokenKind::Separator => "`;`",
            TokenKind::QNameSeparator => "`:`",
            TokenKind::AxisSeparator => "`::`",
            TokenKind::AssignEqual => "`:=`",
            TokenKind::VariableIndicator => "`$`",
            TokenKind::AnnotationIndicator => "`%`",
            TokenKind::FunctionRefOperator => "`#`",
            TokenKind::AttributeSelector => "`@`",
            TokenKind::Dot => "`.`",
            TokenKind::ParentSelector => "`..`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::DirectDescendantsPath => "`/`",
            TokenKind::AllDescendantsPath => "`//`",
            TokenKind::Star => "`*`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Equal => "`=`",
            TokenKind::NotEqual => "`!=`",
            TokenKind::LessThan => "`<`",
            TokenKind::LessThanOrEqual => "`<=`",
            TokenKind::GreaterThan => "`>`",
            TokenKind::GreaterThanOrEqual => "`>=`",
            TokenKind::NodeBefore => "`<<`",
            TokenKind::NodeAfter => "`>>`",
            TokenKind::Union => "`|`",
            TokenKind::Concatenation => "`||`",
            TokenKind::MapOperator => "`!`",
            TokenKind::Arrow => "`=>`",
            TokenKind::ThinArrow => "`->`",
            TokenKind::Optional => "`?`",
            TokenKind::OpenXmlTag => "open tag `<`",
            TokenKind::EndXmlTag => "end of tag `>`",
            TokenKind::CloseXmlTag => "`</`",
            TokenKind::SelfClosingXmlTag => "`/>`",
            TokenKind::XmlTagNcName => "element name",
            TokenKind::XmlTagQNameSeparator => "element name `:`",
            TokenKind::XmlAttributeNcName => "attribute name",
            TokenKind::XmlAttributeQNameSeparator => "attribute name `:`",
            TokenKind::XmlWhitespace => "markup whitespace",
            TokenKind::XmlEqual => "attribute `=`",
            TokenKind::XmlAttributeValueStart => "attribute value start",
            TokenKind::XmlAttributeValueContents => "attribute value contents",
            TokenKind::XmlAttributeValueEnd => "attribute value end",
            TokenKind::XmlEscapedCharacter => "markup escaped character",
            TokenKind::XmlElementContents => "element contents",
            TokenKind::XmlCommentStartTag => "`<!--`",
            TokenKind::XmlComment => "XML comment",
            TokenKind::XmlCommentEndTag => "`-->`",
            TokenKind::CdataSectionStartTag => "`<![CDATA[`",
            TokenKind::CdataSection => "CDATA section",
            TokenKind::CdataSectionEndTag => "`]]>`",
            TokenKind::ProcessingInstructionBegin => "`<?`",
            TokenKind::XmlPiTargetNcName => "processing instruction target",
            TokenKind::ProcessingInstructionContents => "processing instruction contents",
            TokenKind::ProcessingInstructionEnd => "`?>`",
            TokenKind::PredefinedEntityReference => "entity reference",
            TokenKind::CharacterReference => "character reference",
            TokenKind::PartialEntityReference => "partial entity reference",
            TokenKind::EmptyEntityReference => "empty entity reference",
            TokenKind::XmlPredefinedEntityReference => "attribute entity reference",
            TokenKind::XmlCharacterReference => "attribute character reference",
            TokenKind::XmlPartialEntityReference => "partial attribute entity reference",
            TokenKind::XmlEmptyEntityReference => "empty attribute entity reference",
            TokenKind::BadCharacter => "bad character",
            TokenKind::UnexpectedEndOfBlock => "unexpected end of block",
            _ => "keyword",
        }
    }

    /// Spelling of a keyword kind. Non-keyword kinds map to the empty string.
    const fn keyword_text(self) -> &'static str {
        match self {
            TokenKind::KwNaN => "NaN",
            TokenKind::KwAfter => "after",
            TokenKind::KwAll => "all",
            TokenKind::KwAllowing => "allowing",
            TokenKind::KwAncestor => "ancestor",
            TokenKind::KwAncestorOrSelf => "ancestor-or-self",
            TokenKind::KwAnd => "and",
            TokenKind::KwAny => "any",
            TokenKind::KwArray => "array",
            TokenKind::KwArrayNode => "array-node",
            TokenKind::KwAs => "as",
            TokenKind::KwAscending => "ascending",
            TokenKind::KwAssignable => "assignable",
            TokenKind::KwAt => "at",
            TokenKind::KwAttribute => "attribute",
            TokenKind::KwBaseUri => "base-uri",
            TokenKind::KwBefore => "before",
            TokenKind::KwBinary => "binary",
            TokenKind::KwBlock => "block",
            TokenKind::KwBooleanNode => "boolean-node",
            TokenKind::KwBoundarySpace => "boundary-space",
            TokenKind::KwBy => "by",
            TokenKind::KwCase => "case",
            TokenKind::KwCast => "cast",
            TokenKind::KwCastable => "castable",
            TokenKind::KwCatch => "catch",
            TokenKind::KwChild => "child",
            TokenKind::KwCollation => "collation",
            TokenKind::KwComment => "comment",
            TokenKind::KwConstruction => "construction",
            TokenKind::KwContains => "contains",
            TokenKind::KwContent => "content",
            TokenKind::KwContext => "context",
            TokenKind::KwCopy => "copy",
            TokenKind::KwCopyNamespaces => "copy-namespaces",
            TokenKind::KwCount => "count",
            TokenKind::KwDecimalFormat => "decimal-format",
            TokenKind::KwDecimalSeparator => "decimal-separator",
            TokenKind::KwDeclare => "declare",
            TokenKind::KwDefault => "default",
            TokenKind::KwDelete => "delete",
            TokenKind::KwDescendant => "descendant",
            TokenKind::KwDescendantOrSelf => "descendant-or-self",
            TokenKind::KwDescending => "descending",
            TokenKind::KwDiacritics => "diacritics",
            TokenKind::KwDifferent => "different",
            TokenKind::KwDigit => "digit",
            TokenKind::KwDistance => "distance",
            TokenKind::KwDiv => "div",
            TokenKind::KwDocument => "document",
            TokenKind::KwDocumentNode => "document-node",
            TokenKind::KwElement => "element",
            TokenKind::KwElse => "else",
            TokenKind::KwEmpty => "empty",
            TokenKind::KwEmptySequence => "empty-sequence",
            TokenKind::KwEncoding => "encoding",
            TokenKind::KwEnd => "end",
            TokenKind::KwEntire => "entire",
            TokenKind::KwEnum => "enum",
            TokenKind::KwEq => "eq",
            TokenKind::KwEvery => "every",
            TokenKind::KwExactly => "exactly",
            TokenKind::KwExcept => "except",
            TokenKind::KwExit => "exit",
            TokenKind::KwExponentSeparator => "exponent-separator",
            TokenKind::KwExternal => "external",
            TokenKind::KwFinally => "finally",
            TokenKind::KwFirst => "first",
            TokenKind::KwFixed => "fixed",
            TokenKind::KwFn => "fn",
            TokenKind::KwFollowing => "following",
            TokenKind::KwFollowingSibling => "following-sibling",
            TokenKind::KwFor => "for",
            TokenKind::KwFrom => "from",
            TokenKind::KwFtOption => "ft-option",
            TokenKind::KwFtand => "ftand",
            TokenKind::KwFtnot => "ftnot",
            TokenKind::KwFtor => "ftor",
            TokenKind::KwFunction => "function",
            TokenKind::KwGe => "ge",
            TokenKind::KwGreatest => "greatest",
            TokenKind::KwGroup => "group",
            TokenKind::KwGroupingSeparator => "grouping-separator",
            TokenKind::KwGt => "gt",
            TokenKind::KwIdiv => "idiv",
            TokenKind::KwIf => "if",
            TokenKind::KwImport => "import",
            TokenKind::KwIn => "in",
            TokenKind::KwInfinity => "infinity",
            TokenKind::KwInherit => "inherit",
            TokenKind::KwInsensitive => "insensitive",
            TokenKind::KwInsert => "insert",
            TokenKind::KwInstance => "instance",
            TokenKind::KwIntersect => "intersect",
            TokenKind::KwInto => "into",
            TokenKind::KwInvoke => "invoke",
            TokenKind::KwIs => "is",
            TokenKind::KwItem => "item",
            TokenKind::KwKey => "key",
            TokenKind::KwLanguage => "language",
            TokenKind::KwLast => "last",
            TokenKind::KwLax => "lax",
            TokenKind::KwLe => "le",
            TokenKind::KwLeast => "least",
            TokenKind::KwLet => "let",
            TokenKind::KwLevels => "levels",
            TokenKind::KwLowercase => "lowercase",
            TokenKind::KwLt => "lt",
            TokenKind::KwMap => "map",
            TokenKind::KwMember => "member",
            TokenKind::KwMinusSign => "minus-sign",
            TokenKind::KwMod => "mod",
            TokenKind::KwModify => "modify",
            TokenKind::KwModule => "module",
            TokenKind::KwMost => "most",
            TokenKind::KwNamespace => "namespace",
            TokenKind::KwNamespaceNode => "namespace-node",
            TokenKind::KwNe => "ne",
            TokenKind::KwNext => "next",
            TokenKind::KwNoInherit => "no-inherit",
            TokenKind::KwNoPreserve => "no-preserve",
            TokenKind::KwNode => "node",
            TokenKind::KwNodes => "nodes",
            TokenKind::KwNot => "not",
            TokenKind::KwNullNode => "null-node",
            TokenKind::KwNumberNode => "number-node",
            TokenKind::KwObjectNode => "object-node",
            TokenKind::KwOccurs => "occurs",
            TokenKind::KwOf => "of",
            TokenKind::KwOnly => "only",
            TokenKind::KwOption => "option",
            TokenKind::KwOr => "or",
            TokenKind::KwOrder => "order",
            TokenKind::KwOrdered => "ordered",
            TokenKind::KwOrdering => "ordering",
            TokenKind::KwOtherwise => "otherwise",
            TokenKind::KwParagraph => "paragraph",
            TokenKind::KwParagraphs => "paragraphs",
            TokenKind::KwParent => "parent",
            TokenKind::KwPatternSeparator => "pattern-separator",
            TokenKind::KwPerMille => "per-mille",
            TokenKind::KwPercent => "percent",
            TokenKind::KwPhrase => "phrase",
            TokenKind::KwPreceding => "preceding",
            TokenKind::KwPrecedingSibling => "preceding-sibling",
            TokenKind::KwPreserve => "preserve",
            TokenKind::KwPrevious => "previous",
            TokenKind::KwPrivate => "private",
            TokenKind::KwProcessingInstruction => "processing-instruction",
            TokenKind::KwRecord => "record",
            TokenKind::KwRelationship => "relationship",
            TokenKind::KwRename => "rename",
            TokenKind::KwReplace => "replace",
            TokenKind::KwReturn => "return",
            TokenKind::KwReturning => "returning",
            TokenKind::KwRevalidation => "revalidation",
            TokenKind::KwSame => "same",
            TokenKind::KwSatisfies => "satisfies",
            TokenKind::KwSchema => "schema",
            TokenKind::KwSchemaAttribute => "schema-attribute",
            TokenKind::KwSchemaElement => "schema-element",
            TokenKind::KwScore => "score",
            TokenKind::KwSelf => "self",
            TokenKind::KwSensitive => "sensitive",
            TokenKind::KwSentence => "sentence",
            TokenKind::KwSentences => "sentences",
            TokenKind::KwSequential => "sequential",
            TokenKind::KwSimple => "simple",
            TokenKind::KwSkip => "skip",
            TokenKind::KwSliding => "sliding",
            TokenKind::KwSome => "some",
            TokenKind::KwStable => "stable",
            TokenKind::KwStart => "start",
            TokenKind::KwStemming => "stemming",
            TokenKind::KwStop => "stop",
            TokenKind::KwStrict => "strict",
            TokenKind::KwStrip => "strip",
            TokenKind::KwStylesheet => "stylesheet",
            TokenKind::KwSwitch => "switch",
            TokenKind::KwText => "text",
            TokenKind::KwThen => "then",
            TokenKind::KwThesaurus => "thesaurus",
            TokenKind::KwTimes => "times",
            TokenKind::KwTo => "to",
            TokenKind::KwTransform => "transform",
            TokenKind::KwTreat => "treat",
            TokenKind::KwTry => "try",
            TokenKind::KwTumbling => "tumbling",
            TokenKind::KwTuple => "tuple",
            TokenKind::KwType => "type",
            TokenKind::KwTypeswitch => "typeswitch",
            TokenKind::KwUnassignable => "unassignable",
            TokenKind::KwUnion => "union",
            TokenKind::KwUnordered => "unordered",
            TokenKind::KwUpdate => "update",
            TokenKind::KwUpdating => "updating",
            TokenKind::KwUppercase => "uppercase",
            TokenKind::KwUsing => "using",
            TokenKind::KwValidate => "validate",
            TokenKind::KwValue => "value",
            TokenKind::KwVariable => "variable",
            TokenKind::KwVersion => "version",
            TokenKind::KwWeight => "weight",
            TokenKind::KwWhen => "when",
            TokenKind::KwWhere => "where",
            TokenKind::KwWhile => "while",
            TokenKind::KwWildcards => "wildcards",
            TokenKind::KwWindow => "window",
            TokenKind::KwWith => "with",
            TokenKind::KwWithout => "without",
            TokenKind::KwWord => "word",
            TokenKind::KwWords => "words",
            TokenKind::KwXquery => "xquery",
            TokenKind::KwZeroDigit => "zero-digit",
            _ => "",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
