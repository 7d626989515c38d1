//! Token kinds for the annotation lexer
//!
//! Only the tokens that can take part in an annotation macro get a kind of
//! their own. Everything else in a host source file lexes to `ERROR` and
//! never participates in a match.

/// All token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA (whitespace and comments - skipped inside argument lists)
    // =========================================================================
    WHITESPACE = 0,
    LINE_COMMENT,
    BLOCK_COMMENT,

    // =========================================================================
    // LITERALS
    // =========================================================================
    IDENT,  // identifier, `\w+`
    STRING, // string or character literal

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    L_PAREN,   // (
    R_PAREN,   // )
    COMMA,     // ,
    SEMICOLON, // ;

    // =========================================================================
    // KEYWORDS - declaration macros
    // =========================================================================
    DECLARE_TYPE_KW,
    DECLARE_GENERIC_TYPE_KW,
    DECLARE_TYPE_ALIAS_KW,
    DECLARE_RESOURCE_KW,
    DECLARE_PROPERTY_KW,
    DECLARE_PROPERTY_GETTER_KW,
    DECLARE_PROPERTY_SETTER_KW,
    DECLARE_FUNCTION_KW,
    DECLARE_TYPE_FUNCTION_KW,
    DECLARE_MEMBER_FUNCTION_KW,
    DECLARE_MUTABLE_MEMBER_FUNCTION_KW,

    // =========================================================================
    // KEYWORDS - argument markers
    // =========================================================================
    TYPE_KW,
    GENERIC_TYPE_KW,
    GENERIC_KW,
    PARAMETER_KW,
    GENERIC_PARAMETER_KW,
    FUNCTION_KW,
    RESULT_KW,

    // =========================================================================
    // SPECIAL
    // =========================================================================
    ERROR,
}

impl SyntaxKind {
    /// Check if this is trivia (whitespace or comment)
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::WHITESPACE | Self::LINE_COMMENT | Self::BLOCK_COMMENT
        )
    }

    /// Check if this is a keyword
    pub fn is_keyword(self) -> bool {
        (self as u16) >= (Self::DECLARE_TYPE_KW as u16) && (self as u16) <= (Self::RESULT_KW as u16)
    }

    /// Check if this token can stand for a bare `\w+` name.
    ///
    /// Keywords are words too, so `DECLARE_PROPERTY(TYPE(a, b, C), TYPE, ...)`
    /// names a property called `TYPE`.
    pub fn is_word(self) -> bool {
        self == Self::IDENT || self.is_keyword()
    }

    /// Check if this keyword opens a declaration form
    pub fn is_declaration_keyword(self) -> bool {
        (self as u16) >= (Self::DECLARE_TYPE_KW as u16)
            && (self as u16) <= (Self::DECLARE_MUTABLE_MEMBER_FUNCTION_KW as u16)
    }

    /// Get a human-readable name for this kind
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::LINE_COMMENT => "line comment",
            Self::BLOCK_COMMENT => "block comment",
            Self::IDENT => "identifier",
            Self::STRING => "string literal",
            Self::L_PAREN => "'('",
            Self::R_PAREN => "')'",
            Self::COMMA => "','",
            Self::SEMICOLON => "';'",
            Self::DECLARE_TYPE_KW => "'DECLARE_TYPE'",
            Self::DECLARE_GENERIC_TYPE_KW => "'DECLARE_GENERIC_TYPE'",
            Self::DECLARE_TYPE_ALIAS_KW => "'DECLARE_TYPE_ALIAS'",
            Self::DECLARE_RESOURCE_KW => "'DECLARE_RESOURCE'",
            Self::DECLARE_PROPERTY_KW => "'DECLARE_PROPERTY'",
            Self::DECLARE_PROPERTY_GETTER_KW => "'DECLARE_PROPERTY_GETTER'",
            Self::DECLARE_PROPERTY_SETTER_KW => "'DECLARE_PROPERTY_SETTER'",
            Self::DECLARE_FUNCTION_KW => "'DECLARE_FUNCTION'",
            Self::DECLARE_TYPE_FUNCTION_KW => "'DECLARE_TYPE_FUNCTION'",
            Self::DECLARE_MEMBER_FUNCTION_KW => "'DECLARE_MEMBER_FUNCTION'",
            Self::DECLARE_MUTABLE_MEMBER_FUNCTION_KW => "'DECLARE_MUTABLE_MEMBER_FUNCTION'",
            Self::TYPE_KW => "'TYPE'",
            Self::GENERIC_TYPE_KW => "'GENERIC_TYPE'",
            Self::GENERIC_KW => "'GENERIC'",
            Self::PARAMETER_KW => "'PARAMETER'",
            Self::GENERIC_PARAMETER_KW => "'GENERIC_PARAMETER'",
            Self::FUNCTION_KW => "'FUNCTION'",
            Self::RESULT_KW => "'RESULT'",
            Self::ERROR => "error",
        }
    }
}
