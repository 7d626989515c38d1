//! Logos-based lexer for annotation macros
//!
//! Fast tokenization using the logos crate. The lexer is lossless: every
//! byte of the input belongs to exactly one token, so offsets can be mapped
//! back to the source for diagnostics.

use super::syntax_kind::SyntaxKind;
use logos::Logos;
use text_size::{TextRange, TextSize};

/// A token with its kind, text, and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    pub text: &'a str,
    pub offset: TextSize,
}

impl Token<'_> {
    pub fn range(&self) -> TextRange {
        TextRange::at(self.offset, TextSize::of(self.text))
    }
}

/// Lexer wrapping the logos-generated tokenizer
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, LogosToken>,
    offset: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: LogosToken::lexer(input),
            offset: 0,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let logos_token = self.inner.next()?;
        let text = self.inner.slice();
        let offset = TextSize::new(self.offset);
        self.offset += text.len() as u32;

        let kind = match logos_token {
            Ok(t) => t.into(),
            Err(()) => SyntaxKind::ERROR,
        };

        Some(Token { kind, text, offset })
    }
}

/// Tokenize an entire string into a Vec
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"//[^\n]*")]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/")]
    BlockComment,

    // =========================================================================
    // LITERALS
    // =========================================================================
    #[regex(r"[a-zA-Z0-9_]+")]
    Ident,

    // Opaque, so `"a/*b"` or `"http://x"` cannot open a comment
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\n]|\\.)*'")]
    Char,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // =========================================================================
    // KEYWORDS (exact words; a longer identifier wins in logos)
    // =========================================================================
    #[token("DECLARE_TYPE")]
    DeclareTypeKw,
    #[token("DECLARE_GENERIC_TYPE")]
    DeclareGenericTypeKw,
    #[token("DECLARE_TYPE_ALIAS")]
    DeclareTypeAliasKw,
    #[token("DECLARE_RESOURCE")]
    DeclareResourceKw,
    #[token("DECLARE_PROPERTY")]
    DeclarePropertyKw,
    #[token("DECLARE_PROPERTY_GETTER")]
    DeclarePropertyGetterKw,
    #[token("DECLARE_PROPERTY_SETTER")]
    DeclarePropertySetterKw,
    #[token("DECLARE_FUNCTION")]
    DeclareFunctionKw,
    #[token("DECLARE_TYPE_FUNCTION")]
    DeclareTypeFunctionKw,
    #[token("DECLARE_MEMBER_FUNCTION")]
    DeclareMemberFunctionKw,
    #[token("DECLARE_MUTABLE_MEMBER_FUNCTION")]
    DeclareMutableMemberFunctionKw,
    #[token("TYPE")]
    TypeKw,
    #[token("GENERIC_TYPE")]
    GenericTypeKw,
    #[token("GENERIC")]
    GenericKw,
    #[token("PARAMETER")]
    ParameterKw,
    #[token("GENERIC_PARAMETER")]
    GenericParameterKw,
    #[token("FUNCTION")]
    FunctionKw,
    #[token("RESULT")]
    ResultKw,
}

impl From<LogosToken> for SyntaxKind {
    fn from(token: LogosToken) -> Self {
        use LogosToken::*;
        match token {
            Whitespace => SyntaxKind::WHITESPACE,
            LineComment => SyntaxKind::LINE_COMMENT,
            BlockComment => SyntaxKind::BLOCK_COMMENT,
            Ident => SyntaxKind::IDENT,
            String | Char => SyntaxKind::STRING,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Comma => SyntaxKind::COMMA,
            Semicolon => SyntaxKind::SEMICOLON,
            DeclareTypeKw => SyntaxKind::DECLARE_TYPE_KW,
            DeclareGenericTypeKw => SyntaxKind::DECLARE_GENERIC_TYPE_KW,
            DeclareTypeAliasKw => SyntaxKind::DECLARE_TYPE_ALIAS_KW,
            DeclareResourceKw => SyntaxKind::DECLARE_RESOURCE_KW,
            DeclarePropertyKw => SyntaxKind::DECLARE_PROPERTY_KW,
            DeclarePropertyGetterKw => SyntaxKind::DECLARE_PROPERTY_GETTER_KW,
            DeclarePropertySetterKw => SyntaxKind::DECLARE_PROPERTY_SETTER_KW,
            DeclareFunctionKw => SyntaxKind::DECLARE_FUNCTION_KW,
            DeclareTypeFunctionKw => SyntaxKind::DECLARE_TYPE_FUNCTION_KW,
            DeclareMemberFunctionKw => SyntaxKind::DECLARE_MEMBER_FUNCTION_KW,
            DeclareMutableMemberFunctionKw => SyntaxKind::DECLARE_MUTABLE_MEMBER_FUNCTION_KW,
            TypeKw => SyntaxKind::TYPE_KW,
            GenericTypeKw => SyntaxKind::GENERIC_TYPE_KW,
            GenericKw => SyntaxKind::GENERIC_KW,
            ParameterKw => SyntaxKind::PARAMETER_KW,
            GenericParameterKw => SyntaxKind::GENERIC_PARAMETER_KW,
            FunctionKw => SyntaxKind::FUNCTION_KW,
            ResultKw => SyntaxKind::RESULT_KW,
        }
    }
}
