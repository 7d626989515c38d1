//! Full-text scanning for declaration forms
//!
//! A [`Scanner`] lexes one file once and then answers one query per
//! declaration form. Every query walks the *whole* token stream on its own,
//! so the caller decides the order in which forms are applied.
//!
//! Matches never overlap: after a successful match, scanning resumes behind
//! it. A keyword whose arguments do not fit the form is skipped silently.

use text_size::TextRange;

use super::ast::{
    FunctionDecl, GenericTypeDecl, Matched, PropertyDecl, ResourceDecl, TypeAliasDecl, TypeDecl,
};
use super::grammar::{self, Cursor};
use super::lexer::{Token, tokenize};
use super::syntax_kind::SyntaxKind;

pub struct Scanner<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            tokens: tokenize(text),
        }
    }

    pub fn type_declarations(&self) -> Vec<Matched<TypeDecl>> {
        self.scan(&[SyntaxKind::DECLARE_TYPE_KW], grammar::type_decl)
    }

    pub fn generic_type_declarations(&self) -> Vec<Matched<GenericTypeDecl>> {
        self.scan(
            &[SyntaxKind::DECLARE_GENERIC_TYPE_KW],
            grammar::generic_type_decl,
        )
    }

    pub fn type_aliases(&self) -> Vec<Matched<TypeAliasDecl>> {
        self.scan(&[SyntaxKind::DECLARE_TYPE_ALIAS_KW], grammar::type_alias_decl)
    }

    pub fn resources(&self) -> Vec<Matched<ResourceDecl>> {
        self.scan(&[SyntaxKind::DECLARE_RESOURCE_KW], grammar::resource_decl)
    }

    pub fn properties(&self) -> Vec<Matched<PropertyDecl>> {
        self.scan(&[SyntaxKind::DECLARE_PROPERTY_KW], grammar::property_decl)
    }

    pub fn property_getters(&self) -> Vec<Matched<PropertyDecl>> {
        self.scan(
            &[SyntaxKind::DECLARE_PROPERTY_GETTER_KW],
            grammar::property_decl,
        )
    }

    pub fn property_setters(&self) -> Vec<Matched<PropertyDecl>> {
        self.scan(
            &[SyntaxKind::DECLARE_PROPERTY_SETTER_KW],
            grammar::property_decl,
        )
    }

    /// Free and type-scoped functions together, in textual order.
    pub fn functions(&self) -> Vec<Matched<FunctionDecl>> {
        self.scan(
            &[
                SyntaxKind::DECLARE_FUNCTION_KW,
                SyntaxKind::DECLARE_TYPE_FUNCTION_KW,
                SyntaxKind::DECLARE_MEMBER_FUNCTION_KW,
                SyntaxKind::DECLARE_MUTABLE_MEMBER_FUNCTION_KW,
            ],
            grammar::function_decl,
        )
    }

    fn scan<T>(
        &self,
        keywords: &[SyntaxKind],
        parse: impl Fn(&mut Cursor<'_, 'a>) -> Option<T>,
    ) -> Vec<Matched<T>> {
        let mut matches = Vec::new();
        let mut idx = 0;

        while idx < self.tokens.len() {
            let token = &self.tokens[idx];
            if !keywords.contains(&token.kind) {
                idx += 1;
                continue;
            }

            let mut cursor = Cursor::new(&self.tokens, idx);
            match parse(&mut cursor) {
                Some(node) => {
                    let range = TextRange::new(token.offset, cursor.consumed_end());
                    tracing::trace!(
                        "[SCAN] {} at {:?}",
                        token.kind.display_name(),
                        range
                    );
                    matches.push(Matched {
                        node,
                        doc: grammar::doc_comment(&self.tokens, idx),
                        range,
                    });
                    idx = cursor.pos();
                }
                None => idx += 1,
            }
        }

        matches
    }
}
