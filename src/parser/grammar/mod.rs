//! Grammar library for annotation macros
//!
//! The grammar is split into composable pieces:
//! - `fragments` - reference triples, `TYPE(...)`, generics, parameters, results
//! - `declarations` - the full `DECLARE_*` forms built from fragments
//! - `doc_comment` - the `//` block preceding a declaration
//!
//! Every parsing function takes a [`Cursor`] and returns `Option`: `None`
//! means "this is not the form", never an error. A failed attempt rewinds
//! the cursor so the caller can try something else.

mod declarations;
mod doc_comment;
mod fragments;

pub use declarations::{
    function_decl, generic_type_decl, property_decl, resource_decl, type_alias_decl, type_decl,
};
pub use doc_comment::doc_comment;
pub use fragments::{
    function_ref, generic, generic_type_arg, parameter, reference, result, type_ref,
    type_ref_with_generics,
};

use smol_str::SmolStr;
use text_size::TextSize;

use super::lexer::Token;
use super::syntax_kind::SyntaxKind;

/// A position in a token slice that skips trivia between significant tokens.
#[derive(Debug, Clone)]
pub struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>], pos: usize) -> Self {
        Self { tokens, pos }
    }

    /// Index of the next unconsumed token.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn skip_trivia(&mut self) {
        while self
            .tokens
            .get(self.pos)
            .is_some_and(|token| token.kind.is_trivia())
        {
            self.pos += 1;
        }
    }

    /// Kind of the next significant token, if any.
    pub fn current_kind(&mut self) -> Option<SyntaxKind> {
        self.skip_trivia();
        self.tokens.get(self.pos).map(|token| token.kind)
    }

    pub fn at(&mut self, kind: SyntaxKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Consume the next significant token if it has the given kind.
    pub fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume the next significant token if it is one of `kinds`, returning its kind.
    pub fn eat_any(&mut self, kinds: &[SyntaxKind]) -> Option<SyntaxKind> {
        let kind = self.current_kind()?;
        if kinds.contains(&kind) {
            self.pos += 1;
            Some(kind)
        } else {
            None
        }
    }

    /// `Some(())` when the token was consumed, for use with `?`.
    pub fn expect(&mut self, kind: SyntaxKind) -> Option<()> {
        self.eat(kind).then_some(())
    }

    /// Consume a bare word (`\w+`), keywords included.
    pub fn word(&mut self) -> Option<SmolStr> {
        self.skip_trivia();
        let token = self.tokens.get(self.pos)?;
        if token.kind.is_word() {
            self.pos += 1;
            Some(SmolStr::new(token.text))
        } else {
            None
        }
    }

    /// Run `parse`; on `None` rewind to where the attempt started.
    pub fn attempt<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.pos;
        let result = parse(self);
        if result.is_none() {
            self.pos = saved;
        }
        result
    }

    /// Parse `{ , item }` greedily, stopping before the first comma whose
    /// item does not parse.
    pub fn comma_list<T>(&mut self, mut item: impl FnMut(&mut Self) -> Option<T>) -> Vec<T> {
        let mut items = Vec::new();
        while let Some(parsed) = self.attempt(|p| {
            p.expect(SyntaxKind::COMMA)?;
            item(p)
        }) {
            items.push(parsed);
        }
        items
    }

    /// End offset of the last consumed token.
    pub fn consumed_end(&self) -> TextSize {
        self.pos
            .checked_sub(1)
            .and_then(|last| self.tokens.get(last))
            .map(|token| token.range().end())
            .unwrap_or_default()
    }
}
