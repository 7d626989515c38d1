//! Annotation scanner for host-language source files
//!
//! This module recognizes the annotation macros embedded in C/C++ sources.
//! It never parses the host language itself:
//! - **logos** for fast, lossless lexing
//! - a small set of composable grammar fragments over the token stream
//! - a scanner that applies one declaration form at a time to a whole file
//!
//! ## Architecture
//!
//! ```text
//! Source Text
//!     ↓
//! Lexer (logos) → Tokens with SyntaxKind
//!     ↓
//! Grammar fragments → typed declaration nodes (ast)
//!     ↓
//! Scanner → Matched<Node> per form, with doc comment and range
//!     ↓
//! HIR → Module graph
//! ```

pub mod ast;
pub mod grammar;
mod lexer;
mod scanner;
mod syntax_kind;

pub use ast::{
    Accessor, DocComment, FunctionDecl, FunctionTarget, GenericTypeDecl, Matched, MemberRole,
    Parameter, ParameterType, PropertyDecl, ResourceDecl, ResourceKind, TypeAliasDecl, TypeDecl,
};
pub use lexer::{Lexer, Token, tokenize};
pub use scanner::Scanner;
pub use syntax_kind::SyntaxKind;
