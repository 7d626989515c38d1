//! High-level IR (HIR): the resolved module graph.
//!
//! Scanner matches are applied to a [`SymbolTable`] by the [`Resolver`],
//! one file and one [`Phase`] at a time. The result is a set of
//! [`Module`]s ready to be serialized.
//!
//! ## Key Types
//!
//! - [`SymbolTable`]: Owned, insertion-ordered map of modules
//! - [`Resolver`]: Runs the per-file phase pipeline against a table
//! - [`Module`], [`Declaration`], [`Struct`]: The serialized model
//! - [`UnresolvedTypeReference`]: An attaching declaration without a target
//!
//! ## Data Flow
//!
//! ```text
//! file text                 ← INPUT: one source file
//!     │
//!     ▼
//! Scanner                   ← one query per declaration form
//!     │
//!     ▼
//! Resolver (Phase::ALL)     ← define or attach, in fixed order
//!     │
//!     ▼
//! SymbolTable               ← modules in creation order
//!     │
//!     ▼
//! DiagnosticCollector       ← unresolved references, warnings
//! ```

mod diagnostics;
mod model;
mod resolve;
mod symbols;

pub use diagnostics::{
    Diagnostic, DiagnosticCollector, Severity, UnresolvedReason, UnresolvedTypeReference, codes,
};
pub use model::{
    Declaration, FunctionRole, FunctionSignature, Module, Property, Struct, TypeAlias,
};
pub use resolve::{Phase, Resolver};
pub use symbols::SymbolTable;
