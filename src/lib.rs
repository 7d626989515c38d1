//! # metadecl
//!
//! Extracts type, property and function metadata declared with `DECLARE_*`
//! annotation macros in C/C++ sources, and assembles it into one descriptor
//! per `owner/project` module.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project     → Extraction runs: loading, ordering, writing descriptors
//!   ↓
//! interchange → Descriptor formats (JSON, YAML)
//!   ↓
//! hir         → Symbol table, phased resolver, module model
//!   ↓
//! parser      → Logos lexer, declaration grammar, scanner
//!   ↓
//! base        → Primitives (Reference, ModuleKey, positions)
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use metadecl::project::{Extractor, ExtractorConfig, write_descriptors};
//!
//! let mut extractor = Extractor::new();
//! extractor.add_file("src/math.c")?;
//! let table = extractor.finish()?;
//! write_descriptors(&table, &ExtractorConfig::new("gen"))?;
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → hir → interchange → project)
// ============================================================================

/// Foundation types: references, module keys, line/column positions
pub mod base;

/// Parser: Logos lexer, declaration grammar, full-text scanner
pub mod parser;

/// Resolved module graph and the phase pipeline that builds it
pub mod hir;

/// Descriptor formats: JSON, YAML
pub mod interchange;

/// Extraction runs: file loading, configuration, descriptor output
pub mod project;

// Re-export foundation types
pub use base::{ModuleKey, Position, Reference, TypeReference};

// Re-export the run-level API
pub use hir::{Module, SymbolTable, UnresolvedTypeReference};
pub use project::{ExtractError, Extractor, ExtractorConfig, write_descriptors};
