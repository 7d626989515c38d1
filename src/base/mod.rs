//! Foundation types for the extractor.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`Reference`] - `(owner, project, name)` identifiers
//! - [`TypeReference`] - a reference with generic arguments
//! - [`ModuleKey`] - `"owner/project"` module identity
//! - [`Position`], [`LineIndex`] - Line/column positions for diagnostics
//!
//! This module has NO dependencies on other crate modules.

mod position;
mod reference;

pub use position::{LineIndex, Position};
pub use reference::{ModuleKey, Reference, TypeReference};

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
