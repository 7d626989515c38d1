//! Error types for extraction runs.

use std::fmt::Write as _;
use std::path::PathBuf;

use thiserror::Error;

use crate::hir::UnresolvedTypeReference;
use crate::interchange::InterchangeError;

/// Errors that abort an extraction run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// An input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A descriptor or the output directory could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Attaching declarations without a target, across all files.
    #[error("{}", render_unresolved(.0))]
    Unresolved(Vec<UnresolvedTypeReference>),

    /// Descriptor serialization failed.
    #[error(transparent)]
    Interchange(#[from] InterchangeError),
}

impl ExtractError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

fn render_unresolved(errors: &[UnresolvedTypeReference]) -> String {
    let mut out = format!("{} unresolved type reference(s):", errors.len());
    for error in errors {
        let _ = write!(out, "\n  {error}");
    }
    out
}
