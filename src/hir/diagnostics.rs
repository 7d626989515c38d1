//! Diagnostics for resolution errors and warnings.
//!
//! Attaching declarations that cannot be resolved become
//! [`UnresolvedTypeReference`] errors. The resolver never stops at the first
//! one: everything is gathered in a [`DiagnosticCollector`] and handed to the
//! driver, which aborts the run with the complete list.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use super::resolve::Phase;
use crate::base::{Position, Reference};

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// Severity level of a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A diagnostic message with location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// The file containing this diagnostic.
    pub file: Arc<str>,
    /// Start of the offending declaration.
    pub position: Position,
    /// Severity level.
    pub severity: Severity,
    /// Error/warning code (e.g., "E0001").
    pub code: &'static str,
    /// The diagnostic message.
    pub message: String,
}

impl Diagnostic {
    pub fn warning(
        file: Arc<str>,
        position: Position,
        code: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file,
            position,
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}[{}]: {}",
            self.file,
            self.position,
            self.severity.as_str(),
            self.code,
            self.message
        )
    }
}

// ============================================================================
// DIAGNOSTIC CODES
// ============================================================================

/// Standard diagnostic codes.
///
/// - **E0001-E0099**: Resolution errors
/// - **W0001-W0099**: Warnings
pub mod codes {
    /// Attaching declaration whose owner type cannot be resolved.
    pub const UNRESOLVED_TYPE_REFERENCE: &str = "E0001";

    /// Getter/setter disagrees with the type of an existing property.
    pub const PROPERTY_TYPE_MISMATCH: &str = "W0001";
}

// ============================================================================
// UNRESOLVED REFERENCES
// ============================================================================

/// Why a reference did not resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnresolvedReason {
    /// No module with the reference's `owner/project` key exists yet.
    MissingModule,
    /// The module exists but holds no type with that name yet.
    MissingType,
    /// The first type with that name is an alias, which cannot own members.
    AliasTarget,
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnresolvedReason::MissingModule => "no such module",
            UnresolvedReason::MissingType => "no such type",
            UnresolvedReason::AliasTarget => "name refers to a type alias",
        })
    }
}

/// An attaching declaration whose owner type did not resolve.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{file}:{position}: unresolved type reference {reference} in {phase} ({reason})")]
pub struct UnresolvedTypeReference {
    pub reference: Reference,
    pub file: Arc<str>,
    pub phase: Phase,
    pub position: Position,
    pub reason: UnresolvedReason,
}

impl UnresolvedTypeReference {
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            file: self.file.clone(),
            position: self.position,
            severity: Severity::Error,
            code: codes::UNRESOLVED_TYPE_REFERENCE,
            message: format!(
                "unresolved type reference {} in {} ({})",
                self.reference, self.phase, self.reason
            ),
        }
    }
}

// ============================================================================
// DIAGNOSTIC COLLECTOR
// ============================================================================

/// Collects diagnostics during resolution.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticCollector {
    unresolved: Vec<UnresolvedTypeReference>,
    warnings: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unresolved(&mut self, error: UnresolvedTypeReference) {
        tracing::error!("{}", error.to_diagnostic());
        self.unresolved.push(error);
    }

    pub fn warning(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
        self.warnings.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        !self.unresolved.is_empty()
    }

    pub fn unresolved_references(&self) -> &[UnresolvedTypeReference] {
        &self.unresolved
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// All diagnostics, errors first, each group in the order reported.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.unresolved
            .iter()
            .map(UnresolvedTypeReference::to_diagnostic)
            .chain(self.warnings.iter().cloned())
            .collect()
    }

    /// Append everything `other` collected, keeping report order.
    pub fn merge(&mut self, other: DiagnosticCollector) {
        self.unresolved.extend(other.unresolved);
        self.warnings.extend(other.warnings);
    }

    pub fn into_unresolved(self) -> Vec<UnresolvedTypeReference> {
        self.unresolved
    }
}
