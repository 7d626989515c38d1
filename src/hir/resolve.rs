//! Applying scanned declarations to the module graph.
//!
//! Every input file goes through the same ordered list of [`Phase`]s. Each
//! phase scans the whole file for one declaration form and applies all of
//! its matches before the next phase starts:
//!
//! ```text
//! 1. Types            DECLARE_TYPE                  (defining)
//! 2. GenericTypes     DECLARE_GENERIC_TYPE          (defining)
//! 3. TypeAliases      DECLARE_TYPE_ALIAS            (defining)
//! 4. Resources        DECLARE_RESOURCE              (attaching)
//! 5. Properties       DECLARE_PROPERTY              (attaching)
//! 6. PropertyGetters  DECLARE_PROPERTY_GETTER       (attaching)
//! 7. PropertySetters  DECLARE_PROPERTY_SETTER       (attaching)
//! 8. Functions        DECLARE_*FUNCTION             (free: defining, others: attaching)
//! ```
//!
//! Because all defining phases of a file finish before its attaching phases,
//! a property may precede its type within one file. Across files, a type is
//! only visible to files processed at or after the one defining it.

use std::fmt;
use std::sync::Arc;

use text_size::TextRange;

use super::diagnostics::{
    Diagnostic, DiagnosticCollector, UnresolvedReason, UnresolvedTypeReference, codes,
};
use super::model::{Declaration, FunctionRole, FunctionSignature, Property, Struct, TypeAlias};
use super::symbols::SymbolTable;
use crate::base::{LineIndex, Reference};
use crate::parser::{
    Accessor, FunctionTarget, Matched, Parameter, PropertyDecl, Scanner,
};

// ============================================================================
// PHASES
// ============================================================================

/// One pass over a file, in application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Types,
    GenericTypes,
    TypeAliases,
    Resources,
    Properties,
    PropertyGetters,
    PropertySetters,
    Functions,
}

impl Phase {
    /// The per-file pipeline. The order is part of the observable behavior.
    pub const ALL: [Phase; 8] = [
        Phase::Types,
        Phase::GenericTypes,
        Phase::TypeAliases,
        Phase::Resources,
        Phase::Properties,
        Phase::PropertyGetters,
        Phase::PropertySetters,
        Phase::Functions,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Types => "type declarations",
            Phase::GenericTypes => "generic type declarations",
            Phase::TypeAliases => "type aliases",
            Phase::Resources => "resource tags",
            Phase::Properties => "property declarations",
            Phase::PropertyGetters => "property getters",
            Phase::PropertySetters => "property setters",
            Phase::Functions => "function declarations",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RESOLVER
// ============================================================================

/// One input file, lexed once and shared by all phases.
struct FileContext<'a> {
    file: Arc<str>,
    scanner: Scanner<'a>,
    lines: LineIndex,
}

/// Applies scanned declarations to a borrowed [`SymbolTable`].
pub struct Resolver<'t> {
    table: &'t mut SymbolTable,
    diagnostics: DiagnosticCollector,
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t mut SymbolTable) -> Self {
        Self {
            table,
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Run every phase over one file. Returns the number of applied declarations.
    pub fn resolve_file(&mut self, file: impl Into<Arc<str>>, text: &str) -> usize {
        let ctx = FileContext {
            file: file.into(),
            scanner: Scanner::new(text),
            lines: LineIndex::new(text),
        };

        let mut applied = 0;
        for phase in Phase::ALL {
            let count = self.run_phase(&ctx, phase);
            tracing::debug!("[RESOLVE] {}: {} {}", ctx.file, count, phase);
            applied += count;
        }
        applied
    }

    pub fn diagnostics(&self) -> &DiagnosticCollector {
        &self.diagnostics
    }

    pub fn finish(self) -> DiagnosticCollector {
        self.diagnostics
    }

    fn run_phase(&mut self, ctx: &FileContext<'_>, phase: Phase) -> usize {
        match phase {
            Phase::Types => {
                let matches = ctx.scanner.type_declarations();
                for m in &matches {
                    let reference = &m.node.reference;
                    let s = Struct::new(reference.name.clone(), m.doc.description());
                    self.table.define(reference, Declaration::Struct(s));
                }
                matches.len()
            }
            Phase::GenericTypes => {
                let matches = ctx.scanner.generic_type_declarations();
                for m in &matches {
                    let reference = &m.node.reference;
                    let mut s = Struct::new(reference.name.clone(), m.doc.description());
                    s.generics = m.node.generics.clone();
                    self.table.define(reference, Declaration::Struct(s));
                }
                matches.len()
            }
            Phase::TypeAliases => {
                let matches = ctx.scanner.type_aliases();
                for m in &matches {
                    let alias = TypeAlias {
                        name: m.node.alias.name.clone(),
                        target: m.node.target.clone(),
                    };
                    self.table.define(&m.node.alias, Declaration::TypeAlias(alias));
                }
                matches.len()
            }
            Phase::Resources => {
                let mut applied = 0;
                for m in ctx.scanner.resources() {
                    match self.table.lookup_struct_mut(&m.node.target) {
                        Ok(s) => {
                            tracing::trace!("[RESOLVE] {} is a {}", s.name, m.node.kind);
                            s.resource = Some(m.node.kind);
                            applied += 1;
                        }
                        Err(reason) => {
                            self.report(ctx, phase, &m.node.target, m.range, reason);
                        }
                    }
                }
                applied
            }
            Phase::Properties => self.apply_properties(ctx, phase, ctx.scanner.properties()),
            Phase::PropertyGetters => {
                self.apply_properties(ctx, phase, ctx.scanner.property_getters())
            }
            Phase::PropertySetters => {
                self.apply_properties(ctx, phase, ctx.scanner.property_setters())
            }
            Phase::Functions => {
                let mut applied = 0;
                for m in ctx.scanner.functions() {
                    let decl = m.node;
                    match decl.target {
                        FunctionTarget::Free(reference) => {
                            let signature = FunctionSignature {
                                name: reference.name.clone(),
                                role: FunctionRole::Free,
                                generics: decl.generics,
                                inputs: decl.inputs,
                                output: decl.output,
                            };
                            self.table
                                .define(&reference, Declaration::Function(signature));
                            applied += 1;
                        }
                        FunctionTarget::Type { owner, name, role } => {
                            match self.table.lookup_struct_mut(&owner) {
                                Ok(s) => {
                                    let mut inputs = Vec::with_capacity(decl.inputs.len() + 1);
                                    if role.has_receiver() {
                                        inputs.push(Parameter::concrete("self", owner.clone()));
                                    }
                                    inputs.extend(decl.inputs);
                                    tracing::trace!("[RESOLVE] {}::{} ({:?})", s.name, name, role);
                                    s.functions.push(FunctionSignature {
                                        name,
                                        role: role.into(),
                                        generics: decl.generics,
                                        inputs,
                                        output: decl.output,
                                    });
                                    applied += 1;
                                }
                                Err(reason) => self.report(ctx, phase, &owner, m.range, reason),
                            }
                        }
                    }
                }
                applied
            }
        }
    }

    /// Property merge rules:
    /// - `Full` always appends a property with both flags set
    /// - `Getter`/`Setter` create the property if absent, otherwise only
    ///   raise their own flag
    fn apply_properties(
        &mut self,
        ctx: &FileContext<'_>,
        phase: Phase,
        matches: Vec<Matched<PropertyDecl>>,
    ) -> usize {
        let mut applied = 0;
        for m in matches {
            let decl = &m.node;
            let owner = match self.table.lookup_struct_mut(&decl.owner) {
                Ok(owner) => owner,
                Err(reason) => {
                    self.report(ctx, phase, &decl.owner, m.range, reason);
                    continue;
                }
            };
            applied += 1;

            let (get, set) = match decl.accessor {
                Accessor::Full => (true, true),
                Accessor::Getter => (true, false),
                Accessor::Setter => (false, true),
            };

            if decl.accessor != Accessor::Full {
                if let Some(existing) = owner.property_mut(&decl.name) {
                    existing.get |= get;
                    existing.set |= set;
                    if existing.ty != decl.ty {
                        let message = format!(
                            "property {}.{} declared as {} but previously as {}; keeping {}",
                            decl.owner.name, decl.name, decl.ty, existing.ty, existing.ty
                        );
                        self.diagnostics.warning(Diagnostic::warning(
                            ctx.file.clone(),
                            ctx.lines.position(m.range.start()),
                            codes::PROPERTY_TYPE_MISMATCH,
                            message,
                        ));
                    }
                    continue;
                }
            }

            tracing::trace!("[RESOLVE] {}.{} ({:?})", owner.name, decl.name, decl.accessor);
            owner.properties.push(Property {
                name: decl.name.clone(),
                ty: decl.ty.clone(),
                description: m.doc.description(),
                get,
                set,
            });
        }
        applied
    }

    fn report(
        &mut self,
        ctx: &FileContext<'_>,
        phase: Phase,
        reference: &Reference,
        range: TextRange,
        reason: UnresolvedReason,
    ) {
        self.diagnostics.unresolved(UnresolvedTypeReference {
            reference: reference.clone(),
            file: ctx.file.clone(),
            phase,
            position: ctx.lines.position(range.start()),
            reason,
        });
    }
}
