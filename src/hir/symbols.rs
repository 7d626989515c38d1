//! Central registry of all modules seen during one extraction run.
//!
//! The table is owned by whoever drives the run and lent to the resolver by
//! `&mut`; there is no global state. Modules keep the order in which they
//! were first created, which is also the order descriptors are emitted in.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use super::diagnostics::UnresolvedReason;
use super::model::{Declaration, Module, Struct};
use crate::base::{ModuleKey, Reference};

#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    /// Insertion-ordered: first created, first serialized.
    modules: IndexMap<ModuleKey, Module, FxBuildHasher>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the module for `key`, creating it on first use.
    ///
    /// Only defining declarations may call this; attaching declarations go
    /// through [`SymbolTable::lookup_struct_mut`].
    pub fn module_or_insert(&mut self, key: ModuleKey) -> &mut Module {
        self.modules.entry(key).or_insert_with_key(|key| {
            tracing::debug!("[SYMBOLS] creating module {}", key);
            Module::new(key.clone())
        })
    }

    /// Append a defining declaration to the module of `reference`.
    pub fn define(&mut self, reference: &Reference, declaration: Declaration) {
        tracing::trace!(
            "[SYMBOLS] define {} {}",
            declaration.kind_name(),
            reference
        );
        self.module_or_insert(reference.module_key())
            .declarations
            .push(declaration);
    }

    pub fn module(&self, key: &ModuleKey) -> Option<&Module> {
        self.modules.get(key)
    }

    /// Modules in creation order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Find the first Struct or TypeAlias named by `reference`.
    pub fn lookup_type(&self, reference: &Reference) -> Result<&Declaration, UnresolvedReason> {
        let module = self
            .modules
            .get(&reference.module_key())
            .ok_or(UnresolvedReason::MissingModule)?;
        let idx = module
            .find_type(&reference.name)
            .ok_or(UnresolvedReason::MissingType)?;
        Ok(&module.declarations[idx])
    }

    /// Resolve `reference` to the Struct that attaching declarations bind to.
    ///
    /// First match wins: if the first type with that name is an alias, the
    /// lookup fails even when a Struct of the same name follows it.
    pub fn lookup_struct_mut(
        &mut self,
        reference: &Reference,
    ) -> Result<&mut Struct, UnresolvedReason> {
        let module = self
            .modules
            .get_mut(&reference.module_key())
            .ok_or(UnresolvedReason::MissingModule)?;
        let idx = module
            .find_type(&reference.name)
            .ok_or(UnresolvedReason::MissingType)?;
        match &mut module.declarations[idx] {
            Declaration::Struct(s) => Ok(s),
            _ => Err(UnresolvedReason::AliasTarget),
        }
    }
}
