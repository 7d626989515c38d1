use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{ExtractError, ExtractorConfig, FsLoader, SourceLoader};
use crate::hir::{Declaration, DiagnosticCollector, Module, Resolver, SymbolTable};
use crate::interchange::descriptor_file_name;

/// Drives one extraction run.
///
/// Inputs are resolved in the order they are added. Unresolved references
/// are collected across all inputs; [`Extractor::finish`] fails with the
/// full list if there are any.
pub struct Extractor<L = FsLoader> {
    loader: L,
    table: SymbolTable,
    diagnostics: DiagnosticCollector,
    files: usize,
}

impl Extractor<FsLoader> {
    pub fn new() -> Self {
        Self::with_loader(FsLoader)
    }
}

impl Default for Extractor<FsLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: SourceLoader> Extractor<L> {
    pub fn with_loader(loader: L) -> Self {
        Self {
            loader,
            table: SymbolTable::new(),
            diagnostics: DiagnosticCollector::new(),
            files: 0,
        }
    }

    /// Resolve in-memory text as if it were a file called `name`.
    ///
    /// Returns the number of declarations applied.
    pub fn add_source(&mut self, name: impl Into<Arc<str>>, text: &str) -> usize {
        let name = name.into();
        let mut resolver = Resolver::new(&mut self.table);
        let applied = resolver.resolve_file(name.clone(), text);
        self.diagnostics.merge(resolver.finish());
        self.files += 1;
        tracing::info!("[EXTRACT] {}: {} declarations", name, applied);
        applied
    }

    /// Load `path` and resolve it.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<usize, ExtractError> {
        let path = path.as_ref();
        let text = self.loader.load(path)?;
        Ok(self.add_source(path.display().to_string(), &text))
    }

    /// Load and resolve `paths` in order, stopping at the first unreadable one.
    pub fn add_files<I, P>(&mut self, paths: I) -> Result<usize, ExtractError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut applied = 0;
        for path in paths {
            applied += self.add_file(path)?;
        }
        Ok(applied)
    }

    /// Number of inputs processed so far.
    pub fn file_count(&self) -> usize {
        self.files
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn diagnostics(&self) -> &DiagnosticCollector {
        &self.diagnostics
    }

    /// End the run. No table is returned if any reference stayed unresolved.
    pub fn finish(self) -> Result<SymbolTable, ExtractError> {
        if self.diagnostics.has_errors() {
            return Err(ExtractError::Unresolved(self.diagnostics.into_unresolved()));
        }
        Ok(self.table)
    }
}

/// Write one descriptor per module, in module creation order.
///
/// Every descriptor is serialized before the first file is written, so a
/// serialization failure leaves the output directory untouched.
pub fn write_descriptors(
    table: &SymbolTable,
    config: &ExtractorConfig,
) -> Result<Vec<PathBuf>, ExtractError> {
    let format = config.format.handler(config.pretty)?;
    tracing::debug!("[WRITE] {} module(s) as {}", table.len(), format.name());

    let mut outputs = Vec::with_capacity(table.len());
    for module in table.modules() {
        let name = descriptor_file_name(&module.key, &config.delimiter, format.extension());
        outputs.push((config.out_dir.join(name), format.write(module)?));
    }

    std::fs::create_dir_all(&config.out_dir)
        .map_err(|e| ExtractError::write(&config.out_dir, e))?;

    let mut written = Vec::with_capacity(outputs.len());
    for (path, bytes) in outputs {
        std::fs::write(&path, bytes).map_err(|e| ExtractError::write(&path, e))?;
        tracing::info!("[WRITE] {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Declaration counts for one module, as listed by a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSummary {
    pub key: String,
    pub structs: usize,
    pub aliases: usize,
    pub functions: usize,
    pub properties: usize,
    pub members: usize,
}

impl ModuleSummary {
    pub fn of(module: &Module) -> Self {
        let mut summary = Self {
            key: module.key.to_string(),
            structs: 0,
            aliases: 0,
            functions: 0,
            properties: 0,
            members: 0,
        };
        for declaration in &module.declarations {
            match declaration {
                Declaration::Struct(s) => {
                    summary.structs += 1;
                    summary.properties += s.properties.len();
                    summary.members += s.functions.len();
                }
                Declaration::TypeAlias(_) => summary.aliases += 1,
                Declaration::Function(_) => summary.functions += 1,
            }
        }
        summary
    }
}

impl fmt::Display for ModuleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} struct(s), {} alias(es), {} function(s), {} property(ies), {} member function(s)",
            self.key, self.structs, self.aliases, self.functions, self.properties, self.members
        )
    }
}

pub fn summarize(table: &SymbolTable) -> Vec<ModuleSummary> {
    table.modules().map(ModuleSummary::of).collect()
}
