//! Common trait for descriptor formats.

use std::fmt;

use super::InterchangeError;
use crate::base::ModuleKey;
use crate::hir::Module;

/// Trait for descriptor formats.
///
/// A format turns one finished [`Module`] into bytes. Reading is the
/// inverse and exists for tooling; the extraction pipeline never reads
/// descriptors back.
pub trait DescriptorFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension used for descriptors, without the dot.
    fn extension(&self) -> &'static str;

    /// Serialize a module.
    fn write(&self, module: &Module) -> Result<Vec<u8>, InterchangeError>;

    /// Parse a module back from descriptor bytes.
    fn read(&self, input: &[u8]) -> Result<Module, InterchangeError>;
}

/// Descriptor formats selectable by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FormatKind {
    #[default]
    Json,
    #[value(alias = "yml")]
    Yaml,
}

impl FormatKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKind::Json => "json",
            FormatKind::Yaml => "yaml",
        }
    }

    /// Build the format handler.
    ///
    /// `pretty` only affects JSON. YAML needs the `yaml` cargo feature.
    pub fn handler(self, pretty: bool) -> Result<Box<dyn DescriptorFormat>, InterchangeError> {
        match self {
            FormatKind::Json => Ok(Box::new(super::Json { pretty })),
            #[cfg(feature = "yaml")]
            FormatKind::Yaml => Ok(Box::new(super::Yaml)),
            #[cfg(not(feature = "yaml"))]
            FormatKind::Yaml => Err(InterchangeError::unsupported(
                "YAML descriptors require the 'yaml' feature",
            )),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File name of the descriptor for `key`: `owner<delimiter>project.<extension>`.
pub fn descriptor_file_name(key: &ModuleKey, delimiter: &str, extension: &str) -> String {
    format!("{}.{}", key.file_stem(delimiter), extension)
}
