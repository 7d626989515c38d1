use std::path::PathBuf;

use crate::interchange::FormatKind;

/// Where and how descriptors are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Directory receiving one descriptor per module.
    pub out_dir: PathBuf,
    pub format: FormatKind,
    /// Indented output; only JSON distinguishes.
    pub pretty: bool,
    /// Replaces the `/` of a module key in descriptor file names.
    pub delimiter: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            format: FormatKind::Json,
            pretty: true,
            delimiter: Self::DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl ExtractorConfig {
    pub const DEFAULT_DELIMITER: &'static str = "--";

    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_format(mut self, format: FormatKind) -> Self {
        self.format = format;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}
