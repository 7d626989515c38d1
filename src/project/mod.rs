//! Extraction runs: loading inputs, resolving them in order, and writing
//! descriptors.

mod config;
mod error;
mod extractor;
pub mod file_loader;

pub use config::ExtractorConfig;
pub use error::ExtractError;
pub use extractor::{Extractor, ModuleSummary, summarize, write_descriptors};
pub use file_loader::{FsLoader, SourceLoader};
