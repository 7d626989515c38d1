//! Descriptor formats.
//!
//! Each finished [`Module`](crate::hir::Module) becomes one descriptor file.
//! Formats share the serde model defined in [`crate::hir`], so JSON and
//! YAML descriptors have the same structure.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  DescriptorFormat trait                   │
//! │  - write(&Module) -> Result<Vec<u8>>                     │
//! │  - read(&[u8]) -> Result<Module>                         │
//! └──────────────────────────────────────────────────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────┐     ┌──────────────┐
//! │  Json        │     │  Yaml        │  (feature = "yaml")
//! └──────────────┘     └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use metadecl::interchange::{DescriptorFormat, Json, descriptor_file_name};
//!
//! let bytes = Json::default().write(&module)?;
//! let name = descriptor_file_name(&module.key, "--", "json");
//! ```

mod error;
mod format;
mod json;
#[cfg(feature = "yaml")]
mod yaml;

pub use error::InterchangeError;
pub use format::{DescriptorFormat, FormatKind, descriptor_file_name};
pub use json::Json;
#[cfg(feature = "yaml")]
pub use yaml::Yaml;
