//! YAML descriptor format.
//!
//! Same structure as the JSON descriptor, in YAML syntax:
//!
//! ```yaml
//! module: eng/math
//! declarations:
//! - Struct:
//!     name: Vector3
//!     description: A three-component vector.
//!     generics: []
//!     properties: []
//!     functions: []
//! ```

use super::{DescriptorFormat, InterchangeError};
use crate::hir::Module;

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl DescriptorFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extension(&self) -> &'static str {
        "yaml"
    }

    fn write(&self, module: &Module) -> Result<Vec<u8>, InterchangeError> {
        serde_yaml::to_string(module)
            .map(String::into_bytes)
            .map_err(|e| InterchangeError::yaml(e.to_string()))
    }

    fn read(&self, input: &[u8]) -> Result<Module, InterchangeError> {
        let content = std::str::from_utf8(input)
            .map_err(|e| InterchangeError::yaml(format!("Invalid UTF-8: {e}")))?;
        serde_yaml::from_str(content).map_err(|e| InterchangeError::yaml(e.to_string()))
    }
}
