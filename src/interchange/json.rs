//! JSON descriptor format.
//!
//! ## Structure
//!
//! ```json
//! {
//!   "module": "eng/math",
//!   "declarations": [
//!     { "Struct": { "name": "Vector3", "description": "", "generics": [],
//!                   "properties": [], "functions": [] } }
//!   ]
//! }
//! ```

use super::{DescriptorFormat, InterchangeError};
use crate::hir::Module;

/// JSON format handler.
#[derive(Debug, Clone, Copy)]
pub struct Json {
    /// Indent output; compact single-line otherwise.
    pub pretty: bool,
}

impl Default for Json {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl DescriptorFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn write(&self, module: &Module) -> Result<Vec<u8>, InterchangeError> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(module)
        } else {
            serde_json::to_vec(module)
        };
        result.map_err(|e| InterchangeError::json(e.to_string()))
    }

    fn read(&self, input: &[u8]) -> Result<Module, InterchangeError> {
        serde_json::from_slice(input).map_err(|e| InterchangeError::json(e.to_string()))
    }
}
