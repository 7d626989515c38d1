//! Reading source files.

use std::path::Path;

use super::ExtractError;

/// Supplies the full text of an input file.
pub trait SourceLoader {
    fn load(&self, path: &Path) -> Result<String, ExtractError>;
}

/// Reads from the filesystem.
///
/// Host-language sources are not guaranteed to be UTF-8; invalid sequences
/// are replaced, which cannot affect matching since annotations are ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path).map_err(|e| ExtractError::read(path, e))?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!("[LOAD] {} is not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }
}
