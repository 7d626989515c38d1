//! Fully-qualified references and module keys.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// A fully-qualified `(owner, project, name)` identifier for a type or function.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reference {
    pub owner: SmolStr,
    pub project: SmolStr,
    #[serde(rename = "definition")]
    pub name: SmolStr,
}

impl Reference {
    pub fn new(
        owner: impl Into<SmolStr>,
        project: impl Into<SmolStr>,
        name: impl Into<SmolStr>,
    ) -> Self {
        Self {
            owner: owner.into(),
            project: project.into(),
            name: name.into(),
        }
    }

    /// The key of the module this reference lives in.
    pub fn module_key(&self) -> ModuleKey {
        ModuleKey::new(&self.owner, &self.project)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.owner, self.project, self.name)
    }
}

/// A reference together with its ordered generic arguments.
///
/// `TYPE(core, std, Array, TYPE(core, std, String))` names `Array` with a
/// single generic argument `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeReference {
    #[serde(flatten)]
    pub reference: Reference,
    pub generics: Vec<Reference>,
}

impl TypeReference {
    pub fn new(reference: Reference, generics: Vec<Reference>) -> Self {
        Self {
            reference,
            generics,
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference)?;
        if let Some((first, rest)) = self.generics.split_first() {
            write!(f, "<{first}")?;
            for generic in rest {
                write!(f, ", {generic}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// `"owner/project"`, the identity of a module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleKey(SmolStr);

impl ModuleKey {
    pub const SEPARATOR: char = '/';

    pub fn new(owner: &str, project: &str) -> Self {
        Self(SmolStr::from(format!("{owner}{}{project}", Self::SEPARATOR)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key with its separator replaced, suitable as a file stem.
    pub fn file_stem(&self, delimiter: &str) -> String {
        self.0.replace(Self::SEPARATOR, delimiter)
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
