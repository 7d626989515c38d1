//! The module graph as it is serialized into descriptors.
//!
//! Field names follow the descriptor schema, so these types double as the
//! serde model of the output format.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::base::{ModuleKey, Reference, TypeReference};
use crate::parser::{MemberRole, Parameter, ResourceKind};

/// All declarations that share one `owner/project` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    #[serde(rename = "module")]
    pub key: ModuleKey,
    pub declarations: Vec<Declaration>,
}

impl Module {
    pub fn new(key: ModuleKey) -> Self {
        Self {
            key,
            declarations: Vec::new(),
        }
    }

    /// Index of the first Struct or TypeAlias called `name`.
    pub fn find_type(&self, name: &str) -> Option<usize> {
        self.declarations
            .iter()
            .position(|declaration| declaration.type_name() == Some(name))
    }

    pub fn structs(&self) -> impl Iterator<Item = &Struct> {
        self.declarations.iter().filter_map(|declaration| match declaration {
            Declaration::Struct(s) => Some(s),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Declaration {
    Struct(Struct),
    TypeAlias(TypeAlias),
    Function(FunctionSignature),
}

impl Declaration {
    /// Name of the declared type; `None` for free functions.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Declaration::Struct(s) => Some(s.name.as_str()),
            Declaration::TypeAlias(alias) => Some(alias.name.as_str()),
            Declaration::Function(_) => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Declaration::Struct(_) => "Struct",
            Declaration::TypeAlias(_) => "TypeAlias",
            Declaration::Function(_) => "Function",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    pub name: SmolStr,
    pub description: String,
    pub generics: Vec<SmolStr>,
    pub properties: Vec<Property>,
    pub functions: Vec<FunctionSignature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceKind>,
}

impl Struct {
    pub fn new(name: impl Into<SmolStr>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            generics: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            resource: None,
        }
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|property| property.name == name)
    }

    pub fn property_mut(&mut self, name: &str) -> Option<&mut Property> {
        self.properties
            .iter_mut()
            .find(|property| property.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAlias {
    pub name: SmolStr,
    #[serde(rename = "type")]
    pub target: TypeReference,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: SmolStr,
    #[serde(rename = "type")]
    pub ty: Reference,
    pub description: String,
    pub get: bool,
    pub set: bool,
}

/// How a function is bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionRole {
    /// Module-scoped, `DECLARE_FUNCTION`
    Free,
    /// Type-scoped without a receiver
    TypeLevel,
    /// Receives `self` by shared reference
    Member,
    /// Receives `self` by mutable reference
    MutableMember,
}

impl From<MemberRole> for FunctionRole {
    fn from(role: MemberRole) -> Self {
        match role {
            MemberRole::TypeLevel => FunctionRole::TypeLevel,
            MemberRole::Member => FunctionRole::Member,
            MemberRole::MutableMember => FunctionRole::MutableMember,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
    pub name: SmolStr,
    pub role: FunctionRole,
    pub generics: Vec<SmolStr>,
    pub inputs: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Reference>,
}
