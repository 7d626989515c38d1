//! Typed nodes for matched annotation forms.
//!
//! Each struct is the structured capture of one declaration macro. Nodes
//! carry only what the macro literally says; resolution against the module
//! graph happens later in `hir`.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use text_size::TextRange;

use crate::base::{Reference, TypeReference};

// ============================================================================
// Match envelope
// ============================================================================

/// A successfully matched declaration with its position and preceding docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched<T> {
    pub node: T,
    pub doc: DocComment,
    /// From the declaration keyword up to and including its last token.
    pub range: TextRange,
}

/// The run of `//` comments directly above a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    lines: Vec<SmolStr>,
}

impl DocComment {
    pub fn new(lines: Vec<SmolStr>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[SmolStr] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All non-empty lines joined with single spaces.
    pub fn description(&self) -> String {
        self.lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(SmolStr::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ============================================================================
// Shared value types
// ============================================================================

/// The fixed set of resource kinds a type can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Event,
    SceneComponent,
    ViewportComponent,
    EntitySpawnList,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] = [
        Self::Event,
        Self::SceneComponent,
        Self::ViewportComponent,
        Self::EntitySpawnList,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::SceneComponent => "SceneComponent",
            Self::ViewportComponent => "ViewportComponent",
            Self::EntitySpawnList => "EntitySpawnList",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a parameter is bound to.
///
/// Serialized untagged: a concrete type is a reference object, a generic
/// parameter is its bare name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterType {
    Concrete(Reference),
    Generic(SmolStr),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: SmolStr,
    #[serde(rename = "type")]
    pub ty: ParameterType,
}

impl Parameter {
    pub fn concrete(name: impl Into<SmolStr>, ty: Reference) -> Self {
        Self {
            name: name.into(),
            ty: ParameterType::Concrete(ty),
        }
    }

    pub fn generic(name: impl Into<SmolStr>, generic: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            ty: ParameterType::Generic(generic.into()),
        }
    }
}

// ============================================================================
// Declaration nodes
// ============================================================================

/// `DECLARE_TYPE(owner, project, Name);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub reference: Reference,
}

/// `DECLARE_GENERIC_TYPE(owner, project, Name, GENERIC_TYPE(T), ...);`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericTypeDecl {
    pub reference: Reference,
    pub generics: Vec<SmolStr>,
}

/// `DECLARE_TYPE_ALIAS(TYPE(...), TYPE(..., TYPE(...)));`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasDecl {
    pub alias: Reference,
    pub target: TypeReference,
}

/// `DECLARE_RESOURCE(Kind, TYPE(...))`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDecl {
    pub kind: ResourceKind,
    pub target: Reference,
}

/// Which property macro produced a [`PropertyDecl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accessor {
    /// `DECLARE_PROPERTY`
    Full,
    /// `DECLARE_PROPERTY_GETTER`
    Getter,
    /// `DECLARE_PROPERTY_SETTER`
    Setter,
}

/// `DECLARE_PROPERTY[_GETTER|_SETTER](TYPE(owner), name, TYPE(type));`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDecl {
    pub accessor: Accessor,
    pub owner: Reference,
    pub name: SmolStr,
    pub ty: Reference,
}

/// How a type-scoped function relates to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberRole {
    /// `DECLARE_TYPE_FUNCTION`, no receiver
    TypeLevel,
    /// `DECLARE_MEMBER_FUNCTION`
    Member,
    /// `DECLARE_MUTABLE_MEMBER_FUNCTION`
    MutableMember,
}

impl MemberRole {
    /// Member roles get a synthetic `self` parameter.
    pub fn has_receiver(self) -> bool {
        matches!(self, Self::Member | Self::MutableMember)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionTarget {
    /// `DECLARE_FUNCTION(FUNCTION(owner, project, name) ...)`
    Free(Reference),
    /// `DECLARE_*_FUNCTION(TYPE(owner, project, Type), name ...)`
    Type {
        owner: Reference,
        name: SmolStr,
        role: MemberRole,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    pub target: FunctionTarget,
    pub generics: Vec<SmolStr>,
    pub inputs: Vec<Parameter>,
    pub output: Option<Reference>,
}

impl FunctionDecl {
    pub fn name(&self) -> &str {
        match &self.target {
            FunctionTarget::Free(reference) => &reference.name,
            FunctionTarget::Type { name, .. } => name,
        }
    }
}
