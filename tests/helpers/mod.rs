//! Shared fixtures for integration tests.

#![allow(dead_code)]

use metadecl::hir::{Declaration, Module, Struct, SymbolTable};
use metadecl::{ExtractError, Extractor, ModuleKey};

/// A small engine math module spread over two files.
pub const MATH_TYPES: &str = r#"
#pragma once
#include "runtime/declare.h"

// A three-component vector.
// Used for positions and directions.
DECLARE_TYPE(eng, math, Vector3);

// Column-major 4x4 matrix.
DECLARE_TYPE(eng, math, Matrix4);

DECLARE_GENERIC_TYPE(eng, math, Array, GENERIC_TYPE(T));
DECLARE_TYPE_ALIAS(TYPE(eng, math, Vector3Array), TYPE(eng, math, Array, TYPE(eng, math, Vector3)));

typedef struct Vector3 { float x, y, z; } Vector3;
"#;

pub const MATH_MEMBERS: &str = r#"
#include "math_types.h"

// The x component.
DECLARE_PROPERTY(TYPE(eng, math, Vector3), x, TYPE(eng, math, f32));
DECLARE_PROPERTY_GETTER(TYPE(eng, math, Vector3), length, TYPE(eng, math, f32));

DECLARE_RESOURCE(SceneComponent, TYPE(eng, math, Vector3));

DECLARE_TYPE_FUNCTION(TYPE(eng, math, Vector3), zero, RESULT(TYPE(eng, math, Vector3)));
DECLARE_MUTABLE_MEMBER_FUNCTION(TYPE(eng, math, Vector3), normalize);
DECLARE_FUNCTION(FUNCTION(eng, math, lerp),
    GENERIC(T),
    PARAMETER(a, T),
    PARAMETER(b, T),
    PARAMETER(t, TYPE(eng, math, f32)),
    RESULT(TYPE(eng, math, Vector3)));

float vector3_length(const Vector3 *v);
"#;

/// Run an in-memory extraction over `(name, text)` pairs in order.
pub fn extract(files: &[(&str, &str)]) -> Result<SymbolTable, ExtractError> {
    let mut extractor = Extractor::new();
    for (name, text) in files {
        extractor.add_source(*name, text);
    }
    extractor.finish()
}

pub fn module<'t>(table: &'t SymbolTable, owner: &str, project: &str) -> &'t Module {
    table
        .module(&ModuleKey::new(owner, project))
        .unwrap_or_else(|| panic!("module {owner}/{project} missing"))
}

pub fn find_struct<'m>(module: &'m Module, name: &str) -> &'m Struct {
    module
        .declarations
        .iter()
        .find_map(|declaration| match declaration {
            Declaration::Struct(s) if s.name == name => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| panic!("struct {name} missing in {}", module.key))
}
