//! End-to-end extraction over in-memory sources.

use metadecl::hir::{Declaration, FunctionRole};
use metadecl::interchange::{DescriptorFormat, Json};
use metadecl::parser::{Parameter, ResourceKind};
use metadecl::{Reference, TypeReference};

use crate::helpers::{MATH_MEMBERS, MATH_TYPES, extract, find_struct, module};

fn m(name: &str) -> Reference {
    Reference::new("eng", "math", name)
}

#[test]
fn test_two_file_math_module() {
    let table = extract(&[("types.h", MATH_TYPES), ("members.c", MATH_MEMBERS)]).unwrap();
    assert_eq!(table.len(), 1);

    let math = module(&table, "eng", "math");
    let kinds: Vec<_> = math.declarations.iter().map(Declaration::kind_name).collect();
    assert_eq!(
        kinds,
        ["Struct", "Struct", "Struct", "TypeAlias", "Function"]
    );

    let vector = find_struct(math, "Vector3");
    assert_eq!(
        vector.description,
        "A three-component vector. Used for positions and directions."
    );
    assert_eq!(vector.resource, Some(ResourceKind::SceneComponent));

    let x = vector.property("x").unwrap();
    assert_eq!(x.description, "The x component.");
    assert!(x.get && x.set);
    let length = vector.property("length").unwrap();
    assert!(length.get && !length.set);

    assert_eq!(vector.functions.len(), 2);
    assert_eq!(vector.functions[0].role, FunctionRole::TypeLevel);
    assert_eq!(vector.functions[1].role, FunctionRole::MutableMember);
    assert_eq!(
        vector.functions[1].inputs,
        [Parameter::concrete("self", m("Vector3"))]
    );

    let array = find_struct(math, "Array");
    assert_eq!(array.generics, ["T"]);

    let Declaration::TypeAlias(alias) = &math.declarations[3] else {
        panic!("expected alias");
    };
    assert_eq!(
        alias.target,
        TypeReference::new(m("Array"), vec![m("Vector3")])
    );

    let Declaration::Function(lerp) = &math.declarations[4] else {
        panic!("expected free function");
    };
    assert_eq!(lerp.name, "lerp");
    assert_eq!(lerp.generics, ["T"]);
    assert_eq!(lerp.inputs[0], Parameter::generic("a", "T"));
    assert_eq!(lerp.inputs[2], Parameter::concrete("t", m("f32")));
    assert_eq!(lerp.output, Some(m("Vector3")));
}

#[test]
fn test_vector3_example() {
    let table = extract(&[(
        "vector.c",
        "// A three-component vector.\n\
         DECLARE_TYPE(eng, math, Vector3);\n\
         DECLARE_PROPERTY(TYPE(eng,math,Vector3), x, TYPE(eng,math,f32));\n",
    )])
    .unwrap();
    let vector = find_struct(module(&table, "eng", "math"), "Vector3");
    assert_eq!(vector.description, "A three-component vector.");
    assert_eq!(vector.properties.len(), 1);
    assert_eq!(vector.properties[0].name, "x");
    assert_eq!(vector.properties[0].ty, m("f32"));
    assert!(vector.properties[0].get && vector.properties[0].set);
}

#[test]
fn test_file_order_decides_resolution() {
    let a = ("a.c", "DECLARE_PROPERTY(TYPE(eng, math, T), v, TYPE(eng, math, f32));");
    let b = ("b.c", "DECLARE_TYPE(eng, math, T);");

    assert!(extract(&[a, b]).is_err());
    assert!(extract(&[b, a]).is_ok());
}

#[test]
fn test_same_file_forward_reference() {
    let table = extract(&[(
        "a.c",
        "DECLARE_MEMBER_FUNCTION(TYPE(eng, math, V), len, RESULT(TYPE(eng, math, f32)));\n\
         DECLARE_RESOURCE(Event, TYPE(eng, math, V));\n\
         DECLARE_TYPE(eng, math, V);",
    )])
    .unwrap();
    let v = find_struct(module(&table, "eng", "math"), "V");
    assert_eq!(v.functions.len(), 1);
    assert_eq!(v.resource, Some(ResourceKind::Event));
}

#[test]
fn test_getter_and_setter_across_files_merge() {
    let table = extract(&[
        ("types.c", "DECLARE_TYPE(eng, math, V);"),
        ("set.c", "DECLARE_PROPERTY_SETTER(TYPE(eng, math, V), len, TYPE(eng, math, f32));"),
        ("get.c", "DECLARE_PROPERTY_GETTER(TYPE(eng, math, V), len, TYPE(eng, math, f32));"),
    ])
    .unwrap();
    let v = find_struct(module(&table, "eng", "math"), "V");
    assert_eq!(v.properties.len(), 1);
    assert!(v.properties[0].get && v.properties[0].set);
}

#[test]
fn test_duplicate_member_functions_kept() {
    let text = "DECLARE_TYPE(eng, math, V);\n\
                DECLARE_MEMBER_FUNCTION(TYPE(eng, math, V), f);\n\
                DECLARE_MEMBER_FUNCTION(TYPE(eng, math, V), f);";
    let table = extract(&[("a.c", text)]).unwrap();
    let v = find_struct(module(&table, "eng", "math"), "V");
    assert_eq!(v.functions.len(), 2);
    assert_eq!(v.functions[0], v.functions[1]);
}

#[test]
fn test_duplicate_type_binds_first() {
    let table = extract(&[
        ("a.c", "// first\nDECLARE_TYPE(eng, math, V);"),
        ("b.c", "// second\nDECLARE_TYPE(eng, math, V);"),
        ("c.c", "DECLARE_PROPERTY(TYPE(eng, math, V), x, TYPE(eng, math, f32));"),
    ])
    .unwrap();
    let math = module(&table, "eng", "math");
    let structs: Vec<_> = math.structs().collect();
    assert_eq!(structs.len(), 2);
    assert_eq!(structs[0].properties.len(), 1);
    assert!(structs[1].properties.is_empty());
}

#[test]
fn test_modules_in_creation_order() {
    let table = extract(&[
        ("a.c", "DECLARE_TYPE(z, last, A);\nDECLARE_TYPE(a, first, B);"),
        ("b.c", "DECLARE_FUNCTION(FUNCTION(m, middle, f));\nDECLARE_TYPE(z, last, C);"),
    ])
    .unwrap();
    let keys: Vec<_> = table.modules().map(|m| m.key.to_string()).collect();
    assert_eq!(keys, ["z/last", "a/first", "m/middle"]);
}

#[test]
fn test_attaching_forms_never_create_modules() {
    let result = extract(&[(
        "a.c",
        "DECLARE_TYPE(eng, math, V);\n\
         DECLARE_PROPERTY(TYPE(eng, other, V), x, TYPE(eng, math, f32));",
    )]);
    assert!(result.is_err());
}

#[test]
fn test_extraction_is_idempotent() {
    let files = [("types.h", MATH_TYPES), ("members.c", MATH_MEMBERS)];
    let first = extract(&files).unwrap();
    let second = extract(&files).unwrap();

    let json = Json::default();
    let first: Vec<_> = first.modules().map(|m| json.write(m).unwrap()).collect();
    let second: Vec<_> = second.modules().map(|m| json.write(m).unwrap()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_non_annotation_text_is_ignored() {
    let table = extract(&[(
        "plain.c",
        "#include <stdio.h>\nint main(void) { printf(\"hi\\n\"); return 0; }\n",
    )])
    .unwrap();
    assert!(table.is_empty());
}
