//! Filesystem driver: loading inputs and writing descriptors.

use std::fs;
use std::path::Path;

use metadecl::interchange::{DescriptorFormat, FormatKind, Json};
use metadecl::project::{SourceLoader, summarize};
use metadecl::{ExtractError, Extractor, ExtractorConfig, write_descriptors};
use serde_json::Value;
use tempfile::TempDir;

use crate::helpers::{MATH_MEMBERS, MATH_TYPES};

fn write_inputs(dir: &Path) -> Vec<std::path::PathBuf> {
    let types = dir.join("math_types.h");
    let members = dir.join("math_members.c");
    fs::write(&types, MATH_TYPES).unwrap();
    fs::write(&members, MATH_MEMBERS).unwrap();
    vec![types, members]
}

#[test]
fn test_extract_and_write_json() {
    let temp_dir = TempDir::new().unwrap();
    let inputs = write_inputs(temp_dir.path());
    let out_dir = temp_dir.path().join("gen");

    let mut extractor = Extractor::new();
    extractor.add_files(&inputs).unwrap();
    let table = extractor.finish().unwrap();

    let written = write_descriptors(&table, &ExtractorConfig::new(&out_dir)).unwrap();
    assert_eq!(written, vec![out_dir.join("eng--math.json")]);

    let value: Value = serde_json::from_slice(&fs::read(&written[0]).unwrap()).unwrap();
    assert_eq!(value["module"], "eng/math");
    let vector = &value["declarations"][0]["Struct"];
    assert_eq!(vector["name"], "Vector3");
    assert_eq!(vector["resource"], "SceneComponent");
    assert_eq!(vector["properties"][0]["type"]["definition"], "f32");
}

#[test]
fn test_descriptor_reads_back() {
    let temp_dir = TempDir::new().unwrap();
    let inputs = write_inputs(temp_dir.path());

    let mut extractor = Extractor::new();
    extractor.add_files(&inputs).unwrap();
    let table = extractor.finish().unwrap();

    let config = ExtractorConfig::new(temp_dir.path()).with_pretty(false);
    let written = write_descriptors(&table, &config).unwrap();
    let module = Json::default().read(&fs::read(&written[0]).unwrap()).unwrap();
    assert_eq!(&module, table.modules().next().unwrap());
}

#[test]
fn test_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let inputs = write_inputs(temp_dir.path());

    let run = |out: &Path| {
        let mut extractor = Extractor::new();
        extractor.add_files(&inputs).unwrap();
        let table = extractor.finish().unwrap();
        let written = write_descriptors(&table, &ExtractorConfig::new(out)).unwrap();
        fs::read(&written[0]).unwrap()
    };

    let first = run(&temp_dir.path().join("one"));
    let second = run(&temp_dir.path().join("two"));
    assert_eq!(first, second);
}

#[test]
fn test_custom_delimiter() {
    let temp_dir = TempDir::new().unwrap();
    let mut extractor = Extractor::new();
    extractor.add_source("a.c", "DECLARE_TYPE(eng, math, V);");
    let table = extractor.finish().unwrap();

    let config = ExtractorConfig::new(temp_dir.path()).with_delimiter("_");
    let written = write_descriptors(&table, &config).unwrap();
    assert_eq!(written[0].file_name().unwrap(), "eng_math.json");
}

#[test]
fn test_unresolved_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("bad.c");
    fs::write(
        &input,
        "DECLARE_TYPE(eng, math, V);\nDECLARE_PROPERTY(TYPE(eng, math, W), x, TYPE(eng, math, f32));",
    )
    .unwrap();

    let mut extractor = Extractor::new();
    extractor.add_file(&input).unwrap();
    let err = extractor.finish().err().unwrap();
    let ExtractError::Unresolved(errors) = &err else {
        panic!("expected unresolved, got {err}");
    };
    assert_eq!(errors.len(), 1);
    assert!(errors[0].file.ends_with("bad.c"));
    assert!(!temp_dir.path().join("eng--math.json").exists());
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut extractor = Extractor::new();
    let err = extractor
        .add_file(temp_dir.path().join("missing.c"))
        .unwrap_err();
    assert!(matches!(err, ExtractError::Read { .. }));
    assert!(err.to_string().contains("missing.c"));
}

#[cfg(not(feature = "yaml"))]
#[test]
fn test_yaml_without_feature_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let mut extractor = Extractor::new();
    extractor.add_source("a.c", "DECLARE_TYPE(eng, math, V);");
    let table = extractor.finish().unwrap();

    let config = ExtractorConfig::new(temp_dir.path()).with_format(FormatKind::Yaml);
    let err = write_descriptors(&table, &config).unwrap_err();
    assert!(matches!(err, ExtractError::Interchange(_)));
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_descriptor() {
    let temp_dir = TempDir::new().unwrap();
    let mut extractor = Extractor::new();
    extractor.add_source("a.c", "DECLARE_TYPE(eng, math, V);");
    let table = extractor.finish().unwrap();

    let config = ExtractorConfig::new(temp_dir.path()).with_format(FormatKind::Yaml);
    let written = write_descriptors(&table, &config).unwrap();
    assert_eq!(written[0].file_name().unwrap(), "eng--math.yaml");
    let text = fs::read_to_string(&written[0]).unwrap();
    assert!(text.contains("module: eng/math"));
}

struct FixtureLoader;

impl SourceLoader for FixtureLoader {
    fn load(&self, path: &Path) -> Result<String, ExtractError> {
        match path.to_str() {
            Some("types.h") => Ok(MATH_TYPES.to_string()),
            Some("members.c") => Ok(MATH_MEMBERS.to_string()),
            _ => Err(ExtractError::read(
                path,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no fixture"),
            )),
        }
    }
}

#[test]
fn test_custom_loader() {
    let mut extractor = Extractor::with_loader(FixtureLoader);
    extractor.add_files(["types.h", "members.c"]).unwrap();
    assert_eq!(extractor.file_count(), 2);
    let table = extractor.finish().unwrap();

    let summary = summarize(&table);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].structs, 3);
    assert_eq!(summary[0].aliases, 1);
    assert_eq!(summary[0].functions, 1);
    assert_eq!(summary[0].properties, 2);
    assert_eq!(summary[0].members, 2);
    assert!(summary[0].to_string().starts_with("eng/math: 3 struct(s)"));
}
