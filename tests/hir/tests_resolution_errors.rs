//! Unresolved references and warnings.

use metadecl::hir::{Phase, Severity, UnresolvedReason, codes};
use metadecl::{ExtractError, Extractor};

use crate::helpers::extract;

fn unresolved(files: &[(&str, &str)]) -> Vec<metadecl::UnresolvedTypeReference> {
    match extract(files) {
        Err(ExtractError::Unresolved(errors)) => errors,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected unresolved references"),
    }
}

#[test]
fn test_every_attaching_phase_reports() {
    let errors = unresolved(&[(
        "a.c",
        "DECLARE_RESOURCE(Event, TYPE(x, y, A));\n\
         DECLARE_PROPERTY(TYPE(x, y, A), p, TYPE(x, y, i32));\n\
         DECLARE_PROPERTY_GETTER(TYPE(x, y, A), g, TYPE(x, y, i32));\n\
         DECLARE_PROPERTY_SETTER(TYPE(x, y, A), s, TYPE(x, y, i32));\n\
         DECLARE_TYPE_FUNCTION(TYPE(x, y, A), f);\n",
    )]);
    let phases: Vec<_> = errors.iter().map(|e| e.phase).collect();
    assert_eq!(
        phases,
        [
            Phase::Resources,
            Phase::Properties,
            Phase::PropertyGetters,
            Phase::PropertySetters,
            Phase::Functions,
        ]
    );
    let lines: Vec<_> = errors.iter().map(|e| e.position.line).collect();
    assert_eq!(lines, [0, 1, 2, 3, 4]);
}

#[test]
fn test_reasons() {
    let errors = unresolved(&[(
        "a.c",
        "DECLARE_TYPE(x, y, A);\n\
         DECLARE_TYPE_ALIAS(TYPE(x, y, B), TYPE(x, y, A));\n\
         DECLARE_PROPERTY(TYPE(q, y, A), p, TYPE(x, y, i32));\n\
         DECLARE_PROPERTY(TYPE(x, y, Z), p, TYPE(x, y, i32));\n\
         DECLARE_PROPERTY(TYPE(x, y, B), p, TYPE(x, y, i32));\n",
    )]);
    let reasons: Vec<_> = errors.iter().map(|e| e.reason).collect();
    assert_eq!(
        reasons,
        [
            UnresolvedReason::MissingModule,
            UnresolvedReason::MissingType,
            UnresolvedReason::AliasTarget,
        ]
    );
}

#[test]
fn test_errors_collected_across_files() {
    let errors = unresolved(&[
        ("a.c", "DECLARE_MEMBER_FUNCTION(TYPE(x, y, A), f);"),
        ("b.c", "DECLARE_TYPE(x, y, B);"),
        ("c.c", "DECLARE_RESOURCE(Event, TYPE(x, y, C))"),
    ]);
    assert_eq!(errors.len(), 2);
    assert_eq!(&*errors[0].file, "a.c");
    assert_eq!(&*errors[1].file, "c.c");
}

#[test]
fn test_error_message_format() {
    let errors = unresolved(&[("src/a.c", "\n\n  DECLARE_RESOURCE(Event, TYPE(x, y, A));")]);
    assert_eq!(
        errors[0].to_string(),
        "src/a.c:3:3: unresolved type reference x/y/A in resource tags (no such module)"
    );
    let diagnostic = errors[0].to_diagnostic();
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.code, codes::UNRESOLVED_TYPE_REFERENCE);
}

#[test]
fn test_mismatch_warning_does_not_fail_run() {
    let mut extractor = Extractor::new();
    extractor.add_source(
        "a.c",
        "DECLARE_TYPE(x, y, A);\n\
         DECLARE_PROPERTY(TYPE(x, y, A), p, TYPE(x, y, i32));\n\
         DECLARE_PROPERTY_GETTER(TYPE(x, y, A), p, TYPE(x, y, i64));\n",
    );
    let warnings = extractor.diagnostics().warnings().to_vec();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code, codes::PROPERTY_TYPE_MISMATCH);
    assert_eq!(warnings[0].position.line, 2);
    assert!(extractor.finish().is_ok());
}
