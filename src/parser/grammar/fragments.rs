//! Reusable argument shapes shared by the declaration forms.

use smol_str::SmolStr;

use super::Cursor;
use crate::base::{Reference, TypeReference};
use crate::parser::ast::{Parameter, ParameterType};
use crate::parser::syntax_kind::SyntaxKind;

/// `owner , project , name`
pub fn reference(p: &mut Cursor<'_, '_>) -> Option<Reference> {
    let owner = p.word()?;
    p.expect(SyntaxKind::COMMA)?;
    let project = p.word()?;
    p.expect(SyntaxKind::COMMA)?;
    let name = p.word()?;
    Some(Reference::new(owner, project, name))
}

/// `TYPE ( owner , project , name )`
pub fn type_ref(p: &mut Cursor<'_, '_>) -> Option<Reference> {
    p.attempt(|p| {
        p.expect(SyntaxKind::TYPE_KW)?;
        p.expect(SyntaxKind::L_PAREN)?;
        let reference = reference(p)?;
        p.expect(SyntaxKind::R_PAREN)?;
        Some(reference)
    })
}

/// `TYPE ( owner , project , name { , TYPE(...) } )`
pub fn type_ref_with_generics(p: &mut Cursor<'_, '_>) -> Option<TypeReference> {
    p.attempt(|p| {
        p.expect(SyntaxKind::TYPE_KW)?;
        p.expect(SyntaxKind::L_PAREN)?;
        let reference = reference(p)?;
        let generics = p.comma_list(type_ref);
        p.expect(SyntaxKind::R_PAREN)?;
        Some(TypeReference::new(reference, generics))
    })
}

fn wrapped_word(p: &mut Cursor<'_, '_>, marker: SyntaxKind) -> Option<SmolStr> {
    p.attempt(|p| {
        p.expect(marker)?;
        p.expect(SyntaxKind::L_PAREN)?;
        let name = p.word()?;
        p.expect(SyntaxKind::R_PAREN)?;
        Some(name)
    })
}

/// `GENERIC_TYPE ( T )`, a type's generic parameter
pub fn generic_type_arg(p: &mut Cursor<'_, '_>) -> Option<SmolStr> {
    wrapped_word(p, SyntaxKind::GENERIC_TYPE_KW)
}

/// `GENERIC ( T )`, a function's generic parameter
pub fn generic(p: &mut Cursor<'_, '_>) -> Option<SmolStr> {
    wrapped_word(p, SyntaxKind::GENERIC_KW)
}

/// `PARAMETER ( name , TYPE(...) | T )`
///
/// `GENERIC_PARAMETER` is accepted as a synonym; the bound is decided by its
/// shape, not by the marker.
pub fn parameter(p: &mut Cursor<'_, '_>) -> Option<Parameter> {
    p.attempt(|p| {
        p.eat_any(&[SyntaxKind::PARAMETER_KW, SyntaxKind::GENERIC_PARAMETER_KW])?;
        p.expect(SyntaxKind::L_PAREN)?;
        let name = p.word()?;
        p.expect(SyntaxKind::COMMA)?;
        let ty = match type_ref(p) {
            Some(reference) => ParameterType::Concrete(reference),
            None => ParameterType::Generic(p.word()?),
        };
        p.expect(SyntaxKind::R_PAREN)?;
        Some(Parameter { name, ty })
    })
}

/// `FUNCTION ( owner , project , name )`
pub fn function_ref(p: &mut Cursor<'_, '_>) -> Option<Reference> {
    p.attempt(|p| {
        p.expect(SyntaxKind::FUNCTION_KW)?;
        p.expect(SyntaxKind::L_PAREN)?;
        let reference = reference(p)?;
        p.expect(SyntaxKind::R_PAREN)?;
        Some(reference)
    })
}

/// `RESULT ( TYPE(...) )`
pub fn result(p: &mut Cursor<'_, '_>) -> Option<Reference> {
    p.attempt(|p| {
        p.expect(SyntaxKind::RESULT_KW)?;
        p.expect(SyntaxKind::L_PAREN)?;
        let output = type_ref(p)?;
        p.expect(SyntaxKind::R_PAREN)?;
        Some(output)
    })
}
