//! The `DECLARE_*` forms.
//!
//! Each function expects the cursor to sit on the form's keyword and
//! consumes through the closing `)` (and `;` where the form requires it).

use super::fragments::{
    function_ref, generic, generic_type_arg, parameter, reference, result, type_ref,
    type_ref_with_generics,
};
use super::Cursor;
use crate::parser::ast::{
    Accessor, FunctionDecl, FunctionTarget, GenericTypeDecl, MemberRole, PropertyDecl,
    ResourceDecl, ResourceKind, TypeAliasDecl, TypeDecl,
};
use crate::parser::syntax_kind::SyntaxKind;

/// `DECLARE_TYPE ( owner , project , Name ) ;`
pub fn type_decl(p: &mut Cursor<'_, '_>) -> Option<TypeDecl> {
    p.attempt(|p| {
        p.expect(SyntaxKind::DECLARE_TYPE_KW)?;
        p.expect(SyntaxKind::L_PAREN)?;
        let reference = reference(p)?;
        p.expect(SyntaxKind::R_PAREN)?;
        p.expect(SyntaxKind::SEMICOLON)?;
        Some(TypeDecl { reference })
    })
}

/// `DECLARE_GENERIC_TYPE ( owner , project , Name { , GENERIC_TYPE(T) } ) ;`
pub fn generic_type_decl(p: &mut Cursor<'_, '_>) -> Option<GenericTypeDecl> {
    p.attempt(|p| {
        p.expect(SyntaxKind::DECLARE_GENERIC_TYPE_KW)?;
        p.expect(SyntaxKind::L_PAREN)?;
        let reference = reference(p)?;
        let generics = p.comma_list(generic_type_arg);
        p.expect(SyntaxKind::R_PAREN)?;
        p.expect(SyntaxKind::SEMICOLON)?;
        Some(GenericTypeDecl {
            reference,
            generics,
        })
    })
}

/// `DECLARE_TYPE_ALIAS ( TYPE(alias) , TYPE(target { , TYPE(arg) }) ) ;`
pub fn type_alias_decl(p: &mut Cursor<'_, '_>) -> Option<TypeAliasDecl> {
    p.attempt(|p| {
        p.expect(SyntaxKind::DECLARE_TYPE_ALIAS_KW)?;
        p.expect(SyntaxKind::L_PAREN)?;
        let alias = type_ref(p)?;
        p.expect(SyntaxKind::COMMA)?;
        let target = type_ref_with_generics(p)?;
        p.expect(SyntaxKind::R_PAREN)?;
        p.expect(SyntaxKind::SEMICOLON)?;
        Some(TypeAliasDecl { alias, target })
    })
}

/// `DECLARE_RESOURCE ( Kind , TYPE(...) )`
///
/// The trailing `;` is optional: resource tags usually appear inside other
/// macro expansions.
pub fn resource_decl(p: &mut Cursor<'_, '_>) -> Option<ResourceDecl> {
    p.attempt(|p| {
        p.expect(SyntaxKind::DECLARE_RESOURCE_KW)?;
        p.expect(SyntaxKind::L_PAREN)?;
        let kind = ResourceKind::from_name(&p.word()?)?;
        p.expect(SyntaxKind::COMMA)?;
        let target = type_ref(p)?;
        p.expect(SyntaxKind::R_PAREN)?;
        p.eat(SyntaxKind::SEMICOLON);
        Some(ResourceDecl { kind, target })
    })
}

/// `DECLARE_PROPERTY ( TYPE(owner) , name , TYPE(type) ) ;` and the
/// `_GETTER` / `_SETTER` variants.
pub fn property_decl(p: &mut Cursor<'_, '_>) -> Option<PropertyDecl> {
    p.attempt(|p| {
        let accessor = match p.eat_any(&[
            SyntaxKind::DECLARE_PROPERTY_KW,
            SyntaxKind::DECLARE_PROPERTY_GETTER_KW,
            SyntaxKind::DECLARE_PROPERTY_SETTER_KW,
        ])? {
            SyntaxKind::DECLARE_PROPERTY_GETTER_KW => Accessor::Getter,
            SyntaxKind::DECLARE_PROPERTY_SETTER_KW => Accessor::Setter,
            _ => Accessor::Full,
        };
        p.expect(SyntaxKind::L_PAREN)?;
        let owner = type_ref(p)?;
        p.expect(SyntaxKind::COMMA)?;
        let name = p.word()?;
        p.expect(SyntaxKind::COMMA)?;
        let ty = type_ref(p)?;
        p.expect(SyntaxKind::R_PAREN)?;
        p.expect(SyntaxKind::SEMICOLON)?;
        Some(PropertyDecl {
            accessor,
            owner,
            name,
            ty,
        })
    })
}

/// Free or type-scoped function declaration.
///
/// ```text
/// DECLARE_FUNCTION ( FUNCTION(owner, project, name) <tail> ) ;
/// DECLARE_TYPE_FUNCTION ( TYPE(...) , name <tail> ) ;
/// DECLARE_MEMBER_FUNCTION ( TYPE(...) , name <tail> ) ;
/// DECLARE_MUTABLE_MEMBER_FUNCTION ( TYPE(...) , name <tail> ) ;
///
/// <tail> = { , GENERIC(T) } { , PARAMETER(...) } [ , RESULT(TYPE(...)) ]
/// ```
pub fn function_decl(p: &mut Cursor<'_, '_>) -> Option<FunctionDecl> {
    p.attempt(|p| {
        let keyword = p.eat_any(&[
            SyntaxKind::DECLARE_FUNCTION_KW,
            SyntaxKind::DECLARE_TYPE_FUNCTION_KW,
            SyntaxKind::DECLARE_MEMBER_FUNCTION_KW,
            SyntaxKind::DECLARE_MUTABLE_MEMBER_FUNCTION_KW,
        ])?;
        p.expect(SyntaxKind::L_PAREN)?;

        let target = match keyword {
            SyntaxKind::DECLARE_FUNCTION_KW => FunctionTarget::Free(function_ref(p)?),
            _ => {
                let role = match keyword {
                    SyntaxKind::DECLARE_TYPE_FUNCTION_KW => MemberRole::TypeLevel,
                    SyntaxKind::DECLARE_MEMBER_FUNCTION_KW => MemberRole::Member,
                    _ => MemberRole::MutableMember,
                };
                let owner = type_ref(p)?;
                p.expect(SyntaxKind::COMMA)?;
                let name = p.word()?;
                FunctionTarget::Type { owner, name, role }
            }
        };

        let generics = p.comma_list(generic);
        let inputs = p.comma_list(parameter);
        let output = p.attempt(|p| {
            p.expect(SyntaxKind::COMMA)?;
            result(p)
        });

        p.expect(SyntaxKind::R_PAREN)?;
        p.expect(SyntaxKind::SEMICOLON)?;
        Some(FunctionDecl {
            target,
            generics,
            inputs,
            output,
        })
    })
}
