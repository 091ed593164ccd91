//! Model extraction: one annotated container declaration in, one [`CaseUnionModel`] out.
//!
//! ## Rules
//! - The container must be `partial`; anything else is reported, never rendered as an empty union.
//! - Only nested declarations that are themselves `partial` become variants, in declaration order.
//! - A variant's arguments come from its single public constructor (a primary constructor counts). No public
//!   constructor makes it a singleton; more than one is ambiguous and reported.

use autoclosed_core::lang::keywords::{self, KeywordId};

use super::decl::{ConstructorDeclaration, TypeDeclaration};
use super::errors::ExtractError;
use super::{CaseArg, CaseUnionModel, Variant};

/// Build the model for an annotated container.
///
/// ## Errors
/// - [`ExtractError::NotPartial`] if the container lacks `partial`.
/// - [`ExtractError::AmbiguousConstructor`] if a variant has more than one public constructor.
#[tracing::instrument(skip_all, fields(container = %container.identifier))]
pub fn extract(container: &TypeDeclaration) -> Result<CaseUnionModel, ExtractError> {
    let partial = keywords::as_str(KeywordId::Partial);
    if !container.has_modifier(partial) {
        return Err(ExtractError::NotPartial {
            name: container.identifier.clone(),
            span: container.span,
        });
    }

    let mut variants = Vec::new();
    for nested in &container.nested {
        if !nested.has_modifier(partial) {
            tracing::debug!(variant = %nested.identifier, "skipping non-partial nested type");
            continue;
        }
        variants.push(variant(container, nested)?);
    }

    tracing::debug!(variants = variants.len(), "extracted case union");

    Ok(CaseUnionModel {
        name: container.identifier.clone(),
        type_identifier: container.type_identifier(),
        declaration: container.declaration(),
        namespace: container.namespace.clone(),
        usings: container.usings.clone(),
        variants,
    })
}

fn variant(container: &TypeDeclaration, nested: &TypeDeclaration) -> Result<Variant, ExtractError> {
    let public: Vec<&ConstructorDeclaration> = nested.constructors.iter().filter(|c| c.is_public()).collect();

    let args = match public.as_slice() {
        [] => Vec::new(),
        [ctor] => ctor
            .params
            .iter()
            .map(|p| CaseArg::new(&p.ty, &p.name).with_modifiers(p.modifiers.iter().cloned()))
            .collect(),
        many => {
            return Err(ExtractError::AmbiguousConstructor {
                container: container.identifier.clone(),
                variant: nested.identifier.clone(),
                count: many.len(),
                span: nested.span,
            });
        }
    };

    Ok(Variant {
        name: nested.identifier.clone(),
        declaration: nested.declaration(),
        type_parameters: nested
            .type_parameters
            .as_ref()
            .map(|tp| tp.names.clone())
            .unwrap_or_default(),
        args,
    })
}
