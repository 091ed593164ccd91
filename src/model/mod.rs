//! Case-union model: the value objects that sit between declaration input and generated text.
//!
//! A [`CaseUnionModel`] is rebuilt from scratch for every annotated container and never mutated. Everything is
//! ordered (`Vec`), so rendering the same model twice yields the same bytes.
//!
//! ## Modules
//! - `decl`: plain declaration records the extractor consumes
//! - `extract`: declaration → model
//! - `errors`: extraction diagnostics

pub mod decl;
pub mod errors;
pub mod extract;

pub use decl::{Accessibility, ConstructorDeclaration, Parameter, TypeDeclaration, TypeParameters};
pub use errors::ExtractError;
pub use extract::extract;

use autoclosed_core::lang::keywords::{self, KeywordId};

/// One closed union: the annotated container and its case variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseUnionModel {
    /// Bare identifier of the container (`TokenKind`).
    pub name: String,
    /// Identifier plus generic parameter list as written (`Result<T, E>`).
    pub type_identifier: String,
    /// Modifiers, kind keyword and type identifier (`public partial abstract record TokenKind`).
    pub declaration: String,
    /// Fully qualified namespace; empty for the global namespace.
    pub namespace: String,
    /// Using directives from the container's source, re-emitted so argument types resolve the same way.
    pub usings: Vec<String>,
    /// Variants in declaration order.
    pub variants: Vec<Variant>,
}

/// A case of the union, re-declared as a subtype of the container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant {
    pub name: String,
    /// The variant's own modifiers, keyword and identifier (with its generic parameter list, if any).
    pub declaration: String,
    /// Generic parameter names of the variant itself; usually empty.
    pub type_parameters: Vec<String>,
    /// Parameters of the variant's public constructor; empty for singletons.
    pub args: Vec<CaseArg>,
}

impl Variant {
    /// Return `true` if the variant declares its own generic parameters.
    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    /// Return `true` if the variant is exposed as a cached instance rather than a factory.
    ///
    /// A generic variant always gets a factory, even without arguments.
    pub fn is_singleton(&self) -> bool {
        self.args.is_empty() && !self.is_generic()
    }
}

/// A positional field of a variant: type text as written, then the parameter name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseArg {
    pub ty: String,
    pub name: String,
    /// Parameter modifiers as written (`params`, `ref`, `in`, ...).
    pub modifiers: Vec<String>,
}

impl CaseArg {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifiers<I, S>(mut self, modifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.modifiers = modifiers.into_iter().map(Into::into).collect();
        self
    }

    /// The parameter as declared in a factory signature: `params int[] xs`, `ref int x`.
    pub fn parameter(&self) -> String {
        let mut parts: Vec<&str> = self.modifiers.iter().map(String::as_str).collect();
        parts.push(&self.ty);
        parts.push(&self.name);
        parts.join(" ")
    }

    /// The argument forwarding this parameter to the constructor: `x`, `ref x`, `out x`.
    ///
    /// `ref readonly` parameters are passed with `in`; `params`, `scoped` and `this` need nothing at the call site.
    pub fn argument(&self) -> String {
        let ids: Vec<KeywordId> = self.modifiers.iter().filter_map(|m| keywords::from_str(m)).collect();
        let pass = if ids.contains(&KeywordId::Out) {
            Some(KeywordId::Out)
        } else if ids.contains(&KeywordId::In) || (ids.contains(&KeywordId::Ref) && ids.contains(&KeywordId::Readonly)) {
            Some(KeywordId::In)
        } else if ids.contains(&KeywordId::Ref) {
            Some(KeywordId::Ref)
        } else {
            None
        };
        match pass {
            Some(id) => format!("{} {}", keywords::as_str(id), self.name),
            None => self.name.clone(),
        }
    }
}

impl CaseUnionModel {
    /// JSON view of the model, for `--emit-model`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "type_identifier": self.type_identifier,
            "declaration": self.declaration,
            "namespace": self.namespace,
            "usings": self.usings,
            "variants": self.variants.iter().map(|v| serde_json::json!({
                "name": v.name,
                "declaration": v.declaration,
                "type_parameters": v.type_parameters,
                "args": v.args.iter().map(|a| serde_json::json!({ "type": a.ty, "name": a.name, "modifiers": a.modifiers })).collect::<Vec<_>>(),
            })).collect::<Vec<_>>(),
        })
    }
}
