//! Declaration records: the input side of extraction.
//!
//! These are deliberately plain. The front-end lowers parsed C# into them, and library users (or tests) can
//! build them by hand without touching a parser.

use miette::SourceSpan;

/// A type declaration as the extractor sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeDeclaration {
    /// Bare identifier as written (verbatim `@name` kept).
    pub identifier: String,
    pub type_parameters: Option<TypeParameters>,
    /// Modifiers in source order (`public`, `partial`, `abstract`, ...).
    pub modifiers: Vec<String>,
    /// Kind keyword(s): `record`, `class`, `record struct`, ...
    pub keyword: String,
    /// Enclosing namespace; empty for the global namespace.
    pub namespace: String,
    /// Constructors in source order; a primary constructor comes first.
    pub constructors: Vec<ConstructorDeclaration>,
    /// Nested type declarations in source order.
    pub nested: Vec<TypeDeclaration>,
    /// Location of the identifier, for diagnostics.
    pub span: Option<SourceSpan>,
    /// Using directives in scope at the declaration, without `using` and `;` (`System.Text`, `static System.Math`,
    /// `Map = System.Collections.Generic.Dictionary<string, int>`).
    pub usings: Vec<String>,
}

/// Generic parameter list of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameters {
    /// Text from `<` to `>` as written.
    pub text: String,
    pub names: Vec<String>,
}

impl TypeParameters {
    /// Build a parameter list from names, spelled `<A, B>`.
    pub fn from_names(names: &[&str]) -> Self {
        Self {
            text: format!("<{}>", names.join(", ")),
            names: names.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// Declared accessibility of a constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessibility {
    Public,
    Internal,
    Protected,
    Private,
}

/// A constructor: accessibility plus ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorDeclaration {
    pub accessibility: Accessibility,
    pub params: Vec<Parameter>,
}

impl ConstructorDeclaration {
    pub fn new(accessibility: Accessibility, params: &[(&str, &str)]) -> Self {
        Self {
            accessibility,
            params: params.iter().map(|(ty, name)| Parameter::new(*ty, *name)).collect(),
        }
    }

    pub fn public(params: &[(&str, &str)]) -> Self {
        Self::new(Accessibility::Public, params)
    }

    pub fn is_public(&self) -> bool {
        self.accessibility == Accessibility::Public
    }
}

/// A constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub ty: String,
    pub name: String,
    /// Parameter modifiers in source order (`params`, `ref`, `readonly`, ...).
    pub modifiers: Vec<String>,
}

impl Parameter {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            modifiers: Vec::new(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[&str]) -> Self {
        self.modifiers = modifiers.iter().map(|m| m.to_string()).collect();
        self
    }
}

impl TypeDeclaration {
    /// Create a declaration with no modifiers, members or namespace.
    pub fn new(identifier: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    pub fn with_modifiers(mut self, modifiers: &[&str]) -> Self {
        self.modifiers = modifiers.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_type_parameters(mut self, type_parameters: TypeParameters) -> Self {
        self.type_parameters = Some(type_parameters);
        self
    }

    pub fn with_constructor(mut self, ctor: ConstructorDeclaration) -> Self {
        self.constructors.push(ctor);
        self
    }

    pub fn with_nested(mut self, nested: TypeDeclaration) -> Self {
        self.nested.push(nested);
        self
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_using(mut self, using: impl Into<String>) -> Self {
        self.usings.push(using.into());
        self
    }

    /// Return `true` if the declaration carries the given modifier.
    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }

    /// Identifier followed by the generic parameter list as written (`Foo<T>`).
    pub fn type_identifier(&self) -> String {
        match &self.type_parameters {
            Some(tp) => format!("{}{}", self.identifier, tp.text),
            None => self.identifier.clone(),
        }
    }

    /// Modifiers, keyword and type identifier joined by single spaces.
    pub fn declaration(&self) -> String {
        let ident = self.type_identifier();
        let mut parts: Vec<&str> = self.modifiers.iter().map(String::as_str).collect();
        parts.push(&self.keyword);
        parts.push(&ident);
        parts.join(" ")
    }
}
