//! Abstract Syntax Tree definitions for C# declaration skeletons.
//!
//! The tree only models what the generator needs: namespaces, type declarations with their attributes, modifiers,
//! generic parameters and constructors, and the nesting between them. Source order is preserved everywhere
//! (`Vec`, never maps) because generated output follows declaration order.

use std::fmt;

use autoclosed_core::lang::keywords::{self, KeywordId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier as written (verbatim identifiers keep their `@`).
pub type Ident = String;

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    pub items: Vec<Spanned<Item>>,
}

/// Namespace-level items the parser keeps.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Using(UsingDirective),
    Namespace(NamespaceDecl),
    Type(TypeDecl),
}

/// `using System.Text;`, `using static System.Math;`, `global using Map = System.Collections.Generic.Dictionary<string, int>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsingDirective {
    pub global: bool,
    pub is_static: bool,
    pub alias: Option<Ident>,
    /// Namespace or type as written, whitespace runs collapsed.
    pub target: String,
}

impl fmt::Display for UsingDirective {
    /// The directive body without `global`, `using` or `;`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            f.write_str("static ")?;
        }
        if let Some(alias) = &self.alias {
            write!(f, "{alias} = ")?;
        }
        f.write_str(&self.target)
    }
}

/// `namespace A.B { ... }` or `namespace A.B;`
///
/// A file-scoped namespace owns every item that follows it in the file.
#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    /// Dotted name as written, e.g. `Company.Product`.
    pub name: String,
    pub file_scoped: bool,
    pub items: Vec<Spanned<Item>>,
}

// ============================================================================
// Types
// ============================================================================

/// Kind keyword(s) of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
    Interface,
    Record,
    RecordClass,
    RecordStruct,
    Enum,
}

impl TypeKind {
    /// Keyword text as it appears in a declaration header.
    pub fn as_str(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Struct => "struct",
            TypeKind::Interface => "interface",
            TypeKind::Record => "record",
            TypeKind::RecordClass => "record class",
            TypeKind::RecordStruct => "record struct",
            TypeKind::Enum => "enum",
        }
    }

    /// Return `true` if a parameter list after the name declares a primary constructor.
    pub fn has_primary_constructor(self) -> bool {
        !matches!(self, TypeKind::Interface | TypeKind::Enum)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A declaration modifier (`public`, `partial`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier(pub KeywordId);

impl Modifier {
    pub fn as_str(self) -> &'static str {
        keywords::as_str(self.0)
    }

    pub fn is(self, id: KeywordId) -> bool {
        self.0 == id
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One attribute inside an attribute section, e.g. `ExhaustiveMatching.AutoClosed(true)`.
///
/// Arguments are skipped; only the name is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Dotted name as written, without any `global::` prefix.
    pub name: String,
    /// Attribute target (`assembly`, `return`, ...) of the enclosing section, if any.
    pub target: Option<Ident>,
}

/// Generic parameter list of a declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParameterList {
    /// Source text from `<` to `>` inclusive, verbatim.
    pub text: String,
    /// Parameter names in order (variance and attributes stripped).
    pub names: Vec<Ident>,
}

/// A type declaration header plus the members the generator cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDecl {
    pub attributes: Vec<Spanned<Attribute>>,
    pub modifiers: Vec<Spanned<Modifier>>,
    pub kind: TypeKind,
    pub name: Spanned<Ident>,
    pub type_params: Option<TypeParameterList>,
    /// Primary constructor parameters (`record Number(string Value)`).
    pub primary_params: Option<Vec<Param>>,
    pub members: Vec<Spanned<Member>>,
}

impl TypeDecl {
    /// Return `true` if the declaration carries the given modifier.
    pub fn has_modifier(&self, id: KeywordId) -> bool {
        self.modifiers.iter().any(|m| m.node.is(id))
    }

    /// Nested type declarations in source order, with their spans.
    pub fn nested_types(&self) -> impl Iterator<Item = (&TypeDecl, Span)> {
        self.members.iter().filter_map(|m| match &m.node {
            Member::Type(decl) => Some((decl, m.span)),
            Member::Constructor(_) => None,
        })
    }

    /// Explicit constructor declarations in source order.
    pub fn constructors(&self) -> impl Iterator<Item = &ConstructorDecl> {
        self.members.iter().filter_map(|m| match &m.node {
            Member::Constructor(ctor) => Some(ctor),
            Member::Type(_) => None,
        })
    }
}

/// Members kept from a type body.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Type(TypeDecl),
    Constructor(ConstructorDecl),
}

/// An explicit constructor declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstructorDecl {
    pub modifiers: Vec<Spanned<Modifier>>,
    pub params: Vec<Param>,
}

impl ConstructorDecl {
    /// Return `true` if the constructor carries the given modifier.
    pub fn has_modifier(&self, id: KeywordId) -> bool {
        self.modifiers.iter().any(|m| m.node.is(id))
    }
}

/// A formal parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Type text as written, with whitespace runs collapsed to one space.
    pub ty: String,
    pub name: Ident,
    /// Parameter modifiers (`ref`, `params`, ...) in order.
    pub modifiers: Vec<KeywordId>,
    pub span: Span,
}
