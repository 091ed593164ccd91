//! Define the C# keyword vocabulary understood by the declaration front-end.
//!
//! This module is the single source of truth for recognised words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, categories, and whether the word is contextual.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, as in C#.
//! - Contextual keywords (`record`, `partial`, `global`, ...) are only keywords in specific positions. The parser
//!   accepts them wherever an identifier is expected; see [`is_contextual`].
//! - Words that never influence a declaration skeleton (`void`, `return`, `if`, ...) are deliberately absent and lex
//!   as identifiers.
//!
//! ## Examples
//! ```rust
//! use autoclosed_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("sealed"), Some(KeywordId::Sealed));
//! assert_eq!(keywords::category(KeywordId::Sealed), KeywordCategory::Modifier);
//! assert!(keywords::is_contextual(KeywordId::Record));
//! ```

/// Stable identifier for every recognised keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Type kinds
    Class,
    Struct,
    Interface,
    Record,
    Enum,
    Delegate,

    // Declaration modifiers
    Public,
    Private,
    Protected,
    Internal,
    File,
    Partial,
    Abstract,
    Sealed,
    Static,
    Readonly,
    Ref,
    Unsafe,
    New,
    Virtual,
    Override,
    Extern,
    Required,

    // Namespaces / imports
    Namespace,
    Using,
    Global,

    // Parameter modifiers and variance
    Params,
    Out,
    In,
    This,
    Scoped,

    // Clauses
    Where,
}

/// High-level grouping used by the parser and by diagnostics.
///
/// ## Notes
/// - `Ref` and `Readonly` are registered as modifiers; the parser also accepts them in parameter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces a type declaration (`class`, `record`, ...).
    TypeKind,
    /// Declaration modifier (`public`, `partial`, ...).
    Modifier,
    /// Namespace or import syntax.
    Namespace,
    /// Parameter modifier or type-parameter variance.
    Parameter,
    /// Trailing declaration clause (`where`).
    Clause,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    /// Contextual keywords may also be used as identifiers.
    pub contextual: bool,
    /// Accessibility modifiers decide constructor visibility.
    pub accessibility: bool,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Type kinds
    info(KeywordId::Class, "class", KeywordCategory::TypeKind),
    info(KeywordId::Struct, "struct", KeywordCategory::TypeKind),
    info(KeywordId::Interface, "interface", KeywordCategory::TypeKind),
    contextual(KeywordId::Record, "record", KeywordCategory::TypeKind),
    info(KeywordId::Enum, "enum", KeywordCategory::TypeKind),
    info(KeywordId::Delegate, "delegate", KeywordCategory::TypeKind),
    // Declaration modifiers
    access(KeywordId::Public, "public"),
    access(KeywordId::Private, "private"),
    access(KeywordId::Protected, "protected"),
    access(KeywordId::Internal, "internal"),
    KeywordInfo {
        id: KeywordId::File,
        canonical: "file",
        category: KeywordCategory::Modifier,
        contextual: true,
        accessibility: true,
    },
    contextual(KeywordId::Partial, "partial", KeywordCategory::Modifier),
    info(KeywordId::Abstract, "abstract", KeywordCategory::Modifier),
    info(KeywordId::Sealed, "sealed", KeywordCategory::Modifier),
    info(KeywordId::Static, "static", KeywordCategory::Modifier),
    info(KeywordId::Readonly, "readonly", KeywordCategory::Modifier),
    info(KeywordId::Ref, "ref", KeywordCategory::Modifier),
    info(KeywordId::Unsafe, "unsafe", KeywordCategory::Modifier),
    info(KeywordId::New, "new", KeywordCategory::Modifier),
    info(KeywordId::Virtual, "virtual", KeywordCategory::Modifier),
    info(KeywordId::Override, "override", KeywordCategory::Modifier),
    info(KeywordId::Extern, "extern", KeywordCategory::Modifier),
    contextual(KeywordId::Required, "required", KeywordCategory::Modifier),
    // Namespaces / imports
    info(KeywordId::Namespace, "namespace", KeywordCategory::Namespace),
    info(KeywordId::Using, "using", KeywordCategory::Namespace),
    contextual(KeywordId::Global, "global", KeywordCategory::Namespace),
    // Parameter modifiers and variance
    info(KeywordId::Params, "params", KeywordCategory::Parameter),
    info(KeywordId::Out, "out", KeywordCategory::Parameter),
    info(KeywordId::In, "in", KeywordCategory::Parameter),
    info(KeywordId::This, "this", KeywordCategory::Parameter),
    contextual(KeywordId::Scoped, "scoped", KeywordCategory::Parameter),
    // Clauses
    contextual(KeywordId::Where, "where", KeywordCategory::Clause),
];

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return `true` if the keyword may also appear as an identifier.
pub fn is_contextual(id: KeywordId) -> bool {
    info_for(id).contextual
}

/// Return `true` if the keyword is a declaration modifier.
pub fn is_modifier(id: KeywordId) -> bool {
    info_for(id).category == KeywordCategory::Modifier
}

/// Return `true` if the keyword is an accessibility modifier.
pub fn is_accessibility(id: KeywordId) -> bool {
    info_for(id).accessibility
}

/// Return the full metadata entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise (the word lexes as an identifier).
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        contextual: false,
        accessibility: false,
    }
}

const fn contextual(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        contextual: true,
        ..info(id, canonical, category)
    }
}

const fn access(id: KeywordId, canonical: &'static str) -> KeywordInfo {
    KeywordInfo {
        accessibility: true,
        ..info(id, canonical, KeywordCategory::Modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_round_trips_through_its_spelling() {
        for k in KEYWORDS {
            assert_eq!(from_str(k.canonical), Some(k.id), "lookup failed for `{}`", k.canonical);
        }
    }

    #[test]
    fn spellings_are_unique() {
        for (i, a) in KEYWORDS.iter().enumerate() {
            for b in &KEYWORDS[i + 1..] {
                assert_ne!(a.canonical, b.canonical);
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(from_str("Partial"), None);
        assert_eq!(from_str("partial"), Some(KeywordId::Partial));
    }

    #[test]
    fn accessibility_modifiers_are_modifiers() {
        for k in KEYWORDS.iter().filter(|k| k.accessibility) {
            assert!(is_modifier(k.id), "`{}` is accessibility but not a modifier", k.canonical);
        }
        assert!(is_accessibility(KeywordId::Public));
        assert!(!is_accessibility(KeywordId::Partial));
    }
}
