//! Names that appear in, or select input for, the generated unit.
//!
//! The generated unit targets the `ExhaustiveMatching` analyzer: the closedness marker is its `[Closed(...)]`
//! attribute, and the annotation that opts a type in is `[AutoClosed]` from the same namespace. Keeping these
//! spellings here lets the filter, the renderer, and the tests agree on one source of truth.

/// Namespace that hosts both the opt-in annotation and the closedness marker.
pub const ANALYZER_NAMESPACE: &str = "ExhaustiveMatching";

/// Short name of the opt-in annotation (`[AutoClosed]`).
pub const ANNOTATION: &str = "AutoClosed";

/// Conventional `Attribute` suffix that C# lets callers omit.
pub const ATTRIBUTE_SUFFIX: &str = "Attribute";

/// Short name of the closedness marker attribute.
pub const CLOSED_ATTRIBUTE: &str = "Closed";

/// Name of the nested constructor-helper class.
pub const CONS_CLASS: &str = "Cons";

/// First line of every generated unit.
pub const HEADER: &str = "// <auto-generated/>";

/// Imports emitted at the top of every generated unit, in order.
pub const USINGS: &[&str] = &["System", ANALYZER_NAMESPACE];

/// Extension appended to the container name to build the emission key.
pub const HINT_EXTENSION: &str = ".g.cs";

/// Every spelling of the annotation the filter accepts by default.
///
/// ## Notes
/// - C# resolves `[AutoClosed]` to `AutoClosedAttribute`; both forms are valid at use sites, optionally qualified
///   with the namespace and `global::`.
pub fn annotation_spellings() -> Vec<String> {
    let short = ANNOTATION.to_string();
    let long = format!("{ANNOTATION}{ATTRIBUTE_SUFFIX}");
    vec![
        short.clone(),
        long.clone(),
        format!("{ANALYZER_NAMESPACE}.{short}"),
        format!("{ANALYZER_NAMESPACE}.{long}"),
    ]
}
