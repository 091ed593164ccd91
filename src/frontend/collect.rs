//! Annotation filter: parsed C# → declaration records for annotated containers.
//!
//! Walks a [`CompilationUnit`], tracking namespaces and using directives through nesting and file-scoped
//! declarations, and lowers every namespace-level type carrying the opt-in attribute into a [`TypeDeclaration`].
//! Whether the container is `partial` is left to extraction, which reports it as an error.
//!
//! Other `partial` parts of an annotated type in the same file contribute their nested types and constructors.
//! Parts in other files are not seen.
//!
//! Annotated types nested inside another type cannot be closed (the generated unit re-declares the container at
//! namespace level); they produce a warning.

use autoclosed_core::lang::keywords::{self, KeywordId};
use miette::SourceSpan;

use super::ast::{CompilationUnit, Item, Param, Span, Spanned, TypeDecl};
use super::diagnostics::CompileError;
use crate::config::AttributeConfig;
use crate::model::decl::{Accessibility, ConstructorDeclaration, Parameter, TypeDeclaration, TypeParameters};

/// Annotated containers found in one file, plus anything worth warning about.
#[derive(Debug, Clone, Default)]
pub struct Collected {
    /// Containers in source order.
    pub candidates: Vec<TypeDeclaration>,
    pub warnings: Vec<CompileError>,
}

/// A namespace-level type with the scope it was declared in.
struct Scoped<'u> {
    decl: &'u TypeDecl,
    namespace: String,
    usings: Vec<String>,
}

/// Find and lower every annotated namespace-level type in `unit`.
#[tracing::instrument(skip_all, fields(items = unit.items.len()))]
pub fn collect_candidates(unit: &CompilationUnit, config: &AttributeConfig) -> Collected {
    let mut collected = Collected::default();
    let mut types = Vec::new();
    walk_items(&unit.items, "", &[], &mut types);

    let mut claimed: Vec<(&str, &str, usize)> = Vec::new();
    for scoped in &types {
        warn_nested_annotations(scoped.decl, config, &mut collected);
        if !is_annotated(scoped.decl, config) {
            continue;
        }
        let key = part_key(scoped);
        if claimed.contains(&key) {
            continue;
        }
        claimed.push(key);

        let parts: Vec<&TypeDecl> = types
            .iter()
            .filter(|other| {
                std::ptr::eq(other.decl, scoped.decl)
                    || (part_key(other) == key && other.decl.has_modifier(KeywordId::Partial))
            })
            .map(|other| other.decl)
            .collect();
        if parts.len() > 1 {
            tracing::debug!(container = %scoped.decl.name.node, parts = parts.len(), "merging partial parts");
        }

        let mut candidate = lower(scoped.decl, &parts, &scoped.namespace);
        candidate.usings = scoped.usings.clone();
        collected.candidates.push(candidate);
    }

    tracing::debug!(
        candidates = collected.candidates.len(),
        warnings = collected.warnings.len(),
        "collected annotated types"
    );
    collected
}

fn walk_items<'u>(items: &'u [Spanned<Item>], namespace: &str, inherited: &[String], out: &mut Vec<Scoped<'u>>) {
    // `global using` applies project-wide already.
    let mut usings = inherited.to_vec();
    usings.extend(items.iter().filter_map(|item| match &item.node {
        Item::Using(using) if !using.global => Some(using.to_string()),
        _ => None,
    }));

    for item in items {
        match &item.node {
            Item::Using(_) => {}
            Item::Namespace(ns) => {
                let child = if namespace.is_empty() {
                    ns.name.clone()
                } else {
                    format!("{namespace}.{}", ns.name)
                };
                walk_items(&ns.items, &child, &usings, out);
            }
            Item::Type(decl) => out.push(Scoped {
                decl,
                namespace: namespace.to_string(),
                usings: usings.clone(),
            }),
        }
    }
}

/// Parts of one type share namespace, name and generic arity.
fn part_key<'s>(scoped: &'s Scoped<'_>) -> (&'s str, &'s str, usize) {
    (&scoped.namespace, &scoped.decl.name.node, arity(scoped.decl))
}

fn arity(decl: &TypeDecl) -> usize {
    decl.type_params.as_ref().map_or(0, |tp| tp.names.len())
}

/// Return `true` if the declaration carries the opt-in attribute on the type itself.
fn is_annotated(decl: &TypeDecl, config: &AttributeConfig) -> bool {
    decl.attributes.iter().any(|a| {
        let on_type = matches!(a.node.target.as_deref(), None | Some("type"));
        on_type && config.matches(&a.node.name)
    })
}

fn warn_nested_annotations(decl: &TypeDecl, config: &AttributeConfig, out: &mut Collected) {
    for (nested, _) in decl.nested_types() {
        if is_annotated(nested, config) {
            tracing::warn!(container = %nested.name.node, parent = %decl.name.node, "annotated nested type skipped");
            out.warnings.push(
                CompileError::warning(
                    format!(
                        "`{}` is nested inside `{}` and will not be closed",
                        nested.name.node, decl.name.node
                    ),
                    nested.name.span,
                )
                .with_hint("move the annotated type to namespace level"),
            );
        }
        warn_nested_annotations(nested, config, out);
    }
}

/// Lower `head` into a plain record, taking nested types and constructors from every part in order.
///
/// `head` supplies the identifier, modifiers, kind and generic parameters. Nested types with the same name and
/// arity are parts of one type and merge the same way.
fn lower(head: &TypeDecl, parts: &[&TypeDecl], namespace: &str) -> TypeDeclaration {
    let mut groups: Vec<Vec<&TypeDecl>> = Vec::new();
    for (nested, _) in parts.iter().copied().flat_map(TypeDecl::nested_types) {
        match groups
            .iter_mut()
            .find(|group| group[0].name.node == nested.name.node && arity(group[0]) == arity(nested))
        {
            Some(group) => group.push(nested),
            None => groups.push(vec![nested]),
        }
    }

    TypeDeclaration {
        identifier: head.name.node.clone(),
        type_parameters: head.type_params.as_ref().map(|tp| TypeParameters {
            text: tp.text.clone(),
            names: tp.names.clone(),
        }),
        modifiers: head.modifiers.iter().map(|m| m.node.as_str().to_string()).collect(),
        keyword: head.kind.as_str().to_string(),
        namespace: namespace.to_string(),
        constructors: parts.iter().copied().flat_map(constructors).collect(),
        nested: groups.iter().map(|group| lower(group[0], group, namespace)).collect(),
        span: Some(source_span(head.name.span)),
        usings: Vec::new(),
    }
}

/// Constructors in source order; a primary constructor is public and comes first.
fn constructors(decl: &TypeDecl) -> Vec<ConstructorDeclaration> {
    let primary = decl.primary_params.as_ref().map(|params| ConstructorDeclaration {
        accessibility: Accessibility::Public,
        params: params.iter().map(parameter).collect(),
    });

    let explicit = decl
        .constructors()
        .filter(|c| !c.has_modifier(KeywordId::Static))
        .map(|c| {
            let accessibility = if c.has_modifier(KeywordId::Public) {
                Accessibility::Public
            } else if c.has_modifier(KeywordId::Protected) {
                Accessibility::Protected
            } else if c.has_modifier(KeywordId::Internal) {
                Accessibility::Internal
            } else {
                Accessibility::Private
            };
            ConstructorDeclaration {
                accessibility,
                params: c.params.iter().map(parameter).collect(),
            }
        });

    primary.into_iter().chain(explicit).collect()
}

fn parameter(param: &Param) -> Parameter {
    let modifiers: Vec<&str> = param.modifiers.iter().map(|m| keywords::as_str(*m)).collect();
    Parameter::new(&param.ty, &param.name).with_modifiers(&modifiers)
}

fn source_span(span: Span) -> SourceSpan {
    (span.start..span.end).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{lexer, parser};

    fn collect(source: &str) -> Collected {
        let tokens = lexer::lex(source).unwrap();
        let unit = parser::parse(source, &tokens).unwrap();
        collect_candidates(&unit, &AttributeConfig::default())
    }

    #[test]
    fn test_block_namespaces_nest() {
        let c = collect("namespace A { namespace B.C { [AutoClosed] partial record R; } }");
        assert_eq!(c.candidates.len(), 1);
        assert_eq!(c.candidates[0].namespace, "A.B.C");
    }

    #[test]
    fn test_file_scoped_and_global_namespace() {
        let c = collect("namespace A.B;\n[AutoClosed] partial record R;");
        assert_eq!(c.candidates[0].namespace, "A.B");
        let c = collect("[AutoClosed] partial record R;");
        assert_eq!(c.candidates[0].namespace, "");
    }

    #[test]
    fn test_unannotated_and_other_attributes_are_ignored() {
        let c = collect("[Serializable] partial record A; partial record B; [Closed] partial record C;");
        assert!(c.candidates.is_empty());
        assert!(c.warnings.is_empty());
    }

    #[test]
    fn test_attribute_arguments_and_qualification() {
        let c = collect("[AutoClosed(true)] partial record A; [global::ExhaustiveMatching.AutoClosedAttribute] partial record B;");
        let names: Vec<_> = c.candidates.iter().map(|d| d.identifier.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_non_partial_container_is_still_collected() {
        let c = collect("[AutoClosed] public record R;");
        assert_eq!(c.candidates.len(), 1);
        assert!(!c.candidates[0].has_modifier("partial"));
    }

    #[test]
    fn test_assembly_targeted_attribute_does_not_annotate() {
        let c = collect("[assembly: AutoClosed] partial record R;");
        assert!(c.candidates.is_empty());
    }

    #[test]
    fn test_nested_annotation_warns() {
        let c = collect("partial class Outer { [AutoClosed] partial record Inner; }");
        assert!(c.candidates.is_empty());
        assert_eq!(c.warnings.len(), 1);
        assert!(c.warnings[0].message.contains("`Inner` is nested inside `Outer`"));
        assert!(!c.warnings[0].is_error());
    }

    #[test]
    fn test_lowering_keeps_modifiers_kind_and_constructors() {
        let source = r#"
[AutoClosed]
public partial abstract class Shape<T>
{
    public partial sealed class Circle(double Radius);
    public partial sealed class Square
    {
        static Square() { }
        public Square(double side) { }
        Square() { }
        protected internal Square(int side) { }
    }
}
"#;
        let c = collect(source);
        let shape = &c.candidates[0];
        assert_eq!(shape.modifiers, vec!["public", "partial", "abstract"]);
        assert_eq!(shape.keyword, "class");
        assert_eq!(shape.type_identifier(), "Shape<T>");

        let circle = &shape.nested[0];
        assert_eq!(circle.constructors, vec![ConstructorDeclaration::public(&[("double", "Radius")])]);

        let square = &shape.nested[1];
        let access: Vec<_> = square.constructors.iter().map(|c| c.accessibility).collect();
        assert_eq!(
            access,
            vec![Accessibility::Public, Accessibility::Private, Accessibility::Protected]
        );
    }

    #[test]
    fn test_usings_follow_namespace_scope() {
        let source = r#"
using System.Text;
global using System.Linq;
namespace A
{
    using static System.Math;
    [AutoClosed] partial record R;
}
namespace B
{
    [AutoClosed] partial record S;
}
"#;
        let c = collect(source);
        assert_eq!(c.candidates[0].usings, vec!["System.Text", "static System.Math"]);
        assert_eq!(c.candidates[1].usings, vec!["System.Text"]);
    }

    #[test]
    fn test_partial_parts_in_one_file_merge() {
        let source = r#"
namespace N;
[AutoClosed]
public partial record Shape
{
    public partial record Circle;
}
public partial record Shape
{
    public partial record Square(int Side);
    public partial record Circle { public Circle(double r) { } }
}
public partial record Shape<T>
{
    public partial record Ignored;
}
"#;
        let c = collect(source);
        assert_eq!(c.candidates.len(), 1);
        let shape = &c.candidates[0];
        let names: Vec<_> = shape.nested.iter().map(|n| n.identifier.as_str()).collect();
        assert_eq!(names, vec!["Circle", "Square"]);
        assert_eq!(shape.nested[0].constructors, vec![ConstructorDeclaration::public(&[("double", "r")])]);
        assert_eq!(shape.modifiers, vec!["public", "partial"]);
    }

    #[test]
    fn test_parts_in_other_namespaces_stay_apart() {
        let c = collect("namespace A { [AutoClosed] partial record R { partial record X; } } namespace B { partial record R { partial record Y; } }");
        let names: Vec<_> = c.candidates[0].nested.iter().map(|n| n.identifier.as_str()).collect();
        assert_eq!(names, vec!["X"]);
    }

    #[test]
    fn test_repeated_annotation_on_parts_yields_one_candidate() {
        let c = collect("[AutoClosed] partial record R { partial record X; } [AutoClosed] partial record R { partial record Y; }");
        assert_eq!(c.candidates.len(), 1);
        assert_eq!(c.candidates[0].nested.len(), 2);
    }

    #[test]
    fn test_parameter_modifiers_are_lowered() {
        let c = collect("[AutoClosed] partial record R { partial record Sum(ref int Seed, params int[] Xs); }");
        let params = &c.candidates[0].nested[0].constructors[0].params;
        assert_eq!(params[0].modifiers, vec!["ref"]);
        assert_eq!(params[1].modifiers, vec!["params"]);
        assert_eq!(params[1].ty, "int[]");
    }

    #[test]
    fn test_span_points_at_identifier() {
        let source = "[AutoClosed] partial record Token;";
        let c = collect(source);
        let span = c.candidates[0].span.unwrap();
        assert_eq!(&source[span.offset()..span.offset() + span.len()], "Token");
    }
}
