//! Property-based tests for model extraction and rendering
//!
//! Random containers are built as declaration records, extracted, rendered, and the generated unit is checked
//! against the layout rules and re-read with our own parser.

use autoclosed::backend::{RenderOptions, render};
use autoclosed::model::{ConstructorDeclaration, TypeDeclaration, TypeParameters, extract};
use autoclosed::{CaseUnionModel, lexer, parser};
use proptest::prelude::*;

const ARG_TYPES: &[&str] = &[
    "int",
    "string",
    "string?",
    "List<int>",
    "Dictionary<string, int>",
    "(int A, int B)",
    "int[]",
];

#[derive(Debug, Clone)]
struct VariantSpec {
    name: String,
    generics: usize,
    args: Vec<&'static str>,
}

#[derive(Debug, Clone)]
struct ContainerSpec {
    namespace: &'static str,
    generics: usize,
    variants: Vec<VariantSpec>,
}

fn variant_strategy() -> impl Strategy<Value = (String, usize, Vec<&'static str>)> {
    (
        "[A-Z][a-z]{0,6}",
        0usize..3,
        prop::collection::vec(prop::sample::select(ARG_TYPES), 0..4),
    )
}

fn container_strategy() -> impl Strategy<Value = ContainerSpec> {
    (
        prop::sample::select(&["", "Demo", "A.B.C"][..]),
        0usize..3,
        prop::collection::vec(variant_strategy(), 0..6),
    )
        .prop_map(|(namespace, generics, variants)| ContainerSpec {
            namespace,
            generics,
            variants: variants
                .into_iter()
                .enumerate()
                .map(|(i, (name, generics, args))| VariantSpec {
                    // Suffix keeps names unique and clear of the container and `Cons`.
                    name: format!("{name}{i}"),
                    generics,
                    args,
                })
                .collect(),
        })
}

fn names(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i}")).collect()
}

fn declaration(spec: &ContainerSpec) -> TypeDeclaration {
    let mut container = TypeDeclaration::new("Root", "record")
        .with_modifiers(&["public", "partial", "abstract"])
        .with_namespace(spec.namespace);
    if spec.generics > 0 {
        let params = names("T", spec.generics);
        let refs: Vec<&str> = params.iter().map(String::as_str).collect();
        container = container.with_type_parameters(TypeParameters::from_names(&refs));
    }

    for v in &spec.variants {
        let mut nested = TypeDeclaration::new(v.name.as_str(), "record").with_modifiers(&["partial"]);
        if v.generics > 0 {
            let params = names("U", v.generics);
            let refs: Vec<&str> = params.iter().map(String::as_str).collect();
            nested = nested.with_type_parameters(TypeParameters::from_names(&refs));
        }
        if !v.args.is_empty() {
            let arg_names = names("arg", v.args.len());
            let params: Vec<(&str, &str)> = v
                .args
                .iter()
                .zip(&arg_names)
                .map(|(ty, name)| (*ty, name.as_str()))
                .collect();
            nested = nested.with_constructor(ConstructorDeclaration::public(&params));
        }
        container = container.with_nested(nested);
    }
    container
}

fn model(spec: &ContainerSpec) -> CaseUnionModel {
    extract(&declaration(spec)).expect("generated containers are partial with one constructor per variant")
}

proptest! {
    #[test]
    fn rendering_is_deterministic(spec in container_strategy()) {
        let m = model(&spec);
        let options = RenderOptions::default();
        prop_assert_eq!(render(&m, &options), render(&m, &options));
        prop_assert_eq!(model(&spec), m);
    }

    #[test]
    fn closed_marker_lists_variants_in_order(spec in container_strategy()) {
        let text = render(&model(&spec), &RenderOptions::default());
        let expected: Vec<String> = spec
            .variants
            .iter()
            .map(|v| match v.generics {
                0 => format!("typeof({})", v.name),
                n => format!("typeof({}<{}>)", v.name, ",".repeat(n - 1)),
            })
            .collect();
        let marker = format!("[Closed({})]", expected.join(", "));
        prop_assert!(text.lines().any(|l| l == marker), "missing `{}` in\n{}", marker, text);
    }

    #[test]
    fn cons_entries_follow_declaration_order(spec in container_strategy()) {
        let m = model(&spec);
        let text = render(&m, &RenderOptions::default());
        let cons = text.find("public static class Cons").expect("Cons class");

        let mut last = cons;
        for v in &spec.variants {
            let needle = format!("public static {} {}", m.type_identifier, v.name);
            let at = text[last..].find(&needle).map(|i| i + last);
            prop_assert!(at.is_some(), "`{}` missing or out of order", needle);
            last = at.unwrap_or(last) + needle.len();
        }
    }

    #[test]
    fn singletons_and_factories_match_arity(spec in container_strategy()) {
        let m = model(&spec);
        let text = render(&m, &RenderOptions::default());
        let ret = &m.type_identifier;

        for v in &spec.variants {
            if v.generics == 0 && v.args.is_empty() {
                let line = format!("public static {ret} {0} {{ get; }} = new {0}();", v.name);
                prop_assert!(text.contains(&line), "missing singleton `{}`", line);
                continue;
            }

            let generics = match v.generics {
                0 => String::new(),
                n => format!("<{}>", names("U", n).join(", ")),
            };
            let arg_names = names("arg", v.args.len());
            let params: Vec<String> = v.args.iter().zip(&arg_names).map(|(t, n)| format!("{t} {n}")).collect();
            let line = format!(
                "public static {ret} {0}{generics}({1}) => new {0}{generics}({2});",
                v.name,
                params.join(", "),
                arg_names.join(", ")
            );
            prop_assert!(text.contains(&line), "missing factory `{}`", line);
        }
    }

    #[test]
    fn variants_derive_from_the_container(spec in container_strategy()) {
        let m = model(&spec);
        let text = render(&m, &RenderOptions::default());
        for v in &m.variants {
            let line = format!("    {}: {};", v.declaration, m.type_identifier);
            prop_assert!(text.lines().any(|l| l == line), "missing `{}`", line);
        }
    }

    #[test]
    fn layout_has_no_trailing_whitespace(spec in container_strategy(), width in 1usize..9) {
        let text = render(&model(&spec), &RenderOptions::new().with_indent_width(width));
        prop_assert_eq!(text.chars().last(), Some('}'));
        prop_assert!(!text.contains('\r'));
        for line in text.lines() {
            prop_assert_eq!(line.trim_end(), line);
        }
        prop_assert_eq!(text.contains("namespace "), !spec.namespace.is_empty());
    }

    #[test]
    fn generated_unit_parses_back(spec in container_strategy()) {
        let text = render(&model(&spec), &RenderOptions::default());
        let tokens = lexer::lex(&text).expect("generated unit lexes");
        let unit = parser::parse(&text, &tokens).expect("generated unit parses");

        let types: Vec<_> = unit
            .items
            .iter()
            .flat_map(|item| match &item.node {
                autoclosed::ast::Item::Namespace(ns) => ns.items.iter().collect::<Vec<_>>(),
                autoclosed::ast::Item::Type(_) => vec![item],
                autoclosed::ast::Item::Using(_) => vec![],
            })
            .filter_map(|item| match &item.node {
                autoclosed::ast::Item::Type(decl) => Some(decl),
                autoclosed::ast::Item::Namespace(_) | autoclosed::ast::Item::Using(_) => None,
            })
            .collect();

        prop_assert_eq!(types.len(), 1);
        let container = types[0];
        prop_assert_eq!(&container.name.node, "Root");
        prop_assert!(container.attributes.iter().any(|a| a.node.name == "Closed"));
        // Variants plus `Cons`.
        prop_assert_eq!(container.nested_types().count(), spec.variants.len() + 1);
    }
}
