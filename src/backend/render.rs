//! Generated unit layout.
//!
//! Sections appear in a fixed order: header, usings, namespace, closedness marker, then the container
//! re-declaration holding the private constructor, the variant re-declarations and the `Cons` class.
//! Members inside a block are separated by exactly one blank line, and the unit ends at the final `}` with no
//! trailing line terminator.

use autoclosed_core::lang::generated::{CLOSED_ATTRIBUTE, CONS_CLASS, HEADER, HINT_EXTENSION, USINGS};

use super::config::RenderOptions;
use super::writer::CodeWriter;
use crate::model::{CaseArg, CaseUnionModel, Variant};

/// Render a model into a complete generated unit.
#[tracing::instrument(skip_all, fields(container = %model.name, variants = model.variants.len()))]
pub fn render(model: &CaseUnionModel, options: &RenderOptions) -> String {
    let mut w = CodeWriter::new(options.clone());

    w.writeln(HEADER);
    w.newline();
    for using in usings(model) {
        w.writeln(&format!("using {using};"));
    }
    w.newline();
    if !model.namespace.is_empty() {
        w.writeln(&format!("namespace {};", model.namespace));
        w.newline();
    }

    w.writeln(&closed_marker(model));
    w.writeln(&model.declaration);
    w.writeln("{");
    w.indent();

    w.writeln(&format!("private {}() {{ }}", model.name));
    for variant in &model.variants {
        w.newline();
        w.writeln(&format!("{}: {};", variant.declaration, model.type_identifier));
    }

    w.newline();
    w.writeln(&format!("public static class {CONS_CLASS}"));
    w.writeln("{");
    w.indent();
    for (i, variant) in model.variants.iter().enumerate() {
        if i > 0 {
            w.newline();
        }
        w.writeln(&cons_member(model, variant));
    }
    w.dedent();
    w.writeln("}");

    w.dedent();
    w.write("}");
    w.finish()
}

/// Emission key for a model's unit: `{Name}.g.cs`.
pub fn hint_name(model: &CaseUnionModel) -> String {
    format!("{}{}", model.name, HINT_EXTENSION)
}

/// The fixed imports followed by the source's own directives, each at most once.
fn usings(model: &CaseUnionModel) -> Vec<&str> {
    let mut out: Vec<&str> = USINGS.to_vec();
    for using in &model.usings {
        if !out.contains(&using.as_str()) {
            out.push(using);
        }
    }
    out
}

/// `[Closed(typeof(A), typeof(B<,>))]`
fn closed_marker(model: &CaseUnionModel) -> String {
    let types: Vec<String> = model.variants.iter().map(|v| format!("typeof({})", unbound(v))).collect();
    format!("[{}({})]", CLOSED_ATTRIBUTE, types.join(", "))
}

/// Unbound generic spelling usable in `typeof`: `V`, `V<>`, `V<,>`, ...
fn unbound(variant: &Variant) -> String {
    match variant.type_parameters.len() {
        0 => variant.name.clone(),
        n => format!("{}<{}>", variant.name, ",".repeat(n - 1)),
    }
}

fn cons_member(model: &CaseUnionModel, variant: &Variant) -> String {
    let ret = &model.type_identifier;
    let name = &variant.name;

    if variant.is_singleton() {
        return format!("public static {ret} {name} {{ get; }} = new {name}();");
    }

    let generics = if variant.is_generic() {
        format!("<{}>", variant.type_parameters.join(", "))
    } else {
        String::new()
    };
    let params: Vec<String> = variant.args.iter().map(CaseArg::parameter).collect();
    let names: Vec<String> = variant.args.iter().map(CaseArg::argument).collect();

    format!(
        "public static {ret} {name}{generics}({}) => new {name}{generics}({});",
        params.join(", "),
        names.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::config::Newline;

    fn variant(name: &str, type_parameters: &[&str], args: &[(&str, &str)]) -> Variant {
        Variant {
            name: name.to_string(),
            declaration: format!("public partial sealed record {name}"),
            type_parameters: type_parameters.iter().map(|s| s.to_string()).collect(),
            args: args.iter().map(|(t, n)| CaseArg::new(*t, *n)).collect(),
        }
    }

    fn model(variants: Vec<Variant>) -> CaseUnionModel {
        CaseUnionModel {
            name: "TokenKind".into(),
            type_identifier: "TokenKind".into(),
            declaration: "public partial abstract record TokenKind".into(),
            namespace: "TestNamespace".into(),
            usings: Vec::new(),
            variants,
        }
    }

    #[test]
    fn test_singleton_member() {
        let m = model(vec![]);
        assert_eq!(
            cons_member(&m, &variant("Plus", &[], &[])),
            "public static TokenKind Plus { get; } = new Plus();"
        );
    }

    #[test]
    fn test_factory_member_keeps_argument_order() {
        let m = model(vec![]);
        assert_eq!(
            cons_member(&m, &variant("Range", &[], &[("int", "Start"), ("int", "End")])),
            "public static TokenKind Range(int Start, int End) => new Range(Start, End);"
        );
    }

    #[test]
    fn test_generic_variant_gets_generic_factory() {
        let m = model(vec![]);
        assert_eq!(
            cons_member(&m, &variant("Wrap", &["T", "U"], &[])),
            "public static TokenKind Wrap<T, U>() => new Wrap<T, U>();"
        );
        assert_eq!(
            cons_member(&m, &variant("Box", &["T"], &[("T", "Value")])),
            "public static TokenKind Box<T>(T Value) => new Box<T>(Value);"
        );
    }

    #[test]
    fn test_closed_marker_uses_unbound_generics() {
        let m = model(vec![
            variant("A", &[], &[]),
            variant("B", &["T"], &[]),
            variant("C", &["T", "U", "V"], &[]),
        ]);
        assert_eq!(closed_marker(&m), "[Closed(typeof(A), typeof(B<>), typeof(C<,,>))]");
    }

    #[test]
    fn test_zero_variants_render_empty_marker_and_cons() {
        let text = render(&model(vec![]), &RenderOptions::default());
        assert!(text.contains("[Closed()]\n"));
        assert!(text.ends_with("    private TokenKind() { }\n\n    public static class Cons\n    {\n    }\n}"));
    }

    #[test]
    fn test_global_namespace_omits_namespace_line() {
        let mut m = model(vec![variant("Plus", &[], &[])]);
        m.namespace.clear();
        let text = render(&m, &RenderOptions::default());
        assert!(!text.contains("namespace"));
        assert!(text.starts_with("// <auto-generated/>\n\nusing System;\nusing ExhaustiveMatching;\n\n[Closed("));
    }

    #[test]
    fn test_crlf_option_changes_only_line_endings() {
        let m = model(vec![variant("Plus", &[], &[])]);
        let lf = render(&m, &RenderOptions::default());
        let crlf = render(&m, &RenderOptions::new().with_newline(Newline::CrLf));
        assert_eq!(crlf.replace("\r\n", "\n"), lf);
        assert!(!crlf.ends_with('\n'));
    }

    #[test]
    fn test_source_usings_follow_fixed_ones_without_repeats() {
        let mut m = model(vec![]);
        m.usings = vec![
            "System".into(),
            "System.Collections.Generic".into(),
            "Map = System.Collections.Generic.Dictionary<string, int>".into(),
            "System.Collections.Generic".into(),
        ];
        let text = render(&m, &RenderOptions::default());
        assert!(text.starts_with(
            "// <auto-generated/>\n\nusing System;\nusing ExhaustiveMatching;\nusing System.Collections.Generic;\n\
             using Map = System.Collections.Generic.Dictionary<string, int>;\n\nnamespace TestNamespace;\n"
        ));
    }

    #[test]
    fn test_factory_forwards_parameter_modifiers() {
        let m = model(vec![]);
        let mut v = variant("Sum", &[], &[]);
        v.args = vec![
            CaseArg::new("int", "seed").with_modifiers(["ref"]),
            CaseArg::new("int[]", "xs").with_modifiers(["params"]),
        ];
        assert_eq!(
            cons_member(&m, &v),
            "public static TokenKind Sum(ref int seed, params int[] xs) => new Sum(ref seed, xs);"
        );
    }

    #[test]
    fn test_hint_name() {
        assert_eq!(hint_name(&model(vec![])), "TokenKind.g.cs");
    }
}
