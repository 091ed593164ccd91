//! Integration tests for the generation pipeline

use autoclosed::backend::{EmitOutcome, EmitSink, MemorySink, Newline, RenderOptions};
use autoclosed::diagnostics::format_error;
use autoclosed::model::ExtractError;
use autoclosed::pipeline::{GenerateError, emit_units};
use autoclosed::{AttributeConfig, Generator, GeneratorConfig};

fn generator() -> Generator {
    Generator::default()
}

#[test]
fn test_units_flow_into_memory_sink_in_source_order() {
    let source = r#"
namespace Tokens
{
    [AutoClosed] public partial record Zeta { partial record Z; }
    [AutoClosed] public partial record Alpha { partial record A(int X); }
}
"#;
    let output = generator().generate_source("tokens.cs", source).unwrap();
    let mut sink = MemorySink::new();
    let outcomes = emit_units(&mut sink, &output.units).unwrap();

    assert_eq!(
        outcomes,
        vec![
            ("Zeta.g.cs".to_string(), EmitOutcome::Written),
            ("Alpha.g.cs".to_string(), EmitOutcome::Written)
        ]
    );
    assert!(sink.get("Alpha.g.cs").unwrap().contains("public static Alpha A(int X) => new A(X);"));
}

#[test]
fn test_not_partial_container_is_a_failure_not_an_empty_unit() {
    let output = generator()
        .generate_source("bad.cs", "[AutoClosed] public abstract record Shape { partial record Dot; }")
        .unwrap();
    assert!(output.units.is_empty());
    assert!(matches!(&output.failures[..], [ExtractError::NotPartial { name, span: Some(_) }] if name == "Shape"));
}

#[test]
fn test_ambiguous_constructor_names_the_variant() {
    let source = r#"
[AutoClosed]
partial class Shape
{
    public partial class Circle
    {
        public Circle(double r) { }
        public Circle() { }
    }
}
"#;
    let output = generator().generate_source("shape.cs", source).unwrap();
    let err = &output.failures[0];
    assert_eq!(err.to_string(), "variant `Circle` of `Shape` has 2 public constructors");
}

#[test]
fn test_primary_and_explicit_public_constructors_are_ambiguous() {
    let source = "[AutoClosed] partial record U { public partial record V(int A) { public V(string s) : this(0) { } } }";
    let output = generator().generate_source("u.cs", source).unwrap();
    assert!(matches!(
        output.failures[0],
        ExtractError::AmbiguousConstructor { count: 2, .. }
    ));
}

#[test]
fn test_nested_annotation_is_a_warning() {
    let source = "namespace N; partial class Host { [AutoClosed] partial record Inner { partial record A; } }";
    let output = generator().generate_source("host.cs", source).unwrap();
    assert!(output.units.is_empty());
    assert!(output.failures.is_empty());
    assert_eq!(output.warnings.len(), 1);

    let rendered = format_error("host.cs", source, &output.warnings[0]);
    assert!(rendered.starts_with("warning: `Inner` is nested inside `Host`"), "{rendered}");
    assert!(rendered.contains("host.cs:1:"), "{rendered}");
}

#[test]
fn test_syntax_error_is_reported_with_location() {
    let source = "namespace N;\n[AutoClosed]\npartial record R(int A, );\n";
    let err = generator().generate_source("r.cs", source).unwrap_err();
    assert!(matches!(err, GenerateError::Parse { .. }));
    let rendered = format_error("r.cs", source, &err.diagnostics()[0]);
    assert!(rendered.starts_with("syntax error: Expected parameter type and name"), "{rendered}");
    assert!(rendered.contains("--> r.cs:3:25"), "{rendered}");
}

#[test]
fn test_custom_options_and_attribute_names() {
    let config = GeneratorConfig::new()
        .with_attributes(AttributeConfig::with_names(["Union"]))
        .with_render(RenderOptions::new().with_indent_width(2).with_newline(Newline::CrLf));
    let source = "[Union] partial record U { partial record A; } [AutoClosed] partial record Ignored;";
    let output = Generator::new(config).generate_source("u.cs", source).unwrap();

    assert_eq!(output.units.len(), 1);
    let text = &output.units[0].text;
    assert!(text.contains("\r\n  private U() { }\r\n"));
    assert!(text.contains("\r\n    public static U A { get; } = new A();\r\n"));
    assert!(!text.contains("\n\n"), "every newline is CRLF");
}

#[test]
fn test_model_json_dump() {
    let output = generator()
        .generate_source("s.cs", "namespace S; [AutoClosed] partial record T { partial record N(string Value); }")
        .unwrap();
    let json = output.units[0].model.to_json();
    assert_eq!(json["name"], "T");
    assert_eq!(json["namespace"], "S");
    assert_eq!(json["variants"][0]["args"][0]["type"], "string");
    assert_eq!(json["variants"][0]["args"][0]["name"], "Value");
}

#[test]
fn test_memory_sink_sees_duplicates_across_files() {
    let a = generator().generate_source("a.cs", "namespace A; [AutoClosed] partial record R;").unwrap();
    let b = generator().generate_source("b.cs", "namespace B; [AutoClosed] partial record R;").unwrap();

    let mut sink = MemorySink::new();
    emit_units(&mut sink, &a.units).unwrap();
    assert!(emit_units(&mut sink, &b.units).is_err());
    assert!(sink.emit("Other.g.cs", "x").is_ok());
}

#[test]
fn test_verbatim_identifiers_and_complex_types_are_echoed() {
    let source = r#"
[AutoClosed]
partial record @event
{
    partial record @class(Dictionary<string,   List<int?>> @params, (int A, int B) Pair);
}
"#;
    let output = generator().generate_source("v.cs", source).unwrap();
    let text = &output.units[0].text;
    assert!(text.contains("partial record @class: @event;"));
    assert!(text.contains(
        "public static @event @class(Dictionary<string, List<int?>> @params, (int A, int B) Pair) => new @class(@params, Pair);"
    ));
}

#[test]
fn test_source_usings_resolve_variant_argument_types() {
    let source = r#"
using System.Collections.Generic;
namespace Bags;

[AutoClosed]
public partial record Bag
{
    public partial record Items(List<int> Xs);
}
"#;
    let output = generator().generate_source("bag.cs", source).unwrap();
    let text = &output.units[0].text;
    assert!(
        text.starts_with(
            "// <auto-generated/>\n\nusing System;\nusing ExhaustiveMatching;\nusing System.Collections.Generic;\n\nnamespace Bags;"
        ),
        "{text}"
    );
    assert!(text.contains("public static Bag Items(List<int> Xs) => new Items(Xs);"));
}

#[test]
fn test_partial_parts_contribute_variants() {
    let source = r#"
[AutoClosed]
partial record Shape { partial record Circle; }
partial record Shape { partial record Square(int S); }
"#;
    let output = generator().generate_source("shape.cs", source).unwrap();
    assert_eq!(output.units.len(), 1);
    let text = &output.units[0].text;
    assert!(text.starts_with("// <auto-generated/>\n\nusing System;\nusing ExhaustiveMatching;\n\n[Closed(typeof(Circle), typeof(Square))]"), "{text}");
    assert!(text.contains("public static Shape Square(int S) => new Square(S);"));
}

#[test]
fn test_ref_and_params_reach_the_factory() {
    let source = "[AutoClosed] partial record Op { partial record Sum(ref int Seed, params int[] Xs); }";
    let output = generator().generate_source("op.cs", source).unwrap();
    assert!(
        output.units[0]
            .text
            .contains("public static Op Sum(ref int Seed, params int[] Xs) => new Sum(ref Seed, Xs);")
    );
}
