//! Golden tests for generated units
//!
//! These tests generate units from `.cs` input files and compare the output against stored snapshots. This
//! ensures changes to the unit layout are reviewed and intentional.
//!
//! Run with: `cargo test --test codegen_snapshot_tests`
//! Review changes: `cargo insta review`

use autoclosed::{GeneratedUnit, Generator};
use std::fs;

/// Generate every unit for a source file
fn generate_units(source: &str) -> Vec<GeneratedUnit> {
    let output = Generator::default()
        .generate_source("input.cs", source)
        .expect("front-end failed");
    assert!(output.failures.is_empty(), "extraction failed: {:?}", output.failures);
    output.units
}

/// Load a test file from the codegen_snapshots directory
fn load_test_file(name: &str) -> String {
    let path = format!("tests/codegen_snapshots/{}.cs", name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read test file: {}", path))
}

/// The record unit, spelled out line by line.
const EXPECTED_RECORD: &[&str] = &[
    "// <auto-generated/>",
    "",
    "using System;",
    "using ExhaustiveMatching;",
    "",
    "namespace TestNamespace;",
    "",
    "[Closed(typeof(Number), typeof(Plus), typeof(Minus))]",
    "public partial abstract record TokenKind",
    "{",
    "    private TokenKind() { }",
    "",
    "    public partial sealed record Number: TokenKind;",
    "",
    "    public partial sealed record Plus: TokenKind;",
    "",
    "    public partial sealed record Minus: TokenKind;",
    "",
    "    public static class Cons",
    "    {",
    "        public static TokenKind Number(string Value) => new Number(Value);",
    "",
    "        public static TokenKind Plus { get; } = new Plus();",
    "",
    "        public static TokenKind Minus { get; } = new Minus();",
    "    }",
    "}",
];

#[test]
fn test_token_kind_units_match_exactly() {
    let units = generate_units(&load_test_file("token_kind"));
    let names: Vec<_> = units.iter().map(|u| u.hint_name.as_str()).collect();
    assert_eq!(names, vec!["TokenKind.g.cs", "TokenKind2.g.cs"]);

    assert_eq!(units[0].text, EXPECTED_RECORD.join("\n"));

    let expected_class = EXPECTED_RECORD
        .join("\n")
        .replace("record", "class")
        .replace("TokenKind", "TokenKind2");
    assert_eq!(units[1].text, expected_class);
}

#[test]
fn test_token_kind_record_codegen() {
    let units = generate_units(&load_test_file("token_kind"));
    let unit = &units[0];
    insta::assert_snapshot!("token_kind_record", unit.text);
}

#[test]
fn test_token_kind_class_codegen() {
    let units = generate_units(&load_test_file("token_kind"));
    let unit = &units[1];
    insta::assert_snapshot!("token_kind_class", unit.text);
}

#[test]
fn test_sample_codegen() {
    let units = generate_units(&load_test_file("sample"));
    let unit = &units[0];
    insta::assert_snapshot!("sample", unit.text);
}

#[test]
fn test_generic_result_codegen() {
    let units = generate_units(&load_test_file("generic_result"));
    let unit = &units[0];
    insta::assert_snapshot!("generic_result", unit.text);
}

#[test]
fn test_global_shape_codegen() {
    let units = generate_units(&load_test_file("global_shape"));
    assert_eq!(units.len(), 1);
    let unit = &units[0];
    insta::assert_snapshot!("global_shape", unit.text);
}

#[test]
fn test_empty_union_codegen() {
    let units = generate_units(&load_test_file("empty_union"));
    let unit = &units[0];
    assert!(!unit.text.contains("\n\n\n"), "no doubled blank lines");
    insta::assert_snapshot!("empty_union", unit.text);
}

#[test]
fn test_codegen_is_deterministic() {
    for name in ["token_kind", "sample", "generic_result", "global_shape", "empty_union"] {
        let source = load_test_file(name);
        assert_eq!(generate_units(&source), generate_units(&source), "{name}");
    }
}
