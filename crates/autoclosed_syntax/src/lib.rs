//! Declaration-skeleton C# front-end for autoclosed: lexer, parser, AST, diagnostics.
//!
//! This crate reads just enough C# to answer "which types are declared where, with which modifiers, attributes,
//! generic parameters, constructors and nested types". It does not resolve names or check types.
//!
//! ## Notes
//! - Member bodies, statements, expressions, base lists and constraint clauses are skipped with balanced-delimiter
//!   recovery; only their extent matters.
//! - Vocabulary identity (keywords/punctuation) comes from `autoclosed_core::lang` registries.
//!
//! ## Examples
//! ```rust,no_run
//! use autoclosed_syntax::{lexer, parser};
//!
//! let source = "namespace Demo; public partial record Shape { partial record Dot; }";
//! let tokens = lexer::lex(source).unwrap();
//! let unit = parser::parse(source, &tokens).unwrap();
//! assert_eq!(unit.items.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
