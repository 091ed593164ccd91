//! Parser for C# declaration skeletons
//!
//! Converts a token stream into a [`CompilationUnit`]: namespaces, type declarations, and the constructors and
//! nested types inside them. Everything else is skipped with balanced-delimiter recovery.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use autoclosed_syntax::{lexer, parser};
//!
//! let source = "namespace Demo;\n[AutoClosed]\npublic partial record Shape\n{\n    partial record Circle(double Radius);\n}\n";
//! let tokens = lexer::lex(source).unwrap();
//! let unit = parser::parse(source, &tokens).unwrap();
//! assert_eq!(unit.items.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use autoclosed_core::lang::keywords::{self, KeywordCategory, KeywordId};
use autoclosed_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/params.rs");
include!("parser/skip.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
