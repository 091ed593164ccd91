//! Declaration front-end
//!
//! This module connects parsed C# to the model:
//! - `lexer`, `parser`, `ast`, `diagnostics`: provided by the `autoclosed_syntax` crate
//! - `collect`: finds annotated containers and lowers them into declaration records

// Syntax components are provided by the shared autoclosed_syntax crate.
pub use autoclosed_syntax::{ast, diagnostics, lexer, parser};

pub mod collect;
