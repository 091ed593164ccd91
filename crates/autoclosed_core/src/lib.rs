//! Provide the canonical vocabulary shared by the autoclosed front-end and generator.
//!
//! This crate is intentionally small and dependency-free. It answers two questions for the rest of the workspace:
//! - which C# words and punctuation the declaration front-end recognises (and what role they play), and
//! - which names the generated unit uses (`ExhaustiveMatching`, `Closed`, `Cons`, the header marker).
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no parser/AST types.

pub mod lang;
