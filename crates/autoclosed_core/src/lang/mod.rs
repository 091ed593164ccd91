//! C# vocabulary registries.
//!
//! Callers work with **stable IDs** (`KeywordId`, `PunctuationId`) and look up spellings and metadata via
//! registry tables instead of comparing strings across the front-end.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - Only the subset of C# needed to read declaration skeletons is registered. Everything else lexes as an
//!   identifier or an operator character and is skipped by the parser.
//!
//! ## Examples
//! ```rust
//! use autoclosed_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("record"), Some(KeywordId::Record));
//! assert_eq!(keywords::as_str(KeywordId::Partial), "partial");
//! ```

pub mod generated;
pub mod keywords;
pub mod punctuation;
