#![forbid(unsafe_code)]
//! autoclosed: closes annotated C# case hierarchies into exhaustively-matchable unions.
//!
//! A container type marked `[AutoClosed]` lists its cases as nested `partial` types. For each such container this
//! crate generates a companion unit that adds the `[Closed(...)]` marker, a private constructor, the base clause on
//! every case, and a `Cons` class of smart constructors.
//!
//! The crate is split into a pure core and thin adapters:
//! - `model`: declaration records → [`CaseUnionModel`] (pure)
//! - `backend`: model → unit text (pure), plus emission sinks
//! - `frontend`: C# source → declaration records (via the `autoclosed_syntax` crate)
//! - `pipeline`, `cli`: wiring
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: Generated units are plain strings; nothing in them is executed by this crate.
//!
//! ## Examples
//!
//! ```rust
//! use autoclosed::model::{ConstructorDeclaration, TypeDeclaration, extract};
//! use autoclosed::backend::{RenderOptions, render};
//!
//! let shape = TypeDeclaration::new("Shape", "record")
//!     .with_modifiers(&["public", "partial"])
//!     .with_nested(
//!         TypeDeclaration::new("Circle", "record")
//!             .with_modifiers(&["partial"])
//!             .with_constructor(ConstructorDeclaration::public(&[("double", "Radius")])),
//!     );
//! let model = extract(&shape).unwrap();
//! let text = render(&model, &RenderOptions::default());
//! assert!(text.contains("public static Shape Circle(double Radius) => new Circle(Radius);"));
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod frontend;
pub mod model;
pub mod pipeline;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use backend::{RenderOptions, render};
pub use config::{AttributeConfig, GeneratorConfig};
pub use model::{CaseArg, CaseUnionModel, Variant, extract};
pub use pipeline::{GeneratedUnit, Generator, SourceOutput};
