//! Text synthesis and emission.
//!
//! The pipeline is:
//! 1. [`CaseUnionModel`](crate::model::CaseUnionModel) → `render` → generated C# unit text
//! 2. Unit text → an [`EmitSink`] under the key `{Name}.g.cs`
//!
//! ## Module Organization
//!
//! - `config.rs` - Render options (newline style, indentation)
//! - `writer.rs` - Indentation-tracking line writer
//! - `render.rs` - Unit layout
//! - `sink.rs` - Emission targets (directory, check-only, in-memory)

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod config;
pub mod render;
pub mod sink;
pub mod writer;

pub use config::{Newline, RenderOptions};
pub use render::{hint_name, render};
pub use sink::{CheckSink, DirectorySink, EmitOutcome, EmitSink, MemorySink, SinkError};
