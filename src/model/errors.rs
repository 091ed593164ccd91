//! Extraction diagnostics.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Why a container could not be turned into a model.
///
/// A failed container never produces a unit; it is reported against its declaration instead.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ExtractError {
    #[error("`{name}` must be declared `partial` to be closed")]
    #[diagnostic(
        code(autoclosed::extract::not_partial),
        help("add the `partial` modifier so the generated declaration can merge with it")
    )]
    NotPartial {
        name: String,
        #[label("declared without `partial`")]
        span: Option<SourceSpan>,
    },

    #[error("variant `{variant}` of `{container}` has {count} public constructors")]
    #[diagnostic(
        code(autoclosed::extract::ambiguous_constructor),
        help("keep exactly one public constructor; make the others `internal` or `private`")
    )]
    AmbiguousConstructor {
        container: String,
        variant: String,
        count: usize,
        #[label("cannot choose a constructor for this variant")]
        span: Option<SourceSpan>,
    },
}

impl ExtractError {
    /// Name of the container the error is attributed to.
    pub fn container(&self) -> &str {
        match self {
            ExtractError::NotPartial { name, .. } => name,
            ExtractError::AmbiguousConstructor { container, .. } => container,
        }
    }
}
