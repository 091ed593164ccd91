//! End-to-end generation for one source file.
//!
//! lex → parse → collect → extract → render. The front-end stages fail the whole file; extraction failures are
//! per container, so one bad container does not hide the units of its neighbours.

use thiserror::Error;

use crate::backend::{EmitOutcome, EmitSink, SinkError, hint_name, render};
use crate::config::GeneratorConfig;
use crate::frontend::collect::collect_candidates;
use crate::frontend::diagnostics::CompileError;
use crate::frontend::{lexer, parser};
use crate::model::{CaseUnionModel, ExtractError, TypeDeclaration, extract};

/// A rendered unit ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Emission key, `{Name}.g.cs`.
    pub hint_name: String,
    pub model: CaseUnionModel,
    pub text: String,
}

/// Everything produced for one source file.
#[derive(Debug, Clone, Default)]
pub struct SourceOutput {
    /// Units in source order.
    pub units: Vec<GeneratedUnit>,
    pub warnings: Vec<CompileError>,
    /// Containers that could not be closed.
    pub failures: Vec<ExtractError>,
}

impl SourceOutput {
    /// Return `true` if no container failed.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Front-end failures that stop a file before any container is looked at.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to tokenize `{file}` ({} error(s))", errors.len())]
    Lex { file: String, errors: Vec<CompileError> },

    #[error("failed to parse `{file}` ({} error(s))", errors.len())]
    Parse { file: String, errors: Vec<CompileError> },
}

impl GenerateError {
    pub fn diagnostics(&self) -> &[CompileError] {
        match self {
            GenerateError::Lex { errors, .. } | GenerateError::Parse { errors, .. } => errors,
        }
    }
}

/// Runs the generation pipeline with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate units for every annotated container in `source`.
    ///
    /// ## Parameters
    /// - `file`: Name used in diagnostics.
    /// - `source`: C# source text.
    ///
    /// ## Errors
    /// Returns [`GenerateError`] if the file cannot be tokenized or parsed. Per-container extraction failures are
    /// reported in [`SourceOutput::failures`] instead.
    #[tracing::instrument(skip(self, source), fields(bytes = source.len()))]
    pub fn generate_source(&self, file: &str, source: &str) -> Result<SourceOutput, GenerateError> {
        let tokens = lexer::lex(source).map_err(|errors| GenerateError::Lex {
            file: file.to_string(),
            errors,
        })?;
        let unit = parser::parse(source, &tokens).map_err(|errors| GenerateError::Parse {
            file: file.to_string(),
            errors,
        })?;

        let collected = collect_candidates(&unit, &self.config.attributes);
        let mut output = SourceOutput {
            warnings: collected.warnings,
            ..SourceOutput::default()
        };
        for container in &collected.candidates {
            match self.generate_declaration(container) {
                Ok(unit) => output.units.push(unit),
                Err(e) => output.failures.push(e),
            }
        }

        Ok(output)
    }

    /// Extract and render one container declaration.
    ///
    /// ## Errors
    /// Returns the [`ExtractError`] for the container; no unit is produced in that case.
    pub fn generate_declaration(&self, container: &TypeDeclaration) -> Result<GeneratedUnit, ExtractError> {
        let model = extract(container)?;
        let text = render(&model, &self.config.render);
        Ok(GeneratedUnit {
            hint_name: hint_name(&model),
            model,
            text,
        })
    }
}

/// Emit units into a sink in order, stopping at the first sink error.
pub fn emit_units<'a, S, I>(sink: &mut S, units: I) -> Result<Vec<(String, EmitOutcome)>, SinkError>
where
    S: EmitSink + ?Sized,
    I: IntoIterator<Item = &'a GeneratedUnit>,
{
    let mut outcomes = Vec::new();
    for unit in units {
        let outcome = sink.emit(&unit.hint_name, &unit.text)?;
        outcomes.push((unit.hint_name.clone(), outcome));
    }
    Ok(outcomes)
}
