//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use miette::{NamedSource, Report};

use crate::backend::{CheckSink, DirectorySink, EmitOutcome, EmitSink};
use crate::config::GeneratorConfig;
use crate::frontend::diagnostics::{self, CompileError};
use crate::frontend::{lexer, parser};
use crate::model::ExtractError;
use crate::pipeline::{Generator, SourceOutput, emit_units};

use super::{CliError, CliResult, ExitCode};

/// Maximum source file size (100 MB)
///
/// Files larger than this are rejected to prevent out-of-memory conditions.
const MAX_SOURCE_SIZE: u64 = 100 * 1024 * 1024;

/// Directory names never searched for sources.
const SKIPPED_DIRS: &[&str] = &["bin", "obj", "target", "node_modules"];

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (100 MB)
pub fn read_source(file_path: &str) -> CliResult<String> {
    let metadata =
        fs::metadata(file_path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", file_path, e)))?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(CliError::failure(format!(
            "Source file '{}' is too large ({} bytes, max {} bytes)",
            file_path,
            metadata.len(),
            MAX_SOURCE_SIZE
        )));
    }

    fs::read_to_string(file_path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", file_path, e)))
}

/// Render front-end diagnostics for one file.
fn format_diagnostics(file_path: &str, source: &str, errors: &[CompileError]) -> String {
    let mut msg = String::new();
    for err in errors {
        msg.push_str(&diagnostics::format_error(file_path, source, err));
    }
    msg
}

/// Render an extraction failure with its source context.
fn report_extract_error(file_path: &str, source: &str, err: &ExtractError) -> String {
    let report = Report::new(err.clone()).with_source_code(NamedSource::new(file_path, source.to_string()));
    format!("{:?}", report)
}

/// Run the pipeline on one file, printing warnings and extraction failures to stderr.
///
/// Returns `None` (after printing) if the file could not be tokenized or parsed.
fn generate_file(file_path: &str, source: &str, generator: &Generator) -> Option<SourceOutput> {
    let output = match generator.generate_source(file_path, source) {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = %e, "front-end failure");
            eprint!("{}", format_diagnostics(file_path, source, e.diagnostics()));
            return None;
        }
    };

    if !output.warnings.is_empty() {
        eprint!("{}", format_diagnostics(file_path, source, &output.warnings));
    }
    for failure in &output.failures {
        eprintln!("{}", report_extract_error(file_path, source, failure));
    }
    Some(output)
}

/// Lex and display tokens.
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source)
        .map_err(|errs| CliError::failure(format_diagnostics(file_path, &source, &errs).trim_end()))?;

    for tok in &tokens {
        println!("{:?}", tok);
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display the declaration skeleton.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let tokens = lexer::lex(&source)
        .map_err(|errs| CliError::failure(format_diagnostics(file_path, &source, &errs).trim_end()))?;

    match parser::parse(&source, &tokens) {
        Ok(unit) => {
            println!("{:#?}", unit);
            Ok(ExitCode::SUCCESS)
        }
        Err(errs) => Err(CliError::failure(format_diagnostics(file_path, &source, &errs).trim_end())),
    }
}

/// Print every generated unit of a file to stdout.
pub fn emit_file(file_path: &str, config: &GeneratorConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let generator = Generator::new(config.clone());
    let Some(output) = generate_file(file_path, &source, &generator) else {
        return Err(CliError::new("", ExitCode::FAILURE));
    };

    for (i, unit) in output.units.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("// ---- {} ----", unit.hint_name);
        println!("{}", unit.text);
    }

    if output.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

/// Print the extracted models of a file as JSON.
pub fn emit_model(file_path: &str, config: &GeneratorConfig) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;
    let generator = Generator::new(config.clone());
    let Some(output) = generate_file(file_path, &source, &generator) else {
        return Err(CliError::new("", ExitCode::FAILURE));
    };

    let models: Vec<serde_json::Value> = output.units.iter().map(|u| u.model.to_json()).collect();
    let json = serde_json::to_string_pretty(&models)
        .map_err(|e| CliError::failure(format!("Error serializing models: {}", e)))?;
    println!("{}", json);

    if output.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

/// Counts for one `generate` run.
#[derive(Debug, Default)]
struct RunSummary {
    files: usize,
    written: usize,
    unchanged: usize,
    removed: usize,
    outdated: Vec<(String, EmitOutcome)>,
    errors: usize,
}

impl RunSummary {
    fn count(&mut self, outcomes: Vec<(String, EmitOutcome)>) {
        for (_, outcome) in outcomes {
            match outcome {
                EmitOutcome::Written => self.written += 1,
                EmitOutcome::Unchanged => self.unchanged += 1,
                EmitOutcome::Removed => self.removed += 1,
                EmitOutcome::Stale | EmitOutcome::Missing | EmitOutcome::Orphaned => {}
            }
        }
    }
}

/// Generate units for every source under `paths`.
///
/// Files are processed in sorted path order; all units go through one sink so that two containers with the same
/// name are caught even when they live in different files. Generated units in `out_dir` that no annotated type
/// produces any more are deleted (or, with `check`, reported) once every file succeeded.
pub fn generate(paths: &[PathBuf], out_dir: &Path, check: bool, config: &GeneratorConfig) -> CliResult<ExitCode> {
    let files = collect_cs_files(paths)?;
    if files.is_empty() {
        return Err(CliError::failure("No .cs files found"));
    }

    let generator = Generator::new(config.clone());
    let summary = if check {
        let mut sink = CheckSink::new(out_dir);
        let mut summary = generate_into(&files, &generator, &mut sink)?;
        summary.outdated = sink.outdated().to_vec();
        summary
    } else {
        generate_into(&files, &generator, &mut DirectorySink::new(out_dir))?
    };

    if summary.errors > 0 {
        return Err(CliError::failure(format!(
            "\n{} error(s) in {} file(s); no units were produced for failing types",
            summary.errors, summary.files
        )));
    }

    if check {
        if !summary.outdated.is_empty() {
            for (hint, outcome) in &summary.outdated {
                let state = match outcome {
                    EmitOutcome::Missing => "missing",
                    EmitOutcome::Orphaned => "no longer generated",
                    _ => "out of date",
                };
                println!("{}: {}", out_dir.join(hint).display(), state);
            }
            return Err(CliError::failure(format!(
                "\n{} generated file(s) need regenerating",
                summary.outdated.len()
            )));
        }
        println!("✓ {} generated file(s) up to date", summary.unchanged);
    } else {
        println!(
            "✓ {} file(s) scanned, {} unit(s) written, {} unchanged, {} removed",
            summary.files, summary.written, summary.unchanged, summary.removed
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn generate_into<S: EmitSink>(files: &[PathBuf], generator: &Generator, sink: &mut S) -> CliResult<RunSummary> {
    let mut summary = RunSummary::default();

    for file in files {
        let file_path = file.to_string_lossy();
        let source = read_source(&file_path)?;
        summary.files += 1;

        let Some(output) = generate_file(&file_path, &source, generator) else {
            summary.errors += 1;
            continue;
        };
        summary.errors += output.failures.len();

        let outcomes = emit_units(sink, &output.units).map_err(|e| CliError::failure(format!("{}: {}", file_path, e)))?;
        summary.count(outcomes);
    }

    // A failing type has no unit this run; its old one is not a leftover.
    if summary.errors == 0 {
        let leftovers = sink.finish().map_err(|e| CliError::failure(e.to_string()))?;
        summary.count(leftovers);
    }

    Ok(summary)
}

/// Expand files and directories into a sorted, de-duplicated list of `.cs` sources.
///
/// Generated units (`*.g.cs`) are never inputs.
fn collect_cs_files(paths: &[PathBuf]) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(CliError::failure(format!("Path '{}' does not exist", path.display())));
        }
        collect_from(path, &mut files);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn collect_from(path: &Path, files: &mut Vec<PathBuf>) {
    if path.is_file() {
        if is_source(path) {
            files.push(path.to_path_buf());
        }
    } else if path.is_dir() {
        if let Ok(entries) = fs::read_dir(path) {
            for entry in entries.flatten() {
                let entry_path = entry.path();
                if entry_path.is_dir() {
                    let name = entry_path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                    if !name.starts_with('.') && !SKIPPED_DIRS.contains(&name) {
                        collect_from(&entry_path, files);
                    }
                } else if is_source(&entry_path) {
                    files.push(entry_path);
                }
            }
        }
    }
}

fn is_source(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    name.ends_with(".cs") && !name.ends_with(".g.cs")
}
