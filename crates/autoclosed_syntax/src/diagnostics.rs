//! Diagnostics and error reporting for the declaration front-end.
//!
//! Errors carry byte spans into the original source; [`format_error`] turns one into a
//! `file:line:col` report with the offending line and a caret underline.

use crate::ast::Span;
use thiserror::Error;

/// A front-end error or warning with location information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            kind: ErrorKind::Error,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            ..Self::new(message, span)
        }
    }

    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self {
            kind: ErrorKind::Warning,
            ..Self::new(message, span)
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }

    /// Return `true` if this diagnostic should fail the run.
    pub fn is_error(&self) -> bool {
        !matches!(self.kind, ErrorKind::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    Syntax,
    Warning,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Error => write!(f, "error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Warning => write!(f, "warning"),
        }
    }
}

/// Format a diagnostic with source context.
///
/// ## Examples
/// ```rust
/// use autoclosed_syntax::ast::Span;
/// use autoclosed_syntax::diagnostics::{CompileError, format_error};
///
/// let err = CompileError::syntax("unterminated string literal", Span::new(4, 5));
/// let text = format_error("Demo.cs", "var \"x", &err);
/// assert!(text.starts_with("syntax error: unterminated string literal"));
/// assert!(text.contains("--> Demo.cs:1:5"));
/// ```
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let (line_num, col_num, line_text) = get_line_info(source, error.span.start);
    let gutter = line_num.to_string().len();
    let mut out = String::new();

    out.push_str(&format!("{}: {}\n", error.kind, error.message));
    out.push_str(&format!("  --> {}:{}:{}\n", file_name, line_num, col_num));
    out.push_str(&format!("  {:>gutter$} |\n", ""));
    out.push_str(&format!("  {:>gutter$} | {}\n", line_num, line_text));

    let underline_len = if error.span.end > error.span.start {
        (error.span.end - error.span.start)
            .min(line_text.len().saturating_sub(col_num - 1))
            .max(1)
    } else {
        1
    };
    out.push_str(&format!(
        "  {:>gutter$} | {}{}\n",
        "",
        " ".repeat(col_num - 1),
        "^".repeat(underline_len)
    ));

    for note in &error.notes {
        out.push_str(&format!("  = note: {}\n", note));
    }
    for hint in &error.hints {
        out.push_str(&format!("  = hint: {}\n", hint));
    }

    out
}

/// Get line number, column number, and line text for a byte offset.
fn get_line_info(source: &str, offset: usize) -> (usize, usize, &str) {
    let offset = offset.min(source.len());
    let mut line_num = 1;
    let mut line_start = 0;

    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line_num += 1;
            line_start = i + 1;
        }
    }

    let line_end = source[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(source.len());

    let line_text = source[line_start..line_end].trim_end_matches('\r');
    let col_num = offset - line_start + 1;

    (line_num, col_num, line_text)
}
