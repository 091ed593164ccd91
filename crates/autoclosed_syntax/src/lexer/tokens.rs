//! Token types for the C# declaration lexer.
//!
//! The lexer uses **registry-backed IDs** for vocabulary:
//! - `Keyword(KeywordId)` for recognised words
//! - `Punctuation(PunctuationId)` for punctuation the parser inspects
//!
//! ## Notes
//! - Literal payloads are not kept: the parser only needs to know a literal occupies a position.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::Span;
use autoclosed_core::lang::keywords::{self, KeywordId};
use autoclosed_core::lang::punctuation::PunctuationId;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    /// Identifier as written; verbatim identifiers keep their `@` prefix.
    Ident(String),
    Number,
    String,
    Char,

    /// Any operator character without a registry entry (`+`, `!`, `~`, ...).
    Operator(char),

    // ========== Special ==========
    Eof,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Resolve an identifier spelling to a keyword id, if recognised.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
