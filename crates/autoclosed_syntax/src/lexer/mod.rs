//! Lexer for C# declaration skeletons
//!
//! Handles tokenization including:
//! - Recognised keywords (type kinds, modifiers, namespace syntax) and identifiers (including `@verbatim` ones)
//! - Punctuation the parser inspects, and single-character operator tokens for everything else
//! - String and character literals in every C# flavour (regular, verbatim, interpolated, raw)
//! - Comments and preprocessor directives (skipped)
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `strings` - String/char literal scanning

mod strings;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use autoclosed_core::lang::punctuation::PunctuationId;

// ============================================================================
// LEXER STATE
// ============================================================================

/// Lexer for C# source code.
///
/// Converts source text into a stream of tokens. Literal contents are validated for termination but not kept.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    /// Only whitespace seen since the last newline (preprocessor directives must start a line).
    at_line_start: bool,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            at_line_start: true,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.current_pos, self.current_pos),
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() && c != '\u{feff}' {
                break;
            }
            self.advance();
            if c == '\n' {
                self.at_line_start = true;
            }
        }

        let start = self.current_pos;
        let line_start = std::mem::replace(&mut self.at_line_start, false);

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Preprocessor directives: `#nullable enable`, `#region`, ...
            '#' if line_start => self.skip_line(),

            // Comments
            '/' if self.peek() == Some('/') => self.skip_line(),
            '/' if self.peek() == Some('*') => self.skip_block_comment(start),

            ',' => self.add_punct(PunctuationId::Comma, start),
            ';' => self.add_punct(PunctuationId::Semicolon, start),
            '?' => self.add_punct(PunctuationId::Question, start),
            '(' => self.add_punct(PunctuationId::LParen, start),
            ')' => self.add_punct(PunctuationId::RParen, start),
            '[' => self.add_punct(PunctuationId::LBracket, start),
            ']' => self.add_punct(PunctuationId::RBracket, start),
            '{' => self.add_punct(PunctuationId::LBrace, start),
            '}' => self.add_punct(PunctuationId::RBrace, start),
            '<' => self.add_punct(PunctuationId::Lt, start),
            '>' => self.add_punct(PunctuationId::Gt, start),
            ':' => {
                if self.match_char(':') {
                    self.add_punct(PunctuationId::ColonColon, start);
                } else {
                    self.add_punct(PunctuationId::Colon, start);
                }
            }
            '=' => {
                if self.match_char('>') {
                    self.add_punct(PunctuationId::FatArrow, start);
                } else if self.match_char('=') {
                    self.add_token(TokenKind::Operator('='), start);
                } else {
                    self.add_punct(PunctuationId::Eq, start);
                }
            }
            '.' => {
                if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.scan_number(start, c);
                } else {
                    self.add_punct(PunctuationId::Dot, start);
                }
            }

            // Strings and characters
            '"' => self.scan_string(start, false, false),
            '\'' => self.scan_char(start),
            '@' => self.scan_at(start),
            '$' => self.scan_interpolated(start),

            // Numbers
            '0'..='9' => self.scan_number(start, c),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            '+' | '-' | '*' | '/' | '%' | '&' | '|' | '^' | '!' | '~' => {
                self.add_token(TokenKind::Operator(c), start)
            }

            _ => {
                self.errors.push(CompileError::syntax(
                    format!("Unexpected character '{}'", c),
                    Span::new(start, self.current_pos),
                ));
            }
        }
    }

    // ========================================================================
    // Token helpers
    // ========================================================================

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self, start: usize) {
        self.advance(); // '*'
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return;
                }
                Some(_) => {}
                None => {
                    self.errors.push(CompileError::syntax(
                        "Unterminated block comment",
                        Span::new(start, start + 2),
                    ));
                    return;
                }
            }
        }
    }

    // ========================================================================
    // Numbers and identifiers
    // ========================================================================

    /// Scan a numeric literal: `42`, `0x1F`, `1_000`, `3.5e-2f`, `.5m`.
    fn scan_number(&mut self, start: usize, first: char) {
        let hex = first == '0' && matches!(self.peek(), Some('x' | 'X'));
        let mut prev = first;
        while let Some(c) = self.peek() {
            let exponent_sign = matches!(c, '+' | '-') && matches!(prev, 'e' | 'E') && !hex;
            let fraction = c == '.' && self.peek_next().is_some_and(|n| n.is_ascii_digit());
            if c.is_ascii_alphanumeric() || c == '_' || exponent_sign || fraction {
                prev = c;
                self.advance();
            } else {
                break;
            }
        }
        self.add_token(TokenKind::Number, start);
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }
        let text = &self.source[start..self.current_pos];
        let kind = match keyword_id(text) {
            Some(id) => TokenKind::Keyword(id),
            None => TokenKind::Ident(text.to_string()),
        };
        self.add_token(kind, start);
    }

    /// `@` starts a verbatim identifier (`@class`) or a verbatim string (`@"..."`, `@$"..."`).
    fn scan_at(&mut self, start: usize) {
        match self.peek() {
            Some('"') => {
                self.advance();
                self.scan_string(start, true, false);
            }
            Some('$') if self.peek_next() == Some('"') => {
                self.advance();
                self.advance();
                self.scan_string(start, true, true);
            }
            Some(c) if is_ident_start(c) => {
                while let Some(c) = self.peek() {
                    if is_ident_continue(c) {
                        self.advance();
                    } else {
                        break;
                    }
                }
                let text = self.source[start..self.current_pos].to_string();
                self.add_token(TokenKind::Ident(text), start);
            }
            _ => self.errors.push(CompileError::syntax(
                "Expected identifier or string after '@'",
                Span::new(start, self.current_pos),
            )),
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
