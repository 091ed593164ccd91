//! String and character literal scanning.
//!
//! Every flavour of C# string becomes a single `TokenKind::String` token:
//! - regular `"a\"b"` and verbatim `@"a""b"` strings
//! - interpolated `$"{x}"`, `$@"..."`, `@$"..."` strings, including nested strings inside holes
//! - raw `"""..."""` strings with any `$` prefix count
//!
//! Only termination is validated; contents are not decoded.

use super::{Lexer, TokenKind};
use crate::ast::Span;
use crate::diagnostics::CompileError;

impl<'a> Lexer<'a> {
    /// Scan a string whose opening quote (and any prefix) has been consumed, then emit one token.
    pub(super) fn scan_string(&mut self, start: usize, verbatim: bool, interpolated: bool) {
        if self.scan_string_body(verbatim, interpolated) {
            self.add_token(TokenKind::String, start);
        } else {
            self.errors.push(CompileError::syntax(
                "Unterminated string literal",
                Span::new(start, self.current_pos),
            ));
        }
    }

    /// `$"..."`, `$@"..."`, `$$"""..."""`.
    pub(super) fn scan_interpolated(&mut self, start: usize) {
        while self.peek() == Some('$') {
            self.advance();
        }
        let verbatim = self.match_char('@');
        if self.match_char('"') {
            self.scan_string(start, verbatim, true);
        } else {
            self.errors.push(CompileError::syntax(
                "Expected string after '$'",
                Span::new(start, self.current_pos),
            ));
        }
    }

    pub(super) fn scan_char(&mut self, start: usize) {
        loop {
            match self.advance() {
                Some('\\') => {
                    self.advance();
                }
                Some('\'') => {
                    self.add_token(TokenKind::Char, start);
                    return;
                }
                Some('\n') | None => {
                    self.errors.push(CompileError::syntax(
                        "Unterminated character literal",
                        Span::new(start, self.current_pos),
                    ));
                    return;
                }
                Some(_) => {}
            }
        }
    }

    /// Consume a string body after its opening quote. Returns `false` if the input ends first.
    fn scan_string_body(&mut self, verbatim: bool, interpolated: bool) -> bool {
        if self.peek() == Some('"') && self.peek_next() == Some('"') {
            self.advance();
            self.advance();
            return self.scan_raw_body();
        }

        loop {
            match self.advance() {
                None => return false,
                Some('\n') if !verbatim => return false,
                Some('\\') if !verbatim => {
                    self.advance();
                }
                Some('"') => {
                    if verbatim && self.match_char('"') {
                        continue;
                    }
                    return true;
                }
                Some('{') if interpolated => {
                    if !self.match_char('{') && !self.scan_hole() {
                        return false;
                    }
                }
                Some(_) => {}
            }
        }
    }

    /// Consume a raw string body. Three opening quotes were consumed; more may follow.
    fn scan_raw_body(&mut self) -> bool {
        let mut quotes = 3;
        while self.match_char('"') {
            quotes += 1;
        }
        loop {
            match self.advance() {
                None => return false,
                Some('"') => {
                    let mut run = 1;
                    while self.match_char('"') {
                        run += 1;
                    }
                    if run >= quotes {
                        return true;
                    }
                }
                Some(_) => {}
            }
        }
    }

    /// Consume an interpolation hole after its `{`, up to the matching `}`.
    fn scan_hole(&mut self) -> bool {
        let mut depth = 1usize;
        loop {
            match self.advance() {
                None => return false,
                Some('{') => depth += 1,
                Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                }
                Some('"') => {
                    if !self.scan_string_body(false, false) {
                        return false;
                    }
                }
                Some('@') if self.peek() == Some('"') => {
                    self.advance();
                    if !self.scan_string_body(true, false) {
                        return false;
                    }
                }
                Some('$') if matches!(self.peek(), Some('"' | '@')) => {
                    let verbatim = self.match_char('@');
                    if !self.match_char('"') || !self.scan_string_body(verbatim, true) {
                        return false;
                    }
                }
                Some('\'') => {
                    while let Some(c) = self.advance() {
                        match c {
                            '\\' => {
                                self.advance();
                            }
                            '\'' => break,
                            _ => {}
                        }
                    }
                }
                Some(_) => {}
            }
        }
    }
}
