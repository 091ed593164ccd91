// Token-stream helpers.
//
// This chunk contains the low-level primitives used throughout parsing:
// - Peeking/consuming tokens (`peek`, `advance`, `previous`)
// - Matching / expecting keywords, punctuation, and identifiers
// - Copying verbatim source text for spans
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` if the current token is [`TokenKind::Eof`].
    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &Token {
        self.peek_at(0)
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        self.peek_at(1)
    }

    /// Return the token `offset` positions ahead, clamped to `Eof`.
    fn peek_at(&self, offset: usize) -> &Token {
        let idx = (self.pos + offset).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Advance to the next token and return the token we just consumed.
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.pos += 1;
        }
        self.previous()
    }

    /// Return the most recently consumed token (or the first token if none was consumed).
    fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the given punctuation or report `msg` at the current token.
    fn expect_punct(&mut self, id: PunctuationId, msg: &str) -> Result<Span, CompileError> {
        if self.check_punct(id) {
            Ok(self.advance().span)
        } else {
            Err(self.error_here(msg))
        }
    }

    /// Consume an identifier (contextual keywords included) or report `msg`.
    fn expect_ident(&mut self, msg: &str) -> Result<Spanned<Ident>, CompileError> {
        match self.peek().ident_text() {
            Some(name) => {
                let name = name.to_string();
                let span = self.advance().span;
                Ok(Spanned::new(name, span))
            }
            None => Err(self.error_here(msg)),
        }
    }

    /// Build a syntax error at the current token, naming what was found.
    fn error_here(&self, msg: &str) -> CompileError {
        let tok = self.peek();
        CompileError::syntax(format!("{}, found {}", msg, describe(&tok.kind)), tok.span)
    }

    /// Return source text for a span, verbatim.
    fn text(&self, span: Span) -> &'a str {
        &self.source[span.start..span.end]
    }
}

/// Human-readable token description for diagnostics.
fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Keyword(id) => format!("keyword `{}`", keywords::as_str(*id)),
        TokenKind::Punctuation(id) => format!("`{}`", punctuation::as_str(*id)),
        TokenKind::Ident(name) => format!("identifier `{}`", name),
        TokenKind::Number => "number literal".to_string(),
        TokenKind::String => "string literal".to_string(),
        TokenKind::Char => "character literal".to_string(),
        TokenKind::Operator(c) => format!("`{}`", c),
        TokenKind::Eof => "end of file".to_string(),
    }
}

/// Collapse every whitespace run to a single space.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
