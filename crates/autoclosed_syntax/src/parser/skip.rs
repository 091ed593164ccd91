// Error recovery and skipping.
//
// Most of a C# file is irrelevant to the generator. These helpers step over it while keeping
// delimiters balanced, so a method body full of braces never ends a type body early.
impl<'a> Parser<'a> {
    /// Skip one member or statement we do not model.
    ///
    /// Stops after a `;` at depth 0, after a `{ ... }` block that is not continued by an expression
    /// (`= ...`, `.Member`, `,`), or before a `}` that closes the enclosing body.
    fn skip_member(&mut self) {
        let mut depth = 0usize;

        while !self.is_at_end() {
            match self.peek().punctuation_id() {
                Some(PunctuationId::LParen | PunctuationId::LBracket) => {
                    depth += 1;
                    self.advance();
                }
                Some(PunctuationId::RParen | PunctuationId::RBracket) => {
                    self.advance();
                    if depth == 0 {
                        // stray closer
                        return;
                    }
                    depth -= 1;
                }
                Some(PunctuationId::LBrace) => {
                    self.skip_block();
                    if depth == 0 && (self.match_punct(PunctuationId::Semicolon) || !self.continues_after_block()) {
                        return;
                    }
                }
                // Closes the enclosing body (or an unbalanced `(` ran into it); either way the member ends here.
                Some(PunctuationId::RBrace) => return,
                Some(PunctuationId::Semicolon) => {
                    self.advance();
                    if depth == 0 {
                        return;
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// Return `true` if the token after a skipped block continues the same member.
    fn continues_after_block(&self) -> bool {
        match &self.peek().kind {
            TokenKind::Operator(_) => true,
            TokenKind::Punctuation(p) => matches!(
                p,
                PunctuationId::Eq | PunctuationId::Dot | PunctuationId::Comma | PunctuationId::Question
            ),
            _ => false,
        }
    }

    /// Skip a `{ ... }` block including its closing brace. Stops quietly at end of file.
    fn skip_block(&mut self) {
        let mut depth = 0usize;

        while !self.is_at_end() {
            match self.advance().punctuation_id() {
                Some(PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RBrace) => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Skip a balanced `(...)`, `[...]`, `{...}` or `<...>` group starting at the current token.
    fn skip_balanced(&mut self) -> Result<(), CompileError> {
        let open_span = self.peek().span;
        let Some(open) = self.peek().punctuation_id() else {
            return Err(self.error_here("Expected an opening delimiter"));
        };
        let Some(close) = punctuation::closer(open) else {
            return Err(self.error_here("Expected an opening delimiter"));
        };

        let mut depth = 0usize;
        while !self.is_at_end() {
            let id = self.advance().punctuation_id();
            if id == Some(open) {
                depth += 1;
            } else if id == Some(close) {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
        }

        Err(CompileError::syntax(
            format!("Unclosed `{}`", punctuation::as_str(open)),
            open_span,
        ))
    }

    /// Skip a base list and `where` clauses, stopping before the `{` or `;` that starts the body.
    fn skip_header_tail(&mut self) -> Result<(), CompileError> {
        loop {
            if self.check_punct(PunctuationId::LBrace) || self.check_punct(PunctuationId::Semicolon) {
                return Ok(());
            }
            if self.is_at_end() || self.check_punct(PunctuationId::RBrace) {
                return Err(self.error_here("Expected `{` or `;` after type declaration header"));
            }
            if self.check_punct(PunctuationId::LParen) {
                self.skip_balanced()?;
            } else {
                self.advance();
            }
        }
    }

    /// Skip to (not past) the `}` closing the current body.
    fn skip_until_close(&mut self) {
        let mut depth = 0usize;

        while !self.is_at_end() {
            match self.peek().punctuation_id() {
                Some(PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RBrace) => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                _ => {}
            }
            self.advance();
        }
    }

    /// Recover after an error by skipping to the next member boundary.
    fn synchronize(&mut self) {
        self.skip_member();
    }
}
