// Parameter lists.
//
// Types are never parsed structurally: a declarator runs to the next `,`, `)` or `=` outside nested delimiters,
// its last token is the name, and everything before it (after modifiers) is the type, copied verbatim.
impl<'a> Parser<'a> {
    /// `( param (, param)* )`
    fn param_list(&mut self) -> Result<Vec<Param>, CompileError> {
        self.expect_punct(PunctuationId::LParen, "Expected `(`")?;

        let mut params = Vec::new();
        if self.match_punct(PunctuationId::RParen) {
            return Ok(params);
        }

        loop {
            params.push(self.param()?);
            if self.match_punct(PunctuationId::Comma) {
                continue;
            }
            self.expect_punct(PunctuationId::RParen, "Expected `,` or `)` in parameter list")?;
            return Ok(params);
        }
    }

    /// `[attrs] modifiers Type name [= default]`
    fn param(&mut self) -> Result<Param, CompileError> {
        let start = self.peek().span;
        self.attribute_sections()?;

        let mut modifiers = Vec::new();
        while let Some(id) = self.peek().keyword_id() {
            let is_param_modifier =
                keywords::category(id) == KeywordCategory::Parameter || matches!(id, KeywordId::Ref | KeywordId::Readonly);
            if !is_param_modifier {
                break;
            }
            // `scoped` is contextual: a parameter may be named or typed `scoped`.
            if id == KeywordId::Scoped && self.peek_next().ident_text().is_none() {
                break;
            }
            modifiers.push(id);
            self.advance();
        }

        let first = self.pos;
        let end = self.declarator_end();
        if end < first + 2 {
            return Err(self.error_here("Expected parameter type and name"));
        }

        let name_tok = &self.tokens[end - 1];
        let name = match name_tok.ident_text() {
            Some(name) => name.to_string(),
            None => {
                return Err(CompileError::syntax(
                    format!("Expected parameter name, found {}", describe(&name_tok.kind)),
                    name_tok.span,
                ));
            }
        };
        let ty_span = self.tokens[first].span.merge(self.tokens[end - 2].span);
        let ty = normalize_whitespace(self.text(ty_span));

        self.pos = end;
        // Default values are not kept.
        if self.match_punct(PunctuationId::Eq) {
            self.skip_default_value();
        }

        Ok(Param {
            ty,
            name,
            modifiers,
            span: start.merge(self.previous().span),
        })
    }

    /// Index of the token ending the current declarator (`,`, `)` or `=` at depth 0, or `Eof`).
    fn declarator_end(&self) -> usize {
        let mut depth = 0usize;
        let mut idx = self.pos;

        loop {
            match &self.tokens[idx].kind {
                TokenKind::Eof => return idx,
                TokenKind::Punctuation(p) => match p {
                    PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::Lt => depth += 1,
                    PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::Gt => {
                        if depth == 0 {
                            return idx;
                        }
                        depth -= 1;
                    }
                    PunctuationId::Comma | PunctuationId::Eq if depth == 0 => return idx,
                    _ => {}
                },
                _ => {}
            }
            idx += 1;
        }
    }

    /// Skip a default value expression up to the next `,` or `)` at depth 0 (not consumed).
    fn skip_default_value(&mut self) {
        let mut depth = 0usize;

        while !self.is_at_end() {
            match self.peek().punctuation_id() {
                Some(PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace) => depth += 1,
                Some(PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace) => {
                    if depth == 0 {
                        return;
                    }
                    depth -= 1;
                }
                Some(PunctuationId::Comma) if depth == 0 => return,
                _ => {}
            }
            self.advance();
        }
    }
}
