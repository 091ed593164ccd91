// Declaration parsing.
//
// This chunk parses the constructs the generator looks at:
// - namespaces (block and file-scoped)
// - attribute sections and modifiers
// - type declaration headers, generic parameter lists, and bodies (nested types + constructors)
impl<'a> Parser<'a> {
    /// Parse one namespace-level item.
    ///
    /// Returns `Ok(None)` for constructs that are skipped (top-level statements, delegates, ...).
    fn item(&mut self) -> Result<Option<Spanned<Item>>, CompileError> {
        let start = self.peek().span;
        if self.at_using_directive() {
            return self.using_directive().map(Some);
        }

        let attributes = self.attribute_sections()?;
        if self.check_keyword(KeywordId::Namespace) {
            return self.namespace_decl().map(Some);
        }

        let modifiers = self.modifiers();
        match self.type_kind() {
            Some(kind) => {
                let decl = self.type_decl(attributes, modifiers, kind)?;
                let span = start.merge(self.previous().span);
                Ok(Some(Spanned::new(Item::Type(decl), span)))
            }
            None => {
                self.skip_member();
                Ok(None)
            }
        }
    }

    /// `namespace A.B { ... }` or `namespace A.B;` (which owns the rest of the file).
    fn namespace_decl(&mut self) -> Result<Spanned<Item>, CompileError> {
        let start = self.advance().span; // `namespace`
        let name = self.qualified_name("Expected namespace name")?;

        let (file_scoped, items) = if self.match_punct(PunctuationId::Semicolon) {
            (true, self.items(false))
        } else {
            self.expect_punct(PunctuationId::LBrace, "Expected `{` or `;` after namespace name")?;
            let items = self.items(true);
            // `items` has already reported a missing `}` at end of file.
            self.match_punct(PunctuationId::RBrace);
            self.match_punct(PunctuationId::Semicolon);
            (false, items)
        };

        let span = start.merge(self.previous().span);
        Ok(Spanned::new(
            Item::Namespace(NamespaceDecl {
                name,
                file_scoped,
                items,
            }),
            span,
        ))
    }

    /// Return `true` at `[global] using` followed by a directive rather than a `using` statement.
    fn at_using_directive(&self) -> bool {
        let offset = usize::from(
            self.check_keyword(KeywordId::Global) && self.peek_next().kind.is_keyword(KeywordId::Using),
        );
        if !self.peek_at(offset).kind.is_keyword(KeywordId::Using) {
            return false;
        }

        let first = self.peek_at(offset + 1);
        if first.kind.is_keyword(KeywordId::Static) {
            return true;
        }
        let after = self.peek_at(offset + 2);
        if first.kind.is_keyword(KeywordId::Global) && after.kind.is_punctuation(PunctuationId::ColonColon) {
            return true;
        }
        first.kind.ident_text().is_some()
            && matches!(
                after.punctuation_id(),
                Some(
                    PunctuationId::Dot
                        | PunctuationId::Semicolon
                        | PunctuationId::Eq
                        | PunctuationId::ColonColon
                        | PunctuationId::Lt
                )
            )
    }

    /// `[global] using [static] [Alias =] Target;`
    fn using_directive(&mut self) -> Result<Spanned<Item>, CompileError> {
        let start = self.peek().span;
        let global = self.match_keyword(KeywordId::Global);
        self.advance(); // `using`
        let is_static = self.match_keyword(KeywordId::Static);

        let alias = if self.peek_next().kind.is_punctuation(PunctuationId::Eq) {
            let alias = self.expect_ident("Expected alias name")?.node;
            self.advance(); // `=`
            Some(alias)
        } else {
            None
        };

        let first = self.peek().span;
        while !self.check_punct(PunctuationId::Semicolon) {
            if self.is_at_end() || self.check_punct(PunctuationId::LBrace) || self.check_punct(PunctuationId::RBrace) {
                return Err(self.error_here("Expected `;` after using directive"));
            }
            self.advance();
        }
        if self.peek().span == first {
            return Err(self.error_here("Expected namespace or type after `using`"));
        }
        let target = normalize_whitespace(self.text(first.merge(self.previous().span)));
        self.advance(); // `;`

        let span = start.merge(self.previous().span);
        Ok(Spanned::new(
            Item::Using(UsingDirective {
                global,
                is_static,
                alias,
                target,
            }),
            span,
        ))
    }

    /// `Ident ('.' Ident)*`, returned as written without whitespace.
    fn qualified_name(&mut self, msg: &str) -> Result<String, CompileError> {
        let mut name = self.expect_ident(msg)?.node;
        while self.check_punct(PunctuationId::Dot) {
            self.advance();
            let segment = self.expect_ident("Expected identifier after `.`")?;
            name.push('.');
            name.push_str(&segment.node);
        }
        Ok(name)
    }

    // ========================================================================
    // Attributes and modifiers
    // ========================================================================

    /// Parse zero or more `[...]` attribute sections.
    fn attribute_sections(&mut self) -> Result<Vec<Spanned<Attribute>>, CompileError> {
        let mut attributes = Vec::new();

        while self.check_punct(PunctuationId::LBracket) {
            self.advance();

            let target = if self.peek_next().kind.is_punctuation(PunctuationId::Colon) {
                self.peek().ident_text().map(str::to_string)
            } else {
                None
            };
            if target.is_some() {
                self.advance();
                self.advance();
            }

            loop {
                attributes.push(self.attribute(target.clone())?);
                if !self.match_punct(PunctuationId::Comma) || self.check_punct(PunctuationId::RBracket) {
                    break;
                }
            }

            self.expect_punct(PunctuationId::RBracket, "Expected `]` to close attribute section")?;
        }

        Ok(attributes)
    }

    /// One attribute: optional `global::`, dotted name, optional generic arguments and argument list.
    fn attribute(&mut self, target: Option<Ident>) -> Result<Spanned<Attribute>, CompileError> {
        let start = self.peek().span;

        if self.check_keyword(KeywordId::Global) && self.peek_next().kind.is_punctuation(PunctuationId::ColonColon) {
            self.advance();
            self.advance();
        }
        let name = self.qualified_name("Expected attribute name")?;
        if self.check_punct(PunctuationId::Lt) {
            self.skip_balanced()?;
        }
        if self.check_punct(PunctuationId::LParen) {
            self.skip_balanced()?;
        }

        let span = start.merge(self.previous().span);
        Ok(Spanned::new(Attribute { name, target }, span))
    }

    /// Parse declaration modifiers in source order.
    ///
    /// Contextual modifiers (`partial`, `file`, `required`) only count when another word follows; otherwise they
    /// are identifiers in a statement we will skip.
    fn modifiers(&mut self) -> Vec<Spanned<Modifier>> {
        let mut modifiers = Vec::new();

        while let Some(id) = self.peek().keyword_id() {
            if !keywords::is_modifier(id) {
                break;
            }
            if keywords::is_contextual(id) {
                let next = &self.peek_next().kind;
                if !matches!(next, TokenKind::Keyword(_) | TokenKind::Ident(_)) {
                    break;
                }
            }
            let span = self.advance().span;
            modifiers.push(Spanned::new(Modifier(id), span));
        }

        modifiers
    }

    // ========================================================================
    // Type declarations
    // ========================================================================

    /// Consume a type-kind keyword (`record class` counts as one) if one starts here.
    fn type_kind(&mut self) -> Option<TypeKind> {
        let kind = match self.peek().keyword_id()? {
            KeywordId::Class => TypeKind::Class,
            KeywordId::Struct => TypeKind::Struct,
            KeywordId::Interface => TypeKind::Interface,
            KeywordId::Enum => TypeKind::Enum,
            KeywordId::Record => match self.peek_next().keyword_id() {
                Some(KeywordId::Class) => {
                    self.advance();
                    TypeKind::RecordClass
                }
                Some(KeywordId::Struct) => {
                    self.advance();
                    TypeKind::RecordStruct
                }
                _ if self.peek_next().ident_text().is_some() => TypeKind::Record,
                _ => return None,
            },
            _ => return None,
        };
        self.advance();
        Some(kind)
    }

    /// Parse the rest of a type declaration after its kind keyword.
    fn type_decl(
        &mut self,
        attributes: Vec<Spanned<Attribute>>,
        modifiers: Vec<Spanned<Modifier>>,
        kind: TypeKind,
    ) -> Result<TypeDecl, CompileError> {
        let name = self.expect_ident(&format!("Expected {} name", kind))?;

        let type_params = if self.check_punct(PunctuationId::Lt) {
            Some(self.type_parameter_list()?)
        } else {
            None
        };

        let primary_params = if kind.has_primary_constructor() && self.check_punct(PunctuationId::LParen) {
            Some(self.param_list()?)
        } else {
            None
        };

        self.skip_header_tail()?;

        let members = if self.match_punct(PunctuationId::Semicolon) {
            Vec::new()
        } else {
            self.expect_punct(PunctuationId::LBrace, "Expected `{` or `;` after type declaration header")?;
            let members = if kind == TypeKind::Enum {
                self.skip_until_close();
                Vec::new()
            } else {
                self.members(&name.node)
            };
            self.expect_punct(
                PunctuationId::RBrace,
                &format!("Expected `}}` to close `{}`", name.node),
            )?;
            self.match_punct(PunctuationId::Semicolon);
            members
        };

        Ok(TypeDecl {
            attributes,
            modifiers,
            kind,
            name,
            type_params,
            primary_params,
            members,
        })
    }

    /// `<T, in U, [Attr] V>`; the text is kept verbatim from `<` to `>`.
    fn type_parameter_list(&mut self) -> Result<TypeParameterList, CompileError> {
        let open = self.advance().span; // `<`
        let mut names = Vec::new();

        loop {
            self.attribute_sections()?;
            if !self.match_keyword(KeywordId::In) {
                self.match_keyword(KeywordId::Out);
            }
            names.push(self.expect_ident("Expected type parameter name")?.node);

            if self.match_punct(PunctuationId::Comma) {
                continue;
            }
            let close = self.expect_punct(PunctuationId::Gt, "Expected `,` or `>` in type parameter list")?;
            return Ok(TypeParameterList {
                text: self.text(open.merge(close)).to_string(),
                names,
            });
        }
    }

    /// Parse a type body up to (not including) its closing `}`.
    fn members(&mut self, type_name: &str) -> Vec<Spanned<Member>> {
        let mut members = Vec::new();

        while !self.is_at_end() && !self.check_punct(PunctuationId::RBrace) {
            let start = self.peek().span;
            match self.member(type_name) {
                Ok(Some(member)) => {
                    let span = start.merge(self.previous().span);
                    members.push(Spanned::new(member, span));
                }
                Ok(None) => {}
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        members
    }

    /// Parse one member: a nested type, a constructor, or something skipped.
    fn member(&mut self, type_name: &str) -> Result<Option<Member>, CompileError> {
        let attributes = self.attribute_sections()?;
        let modifiers = self.modifiers();

        if let Some(kind) = self.type_kind() {
            let decl = self.type_decl(attributes, modifiers, kind)?;
            return Ok(Some(Member::Type(decl)));
        }

        let is_constructor = self.peek().ident_text() == Some(type_name)
            && self.peek_next().kind.is_punctuation(PunctuationId::LParen);
        if is_constructor {
            self.advance();
            let params = self.param_list()?;
            // Initializer (`: this(...)`) and body or `=> ...;`
            self.skip_member();
            return Ok(Some(Member::Constructor(ConstructorDecl { modifiers, params })));
        }

        self.skip_member();
        Ok(None)
    }
}
