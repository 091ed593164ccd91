// Parser core types and entrypoint.
//
// This chunk defines the `Parser` type and its top-level `parse()` entrypoint. It is `include!`'d into
// `crate::parser` to keep all parser methods in a single module while avoiding a single “god file”.

/// Parser state.
///
/// ## Notes
/// - The parser is single-pass and recovers from errors by skipping to the next member boundary, so one file can
///   report several problems at once.
/// - `source` is kept so type and type-parameter text can be copied verbatim.
pub struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    errors: Vec<CompileError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `source`: Source text the tokens index into.
    /// - `tokens`: Token stream produced by `autoclosed_syntax::lexer`; must end with `Eof`.
    pub fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`CompilationUnit`].
    ///
    /// ## Errors
    /// Returns a list of [`CompileError`]s if parsing fails. The parser attempts
    /// to recover and continue after an error to report multiple issues in one pass.
    pub fn parse(mut self) -> Result<CompilationUnit, Vec<CompileError>> {
        if self.tokens.is_empty() {
            return Ok(CompilationUnit::default());
        }

        let items = self.items(false);

        if self.errors.is_empty() {
            Ok(CompilationUnit { items })
        } else {
            Err(self.errors)
        }
    }

    /// Parse namespace-level items until end of input, or until a closing `}` when `in_block` is set.
    ///
    /// The closing brace itself is left for the caller.
    fn items(&mut self, in_block: bool) -> Vec<Spanned<Item>> {
        let mut items = Vec::new();

        loop {
            if self.is_at_end() {
                if in_block {
                    let span = self.peek().span;
                    self.errors.push(CompileError::syntax("Expected `}` before end of file", span));
                }
                break;
            }
            if self.check_punct(PunctuationId::RBrace) {
                if in_block {
                    break;
                }
                let span = self.advance().span;
                self.errors.push(CompileError::syntax("Unexpected `}`", span));
                continue;
            }

            match self.item() {
                Ok(Some(item)) => items.push(item),
                Ok(None) => {}
                Err(e) => {
                    self.errors.push(e);
                    self.synchronize();
                }
            }
        }

        items
    }
}
