/// Parse a token stream into a [`CompilationUnit`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source`: The text the tokens were produced from (used to keep type text verbatim).
/// - `tokens`: Token stream produced by `autoclosed_syntax::lexer`.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` if parsing fails.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(source: &str, tokens: &[Token]) -> Result<CompilationUnit, Vec<CompileError>> {
    Parser::new(source, tokens).parse()
}
