/// Default limit on expression nesting, see [`parse_with_limit`].
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse a token stream into a [`SyntaxTree`].
///
/// This is the main public entrypoint for parsing; it uses [`DEFAULT_MAX_DEPTH`].
///
/// ## Parameters
/// - `tokens`: Token stream produced by `rlint_syntax::lexer`.
///
/// ## Errors
/// Returns [`FatalError::NestingTooDeep`] when the input nests too deeply. Syntax errors are not `Err`:
/// they are listed in [`SyntaxTree::errors`] and appear as error nodes in the tree.
pub fn parse(tokens: &[Token]) -> Result<SyntaxTree, FatalError> {
    parse_with_limit(tokens, DEFAULT_MAX_DEPTH)
}

/// Parse a token stream, giving up once expressions nest deeper than `max_depth`.
///
/// A missing trailing `End` token is added, so hand-built token streams are accepted.
#[tracing::instrument(skip_all, fields(token_count = tokens.len(), max_depth = max_depth))]
pub fn parse_with_limit(tokens: &[Token], max_depth: usize) -> Result<SyntaxTree, FatalError> {
    if tokens.last().is_some_and(|t| t.kind == TokenKind::End) {
        return Parser::new(tokens, max_depth).parse();
    }
    let end = match tokens.last() {
        Some(last) => Token::new(
            TokenKind::End,
            "",
            Span::new(last.span.end, last.span.end),
            Range::empty(last.range.end),
        ),
        None => Token::new(TokenKind::End, "", Span::default(), Range::empty(Position::START)),
    };
    let mut owned = tokens.to_vec();
    owned.push(end);
    Parser::new(&owned, max_depth).parse()
}
