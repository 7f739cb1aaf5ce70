/// Token-stream helpers and error recovery.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens with newline significance applied (`peek`, `advance`)
/// - Matching keywords, operators, and punctuation
/// - Nesting bookkeeping (`enter`/`leave`, the context stack)
/// - Error recovery (`recover`, `synchronize`, `missing`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    fn context(&self) -> Context {
        self.contexts.last().copied().unwrap_or(Context::TopLevel)
    }

    fn newlines_significant(&self) -> bool {
        self.context().newlines_significant()
    }

    /// Index of the current token, skipping newlines where they are whitespace.
    fn current_index(&self) -> usize {
        let mut index = self.pos;
        if !self.newlines_significant() {
            while self.tokens[index].kind == TokenKind::Newline {
                index += 1;
            }
        }
        index
    }

    /// Return the current token without consuming it.
    fn peek(&self) -> &'a Token {
        self.tokens[self.current_index()]
    }

    /// Consume and return the current token. The `End` token is never consumed.
    fn advance(&mut self) -> &'a Token {
        self.pos = self.current_index();
        let token = self.tokens[self.pos];
        if token.kind != TokenKind::End {
            self.pos += 1;
        }
        token
    }

    /// Skip newlines regardless of context (after operators, `else`, loop headers).
    fn skip_newlines(&mut self) {
        while self.tokens[self.pos].kind == TokenKind::Newline {
            self.pos += 1;
        }
    }

    /// Skip statement separators: newlines and `;`.
    fn skip_separators(&mut self) {
        loop {
            let token = self.tokens[self.pos];
            if token.kind == TokenKind::Newline || token.is_punctuation(PunctuationId::Semicolon) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn check_keyword(&self, id: KeywordId) -> bool {
        self.peek().is_keyword(id)
    }

    fn check_punct(&self, id: PunctuationId) -> bool {
        self.peek().is_punctuation(id)
    }

    fn check_op(&self, id: OperatorId) -> bool {
        self.peek().is_operator(id)
    }

    /// Return `true` if the token after the current one is `=`, looking past whitespace newlines.
    fn next_is_equals(&self) -> bool {
        let mut index = self.current_index();
        if self.tokens[index].kind == TokenKind::End {
            return false;
        }
        index += 1;
        if !self.newlines_significant() {
            while self.tokens[index].kind == TokenKind::Newline {
                index += 1;
            }
        }
        self.tokens[index].is_operator(OperatorId::Equals)
    }

    fn with_context<T>(&mut self, context: Context, f: impl FnOnce(&mut Self) -> T) -> T {
        self.contexts.push(context);
        let result = f(self);
        self.contexts.pop();
        result
    }

    /// Track one more level of expression nesting.
    ///
    /// ## Errors
    /// Returns [`FatalError::NestingTooDeep`] once the configured limit is passed.
    fn enter(&mut self) -> Result<(), FatalError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(FatalError::NestingTooDeep {
                limit: self.max_depth,
                position: self.peek().range.start,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // ========================================================================
    // Statement boundaries
    // ========================================================================

    /// Return `true` for tokens that an enclosing construct is waiting for.
    ///
    /// These are never swallowed by recovery: `End`, the closer of any open bracket, and `,` directly
    /// inside an argument list.
    fn is_expected_terminator(&self, token: &Token) -> bool {
        match token.kind {
            TokenKind::End => true,
            TokenKind::Punctuation(PunctuationId::Comma) => matches!(self.context(), Context::Arguments(_)),
            TokenKind::Punctuation(id) => self.contexts.iter().any(|c| c.closer() == Some(id)),
            _ => false,
        }
    }

    fn at_statement_end(&self) -> bool {
        let token = self.peek();
        token.kind == TokenKind::Newline
            || token.is_punctuation(PunctuationId::Semicolon)
            || self.is_expected_terminator(token)
    }

    // ========================================================================
    // Error recovery
    // ========================================================================

    fn record(&mut self, message: String, range: Range, span: Span) {
        tracing::debug!(%range, %message, "syntax error");
        self.errors.push(SyntaxError::new(message, range, span));
    }

    /// `expected X, found Y` for the current token, or the lexical reason for an invalid token.
    fn unexpected(&self, expected: &str) -> String {
        let token = self.peek();
        match token.kind {
            TokenKind::Invalid(reason) => reason.to_string(),
            _ => format!("expected {expected}, found {}", describe(token)),
        }
    }

    /// Report the current token as unexpected and resynchronize.
    ///
    /// The offending token is consumed and becomes the error node's token; tokens skipped while looking for
    /// the next boundary become its leaf children. If the offending token is one an enclosing construct is
    /// waiting for, nothing is consumed and a zero-length error node is returned instead.
    fn recover(&mut self, expected: &str) -> Node {
        let message = self.unexpected(expected);
        if self.is_expected_terminator(self.peek()) {
            return self.missing(message);
        }
        let token = self.advance();
        self.record(message, token.range, token.span);
        self.recover_from(token)
    }

    /// Build an error node keyed by an already-consumed `token`, skipping to the next boundary.
    fn recover_from(&mut self, token: &'a Token) -> Node {
        let mut skipped = Vec::new();
        let opened = token
            .punctuation_id()
            .is_some_and(|id| punctuation::category(id) == PunctuationCategory::Open);
        self.synchronize(usize::from(opened), &mut skipped);
        Node::new(NodeKind::Error, token.clone(), skipped)
    }

    /// Skip tokens until a statement boundary at the starting nesting depth.
    ///
    /// Stops before a significant newline, `;`, `,` in an argument list, an unmatched closing bracket, or
    /// `End`. Brackets opened while skipping are skipped as a whole.
    fn synchronize(&mut self, mut depth: usize, skipped: &mut Vec<Node>) {
        loop {
            let token = self.peek();
            match token.kind {
                TokenKind::End => return,
                TokenKind::Newline if depth == 0 => return,
                TokenKind::Newline => {
                    self.pos += 1;
                    continue;
                }
                TokenKind::Punctuation(id) => match punctuation::category(id) {
                    PunctuationCategory::Open => depth += 1,
                    PunctuationCategory::Close if depth == 0 => return,
                    PunctuationCategory::Close => depth -= 1,
                    PunctuationCategory::Separator if depth == 0 => {
                        if id == PunctuationId::Semicolon || matches!(self.context(), Context::Arguments(_)) {
                            return;
                        }
                    }
                    PunctuationCategory::Separator => {}
                },
                TokenKind::Invalid(reason) => self.record(reason.to_string(), token.range, token.span),
                _ => {}
            }
            skipped.push(Node::leaf(self.advance().clone()));
        }
    }

    /// Record `message` and return a zero-length error node at the current token.
    fn missing(&mut self, message: String) -> Node {
        self.error_here(message, Vec::new())
    }

    /// Record `message` and return an error node at the current token wrapping `children`.
    fn error_here(&mut self, message: String, children: Vec<Node>) -> Node {
        let token = Token::synthetic(TokenKind::Missing, self.peek());
        self.record(message, token.range, token.span);
        Node::new(NodeKind::Error, token, children)
    }

    /// Consume junk up to `closer`, then the closer itself.
    ///
    /// Junk is turned into error nodes appended to `children`. Returns `None` (without recording anything)
    /// when the closer is missing.
    fn close(&mut self, closer: PunctuationId, children: &mut Vec<Node>) -> Option<&'a Token> {
        let expected = format!("'{}'", punctuation::as_str(closer));
        while !self.check_punct(closer) && !self.is_expected_terminator(self.peek()) {
            children.push(self.recover(&expected));
        }
        if self.check_punct(closer) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Finish a bracketed construct opened by `token`.
    ///
    /// If the closer is missing the incomplete node is wrapped in an error node at the current token.
    fn finish(&mut self, kind: NodeKind, token: &'a Token, mut children: Vec<Node>, closer: PunctuationId) -> Node {
        match self.close(closer, &mut children) {
            Some(closing) => Node::with_closing(kind, token.clone(), children, Some(closing.clone())),
            None => {
                let message = self.unexpected(&format!("'{}'", punctuation::as_str(closer)));
                let incomplete = Node::new(kind, token.clone(), children);
                self.error_here(message, vec![incomplete])
            }
        }
    }
}

/// Human-readable description of a token for error messages.
fn describe(token: &Token) -> String {
    match token.kind {
        TokenKind::End => "end of input".to_string(),
        TokenKind::Newline => "newline".to_string(),
        _ => format!("'{}'", token.contents),
    }
}
