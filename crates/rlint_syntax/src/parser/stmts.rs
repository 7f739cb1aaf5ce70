/// Statement and compound-expression parsing.
///
/// R has no statements in the grammatical sense: a program or a `{ }` block is a sequence of expressions
/// separated by newlines or `;`. This chunk handles those sequences plus the keyword-introduced constructs
/// (`if`, `for`, `while`, `repeat`, `function`).
///
/// ## Notes
/// - `else` binding: inside `{ }` or `( )` the parser looks past newlines for an `else`; at the top level it
///   must appear on the line where the then-branch ends.
impl<'a> Parser<'a> {
    // ========================================================================
    // Sequences
    // ========================================================================

    /// Parse expressions until `End` or a closer that an enclosing construct is waiting for.
    fn statements(&mut self) -> Result<Vec<Node>, FatalError> {
        let mut statements = Vec::new();
        loop {
            self.skip_separators();
            if self.is_expected_terminator(self.peek()) {
                break;
            }
            statements.push(self.expression()?);
            if !self.at_statement_end() {
                statements.push(self.recover("end of statement"));
            }
        }
        Ok(statements)
    }

    /// `{ stmt... }`
    fn block(&mut self) -> Result<Node, FatalError> {
        let open = self.advance();
        self.with_context(Context::Braces, |p| -> Result<Node, FatalError> {
            let statements = p.statements()?;
            Ok(p.finish(NodeKind::Block, open, statements, PunctuationId::RBrace))
        })
    }

    /// `( expr )`
    fn group(&mut self) -> Result<Node, FatalError> {
        let open = self.advance();
        self.with_context(Context::Parens, |p| -> Result<Node, FatalError> {
            let inner = p.expression()?;
            Ok(p.finish(NodeKind::Group, open, vec![inner], PunctuationId::RParen))
        })
    }

    // ========================================================================
    // Control flow
    // ========================================================================

    /// Consume `(` after a keyword.
    ///
    /// Returns an error node for the whole construct when the `(` is missing.
    fn open_paren_after(&mut self, keyword: &'a Token) -> Option<Node> {
        self.skip_newlines();
        if self.check_punct(PunctuationId::LParen) {
            self.advance();
            return None;
        }
        let message = self.unexpected(&format!("'(' after '{}'", keyword.contents));
        self.record(message, keyword.range, keyword.span);
        Some(self.recover_from(keyword))
    }

    /// Close the parenthesized header of `if`/`for`/`while`.
    ///
    /// `header` holds the nodes parsed between the parentheses. Junk before `)` and a missing `)` both turn the
    /// last header node into an error node so the construct keeps its shape.
    fn close_header(&mut self, mut header: Vec<Node>) -> Vec<Node> {
        let mut junk = Vec::new();
        let closed = self.close(PunctuationId::RParen, &mut junk).is_some();
        if closed && junk.is_empty() {
            return header;
        }
        let Some(last) = header.pop() else {
            return header;
        };
        let mut children = vec![last];
        children.append(&mut junk);
        let wrapped = if closed {
            let token = Token::synthetic(TokenKind::Missing, children[0].token());
            Node::new(NodeKind::Error, token, children)
        } else {
            let message = self.unexpected("')'");
            self.error_here(message, children)
        };
        header.push(wrapped);
        header
    }

    /// Body of a loop, function or conditional branch; may start on the next line.
    fn body(&mut self) -> Result<Node, FatalError> {
        self.skip_newlines();
        self.expression()
    }

    /// `if (cond) then [else otherwise]`
    fn if_expr(&mut self) -> Result<Node, FatalError> {
        let keyword = self.advance();
        if let Some(error) = self.open_paren_after(keyword) {
            return Ok(error);
        }
        let condition = self.with_context(Context::Parens, |p| -> Result<Vec<Node>, FatalError> {
            let condition = p.expression()?;
            Ok(p.close_header(vec![condition]))
        })?;
        let mut children = condition;
        children.push(self.body()?);
        if self.at_else() {
            self.advance();
            children.push(self.body()?);
        }
        Ok(Node::new(NodeKind::If, keyword.clone(), children))
    }

    /// Return `true` if an `else` belonging to the current `if` follows, moving up to it.
    fn at_else(&mut self) -> bool {
        if self.check_keyword(KeywordId::Else) {
            return true;
        }
        if self.context() == Context::TopLevel {
            return false;
        }
        let mut index = self.pos;
        while self.tokens[index].kind == TokenKind::Newline {
            index += 1;
        }
        if self.tokens[index].is_keyword(KeywordId::Else) {
            self.pos = index;
            return true;
        }
        false
    }

    /// `for (var in seq) body`
    fn for_loop(&mut self) -> Result<Node, FatalError> {
        let keyword = self.advance();
        if let Some(error) = self.open_paren_after(keyword) {
            return Ok(error);
        }
        let mut children = self.with_context(Context::Parens, |p| -> Result<Vec<Node>, FatalError> {
            let variable = match p.peek().kind {
                TokenKind::Identifier => Node::leaf(p.advance().clone()),
                _ => p.recover("a loop variable"),
            };
            let sequence = if p.check_keyword(KeywordId::In) {
                p.advance();
                p.expression()?
            } else {
                let message = p.unexpected("'in'");
                p.missing(message)
            };
            Ok(p.close_header(vec![variable, sequence]))
        })?;
        children.push(self.body()?);
        Ok(Node::new(NodeKind::For, keyword.clone(), children))
    }

    /// `while (cond) body`
    fn while_loop(&mut self) -> Result<Node, FatalError> {
        let keyword = self.advance();
        if let Some(error) = self.open_paren_after(keyword) {
            return Ok(error);
        }
        let mut children = self.with_context(Context::Parens, |p| -> Result<Vec<Node>, FatalError> {
            let condition = p.expression()?;
            Ok(p.close_header(vec![condition]))
        })?;
        children.push(self.body()?);
        Ok(Node::new(NodeKind::While, keyword.clone(), children))
    }

    /// `repeat body`
    fn repeat_loop(&mut self) -> Result<Node, FatalError> {
        let keyword = self.advance();
        let body = self.body()?;
        Ok(Node::new(NodeKind::Repeat, keyword.clone(), vec![body]))
    }

    /// `function(formals) body`
    fn function(&mut self) -> Result<Node, FatalError> {
        let keyword = self.advance();
        if let Some(error) = self.open_paren_after(keyword) {
            return Ok(error);
        }
        let closer = PunctuationId::RParen;
        let (mut children, closed) = self.with_context(Context::Arguments(closer), |p| -> Result<_, FatalError> {
            let mut formals = p.formals()?;
            let closed = p.close(closer, &mut formals).is_some();
            Ok((formals, closed))
        })?;
        if !closed {
            let message = self.unexpected("')'");
            let incomplete = Node::new(NodeKind::Function, keyword.clone(), children);
            return Ok(self.error_here(message, vec![incomplete]));
        }
        children.push(self.body()?);
        Ok(Node::new(NodeKind::Function, keyword.clone(), children))
    }
}
