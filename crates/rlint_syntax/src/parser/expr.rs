/// Expression parsing methods.
///
/// This chunk implements the expression grammar as a Pratt parser driven by the operator registry:
/// precedence, associativity and prefix binding all come from `rlint_core::lang::operators`.
///
/// ## Notes
/// - Comparison operators are non-associative; a chain such as `a < b < c` becomes an error node keyed by
///   the second operator.
/// - The right operand of `$`, `@`, `::` and `:::` is a name or string, never a full expression.
/// - Newlines after any operator are skipped.
impl<'a> Parser<'a> {
    // ========================================================================
    // Expressions
    // ========================================================================

    fn expression(&mut self) -> Result<Node, FatalError> {
        self.expr_bp(0)
    }

    /// Parse an expression whose operators all bind at least as tightly as `min`.
    ///
    /// Every recursive path through the grammar passes through here: nesting is counted and the stack grown
    /// at this one point.
    fn expr_bp(&mut self, min: u8) -> Result<Node, FatalError> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || -> Result<Node, FatalError> {
            self.enter()?;
            let node = self.infix_loop(min)?;
            self.leave();
            Ok(node)
        })
    }

    /// Operator loop of [`Parser::expr_bp`].
    fn infix_loop(&mut self, min: u8) -> Result<Node, FatalError> {
        let mut lhs = self.prefix()?;
        // Precedence of the non-associative operator that built `lhs`, if any.
        let mut chained: Option<u8> = None;

        loop {
            let token = self.peek();

            if let Some(id) = token.punctuation_id() {
                let (kind, closer) = match id {
                    PunctuationId::LParen => (NodeKind::Call, PunctuationId::RParen),
                    PunctuationId::LBracket => (NodeKind::Index, PunctuationId::RBracket),
                    PunctuationId::LDoubleBracket => (NodeKind::DoubleIndex, PunctuationId::RDoubleBracket),
                    _ => break,
                };
                if POSTFIX_PRECEDENCE < min {
                    break;
                }
                lhs = self.postfix(kind, lhs, closer)?;
                chained = None;
                continue;
            }

            let Some(id) = token.operator_id() else {
                break;
            };
            let info = operators::info_for(id);
            if !info.is_infix() {
                break;
            }
            let power = BindingPower::of(id);
            if power.left < min {
                break;
            }

            let op = self.advance();
            self.skip_newlines();

            if info.takes_name_operand() {
                let name = self.name_operand();
                lhs = Node::new(NodeKind::Binary, op.clone(), vec![lhs, name]);
                chained = None;
                continue;
            }

            let rhs = self.expr_bp(power.right)?;
            if info.associativity == Associativity::None && chained == Some(info.precedence) {
                self.record("comparison operators cannot be chained".to_string(), op.range, op.span);
                lhs = Node::new(NodeKind::Error, op.clone(), vec![lhs, rhs]);
            } else {
                lhs = Node::new(NodeKind::Binary, op.clone(), vec![lhs, rhs]);
            }
            chained = (info.associativity == Associativity::None).then_some(info.precedence);
        }

        Ok(lhs)
    }

    /// A prefix operator applied to its operand, or a primary expression.
    fn prefix(&mut self) -> Result<Node, FatalError> {
        let token = self.peek();
        let prefix = token
            .operator_id()
            .and_then(|id| operators::info_for(id).prefix_precedence);
        let Some(precedence) = prefix else {
            return self.primary();
        };
        let op = self.advance();
        self.skip_newlines();
        let operand = self.expr_bp(precedence)?;
        Ok(Node::new(NodeKind::Unary, op.clone(), vec![operand]))
    }

    /// `callee(args)`, `object[args]` or `object[[args]]`.
    fn postfix(&mut self, kind: NodeKind, callee: Node, closer: PunctuationId) -> Result<Node, FatalError> {
        let open = self.advance();
        self.with_context(Context::Arguments(closer), |p| -> Result<Node, FatalError> {
            let mut children = vec![callee];
            children.extend(p.arguments(closer)?);
            Ok(p.finish(kind, open, children, closer))
        })
    }

    /// Right operand of `$`, `@`, `::` and `:::`.
    fn name_operand(&mut self) -> Node {
        match self.peek().kind {
            TokenKind::Identifier | TokenKind::String => Node::leaf(self.advance().clone()),
            _ => self.recover("a name"),
        }
    }

    // ========================================================================
    // Primary expressions
    // ========================================================================

    fn primary(&mut self) -> Result<Node, FatalError> {
        let token = self.peek();
        match token.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::String => Ok(Node::leaf(self.advance().clone())),
            TokenKind::Keyword(id) => match id {
                KeywordId::If => self.if_expr(),
                KeywordId::For => self.for_loop(),
                KeywordId::While => self.while_loop(),
                KeywordId::Repeat => self.repeat_loop(),
                KeywordId::Function => self.function(),
                KeywordId::Else | KeywordId::In => Ok(self.recover("an expression")),
                _ => Ok(Node::leaf(self.advance().clone())),
            },
            TokenKind::Punctuation(PunctuationId::LParen) => self.group(),
            TokenKind::Punctuation(PunctuationId::LBrace) => self.block(),
            _ => Ok(self.recover("an expression")),
        }
    }
}
