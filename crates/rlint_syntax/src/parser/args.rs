/// Argument and parameter lists.
///
/// Both lists are comma-separated and parsed inside a `Context::Arguments`, so newlines are whitespace and
/// a `,` is a boundary for error recovery.
///
/// ## Notes
/// - An empty argument slot (`x[, 1]`, `f(a, )`) is a valid argument and becomes an `EmptyArgument` node.
/// - `name = value` becomes an `Argument` node keyed by the `=`.
impl<'a> Parser<'a> {
    /// Arguments of a call or subscript, up to (not including) `closer`.
    fn arguments(&mut self, closer: PunctuationId) -> Result<Vec<Node>, FatalError> {
        self.list(closer, Slots::AllowEmpty, Self::argument)
    }

    /// Formal parameters of a `function`, up to (not including) `)`.
    fn formals(&mut self) -> Result<Vec<Node>, FatalError> {
        self.list(PunctuationId::RParen, Slots::RequireItem, Self::formal)
    }

    /// Comma-separated slots. `item` parses a non-empty slot.
    fn list(
        &mut self,
        closer: PunctuationId,
        slots: Slots,
        item: fn(&mut Self) -> Result<Node, FatalError>,
    ) -> Result<Vec<Node>, FatalError> {
        let mut items = Vec::new();
        if self.check_punct(closer) {
            return Ok(items);
        }

        loop {
            let token = self.peek();
            if token.is_punctuation(PunctuationId::Comma) || token.is_punctuation(closer) {
                match slots {
                    Slots::AllowEmpty => items.push(empty_argument(token)),
                    Slots::RequireItem => {
                        let message = self.unexpected("a parameter name");
                        items.push(self.missing(message));
                    }
                }
            } else if self.is_expected_terminator(token) {
                return Ok(items);
            } else {
                items.push(item(self)?);
            }

            loop {
                let token = self.peek();
                if token.is_punctuation(PunctuationId::Comma) {
                    self.advance();
                    break;
                }
                if self.is_expected_terminator(token) {
                    return Ok(items);
                }
                let expected = format!("',' or '{}'", punctuation::as_str(closer));
                items.push(self.recover(&expected));
            }
        }
    }

    /// `value` or `name = value`; the value may be empty.
    fn argument(&mut self) -> Result<Node, FatalError> {
        let token = self.peek();
        let nameable = matches!(token.kind, TokenKind::Identifier | TokenKind::String)
            || token.is_keyword(KeywordId::Null);
        if !(nameable && self.next_is_equals()) {
            return self.expression();
        }
        let name = Node::leaf(self.advance().clone());
        let equals = self.advance();
        let value = self.default_value()?;
        Ok(Node::new(NodeKind::Argument, equals.clone(), vec![name, value]))
    }

    /// `name` or `name = default`.
    fn formal(&mut self) -> Result<Node, FatalError> {
        if self.peek().kind != TokenKind::Identifier {
            return Ok(self.recover("a parameter name"));
        }
        let name = Node::leaf(self.advance().clone());
        if !self.check_op(OperatorId::Equals) {
            return Ok(name);
        }
        let equals = self.advance();
        let value = self.default_value()?;
        Ok(Node::new(NodeKind::Argument, equals.clone(), vec![name, value]))
    }

    /// Right-hand side of `name =` in a list; empty when the slot ends right away.
    fn default_value(&mut self) -> Result<Node, FatalError> {
        let token = self.peek();
        if self.is_expected_terminator(token) {
            return Ok(empty_argument(token));
        }
        self.expression()
    }
}

/// Zero-length placeholder for an empty slot, placed where the slot would start.
fn empty_argument(at: &Token) -> Node {
    Node::new(NodeKind::EmptyArgument, Token::synthetic(TokenKind::EmptyArgument, at), Vec::new())
}

/// How a list treats a slot with nothing in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slots {
    /// Call and subscript arguments: an empty slot is an `EmptyArgument`.
    AllowEmpty,
    /// Function parameters: an empty slot is a syntax error.
    RequireItem,
}
