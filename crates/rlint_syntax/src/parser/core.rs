/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type and its top-level `parse()` entrypoint, plus the nesting context
/// that decides whether a newline ends a statement.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// What the parser is currently inside of.
///
/// Newlines end statements at the top level and inside `{ }`; inside `( )`, `[ ]` and `[[ ]]` they are
/// whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    TopLevel,
    Braces,
    Parens,
    /// An argument or parameter list, closed by the given punctuation.
    Arguments(PunctuationId),
}

impl Context {
    fn closer(self) -> Option<PunctuationId> {
        match self {
            Context::TopLevel => None,
            Context::Braces => Some(PunctuationId::RBrace),
            Context::Parens => Some(PunctuationId::RParen),
            Context::Arguments(closer) => Some(closer),
        }
    }

    fn newlines_significant(self) -> bool {
        matches!(self, Context::TopLevel | Context::Braces)
    }
}

/// Binding power of an infix operator.
///
/// The loop in `expr_bp` keeps consuming operators whose `left` power is at least the current minimum, and
/// parses the right operand with `right` as the new minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BindingPower {
    left: u8,
    right: u8,
}

impl BindingPower {
    const fn left_assoc(precedence: u8) -> Self {
        Self {
            left: precedence,
            right: precedence + 1,
        }
    }

    const fn right_assoc(precedence: u8) -> Self {
        Self {
            left: precedence + 1,
            right: precedence,
        }
    }

    fn of(id: OperatorId) -> Self {
        let info = operators::info_for(id);
        match info.associativity {
            Associativity::Right => Self::right_assoc(info.precedence),
            Associativity::Left | Associativity::None => Self::left_assoc(info.precedence),
        }
    }
}

/// Postfix `(`, `[` and `[[` bind tighter than every operator in the registry.
const POSTFIX_PRECEDENCE: u8 = 180;

/// Remaining stack below which a nested expression continues on a fresh heap segment.
const STACK_RED_ZONE: usize = 64 * 1024;
const STACK_SEGMENT: usize = 1024 * 1024;

/// Parser state.
///
/// ## Notes
/// - Comment tokens are dropped up front; the grammar never sees them.
/// - The token slice must end with a [`TokenKind::End`] token; [`parse_with_limit`] guarantees this.
/// - `depth` counts nested expressions; passing `max_depth` is the only way parsing fails.
struct Parser<'a> {
    tokens: Vec<&'a Token>,
    pos: usize,
    contexts: Vec<Context>,
    depth: usize,
    max_depth: usize,
    errors: Vec<SyntaxError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `tokens`: Token stream produced by `rlint_syntax::lexer`, ending with an `End` token.
    /// - `max_depth`: Maximum expression nesting before the pass is abandoned.
    fn new(tokens: &'a [Token], max_depth: usize) -> Self {
        Self {
            tokens: tokens.iter().filter(|t| !t.kind.is_trivia()).collect(),
            pos: 0,
            contexts: vec![Context::TopLevel],
            depth: 0,
            max_depth,
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream into a [`SyntaxTree`].
    ///
    /// ## Errors
    /// Returns [`FatalError::NestingTooDeep`] if expressions nest deeper than the configured limit. Every
    /// other problem is reported through `SyntaxTree::errors`.
    fn parse(mut self) -> Result<SyntaxTree, FatalError> {
        let statements = self.statements()?;
        let root = Node::new(NodeKind::Root, Token::root(), statements);
        tracing::debug!(errors = self.errors.len(), "parsed program");
        Ok(SyntaxTree {
            root,
            errors: self.errors,
        })
    }
}
