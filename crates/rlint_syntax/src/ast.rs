//! Syntax tree for R source.
//!
//! Every node pairs a defining [`Token`] with its ordered children and caches the source range it covers.
//! Nodes are built bottom-up by the parser and are immutable afterwards.
//!
//! ## Notes
//! - A node's range is the union of its own token, its closing delimiter (if any) and all of its children,
//!   so a parent's range always contains every descendant's range.
//! - Nodes do not store a parent pointer. Traversal hands out [`NodeRef`] cursors that borrow the parent, which
//!   gives checkers read-only upward context without any shared ownership.
//! - Walking and dropping are iterative, so very deep trees (long operator chains) cannot overflow the stack.

use std::fmt;

use crate::diagnostics::SyntaxError;
use crate::lexer::Token;

// ============================================================================
// Locations
// ============================================================================

/// Source location span (byte offsets, end-exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start, span.len()).into()
    }
}

/// A 1-based row/column pair. Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { row: 1, column: 1 };

    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// A start/end position pair, end-exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// A zero-length range at `at`.
    pub fn empty(at: Position) -> Self {
        Self { start: at, end: at }
    }

    pub fn merge(self, other: Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn contains(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ============================================================================
// Nodes
// ============================================================================

/// Syntactic role of a node.
///
/// The defining token already says *what* a node is keyed by (`(`, `==`, `if`); the kind disambiguates cases
/// that share a token, such as a call `f(x)` and a group `(x)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The program; its token is synthetic.
    Root,
    /// Identifier, literal, `break` or `next`.
    Leaf,
    Unary,
    Binary,
    /// `( expr )`
    Group,
    /// `{ stmt; ... }`
    Block,
    /// `callee(args...)`
    Call,
    /// `object[args...]`
    Index,
    /// `object[[args...]]`
    DoubleIndex,
    /// `name = value` inside an argument or parameter list, keyed by the `=`.
    Argument,
    /// An empty argument slot such as the first one in `x[, 1]`.
    EmptyArgument,
    If,
    For,
    While,
    Repeat,
    Function,
    /// Wraps an unexpected token (plus whatever was skipped) or marks something missing.
    Error,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Leaf => "leaf",
            NodeKind::Unary => "unary",
            NodeKind::Binary => "binary",
            NodeKind::Group => "group",
            NodeKind::Block => "block",
            NodeKind::Call => "call",
            NodeKind::Index => "index",
            NodeKind::DoubleIndex => "double-index",
            NodeKind::Argument => "argument",
            NodeKind::EmptyArgument => "empty-argument",
            NodeKind::If => "if",
            NodeKind::For => "for",
            NodeKind::While => "while",
            NodeKind::Repeat => "repeat",
            NodeKind::Function => "function",
            NodeKind::Error => "error",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: NodeKind,
    token: Token,
    closing: Option<Token>,
    children: Vec<Node>,
    range: Range,
    span: Span,
}

impl Node {
    /// Build a node from its defining token and finalized children.
    pub fn new(kind: NodeKind, token: Token, children: Vec<Node>) -> Self {
        Self::with_closing(kind, token, children, None)
    }

    /// Build a node that also owns a closing delimiter (`)`, `]`, `]]`, `}`).
    pub fn with_closing(kind: NodeKind, token: Token, children: Vec<Node>, closing: Option<Token>) -> Self {
        let mut range = token.range;
        let mut span = token.span;
        if let Some(closing) = &closing {
            range = range.merge(closing.range);
            span = span.merge(closing.span);
        }
        for child in &children {
            range = range.merge(child.range);
            span = span.merge(child.span);
        }
        Self {
            kind,
            token,
            closing,
            children,
            range,
            span,
        }
    }

    pub fn leaf(token: Token) -> Self {
        Self::new(NodeKind::Leaf, token, Vec::new())
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The defining token.
    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn closing(&self) -> Option<&Token> {
        self.closing.as_ref()
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn is_error(&self) -> bool {
        self.kind == NodeKind::Error
    }

    /// Depth-first, left-to-right, parents before children.
    pub fn walk(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![NodeRef::root(self)],
        }
    }

    /// Depth-first, left-to-right, children before parents.
    pub fn walk_post_order(&self) -> PostOrder<'_> {
        PostOrder {
            stack: vec![(NodeRef::root(self), false)],
        }
    }

    /// Render the tree one node per line, indented by depth.
    ///
    /// ## Examples
    /// ```rust
    /// use rlint_syntax::{lexer, parser};
    ///
    /// let tree = parser::parse(&lexer::lex("x == NULL")).unwrap();
    /// assert_eq!(
    ///     tree.root.dump(),
    ///     "root 1:1-1:10\n  binary \"==\" 1:1-1:10\n    leaf \"x\" 1:1-1:2\n    leaf \"NULL\" 1:6-1:10\n"
    /// );
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for node in self.walk() {
            for _ in 0..node.depth() {
                out.push_str("  ");
            }
            out.push_str(node.kind.as_str());
            if !node.token.contents.is_empty() {
                out.push_str(&format!(" {:?}", node.token.contents));
            }
            out.push_str(&format!(" {}\n", node.range));
        }
        out
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// A node seen during traversal, together with a borrowed link to its parent.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    node: &'a Node,
    parent: Option<&'a Node>,
    index: usize,
    depth: usize,
}

impl<'a> NodeRef<'a> {
    pub fn root(node: &'a Node) -> Self {
        Self {
            node,
            parent: None,
            index: 0,
            depth: 0,
        }
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn parent(&self) -> Option<&'a Node> {
        self.parent
    }

    /// Position among the parent's children.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_last_child(&self) -> bool {
        self.parent
            .is_some_and(|parent| self.index + 1 == parent.children.len())
    }

    fn child_refs(&self) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + use<'a> {
        let parent = self.node;
        let depth = self.depth + 1;
        parent.children.iter().enumerate().map(move |(index, node)| NodeRef {
            node,
            parent: Some(parent),
            index,
            depth,
        })
    }
}

impl std::ops::Deref for NodeRef<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        self.node
    }
}

/// Pre-order iterator returned by [`Node::walk`].
pub struct PreOrder<'a> {
    stack: Vec<NodeRef<'a>>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        let current = self.stack.pop()?;
        self.stack.extend(current.child_refs().rev());
        Some(current)
    }
}

/// Post-order iterator returned by [`Node::walk_post_order`].
pub struct PostOrder<'a> {
    stack: Vec<(NodeRef<'a>, bool)>,
}

impl<'a> Iterator for PostOrder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<NodeRef<'a>> {
        loop {
            let (current, expanded) = self.stack.pop()?;
            if expanded || current.children.is_empty() {
                return Some(current);
            }
            self.stack.push((current, true));
            self.stack.extend(current.child_refs().rev().map(|child| (child, false)));
        }
    }
}

// ============================================================================
// Parse result
// ============================================================================

/// A parsed program: the tree plus every syntax error found while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTree {
    pub root: Node,
    pub errors: Vec<SyntaxError>,
}

impl SyntaxTree {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of error nodes embedded in the tree.
    pub fn error_node_count(&self) -> usize {
        self.root.walk().filter(|node| node.is_error()).count()
    }
}
