//! Token types for the R tokenizer.
//!
//! The tokenizer uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words
//! - `Operator(OperatorId)` for operators (including `%...%` specials)
//! - `Punctuation(PunctuationId)` for brackets and separators
//!
//! ## Notes
//! - Every token keeps its exact source text in `contents`; decoded values are available on demand through
//!   [`Token::string_value`] and [`Token::identifier_name`].
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.

use crate::ast::{Position, Range, Span};
use rlint_core::lang::keywords::{self, KeywordId};
use rlint_core::lang::operators::OperatorId;
use rlint_core::lang::punctuation::{self, PunctuationId};

use super::strings;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Why a stretch of source could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    #[error("unexpected character")]
    UnexpectedCharacter,
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated raw string literal")]
    UnterminatedRawString,
    #[error("malformed raw string literal")]
    MalformedRawString,
    #[error("unterminated backtick-quoted name")]
    UnterminatedBacktick,
    #[error("malformed numeric literal")]
    MalformedNumber,
}

/// Kind of token produced by the tokenizer (or synthesized by the parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Identifier,
    Number,
    String,

    // ========== Trivia ==========
    Comment,
    Newline,

    // ========== Special ==========
    Invalid(LexErrorKind),
    /// Zero-length token defining the program root.
    Root,
    /// Zero-length token marking an empty argument slot.
    EmptyArgument,
    /// Zero-length token standing in for something the parser expected but did not find.
    Missing,
    /// Zero-length end-of-input marker; always the last token.
    End,
}

impl TokenKind {
    /// Stable type name reported to tools.
    pub fn type_name(self) -> &'static str {
        match self {
            TokenKind::Keyword(_) => "keyword",
            TokenKind::Operator(_) => "operator",
            TokenKind::Punctuation(id) => punctuation::name(id),
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::Comment => "comment",
            TokenKind::Newline => "newline",
            TokenKind::Invalid(_) => "invalid",
            TokenKind::Root => "root",
            TokenKind::EmptyArgument => "empty",
            TokenKind::Missing => "missing",
            TokenKind::End => "end",
        }
    }

    /// Whether the parser made this token up rather than reading it from source.
    pub fn is_synthetic(self) -> bool {
        matches!(self, TokenKind::Root | TokenKind::EmptyArgument | TokenKind::Missing)
    }
}

/// A token with its kind, exact source text and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub contents: String,
    pub span: Span,
    pub range: Range,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, contents: impl Into<String>, span: Span, range: Range) -> Self {
        Self {
            kind,
            contents: contents.into(),
            span,
            range,
        }
    }

    /// A zero-length token of `kind` placed at the start of `at`.
    pub fn synthetic(kind: TokenKind, at: &Token) -> Self {
        Self::new(
            kind,
            "",
            Span::new(at.span.start, at.span.start),
            Range::empty(at.range.start),
        )
    }

    /// The synthetic token that defines the program root.
    pub fn root() -> Self {
        Self::new(TokenKind::Root, "", Span::default(), Range::empty(Position::START))
    }

    pub fn row(&self) -> u32 {
        self.range.start.row
    }

    pub fn column(&self) -> u32 {
        self.range.start.column
    }

    /// Length in characters.
    pub fn length(&self) -> usize {
        self.contents.chars().count()
    }

    /// Decoded value of a string literal, with quotes removed and escapes applied.
    ///
    /// ## Returns
    /// - `None` if this is not a string token or an escape is malformed.
    pub fn string_value(&self) -> Option<String> {
        if self.kind != TokenKind::String {
            return None;
        }
        if let Some(body) = strings::raw_string_body(&self.contents) {
            return Some(body.to_string());
        }
        strings::unescape(strings::strip_quotes(&self.contents)?)
    }

    /// The name an identifier refers to, with backticks removed and escapes applied.
    pub fn identifier_name(&self) -> Option<String> {
        if self.kind != TokenKind::Identifier {
            return None;
        }
        match self.contents.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
            Some(quoted) => strings::unescape(quoted),
            None => Some(self.contents.clone()),
        }
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}
