//! Registry-id accessors on [`Token`] and [`TokenKind`].
//!
//! The parser and the checkers ask "is this `<-`?" or "is this `NULL`?" through these methods, never by
//! comparing token text.

use crate::lexer::{Token, TokenKind};
use rlint_core::lang::keywords::KeywordId;
use rlint_core::lang::operators::{self, OperatorId};
use rlint_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Keyword id of a keyword token.
    pub fn keyword_id(&self) -> Option<KeywordId> {
        match self {
            TokenKind::Keyword(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.keyword_id() == Some(id)
    }

    /// Operator id of an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.operator_id() == Some(id)
    }

    /// Return `true` for any assignment operator (`=`, `<-`, `<<-`, `:=`, `->`, `->>`).
    pub fn is_assignment(&self) -> bool {
        self.operator_id()
            .is_some_and(|id| operators::info_for(id).is_assignment())
    }

    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        match self {
            TokenKind::Punctuation(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.punctuation_id() == Some(id)
    }

    /// Return `true` for tokens the grammar never sees directly.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Comment)
    }
}

/// Shorthands that forward to [`Token::kind`].
impl Token {
    pub fn keyword_id(&self) -> Option<KeywordId> {
        self.kind.keyword_id()
    }

    pub fn operator_id(&self) -> Option<OperatorId> {
        self.kind.operator_id()
    }

    pub fn punctuation_id(&self) -> Option<PunctuationId> {
        self.kind.punctuation_id()
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        self.kind.is_keyword(id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        self.kind.is_operator(id)
    }

    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        self.kind.is_punctuation(id)
    }
}
