//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the
//! tokenizer/parser: delimiters and separators.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - `[[` and `]]` are distinct tokens from `[` and `]`. Whether `]]` closes a double bracket or two single
//!   brackets depends on context, which the tokenizer tracks; this module is vocabulary only.
//!
//! ## Examples
//! ```rust
//! use rlint_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("[["), Some(PunctuationId::LDoubleBracket));
//! assert_eq!(punctuation::as_str(PunctuationId::Semicolon), ";");
//! assert_eq!(punctuation::closing_for(PunctuationId::LBrace), Some(PunctuationId::RBrace));
//! ```

use super::registry::{Since, Stability};

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Opening brackets and braces.
    Open,
    /// Closing brackets and braces.
    Close,
    /// Separators like `,` and `;`.
    Separator,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Semicolon,

    // Delimiters
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LDoubleBracket,
    RDoubleBracket,
}

/// Metadata for a punctuation token.
///
/// `name` doubles as the stable token type name reported to tools (`lparen`, `comma`, ...).
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub name: &'static str,
    pub category: PunctuationCategory,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    info(PunctuationId::Comma, ",", "comma", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", "semicolon", PunctuationCategory::Separator),
    info(PunctuationId::LParen, "(", "lparen", PunctuationCategory::Open),
    info(PunctuationId::RParen, ")", "rparen", PunctuationCategory::Close),
    info(PunctuationId::LBrace, "{", "lbrace", PunctuationCategory::Open),
    info(PunctuationId::RBrace, "}", "rbrace", PunctuationCategory::Close),
    info(PunctuationId::LBracket, "[", "lbracket", PunctuationCategory::Open),
    info(PunctuationId::RBracket, "]", "rbracket", PunctuationCategory::Close),
    info(PunctuationId::LDoubleBracket, "[[", "ldoublebracket", PunctuationCategory::Open),
    info(PunctuationId::RDoubleBracket, "]]", "rdoublebracket", PunctuationCategory::Close),
];

pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Stable type name (`lparen`, `rdoublebracket`, ...).
pub fn name(id: PunctuationId) -> &'static str {
    info_for(id).name
}

pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// The closing delimiter that pairs with an opening one.
///
/// ## Returns
/// - `None` for separators and closing delimiters.
pub fn closing_for(open: PunctuationId) -> Option<PunctuationId> {
    match open {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBrace => Some(PunctuationId::RBrace),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        PunctuationId::LDoubleBracket => Some(PunctuationId::RDoubleBracket),
        _ => None,
    }
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    name: &'static str,
    category: PunctuationCategory,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        name,
        category,
        since: Since::BASE,
        stability: Stability::Stable,
    }
}
