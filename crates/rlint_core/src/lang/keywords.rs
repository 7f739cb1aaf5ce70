//! Define the reserved keyword vocabulary for R.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings,
//! categories and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**: `NULL` is a keyword, `null` is an identifier.
//! - `T` and `F` are ordinary identifiers in R (they can be rebound), so they are not listed here.
//! - This registry is intentionally **pure** (no AST/IO/side effects).
//!
//! ## Examples
//! ```rust
//! use rlint_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("if"), Some(KeywordId::If));
//! assert_eq!(keywords::from_str("NA_integer_"), Some(KeywordId::NaInteger));
//! assert_eq!(keywords::as_str(KeywordId::Null), "NULL");
//! ```

use super::registry::{Since, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow
    If,
    Else,
    Repeat,
    While,
    For,
    In,
    Next,
    Break,

    // Definitions
    Function,

    // Literals
    True,
    False,
    Null,
    Inf,
    NaN,
    Na,
    NaInteger,
    NaReal,
    NaCharacter,
    NaComplex,
}

/// High-level grouping for documentation and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Literal,
}

/// Metadata for a reserved keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub since: Since,
    pub stability: Stability,
}

impl KeywordInfo {
    /// Whether the keyword stands for a constant value (`TRUE`, `NULL`, `NA_real_`, ...).
    pub const fn is_literal(&self) -> bool {
        matches!(self.category, KeywordCategory::Literal)
    }
}

/// Registry of all reserved keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::Repeat, "repeat", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::In, "in", KeywordCategory::ControlFlow),
    info(KeywordId::Next, "next", KeywordCategory::ControlFlow),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    // Definitions
    info(KeywordId::Function, "function", KeywordCategory::Definition),
    // Literals
    info(KeywordId::True, "TRUE", KeywordCategory::Literal),
    info(KeywordId::False, "FALSE", KeywordCategory::Literal),
    info(KeywordId::Null, "NULL", KeywordCategory::Literal),
    info(KeywordId::Inf, "Inf", KeywordCategory::Literal),
    info(KeywordId::NaN, "NaN", KeywordCategory::Literal),
    info(KeywordId::Na, "NA", KeywordCategory::Literal),
    info(KeywordId::NaInteger, "NA_integer_", KeywordCategory::Literal),
    info(KeywordId::NaReal, "NA_real_", KeywordCategory::Literal),
    info(KeywordId::NaCharacter, "NA_character_", KeywordCategory::Literal),
    info(KeywordId::NaComplex, "NA_complex_", KeywordCategory::Literal),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        since: Since::BASE,
        stability: Stability::Stable,
    }
}
