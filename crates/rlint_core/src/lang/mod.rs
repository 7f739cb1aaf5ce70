//! R language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators and
//! punctuation.
//!
//! The design goal is to avoid stringly-typed checks scattered across the tokenizer, parser and checkers.
//! Instead, callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up
//! spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The tokenizer/parser enforce syntax; registries provide spellings and metadata for shared use (diagnostics,
//!   precedence, token type names).
//!
//! ## Examples
//! ```rust
//! use rlint_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("NULL"), Some(KeywordId::Null));
//! assert_eq!(keywords::as_str(KeywordId::Function), "function");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
