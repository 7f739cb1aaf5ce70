//! Shared syntax frontend for R: tokenizer, parser, AST, diagnostics.
//!
//! This crate is dependency-light and intended for reuse by the checker, the CLI, and any future editor
//! tooling.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not evaluate code or resolve names.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `rlint_core::lang` registries.
//! - Neither stage aborts on bad input: the tokenizer emits invalid tokens and the parser emits error nodes.
//!   Only resource exhaustion is an `Err`.
//!
//! ## Examples
//! ```rust
//! use rlint_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("x <- 1\nprint(x)\n");
//! let tree = parser::parse(&tokens).unwrap();
//! assert_eq!(tree.root.children().len(), 2);
//! assert!(tree.errors.is_empty());
//! ```
//!
//! ## See also
//! - `rlint_core::lang` for registry-backed language vocabulary (keywords/operators/punctuation).

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
