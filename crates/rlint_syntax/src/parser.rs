//! Parser for R source
//!
//! Converts a token stream into a single-rooted [`SyntaxTree`]. Local syntax problems never abort the pass:
//! they become error nodes plus [`SyntaxError`] records, and parsing resumes at the next statement boundary.
//!
//! ## Examples
//!
//! ```rust
//! use rlint_syntax::ast::NodeKind;
//! use rlint_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("if (x == 1) print(x)\n");
//! let tree = parser::parse(&tokens).unwrap();
//! assert_eq!(tree.root.children()[0].kind(), NodeKind::If);
//! ```

use crate::ast::{Node, NodeKind, Position, Range, Span, SyntaxTree};
use crate::diagnostics::{FatalError, SyntaxError};
use crate::lexer::{Token, TokenKind};
use rlint_core::lang::keywords::KeywordId;
use rlint_core::lang::operators::{self, Associativity, OperatorId};
use rlint_core::lang::punctuation::{self, PunctuationCategory, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/args.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
