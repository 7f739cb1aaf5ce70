//! Syntax frontend, re-exported from `rlint_syntax` so the checkers and the CLI share one set of paths.

pub use rlint_syntax::{ast, diagnostics, lexer, parser, token_helpers};
