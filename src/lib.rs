#![forbid(unsafe_code)]
//! rlint: a tokenizer, parser and static checker for R source code
//!
//! The pipeline is strictly one-directional: text → tokens → tree → diagnostics. The frontend (tokenizer,
//! AST, parser) lives in `rlint_syntax`; this crate owns the checkers, the [`analysis`] driver and the CLI.
//!
//! ## Examples
//! ```rust
//! use rlint::{LintConfig, analyze};
//!
//! let analysis = analyze("if (x == NULL) print(x)\n", &LintConfig::default()).unwrap();
//! assert_eq!(analysis.diagnostics.len(), 1);
//! assert_eq!(analysis.diagnostics[0].code, Some("null-comparison"));
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: Registry lookups that can only fail on a programming error use `.expect("... missing")`.

pub mod analysis;
pub mod cli;
pub mod frontend;
pub mod lint;
pub mod version;

pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;

pub use analysis::{Analysis, AnalysisError, MAX_SOURCE_SIZE, analyze, read_source, tokenize_file, tokenize_string};
pub use lint::{CHECKERS, CheckerId, CheckerInfo, ConfigError, LintConfig};
