//! The analysis driver: one source text in, tokens + tree + diagnostics out.
//!
//! [`analyze`] runs the whole pipeline for a single source unit. Passes share no mutable state, so callers may
//! run any number of them in parallel (the CLI does, one file per worker).
//!
//! ## Notes
//! - Local problems never fail a pass: invalid tokens and syntax errors end up in [`Analysis`].
//! - [`AnalysisError`] means the pass produced nothing: the file could not be read, or a resource limit was hit.

use std::fs;
use std::path::{Path, PathBuf};

use crate::frontend::ast::SyntaxTree;
use crate::frontend::diagnostics::{Diagnostic, FatalError, Severity, SyntaxError};
use crate::frontend::lexer::{self, Token};
use crate::frontend::parser;
use crate::lint::{self, LintConfig};

/// Maximum source size accepted by default (100 MiB).
pub const MAX_SOURCE_SIZE: usize = 100 * 1024 * 1024;

/// Errors that abort a whole pass.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum AnalysisError {
    #[error("Failed to read file '{}': {source}", path.display())]
    #[diagnostic(code(rlint::io))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File '{}' is not valid UTF-8", path.display())]
    #[diagnostic(code(rlint::encoding))]
    NotUtf8 { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Fatal(#[from] FatalError),
}

/// Everything one pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub tree: SyntaxTree,
    /// Checker findings, sorted by position then registration order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Analysis {
    pub fn syntax_errors(&self) -> &[SyntaxError] {
        &self.tree.errors
    }

    /// Syntax errors and checker findings in one list, sorted by start position.
    ///
    /// On a tie the syntax error comes first; checker findings keep their relative order.
    pub fn all_diagnostics(&self) -> Vec<Diagnostic> {
        let mut all: Vec<Diagnostic> = self.tree.errors.iter().map(SyntaxError::to_diagnostic).collect();
        all.extend(self.diagnostics.iter().cloned());
        all.sort_by_key(|d| d.range.start);
        all
    }

    /// Number of findings (syntax errors included) with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        let checker = self.diagnostics.iter().filter(|d| d.severity == severity).count();
        match severity {
            Severity::Error => checker + self.tree.errors.len(),
            _ => checker,
        }
    }
}

/// Tokenize, parse and check one source text.
///
/// ## Errors
/// - [`FatalError::InputTooLarge`] when `source` exceeds the configured size limit.
/// - [`FatalError::NestingTooDeep`] when the parser passes the configured nesting limit.
///
/// ## Examples
/// ```rust
/// use rlint::{LintConfig, analyze};
///
/// let analysis = analyze("x <- (1 + \n", &LintConfig::default()).unwrap();
/// assert!(analysis.tree.has_errors());
/// ```
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn analyze(source: &str, config: &LintConfig) -> Result<Analysis, AnalysisError> {
    if source.len() > config.max_source_size() {
        return Err(FatalError::InputTooLarge {
            size: source.len(),
            limit: config.max_source_size(),
        }
        .into());
    }

    let tokens = lexer::lex(source);
    let tree = parser::parse_with_limit(&tokens, config.max_nesting_depth())?;
    let diagnostics = lint::check(&tree, config);
    tracing::debug!(
        syntax_errors = tree.errors.len(),
        findings = diagnostics.len(),
        "analysis complete"
    );
    Ok(Analysis {
        tokens,
        tree,
        diagnostics,
    })
}

/// Read a source file fully into memory.
///
/// ## Errors
/// - [`AnalysisError::Read`] if the file cannot be accessed or read.
/// - [`FatalError::InputTooLarge`] if the file is larger than `limit` bytes.
/// - [`AnalysisError::NotUtf8`] if the contents are not UTF-8.
pub fn read_source(path: &Path, limit: usize) -> Result<String, AnalysisError> {
    let read_error = |source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    };

    // Check file size before reading
    let metadata = fs::metadata(path).map_err(read_error)?;
    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    if size > limit {
        return Err(FatalError::InputTooLarge { size, limit }.into());
    }

    let bytes = fs::read(path).map_err(read_error)?;
    String::from_utf8(bytes).map_err(|_| AnalysisError::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Tokenize an in-memory string.
pub fn tokenize_string(source: &str) -> Vec<Token> {
    lexer::lex(source)
}

/// Read and tokenize a file, with the default size limit.
pub fn tokenize_file(path: &Path) -> Result<Vec<Token>, AnalysisError> {
    let source = read_source(path, MAX_SOURCE_SIZE)?;
    Ok(lexer::lex(&source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::Position;
    use crate::frontend::parser::DEFAULT_MAX_DEPTH;

    fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("rlint_{}_{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn clean_source_has_no_findings() {
        let analysis = analyze("x <- c(1, 2)\nprint(x)\n", &LintConfig::default()).unwrap();
        assert!(analysis.all_diagnostics().is_empty());
        assert_eq!(analysis.tokens.last().map(|t| t.kind), Some(lexer::TokenKind::End));
    }

    #[test]
    fn syntax_errors_merge_ahead_of_findings() {
        let analysis = analyze("if (x == NULL) 1\ny <- )\n", &LintConfig::default()).unwrap();
        let all = analysis.all_diagnostics();
        let codes: Vec<_> = all.iter().map(|d| d.code.unwrap_or("")).collect();
        assert_eq!(codes, ["null-comparison", "syntax-error"]);
        assert_eq!(all[1].range.start, Position::new(2, 6));
        assert_eq!(analysis.count(Severity::Error), 1);
        assert_eq!(analysis.count(Severity::Warning), 1);
        assert_eq!(analysis.count(Severity::Info), 0);
    }

    #[test]
    fn oversized_source_is_fatal() {
        let config = LintConfig::new().with_max_source_size(4);
        let err = analyze("x <- 12", &config).unwrap_err();
        assert!(matches!(
            err,
            AnalysisError::Fatal(FatalError::InputTooLarge { size: 7, limit: 4 })
        ));
    }

    #[test]
    fn deep_nesting_is_fatal() {
        let config = LintConfig::new().with_max_nesting_depth(8);
        let source = format!("{}1{}", "(".repeat(20), ")".repeat(20));
        let err = analyze(&source, &config).unwrap_err();
        assert!(matches!(err, AnalysisError::Fatal(FatalError::NestingTooDeep { limit: 8, .. })));
    }

    #[test]
    fn default_nesting_limit_is_reported_on_a_small_stack() {
        let if_blocks = |count: usize| format!("{}1{}", "if (a) {".repeat(count), "}".repeat(count));
        let sources = [
            format!("{}1{}", "(".repeat(DEFAULT_MAX_DEPTH - 1), ")".repeat(DEFAULT_MAX_DEPTH - 1)),
            format!("{}1{}", "f(".repeat(DEFAULT_MAX_DEPTH - 1), ")".repeat(DEFAULT_MAX_DEPTH - 1)),
            // Each `if (a) {` costs two levels: the `if` itself and the block holding the next one.
            if_blocks((DEFAULT_MAX_DEPTH - 1) / 2),
            if_blocks(DEFAULT_MAX_DEPTH),
        ];
        let outcomes = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(move || {
                sources.map(|source| match analyze(&source, &LintConfig::default()) {
                    Ok(analysis) => Ok(analysis.syntax_errors().len()),
                    Err(AnalysisError::Fatal(e)) => Err(e),
                    Err(e) => panic!("unexpected failure: {e}"),
                })
            })
            .unwrap()
            .join()
            .unwrap();

        assert_eq!(outcomes[..3], [Ok(0), Ok(0), Ok(0)]);
        assert!(matches!(
            outcomes[3],
            Err(FatalError::NestingTooDeep { limit: DEFAULT_MAX_DEPTH, .. })
        ));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_source(Path::new("definitely/not/here.R"), MAX_SOURCE_SIZE).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("Failed to read file 'definitely/not/here.R': ")
        );
    }

    #[test]
    fn non_utf8_file_is_rejected() {
        let path = scratch_file("latin1.R", b"x <- \"caf\xe9\"\n");
        let err = read_source(&path, MAX_SOURCE_SIZE).unwrap_err();
        assert!(matches!(err, AnalysisError::NotUtf8 { .. }));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn tokenize_file_matches_tokenize_string() {
        let path = scratch_file("tokens.R", b"f(x) # call\n");
        let from_file = tokenize_file(&path).unwrap();
        assert_eq!(from_file, tokenize_string("f(x) # call\n"));
        let _ = fs::remove_file(path);
    }
}
