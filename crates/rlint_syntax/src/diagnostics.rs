//! Diagnostic value types shared by the parser, the checkers and every renderer.
//!
//! ## Notes
//! - Local problems are *values*: a [`SyntaxError`] recorded next to an error node, or a checker
//!   [`Diagnostic`]. Neither stops the pipeline.
//! - Only [`FatalError`] is returned as an `Err`, and it means the whole pass produced nothing.

use std::fmt;

use crate::ast::{Position, Range, Span};

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Severity> for miette::Severity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        }
    }
}

/// A positioned finding.
///
/// `code` names the rule that produced it (`null-comparison`, `syntax-error`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub range: Range,
    pub span: Span,
    pub code: Option<&'static str>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>, range: Range, span: Span) -> Self {
        Self {
            severity,
            message: message.into(),
            range,
            span,
            code: None,
        }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.range.start, self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

/// A local syntax problem. The tree contains an error node at the same place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub range: Range,
    pub span: Span,
}

impl SyntaxError {
    pub const CODE: &'static str = "syntax-error";

    pub fn new(message: impl Into<String>, range: Range, span: Span) -> Self {
        Self {
            message: message.into(),
            range,
            span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(Severity::Error, self.message.clone(), self.range, self.span).with_code(Self::CODE)
    }
}

/// Resource exhaustion that aborts a whole pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum FatalError {
    #[error("expressions are nested more than {limit} levels deep (at {position})")]
    #[diagnostic(
        code(rlint::nesting_too_deep),
        help("split the expression into smaller pieces with intermediate assignments")
    )]
    NestingTooDeep { limit: usize, position: Position },

    #[error("source is {size} bytes, which exceeds the limit of {limit} bytes")]
    #[diagnostic(code(rlint::input_too_large))]
    InputTooLarge { size: usize, limit: usize },
}
