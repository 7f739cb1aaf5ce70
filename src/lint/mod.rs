//! Checkers over the parsed syntax tree.
//!
//! A checker is a stateless rule that looks at one node (plus its parent and children) and may report
//! diagnostics. The set of checkers is closed and registered statically in [`CHECKERS`]; [`check`] walks the
//! tree once, depth-first and left to right, and applies every enabled checker to every node in registration
//! order.
//!
//! # Adding a New Checker
//!
//! 1. Create `src/lint/<your_checker>.rs` with a unit struct implementing [`Checker`].
//! 2. Add a [`CheckerId`] variant and a [`CHECKERS`] entry (name, severity, description).
//! 3. Map the id to the struct in [`CheckerId::checker`].
//!
//! Registration order is part of the output contract: diagnostics at the same position are reported in
//! that order.

mod assignment_in_if;
mod comparison_with_null;
pub mod config;
mod scalar_ops_in_if;
mod unused_result;

use crate::frontend::ast::{Node, NodeRef, SyntaxTree};
use crate::frontend::diagnostics::{Diagnostic, Severity};

pub use config::{ConfigError, LintConfig};

/// A single checker.
///
/// Implementors inspect `node` and report findings through `diagnostics`. A checker must verify the node
/// shape it expects (kind, child count) and stay silent when the shape does not match.
pub(crate) trait Checker {
    fn check(&self, node: NodeRef<'_>, diagnostics: &mut Diagnostics);
}

/// Stable identity of a registered checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckerId {
    NullComparison,
    AssignmentInIf,
    ScalarOpsInIf,
    UnusedResult,
}

/// Registry metadata for a checker.
#[derive(Debug, Clone, Copy)]
pub struct CheckerInfo {
    pub id: CheckerId,
    /// Stable name, used as the diagnostic code and by `--disable`.
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
}

/// Registry of all checkers, in registration order.
pub const CHECKERS: &[CheckerInfo] = &[
    CheckerInfo {
        id: CheckerId::NullComparison,
        name: "null-comparison",
        severity: Severity::Warning,
        description: "`x == NULL` or `x != NULL`; use is.null() instead",
    },
    CheckerInfo {
        id: CheckerId::AssignmentInIf,
        name: "assignment-in-if",
        severity: Severity::Warning,
        description: "`if (x = 1)`: '=' assigns; '==' was probably meant",
    },
    CheckerInfo {
        id: CheckerId::ScalarOpsInIf,
        name: "scalar-ops-in-if",
        severity: Severity::Info,
        description: "vectorized '&' or '|' as an 'if' condition; prefer '&&' or '||'",
    },
    CheckerInfo {
        id: CheckerId::UnusedResult,
        name: "unused-result",
        severity: Severity::Info,
        description: "operator expression whose value is discarded before the end of a block",
    },
];

impl CheckerId {
    /// Return the full metadata entry for a checker.
    ///
    /// ## Panics
    /// - If the registry is missing an entry for `self` (this indicates a programming error).
    pub fn info(self) -> &'static CheckerInfo {
        CHECKERS
            .iter()
            .find(|info| info.id == self)
            .expect("checker info missing")
    }

    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Look up a checker by its stable name.
    pub fn from_name(name: &str) -> Option<CheckerId> {
        CHECKERS.iter().find(|info| info.name == name).map(|info| info.id)
    }

    fn checker(self) -> &'static dyn Checker {
        match self {
            CheckerId::NullComparison => &comparison_with_null::ComparisonWithNull,
            CheckerId::AssignmentInIf => &assignment_in_if::AssignmentInIf,
            CheckerId::ScalarOpsInIf => &scalar_ops_in_if::ScalarOpsInIf,
            CheckerId::UnusedResult => &unused_result::UnusedResult,
        }
    }
}

/// Collects the findings of one checker pass.
///
/// Each finding is tagged with the registration index of the checker that reported it, which breaks ties
/// when findings are sorted by position.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    entries: Vec<(usize, Diagnostic)>,
    order: usize,
    current: Option<&'static CheckerInfo>,
}

impl Diagnostics {
    fn begin(&mut self, order: usize, info: &'static CheckerInfo) {
        self.order = order;
        self.current = Some(info);
    }

    /// Report a finding covering `node`, with the current checker's severity and name.
    pub(crate) fn report(&mut self, message: impl Into<String>, node: &Node) {
        let Some(info) = self.current else {
            return;
        };
        let diagnostic = Diagnostic::new(info.severity, message, node.range(), node.span()).with_code(info.name);
        self.entries.push((self.order, diagnostic));
    }

    /// Sort by start position, then registration order; the sort is stable.
    fn finish(mut self) -> Vec<Diagnostic> {
        self.entries
            .sort_by_key(|(order, diagnostic)| (diagnostic.range.start, *order));
        self.entries.into_iter().map(|(_, diagnostic)| diagnostic).collect()
    }
}

/// Run every enabled checker over `tree` and return the findings sorted by position.
///
/// Syntax errors are not included; they live in [`SyntaxTree::errors`].
#[tracing::instrument(skip_all, fields(nodes = tracing::field::Empty))]
pub fn check(tree: &SyntaxTree, config: &LintConfig) -> Vec<Diagnostic> {
    let enabled: Vec<(usize, &'static CheckerInfo)> = CHECKERS
        .iter()
        .enumerate()
        .filter(|(_, info)| config.is_enabled(info.id))
        .collect();

    let mut diagnostics = Diagnostics::default();
    let mut nodes = 0usize;
    for node in tree.root.walk() {
        nodes += 1;
        for &(order, info) in &enabled {
            diagnostics.begin(order, info);
            info.id.checker().check(node, &mut diagnostics);
        }
    }
    tracing::Span::current().record("nodes", nodes);

    let diagnostics = diagnostics.finish();
    tracing::debug!(findings = diagnostics.len(), "checked tree");
    diagnostics
}

#[cfg(test)]
pub(crate) fn lint_source(source: &str) -> Vec<Diagnostic> {
    use crate::frontend::{lexer, parser};

    let tree = parser::parse(&lexer::lex(source)).unwrap();
    check(&tree, &LintConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::ast::{Position, Range};

    #[test]
    fn registry_names_are_unique_and_resolvable() {
        for info in CHECKERS {
            assert_eq!(CheckerId::from_name(info.name), Some(info.id));
            assert_eq!(info.id.name(), info.name);
        }
        assert_eq!(CheckerId::from_name("no-such-checker"), None);
    }

    #[test]
    fn findings_are_sorted_by_position_then_registration() {
        let diagnostics = lint_source("{\n  x == NULL\n  y\n}\nif (a | b) 1");
        let codes: Vec<_> = diagnostics.iter().map(|d| d.code.unwrap_or("")).collect();
        assert_eq!(codes, ["null-comparison", "unused-result", "scalar-ops-in-if"]);
        assert_eq!(diagnostics[0].range.start, Position::new(2, 3));
        assert_eq!(diagnostics[1].range.start, Position::new(2, 3));
    }

    #[test]
    fn clean_code_yields_nothing() {
        let source = "f <- function(x) {\n  if (is.null(x)) return(NULL)\n  x + 1\n}\nf(2)\n";
        assert!(lint_source(source).is_empty());
    }

    #[test]
    fn disabled_checkers_do_not_run() {
        let tree = crate::frontend::parser::parse(&crate::frontend::lexer::lex("x == NULL")).unwrap();
        let config = LintConfig::new().with_disabled(["null-comparison"]).unwrap();
        assert!(check(&tree, &config).is_empty());
        assert_eq!(
            check(&tree, &LintConfig::new())[0].range,
            Range::new(Position::new(1, 1), Position::new(1, 10))
        );
    }

    #[test]
    fn checkers_tolerate_error_nodes() {
        let diagnostics = lint_source("if (a == NULL\nx <- (1 + \n");
        assert!(diagnostics.iter().any(|d| d.code == Some("null-comparison")));
    }
}
