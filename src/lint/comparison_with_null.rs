//! Checker: comparing against `NULL` with `==` or `!=`.
//!
//! Comparing with `NULL` yields a zero-length logical vector, never `TRUE` or `FALSE`, so the test is almost
//! certainly a mistake.
//!
//! ```text
//! # Bad
//! if (x == NULL) stop("missing")
//!
//! # Good
//! if (is.null(x)) stop("missing")
//! ```

use crate::frontend::ast::{NodeKind, NodeRef};
use crate::lint::{Checker, Diagnostics};
use rlint_core::lang::keywords::KeywordId;
use rlint_core::lang::operators::OperatorId;

pub(crate) struct ComparisonWithNull;

impl Checker for ComparisonWithNull {
    fn check(&self, node: NodeRef<'_>, diagnostics: &mut Diagnostics) {
        let token = node.token();
        if node.kind() != NodeKind::Binary
            || !(token.is_operator(OperatorId::EqEq) || token.is_operator(OperatorId::NotEq))
        {
            return;
        }
        let [lhs, rhs] = node.children() else {
            return;
        };
        if lhs.token().is_keyword(KeywordId::Null) || rhs.token().is_keyword(KeywordId::Null) {
            diagnostics.report("Use 'is.null()' to check if an object is NULL", &node);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::frontend::ast::{Position, Range};
    use crate::frontend::diagnostics::Severity;
    use crate::lint::lint_source;

    #[test]
    fn flags_equality_with_null() {
        let diagnostics = lint_source("x == NULL");
        assert_eq!(diagnostics.len(), 1);
        let d = &diagnostics[0];
        assert_eq!(d.severity, Severity::Warning);
        assert_eq!(d.message, "Use 'is.null()' to check if an object is NULL");
        assert_eq!(d.range, Range::new(Position::new(1, 1), Position::new(1, 10)));
        assert_eq!(d.code, Some("null-comparison"));
    }

    #[test]
    fn flags_either_side_and_inequality() {
        assert_eq!(lint_source("NULL != y").len(), 1);
        assert_eq!(lint_source("f(NULL == x)").len(), 1);
    }

    #[test]
    fn ignores_other_comparisons() {
        assert!(lint_source("x == NA").is_empty());
        assert!(lint_source("x <- NULL").is_empty());
        assert!(lint_source("is.null(x)").is_empty());
        assert!(lint_source("x == (NULL)").is_empty());
    }
}
