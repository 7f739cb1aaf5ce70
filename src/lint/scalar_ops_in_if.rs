//! Checker: vectorized `&` or `|` as the condition of `if`.
//!
//! `if` needs a single `TRUE`/`FALSE`; the short-circuiting scalar forms say so and skip the right-hand
//! side when it is not needed.
//!
//! ```text
//! # Bad
//! if (is.numeric(x) & x > 0) sqrt(x)
//!
//! # Good
//! if (is.numeric(x) && x > 0) sqrt(x)
//! ```

use crate::frontend::ast::{NodeKind, NodeRef};
use crate::lint::{Checker, Diagnostics};
use rlint_core::lang::operators::OperatorId;

pub(crate) struct ScalarOpsInIf;

impl Checker for ScalarOpsInIf {
    fn check(&self, node: NodeRef<'_>, diagnostics: &mut Diagnostics) {
        if node.kind() != NodeKind::If {
            return;
        }
        let Some(condition) = node.child(0) else {
            return;
        };
        if condition.kind() != NodeKind::Binary {
            return;
        }
        match condition.token().operator_id() {
            Some(OperatorId::And) => {
                diagnostics.report("Prefer '&&' to '&' in 'if' statement condition", condition);
            }
            Some(OperatorId::Or) => {
                diagnostics.report("Prefer '||' to '|' in 'if' statement condition", condition);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::frontend::ast::{Position, Range};
    use crate::frontend::diagnostics::Severity;
    use crate::lint::lint_source;

    #[test]
    fn flags_vectorized_and() {
        let diagnostics = lint_source("if (a & b) { 1 }");
        assert_eq!(diagnostics.len(), 1);
        let d = &diagnostics[0];
        assert_eq!(d.severity, Severity::Info);
        assert_eq!(d.message, "Prefer '&&' to '&' in 'if' statement condition");
        assert_eq!(d.range, Range::new(Position::new(1, 5), Position::new(1, 10)));
    }

    #[test]
    fn flags_vectorized_or() {
        let diagnostics = lint_source("if (a | b) 1 else 2");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Prefer '||' to '|' in 'if' statement condition");
    }

    #[test]
    fn only_the_top_operator_of_the_condition_counts() {
        assert!(lint_source("if (a && b) 1").is_empty());
        assert!(lint_source("if (any(a & b)) 1").is_empty());
        assert!(lint_source("if (a && (b | c)) 1").is_empty());
    }
}
