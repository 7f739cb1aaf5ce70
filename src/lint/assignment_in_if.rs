//! Checker: `=` used as the condition of `if`.
//!
//! ```text
//! # Bad
//! if (x = 1) print("one")
//!
//! # Good
//! if (x == 1) print("one")
//! ```

use crate::frontend::ast::{NodeKind, NodeRef};
use crate::lint::{Checker, Diagnostics};
use rlint_core::lang::operators::OperatorId;

pub(crate) struct AssignmentInIf;

impl Checker for AssignmentInIf {
    fn check(&self, node: NodeRef<'_>, diagnostics: &mut Diagnostics) {
        if node.kind() != NodeKind::If {
            return;
        }
        let Some(condition) = node.child(0) else {
            return;
        };
        // Only plain `=`; `if (x <- f())` is a deliberate idiom.
        if condition.kind() == NodeKind::Binary && condition.token().is_operator(OperatorId::Equals) {
            diagnostics.report("Using '=' for assignment in 'if' condition", condition);
        }
    }
}
