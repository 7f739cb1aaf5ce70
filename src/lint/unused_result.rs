//! Checker: an operator expression whose value is thrown away.
//!
//! Only direct statements of the program or of a `{ }` block are considered, and never the last one, which
//! is the block's value. Assignments are the point of their statement and are never flagged.
//!
//! ```text
//! # Bad
//! f <- function(x) {
//!   x < 1
//!   print(x)
//! }
//!
//! # Good
//! f <- function(x) {
//!   x <- 1
//!   print(x)
//! }
//! ```

use crate::frontend::ast::{NodeKind, NodeRef};
use crate::lint::{Checker, Diagnostics};

pub(crate) struct UnusedResult;

impl Checker for UnusedResult {
    fn check(&self, node: NodeRef<'_>, diagnostics: &mut Diagnostics) {
        let Some(parent) = node.parent() else {
            return;
        };
        if !matches!(parent.kind(), NodeKind::Root | NodeKind::Block) || node.is_last_child() {
            return;
        }
        if node.is_error() {
            return;
        }
        let token = node.token();
        if token.operator_id().is_none() || token.kind.is_assignment() {
            return;
        }
        diagnostics.report("result of computation is not used", &node);
    }
}
