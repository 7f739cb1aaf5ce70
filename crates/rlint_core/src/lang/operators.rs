//! Operator vocabulary.
//!
//! This module defines the canonical R operator set along with the metadata the parser needs:
//! precedence, associativity, and whether the operator may also appear in prefix position.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact; use [`longest_match`] when scanning source text.
//! - User-defined percent operators (`%in%`, `%>%`, `%o%`, ...) share a single id, [`OperatorId::Special`];
//!   their spelling lives in the token, not in this table.
//! - `precedence` is a relative ordering where higher binds tighter. Levels are spaced by ten so the parser
//!   can derive left/right binding powers without collisions.
//!
//! ## Examples
//! ```rust
//! use rlint_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<-"), Some(OperatorId::LeftAssign));
//! assert_eq!(operators::from_str("%in%"), Some(OperatorId::Special));
//! assert_eq!(operators::longest_match("<<-1"), Some((OperatorId::SuperLeftAssign, 3)));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

use super::registry::{Since, Stability};

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    /// Chaining is a syntax error (`a < b < c`).
    None,
}

/// Broad grouping used by checkers and tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Help,
    Assignment,
    Formula,
    Logical,
    Comparison,
    Arithmetic,
    Special,
    Sequence,
    Access,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Help
    Question,

    // Assignment
    Equals,
    LeftAssign,
    SuperLeftAssign,
    ColonAssign,
    RightAssign,
    SuperRightAssign,

    // Formula
    Tilde,

    // Logical
    OrOr,
    Or,
    AndAnd,
    And,
    Not,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Caret,

    // Percent operators and the native pipe
    Modulo,
    Special,
    Pipe,

    // Sequence
    Colon,

    // Access
    Dollar,
    At,
    ColonColon,
    ColonColonColon,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spellings` may contain multiple accepted spellings for the same operator id (`^` and `**`).
/// - `prefix_precedence` is set for operators that are also valid in prefix position; the operand of a prefix
///   operator binds everything tighter than that level.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub name: &'static str,
    pub category: OperatorCategory,
    pub precedence: u8,
    pub associativity: Associativity,
    pub prefix_precedence: Option<u8>,
    pub since: Since,
    pub stability: Stability,
}

impl OperatorInfo {
    pub const fn is_assignment(&self) -> bool {
        matches!(self.category, OperatorCategory::Assignment)
    }

    /// Whether the operator is valid in infix position.
    pub const fn is_infix(&self) -> bool {
        self.precedence > 0
    }

    /// Whether the right operand is restricted to a name or string (`x$name`, `pkg::fn`).
    pub const fn takes_name_operand(&self) -> bool {
        matches!(self.category, OperatorCategory::Access)
    }
}

/// Registry of all operators, loosest first.
pub const OPERATORS: &[OperatorInfo] = &[
    op(OperatorId::Question, &["?"], "help", OperatorCategory::Help, 10, Associativity::Left).prefix(10),
    // Assignment
    op(OperatorId::Equals, &["="], "equals-assign", OperatorCategory::Assignment, 20, Associativity::Right),
    op(OperatorId::LeftAssign, &["<-"], "left-assign", OperatorCategory::Assignment, 30, Associativity::Right),
    op(
        OperatorId::SuperLeftAssign,
        &["<<-"],
        "super-left-assign",
        OperatorCategory::Assignment,
        30,
        Associativity::Right,
    ),
    op(OperatorId::ColonAssign, &[":="], "colon-assign", OperatorCategory::Assignment, 30, Associativity::Right),
    op(OperatorId::RightAssign, &["->"], "right-assign", OperatorCategory::Assignment, 40, Associativity::Left),
    op(
        OperatorId::SuperRightAssign,
        &["->>"],
        "super-right-assign",
        OperatorCategory::Assignment,
        40,
        Associativity::Left,
    ),
    // Formula
    op(OperatorId::Tilde, &["~"], "formula", OperatorCategory::Formula, 50, Associativity::Left).prefix(50),
    // Logical
    op(OperatorId::OrOr, &["||"], "or-scalar", OperatorCategory::Logical, 60, Associativity::Left),
    op(OperatorId::Or, &["|"], "or-vector", OperatorCategory::Logical, 60, Associativity::Left),
    op(OperatorId::AndAnd, &["&&"], "and-scalar", OperatorCategory::Logical, 70, Associativity::Left),
    op(OperatorId::And, &["&"], "and-vector", OperatorCategory::Logical, 70, Associativity::Left),
    prefix_only(OperatorId::Not, &["!"], "not", OperatorCategory::Logical, 80),
    // Comparison
    op(OperatorId::EqEq, &["=="], "equal", OperatorCategory::Comparison, 90, Associativity::None),
    op(OperatorId::NotEq, &["!="], "not-equal", OperatorCategory::Comparison, 90, Associativity::None),
    op(OperatorId::Lt, &["<"], "less", OperatorCategory::Comparison, 90, Associativity::None),
    op(OperatorId::LtEq, &["<="], "less-equal", OperatorCategory::Comparison, 90, Associativity::None),
    op(OperatorId::Gt, &[">"], "greater", OperatorCategory::Comparison, 90, Associativity::None),
    op(OperatorId::GtEq, &[">="], "greater-equal", OperatorCategory::Comparison, 90, Associativity::None),
    // Arithmetic
    op(OperatorId::Plus, &["+"], "plus", OperatorCategory::Arithmetic, 100, Associativity::Left).prefix(140),
    op(OperatorId::Minus, &["-"], "minus", OperatorCategory::Arithmetic, 100, Associativity::Left).prefix(140),
    op(OperatorId::Star, &["*"], "multiply", OperatorCategory::Arithmetic, 110, Associativity::Left),
    op(OperatorId::Slash, &["/"], "divide", OperatorCategory::Arithmetic, 110, Associativity::Left),
    // Percent operators and the native pipe
    op(OperatorId::Modulo, &["%%"], "modulo", OperatorCategory::Special, 120, Associativity::Left),
    op(OperatorId::Special, &[], "special", OperatorCategory::Special, 120, Associativity::Left),
    op(OperatorId::Pipe, &["|>"], "pipe", OperatorCategory::Special, 120, Associativity::Left)
        .available_since(Since::R_4_1),
    // Sequence
    op(OperatorId::Colon, &[":"], "sequence", OperatorCategory::Sequence, 130, Associativity::Left),
    op(OperatorId::Caret, &["^", "**"], "exponent", OperatorCategory::Arithmetic, 150, Associativity::Right),
    // Access
    op(OperatorId::Dollar, &["$"], "dollar", OperatorCategory::Access, 160, Associativity::Left),
    op(OperatorId::At, &["@"], "at", OperatorCategory::Access, 160, Associativity::Left),
    op(OperatorId::ColonColon, &["::"], "namespace-exports", OperatorCategory::Access, 170, Associativity::Left),
    op(OperatorId::ColonColonColon, &[":::"], "namespace-all", OperatorCategory::Access, 170, Associativity::Left),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Canonical spelling, or the registry name for [`OperatorId::Special`].
pub fn as_str(id: OperatorId) -> &'static str {
    let info = info_for(id);
    info.spellings.first().copied().unwrap_or(info.name)
}

/// Resolve an exact operator spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`] or is a `%...%` operator.
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    let found = OPERATORS
        .iter()
        .find(|o| {
            let spellings: &[&str] = o.spellings;
            spellings.contains(&spelling)
        })
        .map(|o| o.id);
    if found.is_some() {
        return found;
    }
    is_special_spelling(spelling).then_some(OperatorId::Special)
}

/// Find the longest fixed operator spelling that prefixes `rest`.
///
/// ## Returns
/// - The operator and the byte length of the matched spelling, so `"<<-"` wins over `"<-"` and `"<"`.
/// - `None` if no fixed spelling matches. Percent operators are not handled here because their length is
///   open-ended.
pub fn longest_match(rest: &str) -> Option<(OperatorId, usize)> {
    let mut best: Option<(OperatorId, usize)> = None;
    for info in OPERATORS {
        for spelling in info.spellings {
            if rest.starts_with(spelling) && best.is_none_or(|(_, len)| spelling.len() > len) {
                best = Some((info.id, spelling.len()));
            }
        }
    }
    best
}

/// Whether `spelling` has the `%...%` shape of a user-defined infix operator (excluding `%%`).
pub fn is_special_spelling(spelling: &str) -> bool {
    spelling.len() > 2
        && spelling.starts_with('%')
        && spelling.ends_with('%')
        && !spelling[1..spelling.len() - 1].contains(['%', '\n'])
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spellings: &'static [&'static str],
    name: &'static str,
    category: OperatorCategory,
    precedence: u8,
    associativity: Associativity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        name,
        category,
        precedence,
        associativity,
        prefix_precedence: None,
        since: Since::BASE,
        stability: Stability::Stable,
    }
}

const fn prefix_only(
    id: OperatorId,
    spellings: &'static [&'static str],
    name: &'static str,
    category: OperatorCategory,
    prefix_precedence: u8,
) -> OperatorInfo {
    op(id, spellings, name, category, 0, Associativity::None).prefix(prefix_precedence)
}

impl OperatorInfo {
    const fn prefix(mut self, precedence: u8) -> Self {
        self.prefix_precedence = Some(precedence);
        self
    }

    const fn available_since(mut self, since: Since) -> Self {
        self.since = since;
        self
    }
}
