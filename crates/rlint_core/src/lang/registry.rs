//! Shareable metadata for `rlint_core::lang` registries.
//!
//! This submodule provides the small, dependency-free metadata types that are reused across all
//! registries.
//!
//! ## Notes
//! - These types are intentionally lightweight and `Copy`-friendly so registries can live in
//!   `const` tables.
//! - Metadata is meant for tooling/docs/diagnostics; enforcement of syntax rules still lives
//!   in the tokenizer/parser.

/// The R release a vocabulary item first appeared in.
///
/// ## Examples
/// ```rust
/// use rlint_core::lang::registry::Since;
///
/// assert!(Since::R_4_1 > Since::BASE);
/// assert_eq!(Since::R_4_1.to_string(), "4.1.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Since {
    pub major: u8,
    pub minor: u8,
}

impl Since {
    /// Present in every R release this tool understands.
    pub const BASE: Since = Since::new(1, 0);
    /// Native pipe (`|>`).
    pub const R_4_1: Since = Since::new(4, 1);

    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl std::fmt::Display for Since {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.0", self.major, self.minor)
    }
}

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Notes
/// - This is intended for docs/tooling (e.g. to flag discouraged spellings), not for
///   feature-gating by itself.
///
/// ## Examples
/// ```rust
/// use rlint_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}
