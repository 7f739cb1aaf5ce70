//! Lint configuration.
//!
//! [`LintConfig`] is built once (by the CLI or a library caller) and shared read-only by every file in a run.
//!
//! ## Examples
//! ```rust
//! use rlint::lint::{CheckerId, LintConfig};
//!
//! let config = LintConfig::new()
//!     .with_disabled(["unused-result"])
//!     .unwrap()
//!     .with_max_nesting_depth(64);
//! assert!(!config.is_enabled(CheckerId::UnusedResult));
//! assert!(config.is_enabled(CheckerId::NullComparison));
//! ```

use crate::analysis::MAX_SOURCE_SIZE;
use crate::frontend::parser::DEFAULT_MAX_DEPTH;
use crate::lint::{CHECKERS, CheckerId};

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("unknown checker '{name}'")]
    #[diagnostic(code(rlint::unknown_checker), help("known checkers: {known}"))]
    UnknownChecker { name: String, known: String },
}

/// Which checkers run, and the resource limits of a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    disabled: Vec<CheckerId>,
    max_nesting_depth: usize,
    max_source_size: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            disabled: Vec::new(),
            max_nesting_depth: DEFAULT_MAX_DEPTH,
            max_source_size: MAX_SOURCE_SIZE,
        }
    }
}

impl LintConfig {
    /// All checkers enabled, default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disable checkers by name.
    ///
    /// ## Errors
    /// Returns [`ConfigError::UnknownChecker`] for a name that is not registered.
    pub fn with_disabled<I, S>(mut self, names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref();
            let Some(id) = CheckerId::from_name(name) else {
                return Err(ConfigError::UnknownChecker {
                    name: name.to_string(),
                    known: CHECKERS.iter().map(|c| c.name).collect::<Vec<_>>().join(", "),
                });
            };
            if !self.disabled.contains(&id) {
                self.disabled.push(id);
            }
        }
        Ok(self)
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_max_source_size(mut self, bytes: usize) -> Self {
        self.max_source_size = bytes;
        self
    }

    pub fn is_enabled(&self, id: CheckerId) -> bool {
        !self.disabled.contains(&id)
    }

    pub fn max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }

    pub fn max_source_size(&self) -> usize {
        self.max_source_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_enables_everything() {
        let config = LintConfig::default();
        assert!(CHECKERS.iter().all(|c| config.is_enabled(c.id)));
        assert_eq!(config.max_nesting_depth(), DEFAULT_MAX_DEPTH);
        assert_eq!(config.max_source_size(), MAX_SOURCE_SIZE);
    }

    #[test]
    fn unknown_checker_is_an_error() {
        let err = LintConfig::new().with_disabled(["null-comparison", "nope"]).unwrap_err();
        assert_eq!(err.to_string(), "unknown checker 'nope'");
        let ConfigError::UnknownChecker { known, .. } = err;
        assert!(known.starts_with("null-comparison, assignment-in-if"));
    }

    #[test]
    fn disabling_twice_is_harmless() {
        let config = LintConfig::new()
            .with_disabled(["unused-result", "unused-result"])
            .unwrap();
        assert!(!config.is_enabled(CheckerId::UnusedResult));
        assert_eq!(config.disabled.len(), 1);
    }
}
