//! Provide the canonical R language vocabulary shared by the rlint tokenizer, parser and checkers.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no parser-specific types.
//! - Everything lives in const tables so lookups never allocate.

pub mod lang;
