//! Provide shared, pure naming helpers and canonical vocabulary for the parser toolkit utilities.
//!
//! This crate is intentionally small and dependency-free. It contains deterministic helpers that both
//! the abbreviation service and its callers (serializers, command-line tools) use so the spelling of
//! type tags never drifts between them.
//!
//! ## Notes
//!
//! - **No IO**, no global state, no service types.
//! - Current scope: primitive scalar kind vocabulary, built-in alias/namespace conventions, and
//!   identifier helpers (simple names, array suffixes, implementation-name candidates).

pub mod lang;
pub mod names;
