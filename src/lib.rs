#![forbid(unsafe_code)]
//! Parser toolkit utilities
//!
//! Shortens fully-qualified type identifiers to compact `alias:short` tags for XML serialization
//! and resolves those tags back to types. The crate also provides the indentation-aware printer
//! used to render tool output, and the `ptk-abbrev` command-line front end.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a logic error, use `.expect("INVARIANT: reason")` with a clear
//!   explanation.

pub mod abbrev;
pub mod cli;
pub mod printer;
pub mod version;

pub use abbrev::{
    AbbrevError, AbbrevResult, Abbreviation, NameAbbrevService, NamespaceRegistration, TypeDescriptor, TypeKind,
    TypeProvider, TypeRef, TypeRegistry,
};
pub use printer::{Printer, PrinterConfig, PrinterState};
