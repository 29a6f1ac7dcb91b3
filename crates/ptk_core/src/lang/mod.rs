//! Vocabulary registries for type tags.
//!
//! Callers work with **stable IDs** (e.g. `PrimitiveKindId`) and look up spellings via
//! registry tables instead of scattering string literals.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no service types, no IO, no side effects.
//!
//! ## Examples
//! ```rust
//! use ptk_core::lang::primitives::{self, PrimitiveKindId};
//!
//! assert_eq!(primitives::from_str("int"), Some(PrimitiveKindId::Int));
//! assert_eq!(primitives::as_str(PrimitiveKindId::Char), "char");
//! ```

pub mod conventions;
pub mod primitives;
