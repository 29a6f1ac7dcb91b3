//! Primitive scalar kind vocabulary.
//!
//! Primitive kinds are never looked up in a namespace: they always abbreviate to the built-in alias
//! (see [`crate::lang::conventions::BUILTIN_ALIAS`]) followed by their canonical spelling.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; `Int` is a class name, `int` is the primitive.
//!
//! ## Examples
//! ```rust
//! use ptk_core::lang::primitives::{self, PrimitiveKindId};
//!
//! assert_eq!(primitives::from_str("boolean"), Some(PrimitiveKindId::Boolean));
//! assert_eq!(primitives::from_str("Boolean"), None);
//! assert_eq!(primitives::PRIMITIVE_KINDS.len(), 8);
//! ```

/// Stable identifier for primitive scalar kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKindId {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Boolean,
    Char,
}

/// Registry entry for a primitive scalar kind.
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveKindInfo {
    pub id: PrimitiveKindId,
    pub canonical: &'static str,
}

/// Registry of primitive scalar kinds, in the order the abbreviation cache is seeded.
pub const PRIMITIVE_KINDS: &[PrimitiveKindInfo] = &[
    info(PrimitiveKindId::Byte, "byte"),
    info(PrimitiveKindId::Short, "short"),
    info(PrimitiveKindId::Int, "int"),
    info(PrimitiveKindId::Long, "long"),
    info(PrimitiveKindId::Float, "float"),
    info(PrimitiveKindId::Double, "double"),
    info(PrimitiveKindId::Boolean, "boolean"),
    info(PrimitiveKindId::Char, "char"),
];

/// Resolve a spelling to a [`PrimitiveKindId`].
///
/// ## Returns
/// - `Some(PrimitiveKindId)` if `name` is a canonical primitive spelling.
/// - `None` otherwise.
pub fn from_str(name: &str) -> Option<PrimitiveKindId> {
    PRIMITIVE_KINDS.iter().find(|p| p.canonical == name).map(|p| p.id)
}

/// Return the canonical spelling for a primitive kind.
pub fn as_str(id: PrimitiveKindId) -> &'static str {
    info_for(id).canonical
}

/// Return the registry entry for a primitive kind.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PrimitiveKindId) -> &'static PrimitiveKindInfo {
    PRIMITIVE_KINDS
        .iter()
        .find(|p| p.id == id)
        .expect("primitive kind info missing")
}

const fn info(id: PrimitiveKindId, canonical: &'static str) -> PrimitiveKindInfo {
    PrimitiveKindInfo { id, canonical }
}
