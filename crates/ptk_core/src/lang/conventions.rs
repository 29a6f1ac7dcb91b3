//! Shared naming conventions (well-known identifiers).

/// Alias reserved for the built-in grouping and the primitive scalar kinds.
pub const BUILTIN_ALIAS: &str = "ptk";

/// Namespace URI associated with [`BUILTIN_ALIAS`].
pub const BUILTIN_NAMESPACE_URI: &str = "http://sweble.org/doc/site/tooling/parser-toolkit/ptk-xml-tools";

/// Canonical prefix of the built-in grouping; always registered first.
pub const BUILTIN_NAMESPACE_PREFIX: &str = "ptk.lang";

/// Separator between path components of a qualified type identifier.
pub const PATH_SEPARATOR: char = '.';

/// Separator between an outer type and a nested type (`Outer$Inner`).
pub const NESTED_SEPARATOR: char = '$';

/// Separator between alias and short name in a tag (`ptk:ClassA`).
pub const TAG_SEPARATOR: char = ':';

/// Suffix marking a concrete implementation of an interface (`NodeImpl`).
pub const IMPL_SUFFIX: &str = "Impl";

/// Suffix appended once per array dimension.
pub const ARRAY_SUFFIX: &str = "[]";
