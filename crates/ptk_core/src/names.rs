//! Pure helpers over qualified type identifiers.
//!
//! A qualified identifier separates path components with `.` and nested types with `$`
//! (`pkg.Outer$Inner`). Array types are spelled with one `[]` per dimension (`pkg.Node[][]`).
//!
//! ## Examples
//! ```rust
//! use ptk_core::names;
//!
//! assert_eq!(names::simple_name("pkg.Outer$Inner"), "Outer$Inner");
//! assert_eq!(names::split_array_suffix("Node[][]"), ("Node", 2));
//! assert_eq!(names::array_suffix(2), "[][]");
//! ```

use crate::lang::conventions::{ARRAY_SUFFIX, IMPL_SUFFIX, NESTED_SEPARATOR, PATH_SEPARATOR};

/// Return the final path component of a qualified identifier.
///
/// ## Notes
/// - Nested parts are kept: the simple name of `pkg.Outer$Inner` is `Outer$Inner`, which is what a
///   namespace lookup (`prefix + "." + simple`) needs to find the type again.
pub fn simple_name(qualified: &str) -> &str {
    match qualified.rfind(PATH_SEPARATOR) {
        Some(i) => &qualified[i + 1..],
        None => qualified,
    }
}

/// Check whether a name looks fully qualified rather than a bare short name.
pub fn is_qualified(name: &str) -> bool {
    name.contains(PATH_SEPARATOR)
}

/// Join a namespace prefix and a simple name into a qualified identifier.
pub fn join(prefix: &str, simple: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + 1 + simple.len());
    out.push_str(prefix);
    out.push(PATH_SEPARATOR);
    out.push_str(simple);
    out
}

/// Split trailing `[]` pairs off a name.
///
/// ## Returns
/// - `(base, dims)`: the name without its array suffix and the number of dimensions removed.
///
/// ## Notes
/// - Unbalanced trailing brackets (`Node]`, `Node[`) are left in `base` untouched.
pub fn split_array_suffix(name: &str) -> (&str, usize) {
    let mut base = name;
    let mut dims = 0;
    while let Some(stripped) = base.strip_suffix(ARRAY_SUFFIX) {
        base = stripped;
        dims += 1;
    }
    (base, dims)
}

/// Build the `[]…` suffix for `dims` array dimensions.
pub fn array_suffix(dims: usize) -> String {
    ARRAY_SUFFIX.repeat(dims)
}

/// Check whether the simple name of `qualified` carries the implementation suffix.
pub fn has_impl_suffix(qualified: &str) -> bool {
    simple_name(qualified).ends_with(IMPL_SUFFIX)
}

/// Conventional interface identifiers for an implementation type, most specific first.
///
/// ## Returns
/// - For `pkg.Node$NodeImpl`: `["pkg.Node", "pkg.Node$Node"]`.
/// - For `pkg.NodeImpl`: `["pkg.Node"]`.
/// - Empty if the simple name does not end with the implementation suffix.
///
/// ## Notes
/// - The nested form (outer type of a `$…Impl` type) is tried first; an implementation need not be
///   nested, so the textual form follows.
pub fn interface_candidates(qualified: &str) -> Vec<String> {
    if !has_impl_suffix(qualified) {
        return Vec::new();
    }
    let mut candidates = Vec::with_capacity(2);
    if let Some((outer, _)) = qualified.split_once(NESTED_SEPARATOR) {
        candidates.push(outer.to_string());
    }
    if let Some(stripped) = qualified.strip_suffix(IMPL_SUFFIX) {
        if !stripped.is_empty() && !candidates.iter().any(|c| c == stripped) {
            candidates.push(stripped.to_string());
        }
    }
    candidates
}

/// Conventional implementation identifiers for an interface type, most specific first.
///
/// ## Returns
/// - For `pkg.Node`: `["pkg.Node$NodeImpl", "pkg.NodeImpl"]`.
pub fn implementation_candidates(qualified: &str) -> [String; 2] {
    let innermost = simple_name(qualified)
        .rsplit(NESTED_SEPARATOR)
        .next()
        .unwrap_or_default();
    [
        format!("{qualified}{NESTED_SEPARATOR}{innermost}{IMPL_SUFFIX}"),
        format!("{qualified}{IMPL_SUFFIX}"),
    ]
}
