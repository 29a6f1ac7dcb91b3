//! Property-based tests for name abbreviation
//!
//! These tests use proptest to verify invariants across many randomly
//! generated registries, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use ptk_utils::abbrev::{NameAbbrevService, NamespaceRegistration, TypeDescriptor, TypeRef, TypeRegistry};

// =============================================================================
// Strategies
// =============================================================================

/// Package names like `pkg0`, `pkg1`, ...
fn packages() -> impl Strategy<Value = Vec<String>> {
    (1usize..5).prop_map(|n| (0..n).map(|i| format!("pkg{i}")).collect())
}

/// A small pool of simple names so collisions between packages are common
fn simple_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Node", "Text", "List", "Value", "Item"]).prop_map(str::to_string)
}

/// Packages plus a non-empty set of qualified class names spread over them
fn registry_case() -> impl Strategy<Value = (Vec<String>, Vec<String>)> {
    packages().prop_flat_map(|pkgs| {
        let n = pkgs.len();
        let types = prop::collection::vec((0..n, simple_name()), 1..12).prop_map({
            let pkgs = pkgs.clone();
            move |entries| {
                let mut names: Vec<String> = entries
                    .into_iter()
                    .map(|(i, simple)| format!("{}.{simple}", pkgs[i]))
                    .collect();
                names.sort();
                names.dedup();
                names
            }
        });
        (Just(pkgs), types)
    })
}

fn build(pkgs: &[String], types: &[String]) -> NameAbbrevService {
    let registry: TypeRegistry = types.iter().map(|t| TypeDescriptor::class(t.as_str())).collect();
    NameAbbrevService::new(
        registry,
        pkgs.iter().map(|p| NamespaceRegistration::new(p.as_str(), "ptk")),
    )
}

/// One alias per package, each carrying its own URI
fn build_with_uris(pkgs: &[String], types: &[String]) -> NameAbbrevService {
    let registry: TypeRegistry = types.iter().map(|t| TypeDescriptor::class(t.as_str())).collect();
    NameAbbrevService::new(
        registry,
        pkgs.iter()
            .enumerate()
            .map(|(i, p)| NamespaceRegistration::new(p.as_str(), format!("a{i}")).with_uri(format!("urn:{p}"))),
    )
}

// =============================================================================
// Abbreviation Properties
// =============================================================================

proptest! {
    /// Property: every abbreviation resolves back to the type it came from
    #[test]
    fn abbreviation_resolves_back((pkgs, types) in registry_case(), dims in 0usize..3) {
        let mut service = build(&pkgs, &types);
        for ty in &types {
            let original = TypeRef::new(ty.as_str()).array_of(dims);
            let abbrev = service.abbreviate(&original).expect("registered type must abbreviate");
            prop_assert_eq!(abbrev.alias.as_str(), "ptk");
            let resolved = service.resolve(&abbrev.short).expect("abbreviation must resolve");
            prop_assert_eq!(resolved, original);
        }
    }

    /// Property: a fresh service with the same namespace order resolves what another service wrote
    #[test]
    fn same_order_resolves_without_shared_cache((pkgs, types) in registry_case()) {
        let mut writer = build(&pkgs, &types);
        let written: Vec<String> = types
            .iter()
            .map(|t| writer.abbreviate_name(t).expect("registered type must abbreviate").short)
            .collect();

        let mut reader = build(&pkgs, &types);
        for (ty, short) in types.iter().zip(&written) {
            let resolved = reader.resolve(short).expect("abbreviation must resolve");
            prop_assert_eq!(&resolved.element, ty);
        }
    }

    /// Property: abbreviating in reverse order yields the same abbreviations
    #[test]
    fn abbreviation_independent_of_call_order((pkgs, types) in registry_case()) {
        let mut forward = build(&pkgs, &types);
        let mut backward = build(&pkgs, &types);

        let a: Vec<_> = types.iter().map(|t| forward.abbreviate_name(t).expect("abbreviate")).collect();
        let mut b: Vec<_> = types.iter().rev().map(|t| backward.abbreviate_name(t).expect("abbreviate")).collect();
        b.reverse();
        prop_assert_eq!(a, b);
    }

    /// Property: only the first namespace containing a simple name gets the bare short form
    #[test]
    fn short_names_are_unique((pkgs, types) in registry_case()) {
        let mut service = build(&pkgs, &types);
        let mut bare = std::collections::HashSet::new();
        for ty in &types {
            let abbrev = service.abbreviate_name(ty).expect("abbreviate");
            if !abbrev.short.contains('.') {
                prop_assert!(bare.insert(abbrev.short.clone()), "duplicate short name {}", abbrev.short);
            }
        }
    }

    /// Property: resolving qualified names between abbreviations never changes what gets written
    #[test]
    fn resolution_does_not_change_abbreviations((pkgs, types) in registry_case()) {
        let mut quiet = build_with_uris(&pkgs, &types);
        let mut busy = build_with_uris(&pkgs, &types);

        for ty in &types {
            let expected = quiet.abbreviate_name(ty).expect("abbreviate");
            busy.resolve(ty).expect("qualified name must resolve");
            let first = busy.abbreviate_name(ty).expect("abbreviate");
            busy.resolve(ty).expect("qualified name must resolve");
            let again = busy.abbreviate_name(ty).expect("abbreviate");
            prop_assert_eq!(&first, &expected);
            prop_assert_eq!(&again, &expected);
        }
    }
}
