use std::collections::HashMap;

use ptk_core::lang::conventions;
use ptk_core::lang::primitives;
use ptk_core::names;

#[test]
fn primitive_spellings_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, primitives::PrimitiveKindId> = HashMap::new();

    for info in primitives::PRIMITIVE_KINDS {
        assert_eq!(
            primitives::from_str(info.canonical),
            Some(info.id),
            "primitive spelling not resolvable: {}",
            info.canonical
        );
        assert_eq!(
            primitives::as_str(info.id),
            info.canonical,
            "primitive as_str mismatch for {:?}",
            info.id
        );
        if let Some(prev) = seen.insert(info.canonical, info.id) {
            panic!(
                "duplicate primitive spelling {:?}: {:?} and {:?}",
                info.canonical, prev, info.id
            );
        }
    }
}

#[test]
fn primitive_spellings_are_bare_names() {
    for info in primitives::PRIMITIVE_KINDS {
        assert!(
            !names::is_qualified(info.canonical),
            "primitive spelling must not be qualified: {}",
            info.canonical
        );
        assert_eq!(names::split_array_suffix(info.canonical), (info.canonical, 0));
        assert!(!info.canonical.contains(conventions::TAG_SEPARATOR));
    }
}

#[test]
fn builtin_alias_is_a_valid_tag_prefix() {
    assert!(!conventions::BUILTIN_ALIAS.is_empty());
    assert!(!conventions::BUILTIN_ALIAS.contains(conventions::TAG_SEPARATOR));
    assert!(!conventions::BUILTIN_ALIAS.contains(conventions::PATH_SEPARATOR));
}

#[test]
fn core_crate_has_no_dependencies() {
    let manifest = include_str!("../Cargo.toml");
    let mut in_dependencies = false;

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }
        if in_dependencies && !line.is_empty() && !line.starts_with('#') {
            panic!("`ptk_core` must stay dependency-free, found: {line}");
        }
    }
}
