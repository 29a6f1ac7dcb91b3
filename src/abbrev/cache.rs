//! Bidirectional abbreviation cache
//!
//! Maps an element type identifier to its `alias:short` tag and back. Both directions are updated
//! together: re-inserting a type or a tag drops whatever it was paired with before, so the two maps
//! always describe the same one-to-one relation.

use std::collections::HashMap;
use std::fmt;

use ptk_core::lang::conventions::TAG_SEPARATOR;

/// An abbreviated type tag: alias plus short (or fully-qualified) name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbbrevTag {
    pub alias: String,
    pub short: String,
}

impl AbbrevTag {
    pub fn new(alias: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            short: short.into(),
        }
    }

    /// Parse `alias:short`; the alias ends at the first separator.
    pub fn parse(tag: &str) -> Option<Self> {
        tag.split_once(TAG_SEPARATOR).map(|(alias, short)| Self::new(alias, short))
    }
}

impl fmt::Display for AbbrevTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.alias, TAG_SEPARATOR, self.short)
    }
}

/// One-to-one map between type identifiers and tags.
#[derive(Debug, Default, Clone)]
pub struct BiCache {
    by_type: HashMap<String, AbbrevTag>,
    by_tag: HashMap<AbbrevTag, String>,
}

impl BiCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair `ty` with `tag`, unpairing any previous partner of either side.
    pub fn insert(&mut self, ty: impl Into<String>, tag: AbbrevTag) {
        let ty = ty.into();
        if let Some(old_tag) = self.by_type.remove(&ty) {
            self.by_tag.remove(&old_tag);
        }
        if let Some(old_ty) = self.by_tag.remove(&tag) {
            self.by_type.remove(&old_ty);
        }
        self.by_type.insert(ty.clone(), tag.clone());
        self.by_tag.insert(tag, ty);
    }

    pub fn tag_of(&self, ty: &str) -> Option<&AbbrevTag> {
        self.by_type.get(ty)
    }

    pub fn type_of(&self, tag: &AbbrevTag) -> Option<&str> {
        self.by_tag.get(tag).map(String::as_str)
    }

    pub fn contains_tag(&self, tag: &AbbrevTag) -> bool {
        self.by_tag.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_display_and_parse() {
        let tag = AbbrevTag::new("ptk", "pkg2.ClassB");
        assert_eq!(tag.to_string(), "ptk:pkg2.ClassB");
        assert_eq!(AbbrevTag::parse("ptk:pkg2.ClassB"), Some(tag));
        assert_eq!(AbbrevTag::parse("ClassB"), None);
    }

    #[test]
    fn test_insert_both_directions() {
        let mut cache = BiCache::new();
        cache.insert("pkg1.ClassA", AbbrevTag::new("ptk", "ClassA"));
        assert_eq!(cache.tag_of("pkg1.ClassA"), Some(&AbbrevTag::new("ptk", "ClassA")));
        assert_eq!(cache.type_of(&AbbrevTag::new("ptk", "ClassA")), Some("pkg1.ClassA"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reinsert_type_drops_old_tag() {
        let mut cache = BiCache::new();
        cache.insert("pkg1.ClassA", AbbrevTag::new("ptk", "ClassA"));
        cache.insert("pkg1.ClassA", AbbrevTag::new("ptk", "pkg1.ClassA"));
        assert!(!cache.contains_tag(&AbbrevTag::new("ptk", "ClassA")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reinsert_tag_drops_old_type() {
        let mut cache = BiCache::new();
        cache.insert("pkg1.ClassB", AbbrevTag::new("ptk", "ClassB"));
        cache.insert("pkg2.ClassB", AbbrevTag::new("ptk", "ClassB"));
        assert_eq!(cache.tag_of("pkg1.ClassB"), None);
        assert_eq!(cache.type_of(&AbbrevTag::new("ptk", "ClassB")), Some("pkg2.ClassB"));
        assert_eq!(cache.len(), 1);
    }
}
