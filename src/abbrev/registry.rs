//! Static type registry
//!
//! The abbreviation service never discovers types on its own. It asks a [`TypeProvider`] whether a
//! qualified identifier names a type and how two types relate. [`TypeRegistry`] is the default
//! provider: a table built once by the caller at startup.

use std::collections::{HashMap, HashSet};

use ptk_core::lang::primitives;

use super::types::TypeDescriptor;

/// Source of type metadata for the abbreviation service.
///
/// A failed [`TypeProvider::lookup`] is the normal "not found" signal while probing namespaces,
/// not an error.
pub trait TypeProvider {
    /// Find the descriptor for a fully-qualified identifier.
    fn lookup(&self, qualified: &str) -> Option<&TypeDescriptor>;

    fn contains(&self, qualified: &str) -> bool {
        self.lookup(qualified).is_some()
    }

    /// Check whether a value of type `from` can be used where `to` is expected.
    ///
    /// True for identical identifiers and for any `to` reachable through the supertype chain of
    /// `from`. Unknown identifiers are only assignable to themselves.
    fn is_assignable(&self, from: &str, to: &str) -> bool {
        if from == to {
            return true;
        }
        let mut visited: HashSet<&str> = HashSet::new();
        let mut pending: Vec<&str> = vec![from];
        while let Some(current) = pending.pop() {
            if !visited.insert(current) {
                continue;
            }
            let Some(desc) = self.lookup(current) else {
                continue;
            };
            for supertype in &desc.supertypes {
                if supertype == to {
                    return true;
                }
                pending.push(supertype.as_str());
            }
        }
        false
    }
}

impl<P: TypeProvider + ?Sized> TypeProvider for &P {
    fn lookup(&self, qualified: &str) -> Option<&TypeDescriptor> {
        (**self).lookup(qualified)
    }
}

/// Table of known types keyed by qualified identifier.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, TypeDescriptor>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Create a registry holding the primitive scalar kinds.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for info in primitives::PRIMITIVE_KINDS {
            registry.register(TypeDescriptor::primitive(info.canonical));
        }
        registry
    }

    /// Create a registry without any types, not even primitives.
    pub fn empty() -> Self {
        Self { types: HashMap::new() }
    }

    /// Add or replace a type, returning the descriptor it replaced.
    pub fn register(&mut self, desc: TypeDescriptor) -> Option<TypeDescriptor> {
        self.types.insert(desc.name.clone(), desc)
    }

    /// Builder-style [`Self::register`].
    pub fn with_type(mut self, desc: TypeDescriptor) -> Self {
        self.register(desc);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }
}

impl Extend<TypeDescriptor> for TypeRegistry {
    fn extend<I: IntoIterator<Item = TypeDescriptor>>(&mut self, iter: I) {
        for desc in iter {
            self.register(desc);
        }
    }
}

impl FromIterator<TypeDescriptor> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}

impl TypeProvider for TypeRegistry {
    fn lookup(&self, qualified: &str) -> Option<&TypeDescriptor> {
        self.types.get(qualified)
    }
}
