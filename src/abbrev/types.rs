//! Type descriptors and references used by the abbreviation service.

use std::fmt;

use ptk_core::names;
use serde::{Deserialize, Serialize};

/// Kind of a registered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    #[default]
    Class,
    Interface,
    Primitive,
}

/// Static metadata for one type, supplied by the caller instead of discovered reflectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully-qualified identifier (`pkg.Outer$Inner`)
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    /// Direct supertypes (superclass and implemented interfaces)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supertypes: Vec<String>,
    /// Concrete counterpart of an interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<String>,
    /// Interface counterpart of an implementation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
}

impl TypeDescriptor {
    fn with_kind(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            supertypes: Vec::new(),
            implementation: None,
            interface: None,
        }
    }

    /// Describe a concrete class.
    pub fn class(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Class)
    }

    /// Describe an interface.
    pub fn interface(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Interface)
    }

    /// Describe a primitive scalar kind.
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::with_kind(name, TypeKind::Primitive)
    }

    /// Add a direct supertype.
    pub fn extends(mut self, supertype: impl Into<String>) -> Self {
        self.supertypes.push(supertype.into());
        self
    }

    /// Link an interface to its concrete counterpart.
    pub fn implemented_by(mut self, implementation: impl Into<String>) -> Self {
        self.implementation = Some(implementation.into());
        self
    }

    /// Link an implementation to its interface; also records the interface as a supertype.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        let interface = interface.into();
        if !self.supertypes.contains(&interface) {
            self.supertypes.push(interface.clone());
        }
        self.interface = Some(interface);
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    /// The final path component of [`Self::name`].
    pub fn simple_name(&self) -> &str {
        names::simple_name(&self.name)
    }
}

/// A type identifier plus array dimensionality.
///
/// The element identifier is what the service caches and looks up; dimensionality only exists at
/// the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub element: String,
    pub dims: usize,
}

impl TypeRef {
    pub fn new(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            dims: 0,
        }
    }

    /// Wrap this type in `dims` further array dimensions.
    pub fn array_of(mut self, dims: usize) -> Self {
        self.dims += dims;
        self
    }

    /// Parse a spelled type such as `pkg.Node[][]`.
    pub fn parse(spelled: &str) -> Self {
        let (element, dims) = names::split_array_suffix(spelled);
        Self {
            element: element.to_string(),
            dims,
        }
    }

    pub fn is_array(&self) -> bool {
        self.dims > 0
    }

    /// The same element type without array dimensions.
    pub fn element_type(&self) -> TypeRef {
        TypeRef::new(self.element.clone())
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.element, names::array_suffix(self.dims))
    }
}

impl From<&str> for TypeRef {
    fn from(spelled: &str) -> Self {
        TypeRef::parse(spelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_display_roundtrip() {
        let ty = TypeRef::new("pkg.Node").array_of(2);
        assert_eq!(ty.to_string(), "pkg.Node[][]");
        assert_eq!(TypeRef::parse("pkg.Node[][]"), ty);
    }

    #[test]
    fn test_type_ref_element_type_drops_dims() {
        let ty = TypeRef::parse("int[]");
        assert!(ty.is_array());
        assert_eq!(ty.element_type(), TypeRef::new("int"));
    }

    #[test]
    fn test_implements_records_supertype_once() {
        let desc = TypeDescriptor::class("pkg.NodeImpl")
            .extends("pkg.Node")
            .implements("pkg.Node");
        assert_eq!(desc.supertypes, vec!["pkg.Node".to_string()]);
        assert_eq!(desc.interface.as_deref(), Some("pkg.Node"));
    }

    #[test]
    fn test_descriptor_deserializes_with_defaults() {
        let desc: TypeDescriptor = serde_json::from_str(r#"{ "name": "pkg.ClassA" }"#).unwrap();
        assert_eq!(desc, TypeDescriptor::class("pkg.ClassA"));
        assert_eq!(desc.simple_name(), "ClassA");
    }

    #[test]
    fn test_descriptor_kind_is_lowercase() {
        let desc: TypeDescriptor =
            serde_json::from_str(r#"{ "name": "pkg.Node", "kind": "interface", "implementation": "pkg.NodeImpl" }"#)
                .unwrap();
        assert!(desc.is_interface());
        assert_eq!(desc.implementation.as_deref(), Some("pkg.NodeImpl"));
    }
}
