//! The name abbreviation service
//!
//! Abbreviates fully-qualified type identifiers to `alias:short` tags and resolves tags back to
//! types, using an ordered list of namespaces to decide which type owns a short name.

use std::collections::HashMap;
use std::fmt;

use indexmap::IndexMap;
use ptk_core::lang::conventions::{BUILTIN_ALIAS, BUILTIN_NAMESPACE_PREFIX, BUILTIN_NAMESPACE_URI};
use ptk_core::lang::primitives;
use ptk_core::names;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::cache::{AbbrevTag, BiCache};
use super::errors::{AbbrevError, AbbrevResult};
use super::registry::{TypeProvider, TypeRegistry};
use super::types::TypeRef;

/// One namespace eligible for abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceRegistration {
    /// Canonical path prefix of the grouping (`de.fau.pkg1`)
    pub prefix: String,
    /// Short alias used in tags (`ptk`)
    pub alias: String,
    /// Namespace URI reported through [`NameAbbrevService::used_prefixes`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl NamespaceRegistration {
    pub fn new(prefix: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            alias: alias.into(),
            uri: None,
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    fn builtin() -> Self {
        Self::new(BUILTIN_NAMESPACE_PREFIX, BUILTIN_ALIAS).with_uri(BUILTIN_NAMESPACE_URI)
    }
}

/// Result of abbreviating a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Abbreviation {
    /// Simple or fully-qualified name, with one `[]` per array dimension
    pub short: String,
    /// Alias of the owning namespace; empty for an unregistered type in lenient mode
    pub alias: String,
}

impl Abbreviation {
    pub fn new(short: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            short: short.into(),
            alias: alias.into(),
        }
    }

    /// The tag form, if the abbreviation has an alias.
    pub fn tag(&self) -> Option<AbbrevTag> {
        (!self.alias.is_empty()).then(|| AbbrevTag::new(self.alias.as_str(), self.short.as_str()))
    }
}

impl fmt::Display for Abbreviation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag() {
            Some(tag) => write!(f, "{tag}"),
            None => write!(f, "{}", self.short),
        }
    }
}

/// Abbreviates type identifiers against an ordered set of namespaces.
///
/// The order of namespaces is vitally important: if [`resolve`](Self::resolve) runs against a
/// service built with a different order than the one that produced an abbreviation, a short name
/// may resolve to the wrong type.
///
/// ## Examples
///
/// ```rust
/// use ptk_utils::abbrev::{NameAbbrevService, NamespaceRegistration, TypeDescriptor, TypeRef, TypeRegistry};
///
/// let registry = TypeRegistry::new()
///     .with_type(TypeDescriptor::class("pkg1.ClassA"))
///     .with_type(TypeDescriptor::class("pkg2.ClassA"));
/// let mut service = NameAbbrevService::new(
///     registry,
///     [NamespaceRegistration::new("pkg1", "ptk"), NamespaceRegistration::new("pkg2", "ptk")],
/// );
///
/// let a1 = service.abbreviate(&TypeRef::new("pkg1.ClassA")).unwrap();
/// let a2 = service.abbreviate(&TypeRef::new("pkg2.ClassA")).unwrap();
/// assert_eq!(a1.to_string(), "ptk:ClassA");
/// assert_eq!(a2.to_string(), "ptk:pkg2.ClassA");
/// assert_eq!(service.resolve("pkg2.ClassA").unwrap(), TypeRef::new("pkg2.ClassA"));
/// ```
#[derive(Debug)]
pub struct NameAbbrevService<P = TypeRegistry> {
    provider: P,
    namespaces: Vec<NamespaceRegistration>,
    strict: bool,
    cache: BiCache,
    /// Subtypes written with their supertype's tag; forward only, the tag still resolves to the
    /// supertype
    through_supertype: HashMap<String, AbbrevTag>,
    /// alias -> URI, in first-registration order
    used_prefixes: IndexMap<String, String>,
}

impl<P: TypeProvider> NameAbbrevService<P> {
    /// Create a strict service.
    pub fn new(provider: P, namespaces: impl IntoIterator<Item = NamespaceRegistration>) -> Self {
        Self::with_strictness(provider, namespaces, true)
    }

    /// Create a service that falls back to qualified names for unregistered types.
    pub fn lenient(provider: P, namespaces: impl IntoIterator<Item = NamespaceRegistration>) -> Self {
        Self::with_strictness(provider, namespaces, false)
    }

    pub fn with_strictness(
        provider: P,
        namespaces: impl IntoIterator<Item = NamespaceRegistration>,
        strict: bool,
    ) -> Self {
        let mut all = vec![NamespaceRegistration::builtin()];
        all.extend(namespaces);

        let mut used_prefixes = IndexMap::new();
        for ns in &all {
            if let Some(uri) = &ns.uri {
                used_prefixes.insert(ns.alias.clone(), uri.clone());
            }
        }

        let mut cache = BiCache::new();
        for info in primitives::PRIMITIVE_KINDS {
            cache.insert(info.canonical, AbbrevTag::new(BUILTIN_ALIAS, info.canonical));
        }

        debug!(
            namespaces = all.len(),
            aliases = used_prefixes.len(),
            strict,
            "created name abbreviation service"
        );

        Self {
            provider,
            namespaces: all,
            strict,
            cache,
            through_supertype: HashMap::new(),
            used_prefixes,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Registered namespaces in priority order, built-in grouping first.
    pub fn namespaces(&self) -> &[NamespaceRegistration] {
        &self.namespaces
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Aliases that carry a URI, mapped to that URI.
    pub fn used_prefixes(&self) -> &IndexMap<String, String> {
        &self.used_prefixes
    }

    /// Abbreviate a spelled type such as `pkg.Node[]`.
    pub fn abbreviate_name(&mut self, spelled: &str) -> AbbrevResult<Abbreviation> {
        self.abbreviate(&TypeRef::parse(spelled))
    }

    /// Return the abbreviated form of a type.
    ///
    /// ## Errors
    ///
    /// [`AbbrevError::UnregisteredType`] in strict mode when no namespace contains a type with the
    /// same simple name.
    #[tracing::instrument(level = "trace", skip(self, ty), fields(ty = %ty))]
    pub fn abbreviate(&mut self, ty: &TypeRef) -> AbbrevResult<Abbreviation> {
        let suffix = names::array_suffix(ty.dims);
        let element = self.interface_for(&ty.element);

        if let Some(tag) = self.through_supertype.get(&element).or_else(|| self.cache.tag_of(&element)) {
            trace!(%tag, "abbreviation cache hit");
            return Ok(Abbreviation::new(format!("{}{suffix}", tag.short), tag.alias.as_str()));
        }

        let simple = names::simple_name(&element).to_string();

        // The short name may already belong to another type under some alias.
        let taken_under = self
            .used_prefixes
            .keys()
            .find(|alias| self.cache.contains_tag(&AbbrevTag::new(alias.as_str(), simple.as_str())))
            .cloned();
        if let Some(alias) = taken_under {
            debug!(%element, %alias, "short name already taken, using qualified name");
            self.cache.insert(element.as_str(), AbbrevTag::new(alias.as_str(), element.as_str()));
            return Ok(Abbreviation::new(format!("{element}{suffix}"), alias));
        }

        // The first namespace containing the simple name owns it.
        for ns in &self.namespaces {
            let owner = names::join(&ns.prefix, &simple);
            if !self.provider.contains(&owner) {
                continue;
            }
            self.cache.insert(owner.as_str(), AbbrevTag::new(ns.alias.as_str(), simple.as_str()));

            if owner == element {
                trace!(%owner, alias = %ns.alias, "namespace owns short name");
                return Ok(Abbreviation::new(format!("{simple}{suffix}"), ns.alias.as_str()));
            }
            if self.provider.is_assignable(&element, &owner) {
                debug!(%element, %owner, "abbreviating through supertype");
                self.through_supertype
                    .insert(element.clone(), AbbrevTag::new(ns.alias.as_str(), simple.as_str()));
                return Ok(Abbreviation::new(format!("{simple}{suffix}"), ns.alias.as_str()));
            }

            debug!(%element, %owner, "short name owned by another type, using qualified name");
            self.cache.insert(element.as_str(), AbbrevTag::new(ns.alias.as_str(), element.as_str()));
            return Ok(Abbreviation::new(format!("{element}{suffix}"), ns.alias.as_str()));
        }

        if !self.strict {
            debug!(%element, "type not in any namespace, using qualified name");
            return Ok(Abbreviation::new(format!("{element}{suffix}"), ""));
        }
        Err(AbbrevError::unregistered(element))
    }

    /// Resolve an abbreviated or fully-qualified name (optionally array-suffixed) to its type.
    ///
    /// Interfaces resolve to their concrete implementation.
    ///
    /// ## Errors
    ///
    /// [`AbbrevError::TypeNotFound`] if no namespace yields a match, if a qualified name is not a
    /// known type, or if a resolved interface has no implementation.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve(&mut self, name: &str) -> AbbrevResult<TypeRef> {
        let (base, dims) = names::split_array_suffix(name);
        let element = self.resolve_element(base)?;
        let concrete = self.implementation_for(element)?;
        Ok(TypeRef::new(concrete).array_of(dims))
    }

    fn resolve_element(&mut self, base: &str) -> AbbrevResult<String> {
        for alias in self.used_prefixes.keys() {
            let tag = AbbrevTag::new(alias.as_str(), base);
            if let Some(ty) = self.cache.type_of(&tag) {
                trace!(%tag, "resolution cache hit");
                return Ok(ty.to_string());
            }
            if names::is_qualified(base) {
                // Not cached: the tag a later abbreviation picks must not depend on resolution.
                if !self.provider.contains(base) {
                    return Err(AbbrevError::not_found(base));
                }
                return Ok(base.to_string());
            }
        }

        for ns in &self.namespaces {
            let candidate = names::join(&ns.prefix, base);
            if self.provider.contains(&candidate) {
                trace!(%candidate, alias = %ns.alias, "resolved through namespace");
                self.cache.insert(candidate.as_str(), AbbrevTag::new(ns.alias.as_str(), base));
                return Ok(candidate);
            }
        }

        Err(AbbrevError::not_found(base))
    }

    /// Swap an implementation type for its interface, if it has one it is assignable to.
    fn interface_for(&self, element: &str) -> String {
        let explicit = self.provider.lookup(element).and_then(|desc| desc.interface.clone());
        let interface = match explicit {
            Some(interface) => Some(interface),
            None => names::interface_candidates(element)
                .into_iter()
                .find(|candidate| self.provider.contains(candidate)),
        };
        match interface {
            Some(interface) if self.provider.is_assignable(element, &interface) => {
                trace!(%element, %interface, "abbreviating through interface");
                interface
            }
            _ => element.to_string(),
        }
    }

    /// Swap an interface for its concrete implementation.
    fn implementation_for(&self, ty: String) -> AbbrevResult<String> {
        let Some(desc) = self.provider.lookup(&ty) else {
            return Ok(ty);
        };
        if !desc.is_interface() {
            return Ok(ty);
        }
        if let Some(implementation) = &desc.implementation {
            return Ok(implementation.clone());
        }
        let [nested, textual] = names::implementation_candidates(&ty);
        if self.provider.contains(&nested) {
            return Ok(nested);
        }
        if self.provider.contains(&textual) {
            return Ok(textual);
        }
        warn!(interface = %ty, "resolved interface has no implementation");
        Err(AbbrevError::not_found(textual))
    }
}
