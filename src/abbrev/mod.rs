//! Type name abbreviation
//!
//! If a known subset of types is spread over a known, ordered set of namespaces, most type names can
//! be written without their namespace prefix and still be unambiguous. This module abbreviates
//! fully-qualified type identifiers to compact `alias:short` tags and resolves such tags back.
//!
//! ## Components
//!
//! - [`TypeRegistry`] / [`TypeProvider`]: static type metadata supplied by the caller
//! - [`NameAbbrevService`]: the abbreviation/resolution algorithm and its cache
//! - [`AbbrevError`]: the two failure kinds
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut service = NameAbbrevService::new(registry, namespaces);
//! let abbrev = service.abbreviate(&TypeRef::new("pkg1.ClassA"))?;
//! let ty = service.resolve(&abbrev.short)?;
//! ```

mod cache;
mod errors;
mod registry;
mod service;
mod types;

pub use cache::{AbbrevTag, BiCache};
pub use errors::{AbbrevError, AbbrevResult};
pub use registry::{TypeProvider, TypeRegistry};
pub use service::{Abbreviation, NameAbbrevService, NamespaceRegistration};
pub use types::{TypeDescriptor, TypeKind, TypeRef};
