//! Registry manifests
//!
//! A manifest is a JSON file naming the namespaces to abbreviate against and the types they
//! contain:
//!
//! ```json
//! {
//!   "strict": true,
//!   "namespaces": [{ "prefix": "de.fau.pkg1", "alias": "ptk", "uri": "http://example.org/pkg1" }],
//!   "types": [{ "name": "de.fau.pkg1.Node", "kind": "interface", "implementation": "de.fau.pkg1.NodeImpl" }]
//! }
//! ```
//!
//! Namespaces given on the command line are appended after the manifest's, so the manifest's
//! namespaces take priority.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::abbrev::{NamespaceRegistration, TypeDescriptor, TypeRegistry};

/// Environment variable consulted when no `--manifest` is given
pub const MANIFEST_ENV: &str = "PTK_MANIFEST";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid namespace `{0}`, expected PREFIX=ALIAS or PREFIX=ALIAS=URI")]
    InvalidNamespace(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryManifest {
    /// Overrides strictness unless `--lenient` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default)]
    pub namespaces: Vec<NamespaceRegistration>,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
}

impl RegistryManifest {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Type registry holding the primitives plus every listed type.
    pub fn registry(&self) -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.extend(self.types.iter().cloned());
        registry
    }
}

/// Locate the manifest: an explicit path wins, then [`MANIFEST_ENV`].
pub fn find_manifest(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    match env::var(MANIFEST_ENV) {
        Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// Parse a `PREFIX=ALIAS[=URI]` command-line namespace.
///
/// Everything after the second `=` belongs to the URI, which may itself contain `=`.
pub fn parse_namespace(spec: &str) -> Result<NamespaceRegistration, ManifestError> {
    let mut parts = spec.splitn(3, '=');
    let prefix = parts.next().unwrap_or_default().trim();
    let alias = parts.next().unwrap_or_default().trim();
    if prefix.is_empty() || alias.is_empty() {
        return Err(ManifestError::InvalidNamespace(spec.to_string()));
    }

    let registration = NamespaceRegistration::new(prefix, alias);
    Ok(match parts.next().map(str::trim) {
        Some("") => return Err(ManifestError::InvalidNamespace(spec.to_string())),
        Some(uri) => registration.with_uri(uri),
        None => registration,
    })
}
