use miette::Diagnostic;
use thiserror::Error;

/// Errors produced by [`super::NameAbbrevService`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum AbbrevError {
    /// Strict abbreviation of a type that no configured namespace contains.
    #[error("type `{name}` is not part of any registered namespace")]
    #[diagnostic(
        code(ptk::abbrev::unregistered_type),
        help("register a namespace containing the type, or construct the service in lenient mode")
    )]
    UnregisteredType { name: String },

    /// Resolution of a name that matches no type in any configured namespace.
    #[error("abbreviated type name `{name}` was not found in any registered namespace")]
    #[diagnostic(
        code(ptk::abbrev::type_not_found),
        help("resolve with the same namespace list, in the same order, that produced the abbreviation")
    )]
    TypeNotFound { name: String },
}

impl AbbrevError {
    pub fn unregistered(name: impl Into<String>) -> Self {
        AbbrevError::UnregisteredType { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        AbbrevError::TypeNotFound { name: name.into() }
    }
}

/// Result alias for abbreviation operations.
pub type AbbrevResult<T> = Result<T, AbbrevError>;
