//! Command-line option errors that clap cannot detect on its own
//!
//! Some options are required only when no manifest supplies them, so the check happens after the
//! manifest has been merged with the command line.

use thiserror::Error;

/// One or more required options were given neither on the command line nor in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required option {}", option_list(.options))]
pub struct MissingOptionError {
    pub options: Vec<String>,
}

impl MissingOptionError {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }
}

/// Render options as `['a', 'b']`.
fn option_list(options: &[String]) -> String {
    let quoted: Vec<String> = options.iter().map(|o| format!("'{o}'")).collect();
    format!("[{}]", quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_option_message() {
        let err = MissingOptionError::new(["namespace"]);
        assert_eq!(err.to_string(), "Missing required option ['namespace']");
    }

    #[test]
    fn test_multiple_options_message() {
        let err = MissingOptionError::new(["manifest", "namespace"]);
        assert_eq!(err.to_string(), "Missing required option ['manifest', 'namespace']");
    }
}
