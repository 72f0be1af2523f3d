//! Error handling for the begone CLI

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Credential resolution failed: {0}")]
    Resolve(#[from] begone_core::ResolveError),

    #[error("Payload generator error: {0}")]
    Generator(#[from] begone_core::GeneratorError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),
}

impl CliError {
    /// Suggested next step for errors the user can fix from the command line
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::Resolve(err) => err
                .missing_field()
                .map(|field| format!("pass --{field} or run `begone login` to save it")),
            _ => None,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use begone_core::{CredentialField, ResolveError};

    #[test]
    fn test_missing_credential_has_hint() {
        let err = CliError::from(ResolveError::MissingCredential(CredentialField::Password));
        assert_eq!(
            err.hint().as_deref(),
            Some("pass --password or run `begone login` to save it")
        );
        assert!(CliError::Config("bad".to_string()).hint().is_none());
    }
}
