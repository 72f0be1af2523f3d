//! Error types for credential resolution and payload generation
//!
//! Collaborator failures (config store, prompter, agent builder) are kept as
//! boxed sources so callers can still inspect the original cause.

use crate::credentials::CredentialField;

/// Boxed error returned by an external collaborator
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure while resolving credentials or building the agent
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("loading persisted credentials: {0}")]
    ConfigLoad(#[source] BoxError),

    #[error("{0} not provided and not previously saved")]
    MissingCredential(CredentialField),

    #[error("querying for missing values: {0}")]
    Prompt(#[source] BoxError),

    #[error("building agent: {0}")]
    Build(#[source] BoxError),
}

impl ResolveError {
    /// The missing field, if resolution stopped on an empty credential
    pub fn missing_field(&self) -> Option<CredentialField> {
        match self {
            ResolveError::MissingCredential(field) => Some(*field),
            _ => None,
        }
    }
}

/// Failure while constructing a generator
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    #[error("illegal symbol generator mode '{0}'")]
    InvalidMode(String),
}
