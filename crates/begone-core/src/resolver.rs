//! Credential resolution
//!
//! [`CredentialResolver`] turns explicit input, persisted values and (in
//! interactive mode) prompted answers into one complete [`CredentialRecord`],
//! then hands it to an [`AgentBuilder`]. Explicit non-empty fields always win
//! over persisted ones, and resolution never fills a field on its own.

use tracing::{debug, info};

use crate::credentials::{CredentialField, CredentialRecord};
use crate::errors::ResolveError;
use crate::logging::AgentLogger;

// ----------------------------------------------------------------------------
// Collaborators
// ----------------------------------------------------------------------------

/// Persisted credential storage
pub trait ConfigStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the saved record; an empty record if nothing was ever saved
    fn load(&self) -> Result<CredentialRecord, Self::Error>;
}

/// Interactive source for missing credentials
pub trait Prompter {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return `record` with its empty fields filled in
    ///
    /// Filled fields are only asked again when `force_prompt` is set.
    fn query_missing(
        &mut self,
        record: CredentialRecord,
        force_prompt: bool,
    ) -> Result<CredentialRecord, Self::Error>;
}

/// A constructed messaging agent
pub trait Agent {
    fn set_logger(&mut self, logger: AgentLogger);
}

/// Constructs an [`Agent`] from resolved credentials
pub trait AgentBuilder {
    type Agent: Agent;
    type Error: std::error::Error + Send + Sync + 'static;

    fn build(&self, record: CredentialRecord) -> Result<Self::Agent, Self::Error>;
}

// ----------------------------------------------------------------------------
// Resolution Mode
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionMode {
    /// Ask for missing fields
    #[default]
    Interactive,
    /// Fail on missing fields
    NonInteractive,
}

impl ResolutionMode {
    pub fn from_interactive(interactive: bool) -> Self {
        if interactive {
            ResolutionMode::Interactive
        } else {
            ResolutionMode::NonInteractive
        }
    }
}

// ----------------------------------------------------------------------------
// Credential Resolver
// ----------------------------------------------------------------------------

pub struct CredentialResolver<S, P, B> {
    store: S,
    prompter: P,
    builder: B,
    mode: ResolutionMode,
    debug: bool,
}

impl<S, P, B> CredentialResolver<S, P, B>
where
    S: ConfigStore,
    P: Prompter,
    B: AgentBuilder,
{
    pub fn new(store: S, prompter: P, builder: B, mode: ResolutionMode) -> Self {
        Self {
            store,
            prompter,
            builder,
            mode,
            debug: false,
        }
    }

    /// Attach a stderr [`AgentLogger`] to every agent this resolver builds
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve credentials and build the agent
    ///
    /// Either a fully configured agent is returned or nothing is built.
    pub fn configure(
        &mut self,
        provided: Option<CredentialRecord>,
    ) -> Result<B::Agent, ResolveError> {
        let record = self.resolve(provided)?;
        self.build(record)
    }

    /// Produce a complete record from `provided`, the store and the prompter
    pub fn resolve(
        &mut self,
        provided: Option<CredentialRecord>,
    ) -> Result<CredentialRecord, ResolveError> {
        let provided = provided.unwrap_or_default();

        let persisted = self
            .store
            .load()
            .map_err(|e| ResolveError::ConfigLoad(Box::new(e)))?;
        debug!(
            persisted_username = !persisted.username.is_empty(),
            persisted_password = !persisted.password.is_empty(),
            "Loaded persisted credentials"
        );

        let merged = provided.merged_over(persisted);

        let resolved = match self.mode {
            ResolutionMode::Interactive => {
                if !merged.is_complete() {
                    let missing = merged.missing_fields();
                    info!(?missing, "Querying for missing credentials");
                }
                self.prompter
                    .query_missing(merged, false)
                    .map_err(|e| ResolveError::Prompt(Box::new(e)))?
            }
            ResolutionMode::NonInteractive => merged,
        };

        ensure_complete(&resolved)?;
        Ok(resolved)
    }

    /// Build the agent from an already resolved record
    pub fn build(&self, record: CredentialRecord) -> Result<B::Agent, ResolveError> {
        let mut agent = self
            .builder
            .build(record)
            .map_err(|e| ResolveError::Build(Box::new(e)))?;

        if self.debug {
            agent.set_logger(AgentLogger::stderr());
        }
        Ok(agent)
    }
}

/// Report the first empty field, checking username before password
fn ensure_complete(record: &CredentialRecord) -> Result<(), ResolveError> {
    let missing: Vec<CredentialField> = record.missing_fields();
    match missing.first() {
        Some(&field) => {
            debug!(?missing, "Credentials incomplete");
            Err(ResolveError::MissingCredential(field))
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(ResolutionMode::from_interactive(true), ResolutionMode::Interactive);
        assert_eq!(
            ResolutionMode::from_interactive(false),
            ResolutionMode::NonInteractive
        );
        assert_eq!(ResolutionMode::default(), ResolutionMode::Interactive);
    }

    #[test]
    fn test_ensure_complete_reports_username_first() {
        let err = ensure_complete(&CredentialRecord::default()).unwrap_err();
        assert_eq!(err.missing_field(), Some(CredentialField::Username));

        let err = ensure_complete(&CredentialRecord::new("alice", "")).unwrap_err();
        assert_eq!(err.missing_field(), Some(CredentialField::Password));

        assert!(ensure_complete(&CredentialRecord::new("alice", "secret")).is_ok());
    }
}
