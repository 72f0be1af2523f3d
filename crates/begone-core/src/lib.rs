//! begone core
//!
//! Local decision logic for the begone messaging agent:
//! - [`resolver`]: merges explicit, persisted and prompted credentials into a
//!   complete record and builds the agent from it
//! - [`generator`]: unbounded emoji payload sequences with selectable growth
//!
//! The config store, prompter and agent are collaborators supplied through the
//! traits in [`resolver`].

pub mod credentials;
pub mod errors;
pub mod generator;
pub mod logging;
pub mod resolver;

pub use credentials::{CredentialField, CredentialRecord};
pub use errors::{BoxError, GeneratorError, ResolveError};
pub use generator::{Generator, GrowthPolicy, SymbolSequenceGenerator, SYMBOLS};
pub use logging::AgentLogger;
pub use resolver::{
    Agent, AgentBuilder, ConfigStore, CredentialResolver, Prompter, ResolutionMode,
};
