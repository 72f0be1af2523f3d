//! begone CLI library
//!
//! Concrete collaborators for the core resolver (TOML credential store, line
//! prompter, messaging agent) plus command parsing and dispatch.

pub mod agent;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;

pub use agent::{AgentError, MessengerAgent, MessengerBuilder};
pub use cli::{Cli, Commands};
pub use commands::CommandDispatcher;
pub use config::FileConfigStore;
pub use error::{CliError, Result};
pub use prompt::{LinePrompter, TtyPrompter};
