//! Messaging agent used by the CLI
//!
//! The remote session is outside this crate: a [`MessengerAgent`] authenticates
//! nothing itself and delivers each payload as one line on the writer it is
//! given, which the binary points at stdout.

use std::io::Write;

use begone_core::{Agent, AgentBuilder, AgentLogger, CredentialField, CredentialRecord};
use tracing::debug;

use crate::error::Result;

/// Reasons a credential record is rejected at agent construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentError {
    #[error("{0} must not be empty")]
    EmptyField(CredentialField),

    #[error("username must not contain whitespace")]
    MalformedUsername,
}

/// Builds [`MessengerAgent`]s from resolved credentials
#[derive(Debug, Clone, Copy, Default)]
pub struct MessengerBuilder;

impl AgentBuilder for MessengerBuilder {
    type Agent = MessengerAgent;
    type Error = AgentError;

    fn build(&self, record: CredentialRecord) -> std::result::Result<Self::Agent, Self::Error> {
        if let Some(&field) = record.missing_fields().first() {
            return Err(AgentError::EmptyField(field));
        }
        if record.username.chars().any(char::is_whitespace) {
            return Err(AgentError::MalformedUsername);
        }

        Ok(MessengerAgent {
            credentials: record,
            logger: None,
            sent: 0,
        })
    }
}

#[derive(Debug)]
pub struct MessengerAgent {
    credentials: CredentialRecord,
    logger: Option<AgentLogger>,
    sent: u64,
}

impl MessengerAgent {
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Deliver `payload` to `conversation` as one line on `out`
    pub fn send<W: Write>(&mut self, out: &mut W, conversation: &str, payload: &str) -> Result<()> {
        writeln!(out, "{conversation}: {payload}")?;
        self.sent += 1;

        let sequence = self.sent;
        let symbols = payload.chars().count();
        self.log(|| debug!(conversation, sequence, symbols, "Payload delivered"));
        Ok(())
    }

    fn log(&self, record: impl FnOnce()) {
        if let Some(logger) = &self.logger {
            logger.in_scope(record);
        }
    }
}

impl Agent for MessengerAgent {
    fn set_logger(&mut self, logger: AgentLogger) {
        self.logger = Some(logger);
    }
}
