//! Agent debug logging
//!
//! An [`AgentLogger`] is a standalone `tracing` dispatcher. Agents run their
//! own instrumentation inside [`AgentLogger::in_scope`], so debug output does
//! not depend on whichever global subscriber the binary installed.

use std::fmt;

use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
pub struct AgentLogger {
    dispatch: Dispatch,
}

impl AgentLogger {
    /// Logger writing undecorated records to stderr
    pub fn stderr() -> Self {
        Self::with_writer(std::io::stderr)
    }

    /// Logger writing undecorated records to `make_writer`
    ///
    /// Records carry no timestamp, level or target prefix; only the message
    /// and its structured fields are written.
    pub fn with_writer<W>(make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(make_writer)
            .without_time()
            .with_level(false)
            .with_target(false)
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Run `f` with this logger as the current dispatcher
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

impl fmt::Debug for AgentLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AgentLogger").finish_non_exhaustive()
    }
}
