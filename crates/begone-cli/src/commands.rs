//! Command handlers for the begone CLI

use std::io::{IsTerminal, Write};

use begone_core::{CredentialResolver, Generator, Prompter, ResolutionMode, SymbolSequenceGenerator};
use tracing::{info, warn};

use crate::agent::{MessengerAgent, MessengerBuilder};
use crate::cli::{Cli, Commands};
use crate::config::FileConfigStore;
use crate::error::Result;
use crate::prompt::{LinePrompter, TtyPrompter};

/// Resolver wired to the CLI's store and agent builder
pub type CliResolver<P> = CredentialResolver<FileConfigStore, P, MessengerBuilder>;

/// Command dispatcher for handling CLI commands
pub struct CommandDispatcher;

impl CommandDispatcher {
    /// Execute a CLI command, prompting on the terminal and delivering to stdout
    ///
    /// Piped stdin is read line by line instead of through the terminal prompter.
    pub fn execute(cli: Cli) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        if std::io::stdin().is_terminal() {
            Self::execute_with(cli, TtyPrompter::new(), &mut stdout)
        } else {
            Self::execute_with(cli, LinePrompter::stdio(), &mut stdout)
        }
    }

    /// Execute a CLI command with an explicit prompter and delivery stream
    pub fn execute_with<P, O>(cli: Cli, prompter: P, out: &mut O) -> Result<()>
    where
        P: Prompter,
        O: Write,
    {
        let store = FileConfigStore::open(cli.config.clone())?;
        let mode = ResolutionMode::from_interactive(!cli.non_interactive);
        let provided = cli.provided_credentials();
        let mut resolver =
            CredentialResolver::new(store, prompter, MessengerBuilder, mode).with_debug(cli.debug);

        match cli.command {
            Commands::Login => Self::handle_login(&mut resolver, provided),
            Commands::Logout => Self::handle_logout(resolver.store()),
            Commands::Emoji {
                conversation,
                mode,
                count,
                seed,
            } => {
                let mut agent = resolver.configure(provided)?;
                let mut generator = match seed {
                    Some(seed) => SymbolSequenceGenerator::with_seed(mode, seed),
                    None => SymbolSequenceGenerator::with_policy(mode),
                };
                info!("Sending {} payloads to {}", mode, conversation);
                let sent =
                    Self::send_payloads(&mut agent, &mut generator, out, &conversation, count)?;
                info!("Sent {} messages", sent);
                Ok(())
            }
        }
    }

    /// Handle the login command: resolve, validate by building, then persist
    fn handle_login<P: Prompter>(
        resolver: &mut CliResolver<P>,
        provided: Option<begone_core::CredentialRecord>,
    ) -> Result<()> {
        let record = resolver.resolve(provided)?;
        let agent = resolver.build(record.clone())?;
        resolver.store().save(&record)?;
        info!(
            "Saved credentials for {} to {}",
            agent.username(),
            resolver.store().path().display()
        );
        Ok(())
    }

    /// Handle the logout command
    fn handle_logout(store: &FileConfigStore) -> Result<()> {
        if store.clear()? {
            info!("Removed saved credentials at {}", store.path().display());
        } else {
            warn!("No saved credentials at {}", store.path().display());
        }
        Ok(())
    }

    /// Pull payloads from `generator` and deliver them until `limit` is reached
    /// or the generator runs dry
    pub fn send_payloads<O: Write>(
        agent: &mut MessengerAgent,
        generator: &mut dyn Generator,
        out: &mut O,
        conversation: &str,
        limit: Option<u64>,
    ) -> Result<u64> {
        let mut sent = 0;
        while generator.has_more() && limit.map_or(true, |limit| sent < limit) {
            let payload = generator.generate();
            agent.send(out, conversation, &payload)?;
            sent += 1;
        }
        Ok(sent)
    }
}
