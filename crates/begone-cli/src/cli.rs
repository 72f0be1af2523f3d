//! Command-line interface definitions and parsing

use std::path::PathBuf;

use begone_core::{CredentialRecord, GrowthPolicy};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Account username (overrides the saved one)
    #[arg(short, long, global = true)]
    pub username: Option<String>,

    /// Account password (overrides the saved one)
    #[arg(short, long, global = true)]
    pub password: Option<String>,

    /// Emit agent debug logs to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Never prompt; fail if credentials are missing
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Credentials file path
    #[arg(short, long, global = true, env = "BEGONE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Explicitly supplied credentials, if any flag was given
    pub fn provided_credentials(&self) -> Option<CredentialRecord> {
        if self.username.is_none() && self.password.is_none() {
            return None;
        }
        Some(CredentialRecord::new(
            self.username.clone().unwrap_or_default(),
            self.password.clone().unwrap_or_default(),
        ))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve credentials and save them for later runs
    Login,
    /// Forget saved credentials
    Logout,
    /// Send generated emoji payloads to a conversation
    Emoji {
        /// Conversation to send to
        conversation: String,
        /// Growth policy (single | staircase)
        #[arg(short, long, default_value = "single", value_parser = parse_growth_policy)]
        mode: GrowthPolicy,
        /// Number of messages to send (unbounded when omitted)
        #[arg(short = 'n', long)]
        count: Option<u64>,
        /// Seed for a reproducible payload sequence
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub fn parse_growth_policy(s: &str) -> Result<GrowthPolicy, String> {
    s.parse().map_err(|e: begone_core::GeneratorError| e.to_string())
}
