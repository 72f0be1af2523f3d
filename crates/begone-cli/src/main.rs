//! begone CLI entry point

use clap::Parser;
use tracing::error;

use begone_cli::{cli::Cli, commands::CommandDispatcher};

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    setup_logging(cli.verbose);

    if let Err(e) = CommandDispatcher::execute(cli) {
        error!("{}", e);
        if let Some(hint) = e.hint() {
            error!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
