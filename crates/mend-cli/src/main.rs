//! Mend CLI - resolve merge conflicts and tidy up a git working tree.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;
mod services;

use commands::{Cli, Commands};

/// Install the stderr log subscriber. `RUST_LOG` overrides the level.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);
    init_logging(cli.verbose);
    info!(command = cli.command.name(), "command invoked");

    let result = match cli.command {
        Commands::Fix {
            file,
            strategy,
            dry_run,
            json,
        } => commands::fix::run(&file, strategy.map(Into::into), dry_run, json),
        Commands::Undo => commands::undo::run(),
        Commands::Stash { message } => commands::stash::run(message.as_deref()),
        Commands::ApplyStash { stash } => commands::stash::run_apply(stash.as_deref()),
        Commands::Track { all } => commands::track::run(all),
        Commands::Clean { yes } => commands::clean::run(yes),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
