use anyhow::Result;
use clap::Parser;
use recursolve::cli::{Cli, Commands};
use recursolve::commands::{self, CommandContext};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    // init must work even when an existing config file is broken
    if let Commands::Init { force } = cli.command {
        return commands::init::init_config(force);
    }

    let context = CommandContext::from_cli(&cli);
    match commands::solve::recurrence_from_command(&cli.command) {
        Some(recurrence) => commands::solve::solve_recurrence(&recurrence, cli.format, &context),
        None => commands::catalog::show_catalog(cli.format, &context),
    }
}

// RUST_LOG takes precedence over -v
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("recursolve={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
