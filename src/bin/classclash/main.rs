//! classclash CLI - find duplicate Java classes in a JBoss/WildFly deployment

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use classclash::util::Shell;
use classclash::ScanError;
use cli::{Cli, Commands};

/// Options shared by every command.
pub struct GlobalOptions {
    pub shell: Arc<Shell>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        if let Some(hint) = e.downcast_ref::<ScanError>().and_then(ScanError::hint) {
            eprintln!("{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("classclash=debug")
    } else {
        EnvFilter::new("classclash=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let global = GlobalOptions {
        shell: Arc::new(Shell::from_flags(cli.quiet, cli.verbose, cli.color)),
    };

    match cli.command {
        Some(Commands::Scan(args)) => commands::scan::execute(args, &global),
        Some(Commands::Layout(args)) => commands::layout::execute(args, &global),
        None => commands::scan::execute(cli.scan, &global),
    }
}
