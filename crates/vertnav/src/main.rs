//! Vertnav CLI - vertical category navigation.
//!
//! Provides commands for:
//! - `render`: Render the navigation markup for a browsing context
//! - `cache-key`: Print the cache key of a browsing context
//! - `root-options`: List the selectable root modes of a catalog

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CacheKeyArgs, RenderArgs, RootOptionsArgs};
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Vertnav - vertical category navigation.
#[derive(Parser)]
#[command(name = "vertnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the navigation markup.
    Render(RenderArgs),
    /// Print the cache key of a browsing context.
    CacheKey(CacheKeyArgs),
    /// List the selectable root modes.
    RootOptions(RootOptionsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Render(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(VERSION),
        Commands::CacheKey(args) => args.execute(),
        Commands::RootOptions(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
