//! Algotrace CLI - run classic algorithms and step through their traces.
//!
//! Every run produces the same trace the library returns: print it as a
//! table or JSON, or play it back at a fixed interval.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use commands::AlgorithmArgs;

/// Step-by-step algorithm traces.
///
/// Runs shortest path, spanning tree, traversal, backtracking and sorting
/// algorithms and shows every step they take.
#[derive(Parser)]
#[command(name = "algotrace")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress progress and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run an algorithm and print its trace
    Run {
        #[command(flatten)]
        args: AlgorithmArgs,
    },

    /// Run an algorithm and play its trace back step by step
    Play {
        #[command(flatten)]
        args: AlgorithmArgs,

        /// Milliseconds between steps
        #[arg(long, default_value_t = 1000)]
        interval: u64,
    },

    /// Check a graph file
    Validate {
        /// Path to the graph JSON file
        #[arg(long)]
        graph: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Run { args } => commands::run::run(&args, cli.format, cli.quiet),
        Commands::Play { args, interval } => {
            commands::play::run(&args, interval, cli.format, cli.quiet)
        }
        Commands::Validate { graph } => commands::validate::run(&graph, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
