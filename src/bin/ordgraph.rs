//! CLI entry point for the `ordgraph` demonstration tool.

use std::io;
use std::process;

use clap::{Parser, Subcommand};

use ordgraph::cli::commands;
use ordgraph::DsError;

#[derive(Parser)]
#[command(
    name = "ordgraph",
    about = "ordgraph CLI — ordered trees and BFS over adjacency graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an ordered tree and print it with its min and max
    Tree {
        /// Root value
        seed: i64,
        /// Further values, inserted in order
        values: Vec<i64>,
        /// Value to search for
        #[arg(long)]
        search: Option<i64>,
    },
    /// Breadth-first search from a start vertex
    Bfs {
        /// Start vertex
        start: String,
        /// Connection as A-B (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Treat connections as one-way
        #[arg(long)]
        directed: bool,
        /// Stop at this vertex and print the shortest path
        #[arg(long)]
        target: Option<String>,
    },
    /// Print order, size and adjacency of a graph
    Stats {
        /// Connection as A-B (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Treat connections as one-way
        #[arg(long)]
        directed: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Trace)
            .init();
    }

    let mut out = io::stdout().lock();
    let result = match cli.command {
        Commands::Tree {
            seed,
            values,
            search,
        } => commands::cmd_tree(&mut out, seed, &values, search, json),
        Commands::Bfs {
            start,
            edges,
            directed,
            target,
        } => commands::cmd_bfs(&mut out, &edges, directed, &start, target.as_deref(), json),
        Commands::Stats { edges, directed } => commands::cmd_stats(&mut out, &edges, directed, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            DsError::Io(_) => 1,
            DsError::InvalidInput(_) => 3,
            DsError::NotFound(_) | DsError::EdgeNotFound { .. } => 4,
        };
        process::exit(code);
    }
}
