// Copyright 2026 Kam Contributors
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use kam_wiki_cli::commands;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kam-wiki")]
#[command(author = "Kam Contributors")]
#[command(version)]
#[command(about = "Documentation site for the kam CLI", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the documentation site over HTTP
    Serve {
        /// Port to run the server on (default from kam-wiki.toml, else 3000)
        #[arg(short, long)]
        port: Option<u16>,
        /// Host to bind to (default from kam-wiki.toml, else 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
    },
    /// Export the site as static HTML
    Build {
        /// Output directory (default from kam-wiki.toml, else dist)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// List every documented command
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the documentation of one command
    Show {
        /// Command name (case-insensitive)
        name: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Search command names, summaries and descriptions
    Search {
        /// Text to look for
        query: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(host, port).await,
        Commands::Build { output } => commands::build::run(output),
        Commands::List { json } => commands::query::list(json),
        Commands::Show { name, json } => commands::query::show(&name, json),
        Commands::Search { query, json } => commands::query::search(&query, json),
    }
}
