use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "galley")]
#[command(
    author,
    version,
    about = "A GraphQL query API over a flat-file kitchen dataset"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .galley.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to dataset file (overrides config)
    #[arg(long, global = true, env = "GALLEY_DATA")]
    pub data: Option<PathBuf>,

    /// Enable debug logging, including per-resolver spans
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new galley project with a sample dataset
    Init {
        /// Overwrite an existing config and dataset
        #[arg(long)]
        force: bool,
    },

    /// Execute a GraphQL query and print the data as JSON
    #[command(visible_alias = "q")]
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,

    /// Validate the dataset and print record counts
    Check,

    /// Start GraphQL HTTP server
    Serve {
        /// Port to listen on (defaults to server.port from config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (defaults to server.host from config)
        #[arg(long)]
        host: Option<String>,
    },
}
