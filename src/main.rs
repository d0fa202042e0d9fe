use anyhow::Result;
use clap::Parser;

use galley::cli::handlers::{
    CommandContext, handle_check, handle_init, handle_query, handle_schema, handle_serve,
};
use galley::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    galley::logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir()?;

    let load = || CommandContext::load(&cwd, cli.config.as_deref(), cli.data.clone());

    match cli.command {
        Commands::Init { force } => handle_init(&cwd, force),
        Commands::Query { query, variables } => handle_query(&load()?, query, variables),
        Commands::Schema => handle_schema(&load()?),
        Commands::Check => handle_check(&load()?),
        Commands::Serve { port, host } => handle_serve(load()?, port, host),
    }
}
