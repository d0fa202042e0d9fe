use crate::graphql::{GRAPHQL_PATH, run_server};
use anyhow::Result;

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>, host: Option<String>) -> Result<()> {
    let gql = ctx.gql()?;
    let port = port.unwrap_or(ctx.config.server.port);
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());

    println!("Starting GraphQL server on http://{}:{}{}", host, port, GRAPHQL_PATH);
    println!("Schema (SDL): http://{}:{}/schema", host, port);

    let schema = gql.schema().clone();
    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &host, port).await })?;
    Ok(())
}
