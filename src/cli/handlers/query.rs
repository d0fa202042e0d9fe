use crate::error::GalleyError;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_query(ctx: &CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let gql = ctx.gql()?;

    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    match gql.query_blocking_with_variables(&query, vars) {
        Ok(data) => {
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(())
        }
        Err(GalleyError::Query(errors)) => {
            for error in &errors {
                let location = error
                    .locations
                    .first()
                    .map(|pos| format!(" (line {}, column {})", pos.line, pos.column))
                    .unwrap_or_default();
                eprintln!("{} {}{}", "error:".red(), error.message, location);
            }
            anyhow::bail!("Query failed with {} error(s)", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}
