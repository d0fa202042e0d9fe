use crate::graphql::{Gql, build_schema};
use crate::storage::Store;
use anyhow::Result;
use std::sync::Arc;

use super::CommandContext;

/// Print the SDL. The schema shape does not depend on the data, so an empty
/// store is used when the dataset is missing.
pub fn handle_schema(ctx: &CommandContext) -> Result<()> {
    let gql = if ctx.data_path.exists() {
        ctx.gql()?
    } else {
        Gql::new(build_schema(Arc::new(Store::default()), &ctx.config.limits))
    };
    println!("{}", gql.schema().sdl());
    Ok(())
}
