use std::sync::Arc;
use std::time::Instant;

use async_graphql::Context;

use crate::storage::Store;

/// Fetch the shared store from the schema data.
pub(crate) fn store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Store> {
    Ok(ctx.data::<Arc<Store>>()?.as_ref())
}

/// Run a root-level store lookup for `model` inside a resolver span.
///
/// The lookup's outcome is passed back as-is; the wrapper only adds the span
/// and a timing event.
pub fn run<T, F>(model: &'static str, ctx: &Context<'_>, f: F) -> async_graphql::Result<T>
where
    F: FnOnce(&Store) -> crate::error::Result<T>,
{
    let store = store(ctx)?;
    let field = ctx.field().name();
    let span = tracing::debug_span!("resolve", model, field);
    let _guard = span.enter();

    let started = Instant::now();
    let result = f(store);
    let elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

    match &result {
        Ok(_) => tracing::debug!(elapsed_us, "resolved"),
        Err(e) => tracing::warn!(error = %e, elapsed_us, "resolver failed"),
    }

    Ok(result?)
}
