use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;
use tokio::net::TcpListener;

use crate::error::Result;

use super::schema::GalleySchema;

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn router(schema: GalleySchema) -> Router {
    Router::new()
        .route(
            GRAPHQL_PATH,
            get(graphiql).post_service(GraphQL::new(schema.clone())),
        )
        .route("/schema", get(schema_sdl))
        .route("/health", get(health))
        .with_state(schema)
}

/// Serve the schema over HTTP until Ctrl-C.
pub async fn run_server(schema: GalleySchema, host: &str, port: u16) -> Result<()> {
    let listener = TcpListener::bind((host, port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub(crate) async fn schema_sdl(State(schema): State<GalleySchema>) -> Json<serde_json::Value> {
    Json(json!({ "schema": schema.sdl() }))
}

pub(crate) async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
