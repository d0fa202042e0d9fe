use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::{Map, Value};

use crate::config::LimitSettings;
use crate::error::{GalleyError, Result};
use crate::storage::Store;

use super::schema::{GalleySchema, build_schema};

/// Query facade: runs a query string and hands back only the data object.
///
/// Any reported error, be it a syntax error, a validation failure or a
/// resolver error, turns the whole call into [`GalleyError::Query`] carrying
/// the raw error list.
#[derive(Clone)]
pub struct Gql {
    schema: GalleySchema,
}

impl Gql {
    pub fn new(schema: GalleySchema) -> Self {
        Self { schema }
    }

    pub fn from_store(store: Store, limits: &LimitSettings) -> Self {
        Self::new(build_schema(Arc::new(store), limits))
    }

    pub fn schema(&self) -> &GalleySchema {
        &self.schema
    }

    pub async fn query(&self, query: &str) -> Result<Map<String, Value>> {
        self.execute(Request::new(query)).await
    }

    pub async fn query_with_variables(
        &self,
        query: &str,
        variables: Variables,
    ) -> Result<Map<String, Value>> {
        self.execute(Request::new(query).variables(variables)).await
    }

    /// Run [`Gql::query`] to completion on a private runtime.
    ///
    /// Must not be called from inside an async context.
    pub fn query_blocking(&self, query: &str) -> Result<Map<String, Value>> {
        self.query_blocking_with_variables(query, Variables::default())
    }

    pub fn query_blocking_with_variables(
        &self,
        query: &str,
        variables: Variables,
    ) -> Result<Map<String, Value>> {
        tokio::runtime::Runtime::new()?.block_on(self.query_with_variables(query, variables))
    }

    async fn execute(&self, request: Request) -> Result<Map<String, Value>> {
        let response = self.schema.execute(request).await;

        if response.is_err() {
            tracing::debug!(errors = response.errors.len(), "query failed");
            return Err(GalleyError::Query(response.errors));
        }

        match response.data.into_json()? {
            Value::Object(data) => Ok(data),
            _ => Ok(Map::new()),
        }
    }
}
