//! GraphQL schema and resolvers for galley.
//!
//! Parsing, validation and execution come from `async-graphql`; this module
//! only declares the kitchen types and binds their fields to the [`Store`].
//!
//! ## Usage
//!
//! ```bash
//! # Execute a query from CLI
//! galley query '{ restaurant(id: 1) { name owner { email } } }'
//!
//! # Start the GraphQL server
//! galley serve --port 4000
//! ```
//!
//! ## Schema
//!
//! - **Types**: `Restaurant`, `Chef`, `Recipe`, `Vendor`, `Ingredient`
//! - **Queries**: `recipes`, `restaurant(id)`, `vendors` (connection, 50 per page max)
//!
//! [`Store`]: crate::storage::Store

mod gql;
pub mod resolver;
mod schema;
mod server;
mod types;

pub use gql::Gql;
pub use schema::{GalleySchema, QueryRoot, VENDORS_MAX_PAGE_SIZE, build_schema};
pub use server::{GRAPHQL_PATH, router, run_server};
pub use types::*;
