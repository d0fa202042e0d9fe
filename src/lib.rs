//! # Galley - a GraphQL query API over a kitchen dataset
//!
//! Galley serves restaurants, chefs, recipes, vendors and ingredients from a
//! single flat file through a GraphQL schema. Queries run from the CLI, over
//! HTTP, or in-process through [`graphql::Gql`].
//!
//! ## Quick Start
//!
//! ```bash
//! # Create .galley.yml and a sample kitchen.yml
//! galley init
//!
//! # Ask for a restaurant and its owner
//! galley query '{ restaurant(id: 1) { name owner { email } } }'
//!
//! # Page through vendors
//! galley query '{ vendors(first: 2) { edges { cursor node { name } } pageInfo { hasNextPage } } }'
//!
//! # Serve GraphiQL and the HTTP endpoint
//! galley serve
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers, query facade and HTTP server
//! - [`model`]: Data models (Restaurant, Chef, Recipe, Vendor, Ingredient)
//! - [`storage`]: Dataset parsing and the read-only store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.galley.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `GalleyError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema, the `Gql` facade and the axum server.
pub mod graphql;

/// Data models for the kitchen.
pub mod model;

/// Data-access layer.
///
/// Loads YAML, JSON or TOML datasets into validated, read-only tables.
pub mod storage;

pub mod logging;
