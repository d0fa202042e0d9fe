use async_graphql::ServerError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{model} not found: {id}")]
    NotFound { model: &'static str, id: i64 },

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),

    #[error("GraphQL query failed: {}", join_messages(.0))]
    Query(Vec<ServerError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Project not initialized. Run 'galley init' first.")]
    NotInitialized,

    #[error("Project already initialized at {0}")]
    AlreadyInitialized(String),
}

impl GalleyError {
    /// The raw GraphQL errors carried by a query failure, if any.
    pub fn query_errors(&self) -> Option<&[ServerError]> {
        match self {
            GalleyError::Query(errors) => Some(errors),
            _ => None,
        }
    }
}

fn join_messages(errors: &[ServerError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, GalleyError>;
