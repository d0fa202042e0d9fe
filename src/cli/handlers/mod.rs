mod check;
mod init;
mod query;
mod schema;
mod serve;

pub use check::handle_check;
pub use init::handle_init;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::GalleyConfig;
use crate::error::GalleyError;
use crate::graphql::Gql;
use crate::storage::Store;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GalleyConfig,
    pub root: PathBuf,
    pub data_path: PathBuf,
}

impl CommandContext {
    pub fn new(config: GalleyConfig, root: PathBuf, data_override: Option<PathBuf>) -> Self {
        let data_path = data_override.unwrap_or_else(|| config.data_path(&root));
        Self {
            config,
            root,
            data_path,
        }
    }

    /// Resolve config from `--config`, or by searching upward from `cwd`.
    ///
    /// With `--data` given, a missing project config falls back to defaults.
    pub fn load(
        cwd: &Path,
        config_path: Option<&Path>,
        data_override: Option<PathBuf>,
    ) -> Result<Self> {
        let loaded = match config_path {
            Some(path) => GalleyConfig::load_file(path),
            None => GalleyConfig::load(cwd),
        };

        let (config, root) = match loaded {
            Ok(found) => found,
            Err(GalleyError::NotInitialized) if data_override.is_some() => {
                (GalleyConfig::default(), cwd.to_path_buf())
            }
            Err(e) => return Err(e).context("Failed to load galley configuration"),
        };

        Ok(Self::new(config, root, data_override))
    }

    pub fn load_store(&self) -> Result<Store> {
        Store::load(&self.data_path)
            .with_context(|| format!("Failed to load dataset {}", self.data_path.display()))
    }

    pub fn gql(&self) -> Result<Gql> {
        Ok(Gql::from_store(self.load_store()?, &self.config.limits))
    }
}
