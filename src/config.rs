use crate::error::{GalleyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".galley.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleyConfig {
    #[serde(default)]
    pub galley: GalleySettings,

    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleySettings {
    /// Dataset file, relative to the project root
    #[serde(default = "default_data")]
    pub data: String,
}

fn default_data() -> String {
    "kitchen.yml".to_string()
}

impl Default for GalleySettings {
    fn default() -> Self {
        Self {
            data: default_data(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_complexity: Option<usize>,

    #[serde(default = "default_introspection")]
    pub introspection: bool,
}

fn default_introspection() -> bool {
    true
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_depth: None,
            max_complexity: None,
            introspection: default_introspection(),
        }
    }
}

impl GalleyConfig {
    /// Search upward from `start_path` for `.galley.yml`.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_file(&config_path)
    }

    /// Load an explicit config file; its directory becomes the project root.
    pub fn load_file(config_path: &Path) -> Result<(Self, PathBuf)> {
        if !config_path.exists() {
            return Err(GalleyError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        let content = std::fs::read_to_string(config_path)?;
        let config: GalleyConfig = serde_yaml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| GalleyError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(GalleyError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.galley.data)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
