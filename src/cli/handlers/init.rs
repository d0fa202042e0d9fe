use crate::config::{CONFIG_FILE_NAME, GalleyConfig};
use crate::error::GalleyError;
use crate::storage::{Dataset, detect_format, render_dataset};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub fn handle_init(cwd: &Path, force: bool) -> Result<()> {
    let config_path = cwd.join(CONFIG_FILE_NAME);

    let config = GalleyConfig::default();
    let data_path = config.data_path(cwd);

    if !force {
        for existing in [&config_path, &data_path] {
            if existing.exists() {
                return Err(
                    GalleyError::AlreadyInitialized(existing.display().to_string()).into(),
                );
            }
        }
    }

    let content = render_dataset(&Dataset::sample(), detect_format(&data_path)?)?;
    std::fs::write(&data_path, content)?;
    config.save(&config_path)?;

    tracing::debug!(config = %config_path.display(), data = %data_path.display(), "initialized project");

    println!(
        "{} galley project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
