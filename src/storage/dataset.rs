use crate::error::{GalleyError, Result};
use crate::model::{Chef, Ingredient, Recipe, Restaurant, Vendor};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk serialization of a dataset file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Yaml,
    Json,
    Toml,
}

/// Pick a format from the file extension.
pub fn detect_format(path: &Path) -> Result<DatasetFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "yml" | "yaml" => Ok(DatasetFormat::Yaml),
        "json" => Ok(DatasetFormat::Json),
        "toml" => Ok(DatasetFormat::Toml),
        _ => Err(GalleyError::UnsupportedFormat(path.display().to_string())),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,

    #[serde(default)]
    pub chefs: Vec<Chef>,

    #[serde(default)]
    pub recipes: Vec<Recipe>,

    #[serde(default)]
    pub vendors: Vec<Vendor>,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
}

impl Dataset {
    /// A small demo kitchen, written out by `galley init`.
    pub fn sample() -> Self {
        Self {
            chefs: vec![
                Chef::new(1, "Ada Lovelace").with_email("ada@example.com"),
                Chef::new(2, "Auguste Escoffier").with_email("auguste@example.com"),
            ],
            restaurants: vec![
                Restaurant::new(1, "The Analytical Kitchen", 1),
                Restaurant::new(2, "Le Guide Culinaire", 2),
            ],
            recipes: vec![
                Recipe::new(1, "Omelette", 1),
                Recipe::new(2, "Tomato Soup", 1),
                Recipe::new(3, "Sauce Espagnole", 2),
            ],
            vendors: vec![
                Vendor::new(1, "Hen House Farm"),
                Vendor::new(2, "Green Valley Produce"),
                Vendor::new(3, "Dairy Cooperative"),
            ],
            ingredients: vec![
                Ingredient::new(1, "Egg", 1).with_quantity(3).with_vendor(1),
                Ingredient::new(2, "Butter", 1).with_quantity(1).with_vendor(3),
                Ingredient::new(3, "Tomato", 2).with_quantity(6).with_vendor(2),
                Ingredient::new(4, "Salt", 2).with_quantity(1),
                Ingredient::new(5, "Veal Stock", 3).with_quantity(2),
                Ingredient::new(6, "Carrot", 3).with_quantity(2).with_vendor(2),
            ],
        }
    }
}

pub fn parse_dataset(content: &str, format: DatasetFormat) -> Result<Dataset> {
    let dataset = match format {
        DatasetFormat::Yaml => serde_yaml::from_str(content)?,
        DatasetFormat::Json => serde_json::from_str(content)?,
        DatasetFormat::Toml => toml::from_str(content)?,
    };
    Ok(dataset)
}

pub fn render_dataset(dataset: &Dataset, format: DatasetFormat) -> Result<String> {
    let content = match format {
        DatasetFormat::Yaml => serde_yaml::to_string(dataset)?,
        DatasetFormat::Json => serde_json::to_string_pretty(dataset)?,
        DatasetFormat::Toml => toml::to_string(dataset)?,
    };
    Ok(content)
}
