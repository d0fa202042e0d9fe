//! Data-access layer for galley.
//!
//! A kitchen dataset lives in a single flat file next to `.galley.yml`:
//!
//! ```yaml
//! chefs:
//!   - { id: 1, name: Ada, email: ada@example.com }
//! restaurants:
//!   - { id: 1, name: Chez Ada, owner_id: 1 }
//! recipes:
//!   - { id: 1, title: Omelette, chef_id: 1 }
//! vendors:
//!   - { id: 1, name: Hen House }
//! ingredients:
//!   - { id: 1, name: Egg, quantity: 3, recipe_id: 1, vendor_id: 1 }
//! ```
//!
//! YAML, JSON and TOML are accepted, chosen by file extension.
//!
//! ## Components
//!
//! - [`Store`]: validated, read-only tables with `all`/`find` lookups
//! - [`Record`]: implemented by every model that lives in a table
//! - [`Dataset`]: the serialisable file layout

mod dataset;
mod store;

pub use dataset::{Dataset, DatasetFormat, detect_format, parse_dataset, render_dataset};
pub use store::{Record, Store};
