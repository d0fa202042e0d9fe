//! Data models for galley.
//!
//! Records are plain rows keyed by an integer id. Associations are held as
//! foreign keys and traversed through the [`Store`](crate::storage::Store):
//!
//! - [`Restaurant`]: owned by a [`Chef`]
//! - [`Chef`]: writes [`Recipe`]s
//! - [`Recipe`]: lists [`Ingredient`]s
//! - [`Vendor`]: supplies [`Ingredient`]s

mod recipe;
mod restaurant;
mod vendor;

pub use recipe::{Ingredient, Recipe};
pub use restaurant::{Chef, Restaurant};
pub use vendor::Vendor;
