use super::dataset::{Dataset, detect_format, parse_dataset};
use crate::{
    error::{GalleyError, Result},
    model::{Chef, Ingredient, Recipe, Restaurant, Vendor},
};
use std::collections::HashSet;
use std::path::Path;

/// A row type stored in one of the [`Store`] tables.
pub trait Record: Clone + Send + Sync + 'static {
    /// Model name used in errors and resolver spans.
    const MODEL: &'static str;

    fn id(&self) -> i64;

    /// The table holding this record type, sorted by id.
    fn table(store: &Store) -> &[Self];
}

macro_rules! impl_record {
    ($ty:ty, $model:literal, $field:ident) => {
        impl Record for $ty {
            const MODEL: &'static str = $model;

            fn id(&self) -> i64 {
                self.id
            }

            fn table(store: &Store) -> &[Self] {
                &store.$field
            }
        }
    };
}

impl_record!(Restaurant, "Restaurant", restaurants);
impl_record!(Chef, "Chef", chefs);
impl_record!(Recipe, "Recipe", recipes);
impl_record!(Vendor, "Vendor", vendors);
impl_record!(Ingredient, "Ingredient", ingredients);

/// Read-only, validated kitchen tables.
///
/// Every lookup returns owned copies straight from the tables; nothing is
/// cached between calls.
#[derive(Debug, Default)]
pub struct Store {
    restaurants: Vec<Restaurant>,
    chefs: Vec<Chef>,
    recipes: Vec<Recipe>,
    vendors: Vec<Vendor>,
    ingredients: Vec<Ingredient>,
}

impl Store {
    /// Load and validate a dataset file; the format follows the extension.
    pub fn load(path: &Path) -> Result<Self> {
        let format = detect_format(path)?;
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_dataset(parse_dataset(&content, format)?)?;
        tracing::info!(
            path = %path.display(),
            restaurants = store.restaurants.len(),
            chefs = store.chefs.len(),
            recipes = store.recipes.len(),
            vendors = store.vendors.len(),
            ingredients = store.ingredients.len(),
            "Loaded dataset"
        );
        Ok(store)
    }

    pub fn from_dataset(dataset: Dataset) -> Result<Self> {
        let Dataset {
            restaurants,
            chefs,
            recipes,
            vendors,
            ingredients,
        } = dataset;

        let store = Self {
            restaurants: sorted_unique(restaurants)?,
            chefs: sorted_unique(chefs)?,
            recipes: sorted_unique(recipes)?,
            vendors: sorted_unique(vendors)?,
            ingredients: sorted_unique(ingredients)?,
        };
        store.check_references()?;
        Ok(store)
    }

    /// All records of a model, ordered by id.
    pub fn all<T: Record>(&self) -> Vec<T> {
        T::table(self).to_vec()
    }

    pub fn find<T: Record>(&self, id: i64) -> Result<T> {
        let table = T::table(self);
        table
            .binary_search_by_key(&id, |r| r.id())
            .map(|idx| table[idx].clone())
            .map_err(|_| GalleyError::NotFound {
                model: T::MODEL,
                id,
            })
    }

    /// Records matching `pred`, ordered by id. Backs has-many traversals.
    pub fn filter<T, F>(&self, pred: F) -> Vec<T>
    where
        T: Record,
        F: Fn(&T) -> bool,
    {
        T::table(self).iter().filter(|&r| pred(r)).cloned().collect()
    }

    pub fn count<T: Record>(&self) -> usize {
        T::table(self).len()
    }

    fn check_references(&self) -> Result<()> {
        let chef_ids = ids(&self.chefs);
        let recipe_ids = ids(&self.recipes);
        let vendor_ids = ids(&self.vendors);

        for r in &self.restaurants {
            if !chef_ids.contains(&r.owner_id) {
                return Err(dangling("Restaurant", r.id, "owner_id", r.owner_id));
            }
        }
        for r in &self.recipes {
            if !chef_ids.contains(&r.chef_id) {
                return Err(dangling("Recipe", r.id, "chef_id", r.chef_id));
            }
        }
        for i in &self.ingredients {
            if !recipe_ids.contains(&i.recipe_id) {
                return Err(dangling("Ingredient", i.id, "recipe_id", i.recipe_id));
            }
            if let Some(vendor_id) = i.vendor_id
                && !vendor_ids.contains(&vendor_id)
            {
                return Err(dangling("Ingredient", i.id, "vendor_id", vendor_id));
            }
            if i.quantity < 0 {
                return Err(GalleyError::InvalidDataset(format!(
                    "Ingredient {} has negative quantity {}",
                    i.id, i.quantity
                )));
            }
        }
        Ok(())
    }
}

fn sorted_unique<T: Record>(mut rows: Vec<T>) -> Result<Vec<T>> {
    rows.sort_by_key(|r| r.id());
    if let Some(pair) = rows.windows(2).find(|w| w[0].id() == w[1].id()) {
        return Err(GalleyError::InvalidDataset(format!(
            "duplicate {} id {}",
            T::MODEL,
            pair[0].id()
        )));
    }
    Ok(rows)
}

fn ids<T: Record>(rows: &[T]) -> HashSet<i64> {
    rows.iter().map(|r| r.id()).collect()
}

fn dangling(model: &str, id: i64, field: &str, target: i64) -> GalleyError {
    GalleyError::InvalidDataset(format!(
        "{} {} references missing {} {}",
        model, id, field, target
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DatasetFormat, render_dataset};
    use tempfile::TempDir;

    fn sample_store() -> Store {
        Store::from_dataset(Dataset::sample()).unwrap()
    }

    #[test]
    fn test_all_is_ordered_by_id() {
        let mut dataset = Dataset::sample();
        dataset.vendors.reverse();
        let store = Store::from_dataset(dataset).unwrap();

        let ids: Vec<i64> = store.all::<Vendor>().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_find() {
        let store = sample_store();
        let chef: Chef = store.find(2).unwrap();
        assert_eq!(chef.email, "auguste@example.com");

        match store.find::<Restaurant>(99) {
            Err(GalleyError::NotFound { model, id }) => {
                assert_eq!(model, "Restaurant");
                assert_eq!(id, 99);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_filter_follows_foreign_key() {
        let store = sample_store();
        let recipes: Vec<Recipe> = store.filter(|r: &Recipe| r.chef_id == 1);
        let titles: Vec<&str> = recipes.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Omelette", "Tomato Soup"]);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut dataset = Dataset::sample();
        dataset.vendors.push(Vendor::new(2, "Imposter"));
        let err = Store::from_dataset(dataset).unwrap_err();
        assert!(err.to_string().contains("duplicate Vendor id 2"));
    }

    #[test]
    fn test_rejects_dangling_owner() {
        let mut dataset = Dataset::sample();
        dataset.restaurants.push(Restaurant::new(3, "Ghost Kitchen", 42));
        let err = Store::from_dataset(dataset).unwrap_err();
        assert!(matches!(err, GalleyError::InvalidDataset(_)));
        assert!(err.to_string().contains("owner_id 42"));
    }

    #[test]
    fn test_rejects_dangling_vendor() {
        let mut dataset = Dataset::sample();
        dataset
            .ingredients
            .push(Ingredient::new(7, "Saffron", 1).with_vendor(9));
        let err = Store::from_dataset(dataset).unwrap_err();
        assert!(err.to_string().contains("vendor_id 9"));
    }

    #[test]
    fn test_rejects_negative_quantity() {
        let mut dataset = Dataset::sample();
        dataset
            .ingredients
            .push(Ingredient::new(7, "Pepper", 1).with_quantity(-1));
        assert!(Store::from_dataset(dataset).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kitchen.json");
        let content = render_dataset(&Dataset::sample(), DatasetFormat::Json).unwrap();
        std::fs::write(&path, content).unwrap();

        let store = Store::load(&path).unwrap();
        assert_eq!(store.count::<Ingredient>(), 6);
        assert_eq!(store.count::<Restaurant>(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Store::load(&temp_dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, GalleyError::Io(_)));
    }
}
