use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub chef_id: i64,
}

impl Recipe {
    pub fn new(id: i64, title: impl Into<String>, chef_id: i64) -> Self {
        Self {
            id,
            title: title.into(),
            chef_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub quantity: i32,

    pub recipe_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_id: Option<i64>,
}

impl Ingredient {
    pub fn new(id: i64, name: impl Into<String>, recipe_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: 0,
            recipe_id,
            vendor_id: None,
        }
    }

    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_vendor(mut self, vendor_id: i64) -> Self {
        self.vendor_id = Some(vendor_id);
        self
    }
}
