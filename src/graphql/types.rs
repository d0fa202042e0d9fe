use async_graphql::{Context, ID, Object};

use crate::error::GalleyError;
use crate::model;

use super::resolver::store;

/// Treat a missing record as `null` instead of an error.
pub(crate) fn optional<T>(found: crate::error::Result<T>) -> crate::error::Result<Option<T>> {
    match found {
        Ok(record) => Ok(Some(record)),
        Err(GalleyError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Wrap rows as a nullable list of nullable items, the `[T]` shape in SDL.
pub(crate) fn nullable_list<R, T>(rows: Vec<R>, wrap: fn(R) -> T) -> Option<Vec<Option<T>>> {
    Some(rows.into_iter().map(|row| Some(wrap(row))).collect())
}

fn to_id(raw: i64) -> Option<ID> {
    Some(ID(raw.to_string()))
}

pub struct Restaurant(pub model::Restaurant);

#[Object]
impl Restaurant {
    async fn id(&self) -> Option<ID> {
        to_id(self.0.id)
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.0.name)
    }

    /// The chef who owns the restaurant
    async fn owner(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Chef>> {
        let owner = optional(store(ctx)?.find::<model::Chef>(self.0.owner_id))?;
        Ok(owner.map(Chef))
    }

    /// Recipes written by the owner
    async fn recipes(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Recipe>>>> {
        let owner_id = self.0.owner_id;
        let recipes = store(ctx)?.filter(|r: &model::Recipe| r.chef_id == owner_id);
        Ok(nullable_list(recipes, Recipe))
    }
}

pub struct Chef(pub model::Chef);

#[Object]
impl Chef {
    async fn id(&self) -> Option<ID> {
        to_id(self.0.id)
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.0.name)
    }

    async fn email(&self) -> Option<&str> {
        Some(&self.0.email)
    }

    async fn recipes(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Recipe>>>> {
        let chef_id = self.0.id;
        let recipes = store(ctx)?.filter(|r: &model::Recipe| r.chef_id == chef_id);
        Ok(nullable_list(recipes, Recipe))
    }
}

pub struct Recipe(pub model::Recipe);

#[Object]
impl Recipe {
    async fn id(&self) -> Option<ID> {
        to_id(self.0.id)
    }

    async fn title(&self) -> Option<&str> {
        Some(&self.0.title)
    }

    async fn ingredients(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Ingredient>>>> {
        let recipe_id = self.0.id;
        let ingredients = store(ctx)?.filter(|i: &model::Ingredient| i.recipe_id == recipe_id);
        Ok(nullable_list(ingredients, Ingredient))
    }
}

pub struct Vendor(pub model::Vendor);

#[Object]
impl Vendor {
    async fn id(&self) -> Option<ID> {
        to_id(self.0.id)
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.0.name)
    }

    /// Ingredients this vendor supplies
    async fn ingredients(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Ingredient>>>> {
        let vendor_id = self.0.id;
        let ingredients =
            store(ctx)?.filter(|i: &model::Ingredient| i.vendor_id == Some(vendor_id));
        Ok(nullable_list(ingredients, Ingredient))
    }
}

pub struct Ingredient(pub model::Ingredient);

#[Object]
impl Ingredient {
    async fn id(&self) -> Option<ID> {
        to_id(self.0.id)
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.0.name)
    }

    async fn quantity(&self) -> Option<i32> {
        Some(self.0.quantity)
    }

    async fn vendor(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vendor>> {
        let Some(vendor_id) = self.0.vendor_id else {
            return Ok(None);
        };
        let vendor = optional(store(ctx)?.find::<model::Vendor>(vendor_id))?;
        Ok(vendor.map(Vendor))
    }
}
