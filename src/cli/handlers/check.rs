use crate::model::{Chef, Ingredient, Recipe, Restaurant, Vendor};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_check(ctx: &CommandContext) -> Result<()> {
    let store = ctx.load_store()?;

    println!("{} {}", "Dataset OK".green(), ctx.data_path.display());
    println!("  Restaurants: {}", store.count::<Restaurant>());
    println!("  Chefs:       {}", store.count::<Chef>());
    println!("  Recipes:     {}", store.count::<Recipe>());
    println!("  Vendors:     {}", store.count::<Vendor>());
    println!("  Ingredients: {}", store.count::<Ingredient>());
    Ok(())
}
