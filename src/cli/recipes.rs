use alimento_catalog::{recipe_by_id, search_recipes};
use alimento_profile::FavoriteRecipes;
use anyhow::Result;

use alimento::store::{Store, keys};

pub fn list(config: alimento::config::Config, query: Option<String>) -> Result<()> {
    let store = Store::open(&config.storage.dir);
    let favorites: FavoriteRecipes = store.load_or_default(keys::FAVORITE_RECIPES);

    let recipes = search_recipes(query.as_deref().unwrap_or(""));
    if recipes.is_empty() {
        println!("No recipes match");
        return Ok(());
    }

    for recipe in recipes {
        let is_favorite = favorites.contains(recipe.id);
        let marker = if is_favorite { "*" } else { " " };
        println!(
            "{:>2} {} {:<35} {:>3} min  serves {}  [{}]",
            recipe.id,
            marker,
            recipe.name,
            recipe.total_time(),
            recipe.servings,
            recipe.tags.join(", ")
        );
    }

    Ok(())
}

pub fn show(id: String) -> Result<()> {
    let Some(recipe) = recipe_by_id(Some(&id)) else {
        tracing::error!("recipe {id} not found");
        return Ok(());
    };

    println!("{}", recipe.name);
    println!(
        "prep {} min, cook {} min, serves {}",
        recipe.prep_time, recipe.cook_time, recipe.servings
    );
    println!(
        "{:.0} kcal, {:.0} g protein, {:.0} g carbs, {:.0} g fat per serving",
        recipe.nutrition.calories,
        recipe.nutrition.protein,
        recipe.nutrition.carbs,
        recipe.nutrition.fat
    );
    println!("tags: {}", recipe.tags.join(", "));

    println!();
    println!("Ingredients");
    for ingredient in recipe.ingredients {
        let optional = if ingredient.optional {
            " (optional)"
        } else {
            ""
        };
        println!("  {} - {}{}", ingredient.name, ingredient.amount, optional);
        if !ingredient.substitutes.is_empty() {
            println!("    substitutes: {}", ingredient.substitutes.join(", "));
        }
    }

    println!();
    println!("Instructions");
    for (step, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {instruction}", step + 1);
    }

    Ok(())
}
