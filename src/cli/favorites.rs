use alimento_catalog::{recipe_by_id, swap_by_id};
use alimento_profile::{FavoriteRecipes, FavoriteSwap, FavoriteSwaps};
use anyhow::Result;

use alimento::store::{Store, keys};

use crate::cli::food_name;

pub fn list(config: alimento::config::Config) -> Result<()> {
    let store = Store::open(&config.storage.dir);
    let recipes: FavoriteRecipes = store.load_or_default(keys::FAVORITE_RECIPES);
    let swaps: FavoriteSwaps = store.load_or_default(keys::FAVORITE_SWAPS);

    if recipes.is_empty() && swaps.is_empty() {
        println!("No favorites yet");
        return Ok(());
    }

    if !recipes.is_empty() {
        println!("Favorite recipes");
        for id in recipes.iter() {
            let name = recipe_by_id(Some(id))
                .map(|recipe| recipe.name)
                .unwrap_or("(no longer in the catalog)");
            println!("  {id:>2} {name}");
        }
    }

    if !swaps.is_empty() {
        println!("Favorite smart swaps");
        for favorite in swaps.iter() {
            println!(
                "  {} {} -> {}",
                favorite.id,
                food_name(&favorite.original),
                food_name(&favorite.alternative),
            );
        }
    }

    Ok(())
}

pub fn toggle_recipe(config: alimento::config::Config, id: String) -> Result<()> {
    let Some(recipe) = recipe_by_id(Some(&id)) else {
        tracing::error!("recipe {id} not found");
        return Ok(());
    };

    let store = Store::open(&config.storage.dir);
    let mut favorites: FavoriteRecipes = store.load_or_default(keys::FAVORITE_RECIPES);
    let added = favorites.toggle(id.as_str());
    store.save(keys::FAVORITE_RECIPES, &favorites)?;

    if added {
        println!("Added {} to favorites", recipe.name);
    } else {
        println!("Removed {} from favorites", recipe.name);
    }

    Ok(())
}

pub fn toggle_swap(config: alimento::config::Config, id: String) -> Result<()> {
    let Some(pair) = swap_by_id(&id) else {
        tracing::error!("swap {id} not found");
        return Ok(());
    };

    let store = Store::open(&config.storage.dir);
    let mut favorites: FavoriteSwaps = store.load_or_default(keys::FAVORITE_SWAPS);
    let added = favorites.toggle(FavoriteSwap {
        id: pair.id.to_owned(),
        original: pair.original.to_owned(),
        alternative: pair.alternative.to_owned(),
    });
    store.save(keys::FAVORITE_SWAPS, &favorites)?;

    if added {
        println!(
            "Added swap {} -> {} to favorites",
            food_name(pair.original),
            food_name(pair.alternative)
        );
    } else {
        println!(
            "Removed swap {} -> {} from favorites",
            food_name(pair.original),
            food_name(pair.alternative)
        );
    }

    Ok(())
}
