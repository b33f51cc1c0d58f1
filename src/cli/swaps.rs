use alimento_catalog::{swap_by_id, swap_pairs};
use alimento_profile::{FavoriteSwaps, UsedAlternatives};
use anyhow::Result;

use alimento::store::{Store, keys};

use crate::cli::food_name;

pub fn list(config: alimento::config::Config) -> Result<()> {
    let store = Store::open(&config.storage.dir);
    let favorites: FavoriteSwaps = store.load_or_default(keys::FAVORITE_SWAPS);

    for pair in swap_pairs() {
        let is_favorite = favorites.contains(pair.id);
        let marker = if is_favorite { "*" } else { " " };
        let original = pair.original_food();
        let alternative = pair.alternative_food();
        println!(
            "{:>6} {marker} {} ({:.0} kcal) -> {} ({:.0} kcal)",
            pair.id,
            original.map(|food| food.name).unwrap_or(pair.original),
            original.map(|food| food.nutrition.calories).unwrap_or(0.0),
            alternative.map(|food| food.name).unwrap_or(pair.alternative),
            alternative
                .map(|food| food.nutrition.calories)
                .unwrap_or(0.0),
        );
    }

    Ok(())
}

pub fn use_swap(config: alimento::config::Config, id: String) -> Result<()> {
    let Some(pair) = swap_by_id(&id) else {
        tracing::error!("swap {id} not found");
        return Ok(());
    };

    let store = Store::open(&config.storage.dir);
    let mut log: UsedAlternatives = store.load_or_default(keys::USED_ALTERNATIVES);
    log.record(pair.original, pair.alternative);
    store.save(keys::USED_ALTERNATIVES, &log)?;

    println!(
        "Recorded {} -> {}",
        food_name(pair.original),
        food_name(pair.alternative)
    );

    Ok(())
}

pub fn history(config: alimento::config::Config) -> Result<()> {
    let store = Store::open(&config.storage.dir);
    let log: UsedAlternatives = store.load_or_default(keys::USED_ALTERNATIVES);

    if log.is_empty() {
        println!("No alternatives used yet");
        return Ok(());
    }

    for (index, used) in log.iter().enumerate() {
        println!(
            "[{index}] {} {} -> {}",
            used.date.format("%Y-%m-%d"),
            food_name(&used.original_food_id),
            food_name(&used.alternative_food_id),
        );
    }

    Ok(())
}

pub fn remove(config: alimento::config::Config, index: usize) -> Result<()> {
    let store = Store::open(&config.storage.dir);
    let mut log: UsedAlternatives = store.load_or_default(keys::USED_ALTERNATIVES);

    if !log.remove(index) {
        tracing::error!("no used alternative at index {index}");
        return Ok(());
    }

    store.save(keys::USED_ALTERNATIVES, &log)?;
    println!("Alternative removed");

    Ok(())
}
