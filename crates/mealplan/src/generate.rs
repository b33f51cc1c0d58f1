use alimento_catalog::{Recipe, recipes};
use alimento_shared::MealSlot;
use chrono::{Days, NaiveDate};
use rand::seq::IndexedRandom;
use strum::VariantArray;
use validator::Validate;

use crate::MealPlan;

#[derive(Debug, Validate)]
pub struct Generate {
    pub start: NaiveDate,
    #[validate(range(min = 1, max = 14))]
    pub days: u8,
    pub preferences: String,
}

/// Builds a fresh plan covering `days` consecutive dates from `start`,
/// drawing every slot independently from the eligible recipes.
pub fn generate(input: &Generate) -> alimento_shared::Result<MealPlan> {
    input.validate()?;

    let eligible = eligible_recipes(&input.preferences);
    let mut rng = rand::rng();
    let mut plan = MealPlan::new();

    for offset in 0..u64::from(input.days) {
        let date = input.start + Days::new(offset);
        for slot in MealSlot::VARIANTS {
            if let Some(recipe) = eligible.choose(&mut rng) {
                plan.upsert(date, *slot, recipe.id);
            }
        }
    }

    Ok(plan)
}

/// Recipes whose tags contain any of the comma-separated preference
/// tokens. Blank preferences, or preferences nothing matches, fall back
/// to the whole catalog.
pub fn eligible_recipes(preferences: &str) -> Vec<&'static Recipe> {
    let tokens: Vec<String> = preferences
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect();

    let all: Vec<&'static Recipe> = recipes().iter().collect();
    if tokens.is_empty() {
        return all;
    }

    let matched: Vec<&'static Recipe> = all
        .iter()
        .copied()
        .filter(|recipe| tokens.iter().any(|token| recipe.matches_tag_token(token)))
        .collect();

    if matched.is_empty() {
        tracing::info!(preferences, "no recipes match, falling back to the full catalog");
        return all;
    }

    matched
}
