pub mod auth;
pub mod bmi;
pub mod favorites;
pub mod plan;
pub mod recipes;
pub mod swaps;

/// Display name for a catalog food id, falling back to the raw id when
/// the food is unknown.
pub(crate) fn food_name(id: &str) -> &str {
    alimento_catalog::food_by_id(id)
        .map(|food| food.name)
        .unwrap_or(id)
}
