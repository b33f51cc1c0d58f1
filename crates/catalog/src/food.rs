use alimento_shared::NutritionFacts;

use crate::data;

/// A staple food with its allergens and common substitutions.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub nutrition: NutritionFacts,
    pub allergens: &'static [&'static str],
    pub alternatives: &'static [&'static str],
}

impl FoodItem {
    pub fn has_allergen(&self, allergen: &str) -> bool {
        self.allergens
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(allergen))
    }
}

/// Every food in the catalog, in display order.
pub fn foods() -> &'static [FoodItem] {
    &data::FOODS
}

pub fn food_by_id(id: &str) -> Option<&'static FoodItem> {
    data::FOODS.iter().find(|food| food.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_foods_by_id() {
        let food = food_by_id("4").unwrap();
        assert_eq!(food.name, "Cow's Milk");
        assert!(food.has_allergen("lactose"));
        assert!(food_by_id("42").is_none());
    }

    #[test]
    fn catalog_is_complete() {
        assert_eq!(foods().len(), 9);
        assert!(foods().iter().all(|food| !food.alternatives.is_empty()));
    }
}
