use std::collections::BTreeMap;

use alimento_shared::{MealSlot, NutritionFacts};
use chrono::NaiveDate;
use strum::VariantArray;

use crate::MealPlanEntry;

/// Planned days keyed by calendar date.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MealPlan {
    days: BTreeMap<NaiveDate, MealPlanEntry>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one slot, creating the day on first write. Existing slots of
    /// the same day keep their recipes.
    pub fn upsert(&mut self, date: NaiveDate, slot: MealSlot, recipe_id: impl Into<String>) {
        self.days
            .entry(date)
            .or_insert_with(|| MealPlanEntry::empty(date))
            .set_slot(slot, Some(recipe_id.into()));
    }

    /// Clears one slot. The day stays in the plan even when its last
    /// recipe goes away.
    pub fn clear(&mut self, date: NaiveDate, slot: MealSlot) {
        if let Some(entry) = self.days.get_mut(&date) {
            entry.set_slot(slot, None);
        }
    }

    /// The entry for a date. Unplanned dates come back as an empty entry,
    /// so callers never have to handle an absence.
    pub fn lookup(&self, date: NaiveDate) -> MealPlanEntry {
        self.days
            .get(&date)
            .cloned()
            .unwrap_or_else(|| MealPlanEntry::empty(date))
    }

    /// Entries in date order.
    pub fn entries(&self) -> impl Iterator<Item = &MealPlanEntry> {
        self.days.values()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Nutrition totals for one day, summed over the slots that resolve
    /// to a catalog recipe.
    pub fn day_nutrition(&self, date: NaiveDate) -> NutritionFacts {
        let entry = self.lookup(date);
        MealSlot::VARIANTS
            .iter()
            .filter_map(|slot| alimento_catalog::recipe_by_id(entry.slot(*slot)))
            .map(|recipe| recipe.nutrition)
            .sum()
    }

    /// Average daily nutrition across the days that plan at least one
    /// meal.
    pub fn average_nutrition(&self) -> NutritionFacts {
        let planned: Vec<NaiveDate> = self
            .days
            .values()
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.date)
            .collect();

        if planned.is_empty() {
            return NutritionFacts::default();
        }

        let total: NutritionFacts = planned.iter().map(|date| self.day_nutrition(*date)).sum();
        total / planned.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn upsert_creates_the_day_and_fills_one_slot() {
        let mut plan = MealPlan::new();
        plan.upsert(date(1), MealSlot::Lunch, "2");

        let entry = plan.lookup(date(1));
        assert_eq!(entry.date, date(1));
        assert_eq!(entry.breakfast, None);
        assert_eq!(entry.lunch.as_deref(), Some("2"));
        assert_eq!(entry.dinner, None);
    }

    #[test]
    fn upsert_keeps_sibling_slots() {
        let mut plan = MealPlan::new();
        plan.upsert(date(1), MealSlot::Lunch, "2");
        plan.upsert(date(1), MealSlot::Dinner, "6");
        plan.upsert(date(1), MealSlot::Lunch, "3");

        let entry = plan.lookup(date(1));
        assert_eq!(entry.lunch.as_deref(), Some("3"));
        assert_eq!(entry.dinner.as_deref(), Some("6"));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn clear_empties_one_slot_but_keeps_the_day() {
        let mut plan = MealPlan::new();
        plan.upsert(date(2), MealSlot::Breakfast, "1");
        plan.upsert(date(2), MealSlot::Dinner, "4");

        plan.clear(date(2), MealSlot::Dinner);
        let entry = plan.lookup(date(2));
        assert_eq!(entry.breakfast.as_deref(), Some("1"));
        assert_eq!(entry.dinner, None);
        assert_eq!(plan.len(), 1);

        plan.clear(date(2), MealSlot::Breakfast);
        assert!(plan.lookup(date(2)).is_empty());
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn clear_on_an_unplanned_date_changes_nothing() {
        let mut plan = MealPlan::new();
        plan.clear(date(3), MealSlot::Lunch);
        assert!(plan.is_empty());
    }

    #[test]
    fn lookup_synthesizes_empty_entries() {
        let plan = MealPlan::new();
        let entry = plan.lookup(date(7));
        assert_eq!(entry.date, date(7));
        assert!(entry.is_empty());
    }

    #[test]
    fn day_nutrition_sums_resolved_slots() {
        let mut plan = MealPlan::new();
        plan.upsert(date(1), MealSlot::Breakfast, "1");
        plan.upsert(date(1), MealSlot::Lunch, "3");
        plan.upsert(date(1), MealSlot::Dinner, "no-such-recipe");

        let facts = plan.day_nutrition(date(1));
        assert_eq!(facts.calories, 670.0);
        assert_eq!(facts.protein, 26.0);
    }

    #[test]
    fn average_nutrition_skips_mealless_days() {
        let mut plan = MealPlan::new();
        plan.upsert(date(1), MealSlot::Lunch, "2");
        plan.upsert(date(2), MealSlot::Lunch, "4");
        plan.upsert(date(3), MealSlot::Lunch, "2");
        plan.clear(date(3), MealSlot::Lunch);

        let average = plan.average_nutrition();
        assert_eq!(average.calories, 485.0);

        assert_eq!(MealPlan::new().average_nutrition(), NutritionFacts::default());
    }
}
