use alimento_shared::MealSlot;
use chrono::NaiveDate;

/// One day of planned meals. Slots hold recipe ids from the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MealPlanEntry {
    pub date: NaiveDate,
    pub breakfast: Option<String>,
    pub lunch: Option<String>,
    pub dinner: Option<String>,
}

impl MealPlanEntry {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            breakfast: None,
            lunch: None,
            dinner: None,
        }
    }

    pub fn slot(&self, slot: MealSlot) -> Option<&str> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_deref(),
            MealSlot::Lunch => self.lunch.as_deref(),
            MealSlot::Dinner => self.dinner.as_deref(),
        }
    }

    pub fn set_slot(&mut self, slot: MealSlot, recipe_id: Option<String>) {
        let target = match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        };
        *target = recipe_id;
    }

    /// True when no slot holds a recipe.
    pub fn is_empty(&self) -> bool {
        self.breakfast.is_none() && self.lunch.is_none() && self.dinner.is_none()
    }
}
