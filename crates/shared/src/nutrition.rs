use serde::{Deserialize, Serialize};

/// Calories plus macros, in kcal and grams per serving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Daily intake targets shown next to nutrition summaries.
pub const DAILY_GOALS: NutritionFacts = NutritionFacts {
    calories: 2000.0,
    protein: 120.0,
    carbs: 250.0,
    fat: 70.0,
};

impl NutritionFacts {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

impl std::ops::Add for NutritionFacts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::AddAssign for NutritionFacts {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl std::ops::Div<f64> for NutritionFacts {
    type Output = Self;

    fn div(self, divisor: f64) -> Self {
        Self {
            calories: self.calories / divisor,
            protein: self.protein / divisor,
            carbs: self.carbs / divisor,
            fat: self.fat / divisor,
        }
    }
}

impl std::iter::Sum for NutritionFacts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, facts| acc + facts)
    }
}
