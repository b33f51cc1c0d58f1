use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    #[default]
    Breakfast,
    Lunch,
    Dinner,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::VariantArray;

    use super::*;

    #[test]
    fn parses_and_displays_lowercase() {
        assert_eq!(MealSlot::from_str("lunch").unwrap(), MealSlot::Lunch);
        assert_eq!(MealSlot::Dinner.to_string(), "dinner");
        assert!(MealSlot::from_str("brunch").is_err());
    }

    #[test]
    fn variants_follow_the_day() {
        assert_eq!(
            MealSlot::VARIANTS,
            &[MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
        );
    }
}
