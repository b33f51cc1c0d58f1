use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

use alimento_shared::Result;

#[derive(Debug, Validate)]
pub struct BmiInput {
    /// Height in centimeters.
    #[validate(range(exclusive_min = 0.0))]
    pub height: f64,
    /// Weight in kilograms.
    #[validate(range(exclusive_min = 0.0))]
    pub weight: f64,
}

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    #[strum(serialize = "Normal weight")]
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Boundaries are half-open: 18.5 and 25 belong to the next band up.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::NormalWeight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obesity
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Body mass index from metric measurements. The reported value is
/// rounded to one decimal, the category comes from the raw value.
pub fn calculate_bmi(input: &BmiInput) -> Result<BmiReport> {
    input.validate()?;

    let height_m = input.height / 100.0;
    let bmi = input.weight / (height_m * height_m);

    Ok(BmiReport {
        bmi: (bmi * 10.0).round() / 10.0,
        category: BmiCategory::from_bmi(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn try_report(height: f64, weight: f64) -> Result<BmiReport> {
        calculate_bmi(&BmiInput { height, weight })
    }

    fn report(height: f64, weight: f64) -> BmiReport {
        try_report(height, weight).unwrap()
    }

    #[test]
    fn computes_and_rounds() {
        let r = report(180.0, 75.0);
        assert_eq!(r.bmi, 23.1);
        assert_eq!(r.category, BmiCategory::NormalWeight);
    }

    #[test]
    fn boundaries_belong_to_the_upper_band() {
        assert_eq!(report(200.0, 74.0).category, BmiCategory::NormalWeight);
        assert_eq!(report(200.0, 100.0).category, BmiCategory::Overweight);
        assert_eq!(report(200.0, 120.0).category, BmiCategory::Obesity);
        assert_eq!(report(200.0, 73.0).category, BmiCategory::Underweight);
    }

    #[test]
    fn category_comes_from_the_unrounded_value() {
        let r = report(200.0, 73.9);
        assert_eq!(r.bmi, 18.5);
        assert_eq!(r.category, BmiCategory::Underweight);
    }

    #[test]
    fn rejects_non_positive_measurements() {
        assert!(try_report(0.0, 75.0).is_err());
        assert!(try_report(180.0, -5.0).is_err());
        assert!(try_report(f64::NAN, 75.0).is_err());
    }

    #[test]
    fn category_labels_match_the_scale() {
        assert_eq!(BmiCategory::NormalWeight.to_string(), "Normal weight");
        assert_eq!(BmiCategory::Obesity.as_ref(), "Obesity");
    }
}
