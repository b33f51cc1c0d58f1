use alimento_profile::{BmiInput, calculate_bmi};
use anyhow::Result;

pub fn calculate(height: f64, weight: f64) -> Result<()> {
    let report = calculate_bmi(&BmiInput { height, weight })?;

    println!("BMI: {:.1}", report.bmi);
    println!("Category: {}", report.category);

    Ok(())
}
