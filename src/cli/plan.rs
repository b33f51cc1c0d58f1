use alimento_catalog::recipe_by_id;
use alimento_shared::{DAILY_GOALS, MealSlot};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use strum::VariantArray;

pub fn generate(start: Option<NaiveDate>, days: u8, preferences: String) -> Result<()> {
    let start = start.unwrap_or_else(|| Local::now().date_naive());
    let plan = alimento_mealplan::generate(&alimento_mealplan::Generate {
        start,
        days,
        preferences,
    })?;

    for entry in plan.entries() {
        println!("{}", entry.date.format("%a %Y-%m-%d"));
        for slot in MealSlot::VARIANTS {
            let name = recipe_by_id(entry.slot(*slot))
                .map(|recipe| recipe.name)
                .unwrap_or("-");
            println!("  {:<10} {name}", slot.as_ref());
        }

        let facts = plan.day_nutrition(entry.date);
        println!(
            "  {:<10} {:.0} kcal, {:.0} g protein, {:.0} g carbs, {:.0} g fat",
            "total", facts.calories, facts.protein, facts.carbs, facts.fat
        );
    }

    let average = plan.average_nutrition();
    println!();
    println!("Daily average vs goals");
    println!(
        "  calories {:>6.0} / {:.0} kcal",
        average.calories, DAILY_GOALS.calories
    );
    println!(
        "  protein  {:>6.0} / {:.0} g",
        average.protein, DAILY_GOALS.protein
    );
    println!(
        "  carbs    {:>6.0} / {:.0} g",
        average.carbs, DAILY_GOALS.carbs
    );
    println!("  fat      {:>6.0} / {:.0} g", average.fat, DAILY_GOALS.fat);

    Ok(())
}
