//! The built-in catalog. Entries are compiled in and never change at
//! runtime, so everything borrows from the binary.

use alimento_shared::NutritionFacts;

use crate::food::FoodItem;
use crate::recipe::{Ingredient, Recipe};
use crate::swap::SwapPair;

pub(crate) static FOODS: [FoodItem; 9] = [
    FoodItem {
        id: "1",
        name: "Almonds",
        category: "Nuts",
        nutrition: NutritionFacts::new(164.0, 6.0, 6.0, 14.0),
        allergens: &["nuts"],
        alternatives: &["sunflower seeds", "pumpkin seeds"],
    },
    FoodItem {
        id: "2",
        name: "Eggs",
        category: "Dairy & Alternatives",
        nutrition: NutritionFacts::new(72.0, 6.0, 0.6, 5.0),
        allergens: &["eggs"],
        alternatives: &["flax egg", "chia egg", "silken tofu"],
    },
    FoodItem {
        id: "3",
        name: "White Rice",
        category: "Grains",
        nutrition: NutritionFacts::new(130.0, 2.7, 28.0, 0.3),
        allergens: &[],
        alternatives: &["brown rice", "quinoa", "cauliflower rice"],
    },
    FoodItem {
        id: "4",
        name: "Cow's Milk",
        category: "Dairy & Alternatives",
        nutrition: NutritionFacts::new(103.0, 8.0, 12.0, 2.4),
        allergens: &["dairy", "lactose"],
        alternatives: &["almond milk", "oat milk", "soy milk"],
    },
    FoodItem {
        id: "5",
        name: "Wheat Bread",
        category: "Grains",
        nutrition: NutritionFacts::new(80.0, 4.0, 15.0, 1.0),
        allergens: &["gluten", "wheat"],
        alternatives: &["gluten-free bread", "lettuce wraps", "corn tortillas"],
    },
    FoodItem {
        id: "6",
        name: "Peanut Butter",
        category: "Spreads",
        nutrition: NutritionFacts::new(188.0, 8.0, 6.0, 16.0),
        allergens: &["peanuts"],
        alternatives: &["almond butter", "sunflower seed butter", "tahini"],
    },
    FoodItem {
        id: "7",
        name: "Shrimp",
        category: "Seafood",
        nutrition: NutritionFacts::new(99.0, 24.0, 0.0, 1.0),
        allergens: &["shellfish", "crustaceans"],
        alternatives: &["tofu", "white fish", "hearts of palm"],
    },
    FoodItem {
        id: "8",
        name: "Soy Sauce",
        category: "Condiments",
        nutrition: NutritionFacts::new(8.0, 1.0, 1.0, 0.0),
        allergens: &["soy", "wheat"],
        alternatives: &["coconut aminos", "tamari", "salt"],
    },
    FoodItem {
        id: "9",
        name: "Yogurt",
        category: "Dairy & Alternatives",
        nutrition: NutritionFacts::new(150.0, 12.0, 17.0, 4.0),
        allergens: &["dairy", "lactose"],
        alternatives: &["coconut yogurt", "almond yogurt", "cashew yogurt"],
    },
];

pub(crate) static RECIPES: [Recipe; 6] = [
    Recipe {
        id: "1",
        name: "Avocado Toast with Poached Eggs",
        prep_time: 10,
        cook_time: 5,
        servings: 2,
        ingredients: &[
            Ingredient {
                name: "Bread",
                amount: "2 slices",
                optional: false,
                substitutes: &["gluten-free bread", "sweet potato slices"],
            },
            Ingredient {
                name: "Avocado",
                amount: "1 medium",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Eggs",
                amount: "2 large",
                optional: false,
                substitutes: &["tofu scramble"],
            },
            Ingredient {
                name: "Cherry tomatoes",
                amount: "1/2 cup",
                optional: true,
                substitutes: &[],
            },
            Ingredient {
                name: "Red pepper flakes",
                amount: "1/4 tsp",
                optional: true,
                substitutes: &["black pepper"],
            },
            Ingredient {
                name: "Salt",
                amount: "to taste",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Olive oil",
                amount: "1 tsp",
                optional: true,
                substitutes: &["avocado oil"],
            },
        ],
        instructions: &[
            "Toast bread slices until golden and crisp.",
            "While bread is toasting, bring a pot of water to a gentle simmer. Add a splash of vinegar.",
            "Crack an egg into a small bowl, then gently slide it into the simmering water. Repeat with the second egg. Cook for 3-4 minutes for a runny yolk.",
            "Mash avocado in a bowl with salt and a drizzle of olive oil.",
            "Spread mashed avocado onto toast. Top with poached eggs, halved cherry tomatoes, and red pepper flakes.",
            "Serve immediately.",
        ],
        nutrition: NutritionFacts::new(350.0, 14.0, 30.0, 20.0),
        tags: &["breakfast", "vegetarian", "high-protein"],
    },
    Recipe {
        id: "2",
        name: "Quinoa Buddha Bowl",
        prep_time: 15,
        cook_time: 20,
        servings: 2,
        ingredients: &[
            Ingredient {
                name: "Quinoa",
                amount: "1 cup",
                optional: false,
                substitutes: &["brown rice", "cauliflower rice"],
            },
            Ingredient {
                name: "Sweet potato",
                amount: "1 medium",
                optional: false,
                substitutes: &["butternut squash"],
            },
            Ingredient {
                name: "Chickpeas",
                amount: "1 can (15 oz)",
                optional: false,
                substitutes: &["black beans", "tofu cubes"],
            },
            Ingredient {
                name: "Kale",
                amount: "2 cups",
                optional: false,
                substitutes: &["spinach", "mixed greens"],
            },
            Ingredient {
                name: "Avocado",
                amount: "1",
                optional: true,
                substitutes: &[],
            },
            Ingredient {
                name: "Tahini",
                amount: "2 tbsp",
                optional: true,
                substitutes: &["hummus", "yogurt"],
            },
            Ingredient {
                name: "Lemon juice",
                amount: "1 tbsp",
                optional: true,
                substitutes: &[],
            },
        ],
        instructions: &[
            "Rinse quinoa and cook according to package instructions.",
            "Preheat oven to 400°F (200°C). Cube sweet potato, toss with olive oil and salt, and roast for 20 minutes or until tender.",
            "Drain and rinse chickpeas. Toss with spices of choice and roast alongside sweet potatoes for the last 10 minutes.",
            "Massage kale with a little olive oil and salt until softened.",
            "Make dressing by whisking together tahini, lemon juice, water, salt, and pepper.",
            "Assemble bowls with quinoa, roasted veggies, chickpeas, and kale. Top with sliced avocado and drizzle with tahini dressing.",
        ],
        nutrition: NutritionFacts::new(450.0, 18.0, 65.0, 15.0),
        tags: &["lunch", "dinner", "vegan", "gluten-free"],
    },
    Recipe {
        id: "3",
        name: "Mediterranean Chickpea Salad",
        prep_time: 15,
        cook_time: 0,
        servings: 4,
        ingredients: &[
            Ingredient {
                name: "Chickpeas",
                amount: "2 cans (15 oz each)",
                optional: false,
                substitutes: &["white beans", "fava beans"],
            },
            Ingredient {
                name: "Cucumber",
                amount: "1 medium",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Cherry tomatoes",
                amount: "1 cup",
                optional: false,
                substitutes: &["grape tomatoes", "diced roma tomatoes"],
            },
            Ingredient {
                name: "Red onion",
                amount: "1/4 cup",
                optional: true,
                substitutes: &["green onion", "shallots"],
            },
            Ingredient {
                name: "Kalamata olives",
                amount: "1/2 cup",
                optional: true,
                substitutes: &["black olives"],
            },
            Ingredient {
                name: "Feta cheese",
                amount: "1/2 cup",
                optional: true,
                substitutes: &["goat cheese", "vegan feta"],
            },
            Ingredient {
                name: "Fresh parsley",
                amount: "1/4 cup",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Olive oil",
                amount: "3 tbsp",
                optional: false,
                substitutes: &["avocado oil"],
            },
            Ingredient {
                name: "Lemon juice",
                amount: "2 tbsp",
                optional: false,
                substitutes: &["white wine vinegar"],
            },
            Ingredient {
                name: "Garlic",
                amount: "2 cloves",
                optional: true,
                substitutes: &[],
            },
        ],
        instructions: &[
            "Drain and rinse chickpeas and place in a large bowl.",
            "Dice cucumber, halve cherry tomatoes, and finely chop red onion. Add to the bowl.",
            "Slice olives and add to the bowl, along with crumbled feta cheese.",
            "Chop parsley and add to the mixture.",
            "In a small bowl, whisk together olive oil, lemon juice, minced garlic, salt, and pepper.",
            "Pour dressing over the salad and toss to combine.",
            "Refrigerate for at least 30 minutes before serving to allow flavors to meld.",
        ],
        nutrition: NutritionFacts::new(320.0, 12.0, 30.0, 18.0),
        tags: &["lunch", "vegetarian", "gluten-free", "mediterranean"],
    },
    Recipe {
        id: "4",
        name: "Teriyaki Salmon Bowl",
        prep_time: 10,
        cook_time: 20,
        servings: 2,
        ingredients: &[
            Ingredient {
                name: "Salmon fillets",
                amount: "2 (6 oz each)",
                optional: false,
                substitutes: &["tofu steaks", "chicken breast"],
            },
            Ingredient {
                name: "Brown rice",
                amount: "1 cup uncooked",
                optional: false,
                substitutes: &["quinoa", "cauliflower rice"],
            },
            Ingredient {
                name: "Broccoli",
                amount: "2 cups",
                optional: false,
                substitutes: &["green beans", "asparagus"],
            },
            Ingredient {
                name: "Carrot",
                amount: "1 large",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Avocado",
                amount: "1",
                optional: true,
                substitutes: &[],
            },
            Ingredient {
                name: "Teriyaki sauce",
                amount: "1/4 cup",
                optional: false,
                substitutes: &["soy sauce with honey"],
            },
            Ingredient {
                name: "Sesame seeds",
                amount: "1 tbsp",
                optional: true,
                substitutes: &[],
            },
            Ingredient {
                name: "Green onion",
                amount: "2 stalks",
                optional: true,
                substitutes: &[],
            },
        ],
        instructions: &[
            "Cook brown rice according to package instructions.",
            "Preheat oven to 400°F (200°C). Place salmon on a baking sheet and brush with half of the teriyaki sauce.",
            "Bake salmon for 12-15 minutes or until it flakes easily with a fork.",
            "Meanwhile, steam broccoli and julienne or grate the carrot.",
            "Slice avocado when ready to serve.",
            "Assemble bowls with rice as the base, add vegetables and salmon.",
            "Drizzle with remaining teriyaki sauce and sprinkle with sesame seeds and chopped green onion.",
        ],
        nutrition: NutritionFacts::new(520.0, 32.0, 45.0, 22.0),
        tags: &["dinner", "high-protein", "pescatarian"],
    },
    Recipe {
        id: "5",
        name: "Blueberry Oatmeal Breakfast Bars",
        prep_time: 15,
        cook_time: 25,
        servings: 9,
        ingredients: &[
            Ingredient {
                name: "Rolled oats",
                amount: "2 cups",
                optional: false,
                substitutes: &["quick oats", "gluten-free oats"],
            },
            Ingredient {
                name: "Almond flour",
                amount: "1 cup",
                optional: false,
                substitutes: &["oat flour", "all-purpose flour"],
            },
            Ingredient {
                name: "Cinnamon",
                amount: "1 tsp",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Baking powder",
                amount: "1 tsp",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Salt",
                amount: "1/4 tsp",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Maple syrup",
                amount: "1/3 cup",
                optional: false,
                substitutes: &["honey", "agave nectar"],
            },
            Ingredient {
                name: "Coconut oil",
                amount: "1/3 cup",
                optional: false,
                substitutes: &["butter", "applesauce"],
            },
            Ingredient {
                name: "Almond milk",
                amount: "1/2 cup",
                optional: false,
                substitutes: &["any plant or dairy milk"],
            },
            Ingredient {
                name: "Vanilla extract",
                amount: "1 tsp",
                optional: true,
                substitutes: &[],
            },
            Ingredient {
                name: "Fresh blueberries",
                amount: "1 1/2 cups",
                optional: false,
                substitutes: &["raspberries", "chopped strawberries"],
            },
        ],
        instructions: &[
            "Preheat oven to 350°F (175°C) and line an 8x8 inch baking pan with parchment paper.",
            "In a large bowl, mix oats, almond flour, cinnamon, baking powder, and salt.",
            "In a separate bowl, whisk together maple syrup, melted coconut oil, almond milk, and vanilla.",
            "Pour wet ingredients into dry ingredients and stir until combined.",
            "Gently fold in 1 cup of blueberries.",
            "Press 2/3 of the mixture into the prepared pan. Scatter remaining 1/2 cup blueberries on top.",
            "Crumble the remaining oat mixture over the blueberries.",
            "Bake for 25-30 minutes until golden brown. Allow to cool completely before cutting into bars.",
            "Store in an airtight container for up to 5 days or freeze for longer storage.",
        ],
        nutrition: NutritionFacts::new(220.0, 5.0, 25.0, 12.0),
        tags: &["breakfast", "snack", "vegetarian", "meal-prep"],
    },
    Recipe {
        id: "6",
        name: "Lentil Vegetable Soup",
        prep_time: 15,
        cook_time: 30,
        servings: 6,
        ingredients: &[
            Ingredient {
                name: "Green or brown lentils",
                amount: "1 cup",
                optional: false,
                substitutes: &["red lentils", "split peas"],
            },
            Ingredient {
                name: "Olive oil",
                amount: "2 tbsp",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Onion",
                amount: "1 medium",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Carrots",
                amount: "2 large",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Celery",
                amount: "2 stalks",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Garlic",
                amount: "3 cloves",
                optional: false,
                substitutes: &["1 tsp garlic powder"],
            },
            Ingredient {
                name: "Vegetable broth",
                amount: "6 cups",
                optional: false,
                substitutes: &["chicken broth"],
            },
            Ingredient {
                name: "Diced tomatoes",
                amount: "1 can (14 oz)",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Cumin",
                amount: "1 tsp",
                optional: false,
                substitutes: &[],
            },
            Ingredient {
                name: "Thyme",
                amount: "1/2 tsp",
                optional: true,
                substitutes: &[],
            },
            Ingredient {
                name: "Bay leaf",
                amount: "1",
                optional: true,
                substitutes: &[],
            },
            Ingredient {
                name: "Spinach",
                amount: "2 cups",
                optional: true,
                substitutes: &["kale", "swiss chard"],
            },
            Ingredient {
                name: "Lemon juice",
                amount: "1 tbsp",
                optional: true,
                substitutes: &[],
            },
        ],
        instructions: &[
            "Rinse lentils under cold water and check for any stones or debris.",
            "Heat olive oil in a large pot over medium heat. Add diced onion, carrots, and celery, and sauté for 5-7 minutes until softened.",
            "Add minced garlic and sauté for 30 seconds until fragrant.",
            "Stir in lentils, vegetable broth, diced tomatoes with their juice, cumin, thyme, bay leaf, salt, and pepper.",
            "Bring to a boil, then reduce heat to low and simmer, partially covered, for 25-30 minutes or until lentils are tender.",
            "Remove bay leaf. Stir in spinach and cook until wilted, about 2 minutes.",
            "Stir in lemon juice and adjust seasonings to taste.",
            "Serve hot, optionally with a sprinkle of fresh herbs or a dollop of yogurt.",
        ],
        nutrition: NutritionFacts::new(240.0, 12.0, 36.0, 6.0),
        tags: &["dinner", "soup", "vegan", "gluten-free"],
    },
];

pub(crate) static SWAP_PAIRS: [SwapPair; 7] = [
    SwapPair {
        id: "swap-1",
        original: "2",
        alternative: "1",
    },
    SwapPair {
        id: "swap-2",
        original: "4",
        alternative: "3",
    },
    SwapPair {
        id: "swap-3",
        original: "5",
        alternative: "3",
    },
    SwapPair {
        id: "swap-4",
        original: "6",
        alternative: "1",
    },
    SwapPair {
        id: "swap-5",
        original: "7",
        alternative: "3",
    },
    SwapPair {
        id: "swap-6",
        original: "8",
        alternative: "1",
    },
    SwapPair {
        id: "swap-7",
        original: "9",
        alternative: "3",
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique_per_table() {
        let food_ids: HashSet<_> = FOODS.iter().map(|food| food.id).collect();
        assert_eq!(food_ids.len(), FOODS.len());

        let recipe_ids: HashSet<_> = RECIPES.iter().map(|recipe| recipe.id).collect();
        assert_eq!(recipe_ids.len(), RECIPES.len());

        let swap_ids: HashSet<_> = SWAP_PAIRS.iter().map(|pair| pair.id).collect();
        assert_eq!(swap_ids.len(), SWAP_PAIRS.len());
    }

    #[test]
    fn entries_are_well_formed() {
        for food in &FOODS {
            assert!(food.nutrition.calories >= 0.0, "{}", food.name);
        }

        for recipe in &RECIPES {
            assert!(recipe.servings > 0, "{}", recipe.name);
            assert!(!recipe.ingredients.is_empty(), "{}", recipe.name);
            assert!(!recipe.instructions.is_empty(), "{}", recipe.name);
            assert!(recipe.nutrition.calories > 0.0, "{}", recipe.name);
        }
    }
}
