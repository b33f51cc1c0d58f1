use alimento_shared::NutritionFacts;

use crate::data;

#[derive(Clone, Debug, PartialEq)]
pub struct Recipe {
    pub id: &'static str,
    pub name: &'static str,
    pub prep_time: u16,
    pub cook_time: u16,
    pub servings: u16,
    pub ingredients: &'static [Ingredient],
    pub instructions: &'static [&'static str],
    pub nutrition: NutritionFacts,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ingredient {
    pub name: &'static str,
    pub amount: &'static str,
    pub optional: bool,
    pub substitutes: &'static [&'static str],
}

impl Recipe {
    pub fn total_time(&self) -> u16 {
        self.prep_time + self.cook_time
    }

    /// True when any tag contains the given lowercase token.
    pub fn matches_tag_token(&self, token: &str) -> bool {
        self.tags.iter().any(|tag| tag.to_lowercase().contains(token))
    }
}

/// Every recipe in the catalog, in display order.
pub fn recipes() -> &'static [Recipe] {
    &data::RECIPES
}

/// Plans and favorites store recipe ids as loose strings, so the lookup
/// is permissive about missing input.
pub fn recipe_by_id(id: Option<&str>) -> Option<&'static Recipe> {
    data::RECIPES.iter().find(|recipe| Some(recipe.id) == id)
}

/// Case-insensitive substring match over recipe names and tags. An empty
/// query matches everything.
pub fn search_recipes(query: &str) -> Vec<&'static Recipe> {
    let query = query.to_lowercase();
    data::RECIPES
        .iter()
        .filter(|recipe| {
            recipe.name.to_lowercase().contains(&query) || recipe.matches_tag_token(&query)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_tolerates_missing_ids() {
        assert!(recipe_by_id(None).is_none());
        assert!(recipe_by_id(Some("99")).is_none());
        assert_eq!(recipe_by_id(Some("2")).unwrap().name, "Quinoa Buddha Bowl");
    }

    #[test]
    fn search_matches_names_and_tags() {
        let by_name: Vec<_> = search_recipes("BOWL").iter().map(|r| r.id).collect();
        assert_eq!(by_name, ["2", "4"]);

        let by_tag: Vec<_> = search_recipes("break").iter().map(|r| r.id).collect();
        assert_eq!(by_tag, ["1", "5"]);

        assert_eq!(search_recipes("").len(), recipes().len());
        assert!(search_recipes("sushi").is_empty());
    }

    #[test]
    fn total_time_includes_prep_and_cook() {
        let soup = recipe_by_id(Some("6")).unwrap();
        assert_eq!(soup.total_time(), 45);
    }
}
