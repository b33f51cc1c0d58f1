use serde::{Deserialize, Serialize};

/// Favorite recipe ids, persisted as a bare list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteRecipes(Vec<String>);

impl FavoriteRecipes {
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|candidate| candidate == id)
    }

    /// Adds the id, or removes it when already present. Returns true when
    /// the id is a favorite afterwards.
    pub fn toggle(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            self.0.retain(|candidate| candidate != &id);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A remembered swap: the pair id plus both food ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FavoriteSwap {
    pub id: String,
    pub original: String,
    pub alternative: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSwaps(Vec<FavoriteSwap>);

impl FavoriteSwaps {
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|swap| swap.id == id)
    }

    /// Adds the pairing, or removes it when its id is already present.
    /// Returns true when the pairing is a favorite afterwards.
    pub fn toggle(&mut self, swap: FavoriteSwap) -> bool {
        if self.contains(&swap.id) {
            self.0.retain(|candidate| candidate.id != swap.id);
            false
        } else {
            self.0.push(swap);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteSwap> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_toggle_is_an_involution() {
        let mut favorites = FavoriteRecipes::default();
        assert!(favorites.toggle("2"));
        assert!(favorites.contains("2"));
        assert!(!favorites.toggle("2"));
        assert!(!favorites.contains("2"));
        assert!(favorites.is_empty());
    }

    #[test]
    fn recipe_toggle_keeps_insertion_order() {
        let mut favorites = FavoriteRecipes::default();
        favorites.toggle("3");
        favorites.toggle("1");
        favorites.toggle("5");
        favorites.toggle("1");
        let ids: Vec<_> = favorites.iter().collect();
        assert_eq!(ids, ["3", "5"]);
    }

    #[test]
    fn swap_toggle_matches_on_the_pair_id() {
        let swap = FavoriteSwap {
            id: "swap-3".to_owned(),
            original: "5".to_owned(),
            alternative: "3".to_owned(),
        };

        let mut favorites = FavoriteSwaps::default();
        assert!(favorites.toggle(swap.clone()));
        assert_eq!(favorites.len(), 1);
        assert!(!favorites.toggle(swap));
        assert!(favorites.is_empty());
    }

    #[test]
    fn lists_serialize_bare() {
        let mut favorites = FavoriteRecipes::default();
        favorites.toggle("2");
        favorites.toggle("6");
        let json = serde_json::to_string(&favorites).unwrap();
        assert_eq!(json, r#"["2","6"]"#);

        let parsed: FavoriteRecipes = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, favorites);
    }
}
