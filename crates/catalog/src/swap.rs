use crate::data;
use crate::food::{FoodItem, food_by_id};

/// A curated pairing between a common food and a friendlier alternative
/// from the same catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct SwapPair {
    pub id: &'static str,
    pub original: &'static str,
    pub alternative: &'static str,
}

impl SwapPair {
    pub fn original_food(&self) -> Option<&'static FoodItem> {
        food_by_id(self.original)
    }

    pub fn alternative_food(&self) -> Option<&'static FoodItem> {
        food_by_id(self.alternative)
    }
}

/// The suggested swaps, in display order.
pub fn swap_pairs() -> &'static [SwapPair] {
    &data::SWAP_PAIRS
}

pub fn swap_by_id(id: &str) -> Option<&'static SwapPair> {
    data::SWAP_PAIRS.iter().find(|pair| pair.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_resolves_to_catalog_foods() {
        assert_eq!(swap_pairs().len(), 7);
        for pair in swap_pairs() {
            assert!(pair.original_food().is_some(), "{} original", pair.id);
            assert!(pair.alternative_food().is_some(), "{} alternative", pair.id);
        }
    }

    #[test]
    fn finds_pairs_by_id() {
        let pair = swap_by_id("swap-3").unwrap();
        assert_eq!(pair.original_food().unwrap().name, "Wheat Bread");
        assert_eq!(pair.alternative_food().unwrap().name, "White Rice");
        assert!(swap_by_id("swap-9").is_none());
    }
}
