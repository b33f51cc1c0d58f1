use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted swap suggestion, remembered with the moment it was used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsedAlternative {
    pub original_food_id: String,
    pub alternative_food_id: String,
    pub date: DateTime<Utc>,
}

/// The used-alternatives log, in the order the swaps were accepted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsedAlternatives(Vec<UsedAlternative>);

impl UsedAlternatives {
    /// Appends a use of `alternative_id` in place of `original_id`,
    /// stamped with the current time.
    pub fn record(&mut self, original_id: impl Into<String>, alternative_id: impl Into<String>) {
        self.0.push(UsedAlternative {
            original_food_id: original_id.into(),
            alternative_food_id: alternative_id.into(),
            date: Utc::now(),
        });
    }

    /// Removes the entry at `index`. Out-of-range indexes are a no-op.
    pub fn remove(&mut self, index: usize) -> bool {
        if index < self.0.len() {
            self.0.remove(index);
            true
        } else {
            false
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &UsedAlternative> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
