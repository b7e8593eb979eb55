use serde::{Deserialize, Serialize};

use shared_models::Item;

/// Aggregate view over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total: usize,
    pub average_price: f64,
}

impl StatsSnapshot {
    /// Record count and arithmetic mean of prices; an empty collection
    /// averages to zero.
    pub fn compute(items: &[Item]) -> Self {
        let total = items.len();
        let average_price = if total == 0 {
            0.0
        } else {
            items.iter().map(|item| item.price).sum::<f64>() / total as f64
        };

        Self {
            total,
            average_price,
        }
    }
}
