use serde::{Deserialize, Serialize};

/// A single catalog record as it lives in the item data file.
///
/// Ids are assigned by the store (`max existing id + 1`) and never change
/// once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub price: f64,
}
