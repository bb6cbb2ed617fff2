use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::item::Item;

/// Aggregate figures over the whole collection at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total: usize,
    pub average_price: f64,
    pub cached_at: DateTime<Utc>,
}

impl StatsSnapshot {
    /// Reduce `items` to a snapshot stamped with `at`.
    ///
    /// Items without a price count as 0 in the average. An empty collection
    /// averages to 0.
    pub fn compute(items: &[Item], at: DateTime<Utc>) -> Self {
        let total = items.len();
        let average_price = if total == 0 {
            0.0
        } else {
            items.iter().map(|item| item.price.unwrap_or(0.0)).sum::<f64>() / total as f64
        };
        Self {
            total,
            average_price,
            cached_at: at,
        }
    }
}
