//! Pricing Tier Model

use serde::{Deserialize, Serialize};

/// Pricing tier entity — maps a customer type + play duration to a unit
/// price. Immutable catalog data, scoped by branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingTier {
    pub id: i64,
    pub customer_type_id: i64,
    pub customer_type_name: String,
    pub duration_minutes: i64,
    pub unit_price: f64,
}

/// Extra hours option — purchasable additional time, scoped to
/// (branch, customer type).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraHoursOption {
    pub id: i64,
    pub customer_type_id: i64,
    pub duration_minutes: i64,
    pub price: f64,
}
