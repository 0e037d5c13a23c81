//! Discount Rule Model

use serde::{Deserialize, Serialize};

/// Adjustment carried by a discount rule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountAdjustment {
    /// Fixed amount off the total (e.g., 5.00 = €5)
    Amount(f64),
    /// Percentage off the total (e.g., 30.0 = 30%)
    Percentage(f64),
}

/// Per-customer usage assignment embedded in a discount rule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerAssignment {
    pub customer_id: i64,
    /// Whether the rule is currently usable by this customer.
    /// Absent on the wire means not available.
    #[serde(default)]
    pub availability: bool,
    /// Uses left for this customer (meaningful only when the rule is
    /// limited)
    #[serde(default)]
    pub remaining_uses: u32,
}

/// Discount rule entity — reusable code with per-customer usage limits
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountRule {
    pub id: i64,
    pub rule_code: String,
    pub adjustment: DiscountAdjustment,
    /// Expiry date (Unix millis)
    pub expiry_date: Option<i64>,
    /// Customer tags required to use this rule
    #[serde(default)]
    pub required_tags: Vec<String>,
    /// Whether per-customer usage limiting applies. Absence of the field
    /// on the wire defaults to limited.
    pub limitation: Option<bool>,
    /// Maximum uses per customer when limited
    #[serde(default)]
    pub max_uses: u32,
    #[serde(default)]
    pub customer_assignments: Vec<CustomerAssignment>,
}

impl DiscountRule {
    /// Whether per-customer usage limiting applies.
    /// The wire field is optional; absence defaults to limited.
    pub fn has_limitation(&self) -> bool {
        self.limitation != Some(false)
    }

    /// Find the assignment for a specific customer
    pub fn assignment_for(&self, customer_id: i64) -> Option<&CustomerAssignment> {
        self.customer_assignments
            .iter()
            .find(|a| a.customer_id == customer_id)
    }
}
