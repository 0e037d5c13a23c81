//! Reservation draft — in-memory state for one booking form session
//!
//! Created when the operator opens the booking form, discarded on cancel
//! or after a confirmed submit. Never persisted directly; submission maps
//! it into a create request. The total is always derived, never stored.

use super::types::{CustomerTypeLine, ProductLine};
use crate::util;
use serde::{Deserialize, Serialize};

/// Draft reservation owned by one operator session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationDraft {
    /// Session-local draft ID (snowflake)
    pub draft_id: i64,
    pub branch_id: i64,
    pub mobile_number: String,
    pub first_name: String,
    pub last_name: String,
    pub customer_type_lines: Vec<CustomerTypeLine>,
    pub product_lines: Vec<ProductLine>,
    /// Creation timestamp (Unix millis)
    pub created_at: i64,
}

impl ReservationDraft {
    /// Create an empty draft for a branch
    pub fn new(branch_id: i64) -> Self {
        Self {
            draft_id: util::snowflake_id(),
            branch_id,
            mobile_number: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            customer_type_lines: Vec::new(),
            product_lines: Vec::new(),
            created_at: util::now_millis(),
        }
    }

    /// A draft with no customer-type lines cannot be submitted
    pub fn has_lines(&self) -> bool {
        !self.customer_type_lines.is_empty()
    }

    /// Total guest slots across all lines
    pub fn guest_count(&self) -> u32 {
        self.customer_type_lines.iter().map(|l| l.count).sum()
    }
}
