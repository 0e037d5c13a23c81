//! Shared types for reservation drafting and extension editing

use crate::models::{ExtraHoursOption, PricingTier, Product};
use serde::{Deserialize, Serialize};

// ============================================================================
// Status Types
// ============================================================================

/// Reservation status — flat enum, the server is the transition authority
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Paid,
    Refund,
    Canceled,
    Confirmed,
}

/// Payment status carried on the create request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
}

/// Payment method selected at submission time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
}

// ============================================================================
// Draft Line Types
// ============================================================================

/// One guest slot on a customer-type line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GuestEntry {
    #[serde(default)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl GuestEntry {
    /// Blank entries are placeholders seeded from the line count; they are
    /// filtered out of submission payloads.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// Add-on time attached to a customer-type line.
///
/// Presence is explicit: a line without extra time carries `None`, never
/// zeroed sentinel fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraTimeSelection {
    /// Extra hours option ID
    pub pricing_id: i64,
    pub minutes: i64,
    pub unit_price: f64,
    /// Number of extra-time units purchased
    pub qty: u32,
}

impl ExtraTimeSelection {
    pub fn from_option(option: &ExtraHoursOption, qty: u32) -> Self {
        Self {
            pricing_id: option.id,
            minutes: option.duration_minutes,
            unit_price: option.price,
            qty,
        }
    }
}

/// One draft-reservation line: N guests of a given customer type / tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerTypeLine {
    pub customer_type_id: i64,
    pub customer_type_name: String,
    pub pricing_tier_id: i64,
    pub duration_minutes: i64,
    pub unit_price: f64,
    pub count: u32,
    /// Guest slots, kept at exactly `count` entries (blank-padded)
    pub guests: Vec<GuestEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_time: Option<ExtraTimeSelection>,
}

impl CustomerTypeLine {
    /// Seed a line from a catalog tier with `count` blank guest slots
    pub fn from_tier(tier: &PricingTier, count: u32) -> Self {
        Self {
            customer_type_id: tier.customer_type_id,
            customer_type_name: tier.customer_type_name.clone(),
            pricing_tier_id: tier.id,
            duration_minutes: tier.duration_minutes,
            unit_price: tier.unit_price,
            count,
            guests: vec![GuestEntry::default(); count as usize],
            extra_time: None,
        }
    }

    /// Change the guest count, resizing the slots to match.
    ///
    /// Slots beyond the new count are dropped; new slots are blank.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
        self.guests.resize(count as usize, GuestEntry::default());
    }
}

/// One draft-reservation product line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductLine {
    pub product_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub qty: u32,
}

impl ProductLine {
    pub fn from_product(product: &Product, qty: u32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.unit_price,
            qty,
        }
    }
}

// ============================================================================
// Extension Edit Types
// ============================================================================

/// Edit-session slot for extending one customer-type assignment of an
/// already-persisted reservation. Discarded after the update completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExtraHoursLine {
    /// Resolved extra hours option; `None` until the operator picks one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_hours_id: Option<i64>,
    pub extra_pricing: f64,
    pub customer_type_id: i64,
    pub duration_minutes: i64,
    pub hours_qty: u32,
}
