//! Wire shapes submitted to the external booking service
//!
//! The wire format is the legacy one the service expects: extra-time
//! fields are flattened to zeroed sentinels when absent, and the
//! extension update is a full replace of the reservation's extra-hours
//! set, not an incremental patch.

use super::types::{GuestEntry, PaymentMethod, PaymentStatus, ReservationStatus};
use serde::{Deserialize, Serialize};

/// Customer-type entry on the create request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerTypeEntry {
    pub customer_type_id: i64,
    /// Pricing tier ID
    pub pricing_id: i64,
    pub unit_price: f64,
    pub duration_minutes: i64,
    pub count: u32,
    /// Extra-time fields, zeroed when the line has no extra time
    #[serde(default)]
    pub extra_minutes: i64,
    #[serde(default)]
    pub extra_minutes_unit_price: f64,
    #[serde(default)]
    pub extra_minutes_pricing_id: i64,
    #[serde(default)]
    pub minutes_qty: u32,
    /// Named guests only — blank entries are filtered before submission
    pub customers: Vec<GuestEntry>,
}

/// Product entry on the create request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductEntry {
    pub product_id: i64,
    pub qty: u32,
}

/// Create request for a new reservation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub branch_id: i64,
    pub total_price: f64,
    pub status: ReservationStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub customer_types: Vec<CustomerTypeEntry>,
    pub products: Vec<ProductEntry>,
    /// Amount tendered in cash — set to the total when paying cash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cash: Option<f64>,
    /// Amount charged to card — set to the total when paying card
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<f64>,
}

/// Extra-hours entry on the update request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtraHoursEntry {
    pub extra_hours_id: i64,
    pub extra_pricing: f64,
    pub play_customer_type_id: i64,
    pub duration: i64,
    pub hours_qty: u32,
}

/// Update request extending time on an existing reservation.
///
/// Full replace of the reservation's extra-hours set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReservationUpdateRequest {
    pub status: ReservationStatus,
    pub extra_hours: Vec<ExtraHoursEntry>,
}

/// Event type literal the service expects on a discount reset
pub const DISCOUNT_RESET_EVENT: &str = "reset Discount Rules availability";

/// Reset request re-arming a discount rule for its assigned customer.
///
/// The post-reset state is never guessed locally; callers re-fetch the
/// assignment after the call succeeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountResetRequest {
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub rule_code: String,
}

impl DiscountResetRequest {
    pub fn for_rule(rule_code: impl Into<String>) -> Self {
        Self {
            event_type: DISCOUNT_RESET_EVENT.to_string(),
            rule_code: rule_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_request_event_type_literal() {
        let req = DiscountResetRequest::for_rule("SUMMER25");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["eventType"], "reset Discount Rules availability");
        assert_eq!(json["rule_code"], "SUMMER25");
    }

    #[test]
    fn test_update_request_field_names() {
        let req = ReservationUpdateRequest {
            status: ReservationStatus::Paid,
            extra_hours: vec![ExtraHoursEntry {
                extra_hours_id: 9,
                extra_pricing: 12.5,
                play_customer_type_id: 2,
                duration: 30,
                hours_qty: 1,
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["status"], "PAID");
        assert_eq!(json["extra_hours"][0]["play_customer_type_id"], 2);
        assert_eq!(json["extra_hours"][0]["extra_hours_id"], 9);
    }

    #[test]
    fn test_create_request_payment_field_presence() {
        let req = ReservationCreateRequest {
            first_name: "Ana".to_string(),
            last_name: "Ruiz".to_string(),
            mobile_number: "600111222".to_string(),
            branch_id: 3,
            total_price: 130.0,
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::Cash,
            customer_types: vec![],
            products: vec![],
            cash: Some(130.0),
            card: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["cash"], 130.0);
        assert!(json.get("card").is_none());
    }
}
