//! Booking service seam
//!
//! The engine components emit payloads and consume resolved catalog
//! data; this trait is the boundary they hand those payloads to. The
//! production implementation is [`HttpClient`](crate::HttpClient); tests
//! substitute an in-memory fake.

use crate::ClientResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::{DiscountRule, ExtraHoursOption, PricingTier, Product};
use shared::reservation::{
    DiscountResetRequest, ReservationCreateRequest, ReservationUpdateRequest,
};

/// Identifier returned for a newly created reservation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatedReservation {
    pub reservation_id: i64,
}

/// External booking service contract.
///
/// No retry policy lives behind this trait in the core; submission
/// failures surface to the operator and the in-memory draft is preserved
/// for retry by the caller.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Persist a new reservation
    async fn create_reservation(
        &self,
        request: &ReservationCreateRequest,
    ) -> ClientResult<CreatedReservation>;

    /// Replace the extra-hours set on an existing reservation
    async fn update_reservation(
        &self,
        reservation_id: i64,
        request: &ReservationUpdateRequest,
    ) -> ClientResult<()>;

    /// Re-arm a discount rule for its assigned customer
    async fn reset_discount_rule(&self, request: &DiscountResetRequest) -> ClientResult<()>;

    /// Pricing tiers for a branch
    async fn fetch_pricing_tiers(&self, branch_id: i64) -> ClientResult<Vec<PricingTier>>;

    /// Extra-hours options for (branch, customer type)
    async fn fetch_extra_hours(
        &self,
        branch_id: i64,
        customer_type_id: i64,
    ) -> ClientResult<Vec<ExtraHoursOption>>;

    /// Products for a branch
    async fn fetch_products(&self, branch_id: i64) -> ClientResult<Vec<Product>>;

    /// Discount rules with embedded customer assignments
    async fn fetch_discount_rules(&self, branch_id: i64) -> ClientResult<Vec<DiscountRule>>;
}
