//! Discount eligibility resolver
//!
//! Pure functions classifying a discount rule's current usability for one
//! customer. No I/O and no rendering — callers map the returned
//! [`Availability`] to the operator display.

use rust_decimal::Decimal;
use shared::models::{DiscountAdjustment, DiscountRule};
use shared::reservation::DiscountResetRequest;
use shared::util;
use std::fmt;

use crate::money::to_decimal;

/// Current usability of a discount rule for one customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// No assignment for the customer, or the assignment is switched off
    NotAvailable,
    /// Usable with no per-customer usage limit
    Unlimited,
    /// Usable, with this many uses left (always > 0)
    Remaining(u32),
    /// Assigned and limited, but no uses left
    Exhausted,
}

impl Availability {
    pub fn is_usable(&self) -> bool {
        matches!(self, Availability::Unlimited | Availability::Remaining(_))
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::NotAvailable => write!(f, "Not Available Now"),
            Availability::Unlimited => write!(f, "Available Now (Unlimited)"),
            Availability::Remaining(n) => write!(f, "Available Now ({} remaining)", n),
            Availability::Exhausted => write!(f, "Available Now (0 remaining)"),
        }
    }
}

/// Classify a rule's usability for `customer_id`.
///
/// Never errors: a missing assignment degrades to
/// [`Availability::NotAvailable`]. An unlimited rule is usable regardless
/// of its remaining-uses counter.
pub fn resolve(rule: &DiscountRule, customer_id: i64) -> Availability {
    let assignment = match rule.assignment_for(customer_id) {
        Some(a) => a,
        None => return Availability::NotAvailable,
    };
    if !assignment.availability {
        return Availability::NotAvailable;
    }
    if !rule.has_limitation() {
        return Availability::Unlimited;
    }
    if assignment.remaining_uses > 0 {
        Availability::Remaining(assignment.remaining_uses)
    } else {
        Availability::Exhausted
    }
}

/// Whether the rule's expiry date has passed
pub fn is_expired(rule: &DiscountRule) -> bool {
    rule.expiry_date
        .map(|expiry| util::now_millis() > expiry)
        .unwrap_or(false)
}

/// Amount a rule would take off a given total — display support only;
/// the booking service applies the authoritative discount server-side.
pub fn discount_amount(rule: &DiscountRule, total: Decimal) -> Decimal {
    let amount = match rule.adjustment {
        DiscountAdjustment::Amount(v) => to_decimal(v),
        DiscountAdjustment::Percentage(p) => total * to_decimal(p) / Decimal::ONE_HUNDRED,
    };
    amount.min(total).max(Decimal::ZERO)
}

/// Build the reset request re-arming the rule for its assigned customer.
///
/// The post-reset state is never guessed locally; callers must re-fetch
/// the assignment after the call succeeds and re-run [`resolve`].
pub fn reset_request(rule: &DiscountRule) -> DiscountResetRequest {
    DiscountResetRequest::for_rule(rule.rule_code.clone())
}
