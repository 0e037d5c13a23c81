//! Booking extension planner
//!
//! Composes the update payload that extends time on an existing,
//! already-persisted reservation. One edit session per reservation; the
//! planner's slots are discarded after the update request completes.

use rust_decimal::Decimal;
use shared::models::ExtraHoursOption;
use shared::reservation::{
    ExtraHoursEntry, ExtraHoursLine, ReservationStatus, ReservationUpdateRequest,
};
use shared::{AppError, AppResult, ErrorCode};

use crate::money::{self, to_decimal};

/// Composes extra-time updates for an existing reservation's
/// per-customer-type assignments.
pub struct BookingExtensionPlanner {
    branch_id: i64,
    slots: Vec<ExtraHoursLine>,
}

impl BookingExtensionPlanner {
    /// Start an edit session over the reservation's assignments, one slot
    /// per customer-type assignment.
    pub fn new(branch_id: i64, assignment_customer_types: &[i64]) -> Self {
        let slots = assignment_customer_types
            .iter()
            .map(|&customer_type_id| ExtraHoursLine {
                extra_hours_id: None,
                extra_pricing: 0.0,
                customer_type_id,
                duration_minutes: 0,
                hours_qty: 1,
            })
            .collect();
        Self { branch_id, slots }
    }

    pub fn branch_id(&self) -> i64 {
        self.branch_id
    }

    /// Read access to the slots for display
    pub fn slots(&self) -> &[ExtraHoursLine] {
        &self.slots
    }

    /// Record an extra-hours option for one assignment.
    ///
    /// The option must belong to the assignment's customer type — the
    /// catalog delivers options scoped by (branch, customer type), so a
    /// mismatch means a stale selection and is rejected.
    pub fn set_extra_hours(
        &mut self,
        assignment_index: usize,
        option: &ExtraHoursOption,
    ) -> AppResult<()> {
        money::validate_price(option.price, "extra_pricing")?;
        let slot = self.slot_mut(assignment_index)?;
        if option.customer_type_id != slot.customer_type_id {
            return Err(AppError::invalid_request(format!(
                "extra hours option {} is for customer type {}, assignment has {}",
                option.id, option.customer_type_id, slot.customer_type_id
            )));
        }
        slot.extra_hours_id = Some(option.id);
        slot.extra_pricing = option.price;
        slot.duration_minutes = option.duration_minutes;
        slot.hours_qty = 1;
        Ok(())
    }

    /// Set the number of extra-hours units for one assignment.
    ///
    /// Empty or zero input falls back to `1`, not `0` — the operator
    /// clearing the field keeps a single unit selected.
    pub fn set_hours_qty(&mut self, assignment_index: usize, qty: Option<u32>) -> AppResult<()> {
        let resolved = match qty {
            None | Some(0) => 1,
            Some(q) => q,
        };
        money::validate_qty(resolved, "hours_qty")?;
        let slot = self.slot_mut(assignment_index)?;
        slot.hours_qty = resolved;
        Ok(())
    }

    /// Informational line total (`extra_pricing · hours_qty`) for display.
    ///
    /// Not merged into the reservation's stored total in this flow — the
    /// service recomputes totals on update.
    pub fn line_total(&self, assignment_index: usize) -> AppResult<Decimal> {
        let slot = self
            .slots
            .get(assignment_index)
            .ok_or_else(|| AppError::new(ErrorCode::AssignmentNotFound))?;
        Ok(to_decimal(slot.extra_pricing) * Decimal::from(slot.hours_qty))
    }

    /// Build the update request: a full replace of the reservation's
    /// extra-hours set. Slots without a resolved option are excluded even
    /// when their quantity or pricing is populated.
    pub fn build_update_payload(&self, status: ReservationStatus) -> ReservationUpdateRequest {
        let extra_hours = self
            .slots
            .iter()
            .filter_map(|slot| {
                slot.extra_hours_id.map(|extra_hours_id| ExtraHoursEntry {
                    extra_hours_id,
                    extra_pricing: slot.extra_pricing,
                    play_customer_type_id: slot.customer_type_id,
                    duration: slot.duration_minutes,
                    hours_qty: slot.hours_qty,
                })
            })
            .collect();
        ReservationUpdateRequest {
            status,
            extra_hours,
        }
    }

    fn slot_mut(&mut self, assignment_index: usize) -> AppResult<&mut ExtraHoursLine> {
        self.slots
            .get_mut(assignment_index)
            .ok_or_else(|| AppError::new(ErrorCode::AssignmentNotFound))
    }
}
