//! Price composer — deterministic pricing and payload construction for a
//! draft reservation
//!
//! The composer owns one [`ReservationDraft`] for the lifetime of a
//! booking form session. All mutations validate input at the boundary;
//! the total is recomputed from the lines on every call and never stored.

use rust_decimal::Decimal;
use shared::models::{ExtraHoursOption, PricingTier, Product};
use shared::reservation::{
    CustomerTypeEntry, CustomerTypeLine, ExtraTimeSelection, GuestEntry, PaymentMethod,
    PaymentStatus, ProductEntry, ProductLine, ReservationCreateRequest, ReservationDraft,
    ReservationStatus,
};
use shared::{AppError, AppResult, ErrorCode};

use crate::money::{self, to_decimal, to_f64};
use crate::validation::{self, validate_text_len};

/// Builds and prices a draft reservation from catalog selections.
pub struct PriceComposer {
    draft: ReservationDraft,
}

impl PriceComposer {
    /// Start an empty draft for a branch
    pub fn new(branch_id: i64) -> Self {
        Self {
            draft: ReservationDraft::new(branch_id),
        }
    }

    /// Resume composing over an existing draft (e.g. restored form state)
    pub fn from_draft(draft: ReservationDraft) -> Self {
        Self { draft }
    }

    /// Read access to the draft for display
    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    /// Change the branch for subsequent catalog selections.
    ///
    /// Lines already selected under the previous branch are kept as-is;
    /// stale selections persist until the operator removes them.
    pub fn set_branch(&mut self, branch_id: i64) {
        if branch_id != self.draft.branch_id {
            tracing::debug!(
                old = self.draft.branch_id,
                new = branch_id,
                lines = self.draft.customer_type_lines.len(),
                "Branch changed with existing lines"
            );
        }
        self.draft.branch_id = branch_id;
    }

    /// Set the booking customer's contact details
    pub fn set_customer(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        mobile_number: impl Into<String>,
    ) -> AppResult<()> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let mobile_number = mobile_number.into();
        validate_text_len(&first_name, "first_name", validation::MAX_NAME_LEN)?;
        validate_text_len(&last_name, "last_name", validation::MAX_NAME_LEN)?;
        validate_text_len(&mobile_number, "mobile_number", validation::MAX_SHORT_TEXT_LEN)?;
        self.draft.first_name = first_name;
        self.draft.last_name = last_name;
        self.draft.mobile_number = mobile_number;
        Ok(())
    }

    // ========================================================================
    // Customer Type Lines
    // ========================================================================

    /// Append a line for `count` guests of the tier's customer type.
    ///
    /// The line is seeded with exactly `count` blank guest slots.
    /// Returns the index of the new line.
    pub fn add_customer_type_line(&mut self, tier: &PricingTier, count: u32) -> AppResult<usize> {
        money::validate_price(tier.unit_price, "unit_price")?;
        money::validate_count(count, "count")?;
        self.draft
            .customer_type_lines
            .push(CustomerTypeLine::from_tier(tier, count));
        Ok(self.draft.customer_type_lines.len() - 1)
    }

    /// Remove a line, returning it
    pub fn remove_customer_type_line(&mut self, index: usize) -> AppResult<CustomerTypeLine> {
        if index >= self.draft.customer_type_lines.len() {
            return Err(AppError::new(ErrorCode::LineNotFound));
        }
        Ok(self.draft.customer_type_lines.remove(index))
    }

    /// Change the guest count on a line; guest slots are resized to match
    pub fn set_line_count(&mut self, index: usize, count: u32) -> AppResult<()> {
        money::validate_count(count, "count")?;
        let line = self.line_mut(index)?;
        line.set_count(count);
        Ok(())
    }

    /// Fill in one guest slot on a line
    pub fn set_guest(&mut self, index: usize, guest_index: usize, guest: GuestEntry) -> AppResult<()> {
        validate_text_len(&guest.name, "guest name", validation::MAX_NAME_LEN)?;
        let line = self.line_mut(index)?;
        let slot = line
            .guests
            .get_mut(guest_index)
            .ok_or_else(|| AppError::new(ErrorCode::GuestSlotNotFound))?;
        *slot = guest;
        Ok(())
    }

    /// Attach extra time to a line from a catalog option.
    ///
    /// `qty = 0` clears the selection.
    pub fn set_extra_minutes(
        &mut self,
        index: usize,
        option: &ExtraHoursOption,
        qty: u32,
    ) -> AppResult<()> {
        money::validate_price(option.price, "extra_minutes price")?;
        money::validate_qty(qty, "minutes_qty")?;
        let line = self.line_mut(index)?;
        line.extra_time = if qty == 0 {
            None
        } else {
            Some(ExtraTimeSelection::from_option(option, qty))
        };
        Ok(())
    }

    fn line_mut(&mut self, index: usize) -> AppResult<&mut CustomerTypeLine> {
        self.draft
            .customer_type_lines
            .get_mut(index)
            .ok_or_else(|| AppError::new(ErrorCode::LineNotFound))
    }

    // ========================================================================
    // Product Lines
    // ========================================================================

    /// Append a product line. Returns the index of the new line.
    pub fn add_product_line(&mut self, product: &Product, qty: u32) -> AppResult<usize> {
        money::validate_price(product.unit_price, "unit_price")?;
        money::validate_qty(qty, "qty")?;
        self.draft
            .product_lines
            .push(ProductLine::from_product(product, qty));
        Ok(self.draft.product_lines.len() - 1)
    }

    /// Remove a product line, returning it
    pub fn remove_product_line(&mut self, index: usize) -> AppResult<ProductLine> {
        if index >= self.draft.product_lines.len() {
            return Err(AppError::new(ErrorCode::LineNotFound));
        }
        Ok(self.draft.product_lines.remove(index))
    }

    /// Change the quantity on a product line
    pub fn set_product_qty(&mut self, index: usize, qty: u32) -> AppResult<()> {
        money::validate_qty(qty, "qty")?;
        let line = self
            .draft
            .product_lines
            .get_mut(index)
            .ok_or_else(|| AppError::new(ErrorCode::LineNotFound))?;
        line.qty = qty;
        Ok(())
    }

    // ========================================================================
    // Totals
    // ========================================================================

    /// Compute the draft total with precise decimal arithmetic.
    ///
    /// Formula:
    ///   Σ lines (count·unit_price + minutes_qty·extra_unit_price)
    ///   + Σ products (qty·unit_price)
    ///
    /// Pure — no side effects, and no rounding inside the running sum.
    pub fn compute_total(&self) -> Decimal {
        let lines: Decimal = self
            .draft
            .customer_type_lines
            .iter()
            .map(|line| {
                let base = to_decimal(line.unit_price) * Decimal::from(line.count);
                let extra = line
                    .extra_time
                    .as_ref()
                    .map(|e| to_decimal(e.unit_price) * Decimal::from(e.qty))
                    .unwrap_or(Decimal::ZERO);
                base + extra
            })
            .sum();

        let products: Decimal = self
            .draft
            .product_lines
            .iter()
            .map(|p| to_decimal(p.unit_price) * Decimal::from(p.qty))
            .sum();

        lines + products
    }

    /// The total rounded to two decimals for display/serialization
    pub fn total_display(&self) -> f64 {
        to_f64(self.compute_total())
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Map the draft into the create request the booking service expects.
    ///
    /// Fails with [`ErrorCode::EmptyReservation`] when no customer-type
    /// lines exist. Blank-name guest slots are filtered out; the selected
    /// payment-method field carries the computed total.
    pub fn build_submission_payload(
        &self,
        payment_method: PaymentMethod,
    ) -> AppResult<ReservationCreateRequest> {
        if !self.draft.has_lines() {
            return Err(AppError::new(ErrorCode::EmptyReservation));
        }

        let customer_types = self
            .draft
            .customer_type_lines
            .iter()
            .map(|line| {
                let customers: Vec<GuestEntry> = line
                    .guests
                    .iter()
                    .filter(|g| !g.is_blank())
                    .cloned()
                    .collect();
                let (extra_minutes, extra_unit_price, extra_pricing_id, minutes_qty) =
                    match &line.extra_time {
                        Some(e) => (e.minutes, e.unit_price, e.pricing_id, e.qty),
                        None => (0, 0.0, 0, 0),
                    };
                CustomerTypeEntry {
                    customer_type_id: line.customer_type_id,
                    pricing_id: line.pricing_tier_id,
                    unit_price: line.unit_price,
                    duration_minutes: line.duration_minutes,
                    count: line.count,
                    extra_minutes,
                    extra_minutes_unit_price: extra_unit_price,
                    extra_minutes_pricing_id: extra_pricing_id,
                    minutes_qty,
                    customers,
                }
            })
            .collect();

        let products = self
            .draft
            .product_lines
            .iter()
            .map(|p| ProductEntry {
                product_id: p.product_id,
                qty: p.qty,
            })
            .collect();

        let total_price = self.total_display();
        let (cash, card) = match payment_method {
            PaymentMethod::Cash => (Some(total_price), None),
            PaymentMethod::Card => (None, Some(total_price)),
        };

        Ok(ReservationCreateRequest {
            first_name: self.draft.first_name.clone(),
            last_name: self.draft.last_name.clone(),
            mobile_number: self.draft.mobile_number.clone(),
            branch_id: self.draft.branch_id,
            total_price,
            status: ReservationStatus::Pending,
            payment_status: PaymentStatus::Pending,
            payment_method,
            customer_types,
            products,
            cash,
            card,
        })
    }
}

#[cfg(test)]
mod tests;
