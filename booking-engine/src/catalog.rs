//! Branch catalog cache
//!
//! Session-local cache of already-resolved catalog fetches. Lookups are
//! asynchronous and owned by external collaborators; this cache only
//! consumes resolved results. Every apply is keyed to the selection
//! parameters that were current when the fetch was issued — a result
//! arriving for a selection that has since changed is discarded, so a
//! branch changed twice quickly can never corrupt the draft.
//!
//! Fetch failures degrade to empty option lists: the caller applies an
//! empty vec and the composer naturally blocks submission since no tiers
//! are selectable.

use parking_lot::RwLock;
use shared::models::{DiscountRule, ExtraHoursOption, PricingTier, Product};
use std::collections::HashMap;

/// Read-only catalog state for the currently selected branch
pub struct BranchCatalog {
    branch_id: RwLock<i64>,
    tiers: RwLock<Vec<PricingTier>>,
    products: RwLock<Vec<Product>>,
    /// Extra-hours options keyed by customer type
    extra_hours: RwLock<HashMap<i64, Vec<ExtraHoursOption>>>,
    discount_rules: RwLock<Vec<DiscountRule>>,
}

impl std::fmt::Debug for BranchCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchCatalog")
            .field("branch_id", &*self.branch_id.read())
            .field("tiers", &self.tiers.read().len())
            .field("products", &self.products.read().len())
            .finish()
    }
}

impl BranchCatalog {
    /// Create an empty catalog for a branch
    pub fn new(branch_id: i64) -> Self {
        Self {
            branch_id: RwLock::new(branch_id),
            tiers: RwLock::new(Vec::new()),
            products: RwLock::new(Vec::new()),
            extra_hours: RwLock::new(HashMap::new()),
            discount_rules: RwLock::new(Vec::new()),
        }
    }

    /// Currently selected branch
    pub fn branch_id(&self) -> i64 {
        *self.branch_id.read()
    }

    /// Switch branches, clearing all cached catalog data.
    ///
    /// In-flight fetches issued under the previous branch will be
    /// discarded when they arrive.
    pub fn select_branch(&self, branch_id: i64) {
        let mut current = self.branch_id.write();
        if *current == branch_id {
            return;
        }
        *current = branch_id;
        self.tiers.write().clear();
        self.products.write().clear();
        self.extra_hours.write().clear();
        self.discount_rules.write().clear();
    }

    // ========================================================================
    // Keyed applies — stale results are discarded
    // ========================================================================

    /// Apply a resolved pricing-tier fetch. Returns false (and keeps the
    /// cache untouched) when the result is stale.
    pub fn apply_tiers(&self, branch_id: i64, tiers: Vec<PricingTier>) -> bool {
        if !self.is_current(branch_id, "pricing tiers") {
            return false;
        }
        *self.tiers.write() = tiers;
        true
    }

    /// Apply a resolved product fetch
    pub fn apply_products(&self, branch_id: i64, products: Vec<Product>) -> bool {
        if !self.is_current(branch_id, "products") {
            return false;
        }
        *self.products.write() = products;
        true
    }

    /// Apply a resolved extra-hours fetch for one customer type
    pub fn apply_extra_hours(
        &self,
        branch_id: i64,
        customer_type_id: i64,
        options: Vec<ExtraHoursOption>,
    ) -> bool {
        if !self.is_current(branch_id, "extra hours options") {
            return false;
        }
        self.extra_hours.write().insert(customer_type_id, options);
        true
    }

    /// Apply a resolved discount-rule fetch
    pub fn apply_discount_rules(&self, branch_id: i64, rules: Vec<DiscountRule>) -> bool {
        if !self.is_current(branch_id, "discount rules") {
            return false;
        }
        *self.discount_rules.write() = rules;
        true
    }

    fn is_current(&self, branch_id: i64, what: &str) -> bool {
        let current = *self.branch_id.read();
        if current != branch_id {
            tracing::debug!(
                fetched_for = branch_id,
                current,
                "Discarding stale {} fetch",
                what
            );
            return false;
        }
        true
    }

    // ========================================================================
    // Lookups
    // ========================================================================

    pub fn tiers(&self) -> Vec<PricingTier> {
        self.tiers.read().clone()
    }

    pub fn tier(&self, tier_id: i64) -> Option<PricingTier> {
        self.tiers.read().iter().find(|t| t.id == tier_id).cloned()
    }

    /// Active products only
    pub fn products(&self) -> Vec<Product> {
        self.products
            .read()
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect()
    }

    /// Extra-hours options for one customer type; empty when not yet
    /// fetched (fail-soft)
    pub fn extra_hours_for(&self, customer_type_id: i64) -> Vec<ExtraHoursOption> {
        self.extra_hours
            .read()
            .get(&customer_type_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn discount_rules(&self) -> Vec<DiscountRule> {
        self.discount_rules.read().clone()
    }

    pub fn discount_rule_by_code(&self, rule_code: &str) -> Option<DiscountRule> {
        self.discount_rules
            .read()
            .iter()
            .find(|r| r.rule_code == rule_code)
            .cloned()
    }
}
