//! Data models
//!
//! Catalog entities supplied read-only by the booking service, shared
//! between the engine and the operator frontend (via API).
//! All IDs are `i64`.

pub mod barcode;
pub mod discount_rule;
pub mod pricing_tier;
pub mod product;

// Re-exports
pub use barcode::*;
pub use discount_rule::*;
pub use pricing_tier::*;
pub use product::*;
