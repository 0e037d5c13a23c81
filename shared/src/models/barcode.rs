//! Barcode / band record
//!
//! Legacy wire shape for the physical wristband bound to one guest slot.
//! Created server-side at reservation time; the engine only reads it.

use serde::{Deserialize, Serialize};

/// Barcode record as delivered by the booking service.
///
/// Start/end are clock times interpreted against `created_date` in the
/// venue timezone; `extra_minutes` extends the window end after an
/// extension purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BarcodeRecord {
    pub barcode: String,
    pub start_hour: u32,
    pub start_min: u32,
    pub end_hour: u32,
    pub end_min: u32,
    /// Creation date "YYYY-MM-DD"
    pub created_date: String,
    /// Minutes added by extensions after creation
    #[serde(default)]
    pub extra_minutes: i64,
}
