//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity — sellable add-on (socks, lockers, snacks), scoped by
/// branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub unit_price: f64,
    pub is_active: bool,
}
