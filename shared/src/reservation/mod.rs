//! Reservation Drafting Module
//!
//! This module provides types for composing and extending reservations:
//! - Draft: in-memory state for one booking form session
//! - Types: line items, guests, status enums
//! - Wire: request shapes submitted to the booking service

pub mod draft;
pub mod types;
pub mod wire;

// Re-exports
pub use draft::ReservationDraft;
pub use types::{
    CustomerTypeLine, ExtraHoursLine, ExtraTimeSelection, GuestEntry, PaymentMethod,
    PaymentStatus, ProductLine, ReservationStatus,
};
pub use wire::{
    CustomerTypeEntry, DiscountResetRequest, ExtraHoursEntry, ProductEntry,
    ReservationCreateRequest, ReservationUpdateRequest, DISCOUNT_RESET_EVENT,
};
