//! Unified error codes for the booking engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Catalog errors
//! - 2xxx: Reservation errors
//! - 3xxx: Discount rule errors
//! - 4xxx: Time window errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Catalog ====================
    /// Pricing tier not found
    PricingTierNotFound = 1001,
    /// Extra hours option not found
    ExtraHoursOptionNotFound = 1002,
    /// Product not found
    ProductNotFound = 1003,
    /// Catalog data unavailable for the requested branch
    CatalogUnavailable = 1004,

    // ==================== 2xxx: Reservation ====================
    /// Reservation has no customer type lines
    EmptyReservation = 2001,
    /// Line index out of bounds
    LineNotFound = 2002,
    /// Guest slot index out of bounds
    GuestSlotNotFound = 2003,
    /// Invalid monetary amount
    InvalidAmount = 2004,
    /// Invalid quantity or count
    InvalidQuantity = 2005,
    /// Extra hours assignment index out of bounds
    AssignmentNotFound = 2006,

    // ==================== 3xxx: Discount ====================
    /// Discount rule not found
    DiscountRuleNotFound = 3001,
    /// Discount rule has expired
    DiscountRuleExpired = 3002,

    // ==================== 4xxx: Time Window ====================
    /// Time window fields are malformed
    InvalidTimeWindow = 4001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network error
    NetworkError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Catalog
            ErrorCode::PricingTierNotFound => "Pricing tier not found",
            ErrorCode::ExtraHoursOptionNotFound => "Extra hours option not found",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::CatalogUnavailable => "Catalog data unavailable for this branch",

            // Reservation
            ErrorCode::EmptyReservation => "Reservation has no customer type lines",
            ErrorCode::LineNotFound => "Line index out of bounds",
            ErrorCode::GuestSlotNotFound => "Guest slot index out of bounds",
            ErrorCode::InvalidAmount => "Invalid monetary amount",
            ErrorCode::InvalidQuantity => "Invalid quantity or count",
            ErrorCode::AssignmentNotFound => "Extra hours assignment index out of bounds",

            // Discount
            ErrorCode::DiscountRuleNotFound => "Discount rule not found",
            ErrorCode::DiscountRuleExpired => "Discount rule has expired",

            // Time window
            ErrorCode::InvalidTimeWindow => "Time window fields are malformed",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::NetworkError => "Network error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Catalog
            1001 => Ok(ErrorCode::PricingTierNotFound),
            1002 => Ok(ErrorCode::ExtraHoursOptionNotFound),
            1003 => Ok(ErrorCode::ProductNotFound),
            1004 => Ok(ErrorCode::CatalogUnavailable),

            // Reservation
            2001 => Ok(ErrorCode::EmptyReservation),
            2002 => Ok(ErrorCode::LineNotFound),
            2003 => Ok(ErrorCode::GuestSlotNotFound),
            2004 => Ok(ErrorCode::InvalidAmount),
            2005 => Ok(ErrorCode::InvalidQuantity),
            2006 => Ok(ErrorCode::AssignmentNotFound),

            // Discount
            3001 => Ok(ErrorCode::DiscountRuleNotFound),
            3002 => Ok(ErrorCode::DiscountRuleExpired),

            // Time window
            4001 => Ok(ErrorCode::InvalidTimeWindow),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
