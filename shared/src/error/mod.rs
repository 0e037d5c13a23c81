//! Unified error handling
//!
//! Error codes are u16 values shared with the operator frontend; the
//! [`AppError`] wrapper carries the code plus a human-readable message.

pub mod codes;
pub mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
