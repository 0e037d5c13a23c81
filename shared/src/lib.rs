//! Shared types for the booking engine
//!
//! Common types used across the workspace: catalog models, reservation
//! draft and wire types, error types, response structures, and utility
//! helpers.

pub mod error;
pub mod models;
pub mod reservation;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use response::ApiResponse;
