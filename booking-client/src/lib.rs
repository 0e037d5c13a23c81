//! Booking Client - HTTP client for the external booking service
//!
//! Provides network-based calls for reservation creation, extra-hours
//! updates, discount resets, and branch-scoped catalog fetches.

pub mod config;
pub mod error;
pub mod http;
pub mod service;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use service::{BookingService, CreatedReservation};

// Re-export shared types for convenience
pub use shared::ApiResponse;
