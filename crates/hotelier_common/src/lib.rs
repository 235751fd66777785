// --- File: crates/hotelier_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared wire types
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    conflict, external_service_error, internal_error, not_found, validation_error,
    HotelierError, HttpStatusCode,
};

pub use http::client::{client_for, join_url};

#[cfg(test)]
mod http_test;
