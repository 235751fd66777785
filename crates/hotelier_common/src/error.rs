use std::fmt;
use thiserror::Error;

/// The base error type for all Hotelier errors.
///
/// Each crate keeps its own error enum and converts into this one at the HTTP edge.
#[derive(Error, Debug)]
pub enum HotelierError {
    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// The request conflicts with current state (e.g. dates already booked)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for HotelierError {
    fn status_code(&self) -> u16 {
        match self {
            HotelierError::ValidationError(_) => 400,
            HotelierError::ExternalServiceError { .. } => 502,
            HotelierError::ConflictError(_) => 409,
            HotelierError::NotFoundError(_) => 404,
            HotelierError::InternalError(_) => 500,
        }
    }
}

// Utility functions for error handling
pub fn validation_error<T: fmt::Display>(message: T) -> HotelierError {
    HotelierError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> HotelierError {
    HotelierError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> HotelierError {
    HotelierError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> HotelierError {
    HotelierError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> HotelierError {
    HotelierError::InternalError(message.to_string())
}
