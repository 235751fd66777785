// --- File: crates/hotelier_calendar/src/error.rs ---
use hotelier_common::{
    conflict, external_service_error, internal_error, not_found, validation_error, HotelierError,
};
use thiserror::Error;
use uuid::Uuid;

use crate::date::DateError;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error(transparent)]
    Date(#[from] DateError),
    #[error("Select both a check-in and a check-out date first")]
    IncompleteSelection,
    #[error("Guest count must be between 1 and {max}, got {guests}")]
    GuestCountOutOfRange { guests: u32, max: u32 },
    /// The stay cannot be booked; carries the message shown to the user.
    #[error("{0}")]
    Unavailable(String),
    /// Availability could not be confirmed either remotely or locally.
    #[error("{0}")]
    VerificationUnavailable(String),
    #[error("Room {category}/{slug} not found")]
    RoomNotFound { category: String, slug: String },
    #[error("Room lookup failed: {0}")]
    RoomLookupFailed(String),
    #[error("Calendar session {0} not found")]
    SessionNotFound(Uuid),
    #[error("Failed to build booking link: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl From<CalendarError> for HotelierError {
    fn from(err: CalendarError) -> Self {
        match err {
            CalendarError::Date(_)
            | CalendarError::IncompleteSelection
            | CalendarError::GuestCountOutOfRange { .. } => validation_error(err),
            CalendarError::Unavailable(message) => conflict(message),
            CalendarError::VerificationUnavailable(message) => {
                external_service_error("availability", message)
            }
            CalendarError::RoomNotFound { .. } | CalendarError::SessionNotFound(_) => {
                not_found(err)
            }
            CalendarError::RoomLookupFailed(reason) => external_service_error("rooms", reason),
            CalendarError::Encode(_) | CalendarError::Client(_) => internal_error(err),
        }
    }
}
