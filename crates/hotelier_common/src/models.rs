// --- File: crates/hotelier_common/src/models.rs ---

// Wire types shared between the booking backend clients and their callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Query sent to `GET /api/bookings/check-availability`.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub room_category: String,
    pub room_title: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Only sent for the pre-booking check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
}

/// Response of the availability endpoint. Every field is optional on the wire.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    #[serde(default)]
    pub is_available: Option<bool>,
    /// ISO dates (or date-times) that are already taken.
    #[serde(default)]
    pub booked_dates: Option<Vec<String>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Room metadata as served by the room lookup endpoint.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub title: String,
    pub category: String,
    pub slug: String,
    /// Nightly price in whole currency units.
    pub price: i64,
    pub max_occupancy: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Outcome of a room lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum RoomLookup {
    Found(Room),
    NotFound,
    Failed(String),
}
