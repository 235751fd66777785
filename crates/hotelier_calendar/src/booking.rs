// --- File: crates/hotelier_calendar/src/booking.rs ---
//! Hand-off from a verified selection to the booking form.

use hotelier_common::models::Room;
use serde::Serialize;

use crate::availability::{is_date_available, BookedDates};
use crate::date::CalendarDate;
use crate::error::CalendarError;
use crate::pricing::nights_between;

/// Query parameters carried to the booking-creation route.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingParams {
    pub room_id: String,
    pub category: String,
    pub check_in: CalendarDate,
    pub check_out: CalendarDate,
    pub nights: u32,
    pub guests: u32,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRedirect {
    #[serde(flatten)]
    pub params: BookingParams,
    /// Route plus encoded query, e.g. `/bookings/new?roomId=...`
    pub location: String,
}

impl BookingRedirect {
    pub fn new(
        booking_route: &str,
        room: &Room,
        check_in: CalendarDate,
        check_out: CalendarDate,
        guests: u32,
    ) -> Result<Self, CalendarError> {
        let params = BookingParams {
            room_id: room.id.clone(),
            category: room.category.clone(),
            check_in,
            check_out,
            nights: nights_between(check_in, check_out),
            guests,
        };
        let query = serde_urlencoded::to_string(&params)?;
        Ok(BookingRedirect {
            location: format!("{}?{}", booking_route, query),
            params,
        })
    }
}

/// Guest count must stay within `1..=max_occupancy`.
pub fn validate_guests(guests: u32, max_occupancy: u32) -> Result<u32, CalendarError> {
    if guests == 0 || guests > max_occupancy {
        return Err(CalendarError::GuestCountOutOfRange {
            guests,
            max: max_occupancy,
        });
    }
    Ok(guests)
}

/// Checks every night in `[check_in, check_out)` against the booked set.
///
/// Returns the first night that cannot be booked.
pub fn first_unavailable_night(
    check_in: CalendarDate,
    check_out: CalendarDate,
    today: CalendarDate,
    booked: &BookedDates,
) -> Option<CalendarDate> {
    check_in
        .days_before(check_out)
        .find(|night| !is_date_available(*night, today, booked))
}
