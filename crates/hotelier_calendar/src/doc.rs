// File: crates/hotelier_calendar/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::booking::{BookingParams, BookingRedirect};
use crate::component::{CalendarView, RoomSummary};
use crate::date::{CalendarDate, YearMonth};
use crate::grid::CalendarDay;
use crate::handlers::{ClickRequest, CreateSessionRequest, GuestsRequest, SessionResponse};
use crate::pricing::PriceQuote;

#[utoipa::path(
    post,
    path = "/calendar/sessions",
    request_body(content = CreateSessionRequest, example = json!({
        "category": "suites",
        "slug": "ocean-view",
        "year": 2025,
        "month": 6
    })),
    responses(
        (status = 201, description = "Calendar session created", body = SessionResponse),
        (status = 400, description = "Invalid month"),
        (status = 404, description = "Room not found"),
        (status = 502, description = "Room lookup failed")
    ),
    tag = "calendar"
)]
fn doc_create_session_handler() {}

#[utoipa::path(
    get,
    path = "/calendar/sessions/{session_id}",
    params(("session_id" = String, Path, description = "Calendar session id")),
    responses(
        (status = 200, description = "Latest calendar view; `loading` is true while a backend call is pending", body = CalendarView),
        (status = 404, description = "Unknown session")
    ),
    tag = "calendar"
)]
fn doc_get_session_handler() {}

#[utoipa::path(
    post,
    path = "/calendar/sessions/{session_id}/click",
    params(("session_id" = String, Path, description = "Calendar session id")),
    request_body(content = ClickRequest, example = json!({ "date": "2025-06-14" })),
    responses(
        (status = 200, description = "Calendar view after the click; unavailable days are ignored", body = CalendarView),
        (status = 404, description = "Unknown session")
    ),
    tag = "calendar"
)]
fn doc_click_date_handler() {}

#[utoipa::path(
    post,
    path = "/calendar/sessions/{session_id}/reset",
    params(("session_id" = String, Path, description = "Calendar session id")),
    responses(
        (status = 200, description = "Selection cleared", body = CalendarView),
        (status = 404, description = "Unknown session")
    ),
    tag = "calendar"
)]
fn doc_reset_selection_handler() {}

#[utoipa::path(
    post,
    path = "/calendar/sessions/{session_id}/next-month",
    params(("session_id" = String, Path, description = "Calendar session id")),
    responses(
        (status = 200, description = "Following month with reloaded booked dates", body = CalendarView),
        (status = 404, description = "Unknown session")
    ),
    tag = "calendar"
)]
fn doc_next_month_handler() {}

#[utoipa::path(
    post,
    path = "/calendar/sessions/{session_id}/prev-month",
    params(("session_id" = String, Path, description = "Calendar session id")),
    responses(
        (status = 200, description = "Preceding month with reloaded booked dates", body = CalendarView),
        (status = 404, description = "Unknown session")
    ),
    tag = "calendar"
)]
fn doc_prev_month_handler() {}

#[utoipa::path(
    post,
    path = "/calendar/sessions/{session_id}/refresh",
    params(("session_id" = String, Path, description = "Calendar session id")),
    responses(
        (status = 200, description = "Calendar with reloaded booked dates", body = CalendarView),
        (status = 404, description = "Unknown session")
    ),
    tag = "calendar"
)]
fn doc_refresh_handler() {}

#[utoipa::path(
    put,
    path = "/calendar/sessions/{session_id}/guests",
    params(("session_id" = String, Path, description = "Calendar session id")),
    request_body(content = GuestsRequest, example = json!({ "guests": 2 })),
    responses(
        (status = 200, description = "Guest count updated", body = CalendarView),
        (status = 400, description = "Guest count outside 1..=maxOccupancy"),
        (status = 404, description = "Unknown session")
    ),
    tag = "calendar"
)]
fn doc_set_guests_handler() {}

#[utoipa::path(
    post,
    path = "/calendar/sessions/{session_id}/book",
    params(("session_id" = String, Path, description = "Calendar session id")),
    responses(
        (status = 200, description = "Stay verified", body = BookingRedirect,
         example = json!({
             "roomId": "r-101",
             "category": "suites",
             "checkIn": "2025-06-14",
             "checkOut": "2025-06-17",
             "nights": 3,
             "guests": 2,
             "location": "/bookings/new?roomId=r-101&category=suites&checkIn=2025-06-14&checkOut=2025-06-17&nights=3&guests=2"
         })
        ),
        (status = 400, description = "Selection incomplete"),
        (status = 404, description = "Unknown session"),
        (status = 409, description = "Dates not available",
         example = json!({
             "error": {
                 "message": "Conflict: The selected dates are no longer available. Please choose different dates.",
                 "code": 409
             }
         })
        ),
        (status = 502, description = "Availability could not be verified")
    ),
    tag = "calendar"
)]
fn doc_book_handler() {}

#[utoipa::path(
    delete,
    path = "/calendar/sessions/{session_id}",
    params(("session_id" = String, Path, description = "Calendar session id")),
    responses(
        (status = 204, description = "Session closed"),
        (status = 404, description = "Unknown session")
    ),
    tag = "calendar"
)]
fn doc_delete_session_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_create_session_handler,
        doc_get_session_handler,
        doc_click_date_handler,
        doc_reset_selection_handler,
        doc_next_month_handler,
        doc_prev_month_handler,
        doc_refresh_handler,
        doc_set_guests_handler,
        doc_book_handler,
        doc_delete_session_handler
    ),
    components(
        schemas(
            CalendarDate,
            YearMonth,
            CalendarDay,
            CalendarView,
            RoomSummary,
            PriceQuote,
            BookingParams,
            BookingRedirect,
            CreateSessionRequest,
            ClickRequest,
            GuestsRequest,
            SessionResponse
        )
    ),
    tags(
        (name = "calendar", description = "Room availability calendar")
    ),
    servers(
        (url = "/api", description = "Hotelier API server")
    )
)]
pub struct CalendarApiDoc;
