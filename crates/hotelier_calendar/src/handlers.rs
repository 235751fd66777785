// File: crates/hotelier_calendar/src/handlers.rs
use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
};
use hotelier_common::models::RoomLookup;
use hotelier_common::services::{InMemorySession, SessionContext, SESSION_TOKEN_KEY};
use hotelier_common::HotelierError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::booking::BookingRedirect;
use crate::component::{AvailabilityCalendar, CalendarView};
use crate::date::{CalendarDate, YearMonth};
use crate::error::CalendarError;
use crate::state::CalendarState;

type HandlerResult<T> = Result<T, HotelierError>;

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    pub category: String,
    pub slug: String,
    /// Month to open on; defaults to the current month.
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = Uuid))]
    pub session_id: Uuid,
    pub view: CalendarView,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub date: CalendarDate,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize)]
pub struct GuestsRequest {
    pub guests: u32,
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

/// Opens a calendar for one room and loads its booked dates.
#[axum::debug_handler]
pub async fn create_session_handler(
    State(state): State<Arc<CalendarState>>,
    headers: HeaderMap,
    Json(request): Json<CreateSessionRequest>,
) -> HandlerResult<(StatusCode, Json<SessionResponse>)> {
    let month = match (request.year, request.month) {
        (Some(year), Some(month)) => YearMonth::new(year, month).map_err(CalendarError::from)?,
        _ => YearMonth::of(state.clock.today()),
    };

    let room = match state.rooms.find_room(&request.category, &request.slug).await {
        RoomLookup::Found(room) => room,
        RoomLookup::NotFound => {
            return Err(CalendarError::RoomNotFound {
                category: request.category,
                slug: request.slug,
            }
            .into())
        }
        RoomLookup::Failed(reason) => return Err(CalendarError::RoomLookupFailed(reason).into()),
    };

    let session: Arc<dyn SessionContext> = Arc::new(InMemorySession::new());
    if let Some(token) = bearer_token(&headers) {
        session.set(SESSION_TOKEN_KEY, token);
    }

    let mut calendar = AvailabilityCalendar::new(
        room,
        month,
        state.availability.availability_service(session),
        state.rng.clone(),
        state.clock.clone(),
        state.settings.clone(),
    );
    calendar.refresh().await;
    let view = calendar.view();
    let session_id = state.insert(calendar);
    info!(
        "Opened calendar session {} for {}/{} ({})",
        session_id, request.category, request.slug, month
    );

    Ok((StatusCode::CREATED, Json(SessionResponse { session_id, view })))
}

/// Returns the latest view without waiting on a pending backend call.
#[axum::debug_handler]
pub async fn get_session_handler(
    State(state): State<Arc<CalendarState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<Json<CalendarView>> {
    Ok(Json(state.latest_view(session_id)?))
}

/// Clicks a day. Clicks on unavailable days leave the selection untouched.
#[axum::debug_handler]
pub async fn click_date_handler(
    State(state): State<Arc<CalendarState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ClickRequest>,
) -> HandlerResult<Json<CalendarView>> {
    let handle = state.get(session_id)?;
    let mut calendar = handle.lock().await;
    calendar.click_date(request.date);
    Ok(Json(calendar.view()))
}

#[axum::debug_handler]
pub async fn reset_selection_handler(
    State(state): State<Arc<CalendarState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<Json<CalendarView>> {
    let handle = state.get(session_id)?;
    let mut calendar = handle.lock().await;
    calendar.reset_selection();
    Ok(Json(calendar.view()))
}

#[axum::debug_handler]
pub async fn next_month_handler(
    State(state): State<Arc<CalendarState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<Json<CalendarView>> {
    let handle = state.get(session_id)?;
    let mut calendar = handle.lock().await;
    calendar.next_month().await?;
    Ok(Json(calendar.view()))
}

#[axum::debug_handler]
pub async fn prev_month_handler(
    State(state): State<Arc<CalendarState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<Json<CalendarView>> {
    let handle = state.get(session_id)?;
    let mut calendar = handle.lock().await;
    calendar.prev_month().await?;
    Ok(Json(calendar.view()))
}

/// Re-requests booked dates; the only way out of simulated data.
#[axum::debug_handler]
pub async fn refresh_handler(
    State(state): State<Arc<CalendarState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<Json<CalendarView>> {
    let handle = state.get(session_id)?;
    let mut calendar = handle.lock().await;
    calendar.refresh().await;
    Ok(Json(calendar.view()))
}

#[axum::debug_handler]
pub async fn set_guests_handler(
    State(state): State<Arc<CalendarState>>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<GuestsRequest>,
) -> HandlerResult<Json<CalendarView>> {
    let handle = state.get(session_id)?;
    let mut calendar = handle.lock().await;
    calendar.set_guests(request.guests)?;
    Ok(Json(calendar.view()))
}

/// Verifies the selected stay and returns the booking form location.
#[axum::debug_handler]
pub async fn book_handler(
    State(state): State<Arc<CalendarState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<Json<BookingRedirect>> {
    let handle = state.get(session_id)?;
    let mut calendar = handle.lock().await;
    let redirect = calendar.proceed_to_booking().await?;
    info!("Session {} continues to {}", session_id, redirect.location);
    Ok(Json(redirect))
}

#[axum::debug_handler]
pub async fn delete_session_handler(
    State(state): State<Arc<CalendarState>>,
    Path(session_id): Path<Uuid>,
) -> HandlerResult<StatusCode> {
    state.remove(session_id)?;
    Ok(StatusCode::NO_CONTENT)
}
