// --- File: crates/hotelier_calendar/src/routes.rs ---

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

use crate::handlers::{
    book_handler, click_date_handler, create_session_handler, delete_session_handler,
    get_session_handler, next_month_handler, prev_month_handler, refresh_handler,
    reset_selection_handler, set_guests_handler,
};
use crate::state::CalendarState;

/// Creates a router containing all routes of the availability calendar.
pub fn routes(state: Arc<CalendarState>) -> Router {
    Router::new()
        .route("/calendar/sessions", post(create_session_handler))
        .route(
            "/calendar/sessions/{session_id}",
            get(get_session_handler).delete(delete_session_handler),
        )
        .route("/calendar/sessions/{session_id}/click", post(click_date_handler))
        .route(
            "/calendar/sessions/{session_id}/reset",
            post(reset_selection_handler),
        )
        .route(
            "/calendar/sessions/{session_id}/next-month",
            post(next_month_handler),
        )
        .route(
            "/calendar/sessions/{session_id}/prev-month",
            post(prev_month_handler),
        )
        .route("/calendar/sessions/{session_id}/refresh", post(refresh_handler))
        .route("/calendar/sessions/{session_id}/guests", put(set_guests_handler))
        .route("/calendar/sessions/{session_id}/book", post(book_handler))
        .with_state(state)
}
