// --- File: crates/hotelier_calendar/src/component.rs ---
//! The availability calendar of one room.
//!
//! Owns the displayed month, the booked-date set and the selection. Every
//! month change or explicit refresh replaces the booked set from the remote
//! service; when that fails the calendar switches to simulated data and says
//! so through [`CalendarView::notice`].
//!
//! Subscribers get the latest [`CalendarView`] through a `watch` channel. It
//! is published before and after every backend call, so a reader that cannot
//! take the calendar's lock still sees `loading` while a call is pending.

use hotelier_common::models::{AvailabilityQuery, Room};
use hotelier_common::services::AvailabilityService;
use hotelier_config::CalendarConfig;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::availability::{
    is_date_available, simulate_booked_dates, BookedDates, SimulationSettings,
};
use crate::booking::{first_unavailable_night, validate_guests, BookingRedirect};
use crate::clock::Clock;
use crate::date::{CalendarDate, YearMonth};
use crate::error::CalendarError;
use crate::grid::{generate_calendar, CalendarDay, CalendarGrid};
use crate::pricing::{quote, PriceQuote};
use crate::random::RandomSource;
use crate::selection::{Selection, SelectionState};

pub const SIMULATED_DATA_NOTICE: &str =
    "Live availability could not be loaded. Showing simulated availability, which may not match actual bookings.";
pub const DEFAULT_UNAVAILABLE_MESSAGE: &str =
    "The selected dates are no longer available. Please choose different dates.";
pub const UNVERIFIED_MESSAGE: &str =
    "Availability could not be confirmed right now. Please refresh and try again.";

/// Behaviour switches taken from `[calendar]` configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarSettings {
    pub simulation: SimulationSettings,
    pub allow_simulated_verification: bool,
    pub booking_route: String,
    pub session_idle_timeout: Duration,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        CalendarSettings::from(&CalendarConfig::default())
    }
}

impl From<&CalendarConfig> for CalendarSettings {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            simulation: SimulationSettings::from(config),
            allow_simulated_verification: config.allow_simulated_verification,
            booking_route: config.booking_route.clone(),
            session_idle_timeout: Duration::from_secs(config.session_idle_secs),
        }
    }
}

/// Room fields the calendar page displays.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: String,
    pub title: String,
    pub category: String,
    pub slug: String,
    pub price: i64,
    pub max_occupancy: u32,
    pub image_url: Option<String>,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.clone(),
            title: room.title.clone(),
            category: room.category.clone(),
            slug: room.slug.clone(),
            price: room.price,
            max_occupancy: room.max_occupancy,
            image_url: room.image_url.clone(),
        }
    }
}

/// Everything needed to render the calendar page.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarView {
    pub room: RoomSummary,
    pub month: YearMonth,
    pub today: CalendarDate,
    pub weeks: Vec<Vec<CalendarDay>>,
    pub check_in: Option<CalendarDate>,
    pub check_out: Option<CalendarDate>,
    #[cfg_attr(feature = "openapi", schema(value_type = String))]
    pub selection_state: SelectionState,
    pub guests: u32,
    pub quote: Option<PriceQuote>,
    pub using_simulated_data: bool,
    /// Banner text while simulated data is shown.
    pub notice: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
}

pub struct AvailabilityCalendar<S: AvailabilityService + ?Sized> {
    service: Arc<S>,
    rng: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
    settings: CalendarSettings,
    room: Room,
    month: YearMonth,
    booked: BookedDates,
    selection: Selection,
    guests: u32,
    using_simulated_data: bool,
    loading: bool,
    error: Option<String>,
    views: Option<watch::Sender<CalendarView>>,
}

impl<S: AvailabilityService + ?Sized> AvailabilityCalendar<S> {
    /// Creates a calendar with an empty booked set; call [`refresh`](Self::refresh) to load it.
    pub fn new(
        room: Room,
        month: YearMonth,
        service: Arc<S>,
        rng: Arc<dyn RandomSource>,
        clock: Arc<dyn Clock>,
        settings: CalendarSettings,
    ) -> Self {
        Self {
            service,
            rng,
            clock,
            settings,
            room,
            month,
            booked: BookedDates::new(),
            selection: Selection::new(),
            guests: 1,
            using_simulated_data: false,
            loading: false,
            error: None,
            views: None,
        }
    }

    /// Watches the rendered view. Every state change is published.
    pub fn subscribe(&mut self) -> watch::Receiver<CalendarView> {
        if let Some(views) = &self.views {
            return views.subscribe();
        }
        let (views, receiver) = watch::channel(self.view());
        self.views = Some(views);
        receiver
    }

    fn publish(&self) {
        if let Some(views) = &self.views {
            views.send_replace(self.view());
        }
    }

    fn start_loading(&mut self) {
        self.loading = true;
        self.publish();
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn booked_dates(&self) -> &BookedDates {
        &self.booked
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn guests(&self) -> u32 {
        self.guests
    }

    pub fn using_simulated_data(&self) -> bool {
        self.using_simulated_data
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    pub fn is_date_available(&self, date: CalendarDate) -> bool {
        is_date_available(date, self.today(), &self.booked)
    }

    pub fn is_date_in_range(&self, date: CalendarDate) -> bool {
        self.selection.is_in_range(date)
    }

    /// Regenerates the full 42-day grid from the current state.
    pub fn grid(&self) -> CalendarGrid {
        generate_calendar(self.month, self.today(), &self.booked, &self.selection)
    }

    pub fn quote(&self) -> Option<PriceQuote> {
        quote(self.room.price, &self.selection)
    }

    fn query(&self, check_in: CalendarDate, check_out: CalendarDate) -> AvailabilityQuery {
        AvailabilityQuery {
            room_category: self.room.category.clone(),
            room_title: self.room.title.clone(),
            check_in: check_in.into(),
            check_out: check_out.into(),
            guests: None,
        }
    }

    /// Replaces the booked set for the displayed month.
    ///
    /// Falls back to simulated data when the request fails or carries no
    /// `bookedDates`. Never retries on its own.
    pub async fn refresh(&mut self) {
        let window_start = self.month.first_day();
        let window_end = window_start
            .days_from(self.settings.simulation.window_days as usize + 1)
            .last()
            .unwrap_or(window_start);
        let query = self.query(window_start, window_end);

        self.start_loading();
        let result = self.service.booked_dates(&query).await;
        self.loading = false;

        match result {
            Ok(response) => match response.booked_dates {
                Some(dates) => {
                    self.booked = BookedDates::from_wire(&dates);
                    self.using_simulated_data = false;
                    info!(
                        "Loaded {} booked dates for {} in {}",
                        self.booked.len(),
                        self.room.title,
                        self.month
                    );
                }
                None => {
                    warn!("Availability response for {} had no booked dates", self.room.title);
                    self.use_simulated_data();
                }
            },
            Err(e) => {
                warn!("Failed to load booked dates for {}: {}", self.room.title, e);
                self.use_simulated_data();
            }
        }
        self.publish();
    }

    fn use_simulated_data(&mut self) {
        self.booked =
            simulate_booked_dates(self.month, &self.settings.simulation, self.rng.as_ref());
        self.using_simulated_data = true;
    }

    /// Shows `month` and reloads its booked dates. The selection is kept.
    pub async fn show_month(&mut self, month: YearMonth) {
        self.month = month;
        self.refresh().await;
    }

    pub async fn next_month(&mut self) -> Result<(), CalendarError> {
        let month = self.month.next()?;
        self.show_month(month).await;
        Ok(())
    }

    pub async fn prev_month(&mut self) -> Result<(), CalendarError> {
        let month = self.month.prev()?;
        self.show_month(month).await;
        Ok(())
    }

    /// Applies a click on `date`. Unavailable dates are ignored.
    ///
    /// Returns whether the selection changed.
    pub fn click_date(&mut self, date: CalendarDate) -> bool {
        if !self.is_date_available(date) {
            debug!("Ignoring click on unavailable date {}", date);
            return false;
        }
        let changed = self.selection.select(date);
        if changed {
            self.error = None;
            self.publish();
        }
        changed
    }

    pub fn reset_selection(&mut self) {
        self.selection.reset();
        self.error = None;
        self.publish();
    }

    pub fn set_guests(&mut self, guests: u32) -> Result<(), CalendarError> {
        self.guests = validate_guests(guests, self.room.max_occupancy)?;
        self.publish();
        Ok(())
    }

    /// Verifies the selected stay and returns where the booking form lives.
    ///
    /// The remote verdict is authoritative. Only when the remote check itself
    /// fails are the nights checked against the local booked set.
    pub async fn proceed_to_booking(&mut self) -> Result<BookingRedirect, CalendarError> {
        let result = self.verify_selection().await;
        self.publish();
        result
    }

    async fn verify_selection(&mut self) -> Result<BookingRedirect, CalendarError> {
        let (check_in, check_out) = self
            .selection
            .range()
            .ok_or(CalendarError::IncompleteSelection)?;
        self.error = None;

        let mut query = self.query(check_in, check_out);
        query.guests = Some(self.guests);

        self.start_loading();
        let result = self.service.check_availability(&query).await;
        self.loading = false;

        match result {
            Ok(response) if response.is_available == Some(true) => {
                debug!("Backend confirmed {}..{}", check_in, check_out);
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| DEFAULT_UNAVAILABLE_MESSAGE.to_string());
                info!("Backend rejected {}..{}: {}", check_in, check_out, message);
                return Err(self.fail(CalendarError::Unavailable(message)));
            }
            Err(e) => {
                warn!(
                    "Availability check failed, verifying {}..{} locally: {}",
                    check_in, check_out, e
                );
                self.verify_locally(check_in, check_out)?;
            }
        }

        BookingRedirect::new(
            &self.settings.booking_route,
            &self.room,
            check_in,
            check_out,
            self.guests,
        )
    }

    fn verify_locally(
        &mut self,
        check_in: CalendarDate,
        check_out: CalendarDate,
    ) -> Result<(), CalendarError> {
        if self.using_simulated_data && !self.settings.allow_simulated_verification {
            return Err(self.fail(CalendarError::VerificationUnavailable(
                UNVERIFIED_MESSAGE.to_string(),
            )));
        }
        if let Some(night) =
            first_unavailable_night(check_in, check_out, self.today(), &self.booked)
        {
            info!("Local check found {} unavailable", night);
            return Err(self.fail(CalendarError::Unavailable(
                DEFAULT_UNAVAILABLE_MESSAGE.to_string(),
            )));
        }
        Ok(())
    }

    /// Records the user-facing message of `err` and hands it back.
    fn fail(&mut self, err: CalendarError) -> CalendarError {
        self.error = Some(err.to_string());
        err
    }

    pub fn view(&self) -> CalendarView {
        let grid = self.grid();
        CalendarView {
            room: RoomSummary::from(&self.room),
            month: self.month,
            today: self.today(),
            weeks: grid.weeks,
            check_in: self.selection.check_in(),
            check_out: self.selection.check_out(),
            selection_state: self.selection.state(),
            guests: self.guests,
            quote: self.quote(),
            using_simulated_data: self.using_simulated_data,
            notice: self
                .using_simulated_data
                .then(|| SIMULATED_DATA_NOTICE.to_string()),
            error: self.error.clone(),
            loading: self.loading,
        }
    }
}
