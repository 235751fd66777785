// --- File: crates/hotelier_calendar/src/availability.rs ---
use chrono::Weekday;
use hotelier_config::CalendarConfig;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::date::{CalendarDate, YearMonth};
use crate::random::RandomSource;

/// Dates that cannot be booked. Replaced wholesale on every fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookedDates(HashSet<CalendarDate>);

impl BookedDates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the ISO strings returned by the backend, skipping entries that are not dates.
    pub fn from_wire(values: &[String]) -> Self {
        let dates = values
            .iter()
            .filter_map(|value| match value.parse::<CalendarDate>() {
                Ok(date) => Some(date),
                Err(e) => {
                    warn!("Ignoring booked date from backend: {}", e);
                    None
                }
            })
            .collect();
        BookedDates(dates)
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.0.contains(&date)
    }

    pub fn insert(&mut self, date: CalendarDate) -> bool {
        self.0.insert(date)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalendarDate> {
        self.0.iter()
    }
}

impl FromIterator<CalendarDate> for BookedDates {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        BookedDates(iter.into_iter().collect())
    }
}

/// A date can be picked iff it is not before `today` and not booked.
pub fn is_date_available(date: CalendarDate, today: CalendarDate, booked: &BookedDates) -> bool {
    date >= today && !booked.contains(date)
}

/// Knobs for the degraded-mode booked-date synthesis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    pub window_days: u32,
    pub weekend_probability: f64,
    pub weekday_probability: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings::from(&CalendarConfig::default())
    }
}

impl From<&CalendarConfig> for SimulationSettings {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            window_days: config.simulation_window_days,
            weekend_probability: config.weekend_booking_probability,
            weekday_probability: config.weekday_booking_probability,
        }
    }
}

/// Friday and Saturday nights are the busy ones.
fn is_weekend_night(date: CalendarDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Builds a plausible booked-date set for the window starting at the first of `month`.
///
/// One draw per date: booked when the draw falls below the weekend or weekday probability.
pub fn simulate_booked_dates(
    month: YearMonth,
    settings: &SimulationSettings,
    rng: &dyn RandomSource,
) -> BookedDates {
    let booked: BookedDates = month
        .first_day()
        .days_from(settings.window_days as usize)
        .filter(|date| {
            let probability = if is_weekend_night(*date) {
                settings.weekend_probability
            } else {
                settings.weekday_probability
            };
            rng.next_unit() < probability
        })
        .collect();
    debug!(
        "Simulated {} booked dates over {} days from {}",
        booked.len(),
        settings.window_days,
        month.first_day()
    );
    booked
}
