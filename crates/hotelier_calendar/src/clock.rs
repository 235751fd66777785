// --- File: crates/hotelier_calendar/src/clock.rs ---
use chrono::Utc;
use chrono_tz::Tz;
use tracing::warn;

use crate::date::CalendarDate;

/// Source of "today" for availability checks.
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}

/// Today's date in a fixed time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    time_zone: Tz,
}

impl SystemClock {
    pub fn new(time_zone: Tz) -> Self {
        Self { time_zone }
    }

    /// Parses an IANA zone name, falling back to UTC when it is unknown.
    pub fn from_zone_name(name: &str) -> Self {
        let time_zone = name.parse::<Tz>().unwrap_or_else(|_| {
            warn!("Unknown time zone '{}', using UTC", name);
            Tz::UTC
        });
        Self::new(time_zone)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        Utc::now().with_timezone(&self.time_zone).date_naive().into()
    }
}

/// A clock frozen on one day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
