// --- File: crates/hotelier_calendar/src/lib.rs ---
pub mod availability;
pub mod booking;
pub mod clock;
pub mod component;
pub mod date;
#[cfg(test)]
mod date_test;
pub mod doc;
pub mod error;
pub mod grid;
#[cfg(test)]
mod grid_proptest;
pub mod handlers;
pub mod pricing;
pub mod random;
pub mod routes;
pub mod selection;
pub mod service;
pub mod state;

pub use component::{AvailabilityCalendar, CalendarSettings, CalendarView};
pub use date::{CalendarDate, YearMonth};
pub use error::CalendarError;
pub use routes::routes;
pub use state::CalendarState;
