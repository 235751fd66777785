// --- File: crates/hotelier_calendar/src/selection.rs ---
//! Two-click check-in/check-out selection.
//!
//! `Empty --click--> Partial --click--> Full --click--> Partial`, with `reset`
//! returning to `Empty` from anywhere. A click before the current check-in
//! swaps the endpoints, so the order of the two clicks does not matter.

use serde::Serialize;

use crate::date::CalendarDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionState {
    Empty,
    PartialSelection,
    FullSelection,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    check_in: Option<CalendarDate>,
    check_out: Option<CalendarDate>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_in(&self) -> Option<CalendarDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<CalendarDate> {
        self.check_out
    }

    /// Both endpoints, once the range is complete.
    pub fn range(&self) -> Option<(CalendarDate, CalendarDate)> {
        self.check_in.zip(self.check_out)
    }

    pub fn state(&self) -> SelectionState {
        match (self.check_in, self.check_out) {
            (None, _) => SelectionState::Empty,
            (Some(_), None) => SelectionState::PartialSelection,
            (Some(_), Some(_)) => SelectionState::FullSelection,
        }
    }

    /// Applies one click. Availability of `date` is the caller's concern.
    ///
    /// Clicking the pending check-in again leaves the selection unchanged, so a
    /// complete range always spans at least one night. Returns whether anything changed.
    pub fn select(&mut self, date: CalendarDate) -> bool {
        match (self.check_in, self.check_out) {
            (None, _) => {
                self.check_in = Some(date);
                self.check_out = None;
            }
            (Some(check_in), None) => {
                if date == check_in {
                    return false;
                }
                if date < check_in {
                    self.check_in = Some(date);
                    self.check_out = Some(check_in);
                } else {
                    self.check_out = Some(date);
                }
            }
            (Some(_), Some(_)) => {
                self.check_in = Some(date);
                self.check_out = None;
            }
        }
        true
    }

    pub fn reset(&mut self) {
        self.check_in = None;
        self.check_out = None;
    }

    pub fn is_check_in(&self, date: CalendarDate) -> bool {
        self.check_in == Some(date)
    }

    pub fn is_check_out(&self, date: CalendarDate) -> bool {
        self.check_out == Some(date)
    }

    /// Strictly between check-in and check-out; the endpoints themselves are excluded.
    pub fn is_in_range(&self, date: CalendarDate) -> bool {
        match self.range() {
            Some((check_in, check_out)) => check_in < date && date < check_out,
            None => false,
        }
    }
}
