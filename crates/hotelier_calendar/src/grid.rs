// --- File: crates/hotelier_calendar/src/grid.rs ---
use chrono::Days;
use serde::Serialize;
use tracing::trace;

use crate::availability::{is_date_available, BookedDates};
use crate::date::{CalendarDate, YearMonth};
use crate::selection::Selection;

/// Cells in a rendered month: six full weeks.
pub const GRID_DAYS: usize = 42;
pub const DAYS_PER_WEEK: usize = 7;

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: CalendarDate,
    pub is_current_month: bool,
    pub is_available: bool,
    pub is_check_in: bool,
    pub is_check_out: bool,
    /// Strictly inside the selected range.
    pub is_selected: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGrid {
    pub month: YearMonth,
    /// Six rows of seven days, Sunday first.
    pub weeks: Vec<Vec<CalendarDay>>,
}

impl CalendarGrid {
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flatten()
    }

    pub fn day(&self, date: CalendarDate) -> Option<&CalendarDay> {
        self.days().find(|day| day.date == date)
    }
}

fn annotate(
    date: CalendarDate,
    month: YearMonth,
    today: CalendarDate,
    booked: &BookedDates,
    selection: &Selection,
) -> CalendarDay {
    CalendarDay {
        date,
        is_current_month: month.contains(date),
        is_available: is_date_available(date, today, booked),
        is_check_in: selection.is_check_in(date),
        is_check_out: selection.is_check_out(date),
        is_selected: selection.is_in_range(date),
    }
}

/// Builds the 6x7 grid for `month`.
///
/// The grid opens with the trailing days of the previous month so that the
/// first of `month` lands on its weekday column (0 = Sunday), then runs on
/// into the next month until 42 cells are filled.
pub fn generate_calendar(
    month: YearMonth,
    today: CalendarDate,
    booked: &BookedDates,
    selection: &Selection,
) -> CalendarGrid {
    let first = month.first_day();
    let starting_day_index = first.weekday_index() as usize;

    let leading = (1..=starting_day_index as u64)
        .rev()
        .filter_map(|offset| first.as_naive().checked_sub_days(Days::new(offset)))
        .map(CalendarDate::from);

    let cells: Vec<CalendarDay> = leading
        .chain(first.days_from(GRID_DAYS - starting_day_index))
        .map(|date| annotate(date, month, today, booked, selection))
        .collect();

    trace!(
        "Generated {} cells for {} ({} leading)",
        cells.len(),
        month,
        starting_day_index
    );

    CalendarGrid {
        month,
        weeks: cells
            .chunks(DAYS_PER_WEEK)
            .map(|week| week.to_vec())
            .collect(),
    }
}
