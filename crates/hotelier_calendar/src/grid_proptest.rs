#[cfg(test)]
mod tests {
    use crate::availability::BookedDates;
    use crate::date::{CalendarDate, YearMonth};
    use crate::grid::{generate_calendar, GRID_DAYS};
    use crate::selection::Selection;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn month_strategy() -> impl Strategy<Value = YearMonth> {
        (1900i32..2200, 1u32..=12).prop_map(|(year, month)| {
            YearMonth::new(year, month).expect("generated month is valid")
        })
    }

    proptest! {
        // Every grid has 42 cells, starts on a Sunday and contains the whole month
        #[test]
        fn test_grid_shape(month in month_strategy()) {
            let today = month.first_day();
            let grid = generate_calendar(month, today, &BookedDates::new(), &Selection::new());

            prop_assert_eq!(grid.days().count(), GRID_DAYS);
            prop_assert_eq!(grid.weeks[0][0].date.weekday(), Weekday::Sun);
            let in_month = grid.days().filter(|day| day.is_current_month).count();
            prop_assert_eq!(in_month as u32, month.days_in_month());
            prop_assert!(grid.day(month.first_day()).is_some());
        }

        // Days before today are never available
        #[test]
        fn test_past_days_unavailable(month in month_strategy(), offset in 0u32..42) {
            let grid = generate_calendar(month, month.first_day(), &BookedDates::new(), &Selection::new());
            let today = grid.days().nth(offset as usize).map(|day| day.date).unwrap();
            let grid = generate_calendar(month, today, &BookedDates::new(), &Selection::new());
            for day in grid.days() {
                prop_assert_eq!(day.is_available, day.date >= today);
            }
        }

        // The order of the two clicks does not change the resulting range
        #[test]
        fn test_selection_order_independent(a in 1u32..=28, b in 1u32..=28) {
            prop_assume!(a != b);
            let first = CalendarDate::new(2025, 2, a).unwrap();
            let second = CalendarDate::new(2025, 2, b).unwrap();

            let mut forward = Selection::new();
            forward.select(first);
            forward.select(second);
            let mut backward = Selection::new();
            backward.select(second);
            backward.select(first);

            prop_assert_eq!(forward.range(), backward.range());
            let (check_in, check_out) = forward.range().unwrap();
            prop_assert!(check_in < check_out);
        }
    }
}
