#[cfg(test)]
mod tests {
    use crate::date::{CalendarDate, DateError, YearMonth};

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).expect("valid date")
    }

    #[test]
    fn test_parse_plain_and_timestamped_dates() {
        assert_eq!("2025-06-14".parse::<CalendarDate>(), Ok(date(2025, 6, 14)));
        assert_eq!(
            "2025-06-14T00:00:00.000Z".parse::<CalendarDate>(),
            Ok(date(2025, 6, 14))
        );
        assert!(matches!(
            "14/06/2025".parse::<CalendarDate>(),
            Err(DateError::InvalidDate(_))
        ));
        assert!("2025-02-30".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_display_is_iso() {
        assert_eq!(date(2025, 1, 5).to_string(), "2025-01-05");
    }

    #[test]
    fn test_serde_uses_iso_strings() {
        let json = serde_json::to_string(&date(2024, 2, 29)).expect("serialize");
        assert_eq!(json, "\"2024-02-29\"");
        let back: CalendarDate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, date(2024, 2, 29));
        assert!(serde_json::from_str::<CalendarDate>("\"nope\"").is_err());
    }

    #[test]
    fn test_weekday_index_starts_on_sunday() {
        // 2025-06-01 is a Sunday
        assert_eq!(date(2025, 6, 1).weekday_index(), 0);
        assert_eq!(date(2025, 6, 7).weekday_index(), 6);
    }

    #[test]
    fn test_days_before_excludes_end() {
        let nights: Vec<_> = date(2025, 6, 14).days_before(date(2025, 6, 17)).collect();
        assert_eq!(nights, vec![date(2025, 6, 14), date(2025, 6, 15), date(2025, 6, 16)]);
        assert_eq!(date(2025, 6, 14).days_before(date(2025, 6, 14)).count(), 0);
    }

    #[test]
    fn test_days_in_month_handles_leap_years() {
        assert_eq!(YearMonth::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 4).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2025, 12).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_month_navigation_crosses_years() {
        let december = YearMonth::new(2025, 12).unwrap();
        let january = december.next().unwrap();
        assert_eq!((january.year(), january.month()), (2026, 1));
        assert_eq!(january.prev().unwrap(), december);
    }

    #[test]
    fn test_month_navigation_stops_at_supported_range() {
        assert!(YearMonth::new(9999, 12).unwrap().next().is_err());
        assert!(YearMonth::new(1, 1).unwrap().prev().is_err());
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert_eq!(
            YearMonth::new(2025, 13),
            Err(DateError::InvalidMonth {
                year: 2025,
                month: 13
            })
        );
    }

    #[test]
    fn test_year_month_of_and_contains() {
        let month = YearMonth::of(date(2025, 6, 14));
        assert_eq!(month.first_day(), date(2025, 6, 1));
        assert!(month.contains(date(2025, 6, 30)));
        assert!(!month.contains(date(2025, 7, 1)));
        assert_eq!(month.to_string(), "June 2025");
    }

    #[test]
    fn test_year_month_serde_shape() {
        let month = YearMonth::new(2025, 6).unwrap();
        let value = serde_json::to_value(month).expect("serialize");
        assert_eq!(value, serde_json::json!({ "year": 2025, "month": 6 }));
        assert!(serde_json::from_value::<YearMonth>(serde_json::json!({ "year": 2025, "month": 0 }))
            .is_err());
    }
}
