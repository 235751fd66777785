// --- File: crates/hotelier_calendar/src/pricing.rs ---
use serde::Serialize;

use crate::date::CalendarDate;
use crate::selection::Selection;

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    pub nights: u32,
    pub nightly_price: i64,
    pub total: i64,
}

/// Nights between two dates. Date-only values make the day difference exact.
pub fn nights_between(check_in: CalendarDate, check_out: CalendarDate) -> u32 {
    check_in.days_until(check_out).max(0) as u32
}

/// Price of the selected stay, once both dates are chosen. Taxes are not included.
pub fn quote(nightly_price: i64, selection: &Selection) -> Option<PriceQuote> {
    let (check_in, check_out) = selection.range()?;
    let nights = nights_between(check_in, check_out);
    Some(PriceQuote {
        nights,
        nightly_price,
        total: nightly_price.saturating_mul(i64::from(nights)),
    })
}
