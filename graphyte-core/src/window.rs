//! Daily time-of-day masking.

use chrono::{Datelike, Timelike, Weekday};

use crate::table::Table;
use crate::{DayWindow, GraphyteError};

/// Mask the rows of `table` that fall outside `window`.
///
/// The local time of each row is taken in the window's timezone (UTC by
/// default). Rows outside `[start_hour, end_hour)`, or on a weekend when
/// `weekdays_only` is set, have every cell replaced with `Missing`. The 0/0
/// window without a weekday restriction returns the table unchanged.
///
/// Returns the number of masked rows.
///
/// # Errors
/// Returns `InvalidArg` for an invalid window.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "graphyte_core::day_window",
        skip(table),
        fields(rows = table.len(), start = window.start_hour, end = window.end_hour),
    )
)]
pub fn apply_day_window(table: &mut Table, window: &DayWindow) -> Result<usize, GraphyteError> {
    window.validate()?;
    if window.is_disabled() {
        return Ok(0);
    }
    let tz = window.timezone.unwrap_or(chrono_tz::UTC);
    let masked = table.mask_rows(|ts| {
        let local = ts.with_timezone(&tz);
        if window.weekdays_only && matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
            return false;
        }
        window.admits_hour(local.hour())
    });
    #[cfg(feature = "tracing")]
    tracing::debug!(masked, "day window applied");
    Ok(masked)
}
