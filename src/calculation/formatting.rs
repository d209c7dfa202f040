//! Human-readable renderings of hour values.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Renders decimal hours as `"X Hours Y Minutes"`.
///
/// The hours are truncated and the remaining fraction is rounded to whole
/// minutes.
///
/// ```
/// use attendance_engine::calculation::format_working_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_working_hours(Decimal::new(108, 1)), "10 Hours 48 Minutes");
/// ```
pub fn format_working_hours(hours: Decimal) -> String {
    let whole = hours.trunc();
    let minutes = ((hours - whole) * Decimal::from(60))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    format!("{} Hours {} Minutes", whole.normalize(), minutes.normalize())
}

/// Renders decimal hours rounded to whole hours, e.g. `"1 Hour"` or `"2 Hours"`.
///
/// ```
/// use attendance_engine::calculation::format_overtime;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_overtime(Decimal::new(5, 1)), "1 Hour");
/// assert_eq!(format_overtime(Decimal::new(20, 1)), "2 Hours");
/// ```
pub fn format_overtime(hours: Decimal) -> String {
    let rounded = hours
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default();

    if rounded == 1 {
        "1 Hour".to_string()
    } else {
        format!("{} Hours", rounded)
    }
}
