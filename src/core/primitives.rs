use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::FromPrimitive;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Converts a currency amount to a decimal rounded to cents.
///
/// Non-finite or out-of-range inputs collapse to zero.
#[must_use]
pub fn f64_to_cents(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .map(|decimal| decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .unwrap_or_default()
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Inverse of [`datetime_to_unix_seconds`] at millisecond precision.
///
/// Returns `None` for non-finite input or instants chrono cannot represent.
#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis > i64::MAX as f64 || millis < i64::MIN as f64 {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}
