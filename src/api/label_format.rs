use chrono::{DateTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::primitives::{SECONDS_PER_DAY, unix_seconds_to_datetime};

/// Formats a currency amount as `$12,345.67`, with the sign ahead of `$`.
#[must_use]
pub fn format_currency(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };
    match fraction {
        Some(fraction) => format!("{sign}${}.{fraction}", group_thousands(integer)),
        None => format!("{sign}${}", group_thousands(integer)),
    }
}

/// Formats a growth percentage as `1.23%` / `-0.40%`.
#[must_use]
pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{rounded:.2}%")
}

/// Value-axis tick label; precision follows the tick step.
#[must_use]
pub(super) fn format_value_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        (-step.log10().floor()).clamp(0.0, 6.0) as u32
    } else {
        0
    };
    let decimal = Decimal::from_f64(value).unwrap_or_default();
    format_currency(decimal, decimals)
}

/// Time-axis tick label; the pattern coarsens with the tick step.
#[must_use]
pub(super) fn format_time_tick(unix_seconds: f64, step: f64) -> String {
    let Some(time) = unix_seconds_to_datetime(unix_seconds) else {
        return format!("{unix_seconds:.0}");
    };
    time.format(time_tick_pattern(step)).to_string()
}

fn time_tick_pattern(step: f64) -> &'static str {
    if step < SECONDS_PER_DAY {
        "%H:%M"
    } else if step < 182.0 * SECONDS_PER_DAY {
        "%b %d"
    } else {
        "%b %Y"
    }
}

/// Readout date for a hovered sample.
#[must_use]
pub fn format_readout_date(time: DateTime<Utc>) -> String {
    time.format("%Y-%m-%d").to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
