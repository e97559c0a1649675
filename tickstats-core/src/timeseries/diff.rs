use chrono::TimeDelta;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::TickStatsError;
use crate::record::Timestamped;
use crate::table::TradeTable;

/// Differences between adjacent elements of the same day.
///
/// `days` yields one ordered slice per day key. The first element of every
/// day produces nothing, so a day with `k` elements contributes `k - 1`
/// values and `D` days contribute `N - D` in total. Nothing is ever computed
/// across two slices.
pub fn day_bounded_diff<'a, T, D, I, F>(days: I, mut diff: F) -> Vec<D>
where
    T: 'a,
    I: IntoIterator<Item = &'a [T]>,
    F: FnMut(&T, &T) -> D,
{
    let mut out = Vec::new();
    for day in days {
        out.extend(day.windows(2).map(|w| diff(&w[0], &w[1])));
    }
    out
}

/// Same as [`day_bounded_diff`] for a fallible difference; stops at the first error.
///
/// # Errors
/// Propagates the first error returned by `diff`.
pub fn try_day_bounded_diff<'a, T, D, E, I, F>(days: I, mut diff: F) -> Result<Vec<D>, E>
where
    T: 'a,
    I: IntoIterator<Item = &'a [T]>,
    F: FnMut(&T, &T) -> Result<D, E>,
{
    let mut out = Vec::new();
    for day in days {
        for w in day.windows(2) {
            out.push(diff(&w[0], &w[1])?);
        }
    }
    Ok(out)
}

/// Length of a non-negative intraday gap in seconds, at microsecond precision.
#[must_use]
pub fn delta_seconds(delta: TimeDelta) -> f64 {
    let micros = delta
        .num_microseconds()
        .unwrap_or_else(|| delta.num_milliseconds().saturating_mul(1_000));
    micros as f64 / 1_000_000.0
}

/// Seconds between consecutive trades of the same trade date.
///
/// The gap from one day's last trade to the next day's first trade is never
/// included.
#[must_use]
pub fn interarrival_seconds(table: &TradeTable) -> Vec<f64> {
    day_bounded_diff(table.days().map(|d| d.records()), |a, b| {
        delta_seconds(b.timestamp() - a.timestamp())
    })
}

/// Simple return `(p_i - p_{i-1}) / p_i` between consecutive prices.
///
/// The denominator is the later price.
///
/// # Errors
/// Returns `Err(TickStatsError::Data)` when `current` is zero.
pub fn simple_return(previous: Decimal, current: Decimal) -> Result<f64, TickStatsError> {
    if current.is_zero() {
        return Err(TickStatsError::Data(
            "cannot compute a return against a zero price".into(),
        ));
    }
    let r = (current - previous)
        .checked_div(current)
        .ok_or_else(|| TickStatsError::Data("return overflow".into()))?;
    r.to_f64()
        .ok_or_else(|| TickStatsError::Data(format!("return {r} not representable as f64")))
}

/// Day-bounded simple returns over per-day price series.
///
/// # Errors
/// Returns `Err(TickStatsError::Data)` if any price used as a denominator is zero.
pub fn day_bounded_returns<'a, I>(days: I) -> Result<Vec<f64>, TickStatsError>
where
    I: IntoIterator<Item = &'a [Decimal]>,
{
    try_day_bounded_diff(days, |prev: &Decimal, cur: &Decimal| simple_return(*prev, *cur))
}
