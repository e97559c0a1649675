use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::record::TradeRecord;
use crate::table::TradeTable;
use crate::timeseries::stats;
use crate::{DailyDeviation, OpeningPriceBasis, QuartileCounts, TickStatsError, VolumeSummary};

const QUARTILES: [f64; 3] = [0.25, 0.5, 0.75];
const BPS: u32 = 10_000;

/// Apply `reduce` to each day's records, in date order.
pub fn daily_reduce<V, F>(table: &TradeTable, mut reduce: F) -> Vec<(NaiveDate, V)>
where
    F: FnMut(&[TradeRecord]) -> V,
{
    table
        .days()
        .map(|d| (d.date(), reduce(d.records())))
        .collect()
}

/// Sum of `trade_quantity` per trade date.
#[must_use]
pub fn daily_volume(table: &TradeTable) -> Vec<(NaiveDate, u64)> {
    daily_reduce(table, |recs| {
        recs.iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.trade_quantity()))
    })
}

/// Highest and lowest `trade_price` per trade date.
#[must_use]
pub fn daily_high_low(table: &TradeTable) -> Vec<(NaiveDate, Decimal, Decimal)> {
    table
        .days()
        .map(|d| {
            let first = d.first().trade_price();
            let (hi, lo) = d.records().iter().fold((first, first), |(hi, lo), r| {
                (hi.max(r.trade_price()), lo.min(r.trade_price()))
            });
            (d.date(), hi, lo)
        })
        .collect()
}

/// Quartile thresholds of `values` and how many raw values fall strictly below each.
///
/// Thresholds come from the whole distribution, so the counts are independent
/// of value order and satisfy `q1 <= q2 <= q3 <= len`. Returns `None` for an
/// empty slice.
#[must_use]
pub fn quartile_counts(values: &[f64]) -> Option<QuartileCounts> {
    let thresholds = stats::quantiles(values, QUARTILES)?;
    let below = thresholds.map(|t| stats::count_below(values, t));
    Some(QuartileCounts { thresholds, below })
}

/// Summary of per-day volumes.
///
/// # Errors
/// Returns `Err(TickStatsError::EmptyInput)` when `per_day` is empty.
pub fn volume_summary(per_day: Vec<(NaiveDate, u64)>) -> Result<VolumeSummary, TickStatsError> {
    let as_f64: Vec<f64> = per_day.iter().map(|(_, v)| *v as f64).collect();
    let (Some(mean), Some(median)) = (stats::mean(&as_f64), stats::median(&as_f64)) else {
        return Err(TickStatsError::EmptyInput);
    };
    let max = per_day.iter().map(|(_, v)| *v).max().unwrap_or_default();
    let min = per_day.iter().map(|(_, v)| *v).min().unwrap_or_default();
    Ok(VolumeSummary {
        mean,
        max,
        min,
        median,
        per_day,
    })
}

/// Express a price difference in basis points: `round(10000 * delta)`, half away from zero.
///
/// # Errors
/// Returns `Err(TickStatsError::Data)` if the scaled value does not fit an `i64`.
pub fn to_bps(delta: Decimal) -> Result<i64, TickStatsError> {
    let scaled = delta
        .checked_mul(Decimal::from(BPS))
        .ok_or_else(|| TickStatsError::Data(format!("bps overflow for {delta}")))?;
    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| TickStatsError::Data(format!("bps value {scaled} out of range")))
}

/// Daily high and low in basis points away from the opening price.
///
/// With [`OpeningPriceBasis::FirstTrade`] every day is measured against the
/// first trade of the whole table; with [`OpeningPriceBasis::DailyOpen`] each
/// day uses its own first trade.
///
/// # Errors
/// Returns `Err(TickStatsError::Data)` when a deviation does not fit an `i64`.
pub fn daily_price_deviation(
    table: &TradeTable,
    basis: OpeningPriceBasis,
) -> Result<Vec<DailyDeviation>, TickStatsError> {
    let table_open = table.opening_price();
    table
        .days()
        .zip(daily_high_low(table))
        .map(|(day, (date, hi, lo))| {
            let opening_price = match basis {
                OpeningPriceBasis::DailyOpen => day.first().trade_price(),
                _ => table_open,
            };
            Ok(DailyDeviation {
                date,
                opening_price,
                max_bps: to_bps(hi - opening_price)?,
                min_bps: to_bps(lo - opening_price)?,
            })
        })
        .collect()
}
