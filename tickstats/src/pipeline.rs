//! Individual report stages composed by `Analyzer::analyze`.

use chrono::TimeDelta;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tickstats_core::timeseries::stats;
use tickstats_core::{
    QuartileCounts, ReturnSummary, TickStatsError, TradeTable, VolumeSummary,
    day_bounded_returns, interarrival_seconds, quartile_counts, resample_forward_fill,
};

const BPS: f64 = 10_000.0;

pub struct PriceStats {
    pub quartiles: QuartileCounts,
    pub max: Decimal,
    pub min: Decimal,
    pub mean: f64,
}

pub struct PricePath {
    pub sampled_price_std: Option<f64>,
    pub returns: ReturnSummary,
}

fn to_f64(price: Decimal) -> Result<f64, TickStatsError> {
    price
        .to_f64()
        .ok_or_else(|| TickStatsError::Data(format!("price {price} not representable as f64")))
}

/// Quartile counts, extremes and mean of every trade price in the table.
pub fn price_stats(table: &TradeTable) -> Result<PriceStats, TickStatsError> {
    let records = table.records();
    let prices: Vec<f64> = records
        .iter()
        .map(|r| to_f64(r.trade_price()))
        .collect::<Result<_, _>>()?;

    let quartiles = quartile_counts(&prices).ok_or(TickStatsError::EmptyInput)?;
    let mean = stats::mean(&prices).ok_or(TickStatsError::EmptyInput)?;
    let max = records
        .iter()
        .map(tickstats_core::TradeRecord::trade_price)
        .max()
        .ok_or(TickStatsError::EmptyInput)?;
    let min = records
        .iter()
        .map(tickstats_core::TradeRecord::trade_price)
        .min()
        .ok_or(TickStatsError::EmptyInput)?;

    Ok(PriceStats {
        quartiles,
        max,
        min,
        mean,
    })
}

/// Quartile counts of day-bounded interarrival times; `None` when no day has two trades.
pub fn interarrival_quartiles(table: &TradeTable) -> Option<QuartileCounts> {
    let gaps = interarrival_seconds(table);
    #[cfg(feature = "tracing")]
    if gaps.is_empty() {
        tracing::debug!("no day has two trades; interarrival statistics undefined");
    }
    quartile_counts(&gaps)
}

/// Mean, extremes and median of per-day traded volume.
pub fn daily_volume_summary(table: &TradeTable) -> Result<VolumeSummary, TickStatsError> {
    tickstats_core::volume_summary(tickstats_core::daily_volume(table))
}

/// Forward-fill each day's prices onto its own grid, then measure the sampled path.
///
/// Grids are built and differenced per day; only the final statistics pool
/// the days together.
pub fn price_path(table: &TradeTable, step: TimeDelta) -> Result<PricePath, TickStatsError> {
    let grids: Vec<Vec<Decimal>> = table
        .days()
        .map(|day| {
            resample_forward_fill(day.records(), step, tickstats_core::TradeRecord::trade_price)
                .map(|points| points.into_iter().map(|p| p.value).collect())
        })
        .collect::<Result<_, _>>()?;

    let sampled: Vec<f64> = grids
        .iter()
        .flatten()
        .map(|p| to_f64(*p))
        .collect::<Result<_, _>>()?;

    let returns = day_bounded_returns(grids.iter().map(Vec::as_slice))?;

    Ok(PricePath {
        sampled_price_std: stats::sample_std(&sampled),
        returns: ReturnSummary {
            mean_bps: stats::mean(&returns).map(|m| m * BPS),
            std_bps: stats::sample_std(&returns).map(|s| s * BPS),
        },
    })
}
