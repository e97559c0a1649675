//! Report envelopes produced by the analyzer.

use core::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quartile thresholds of a distribution and how many raw values fall strictly below each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuartileCounts {
    /// R-7 quantiles at 0.25, 0.50 and 0.75.
    pub thresholds: [f64; 3],
    /// Count of values strictly below the matching threshold.
    pub below: [usize; 3],
}

impl QuartileCounts {
    /// Count below the first quartile.
    #[must_use]
    pub const fn below_q1(&self) -> usize {
        self.below[0]
    }

    /// Count below the median.
    #[must_use]
    pub const fn below_q2(&self) -> usize {
        self.below[1]
    }

    /// Count below the third quartile.
    #[must_use]
    pub const fn below_q3(&self) -> usize {
        self.below[2]
    }
}

/// Distribution of daily traded volume (sum of quantities per trade date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSummary {
    /// Mean daily volume.
    pub mean: f64,
    /// Largest daily volume.
    pub max: u64,
    /// Smallest daily volume.
    pub min: u64,
    /// Median daily volume (average of the two middle days for an even count).
    pub median: f64,
    /// Volume of every trade date in ascending date order.
    pub per_day: Vec<(NaiveDate, u64)>,
}

/// Mean and standard deviation of sampled-price returns, already scaled to basis points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReturnSummary {
    /// Mean return in bps; `None` when no day produced a return.
    pub mean_bps: Option<f64>,
    /// Sample standard deviation in bps; `None` with fewer than two returns.
    pub std_bps: Option<f64>,
}

/// Daily high and low expressed in basis points away from the opening price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDeviation {
    /// Trade date.
    pub date: NaiveDate,
    /// Opening price the deviations are measured from.
    pub opening_price: Decimal,
    /// `round(10000 * (high - opening))`.
    pub max_bps: i64,
    /// `round(10000 * (low - opening))`.
    pub min_bps: i64,
}

/// Full result of analyzing one trade file.
///
/// Fields are listed in report order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Number of trade records analyzed.
    pub trade_count: usize,
    /// Number of distinct trade dates.
    pub day_count: usize,
    /// Trade price quartiles over the whole file.
    pub price_quartiles: QuartileCounts,
    /// Highest trade price.
    pub max_trade_price: Decimal,
    /// Lowest trade price.
    pub min_trade_price: Decimal,
    /// Mean trade price.
    pub mean_trade_price: f64,
    /// Quartiles of day-bounded interarrival times in seconds; `None` when no day has two trades.
    pub interarrival_quartiles: Option<QuartileCounts>,
    /// Daily traded volume statistics.
    pub daily_volume: VolumeSummary,
    /// Sample standard deviation of forward-filled prices across all days.
    pub sampled_price_std: Option<f64>,
    /// Day-bounded returns of the forward-filled prices.
    pub returns: ReturnSummary,
    /// Per-day deviation of high and low from the opening price.
    pub daily_deviation: Vec<DailyDeviation>,
}

struct Opt(Option<f64>);

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.6}"),
            None => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pq = &self.price_quartiles;
        writeln!(f, "trades: {} over {} day(s)", self.trade_count, self.day_count)?;
        writeln!(
            f,
            "trades below price q1/q2/q3: {} / {} / {}",
            pq.below_q1(),
            pq.below_q2(),
            pq.below_q3()
        )?;
        writeln!(
            f,
            "trade price max/min/mean: {} / {} / {:.6}",
            self.max_trade_price, self.min_trade_price, self.mean_trade_price
        )?;
        match &self.interarrival_quartiles {
            Some(iq) => writeln!(
                f,
                "interarrivals below q1/q2/q3: {} / {} / {}",
                iq.below_q1(),
                iq.below_q2(),
                iq.below_q3()
            )?,
            None => writeln!(f, "interarrivals below q1/q2/q3: n/a")?,
        }
        let v = &self.daily_volume;
        writeln!(
            f,
            "daily volume mean/max/min/median: {:.3} / {} / {} / {:.1}",
            v.mean, v.max, v.min, v.median
        )?;
        writeln!(f, "sampled price std: {}", Opt(self.sampled_price_std))?;
        writeln!(
            f,
            "returns mean/std (bps): {} / {}",
            Opt(self.returns.mean_bps),
            Opt(self.returns.std_bps)
        )?;
        writeln!(f, "daily deviation (bps):")?;
        for d in &self.daily_deviation {
            writeln!(f, "  {} max={:+} min={:+}", d.date, d.max_bps, d.min_bps)?;
        }
        Ok(())
    }
}
