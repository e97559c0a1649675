//! tickstats-core
//!
//! Trade tables and the time-series engine behind the tickstats analyzer.
//!
//! - `record`: the typed trade record and its derived timestamp.
//! - `table`: records ordered by timestamp with a per-day index.
//! - `ingest`: reading headerless trade files.
//! - `timeseries`: forward-fill resampling, day-bounded differencing and
//!   grouped statistics.
//!
//! Everything here is synchronous and pure: each stage takes borrowed input and
//! returns new values.
#![warn(missing_docs)]

/// Reading headerless trade files into tables.
pub mod ingest;
/// Trade record type and the `Timestamped` trait.
pub mod record;
/// Ordered trade table with a per-day index.
pub mod table;
/// Resampling, differencing and aggregation.
pub mod timeseries;

pub use ingest::{load_trade_table, read_trades};
pub use record::{Timestamped, TradeInfo, TradeRecord};
pub use table::{DaySlice, TradeTable};
pub use timeseries::aggregate::{
    daily_high_low, daily_price_deviation, daily_reduce, daily_volume, quartile_counts, to_bps,
    volume_summary,
};
pub use timeseries::diff::{
    day_bounded_diff, day_bounded_returns, interarrival_seconds, simple_return,
    try_day_bounded_diff,
};
pub use timeseries::resample::{ResampledPoint, grid_step, resample_forward_fill};

pub use tickstats_types::{
    AnalysisConfig, AnalysisReport, DailyDeviation, IngestConfig, OpeningPriceBasis,
    QuartileCounts, ReturnSummary, TickStatsError, VolumeSummary,
};
