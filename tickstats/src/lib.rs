//! Tickstats derives daily summary statistics from a file of tick-level trades.
//!
//! Overview
//! - Loads a headerless trade file into a [`TradeTable`] ordered by timestamp
//!   and indexed by trade date.
//! - Counts trades below the price quartiles and reports price extremes and mean.
//! - Measures trade interarrival times within each day, never across days.
//! - Summarizes daily traded volume.
//! - Forward-fills each day's prices onto a regular grid (3 minutes by default)
//!   and reports the sampled-price volatility and day-bounded returns in bps.
//! - Expresses each day's high and low in bps away from the opening price.
//!
//! Key behaviors and trade-offs
//! - Resampling: a grid stops strictly before the day's last trade; the final
//!   partial interval is not sampled and a single-trade day yields no samples.
//! - Opening price: by default every day is measured against the first trade of
//!   the whole file. Use [`OpeningPriceBasis::DailyOpen`] to measure each day
//!   against its own first trade.
//! - Undefined statistics (no interarrivals, fewer than two samples) are `None`
//!   rather than NaN; an empty file is an error.
//!
//! Examples
//! ```rust,no_run
//! use std::time::Duration;
//! use tickstats::{Analyzer, OpeningPriceBasis};
//!
//! let analyzer = Analyzer::builder()
//!     .sample_interval(Duration::from_secs(180))
//!     .opening_price_basis(OpeningPriceBasis::FirstTrade)
//!     .build()?;
//! let report = analyzer.analyze_path("trades.csv")?;
//! println!("{report}");
//! # Ok::<(), tickstats::TickStatsError>(())
//! ```
#![warn(missing_docs)]

mod core;
mod pipeline;

pub use crate::core::{Analyzer, AnalyzerBuilder};
pub use tickstats_core::{DaySlice, TradeInfo, TradeRecord, TradeTable};
pub use tickstats_types::{
    AnalysisConfig, AnalysisReport, DailyDeviation, IngestConfig, OpeningPriceBasis,
    QuartileCounts, ReturnSummary, TickStatsError, VolumeSummary,
};
