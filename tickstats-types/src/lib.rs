//! Tickstats-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod reports;

pub use config::{AnalysisConfig, IngestConfig, OpeningPriceBasis};
pub use error::TickStatsError;
pub use reports::{AnalysisReport, DailyDeviation, QuartileCounts, ReturnSummary, VolumeSummary};
