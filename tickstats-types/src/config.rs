//! Configuration types shared by the loader and the analyzer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Reference price used when expressing daily highs and lows in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OpeningPriceBasis {
    /// Price of the first trade in the whole table, shared by every day.
    #[default]
    FirstTrade,
    /// Price of each day's own first trade.
    DailyOpen,
}

/// Options for reading the headerless trade file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Field delimiter byte.
    pub delimiter: u8,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Global configuration for the `Analyzer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Spacing of the forward-fill sampling grid used for price-path statistics.
    pub sample_interval: Duration,
    /// Reference price for the daily deviation statistic.
    pub opening_price: OpeningPriceBasis,
    /// File reading options used by `analyze_path`.
    pub ingest: IngestConfig,
}

impl AnalysisConfig {
    /// Default sampling interval: three minutes.
    pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(180);
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_interval: Self::DEFAULT_SAMPLE_INTERVAL,
            opening_price: OpeningPriceBasis::default(),
            ingest: IngestConfig::default(),
        }
    }
}
