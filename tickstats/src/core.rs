use std::path::Path;

use chrono::TimeDelta;
use tickstats_core::{AnalysisConfig, OpeningPriceBasis, TickStatsError, TradeTable};
use tickstats_types::AnalysisReport;

use crate::pipeline;

/// Batch analyzer turning one trade table into an [`AnalysisReport`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub(crate) cfg: AnalysisConfig,
    pub(crate) step: TimeDelta,
}

/// Builder for constructing an `Analyzer` with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerBuilder {
    cfg: AnalysisConfig,
}

impl AnalyzerBuilder {
    /// Create a new builder with the default configuration.
    ///
    /// Defaults: a 3-minute sampling grid, deviations measured from the first
    /// trade of the whole table, comma-delimited input.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub const fn with_config(mut self, cfg: AnalysisConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the spacing of the forward-fill sampling grid.
    ///
    /// Behavior and trade-offs:
    /// - A finer grid follows the price path more closely and yields more
    ///   returns per day; a coarser grid smooths microstructure noise.
    /// - Each day's grid stops strictly before its last trade, so a day
    ///   shorter than one interval contributes a single sample and no return.
    #[must_use]
    pub const fn sample_interval(mut self, interval: std::time::Duration) -> Self {
        self.cfg.sample_interval = interval;
        self
    }

    /// Select the reference price for daily high/low deviations.
    #[must_use]
    pub const fn opening_price_basis(mut self, basis: OpeningPriceBasis) -> Self {
        self.cfg.opening_price = basis;
        self
    }

    /// Set the input field delimiter used by [`Analyzer::analyze_path`].
    #[must_use]
    pub const fn delimiter(mut self, delimiter: u8) -> Self {
        self.cfg.ingest.delimiter = delimiter;
        self
    }

    /// Build the `Analyzer`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the sampling interval is zero or too large.
    pub fn build(self) -> Result<Analyzer, TickStatsError> {
        let step = tickstats_core::grid_step(self.cfg.sample_interval)?;
        Ok(Analyzer {
            cfg: self.cfg,
            step,
        })
    }
}

impl Analyzer {
    /// Start building a new `Analyzer`.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.cfg
    }

    /// Compute the full report for a loaded table.
    ///
    /// Statistics are assembled in report order; every day-bounded quantity is
    /// computed per trade date and only then flattened.
    ///
    /// # Errors
    /// Returns `Data` if a price cannot be converted for floating-point
    /// statistics, a sampled price is zero, or a deviation overflows.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickstats::analyze",
            skip(self, table),
            fields(trades = table.len(), days = table.day_count()),
        )
    )]
    pub fn analyze(&self, table: &TradeTable) -> Result<AnalysisReport, TickStatsError> {
        let prices = pipeline::price_stats(table)?;
        let interarrival_quartiles = pipeline::interarrival_quartiles(table);
        let daily_volume = pipeline::daily_volume_summary(table)?;
        let path = pipeline::price_path(table, self.step)?;
        let daily_deviation =
            tickstats_core::daily_price_deviation(table, self.cfg.opening_price)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sampled_price_std = ?path.sampled_price_std,
            interarrivals = interarrival_quartiles.is_some(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            trade_count: table.len(),
            day_count: table.day_count(),
            price_quartiles: prices.quartiles,
            max_trade_price: prices.max,
            min_trade_price: prices.min,
            mean_trade_price: prices.mean,
            interarrival_quartiles,
            daily_volume,
            sampled_price_std: path.sampled_price_std,
            returns: path.returns,
            daily_deviation,
        })
    }

    /// Load a headerless trade file and analyze it.
    ///
    /// # Errors
    /// Any parsing error (`MalformedTimestamp`, `MalformedRecord`, `Io`),
    /// `EmptyInput` for a file without rows, and any error of [`Analyzer::analyze`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "tickstats::analyze_path",
            skip(self, path),
            fields(path = %path.as_ref().display()),
        )
    )]
    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<AnalysisReport, TickStatsError> {
        let table = tickstats_core::load_trade_table(path, &self.cfg.ingest)?;
        self.analyze(&table)
    }

    /// Parse trades from any reader and analyze them.
    ///
    /// # Errors
    /// Same as [`Analyzer::analyze_path`].
    pub fn analyze_reader<R: std::io::Read>(
        &self,
        reader: R,
    ) -> Result<AnalysisReport, TickStatsError> {
        let records = tickstats_core::read_trades(reader, &self.cfg.ingest)?;
        let table = TradeTable::from_records(records)?;
        self.analyze(&table)
    }
}
