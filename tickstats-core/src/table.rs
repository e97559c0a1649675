//! Ordered trade table with a per-day index.

use core::ops::Range;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::TickStatsError;
use crate::record::TradeRecord;

/// One trade date and its records, ordered by timestamp.
///
/// Only a [`TradeTable`] hands these out, so the record slice is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySlice<'a> {
    date: NaiveDate,
    records: &'a [TradeRecord],
}

impl<'a> DaySlice<'a> {
    /// The day key.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Records of that day, ascending by `trade_timestamp`.
    #[must_use]
    pub const fn records(&self) -> &'a [TradeRecord] {
        self.records
    }

    /// First trade of the day.
    #[must_use]
    pub fn first(&self) -> &'a TradeRecord {
        &self.records[0]
    }
}

/// Trade records sorted by timestamp, indexed by contiguous trade-date ranges.
///
/// Built once from parsed records. Sorting is stable, so trades sharing an
/// instant keep their file order; with forward fill that means the later row
/// wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeTable {
    records: Vec<TradeRecord>,
    days: Vec<(NaiveDate, Range<usize>)>,
}

impl TradeTable {
    /// Build the table and its day index.
    ///
    /// # Errors
    /// Returns `Err(TickStatsError::EmptyInput)` when `records` is empty.
    pub fn from_records(mut records: Vec<TradeRecord>) -> Result<Self, TickStatsError> {
        if records.is_empty() {
            return Err(TickStatsError::EmptyInput);
        }
        if !records
            .windows(2)
            .all(|w| w[0].trade_timestamp() <= w[1].trade_timestamp())
        {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                records = records.len(),
                "trade rows are not in timestamp order; sorting"
            );
            records.sort_by_key(TradeRecord::trade_timestamp);
        }

        let mut days: Vec<(NaiveDate, Range<usize>)> = Vec::new();
        let mut start = 0;
        for i in 1..=records.len() {
            if i == records.len() || records[i].trade_date() != records[start].trade_date() {
                days.push((records[start].trade_date(), start..i));
                start = i;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(records = records.len(), days = days.len(), "built trade table");

        Ok(Self { records, days })
    }

    /// All records in timestamp order.
    #[must_use]
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// Number of records; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct trade dates.
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Day groups in ascending date order.
    pub fn days(&self) -> impl ExactSizeIterator<Item = DaySlice<'_>> + '_ {
        self.days.iter().map(|(date, range)| DaySlice {
            date: *date,
            records: &self.records[range.clone()],
        })
    }

    /// Records of one trade date, if present.
    #[must_use]
    pub fn day(&self, date: NaiveDate) -> Option<DaySlice<'_>> {
        let idx = self.days.binary_search_by_key(&date, |(d, _)| *d).ok()?;
        let (date, range) = &self.days[idx];
        Some(DaySlice {
            date: *date,
            records: &self.records[range.clone()],
        })
    }

    /// Earliest trade of the whole table.
    #[must_use]
    pub fn first(&self) -> &TradeRecord {
        &self.records[0]
    }

    /// Price of the earliest trade; the shared opening price.
    #[must_use]
    pub fn opening_price(&self) -> Decimal {
        self.first().trade_price()
    }
}
