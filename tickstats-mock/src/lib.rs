//! Deterministic trade sessions for tests.
//!
//! Each fixture is available as headerless 18-column CSV text and as a parsed
//! [`TradeTable`]; both go through the real parser.
use tickstats_core::{IngestConfig, TradeTable, read_trades};

mod fixtures;

pub use fixtures::sessions::Row;

/// Names of every bundled session.
pub const SESSIONS: &[&str] = &["TWO_DAY", "SINGLE_TRADE_DAYS", "MINUTE_GRID"];

/// Raw rows of a session.
#[must_use]
pub fn rows(name: &str) -> Option<&'static [Row]> {
    fixtures::sessions::by_name(name)
}

/// Render rows as headerless 18-column CSV, one line per trade.
#[must_use]
pub fn to_csv(rows: &[Row]) -> String {
    rows.iter()
        .enumerate()
        .map(|(i, (date, time, price, qty))| {
            let n = i + 1;
            format!(
                "RM,FO,{n},{date},{time},NIFTY,FUTIDX,09/27/2012,0,XX,{price},{qty},{},0,1,{},0,1\n",
                1_000 + n,
                2_000 + n
            )
        })
        .collect()
}

/// CSV text of a session.
#[must_use]
pub fn csv(name: &str) -> Option<String> {
    rows(name).map(to_csv)
}

/// Parsed table of a session.
///
/// # Panics
/// Panics if the bundled fixture fails to parse.
#[must_use]
pub fn table(name: &str) -> Option<TradeTable> {
    let text = csv(name)?;
    let records = read_trades(text.as_bytes(), &IngestConfig::default()).unwrap();
    Some(TradeTable::from_records(records).unwrap())
}
