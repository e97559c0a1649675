//! Loading headerless trade files into a [`TradeTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::record::{FIELD_COUNT, RawTradeRow, TradeRecord};
use crate::table::TradeTable;
use crate::{IngestConfig, TickStatsError};

fn map_csv_error(e: &csv::Error, line: u64) -> TickStatsError {
    match e.kind() {
        csv::ErrorKind::Io(io) => TickStatsError::Io(io.to_string()),
        _ => TickStatsError::malformed_record(line, e.to_string()),
    }
}

fn decode(record: &StringRecord, line: u64) -> Result<TradeRecord, TickStatsError> {
    if record.len() != FIELD_COUNT {
        return Err(TickStatsError::malformed_record(
            line,
            format!("expected {FIELD_COUNT} fields, found {}", record.len()),
        ));
    }
    let raw: RawTradeRow<'_> = record
        .deserialize(None)
        .map_err(|e| map_csv_error(&e, line))?;
    TradeRecord::from_raw(&raw, line)
}

/// Parse every row of a headerless trade file from any reader.
///
/// Blank lines are skipped. Parsing stops at the first bad row; no partial
/// table is returned.
///
/// # Errors
/// - `MalformedTimestamp` when a date or time does not match the fixed format.
/// - `MalformedRecord` for a wrong field count, bad price or bad quantity.
/// - `Io` when the underlying reader fails.
pub fn read_trades<R: Read>(
    reader: R,
    cfg: &IngestConfig,
) -> Result<Vec<TradeRecord>, TickStatsError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(cfg.delimiter)
        .from_reader(reader);

    let mut out = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let line = rdr.position().line();
        match rdr.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(map_csv_error(&e, line)),
        }
        let line = record.position().map_or(line, csv::Position::line);
        out.push(decode(&record, line)?);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(rows = out.len(), "parsed trade rows");

    Ok(out)
}

/// Load a trade file from disk and build its table.
///
/// # Errors
/// Any error of [`read_trades`], `Io` if the file cannot be opened, and
/// `EmptyInput` when the file has no rows.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(path, cfg), fields(path = %path.as_ref().display()))
)]
pub fn load_trade_table(
    path: impl AsRef<Path>,
    cfg: &IngestConfig,
) -> Result<TradeTable, TickStatsError> {
    let file = File::open(path.as_ref())?;
    let records = read_trades(file, cfg)?;
    TradeTable::from_records(records)
}
