//! Typed trade records and the raw positional row they are decoded from.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::TickStatsError;

/// Date format of the `trade_date` column.
pub const DATE_FORMAT: &str = "%m/%d/%Y";
/// Time format of the `trade_time` column, `HH:MM:SS.ffffff`.
///
/// chrono's `%.f` also accepts a missing or 7 to 9 digit fraction; those are
/// rejected separately (see [`MAX_FRACTION_DIGITS`]).
pub const TIME_FORMAT: &str = "%H:%M:%S%.f";
/// Longest fractional-second part accepted in `trade_time`.
pub const MAX_FRACTION_DIGITS: usize = 6;
/// Number of positional fields in one input row.
pub const FIELD_COUNT: usize = 18;

/// Anything carrying a single instant on the time axis.
pub trait Timestamped {
    /// The instant used for ordering and resampling.
    fn timestamp(&self) -> NaiveDateTime;
}

impl<V> Timestamped for (NaiveDateTime, V) {
    fn timestamp(&self) -> NaiveDateTime {
        self.0
    }
}

/// One headerless input row, fields in file order.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTradeRow<'a> {
    record_indicator: &'a str,
    segment: &'a str,
    trade_number: &'a str,
    trade_date: &'a str,
    trade_time: &'a str,
    symbol: &'a str,
    instrument: &'a str,
    expiry_date: &'a str,
    strike_price: &'a str,
    option_type: &'a str,
    trade_price: &'a str,
    trade_quantity: &'a str,
    buy_order_num: &'a str,
    buy_algo_ind: &'a str,
    buy_client_id_flag: &'a str,
    sell_order_num: &'a str,
    sell_algo_ind: &'a str,
    sell_client_id_flag: &'a str,
}

/// Identifier and flag columns carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeInfo {
    /// Record type marker.
    pub record_indicator: String,
    /// Market segment.
    pub segment: String,
    /// Exchange trade number.
    pub trade_number: String,
    /// Instrument symbol.
    pub symbol: String,
    /// Instrument type.
    pub instrument: String,
    /// Contract expiry, as given.
    pub expiry_date: String,
    /// Strike price, as given.
    pub strike_price: String,
    /// Option type, as given.
    pub option_type: String,
    /// Buy-side order number.
    pub buy_order_num: String,
    /// Buy-side algo indicator.
    pub buy_algo_ind: String,
    /// Buy-side client id flag.
    pub buy_client_id_flag: String,
    /// Sell-side order number.
    pub sell_order_num: String,
    /// Sell-side algo indicator.
    pub sell_algo_ind: String,
    /// Sell-side client id flag.
    pub sell_client_id_flag: String,
}

/// A single executed trade.
///
/// The combined `trade_timestamp` is derived once at construction; records are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    trade_date: NaiveDate,
    trade_time: NaiveTime,
    trade_timestamp: NaiveDateTime,
    trade_price: Decimal,
    trade_quantity: u64,
    info: TradeInfo,
}

fn has_fixed_fraction(time: &str) -> bool {
    time.split_once('.').is_some_and(|(_, frac)| {
        (1..=MAX_FRACTION_DIGITS).contains(&frac.len()) && frac.bytes().all(|b| b.is_ascii_digit())
    })
}

impl TradeRecord {
    /// Build a record from its statistically relevant fields.
    #[must_use]
    pub fn new(
        trade_date: NaiveDate,
        trade_time: NaiveTime,
        trade_price: Decimal,
        trade_quantity: u64,
    ) -> Self {
        Self {
            trade_date,
            trade_time,
            trade_timestamp: trade_date.and_time(trade_time),
            trade_price,
            trade_quantity,
            info: TradeInfo::default(),
        }
    }

    /// Attach the identifier columns.
    #[must_use]
    pub fn with_info(mut self, info: TradeInfo) -> Self {
        self.info = info;
        self
    }

    /// Calendar date of the trade; the day key.
    #[must_use]
    pub const fn trade_date(&self) -> NaiveDate {
        self.trade_date
    }

    /// Time of day of the trade.
    #[must_use]
    pub const fn trade_time(&self) -> NaiveTime {
        self.trade_time
    }

    /// `trade_date` combined with `trade_time`.
    #[must_use]
    pub const fn trade_timestamp(&self) -> NaiveDateTime {
        self.trade_timestamp
    }

    /// Execution price.
    #[must_use]
    pub const fn trade_price(&self) -> Decimal {
        self.trade_price
    }

    /// Executed quantity.
    #[must_use]
    pub const fn trade_quantity(&self) -> u64 {
        self.trade_quantity
    }

    /// Identifier and flag columns.
    #[must_use]
    pub const fn info(&self) -> &TradeInfo {
        &self.info
    }

    pub(crate) fn from_raw(raw: &RawTradeRow<'_>, line: u64) -> Result<Self, TickStatsError> {
        let stamp = || format!("{} {}", raw.trade_date, raw.trade_time);
        let trade_date = NaiveDate::parse_from_str(raw.trade_date, DATE_FORMAT)
            .map_err(|_| TickStatsError::malformed_timestamp(line, stamp()))?;
        if !has_fixed_fraction(raw.trade_time) {
            return Err(TickStatsError::malformed_timestamp(line, stamp()));
        }
        let trade_time = NaiveTime::parse_from_str(raw.trade_time, TIME_FORMAT)
            .map_err(|_| TickStatsError::malformed_timestamp(line, stamp()))?;

        let trade_price = Decimal::from_str(raw.trade_price).map_err(|e| {
            TickStatsError::malformed_record(
                line,
                format!("trade_price {:?}: {e}", raw.trade_price),
            )
        })?;
        if trade_price <= Decimal::ZERO {
            return Err(TickStatsError::malformed_record(
                line,
                format!("trade_price must be positive, got {trade_price}"),
            ));
        }
        let trade_quantity = raw.trade_quantity.parse::<u64>().map_err(|e| {
            TickStatsError::malformed_record(
                line,
                format!("trade_quantity {:?}: {e}", raw.trade_quantity),
            )
        })?;

        let info = TradeInfo {
            record_indicator: raw.record_indicator.to_owned(),
            segment: raw.segment.to_owned(),
            trade_number: raw.trade_number.to_owned(),
            symbol: raw.symbol.to_owned(),
            instrument: raw.instrument.to_owned(),
            expiry_date: raw.expiry_date.to_owned(),
            strike_price: raw.strike_price.to_owned(),
            option_type: raw.option_type.to_owned(),
            buy_order_num: raw.buy_order_num.to_owned(),
            buy_algo_ind: raw.buy_algo_ind.to_owned(),
            buy_client_id_flag: raw.buy_client_id_flag.to_owned(),
            sell_order_num: raw.sell_order_num.to_owned(),
            sell_algo_ind: raw.sell_algo_ind.to_owned(),
            sell_client_id_flag: raw.sell_client_id_flag.to_owned(),
        };

        Ok(Self::new(trade_date, trade_time, trade_price, trade_quantity).with_info(info))
    }
}

impl Timestamped for TradeRecord {
    fn timestamp(&self) -> NaiveDateTime {
        self.trade_timestamp
    }
}
