use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::TickStatsError;
use crate::record::Timestamped;

/// One point of a forward-filled sampling grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResampledPoint<V> {
    /// Grid instant.
    pub ts: NaiveDateTime,
    /// Value of the latest record at or before `ts`.
    pub value: V,
}

impl<V> Timestamped for ResampledPoint<V> {
    fn timestamp(&self) -> NaiveDateTime {
        self.ts
    }
}

/// Convert a positive `std::time::Duration` into a grid step.
///
/// # Errors
/// Returns `Err(TickStatsError::InvalidArg)` when the duration is zero or does
/// not fit a `TimeDelta`.
pub fn grid_step(interval: std::time::Duration) -> Result<TimeDelta, TickStatsError> {
    let step = TimeDelta::from_std(interval)
        .map_err(|e| TickStatsError::InvalidArg(format!("sampling interval: {e}")))?;
    if step <= TimeDelta::zero() {
        return Err(TickStatsError::InvalidArg(
            "sampling interval must be positive".into(),
        ));
    }
    Ok(step)
}

/// Sample an irregular series on a regular grid by last-observed-value forward fill.
///
/// The grid is `t_min, t_min + interval, ...`, strictly below `t_max`, where
/// `t_min`/`t_max` are the first and last timestamps of `records`. Each grid
/// point carries the value of the latest record whose timestamp is `<=` the
/// grid instant; when several records share that instant the last one wins.
/// No closing sample is emitted at `t_max`, so the output holds
/// `ceil((t_max - t_min) / interval)` points and a single record (or an empty
/// input) yields an empty grid.
///
/// Callers pass one trade date at a time; grids of different days are never
/// merged here.
///
/// # Errors
/// - `InvalidArg` when `interval` is not positive.
/// - `Data` when `records` is not sorted ascending by timestamp.
///
/// ```
/// use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
/// use tickstats_core::resample_forward_fill;
///
/// fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
///     NaiveDate::from_ymd_opt(2012, 9, 3).unwrap().and_hms_opt(h, m, s).unwrap()
/// }
/// let ticks = vec![(at(9, 0, 0), 100), (at(9, 0, 30), 101), (at(9, 1, 15), 102)];
/// let grid = resample_forward_fill(&ticks, TimeDelta::minutes(1), |t| t.1).unwrap();
/// let values: Vec<_> = grid.iter().map(|p| (p.ts, p.value)).collect();
/// assert_eq!(values, vec![(at(9, 0, 0), 100), (at(9, 1, 0), 101)]);
/// ```
pub fn resample_forward_fill<R, V, F>(
    records: &[R],
    interval: TimeDelta,
    value_of: F,
) -> Result<Vec<ResampledPoint<V>>, TickStatsError>
where
    R: Timestamped,
    F: Fn(&R) -> V,
    V: Clone,
{
    if interval <= TimeDelta::zero() {
        return Err(TickStatsError::InvalidArg(
            "sampling interval must be positive".into(),
        ));
    }
    if let Some(w) = records
        .windows(2)
        .find(|w| w[0].timestamp() > w[1].timestamp())
    {
        return Err(TickStatsError::Data(format!(
            "resample input not sorted: {} precedes {}",
            w[0].timestamp(),
            w[1].timestamp()
        )));
    }
    let (Some(first), Some(last)) = (records.first(), records.last()) else {
        return Ok(Vec::new());
    };

    let t_max = last.timestamp();
    let mut t = first.timestamp();
    let mut cursor = 0;
    let mut last_known = value_of(first);
    let mut out = Vec::new();

    while t < t_max {
        while let Some(next) = records.get(cursor + 1) {
            if next.timestamp() > t {
                break;
            }
            cursor += 1;
            last_known = value_of(next);
        }
        out.push(ResampledPoint {
            ts: t,
            value: last_known.clone(),
        });
        let Some(next_t) = t.checked_add_signed(interval) else {
            break;
        };
        t = next_t;
    }

    Ok(out)
}
