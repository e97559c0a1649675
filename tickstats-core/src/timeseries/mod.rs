//! Time-series utilities used by the analyzer.
//!
//! Modules include:
//! - `resample`: forward-fill a day's ticks onto a regular grid
//! - `diff`: day-bounded differences (interarrival times, returns)
//! - `aggregate`: per-day reductions and quartile counts
//! - `stats`: distribution statistics over plain samples
/// Per-day reductions, quartile counts and bps deviations.
pub mod aggregate;
/// Day-bounded differencing.
pub mod diff;
/// Forward-fill resampling onto a regular grid.
pub mod resample;
/// Distribution statistics over `f64` samples.
pub mod stats;
