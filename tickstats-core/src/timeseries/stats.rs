//! Whole-distribution statistics over `f64` samples.
//!
//! Every function returns `None` when the statistic is undefined for the input
//! (empty slice, too few values, or a quantile level outside `[0, 1]`).

use statrs::statistics::{Data, OrderStatistics, Statistics};

fn sorted(values: &[f64]) -> Vec<f64> {
    let mut v = values.to_vec();
    v.sort_by(f64::total_cmp);
    v
}

// statrs' `OrderStatistics::quantile` is R-8; the report thresholds are R-7.
fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let (a, b) = (sorted[lo], sorted[hi]);
    Some(a + (h - lo as f64) * (b - a))
}

/// Empirical quantile with linear interpolation between order statistics (R-7).
///
/// With `n` sorted values and `h = (n - 1) * q`, the result is
/// `x[floor(h)] + (h - floor(h)) * (x[ceil(h)] - x[floor(h)])`.
///
/// ```
/// use tickstats_core::timeseries::stats::quantile;
/// let v = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&v, 0.25), Some(1.75));
/// assert_eq!(quantile(&v, 0.5), Some(2.5));
/// assert_eq!(quantile(&[], 0.5), None);
/// ```
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    quantile_sorted(&sorted(values), q)
}

/// Several quantiles of the same distribution, sorting once.
#[must_use]
pub fn quantiles<const N: usize>(values: &[f64], qs: [f64; N]) -> Option<[f64; N]> {
    let s = sorted(values);
    let mut out = [0.0; N];
    for (slot, q) in out.iter_mut().zip(qs) {
        *slot = quantile_sorted(&s, q)?;
    }
    Some(out)
}

/// Median; the mean of the two middle values for an even count.
#[must_use]
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut data = Data::new(values.to_vec());
    Some(data.median())
}

/// Arithmetic mean.
#[must_use]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(Statistics::mean(values))
}

/// Sample standard deviation (`n - 1` denominator); needs at least two values.
#[must_use]
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    Some(Statistics::std_dev(values))
}

/// Smallest value.
#[must_use]
pub fn min(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(Statistics::min(values))
}

/// Largest value.
#[must_use]
pub fn max(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(Statistics::max(values))
}

/// Number of values strictly below `threshold`.
#[must_use]
pub fn count_below(values: &[f64], threshold: f64) -> usize {
    values.iter().filter(|&&v| v < threshold).count()
}
