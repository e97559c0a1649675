use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;
use tickstats_core::timeseries::stats;
use tickstats_core::{
    OpeningPriceBasis, TradeRecord, TradeTable, daily_high_low, daily_price_deviation,
    daily_volume, quartile_counts, to_bps, volume_summary,
};

fn rec(day: u32, h: u32, m: u32, price: Decimal, qty: u64) -> TradeRecord {
    TradeRecord::new(
        NaiveDate::from_ymd_opt(2012, 9, day).unwrap(),
        NaiveTime::from_hms_opt(h, m, 0).unwrap(),
        price,
        qty,
    )
}

fn two_days() -> TradeTable {
    TradeTable::from_records(vec![
        rec(3, 9, 15, Decimal::new(10_000, 2), 10),
        rec(3, 10, 0, Decimal::new(10_150, 2), 5),
        rec(3, 11, 0, Decimal::new(9_980, 2), 20),
        rec(4, 9, 15, Decimal::new(10_200, 2), 7),
        rec(4, 12, 0, Decimal::new(10_260, 2), 3),
    ])
    .unwrap()
}

#[test]
fn r7_quantiles_match_reference_values() {
    let v = [7.0, 15.0, 36.0, 39.0, 40.0, 41.0];
    assert_eq!(stats::quantile(&v, 0.0), Some(7.0));
    assert_eq!(stats::quantile(&v, 0.25), Some(20.25));
    assert_eq!(stats::quantile(&v, 0.5), Some(37.5));
    assert_eq!(stats::quantile(&v, 0.75), Some(39.75));
    assert_eq!(stats::quantile(&v, 1.0), Some(41.0));
    assert_eq!(stats::quantile(&v, 1.5), None);
    assert_eq!(stats::quantile(&[3.0], 0.3), Some(3.0));
}

#[test]
fn sample_std_uses_n_minus_one() {
    let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let sd = stats::sample_std(&v).unwrap();
    assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    assert_eq!(stats::sample_std(&[1.0]), None);
    assert_eq!(stats::mean(&[]), None);
}

#[test]
fn order_statistics_and_empty_inputs() {
    let v = [40.0, 7.0, 39.0, 15.0, 41.0, 36.0];
    assert_eq!(stats::median(&v), Some(37.5));
    assert_eq!(stats::median(&[3.0, 1.0, 2.0]), Some(2.0));
    assert_eq!(stats::min(&v), Some(7.0));
    assert_eq!(stats::max(&v), Some(41.0));
    assert!((stats::mean(&v).unwrap() - 29.666_666_666_666_668).abs() < 1e-9);
    assert_eq!(stats::median(&[]), None);
    assert_eq!(stats::min(&[]), None);
    assert_eq!(stats::max(&[]), None);
}

#[test]
fn quartile_counts_use_strict_inequality() {
    let q = quartile_counts(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(q.thresholds, [2.0, 3.0, 4.0]);
    assert_eq!(q.below, [1, 2, 3]);
    assert!(quartile_counts(&[]).is_none());
}

#[test]
fn daily_volume_sums_each_day() {
    let table = two_days();
    let d3 = NaiveDate::from_ymd_opt(2012, 9, 3).unwrap();
    let d4 = NaiveDate::from_ymd_opt(2012, 9, 4).unwrap();
    assert_eq!(daily_volume(&table), vec![(d3, 35), (d4, 10)]);
    let s = volume_summary(daily_volume(&table)).unwrap();
    assert_eq!((s.max, s.min), (35, 10));
    assert!((s.mean - 22.5).abs() < 1e-12);
    assert!((s.median - 22.5).abs() < 1e-12);
}

#[test]
fn daily_high_low_per_day() {
    let hl = daily_high_low(&two_days());
    assert_eq!(hl[0].1, Decimal::new(10_150, 2));
    assert_eq!(hl[0].2, Decimal::new(9_980, 2));
    assert_eq!(hl[1].1, Decimal::new(10_260, 2));
    assert_eq!(hl[1].2, Decimal::new(10_200, 2));
}

#[test]
fn deviation_defaults_to_first_trade_of_the_table() {
    let dev = daily_price_deviation(&two_days(), OpeningPriceBasis::FirstTrade).unwrap();
    assert_eq!(dev.len(), 2);
    assert!(dev.iter().all(|d| d.opening_price == Decimal::new(10_000, 2)));
    assert_eq!((dev[0].max_bps, dev[0].min_bps), (15_000, -2_000));
    // Day two is still measured against day one's first trade.
    assert_eq!((dev[1].max_bps, dev[1].min_bps), (26_000, 20_000));
}

#[test]
fn deviation_with_daily_open_uses_each_days_first_trade() {
    let dev = daily_price_deviation(&two_days(), OpeningPriceBasis::DailyOpen).unwrap();
    assert_eq!(dev[1].opening_price, Decimal::new(10_200, 2));
    assert_eq!((dev[1].max_bps, dev[1].min_bps), (6_000, 0));
}

#[test]
fn bps_rounds_half_away_from_zero() {
    assert_eq!(to_bps(Decimal::new(125, 6)).unwrap(), 1);
    assert_eq!(to_bps(Decimal::new(-125, 6)).unwrap(), -1);
    assert_eq!(to_bps(Decimal::new(5, 5)).unwrap(), 1);
    assert_eq!(to_bps(Decimal::new(-5, 5)).unwrap(), -1);
    assert_eq!(to_bps(Decimal::new(3, 1)).unwrap(), 3_000);
}

proptest! {
    #[test]
    fn quartile_counts_are_monotone_and_order_invariant(
        mut values in proptest::collection::vec(-1_000_000i64..1_000_000, 1..400),
    ) {
        let as_f64: Vec<f64> = values.iter().map(|v| *v as f64 / 100.0).collect();
        let q = quartile_counts(&as_f64).unwrap();
        prop_assert!(q.below[0] <= q.below[1]);
        prop_assert!(q.below[1] <= q.below[2]);
        prop_assert!(q.below[2] <= as_f64.len());

        values.reverse();
        let reversed: Vec<f64> = values.iter().map(|v| *v as f64 / 100.0).collect();
        prop_assert_eq!(quartile_counts(&reversed).unwrap(), q);
    }

    #[test]
    fn volume_summary_is_bounded(
        vols in proptest::collection::vec(0u64..10_000_000, 1..60),
    ) {
        let d0 = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
        let per_day: Vec<(NaiveDate, u64)> = vols
            .iter()
            .enumerate()
            .map(|(i, v)| (d0 + chrono::Days::new(i as u64), *v))
            .collect();
        let s = volume_summary(per_day).unwrap();
        let (lo, hi) = (s.min as f64, s.max as f64);
        prop_assert!(lo <= s.median && s.median <= hi);
        prop_assert!(lo <= s.mean + 1e-6 && s.mean <= hi + 1e-6);
    }
}
