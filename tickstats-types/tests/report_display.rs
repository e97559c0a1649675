use chrono::NaiveDate;
use rust_decimal::Decimal;
use tickstats_types::{
    AnalysisReport, DailyDeviation, QuartileCounts, ReturnSummary, VolumeSummary,
};

fn report() -> AnalysisReport {
    let d = NaiveDate::from_ymd_opt(2012, 9, 3).unwrap();
    AnalysisReport {
        trade_count: 4,
        day_count: 1,
        price_quartiles: QuartileCounts {
            thresholds: [100.5, 101.0, 101.5],
            below: [1, 2, 3],
        },
        max_trade_price: Decimal::new(10200, 2),
        min_trade_price: Decimal::new(10000, 2),
        mean_trade_price: 101.0,
        interarrival_quartiles: None,
        daily_volume: VolumeSummary {
            mean: 40.0,
            max: 40,
            min: 40,
            median: 40.0,
            per_day: vec![(d, 40)],
        },
        sampled_price_std: None,
        returns: ReturnSummary::default(),
        daily_deviation: vec![DailyDeviation {
            date: d,
            opening_price: Decimal::new(10000, 2),
            max_bps: 20_000,
            min_bps: 0,
        }],
    }
}

#[test]
fn display_lists_fields_in_report_order() {
    let text = report().to_string();
    let order = [
        "trades below price q1/q2/q3: 1 / 2 / 3",
        "trade price max/min/mean: 102.00 / 100.00",
        "interarrivals below q1/q2/q3: n/a",
        "daily volume mean/max/min/median:",
        "sampled price std: n/a",
        "returns mean/std (bps): n/a / n/a",
        "2012-09-03 max=+20000 min=+0",
    ];
    let mut last = 0;
    for needle in order {
        let pos = text.find(needle).unwrap_or_else(|| panic!("missing {needle:?} in\n{text}"));
        assert!(pos >= last, "{needle:?} out of order");
        last = pos;
    }
}

#[test]
fn report_roundtrip() {
    let r = report();
    let json = serde_json::to_string(&r).expect("serialize report");
    let de: AnalysisReport = serde_json::from_str(&json).expect("deserialize report");
    assert_eq!(de, r);
}
