use exogen_core::{GrowthPoint, Horizon, Value, build_series, growth_at};
use proptest::prelude::*;

fn known(v: Option<Value>) -> f64 {
    v.and_then(Value::known).expect("defined value")
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

#[test]
fn growth_attributed_to_the_year_just_completed() {
    let h = Horizon::new(2010, 2020);
    let rows = [
        GrowthPoint {
            period: 0,
            growth: 1.05,
        },
        GrowthPoint {
            period: 1,
            growth: 1.10,
        },
    ];
    let s = build_series(Value::Known(100.0), &h, |p| growth_at(&rows, p));

    assert_eq!(s.len(), 11);
    assert_eq!(s.get(2010), Some(Value::Known(100.0)));
    // 2011..=2015 all use the period-0 factor
    let v2015 = known(s.get(2015));
    assert!(approx(v2015, 100.0 * 1.05_f64.powi(5)), "got {v2015}");
    assert!((v2015 - 127.63).abs() < 0.01);
    // 2016 is the first year carried by the period-1 factor
    let v2016 = known(s.get(2016));
    assert!(approx(v2016, v2015 * 1.10), "got {v2016}");
    let v2020 = known(s.get(2020));
    assert!(approx(v2020, v2015 * 1.10_f64.powi(5)), "got {v2020}");
}

#[test]
fn custom_period_length_changes_period_boundaries() {
    let h = Horizon::new(2000, 2004).with_period_length(2);
    let mut seen = Vec::new();
    let _ = build_series(Value::Known(1.0), &h, |p| {
        seen.push(p);
        Some(2.0)
    });
    // Years 2001..=2004 map to periods 0,0,1,1; lookups happen once per period
    assert_eq!(seen, vec![0, 1]);
}

#[test]
fn missing_baseline_stays_missing() {
    let h = Horizon::new(2010, 2015);
    let s = build_series(Value::Missing, &h, |_| Some(1.02));
    assert_eq!(s.len(), 6);
    assert!(s.values().iter().all(|v| v.is_missing()));
}

proptest! {
    #[test]
    fn length_is_span_plus_one(start in 1900i32..2100, span in 0i32..200, period in 1u32..12) {
        let h = Horizon::new(start, start + span).with_period_length(period);
        let s = build_series(Value::Known(1.0), &h, |_| Some(1.01));
        prop_assert_eq!(s.len(), usize::try_from(span + 1).unwrap());
        prop_assert_eq!(s.start_year(), start);
        prop_assert_eq!(s.stop_year(), start + span);
    }

    #[test]
    fn constant_growth_compounds_once_per_year(
        baseline in 1.0f64..1_000_000.0,
        g in 0.9f64..1.1,
        n in 0i32..60,
        period in 1u32..10,
    ) {
        let h = Horizon::new(2010, 2010 + n).with_period_length(period);
        let s = build_series(Value::Known(baseline), &h, |_| Some(g));
        let last = s.last().and_then(Value::known).unwrap();
        let expected = baseline * g.powi(n);
        prop_assert!((last - expected).abs() <= 1e-9 * expected.abs());
    }
}
