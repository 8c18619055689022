use std::sync::Arc;

use exogen::{
    Adjustment, AdjustmentRow, BaselineRow, DEGENERATE_ADJUSTMENT, EconomicConfig,
    EconomicProvider, ExogenError, GrowthRow, Horizon, IsoCode, RegionId, SpaceProvider, Tier,
    Value,
};
use exogen_mock::fixtures::gdppc;
use proptest::prelude::*;

fn region(s: &str) -> RegionId {
    s.parse().unwrap()
}

fn iso(s: &str) -> IsoCode {
    s.parse().unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn known(v: Option<Value>) -> f64 {
    v.and_then(Value::known).expect("defined value")
}

fn provider() -> EconomicProvider {
    EconomicProvider::builder()
        .model("low")
        .scenario("SSP3")
        .horizon(Horizon::new(2010, 2020))
        .baseline_rows(gdppc::baseline_rows())
        .growth_rows(gdppc::growth_rows())
        .adjustment_rows(gdppc::adjustment_rows())
        .build()
        .unwrap()
}

#[test]
fn model_tier_series_compounds_per_year() {
    let p = provider();
    let s = p.iso_timeseries(&iso("ZWE"));
    assert_eq!(s.len(), 11);
    assert_eq!(s.get(2010), Some(Value::Known(1000.0)));
    let v2015 = known(s.get(2015));
    assert!(approx(v2015, 1000.0 * 1.05_f64.powi(5)), "got {v2015}");
    let v2020 = known(s.get(2020));
    assert!(approx(v2020, v2015 * 1.10_f64.powi(5)), "got {v2020}");
}

#[test]
fn country_missing_for_active_model_uses_cross_model_median() {
    let p = provider();
    let (s, attr) = p.timeseries_with_attribution(&region("FRA"));
    assert_eq!(attr.baseline, Tier::AnyModel);
    assert_eq!(attr.growth, Tier::AnyModel);
    assert_eq!(attr.adjustment, Adjustment::Unadjusted);
    assert_eq!(s.get(2010), Some(Value::Known(100.0)));
    assert!(approx(known(s.get(2011)), 102.0));
}

#[test]
fn unknown_country_uses_global_medians() {
    let p = provider();
    let (s, attr) = p.timeseries_with_attribution(&region("ABC.7"));
    assert_eq!(attr.baseline, Tier::Global);
    assert_eq!(attr.growth, Tier::Global);
    // median of every SSP3 baseline in 2010
    assert_eq!(s.get(2010), Some(Value::Known(1000.0)));
    let v2015 = known(s.get(2015));
    assert!(approx(v2015, 1000.0 * 1.035_f64.powi(5)), "got {v2015}");
    let v2016 = known(s.get(2016));
    assert!(approx(v2016, v2015 * 1.06), "got {v2016}");
}

#[test]
fn adjustment_branches() {
    let p = provider();
    let coarse = p.iso_timeseries(&iso("ZWE"));

    let (ratio, attr) = p.timeseries_with_attribution(&region("ZWE.1.1"));
    assert_eq!(attr.adjustment, Adjustment::Ratio(0.5), "first row wins");
    assert_eq!(*ratio, coarse.scaled(0.5));

    for id in ["ZWE.1.2", "ZWE.1.3", "ZWE.1.4"] {
        let (s, attr) = p.timeseries_with_attribution(&region(id));
        assert_eq!(attr.adjustment, Adjustment::Degenerate(DEGENERATE_ADJUSTMENT), "{id}");
        assert_eq!(*s, coarse.scaled(0.8), "{id}");
    }

    let (plain, attr) = p.timeseries_with_attribution(&region("ZWE.1.5"));
    assert_eq!(attr.adjustment, Adjustment::Unadjusted);
    assert!(Arc::ptr_eq(&plain, &coarse), "unadjusted regions share the country series");
}

#[test]
fn region_series_is_memoized() {
    let p = provider();
    let r = region("USA.5.221");
    let a = p.timeseries(&r).unwrap();
    let b = p.timeseries(&r).unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(approx(known(a.get(2010)), 50_000.0 * 1.2));
}

#[test]
fn provider_metadata() {
    let p = provider();
    assert_eq!(p.name(), "economic");
    assert_eq!(p.scenario(), "SSP3");
    assert_eq!(p.model(), "low");
    assert_eq!(p.start_year(), 2010);
    assert_eq!(p.stop_year(), 2020);
}

#[test]
fn config_selects_scenario() {
    let p = EconomicProvider::builder()
        .config(EconomicConfig {
            model: "low".into(),
            scenario: "SSP2".into(),
            horizon: Horizon::new(2010, 2012),
        })
        .baseline_rows(gdppc::baseline_rows())
        .growth_rows(gdppc::growth_rows())
        .build()
        .unwrap();
    let s = p.iso_timeseries(&iso("ZWE"));
    assert_eq!(s.get(2010), Some(Value::Known(1100.0)));
    assert!(approx(known(s.get(2012)), 1100.0 * 1.04 * 1.04));
}

#[test]
fn missing_growth_period_poisons_the_rest_of_the_series() {
    let baseline = vec![BaselineRow {
        model: "m".into(),
        scenario: "S".into(),
        iso: iso("ZWE"),
        year: 2010,
        value: 100.0,
    }];
    let growth = vec![GrowthRow {
        model: "m".into(),
        scenario: "S".into(),
        iso: iso("ZWE"),
        year: 2010,
        growth: 1.05,
    }];
    let p = EconomicProvider::builder()
        .model("m")
        .scenario("S")
        .horizon(Horizon::new(2010, 2020))
        .baseline_rows(baseline)
        .growth_rows(growth)
        .build()
        .unwrap();
    let s = p.iso_timeseries(&iso("ZWE"));
    assert!((known(s.get(2015)) - 127.63).abs() < 0.01);
    assert_eq!(s.first_missing_year(), Some(2016));
    assert!(s.values()[6..].iter().all(|v| v.is_missing()));
}

#[test]
fn undefined_model_baseline_resolves_to_missing() {
    let row = |model: &str, value: f64| BaselineRow {
        model: model.into(),
        scenario: "S".into(),
        iso: iso("ZWE"),
        year: 2010,
        value,
    };
    let growth = vec![GrowthRow {
        model: "m".into(),
        scenario: "S".into(),
        iso: iso("ZWE"),
        year: 2010,
        growth: 1.05,
    }];
    let p = EconomicProvider::builder()
        .model("m")
        .scenario("S")
        .horizon(Horizon::new(2010, 2015))
        .baseline_rows(vec![row("m", f64::NAN), row("o", 500.0)])
        .growth_rows(growth)
        .build()
        .unwrap();
    let (s, attr) = p.timeseries_with_attribution(&region("ZWE.1"));
    assert_eq!(attr.baseline, Tier::Model);
    assert_eq!(s.first(), Some(Value::Missing));
    assert!(s.values().iter().all(|v| v.is_missing()));
}

#[test]
fn construction_errors() {
    let base = || {
        EconomicProvider::builder()
            .horizon(Horizon::new(2010, 2020))
            .baseline_rows(gdppc::baseline_rows())
            .growth_rows(gdppc::growth_rows())
    };

    assert!(matches!(
        base().scenario("SSP3").build(),
        Err(ExogenError::InvalidArg(_))
    ));
    assert!(matches!(
        base().model("low").build(),
        Err(ExogenError::InvalidArg(_))
    ));
    assert!(matches!(
        base().model("low").scenario("SSP5").build(),
        Err(ExogenError::NoData { .. })
    ));
    assert!(matches!(
        base().model("nobody").scenario("SSP3").build(),
        Err(ExogenError::NoData { .. })
    ));
    assert!(matches!(
        base()
            .model("low")
            .scenario("SSP3")
            .horizon(Horizon::new(2011, 2020))
            .build(),
        Err(ExogenError::NoData { .. })
    ));
    assert!(matches!(
        base()
            .model("low")
            .scenario("SSP3")
            .horizon(Horizon::new(2020, 2010))
            .build(),
        Err(ExogenError::InvalidArg(_))
    ));
}

#[test]
fn adjustments_load_from_json_records() {
    let rows: Vec<AdjustmentRow> =
        exogen::records_from_json("nightlights", gdppc::ADJUSTMENT_JSON).unwrap();
    assert_eq!(rows[1].gdppc_ratio, None);
    let p = EconomicProvider::builder()
        .model("low")
        .scenario("SSP3")
        .horizon(Horizon::new(2010, 2015))
        .baseline_rows(exogen::records_from_json("baseline", gdppc::BASELINE_JSON).unwrap())
        .growth_rows(exogen::records_from_json("growth", gdppc::GROWTH_JSON).unwrap())
        .adjustment_rows(rows)
        .build()
        .unwrap();
    let (_, attr) = p.timeseries_with_attribution(&region("ZWE.1.2"));
    assert_eq!(attr.adjustment, Adjustment::Degenerate(0.8));
}

proptest! {
    #[test]
    fn regional_series_is_ratio_times_country(ratio in 0.01f64..10.0) {
        let p = EconomicProvider::builder()
            .model("low")
            .scenario("SSP3")
            .horizon(Horizon::new(2010, 2030))
            .baseline_rows(gdppc::baseline_rows())
            .growth_rows(gdppc::growth_rows())
            .adjustment_rows(vec![AdjustmentRow { hierid: region("USA.1.1"), gdppc_ratio: Some(ratio) }])
            .build()
            .unwrap();
        let coarse = p.iso_timeseries(&iso("USA"));
        let fine = p.timeseries(&region("USA.1.1")).unwrap();
        for (c, f) in coarse.values().iter().zip(fine.values()) {
            let (c, f) = (c.known().unwrap(), f.known().unwrap());
            prop_assert!((f - c * ratio).abs() <= 1e-9 * (c * ratio).abs());
        }
    }
}
