use std::sync::Arc;
use std::time::Duration;

use exogen::{
    BatchBuilder, EconomicProvider, ExogenError, Horizon, RegionId, SpaceProvider,
};
use exogen_mock::{MockProvider, fixtures::gdppc};

fn region(s: &str) -> RegionId {
    s.parse().unwrap()
}

fn mock() -> (Arc<MockProvider>, Arc<dyn SpaceProvider>) {
    let m = Arc::new(MockProvider::new(Horizon::new(2010, 2020)));
    let p: Arc<dyn SpaceProvider> = m.clone();
    (m, p)
}

#[test]
fn duplicate_regions_are_rejected() {
    let (_m, p) = mock();
    let dup = BatchBuilder::new(Arc::clone(&p)).regions(&[region("ZWE"), region("USA"), region("ZWE")]);
    assert!(matches!(dup, Err(ExogenError::InvalidArg(_))));

    let added = BatchBuilder::new(p)
        .add_region(region("ZWE.1.1"))
        .unwrap()
        .add_region(region("ZWE.1.1"));
    assert!(matches!(added, Err(ExogenError::InvalidArg(_))));
}

#[tokio::test]
async fn empty_batch_is_an_error() {
    let (_m, p) = mock();
    let err = BatchBuilder::new(p).run().await.unwrap_err();
    assert!(matches!(err, ExogenError::InvalidArg(_)));
}

#[tokio::test]
async fn partial_failures_become_warnings() {
    let (m, p) = mock();
    let report = BatchBuilder::new(p)
        .regions(&[region("ZWE.1.1"), region("ERR.2"), region("USA")])
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(report.series.len(), 2);
    assert!(report.series.contains_key(&region("USA")));
    assert_eq!(report.warnings.len(), 1);
    assert!(matches!(report.warnings[0], ExogenError::Other(_)));
    assert!(!report.is_complete());
    assert_eq!(m.calls(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn deadline_elapses_as_request_timeout() {
    let (_m, p) = mock();
    let err = BatchBuilder::new(p)
        .add_region(region("SLO.1"))
        .unwrap()
        .timeout(Duration::from_millis(20))
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, ExogenError::RequestTimeout { .. }));
}

#[tokio::test]
async fn batch_matches_direct_queries() {
    let provider = Arc::new(
        EconomicProvider::builder()
            .model("low")
            .scenario("SSP3")
            .horizon(Horizon::new(2010, 2030))
            .baseline_rows(gdppc::baseline_rows())
            .growth_rows(gdppc::growth_rows())
            .adjustment_rows(gdppc::adjustment_rows())
            .build()
            .unwrap(),
    );
    let regions = [region("ZWE.1.1"), region("ZWE.1.3"), region("FRA"), region("ABC")];
    let report = BatchBuilder::new(provider.clone())
        .regions(&regions)
        .unwrap()
        .timeout(Duration::from_secs(5))
        .run()
        .await
        .unwrap();

    assert!(report.is_complete());
    for r in &regions {
        assert_eq!(&report.series[r], provider.timeseries(r).unwrap().as_ref());
    }
}
