mod common;
use std::sync::Arc;

use exogen::{DemographicProvider, Horizon, RegionId, SpaceTimeCache};
use exogen_mock::fixtures::population;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let provider = DemographicProvider::builder()
        .scenario("SSP2")
        .horizon(Horizon::new(2010, 2100))
        .region_rows(population::region_rows())
        .scenario_rows(population::ssp_rows())
        .build()?;
    println!("baseline snapshot year: {}", provider.baseline_year());

    let cache = SpaceTimeCache::new(Arc::new(provider));
    let region: RegionId = "ZWE.1.1".parse()?;
    for year in [2000, 2010, 2015, 2033, 2100] {
        println!("{region} {year}: {:?}", cache.value(&region, year)?);
    }
    if let Err(e) = cache.value(&region, 2101) {
        println!("{region} 2101: {e}");
    }
    Ok(())
}
