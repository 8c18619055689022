mod common;
use exogen::{Horizon, RegionId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let provider = common::gdppc_provider(Horizon::new(2010, 2050))?;

    for id in ["ZWE.1.1", "ZWE.1.2", "FRA", "ABC.4"] {
        let region: RegionId = id.parse()?;
        let (series, attr) = provider.timeseries_with_attribution(&region);
        println!(
            "{region}: baseline={} growth={} adjustment={:?}",
            attr.baseline, attr.growth, attr.adjustment
        );
        for (year, v) in series.iter().step_by(10) {
            match v.known() {
                Some(x) => println!("  {year}: {x:.2}"),
                None => println!("  {year}: missing"),
            }
        }
    }
    Ok(())
}
