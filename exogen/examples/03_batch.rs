mod common;
use std::sync::Arc;
use std::time::Duration;

use exogen::{BatchBuilder, Horizon, RegionId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_tracing();
    let provider = Arc::new(common::gdppc_provider(Horizon::default())?);

    let regions: Vec<RegionId> = ["ZWE.1.1", "ZWE.1.3", "USA.5.221", "FRA", "ZWE"]
        .into_iter()
        .map(str::parse::<RegionId>)
        .collect::<Result<_, _>>()?;

    let report = BatchBuilder::new(provider)
        .regions(&regions)?
        .timeout(Duration::from_secs(10))
        .run()
        .await?;

    for (region, series) in &report.series {
        let last = series.last().and_then(exogen::Value::known);
        println!("{region}: {} years, {} -> {last:?}", series.len(), series.stop_year());
    }

    if !report.warnings.is_empty() {
        eprintln!("warnings:");
        for w in report.warnings {
            eprintln!("- {w}");
        }
    }
    Ok(())
}
