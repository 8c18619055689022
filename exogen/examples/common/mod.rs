#![allow(dead_code)]

use exogen::{EconomicProvider, ExogenError, Horizon};
use exogen_mock::fixtures::gdppc;

/// Install a human-friendly subscriber. Suggested: `RUST_LOG=exogen=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();
}

/// GDP-per-capita provider over the fixture tables.
pub fn gdppc_provider(horizon: Horizon) -> Result<EconomicProvider, ExogenError> {
    EconomicProvider::builder()
        .model("low")
        .scenario("SSP3")
        .horizon(horizon)
        .baseline_rows(gdppc::baseline_rows())
        .growth_rows(gdppc::growth_rows())
        .adjustment_rows(gdppc::adjustment_rows())
        .build()
}
