use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use exogen_core::{BatchReport, ExogenError, RegionId, Series, SpaceProvider};

/// Builder to derive series for many regions concurrently.
///
/// Each region is derived on Tokio's blocking pool, since providers are
/// synchronous and may compound long series on first access.
pub struct BatchBuilder {
    provider: Arc<dyn SpaceProvider>,
    regions: Vec<RegionId>,
    timeout: Option<Duration>,
}

impl BatchBuilder {
    /// Create a builder over `provider` with no regions and no deadline.
    #[must_use]
    pub fn new(provider: Arc<dyn SpaceProvider>) -> Self {
        Self {
            provider,
            regions: Vec::new(),
            timeout: None,
        }
    }

    /// Replace the region list.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `regions` contains duplicates.
    pub fn regions(mut self, regions: &[RegionId]) -> Result<Self, ExogenError> {
        let mut seen = HashSet::new();
        for r in regions {
            if !seen.insert(r) {
                return Err(ExogenError::InvalidArg(format!(
                    "duplicate region '{r}' in regions list"
                )));
            }
        }
        self.regions = regions.to_vec();
        Ok(self)
    }

    /// Append one region.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the region is already in the list.
    pub fn add_region(mut self, region: RegionId) -> Result<Self, ExogenError> {
        if self.regions.contains(&region) {
            return Err(ExogenError::InvalidArg(format!(
                "duplicate region '{region}' already exists in regions list"
            )));
        }
        self.regions.push(region);
        Ok(self)
    }

    /// Deadline for the whole batch.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Derive every region and collect the results.
    ///
    /// Regions whose derivation fails are reported in `warnings` without
    /// aborting the batch.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no regions were given, or `RequestTimeout` if
    /// the deadline elapses before every region finishes.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "exogen::batch::run",
            skip(self),
            fields(provider = self.provider.name(), regions = self.regions.len()),
        )
    )]
    pub async fn run(self) -> Result<BatchReport, ExogenError> {
        if self.regions.is_empty() {
            return Err(ExogenError::InvalidArg("no regions specified for batch".into()));
        }

        let tasks = self.regions.into_iter().map(|region| {
            let provider = Arc::clone(&self.provider);
            async move {
                let key = region.clone();
                let joined =
                    tokio::task::spawn_blocking(move || provider.timeseries(&key)).await;
                let result = joined.unwrap_or_else(|e| {
                    Err(ExogenError::Other(format!("derivation task for {region} failed: {e}")))
                });
                (region, result)
            }
        });

        let joined: Vec<(RegionId, Result<Arc<Series>, ExogenError>)> =
            if let Some(deadline) = self.timeout {
                match tokio::time::timeout(deadline, futures::future::join_all(tasks)).await {
                    Ok(v) => v,
                    Err(_) => return Err(ExogenError::request_timeout("batch:timeseries")),
                }
            } else {
                futures::future::join_all(tasks).await
            };

        let mut report = BatchReport::default();
        for (region, result) in joined {
            match result {
                Ok(series) => {
                    report.series.insert(region, Arc::unwrap_or_clone(series));
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(region = %region, error = %e, "region failed in batch");
                    report.warnings.push(e);
                }
            }
        }
        Ok(report)
    }
}
