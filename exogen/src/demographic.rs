use std::collections::BTreeMap;
use std::sync::Arc;

use exogen_core::{
    Adjustment, DemographicConfig, ExogenError, GrowthPoint, Horizon, IsoCode, KeyIndex, RegionId,
    RegionPopulationRow, ScenarioPopulationRow, Series, SeriesAttribution, SpaceProvider, TierSet,
    Value, build_series, growth_at,
};
use exogen_middleware::Memo;

#[derive(Clone)]
struct Derived {
    series: Arc<Series>,
    attribution: SeriesAttribution,
}

/// Population provider.
///
/// Each region starts from its own downscaled population snapshot and grows
/// with its country's projected population under the active scenario. Between
/// projection years the growth is geometric, so at every period boundary the
/// region's population equals its snapshot times the country's cumulative
/// ratio to the start year.
///
/// Countries without projections do not grow. Regions without a snapshot
/// yield an all-`Missing` series.
pub struct DemographicProvider {
    cfg: DemographicConfig,
    baseline_year: i32,
    baseline: TierSet<RegionId, Value>,
    growth: TierSet<IsoCode, GrowthPoint>,
    derived: Memo<RegionId, Derived>,
}

/// Builder for a [`DemographicProvider`].
pub struct DemographicBuilder {
    scenario: Option<String>,
    horizon: Horizon,
    baseline_year: Option<i32>,
    regions: Vec<RegionPopulationRow>,
    projections: Vec<ScenarioPopulationRow>,
}

impl Default for DemographicBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DemographicBuilder {
    /// Empty builder over the default horizon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scenario: None,
            horizon: Horizon::default(),
            baseline_year: None,
            regions: Vec::new(),
            projections: Vec::new(),
        }
    }

    /// Take scenario, horizon, and baseline year from a config.
    #[must_use]
    pub fn config(mut self, cfg: DemographicConfig) -> Self {
        self.scenario = Some(cfg.scenario);
        self.horizon = cfg.horizon;
        self.baseline_year = cfg.baseline_year;
        self
    }

    /// Active scenario (e.g. "SSP2").
    #[must_use]
    pub fn scenario(mut self, scenario: impl Into<String>) -> Self {
        self.scenario = Some(scenario.into());
        self
    }

    /// Horizon of every derived series.
    #[must_use]
    pub const fn horizon(mut self, horizon: Horizon) -> Self {
        self.horizon = horizon;
        self
    }

    /// Year of the regional snapshot to start from. Defaults to the year of
    /// the first regional row.
    #[must_use]
    pub const fn baseline_year(mut self, year: i32) -> Self {
        self.baseline_year = Some(year);
        self
    }

    /// Regional population snapshots.
    #[must_use]
    pub fn region_rows(mut self, rows: Vec<RegionPopulationRow>) -> Self {
        self.regions = rows;
        self
    }

    /// Country population projections for every scenario.
    #[must_use]
    pub fn scenario_rows(mut self, rows: Vec<ScenarioPopulationRow>) -> Self {
        self.projections = rows;
        self
    }

    /// Partition the tables and build the provider.
    ///
    /// # Errors
    /// - `InvalidArg` if the scenario is unset or the horizon is invalid.
    /// - `NoData` if no projection rows match the scenario, or there are no
    ///   regional rows to take a baseline from.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "exogen::demographic::build",
            skip(self),
            fields(scenario = ?self.scenario),
        )
    )]
    pub fn build(self) -> Result<DemographicProvider, ExogenError> {
        let scenario = self
            .scenario
            .ok_or_else(|| ExogenError::InvalidArg("scenario is required".into()))?;
        self.horizon.validate()?;

        let baseline_year = match self.baseline_year {
            Some(y) => y,
            None => self
                .regions
                .first()
                .map(|r| r.year)
                .ok_or_else(|| ExogenError::no_data("regional population snapshot"))?,
        };

        let mut specific: KeyIndex<RegionId, Value> = KeyIndex::new();
        for row in self.regions.into_iter().filter(|r| r.year == baseline_year) {
            specific.push(row.hierid, Value::from_option(row.pop));
        }
        let baseline = TierSet::new(specific, KeyIndex::new(), vec![Value::Missing]);

        let growth = partition_growth(&self.projections, &scenario, &self.horizon)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            baseline_year,
            regions = baseline.model().len(),
            countries = growth.model().len(),
            "partitioned population tables"
        );

        Ok(DemographicProvider {
            cfg: DemographicConfig {
                scenario,
                horizon: self.horizon,
                baseline_year: Some(baseline_year),
            },
            baseline_year,
            baseline,
            growth,
            derived: Memo::unbounded(),
        })
    }
}

fn partition_growth(
    rows: &[ScenarioPopulationRow],
    scenario: &str,
    horizon: &Horizon,
) -> Result<TierSet<IsoCode, GrowthPoint>, ExogenError> {
    let mut by_iso: BTreeMap<IsoCode, BTreeMap<i32, f64>> = BTreeMap::new();
    for r in rows.iter().filter(|r| r.ssp == scenario) {
        by_iso
            .entry(r.iso.clone())
            .or_default()
            .entry(r.year)
            .or_insert(r.population);
    }
    if by_iso.is_empty() {
        return Err(ExogenError::no_data(format!("population projections for {scenario}")));
    }

    let last = horizon.last_growth_period();
    let mut specific = KeyIndex::new();
    for (iso, pops) in by_iso {
        for point in annual_factors(&pops, horizon, last) {
            specific.push(iso.clone(), point);
        }
    }
    let global = (0..=last)
        .map(|period| GrowthPoint {
            period,
            growth: 1.0,
        })
        .collect();

    Ok(TierSet::new(specific, KeyIndex::new(), global))
}

/// Annual factors per period reproducing the cumulative ratio to the start
/// year at every period boundary.
fn annual_factors(pops: &BTreeMap<i32, f64>, horizon: &Horizon, last: i32) -> Vec<GrowthPoint> {
    let start = pops.get(&horizon.start_year).copied();
    let ratio = |year: i32| -> Option<f64> {
        match start {
            Some(s) => pops.get(&year).map(|p| p / s),
            None => Some(1.0),
        }
    };
    let len = i32::try_from(horizon.period_length).unwrap_or(i32::MAX);
    let exponent = 1.0 / f64::from(horizon.period_length);

    (0..=last)
        .filter_map(|period| {
            let from = period
                .checked_mul(len)
                .and_then(|offset| horizon.start_year.checked_add(offset))?;
            let to = from.checked_add(len)?;
            let (r0, r1) = (ratio(from)?, ratio(to)?);
            Some(GrowthPoint {
                period,
                growth: (r1 / r0).powf(exponent),
            })
        })
        .collect()
}

impl DemographicProvider {
    /// Start building a provider.
    #[must_use]
    pub fn builder() -> DemographicBuilder {
        DemographicBuilder::new()
    }

    /// Active configuration, with the resolved baseline year.
    #[must_use]
    pub const fn config(&self) -> &DemographicConfig {
        &self.cfg
    }

    /// Year of the regional snapshot every series starts from.
    #[must_use]
    pub const fn baseline_year(&self) -> i32 {
        self.baseline_year
    }

    /// Region series together with the tiers that produced it.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "exogen::demographic::timeseries_with_attribution",
            skip_all,
            fields(region = %region),
        )
    )]
    pub fn timeseries_with_attribution(&self, region: &RegionId) -> (Arc<Series>, SeriesAttribution) {
        let d = self
            .derived
            .get_or_insert_with(region.clone(), || self.derive(region));
        (d.series, d.attribution)
    }

    fn derive(&self, region: &RegionId) -> Derived {
        let b = self.baseline.resolve(region);
        let g = self.growth.resolve(region.iso());
        let baseline = b.first().copied().unwrap_or(Value::Missing);

        #[cfg(feature = "tracing")]
        if baseline.is_missing() {
            tracing::warn!(region = %region, year = self.baseline_year, "no population snapshot");
        }

        let series = build_series(baseline, &self.cfg.horizon, |p| growth_at(g.rows, p));
        Derived {
            series: Arc::new(series),
            attribution: SeriesAttribution {
                region: region.clone(),
                baseline: b.tier,
                growth: g.tier,
                adjustment: Adjustment::NotApplicable,
            },
        }
    }
}

impl SpaceProvider for DemographicProvider {
    fn name(&self) -> &'static str {
        "demographic"
    }

    fn scenario(&self) -> &str {
        &self.cfg.scenario
    }

    fn horizon(&self) -> Horizon {
        self.cfg.horizon
    }

    fn timeseries(&self, region: &RegionId) -> Result<Arc<Series>, ExogenError> {
        Ok(self.timeseries_with_attribution(region).0)
    }
}
