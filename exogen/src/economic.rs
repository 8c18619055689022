use std::collections::BTreeMap;
use std::sync::Arc;

use exogen_core::{
    Adjustment, AdjustmentRow, BaselineRow, EconomicConfig, ExogenError, GrowthPoint, GrowthRow,
    Horizon, IsoCode, KeyIndex, RegionId, Series, SeriesAttribution, SpaceProvider, Tier, TierSet,
    Value, build_series, growth_at, median, median_by_key,
};
use exogen_middleware::Memo;

/// Factor applied when a region's adjustment ratio is undefined or zero.
pub const DEGENERATE_ADJUSTMENT: f64 = 0.8;

/// Country-level series with the tiers that produced it.
#[derive(Clone)]
struct Coarse {
    series: Arc<Series>,
    baseline: Tier,
    growth: Tier,
}

#[derive(Clone)]
struct Derived {
    series: Arc<Series>,
    attribution: SeriesAttribution,
}

/// GDP-per-capita provider.
///
/// Country series compound a baseline with per-period growth factors, each
/// resolved through model-specific, cross-model median, and global tiers.
/// Sub-national series scale the country series by a nightlight ratio.
///
/// All tables are partitioned once in [`EconomicBuilder::build`]; queries
/// only read them. Country and region series are memoized separately.
pub struct EconomicProvider {
    cfg: EconomicConfig,
    baseline: TierSet<IsoCode, f64>,
    growth: TierSet<IsoCode, GrowthPoint>,
    adjustments: BTreeMap<RegionId, Option<f64>>,
    coarse: Memo<IsoCode, Coarse>,
    derived: Memo<RegionId, Derived>,
}

/// Builder for an [`EconomicProvider`].
pub struct EconomicBuilder {
    model: Option<String>,
    scenario: Option<String>,
    horizon: Horizon,
    baseline: Vec<BaselineRow>,
    growth: Vec<GrowthRow>,
    adjustments: Vec<AdjustmentRow>,
}

impl Default for EconomicBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EconomicBuilder {
    /// Empty builder over the default horizon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            model: None,
            scenario: None,
            horizon: Horizon::default(),
            baseline: Vec::new(),
            growth: Vec::new(),
            adjustments: Vec::new(),
        }
    }

    /// Take model, scenario, and horizon from a config.
    #[must_use]
    pub fn config(mut self, cfg: EconomicConfig) -> Self {
        self.model = Some(cfg.model);
        self.scenario = Some(cfg.scenario);
        self.horizon = cfg.horizon;
        self
    }

    /// Active model (e.g. "low").
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Active scenario (e.g. "SSP3").
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

    /// Baseline table rows.
    #[must_use]
    pub fn baseline_rows(mut self, rows: Vec<BaselineRow>) -> Self {
        self.baseline = rows;
        self
    }

    /// Growth table rows.
    #[must_use]
    pub fn growth_rows(mut self, rows: Vec<GrowthRow>) -> Self {
        self.growth = rows;
        self
    }

    /// Adjustment table rows. Optional; without them every region uses its
    /// country series unchanged.
    #[must_use]
    pub fn adjustment_rows(mut self, rows: Vec<AdjustmentRow>) -> Self {
        self.adjustments = rows;
        self
    }

    /// Partition the tables and build the provider.
    ///
    /// # Errors
    /// - `InvalidArg` if the model or scenario is unset, or the horizon is invalid.
    /// - `NoData` if the scenario has no baseline rows in the start year, or the
    ///   model has no growth rows under the scenario.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "exogen::economic::build",
            skip(self),
            fields(model = ?self.model, scenario = ?self.scenario),
        )
    )]
    pub fn build(self) -> Result<EconomicProvider, ExogenError> {
        let model = self
            .model
            .ok_or_else(|| ExogenError::InvalidArg("model is required".into()))?;
        let scenario = self
            .scenario
            .ok_or_else(|| ExogenError::InvalidArg("scenario is required".into()))?;
        self.horizon.validate()?;

        let baseline = partition_baseline(&self.baseline, &model, &scenario, &self.horizon)?;
        let growth = partition_growth(&self.growth, &model, &scenario, &self.horizon)?;

        let mut adjustments = BTreeMap::new();
        for row in self.adjustments {
            adjustments.entry(row.hierid).or_insert(row.gdppc_ratio);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            baseline_isos = baseline.model().len(),
            growth_isos = growth.model().len(),
            adjustments = adjustments.len(),
            "partitioned economic tables"
        );

        Ok(EconomicProvider {
            cfg: EconomicConfig {
                model,
                scenario,
                horizon: self.horizon,
            },
            baseline,
            growth,
            adjustments,
            coarse: Memo::unbounded(),
            derived: Memo::unbounded(),
        })
    }
}

fn partition_baseline(
    rows: &[BaselineRow],
    model: &str,
    scenario: &str,
    horizon: &Horizon,
) -> Result<TierSet<IsoCode, f64>, ExogenError> {
    let selected: Vec<&BaselineRow> = rows
        .iter()
        .filter(|r| r.scenario == scenario && r.year == horizon.start_year)
        .collect();
    if selected.is_empty() {
        return Err(ExogenError::no_data(format!(
            "baseline for {scenario} in {}",
            horizon.start_year
        )));
    }

    // An undefined model row still claims its key; it resolves to Missing.
    let mut by_iso: BTreeMap<IsoCode, Vec<f64>> = BTreeMap::new();
    for r in selected.iter().filter(|r| r.model == model) {
        by_iso.entry(r.iso.clone()).or_default().push(r.value);
    }
    let specific: KeyIndex<IsoCode, f64> = by_iso
        .into_iter()
        .map(|(iso, values)| (iso, median(values).unwrap_or(f64::NAN)))
        .collect();
    let any_model: KeyIndex<IsoCode, f64> =
        median_by_key(selected.iter().map(|r| (r.iso.clone(), r.value)))
            .into_iter()
            .collect();
    let global: Vec<f64> = median(selected.iter().map(|r| r.value)).into_iter().collect();

    Ok(TierSet::new(specific, any_model, global))
}

fn partition_growth(
    rows: &[GrowthRow],
    model: &str,
    scenario: &str,
    horizon: &Horizon,
) -> Result<TierSet<IsoCode, GrowthPoint>, ExogenError> {
    let selected: Vec<&GrowthRow> = rows.iter().filter(|r| r.scenario == scenario).collect();
    let point = |year: i32, growth: f64| GrowthPoint {
        period: horizon.period_of(year),
        growth,
    };

    let mut specific: KeyIndex<IsoCode, GrowthPoint> = selected
        .iter()
        .filter(|r| r.model == model)
        .map(|r| (r.iso.clone(), point(r.year, r.growth)))
        .collect();
    specific.sort_rows_by_key(|p| p.period);

    // BTreeMap order is (iso, year), so each iso's rows come out by period.
    let any_model: KeyIndex<IsoCode, GrowthPoint> =
        median_by_key(selected.iter().map(|r| ((r.iso.clone(), r.year), r.growth)))
            .into_iter()
            .map(|((iso, year), g)| (iso, point(year, g)))
            .collect();

    let global: Vec<GrowthPoint> = median_by_key(
        selected
            .iter()
            .filter(|r| r.model == model)
            .map(|r| (r.year, r.growth)),
    )
    .into_iter()
    .map(|(year, g)| point(year, g))
    .collect();
    if global.is_empty() {
        return Err(ExogenError::no_data(format!(
            "growth for model {model} under {scenario}"
        )));
    }

    Ok(TierSet::new(specific, any_model, global))
}

impl EconomicProvider {
    /// Start building a provider.
    #[must_use]
    pub fn builder() -> EconomicBuilder {
        EconomicBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &EconomicConfig {
        &self.cfg
    }

    /// Active model.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.cfg.model
    }

    /// Country-level series for `iso`, before any regional adjustment.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "exogen::economic::iso_timeseries", skip_all, fields(iso = %iso))
    )]
    pub fn iso_timeseries(&self, iso: &IsoCode) -> Arc<Series> {
        self.coarse_for(iso).series
    }

    /// Region series together with the tiers and adjustment that produced it.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "exogen::economic::timeseries_with_attribution",
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

    fn coarse_for(&self, iso: &IsoCode) -> Coarse {
        self.coarse
            .get_or_insert_with(iso.clone(), || self.compound(iso))
    }

    fn compound(&self, iso: &IsoCode) -> Coarse {
        let b = self.baseline.resolve(iso);
        let g = self.growth.resolve(iso);

        #[cfg(feature = "tracing")]
        if b.tier != Tier::Model || g.tier != Tier::Model {
            tracing::debug!(iso = %iso, baseline = %b.tier, growth = %g.tier, "fell back from model tier");
        }

        let baseline = Value::from_option(b.first().copied());
        let series = build_series(baseline, &self.cfg.horizon, |p| growth_at(g.rows, p));

        #[cfg(feature = "tracing")]
        if let Some(year) = series.first_missing_year() {
            tracing::warn!(iso = %iso, year, "series has missing values");
        }

        Coarse {
            series: Arc::new(series),
            baseline: b.tier,
            growth: g.tier,
        }
    }

    fn derive(&self, region: &RegionId) -> Derived {
        let coarse = self.coarse_for(region.iso());
        let (series, adjustment) = match self.adjustments.get(region) {
            None => (coarse.series, Adjustment::Unadjusted),
            Some(ratio) => {
                let adjustment = match *ratio {
                    Some(r) if !r.is_nan() && r != 0.0 => Adjustment::Ratio(r),
                    _ => Adjustment::Degenerate(DEGENERATE_ADJUSTMENT),
                };
                let factor = match adjustment {
                    Adjustment::Ratio(f) | Adjustment::Degenerate(f) => f,
                    Adjustment::Unadjusted | Adjustment::NotApplicable => 1.0,
                };
                (Arc::new(coarse.series.scaled(factor)), adjustment)
            }
        };
        Derived {
            series,
            attribution: SeriesAttribution {
                region: region.clone(),
                baseline: coarse.baseline,
                growth: coarse.growth,
                adjustment,
            },
        }
    }
}

impl SpaceProvider for EconomicProvider {
    fn name(&self) -> &'static str {
        "economic"
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
