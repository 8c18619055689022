//! Source tiers and per-series attribution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key::RegionId;

/// Data source tier, in priority order (most specific first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Rows reported by the active model for the key.
    Model,
    /// Median across every model reporting the key.
    AnyModel,
    /// Fallback of last resort; not filtered by key.
    Global,
}

impl Tier {
    /// All tiers in resolution order.
    pub const ALL: [Self; 3] = [Self::Model, Self::AnyModel, Self::Global];

    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::AnyModel => "any_model",
            Self::Global => "global",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which sub-national adjustment branch was applied to a coarse series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "ratio")]
pub enum Adjustment {
    /// No adjustment step exists for this provider (e.g. population).
    NotApplicable,
    /// No row for the region; the coarse series is used as-is.
    Unadjusted,
    /// The ratio was undefined or zero; the degenerate constant was applied.
    Degenerate(f64),
    /// The region's own ratio was applied.
    Ratio(f64),
}

/// Attribution of a derived series: which tier supplied each input.
///
/// Useful for debugging fallback decisions and coverage of the reference
/// tables for a given region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesAttribution {
    /// Region the attribution refers to.
    pub region: RegionId,
    /// Tier that supplied the baseline value.
    pub baseline: Tier,
    /// Tier that supplied the growth factors.
    pub growth: Tier,
    /// Adjustment branch taken after compounding.
    pub adjustment: Adjustment,
}
