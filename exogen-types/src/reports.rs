//! Report envelopes produced by batch helpers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ExogenError;
use crate::key::RegionId;
use crate::value::Series;

/// Summary of a multi-region batch run.
///
/// Successful regions land in `series`; a failed region never aborts the
/// batch and is reported in `warnings` instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BatchReport {
    /// Derived series keyed by region, in region order.
    pub series: BTreeMap<RegionId, Series>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<ExogenError>,
}

impl BatchReport {
    /// True when every requested region produced a series.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}
