use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the exogen workspace.
///
/// Construction-time problems (bad keys, malformed records, absent
/// scenarios or models, invalid horizons) surface as errors. Missing data
/// discovered while compounding a series does not: it is carried in the
/// series itself as [`Value::Missing`](crate::Value::Missing).
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExogenError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A region or ISO identifier failed validation.
    #[error("invalid key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key as supplied by the caller.
        key: String,
        /// Why the key was rejected.
        reason: String,
    },

    /// An input table could not be read into typed rows.
    #[error("table '{table}' is malformed: {msg}")]
    Table {
        /// Logical table name (e.g. "baseline", "growth").
        table: String,
        /// Human-readable parse or schema message.
        msg: String,
    },

    /// No rows exist for the requested scenario/model in any tier.
    #[error("no data: {what}")]
    NoData {
        /// Description of the missing selection, e.g. "baseline for SSP3 in 2010".
        what: String,
    },

    /// A point-in-time query fell after the last year of the series.
    #[error("year {year} outside series range {start_year}..={stop_year}")]
    OutOfRange {
        /// Requested year.
        year: i32,
        /// First year of the series.
        start_year: i32,
        /// Last year of the series.
        stop_year: i32,
    },

    /// The overall request exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Label of the operation that timed out.
        capability: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl ExogenError {
    /// Helper: build an `InvalidKey` error.
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `Table` error for a named input table.
    pub fn table(table: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Table {
            table: table.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NoData` error for a description of the empty selection.
    pub fn no_data(what: impl Into<String>) -> Self {
        Self::NoData { what: what.into() }
    }

    /// Helper: build a `RequestTimeout` error.
    #[must_use]
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }

    /// Returns true if this error indicates unusable caller input rather than
    /// a runtime condition.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArg(_) | Self::InvalidKey { .. } | Self::Table { .. } | Self::NoData { .. }
        )
    }
}
