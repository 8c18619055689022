//! Geographic identifiers at the two supported granularities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExogenError;

/// Coarse, country-level identifier (ISO 3166 alpha-3 style).
///
/// Exactly [`IsoCode::LEN`] ASCII alphanumeric characters. No case folding is
/// applied: the code must match the reference tables byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IsoCode(String);

impl IsoCode {
    /// Length of every coarse key, and of the prefix a [`RegionId`] shares with it.
    pub const LEN: usize = 3;

    /// Validate and wrap a coarse key.
    ///
    /// # Errors
    /// Returns `InvalidKey` when `code` is not exactly three ASCII alphanumerics.
    pub fn new(code: &str) -> Result<Self, ExogenError> {
        if code.len() != Self::LEN || !code.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(ExogenError::invalid_key(
                code,
                "ISO code must be 3 ASCII alphanumeric characters",
            ));
        }
        Ok(Self(code.to_string()))
    }

    /// Borrow the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IsoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for IsoCode {
    type Err = ExogenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for IsoCode {
    type Error = ExogenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<IsoCode> for String {
    fn from(k: IsoCode) -> Self {
        k.0
    }
}

/// Fine, hierarchical region identifier such as `ZWE.2.2`.
///
/// The first [`IsoCode::LEN`] characters always form a valid [`IsoCode`]. A
/// bare ISO code is itself a valid region id and denotes the whole country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionId {
    id: String,
    iso: IsoCode,
}

impl RegionId {
    /// Validate a hierarchical region id.
    ///
    /// # Errors
    /// Returns `InvalidKey` when the id is shorter than an ISO code or its
    /// prefix is not a valid ISO code.
    pub fn new(id: &str) -> Result<Self, ExogenError> {
        let prefix = id
            .get(..IsoCode::LEN)
            .ok_or_else(|| ExogenError::invalid_key(id, "region id shorter than its ISO prefix"))?;
        let iso = IsoCode::new(prefix)
            .map_err(|_| ExogenError::invalid_key(id, "region id prefix is not a valid ISO code"))?;
        Ok(Self {
            id: id.to_string(),
            iso,
        })
    }

    /// The coarse key this region belongs to.
    #[must_use]
    pub const fn iso(&self) -> &IsoCode {
        &self.iso
    }

    /// True when the id names a whole country rather than a sub-national region.
    #[must_use]
    pub fn is_country(&self) -> bool {
        self.id.len() == IsoCode::LEN
    }

    /// Borrow the full id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for RegionId {
    type Err = ExogenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegionId {
    type Error = ExogenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<RegionId> for String {
    fn from(k: RegionId) -> Self {
        k.id
    }
}

impl From<IsoCode> for RegionId {
    fn from(iso: IsoCode) -> Self {
        Self {
            id: iso.0.clone(),
            iso,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_prefix_is_its_iso() {
        let r = RegionId::new("ZWE.2.2").unwrap();
        assert_eq!(r.iso().as_str(), "ZWE");
        assert!(!r.is_country());
        assert!(RegionId::new("ZWE").unwrap().is_country());
    }

    #[test]
    fn rejects_short_or_bad_prefix() {
        assert!(matches!(
            RegionId::new("ZW"),
            Err(ExogenError::InvalidKey { .. })
        ));
        assert!(matches!(
            RegionId::new("Z.E.1"),
            Err(ExogenError::InvalidKey { .. })
        ));
        assert!(IsoCode::new("ZWEX").is_err());
        assert!(IsoCode::new("").is_err());
    }

    #[test]
    fn multibyte_prefix_is_rejected_without_panicking() {
        assert!(RegionId::new("Zé.1").is_err());
    }

    #[test]
    fn iso_converts_to_country_region() {
        let iso = IsoCode::new("USA").unwrap();
        let r = RegionId::from(iso.clone());
        assert_eq!(r.iso(), &iso);
        assert_eq!(r.as_str(), "USA");
    }
}
