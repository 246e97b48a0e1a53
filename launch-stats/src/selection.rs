use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel value selecting every launch site at once.
pub const ALL_SITES: &str = "ALL";

/// The launch-site filter chosen by the user: either the `ALL`
/// sentinel or one specific site identifier. Filtering is a plain
/// string comparison against the record's site, so adding a site to
/// the dataset requires no code changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelector {
    All,
    Site(String),
}

impl From<String> for SiteSelector {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelector::All
        } else {
            SiteSelector::Site(value)
        }
    }
}

impl From<&str> for SiteSelector {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<SiteSelector> for String {
    fn from(value: SiteSelector) -> Self {
        match value {
            SiteSelector::All => ALL_SITES.to_string(),
            SiteSelector::Site(site) => site,
        }
    }
}

impl SiteSelector {
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelector::All => true,
            SiteSelector::Site(site) => site == launch_site,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidRangeError {
    #[error("payload range bounds must be finite, got [{low}, {high}]")]
    NonFinite { low: f64, high: f64 },
    #[error("payload range low bound {low} exceeds high bound {high}")]
    Inverted { low: f64, high: f64 },
}

/// Inclusive `[low, high]` bound on payload mass, validated once at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self, InvalidRangeError> {
        if !low.is_finite() || !high.is_finite() {
            return Err(InvalidRangeError::NonFinite { low, high });
        }
        if low > high {
            return Err(InvalidRangeError::Inverted { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}
