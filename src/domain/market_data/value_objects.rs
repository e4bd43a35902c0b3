use derive_more::{Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::num::NonZeroU32;

/// Value Object - provider identifier, stable per asset and used as the row key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Value Object - rank assigned by the provider; ties are possible upstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketCapRank(NonZeroU32);

impl MarketCapRank {
    pub fn new(rank: u32) -> Option<Self> {
        NonZeroU32::new(rank).map(Self)
    }

    pub fn value(&self) -> u32 {
        self.0.get()
    }
}

/// Value Object - non-negative quantity in the quote currency (USD)
#[derive(Debug, Clone, Copy, PartialEq, Into, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct UsdAmount(f64);

impl UsdAmount {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for UsdAmount {
    type Error = String;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(format!("amount must be a non-negative number, got {value}"))
        }
    }
}

impl PartialOrd for UsdAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Circulating-independent total supply. `Unknown` is what the provider
/// reports (by omission or `null`) for uncapped or undefined supply.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Option<f64>", into = "Option<f64>")]
pub enum TotalSupply {
    Known(f64),
    #[default]
    Unknown,
}

impl TotalSupply {
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Known(amount) => Some(*amount),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl TryFrom<Option<f64>> for TotalSupply {
    type Error = String;

    fn try_from(value: Option<f64>) -> Result<Self, Self::Error> {
        match value {
            None => Ok(Self::Unknown),
            Some(amount) if amount.is_finite() && amount >= 0.0 => Ok(Self::Known(amount)),
            Some(amount) => Err(format!("total supply must be a non-negative number, got {amount}")),
        }
    }
}

impl From<TotalSupply> for Option<f64> {
    fn from(value: TotalSupply) -> Self {
        value.value()
    }
}
