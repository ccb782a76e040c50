//! Rating tiers: an ordered, contiguous partition of the supported rating
//! range into named, colored bands.

use thiserror::Error;

use crate::constants::{MAX_SUPPORTED_RATING, MIN_SUPPORTED_RATING};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub low: i64,
    pub high: i64,
    pub name: String,
    pub color: u32,
}

impl Tier {
    pub fn new(low: i64, high: i64, name: &str, color: u32) -> Self {
        Self {
            low,
            high,
            name: name.to_string(),
            color,
        }
    }

    pub fn contains(&self, rating: i64) -> bool {
        (self.low..=self.high).contains(&rating)
    }

    /// Name of the platform role carrying this tier's color.
    pub fn role_name(&self) -> String {
        format!("Rating {}-{}", self.low, self.high)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TierError {
    #[error("tier table is empty")]
    Empty,
    #[error("tier '{name}' has low bound {low} above high bound {high}")]
    InvertedBand { name: String, low: i64, high: i64 },
    #[error("tier '{name}' starts at {found}, expected {expected}")]
    NotContiguous {
        name: String,
        expected: i64,
        found: i64,
    },
    #[error("tiers cover {low}..={high}, expected {expected_low}..={expected_high}")]
    IncompleteCoverage {
        low: i64,
        high: i64,
        expected_low: i64,
        expected_high: i64,
    },
}

#[derive(Debug, Clone)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Validates that `tiers` are ordered, non-overlapping and cover
    /// `MIN_SUPPORTED_RATING..=MAX_SUPPORTED_RATING` without gaps.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, TierError> {
        let (first, last) = match (tiers.first(), tiers.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(TierError::Empty),
        };

        for tier in &tiers {
            if tier.low > tier.high {
                return Err(TierError::InvertedBand {
                    name: tier.name.clone(),
                    low: tier.low,
                    high: tier.high,
                });
            }
        }

        for pair in tiers.windows(2) {
            let expected = pair[0].high + 1;
            if pair[1].low != expected {
                return Err(TierError::NotContiguous {
                    name: pair[1].name.clone(),
                    expected,
                    found: pair[1].low,
                });
            }
        }

        if first.low != MIN_SUPPORTED_RATING || last.high != MAX_SUPPORTED_RATING {
            return Err(TierError::IncompleteCoverage {
                low: first.low,
                high: last.high,
                expected_low: MIN_SUPPORTED_RATING,
                expected_high: MAX_SUPPORTED_RATING,
            });
        }

        Ok(Self { tiers })
    }

    /// The judge's color bands.
    pub fn codeforces() -> Result<Self, TierError> {
        Self::new(vec![
            Tier::new(0, 1199, "Gray", 0xCCCCCC),
            Tier::new(1200, 1399, "Green", 0x77FF77),
            Tier::new(1400, 1599, "Cyan", 0x03A89E),
            Tier::new(1600, 1899, "Blue", 0xAAAAFF),
            Tier::new(1900, 2099, "Violet", 0x000A0A),
            Tier::new(2100, 2399, "Orange", 0xFF8C00),
            Tier::new(2400, 9999, "Red", 0xFF0000),
        ])
    }

    pub fn tier_for(&self, rating: i64) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.contains(rating))
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }
}
