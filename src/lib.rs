//! Countries library exports for testing

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub mod core;
pub mod network;
pub mod tui;

#[cfg(test)]
pub mod test_support;

/// Region filter applied to the country list. `All` matches everything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionFilter {
    #[default]
    All,
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
    Antarctic,
    Polar,
}

impl RegionFilter {
    pub const ALL: [RegionFilter; 8] = [
        RegionFilter::All,
        RegionFilter::Africa,
        RegionFilter::Americas,
        RegionFilter::Asia,
        RegionFilter::Europe,
        RegionFilter::Oceania,
        RegionFilter::Antarctic,
        RegionFilter::Polar,
    ];

    /// The region name as the API spells it (also the display label).
    pub fn label(self) -> &'static str {
        match self {
            RegionFilter::All => "All",
            RegionFilter::Africa => "Africa",
            RegionFilter::Americas => "Americas",
            RegionFilter::Asia => "Asia",
            RegionFilter::Europe => "Europe",
            RegionFilter::Oceania => "Oceania",
            RegionFilter::Antarctic => "Antarctic",
            RegionFilter::Polar => "Polar",
        }
    }

    /// Cycles to the next region (wraps around)
    pub fn next(self) -> RegionFilter {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Cycles to the previous region (wraps around)
    pub fn prev(self) -> RegionFilter {
        let idx = Self::ALL.iter().position(|r| *r == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// True if a country's region passes this filter (case-insensitive).
    pub fn matches(self, region: Option<&str>) -> bool {
        match self {
            RegionFilter::All => true,
            _ => region.is_some_and(|r| r.to_lowercase() == self.label().to_lowercase()),
        }
    }
}
