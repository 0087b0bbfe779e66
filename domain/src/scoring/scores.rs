//! Score record, dimensions and rating bands.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use std::ops::RangeInclusive;

/// One of the seven scoring axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    ProblemClarity,
    MarketPotential,
    Feasibility,
    TechnicalComplexity,
    MonetizationViability,
    TimeToMarket,
    Competition,
}

impl Dimension {
    pub const ALL: [Dimension; 7] = [
        Dimension::ProblemClarity,
        Dimension::MarketPotential,
        Dimension::Feasibility,
        Dimension::TechnicalComplexity,
        Dimension::MonetizationViability,
        Dimension::TimeToMarket,
        Dimension::Competition,
    ];

    /// Wire name (camelCase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::ProblemClarity => "problemClarity",
            Dimension::MarketPotential => "marketPotential",
            Dimension::Feasibility => "feasibility",
            Dimension::TechnicalComplexity => "technicalComplexity",
            Dimension::MonetizationViability => "monetizationViability",
            Dimension::TimeToMarket => "timeToMarket",
            Dimension::Competition => "competition",
        }
    }

    /// Human label, e.g. "Time to Market".
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::ProblemClarity => "Problem Clarity",
            Dimension::MarketPotential => "Market Potential",
            Dimension::Feasibility => "Feasibility",
            Dimension::TechnicalComplexity => "Technical Complexity",
            Dimension::MonetizationViability => "Monetization",
            Dimension::TimeToMarket => "Time to Market",
            Dimension::Competition => "Competition",
        }
    }

    /// Canonical range every stored value is clamped to.
    ///
    /// Additive heuristics start from zero; the baseline heuristics never
    /// drop below one.
    pub fn range(&self) -> RangeInclusive<u8> {
        match self {
            Dimension::ProblemClarity
            | Dimension::MarketPotential
            | Dimension::MonetizationViability => 0..=10,
            Dimension::Feasibility
            | Dimension::TechnicalComplexity
            | Dimension::TimeToMarket
            | Dimension::Competition => 1..=10,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Clamp a raw signed heuristic total into this dimension's range.
    pub fn clamp_score(&self, raw: i32) -> u8 {
        let range = self.range();
        raw.clamp(i32::from(*range.start()), i32::from(*range.end())) as u8
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seven dimension scores. `overall` is always derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    values: [u8; 7],
}

impl Scores {
    /// Build from a per-dimension function; each value is clamped to its range.
    pub fn from_fn(mut f: impl FnMut(Dimension) -> i32) -> Self {
        let mut values = [0u8; 7];
        for dimension in Dimension::ALL {
            values[dimension.index()] = dimension.clamp_score(f(dimension));
        }
        Self { values }
    }

    pub fn get(&self, dimension: Dimension) -> u8 {
        self.values[dimension.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, u8)> + '_ {
        Dimension::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Mean of the seven values rounded to two decimals.
    pub fn overall(&self) -> f64 {
        let sum: u32 = self.values.iter().map(|v| u32::from(*v)).sum();
        let mean = f64::from(sum) / self.values.len() as f64;
        (mean * 100.0).round() / 100.0
    }

    pub fn rating(&self) -> Rating {
        Rating::from_overall(self.overall())
    }

    /// Dimensions scoring strictly below `threshold`, in dimension order.
    pub fn below(&self, threshold: u8) -> Vec<Dimension> {
        self.iter()
            .filter(|(_, v)| *v < threshold)
            .map(|(d, _)| d)
            .collect()
    }
}

impl Serialize for Scores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        for (dimension, value) in self.iter() {
            map.serialize_entry(dimension.as_str(), &value)?;
        }
        map.serialize_entry("overall", &self.overall())?;
        map.end()
    }
}

/// Verbal band for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Rating {
    Excellent,
    Good,
    Average,
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
}

impl Rating {
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 8.0 {
            Rating::Excellent
        } else if overall >= 6.0 {
            Rating::Good
        } else if overall >= 4.0 {
            Rating::Average
        } else if overall >= 2.0 {
            Rating::Poor
        } else {
            Rating::VeryPoor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Average => "Average",
            Rating::Poor => "Poor",
            Rating::VeryPoor => "Very Poor",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
