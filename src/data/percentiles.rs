//! Percentile records and series as delivered by the statistics provider.
//!
//! A [`PercentileRecord`] carries one value per percentile in the fixed
//! symmetric set {0, 10, …, 100} for a single time step. Values may be
//! missing for time steps past the end of the shortest surviving trajectory;
//! those deserialize to `None`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FanPlotError;

/// One of the eleven percentiles carried by a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Percentile(u8);

impl Percentile {
    pub const P0: Self = Self(0);
    pub const P10: Self = Self(10);
    pub const P20: Self = Self(20);
    pub const P30: Self = Self(30);
    pub const P40: Self = Self(40);
    pub const P50: Self = Self(50);
    pub const P60: Self = Self(60);
    pub const P70: Self = Self(70);
    pub const P80: Self = Self(80);
    pub const P90: Self = Self(90);
    pub const P100: Self = Self(100);

    /// All percentiles in ascending order.
    pub const ALL: [Self; 11] = [
        Self::P0,
        Self::P10,
        Self::P20,
        Self::P30,
        Self::P40,
        Self::P50,
        Self::P60,
        Self::P70,
        Self::P80,
        Self::P90,
        Self::P100,
    ];

    /// Build a percentile from its numeric value. Only multiples of ten in
    /// `0..=100` are valid.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 100 && value % 10 == 0).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The mirrored percentile, `100 - p`.
    pub fn mirror(self) -> Self {
        Self(100 - self.0)
    }

    /// Field label used by the statistics provider (`percentile90`, …).
    pub fn label(self) -> String {
        format!("percentile{}", self.0)
    }

    fn slot(self) -> usize {
        usize::from(self.0 / 10)
    }
}

impl std::fmt::Display for Percentile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// A symmetric percentile pair rendered as one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PercentilePair {
    pub upper: Percentile,
    pub lower: Percentile,
}

impl PercentilePair {
    pub const fn new(upper: Percentile, lower: Percentile) -> Self {
        Self { upper, lower }
    }
}

/// Bands drawn by a fan chart, outermost first.
pub const PERCENTILE_PAIRS: [PercentilePair; 5] = [
    PercentilePair::new(Percentile::P100, Percentile::P0),
    PercentilePair::new(Percentile::P90, Percentile::P10),
    PercentilePair::new(Percentile::P80, Percentile::P20),
    PercentilePair::new(Percentile::P70, Percentile::P30),
    PercentilePair::new(Percentile::P60, Percentile::P40),
];

/// Percentile values for a single time step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PercentileRecord {
    #[serde(rename = "eventNumber")]
    pub event_number: u32,
    #[serde(rename = "percentile0", default, skip_serializing_if = "Option::is_none")]
    p0: Option<f64>,
    #[serde(rename = "percentile10", default, skip_serializing_if = "Option::is_none")]
    p10: Option<f64>,
    #[serde(rename = "percentile20", default, skip_serializing_if = "Option::is_none")]
    p20: Option<f64>,
    #[serde(rename = "percentile30", default, skip_serializing_if = "Option::is_none")]
    p30: Option<f64>,
    #[serde(rename = "percentile40", default, skip_serializing_if = "Option::is_none")]
    p40: Option<f64>,
    #[serde(rename = "percentile50", default, skip_serializing_if = "Option::is_none")]
    p50: Option<f64>,
    #[serde(rename = "percentile60", default, skip_serializing_if = "Option::is_none")]
    p60: Option<f64>,
    #[serde(rename = "percentile70", default, skip_serializing_if = "Option::is_none")]
    p70: Option<f64>,
    #[serde(rename = "percentile80", default, skip_serializing_if = "Option::is_none")]
    p80: Option<f64>,
    #[serde(rename = "percentile90", default, skip_serializing_if = "Option::is_none")]
    p90: Option<f64>,
    #[serde(rename = "percentile100", default, skip_serializing_if = "Option::is_none")]
    p100: Option<f64>,
}

impl PercentileRecord {
    /// An empty record for the given time step.
    pub fn new(event_number: u32) -> Self {
        Self {
            event_number,
            ..Default::default()
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, p: Percentile, value: f64) -> Self {
        self.set(p, Some(value));
        self
    }

    pub fn get(&self, p: Percentile) -> Option<f64> {
        *self.slot_ref(p)
    }

    pub fn set(&mut self, p: Percentile, value: Option<f64>) {
        *self.slot_mut(p) = value;
    }

    fn slot_ref(&self, p: Percentile) -> &Option<f64> {
        match p.slot() {
            0 => &self.p0,
            1 => &self.p10,
            2 => &self.p20,
            3 => &self.p30,
            4 => &self.p40,
            5 => &self.p50,
            6 => &self.p60,
            7 => &self.p70,
            8 => &self.p80,
            9 => &self.p90,
            _ => &self.p100,
        }
    }

    fn slot_mut(&mut self, p: Percentile) -> &mut Option<f64> {
        match p.slot() {
            0 => &mut self.p0,
            1 => &mut self.p10,
            2 => &mut self.p20,
            3 => &mut self.p30,
            4 => &mut self.p40,
            5 => &mut self.p50,
            6 => &mut self.p60,
            7 => &mut self.p70,
            8 => &mut self.p80,
            9 => &mut self.p90,
            _ => &mut self.p100,
        }
    }
}

/// Ordered records for one variable, one per time step.
pub type PercentileSeries = Vec<PercentileRecord>;

/// Smallest defined `percentile0` and largest defined `percentile100` of a
/// series. `None` if the series has no defined outer values.
pub fn value_extent(series: &[PercentileRecord]) -> Option<(f64, f64)> {
    let min = series
        .iter()
        .filter_map(|r| r.get(Percentile::P0))
        .fold(f64::INFINITY, f64::min);
    let max = series
        .iter()
        .filter_map(|r| r.get(Percentile::P100))
        .fold(f64::NEG_INFINITY, f64::max);
    (min.is_finite() && max.is_finite()).then_some((min, max))
}

/// Percentile statistics for every variable, replaced wholesale on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub percentiles: HashMap<String, PercentileSeries>,
}

impl Statistics {
    /// Decode statistics from the provider's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, FanPlotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The series for a variable. A missing variable is a caller contract
    /// violation and surfaces as [`FanPlotError::UnknownVariable`].
    pub fn series(&self, name: &str) -> Result<&[PercentileRecord], FanPlotError> {
        let series = self
            .percentiles
            .get(name)
            .ok_or_else(|| FanPlotError::UnknownVariable(name.to_string()))?;
        if series.is_empty() {
            return Err(FanPlotError::EmptySeries(name.to_string()));
        }
        Ok(series)
    }

    pub fn insert(&mut self, name: impl Into<String>, series: PercentileSeries) {
        self.percentiles.insert(name.into(), series);
    }

    /// Variable names in sorted order.
    pub fn variable_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.percentiles.keys().cloned().collect();
        names.sort();
        names
    }
}
