//! Sample trajectories as delivered by the trajectory provider.
//!
//! The chart never filters or mutates trajectories; it only reads the sets
//! handed to it through [`TrajectorySets`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One observation of a simulated sample path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    #[serde(rename = "Pathway Number")]
    pub pathway_number: i64,
    #[serde(rename = "Event Number", default)]
    pub event_number: u32,
    /// Variable values keyed by variable name.
    #[serde(flatten)]
    pub values: HashMap<String, f64>,
}

impl StateSnapshot {
    pub fn new(pathway_number: i64, event_number: u32) -> Self {
        Self {
            pathway_number,
            event_number,
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

/// Ordered observations of one sample path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    pub steps: Vec<StateSnapshot>,
}

impl Trajectory {
    pub fn new(steps: Vec<StateSnapshot>) -> Self {
        Self { steps }
    }

    /// Path identifier used for stable line coloring.
    pub fn path_id(&self) -> Option<i64> {
        self.steps.first().map(|s| s.pathway_number)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `(time step, value)` pairs for a variable, skipping steps where the
    /// variable is absent.
    pub fn values_of<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (usize, f64)> + 'a {
        self.steps
            .iter()
            .enumerate()
            .filter_map(move |(i, s)| s.value(name).map(|v| (i, v)))
    }

    /// The value of a variable at one time step.
    pub fn value_at(&self, name: &str, time_step: usize) -> Option<f64> {
        self.steps.get(time_step).and_then(|s| s.value(name))
    }
}

/// The trajectory collections a chart reads, passed explicitly with each
/// operation.
#[derive(Debug, Clone, Default)]
pub struct TrajectorySets {
    /// Primary trajectories passing every active filter; rendered as lines.
    pub filtered_primary: Vec<Trajectory>,
    /// Primary trajectories handed to slice detail views.
    pub eligible_primary: Vec<Trajectory>,
    /// Secondary (comparator) trajectories for detail views in comparison mode.
    pub eligible_secondary: Vec<Trajectory>,
}

impl TrajectorySets {
    /// Sets where the filtered and eligible primary collections coincide.
    pub fn primary(trajectories: Vec<Trajectory>) -> Self {
        Self {
            filtered_primary: trajectories.clone(),
            eligible_primary: trajectories,
            eligible_secondary: Vec::new(),
        }
    }

    pub fn with_secondary(mut self, secondary: Vec<Trajectory>) -> Self {
        self.eligible_secondary = secondary;
        self
    }
}
