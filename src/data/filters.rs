//! User-drawn filters on a (variable, time step) pair.

use serde::{Deserialize, Serialize};

use crate::data::trajectories::Trajectory;

/// A value constraint on one variable at one time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    pub name: String,
    #[serde(rename = "timePeriod")]
    pub time_period: usize,
    /// `[lower, upper]` in variable units.
    pub extent: [f64; 2],
}

impl Filter {
    pub fn new(name: impl Into<String>, time_period: usize, extent: [f64; 2]) -> Self {
        let [a, b] = extent;
        Self {
            name: name.into(),
            time_period,
            extent: [a.min(b), a.max(b)],
        }
    }

    pub fn matches(&self, name: &str, time_period: usize) -> bool {
        self.name == name && self.time_period == time_period
    }

    /// Whether the trajectory's value at this filter's time step lies inside
    /// the extent. Trajectories that end earlier or lack the variable fail.
    pub fn admits(&self, trajectory: &Trajectory) -> bool {
        trajectory
            .value_at(&self.name, self.time_period)
            .is_some_and(|v| v >= self.extent[0] && v <= self.extent[1])
    }
}

/// Ordered collection of active filters.
#[derive(Debug, Clone, Default)]
pub struct FilterRegistry {
    active: Vec<Filter>,
}

impl FilterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter, replacing any existing one on the same (variable, time step).
    pub fn add_filter(&mut self, filter: Filter) {
        if let Some(existing) = self
            .active
            .iter_mut()
            .find(|f| f.matches(&filter.name, filter.time_period))
        {
            *existing = filter;
        } else {
            self.active.push(filter);
        }
    }

    /// Remove the filter on (variable, time step). Returns whether one existed.
    pub fn remove_filter(&mut self, name: &str, time_period: usize) -> bool {
        let before = self.active.len();
        self.active.retain(|f| !f.matches(name, time_period));
        before != self.active.len()
    }

    pub fn find(&self, name: &str, time_period: usize) -> Option<&Filter> {
        self.active.iter().find(|f| f.matches(name, time_period))
    }

    pub fn for_variable<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Filter> + 'a {
        self.active.iter().filter(move |f| f.name == name)
    }

    pub fn active_filters(&self) -> &[Filter] {
        &self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    /// Trajectories admitted by every active filter.
    pub fn eligible(&self, trajectories: &[Trajectory]) -> Vec<Trajectory> {
        trajectories
            .iter()
            .filter(|t| self.active.iter().all(|f| f.admits(t)))
            .cloned()
            .collect()
    }
}
