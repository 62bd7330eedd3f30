//! Interfaces to the collaborators a fan chart talks to.
//!
//! A chart never reaches into ambient state: the detail-view factory and the
//! state inspector are handed to it through [`crate::chart::ChartContext`]
//! on every call that needs them.
//!
//! [`StateRequestController`] is a ready-made inspector that records the
//! last request and broadcasts it to subscribers, so non-UI code can perform
//! the actual state lookup.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::data::trajectories::{StateSnapshot, Trajectory};

// ─────────────────────────────────────────────────────────────────────────────
// Detail views
// ─────────────────────────────────────────────────────────────────────────────

/// A cross-sectional view of one time step, opened from a slice selector.
pub trait DetailView {
    /// Title shown in the hosting panel.
    fn title(&self) -> String;

    /// Compute the initial (unbrushed) counts.
    fn brush_counts(&mut self);

    /// Initialize the view's brush with an existing filter's extent.
    fn update_brush(&mut self, extent: [f64; 2]);

    /// Drop the brush after its filter was removed.
    fn clear_brush(&mut self) {}

    /// Enter comparison mode against a secondary trajectory set.
    fn intersect_with_second_trajectory_set(&mut self, secondary: &[Trajectory]);

    /// Render the view.
    fn ui(&mut self, ui: &mut egui::Ui);

    /// Release whatever the view holds. Called once when the panel closes it.
    fn destroy(&mut self) {}
}

/// Builds detail views for `(variable name, trajectories, time step)`.
pub trait DetailViewFactory {
    fn create(
        &mut self,
        name: &str,
        trajectories: &[Trajectory],
        time_step: usize,
    ) -> Box<dyn DetailView>;
}

impl<F> DetailViewFactory for F
where
    F: FnMut(&str, &[Trajectory], usize) -> Box<dyn DetailView>,
{
    fn create(
        &mut self,
        name: &str,
        trajectories: &[Trajectory],
        time_step: usize,
    ) -> Box<dyn DetailView> {
        self(name, trajectories, time_step)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// State inspection
// ─────────────────────────────────────────────────────────────────────────────

/// Request for the full state detail of one sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateQuery {
    pub pathway_number: i64,
    pub event_number: u32,
}

impl StateQuery {
    pub fn for_snapshot(snapshot: &StateSnapshot) -> Self {
        Self {
            pathway_number: snapshot.pathway_number,
            event_number: snapshot.event_number,
        }
    }

    /// Query-string pairs understood by a `/state` endpoint.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("Pathway Number".to_string(), self.pathway_number.to_string()),
            ("Event Number".to_string(), self.event_number.to_string()),
        ]
    }
}

/// Receives the single outbound "fetch state detail" request.
pub trait StateInspector {
    fn request_state(&mut self, query: StateQuery);
}

/// Inspector that records requests and broadcasts them to subscribers.
#[derive(Clone, Default)]
pub struct StateRequestController {
    inner: Arc<Mutex<StateRequestInner>>,
}

#[derive(Default)]
struct StateRequestInner {
    last_request: Option<StateQuery>,
    listeners: Vec<Sender<StateQuery>>,
}

impl StateRequestController {
    /// Create a fresh controller.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StateRequestInner> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<StateQuery> {
        self.lock().last_request
    }

    /// Subscribe to requests. The receiver gets every request issued after
    /// subscribing.
    pub fn subscribe(&self) -> Receiver<StateQuery> {
        let (tx, rx) = std::sync::mpsc::channel();
        self.lock().listeners.push(tx);
        rx
    }
}

impl StateInspector for StateRequestController {
    fn request_state(&mut self, query: StateQuery) {
        let mut inner = self.lock();
        inner.last_request = Some(query);
        inner.listeners.retain(|s| s.send(query).is_ok());
        if inner.listeners.is_empty() {
            log::warn!(
                "State request for pathway {} event {} has no listener",
                query.pathway_number,
                query.event_number
            );
        }
    }
}
