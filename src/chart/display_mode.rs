//! Bands/lines display mode and the trajectory line handles.

use egui::Color32;

use crate::controllers::StateQuery;
use crate::data::scale::LinearScale;
use crate::data::trace_look::{path_color, CATEGORY20};
use crate::data::trajectories::Trajectory;

/// What the chart draws for the primary series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Percentile band areas; trajectory lines hidden.
    Bands,
    /// One line per filtered trajectory; band areas hidden.
    Lines,
}

impl DisplayMode {
    /// Mode of a newly constructed chart.
    pub fn initial(eligible_trajectories: usize, lines_by_default: usize) -> Self {
        if eligible_trajectories <= lines_by_default {
            DisplayMode::Lines
        } else {
            DisplayMode::Bands
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Bands => DisplayMode::Lines,
            DisplayMode::Lines => DisplayMode::Bands,
        }
    }
}

impl std::fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayMode::Bands => write!(f, "bands"),
            DisplayMode::Lines => write!(f, "lines"),
        }
    }
}

/// One rendered trajectory line, owned by the chart.
#[derive(Debug, Clone)]
pub struct LineHandle {
    pub path_id: Option<i64>,
    pub color: Color32,
    /// `(time step, value)` samples of the chart's variable.
    values: Vec<(usize, f64)>,
    /// State query for each sample, aligned with `values`.
    queries: Vec<StateQuery>,
    /// Pixel vertices, aligned with `values`.
    points: Vec<[f64; 2]>,
}

impl LineHandle {
    /// Line of `variable` along `trajectory`.
    pub fn new(trajectory: &Trajectory, variable: &str, x: &LinearScale, y: &LinearScale) -> Self {
        let path_id = trajectory.path_id();
        let mut values = Vec::with_capacity(trajectory.len());
        let mut queries = Vec::with_capacity(trajectory.len());
        for (step, snapshot) in trajectory.steps.iter().enumerate() {
            if let Some(v) = snapshot.value(variable) {
                values.push((step, v));
                queries.push(StateQuery::for_snapshot(snapshot));
            }
        }
        let mut handle = Self {
            path_id,
            color: path_id.map_or(CATEGORY20[0], path_color),
            values,
            queries,
            points: Vec::new(),
        };
        handle.layout(x, y);
        handle
    }

    /// Recompute pixel vertices for new scales.
    pub fn layout(&mut self, x: &LinearScale, y: &LinearScale) {
        self.points = self
            .values
            .iter()
            .map(|&(step, v)| [x.map(step as f64), y.map(v)])
            .collect();
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Distance in pixels from `pos` to the polyline.
    pub fn distance_to(&self, pos: [f64; 2]) -> f64 {
        match self.points.as_slice() {
            [] => f64::INFINITY,
            [only] => distance(pos, *only),
            pts => pts
                .windows(2)
                .map(|w| distance_to_segment(pos, w[0], w[1]))
                .fold(f64::INFINITY, f64::min),
        }
    }

    /// State query for the sample closest to `pos` horizontally.
    pub fn nearest_query(&self, pos: [f64; 2]) -> Option<StateQuery> {
        self.points
            .iter()
            .zip(&self.queries)
            .min_by(|(a, _), (b, _)| (a[0] - pos[0]).abs().total_cmp(&(b[0] - pos[0]).abs()))
            .map(|(_, q)| *q)
    }
}

fn distance(a: [f64; 2], b: [f64; 2]) -> f64 {
    (a[0] - b[0]).hypot(a[1] - b[1])
}

fn distance_to_segment(p: [f64; 2], a: [f64; 2], b: [f64; 2]) -> f64 {
    let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
    let len_sq = dx * dx + dy * dy;
    if len_sq == 0.0 {
        return distance(p, a);
    }
    let t = (((p[0] - a[0]) * dx + (p[1] - a[1]) * dy) / len_sq).clamp(0.0, 1.0);
    distance(p, [a[0] + t * dx, a[1] + t * dy])
}
