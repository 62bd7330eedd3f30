//! Filter boundary marks.

use crate::data::filters::{Filter, FilterRegistry};
use crate::data::scale::LinearScale;

/// Which end of a filter's extent a mark represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Lower,
    Upper,
}

/// A horizontal mark at one filter boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterMark {
    pub name: String,
    pub time_period: usize,
    pub boundary: Boundary,
    pub value: f64,
    /// Pixel x of the left end, `x(time_period - 0.5)`.
    pub x0: f64,
    /// Pixel x of the right end, `x(time_period + 0.5)`.
    pub x1: f64,
    /// Pixel y, `y(value)`.
    pub y: f64,
}

impl FilterMark {
    fn new(filter: &Filter, boundary: Boundary, x: &LinearScale, y: &LinearScale) -> Self {
        let value = match boundary {
            Boundary::Lower => filter.extent[0],
            Boundary::Upper => filter.extent[1],
        };
        let t = filter.time_period as f64;
        Self {
            name: filter.name.clone(),
            time_period: filter.time_period,
            boundary,
            value,
            x0: x.map(t - 0.5),
            x1: x.map(t + 0.5),
            y: y.map(value),
        }
    }

    /// Recompute pixel coordinates for new scales.
    pub fn layout(&mut self, x: &LinearScale, y: &LinearScale) {
        let t = self.time_period as f64;
        self.x0 = x.map(t - 0.5);
        self.x1 = x.map(t + 0.5);
        self.y = y.map(self.value);
    }

    /// Pointer hits the mark if it is within the horizontal span and within
    /// `tolerance` pixels vertically.
    pub fn hit(&self, pos: [f64; 2], tolerance: f64) -> bool {
        let (lo, hi) = (self.x0.min(self.x1), self.x0.max(self.x1));
        pos[0] >= lo && pos[0] <= hi && (pos[1] - self.y).abs() <= tolerance
    }
}

/// Marks for every filter on `variable`: lower then upper boundary.
pub fn filter_marks(
    filters: &FilterRegistry,
    variable: &str,
    x: &LinearScale,
    y: &LinearScale,
) -> Vec<FilterMark> {
    filters
        .for_variable(variable)
        .flat_map(|f| {
            [Boundary::Lower, Boundary::Upper]
                .into_iter()
                .map(move |b| FilterMark::new(f, b, x, y))
        })
        .collect()
}
