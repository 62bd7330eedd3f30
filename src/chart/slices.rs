//! Per-time-step slice selector regions.

use crate::data::scale::LinearScale;

/// Invisible clickable region covering one time step's horizontal slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceRegion {
    pub time_step: usize,
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl SliceRegion {
    pub fn contains(&self, pos: [f64; 2]) -> bool {
        pos[0] >= self.x && pos[0] < self.x + self.width && pos[1] >= 0.0 && pos[1] <= self.height
    }
}

/// Regions for `count` time steps. Each region starts at `x(step)` and is one
/// pixel narrower than its share of the plot width, leaving a gap between
/// neighbours.
pub fn slice_regions(count: usize, x: &LinearScale, width: f64, height: f64) -> Vec<SliceRegion> {
    if count == 0 {
        return Vec::new();
    }
    let slot = (width / count as f64 - 1.0).max(0.0);
    (0..count)
        .map(|time_step| SliceRegion {
            time_step,
            x: x.map(time_step as f64),
            width: slot,
            height,
        })
        .collect()
}
