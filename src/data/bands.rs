//! Percentile band geometry.
//!
//! Every band is produced by the same function, [`band_geometry`], driven by
//! the list of pairs in [`PERCENTILE_PAIRS`]. Per time step the band follows
//! three rules:
//!
//! 1. A missing upper (or lower) value means no trajectory of full length
//!    reaches this step. The point is pinned to the previous step's x and
//!    collapses to zero height, so nothing is extrapolated past the last
//!    populated step.
//! 2. Equal upper and lower values push the upper edge down by a fixed pixel
//!    nudge so the band stays visible as a thin stroke.
//! 3. Otherwise the band spans `[y(lower), y(upper)]` at `x(step)`.
//!
//! All coordinates are pixels relative to the plot area's top-left corner.

use crate::data::percentiles::{PercentilePair, PercentileRecord, PERCENTILE_PAIRS};
use crate::data::scale::LinearScale;
use crate::data::transition::Interpolate;

/// Default vertical nudge (pixels) applied to zero-spread bands.
pub const DEGENERATE_NUDGE_PX: f64 = 2.0;

/// One vertical slice of a band in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPoint {
    pub x: f64,
    /// Pixel y of the upper percentile edge.
    pub upper: f64,
    /// Pixel y of the lower percentile edge.
    pub lower: f64,
}

impl BandPoint {
    /// Visual height in pixels.
    pub fn height(&self) -> f64 {
        (self.lower - self.upper).abs()
    }
}

/// The drawable outline of one percentile pair across the time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BandGeometry {
    pub pair: PercentilePair,
    pub points: Vec<BandPoint>,
}

/// Compute the band point for one record.
///
/// `previous` is the point generated for the preceding record, used as the
/// resting place of a collapsed point.
pub fn band_point(
    record: &PercentileRecord,
    pair: PercentilePair,
    x: &LinearScale,
    y: &LinearScale,
    nudge: f64,
    previous: Option<&BandPoint>,
) -> BandPoint {
    let step = f64::from(record.event_number);
    match (record.get(pair.upper), record.get(pair.lower)) {
        (Some(upper), Some(lower)) => {
            let lower_px = y.map(lower);
            let upper_px = if upper == lower {
                y.map(upper) + nudge
            } else {
                y.map(upper)
            };
            BandPoint {
                x: x.map(step),
                upper: upper_px,
                lower: lower_px,
            }
        }
        _ => {
            let rest = previous.map_or(y.range[0], |p| p.lower);
            BandPoint {
                x: x.map(step - 1.0),
                upper: rest,
                lower: rest,
            }
        }
    }
}

/// Band outline of `pair` across the whole series.
pub fn band_geometry(
    series: &[PercentileRecord],
    pair: PercentilePair,
    x: &LinearScale,
    y: &LinearScale,
    nudge: f64,
) -> BandGeometry {
    let mut points: Vec<BandPoint> = Vec::with_capacity(series.len());
    for record in series {
        let point = band_point(record, pair, x, y, nudge, points.last());
        points.push(point);
    }
    BandGeometry { pair, points }
}

/// Outlines for every pair in [`PERCENTILE_PAIRS`], outermost first.
pub fn fan_geometry(
    series: &[PercentileRecord],
    x: &LinearScale,
    y: &LinearScale,
    nudge: f64,
) -> Vec<BandGeometry> {
    PERCENTILE_PAIRS
        .iter()
        .map(|pair| band_geometry(series, *pair, x, y, nudge))
        .collect()
}

impl Interpolate for BandPoint {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        Self {
            x: self.x.interpolate(&other.x, t),
            upper: self.upper.interpolate(&other.upper, t),
            lower: self.lower.interpolate(&other.lower, t),
        }
    }
}

/// Outlines of different lengths are blended by padding the shorter one with
/// its last point, so a growing series unfolds from its old end.
impl Interpolate for Vec<BandPoint> {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        let Some(pad_from) = self.last().copied() else {
            return other.clone();
        };
        let Some(pad_to) = other.last().copied() else {
            return Vec::new();
        };
        let len = self.len().max(other.len());
        let blended: Vec<BandPoint> = (0..len)
            .map(|i| {
                let a = self.get(i).copied().unwrap_or(pad_from);
                let b = other.get(i).copied().unwrap_or(pad_to);
                a.interpolate(&b, t)
            })
            .collect();
        if t >= 1.0 {
            other.clone()
        } else {
            blended
        }
    }
}
